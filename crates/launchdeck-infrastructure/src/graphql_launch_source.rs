//! GraphQlLaunchSource - LaunchSource backed by the SpaceX GraphQL API.
//!
//! Sends the launch list and launch detail queries as JSON POST requests and
//! maps transport failures, non-success statuses and GraphQL `errors` arrays
//! to `LaunchDeckError::Fetch`.

use async_trait::async_trait;
use launchdeck_core::error::{LaunchDeckError, Result};
use launchdeck_core::launch::{LaunchDetail, LaunchRecord, LaunchSource, Partition};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::{Duration, Instant};

use crate::dto::launch::{
    GraphQlResponse, LaunchData, LaunchesPastData, LaunchesUpcomingData, into_records,
};

pub const DEFAULT_ENDPOINT: &str = "https://spacex-production.up.railway.app/";

const PAST_LAUNCHES_QUERY: &str = r#"
query Launches {
  launchesPast {
    id
    mission_name
    rocket {
      rocket_name
      rocket_type
    }
    launch_date_local
    launch_success
  }
}
"#;

const UPCOMING_LAUNCHES_QUERY: &str = r#"
query GetUpcomingLaunches {
  launchesUpcoming {
    id
    mission_name
    launch_date_local
    rocket {
      rocket_name
      rocket_type
    }
    launch_success
  }
}
"#;

const LAUNCH_DETAILS_QUERY: &str = r#"
query GetLaunchDetails($id: ID!) {
  launch(id: $id) {
    mission_name
    rocket {
      rocket_name
      rocket_type
    }
    launch_date_local
    launch_success
    details
  }
}
"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    variables: Value,
}

/// Launch source talking to a GraphQL endpoint over HTTP.
#[derive(Clone)]
pub struct GraphQlLaunchSource {
    client: Client,
    endpoint: String,
}

impl GraphQlLaunchSource {
    /// Creates a source for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LaunchDeckError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
    ) -> Result<T> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|err| {
                LaunchDeckError::fetch(format!("{} request failed: {}", operation, err))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LaunchDeckError::fetch(format!(
                "{} returned HTTP {}: {}",
                operation,
                status.as_u16(),
                truncate(&body_text, 200)
            )));
        }

        let parsed: GraphQlResponse<T> = response.json().await.map_err(|err| {
            LaunchDeckError::fetch(format!("Failed to parse {} response: {}", operation, err))
        })?;

        tracing::debug!(
            operation,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "GraphQL request completed"
        );

        unwrap_response(operation, parsed)
    }
}

fn unwrap_response<T>(operation: &str, response: GraphQlResponse<T>) -> Result<T> {
    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(LaunchDeckError::fetch(format!(
            "{} failed: {}",
            operation,
            messages.join("; ")
        )));
    }
    response
        .data
        .ok_or_else(|| LaunchDeckError::fetch(format!("{} returned no data", operation)))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[async_trait]
impl LaunchSource for GraphQlLaunchSource {
    async fn fetch_partition(&self, partition: Partition) -> Result<Vec<LaunchRecord>> {
        let launches = match partition {
            Partition::Past => {
                self.execute::<LaunchesPastData>("launchesPast", PAST_LAUNCHES_QUERY, Value::Null)
                    .await?
                    .launches
            }
            Partition::Future => {
                self.execute::<LaunchesUpcomingData>(
                    "launchesUpcoming",
                    UPCOMING_LAUNCHES_QUERY,
                    Value::Null,
                )
                .await?
                .launches
            }
        };

        let records = into_records(launches);
        tracing::info!(partition = %partition, count = records.len(), "Fetched launches");
        Ok(records)
    }

    async fn fetch_detail(&self, id: &str) -> Result<LaunchDetail> {
        let data: LaunchData = self
            .execute("launch", LAUNCH_DETAILS_QUERY, json!({ "id": id }))
            .await?;
        data.launch
            .map(|launch| launch.into_detail(id))
            .ok_or_else(|| LaunchDeckError::not_found("launch", id))
    }
}
