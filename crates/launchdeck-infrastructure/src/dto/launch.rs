//! Wire DTOs for the SpaceX GraphQL schema.
//!
//! Every field is optional on the wire; conversion into domain types fills
//! blanks with empty strings and drops list entries that carry no id.

use launchdeck_core::launch::{LaunchDetail, LaunchOutcome, LaunchRecord, Rocket};
use serde::Deserialize;

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RocketDto {
    pub rocket_name: Option<String>,
    pub rocket_type: Option<String>,
}

impl From<RocketDto> for Rocket {
    fn from(dto: RocketDto) -> Self {
        Rocket {
            name: dto.rocket_name.unwrap_or_default(),
            rocket_type: dto.rocket_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LaunchDto {
    pub id: Option<String>,
    pub mission_name: Option<String>,
    pub rocket: Option<RocketDto>,
    pub launch_date_local: Option<String>,
    pub launch_success: Option<bool>,
    #[serde(default)]
    pub details: Option<String>,
}

impl LaunchDto {
    /// Converts into a record, or `None` when the service sent no id.
    pub fn into_record(self) -> Option<LaunchRecord> {
        let id = self.id.clone().filter(|id| !id.is_empty())?;
        Some(self.into_record_with_id(id))
    }

    /// Converts into a detail view; the detail query does not select `id`,
    /// so the requested id is supplied by the caller.
    pub fn into_detail(self, requested_id: &str) -> LaunchDetail {
        let id = self
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| requested_id.to_string());
        let details = self.details.clone();
        LaunchDetail {
            launch: self.into_record_with_id(id),
            details,
        }
    }

    fn into_record_with_id(self, id: String) -> LaunchRecord {
        LaunchRecord {
            id,
            mission_name: self.mission_name.unwrap_or_default(),
            rocket: self.rocket.unwrap_or_default().into(),
            launch_date_local: self.launch_date_local.unwrap_or_default(),
            launch_success: LaunchOutcome::from(self.launch_success),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LaunchesPastData {
    #[serde(rename = "launchesPast", default)]
    pub launches: Vec<Option<LaunchDto>>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchesUpcomingData {
    #[serde(rename = "launchesUpcoming", default)]
    pub launches: Vec<Option<LaunchDto>>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchData {
    pub launch: Option<LaunchDto>,
}

/// Converts a wire list into records, skipping null entries and entries without an id.
pub fn into_records(launches: Vec<Option<LaunchDto>>) -> Vec<LaunchRecord> {
    let total = launches.len();
    let records: Vec<LaunchRecord> = launches
        .into_iter()
        .flatten()
        .filter_map(LaunchDto::into_record)
        .collect();
    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            "Dropped launches without an id from the response"
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_past_response_conversion() {
        let body = json!({
            "data": {
                "launchesPast": [
                    {
                        "id": "109",
                        "mission_name": "Starlink-15 (v1.0)",
                        "rocket": { "rocket_name": "Falcon 9", "rocket_type": "FT" },
                        "launch_date_local": "2020-10-24T11:31:00-04:00",
                        "launch_success": true
                    },
                    {
                        "id": "110",
                        "mission_name": "Crew-1",
                        "rocket": { "rocket_name": null, "rocket_type": "FT" },
                        "launch_date_local": "2020-11-15T19:27:00-05:00",
                        "launch_success": null
                    },
                    null,
                    { "mission_name": "No id" }
                ]
            }
        });

        let response: GraphQlResponse<LaunchesPastData> = serde_json::from_value(body).unwrap();
        assert!(response.errors.is_empty());
        let records = into_records(response.data.unwrap().launches);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rocket.name, "Falcon 9");
        assert_eq!(records[0].launch_success, LaunchOutcome::Success);
        assert_eq!(records[1].rocket.name, "");
        assert_eq!(records[1].launch_success, LaunchOutcome::Unknown);
    }

    #[test]
    fn test_errors_array_is_parsed() {
        let body = json!({
            "data": null,
            "errors": [{ "message": "Cannot query field \"launchesPast\"" }]
        });
        let response: GraphQlResponse<LaunchesPastData> = serde_json::from_value(body).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn test_detail_uses_requested_id() {
        let body = json!({
            "data": {
                "launch": {
                    "mission_name": "FalconSat",
                    "rocket": { "rocket_name": "Falcon 1", "rocket_type": "Merlin A" },
                    "launch_date_local": "2006-03-25T10:30:00+12:00",
                    "launch_success": false,
                    "details": "Engine failure at 33 seconds and loss of vehicle"
                }
            }
        });
        let response: GraphQlResponse<LaunchData> = serde_json::from_value(body).unwrap();
        let detail = response.data.unwrap().launch.unwrap().into_detail("1");

        assert_eq!(detail.launch.id, "1");
        assert_eq!(detail.launch.launch_success, LaunchOutcome::Failure);
        assert_eq!(detail.details_or_na(), "Engine failure at 33 seconds and loss of vehicle");
    }
}
