use anyhow::{Result, bail};
use launchdeck_application::PartitionStatus;
use launchdeck_core::launch::{OutcomeCategory, Partition, SortOrder};

use super::AppContext;
use crate::render::{self, Page};

pub async fn run(
    ctx: &AppContext,
    partition: Partition,
    rockets: Vec<String>,
    outcomes: Vec<OutcomeCategory>,
    sort: Option<SortOrder>,
    page: Page,
) -> Result<()> {
    let mut usecase = ctx.usecase(partition);
    usecase.select_partition(partition).await;
    usecase.set_rocket_filter(rockets);
    let view = usecase.set_outcome_filter(outcomes);

    match &view.status {
        PartitionStatus::Ready => {
            print!("{}", render::list_view(&view, sort, page));
            Ok(())
        }
        PartitionStatus::Unavailable(message) => {
            bail!("Could not load {} launches: {}", partition, message)
        }
        PartitionStatus::Loading => bail!("{} launches are still loading", partition),
    }
}
