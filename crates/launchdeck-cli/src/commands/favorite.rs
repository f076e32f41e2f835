use anyhow::{Context, Result, bail};
use colored::Colorize;
use launchdeck_application::PartitionStatus;
use launchdeck_core::launch::Partition;

use super::AppContext;
use crate::render;

/// Fetches `partition` and toggles launch `id` in its favorites.
///
/// A launch that already is a favorite can be removed even when the
/// service is unreachable.
pub async fn toggle(ctx: &AppContext, partition: Partition, id: &str) -> Result<()> {
    let mut usecase = ctx.usecase(partition);
    if !usecase.controller().is_favorite(id) {
        let view = usecase.select_partition(partition).await;
        if let PartitionStatus::Unavailable(message) = &view.status {
            bail!("Could not load {} launches: {}", partition, message);
        }
    }

    let pinned = usecase
        .toggle_favorite_by_id(id)
        .with_context(|| format!("Failed to toggle favorite {}", id))?;
    if pinned {
        println!("{} Added {} to {} favorites", "★".yellow(), id, partition);
    } else {
        println!("Removed {} from {} favorites", id, partition);
    }
    Ok(())
}

/// Prints stored favorites without contacting the service.
pub fn list(ctx: &AppContext, partition: Partition) -> Result<()> {
    let usecase = ctx.usecase(partition);
    let favorites = usecase.controller().favorites();
    if favorites.is_empty() {
        println!("No {} favorites yet.", partition);
    } else {
        print!("{}", render::table(favorites, &[]));
    }
    Ok(())
}
