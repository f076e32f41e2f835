use anyhow::{Result, bail};
use launchdeck_application::DetailView;
use launchdeck_core::launch::Partition;

use super::AppContext;
use crate::render;

pub async fn run(ctx: &AppContext, id: &str) -> Result<()> {
    let mut usecase = ctx.usecase(Partition::Past);
    let detail = usecase.open_detail(id).await;
    if let DetailView::Unavailable { message, .. } = &detail {
        bail!("Could not load launch {}: {}", id, message);
    }
    print!("{}", render::detail_view(&detail));
    Ok(())
}
