//! Merchant feed generation command.

use std::path::Path;

use anyhow::Context;
use matjar_catalog::{render_feed, FeedChannel, Storefront};
use matjar_core::AppConfig;

/// Fetch the catalog and write its Merchant feed to `out` (or stdout).
///
/// Unlike the interactive views, a missing catalog is an error here: writing
/// an empty feed would delist every product.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, rendering fails, or the
/// output file cannot be written.
pub(crate) async fn run_feed(config: &AppConfig, out: Option<&Path>) -> anyhow::Result<()> {
    let storefront = Storefront::from_config(config)?;
    let products = storefront.loader().load().await?;

    let channel = FeedChannel::matjar(&config.store_base_url);
    let feed = render_feed(&channel, &products, chrono::Utc::now())?;

    match out {
        Some(path) => {
            std::fs::write(path, &feed.xml)
                .with_context(|| format!("failed to write feed to {}", path.display()))?;
            println!(
                "wrote {} items to {} ({} skipped without a price)",
                feed.item_count,
                path.display(),
                feed.skipped
            );
        }
        None => println!("{}", feed.xml),
    }

    tracing::info!(
        items = feed.item_count,
        skipped = feed.skipped,
        "merchant feed generated"
    );

    Ok(())
}
