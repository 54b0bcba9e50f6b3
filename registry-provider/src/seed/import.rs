use log::{debug, info, warn};

use crate::{RegistryService, SeedError, SeedReader, ServerDetail};

/// Outcome of publishing a seed into a registry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub total: usize,
    pub published: usize,
    pub failed: usize,
}

/**
 * Publish every record in document order.
 * A record that fails to publish is logged and skipped, the rest are still published.
 */
pub async fn publish_all<R>(registry: &R, servers: Vec<ServerDetail>) -> ImportSummary
where
    R: RegistryService + ?Sized,
{
    let mut summary = ImportSummary {
        total: servers.len(),
        ..Default::default()
    };
    for detail in servers {
        let id = detail.id().to_string();
        let name = detail.name().to_string();
        match registry.publish(detail).await {
            Ok(_) => {
                debug!("Published server `{}`({})", name, id);
                summary.published += 1;
            }
            Err(e) => {
                warn!("Failed to publish server `{}`({}): {}", name, id, e);
                summary.failed += 1;
            }
        }
    }
    info!(
        "Seed import finished, {} published, {} failed",
        summary.published, summary.failed
    );
    summary
}

impl SeedReader {
    /**
     * Read the seed document at `path` and publish its content into `registry`
     */
    pub async fn import<R>(&self, registry: &R, path: &str) -> Result<ImportSummary, SeedError>
    where
        R: RegistryService + ?Sized,
    {
        let servers = self.read(path).await?;
        Ok(publish_all(registry, servers).await)
    }
}

/**
 * Import a seed document with the default reader
 */
pub async fn import_seed<R>(registry: &R, path: &str) -> Result<ImportSummary, SeedError>
where
    R: RegistryService + ?Sized,
{
    SeedReader::default().import(registry, path).await
}
