use std::{collections::HashSet, sync::Arc};

use log::{debug, warn};
use poem::{
    error::ResponseError,
    http::{Method, StatusCode},
};
use registry_provider::{RegistryError, RegistryService, Server, ServerDetail};
use serde::Serialize;
use thiserror::Error;

/// Page size used to list the registry, large enough to get everything in one call
pub const SEED_EXPORT_PAGE_SIZE: usize = 10000;

/// Upper bound of `list` calls in one export
pub const SEED_EXPORT_MAX_PAGES: usize = 100;

#[derive(Clone, Debug, Error)]
pub enum SeedExportError {
    #[error("Method {0} is not allowed")]
    MethodNotAllowed(Method),

    #[error("Failed to list servers: {0}")]
    UpstreamListFailure(#[source] RegistryError),

    #[error("Failed to encode seed data: {0}")]
    EncodingFailure(String),
}

impl ResponseError for SeedExportError {
    fn status(&self) -> StatusCode {
        match &self {
            SeedExportError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            SeedExportError::UpstreamListFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SeedExportError::EncodingFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/**
 * One element of the seed document.
 * `Degraded` is used when the detail lookup failed, it is encoded as a bare server without `packages`.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SeedEntry {
    Detail(ServerDetail),
    Degraded(Server),
}

impl SeedEntry {
    pub fn id(&self) -> &str {
        match self {
            SeedEntry::Detail(d) => d.id(),
            SeedEntry::Degraded(s) => &s.id,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SeedEntry::Degraded(_))
    }
}

/**
 * Materializes the whole registry as a seed document
 */
#[derive(Clone)]
pub struct SeedExporter {
    registry: Arc<dyn RegistryService>,
    page_size: usize,
    max_pages: usize,
}

impl SeedExporter {
    pub fn new(registry: Arc<dyn RegistryService>) -> Self {
        Self {
            registry,
            page_size: SEED_EXPORT_PAGE_SIZE,
            max_pages: SEED_EXPORT_MAX_PAGES,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /**
     * List every server, following the cursor if the registry has more than one page.
     * Stops at a cursor already seen or after `max_pages` calls.
     */
    async fn list_all(&self) -> Result<Vec<Server>, SeedExportError> {
        let mut servers = vec![];
        let mut seen_cursors = HashSet::new();
        let mut cursor: Option<String> = None;
        for _ in 0..self.max_pages {
            let (page, next) = self
                .registry
                .list(cursor.as_deref(), self.page_size)
                .await
                .map_err(SeedExportError::UpstreamListFailure)?;
            debug!("Listed {} servers for seed export", page.len());
            servers.extend(page);
            match next {
                Some(next) if !next.is_empty() => {
                    if !seen_cursors.insert(next.clone()) {
                        warn!("Registry returned cursor `{}` twice, listing stopped", next);
                        return Ok(servers);
                    }
                    cursor = Some(next)
                }
                _ => return Ok(servers),
            }
        }
        warn!(
            "Listing stopped after {} pages, seed export may be incomplete",
            self.max_pages
        );
        Ok(servers)
    }

    /**
     * Collect seed entries in listing order.
     * A failed detail lookup only degrades that entry, it never fails the export.
     */
    pub async fn collect(&self) -> Result<Vec<SeedEntry>, SeedExportError> {
        let servers = self.list_all().await?;
        let mut seen = HashSet::with_capacity(servers.len());
        let mut entries = Vec::with_capacity(servers.len());
        for server in servers {
            if !seen.insert(server.id.clone()) {
                warn!("Server {} is listed more than once, skipped", server.id);
                continue;
            }
            let entry = match self.registry.get_by_id(&server.id).await {
                Ok(detail) => SeedEntry::Detail(detail),
                Err(e) => {
                    warn!("Error getting server detail for {}: {}", server.id, e);
                    SeedEntry::Degraded(server)
                }
            };
            entries.push(entry);
        }
        Ok(entries)
    }

    /**
     * Encode the whole registry as a JSON array
     */
    pub async fn export(&self) -> Result<Vec<u8>, SeedExportError> {
        let entries = self.collect().await?;
        serde_json::to_vec(&entries).map_err(|e| SeedExportError::EncodingFailure(e.to_string()))
    }
}
