use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;
use registry_provider::{Package, RegistryError, RegistryService, Server, ServerDetail};

/**
 * Registry returning canned content, can be told to fail listing or detail lookups
 */
#[derive(Default)]
pub struct MockRegistry {
    pub details: Vec<ServerDetail>,
    pub fail_list: bool,
    pub fail_ids: HashSet<String>,
    pub list_calls: Mutex<Vec<(Option<String>, usize)>>,
    pub detail_calls: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new(details: Vec<ServerDetail>) -> Self {
        Self {
            details,
            ..Default::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Default::default()
        }
    }

    pub fn failing_ids(mut self, ids: &[&str]) -> Self {
        self.fail_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[async_trait]
impl RegistryService for MockRegistry {
    async fn list(
        &self,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<(Vec<Server>, Option<String>), RegistryError> {
        self.list_calls
            .lock()
            .unwrap()
            .push((cursor.map(ToString::to_string), limit));
        if self.fail_list {
            return Err(RegistryError::ExternalStorageError(
                "connection refused".to_string(),
            ));
        }
        Ok((
            self.details.iter().map(|d| d.server.clone()).collect(),
            None,
        ))
    }

    async fn get_by_id(&self, id: &str) -> Result<ServerDetail, RegistryError> {
        self.detail_calls.lock().unwrap().push(id.to_string());
        if self.fail_ids.contains(id) {
            return Err(RegistryError::ExternalStorageError(format!(
                "lookup of {} timed out",
                id
            )));
        }
        self.details
            .iter()
            .find(|d| d.id() == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    async fn publish(&self, _detail: ServerDetail) -> Result<(), RegistryError> {
        Err(RegistryError::ExternalStorageError(
            "read-only registry".to_string(),
        ))
    }
}

pub fn server(id: &str, name: &str) -> Server {
    Server {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Test server {}", name),
        ..Default::default()
    }
}

pub fn detail(id: &str, name: &str, packages: &[&str]) -> ServerDetail {
    ServerDetail::new(
        server(id, name),
        packages
            .iter()
            .map(|p| Package {
                registry_name: "npm".to_string(),
                name: p.to_string(),
                version: "1.0.0".to_string(),
            })
            .collect(),
    )
}
