use std::collections::HashMap;

use log::debug;
use registry_provider::{RegistryError, Server, ServerDetail};
use uuid::Uuid;

/**
 * Server records kept in publish order, indexed by id
 */
#[derive(Debug, Default)]
pub(crate) struct ServerStore {
    pub(crate) servers: Vec<ServerDetail>,

    // Secondary index, server id to position in `servers`
    pub(crate) id_map: HashMap<String, usize>,
}

impl ServerStore {
    pub(crate) fn insert(&mut self, mut detail: ServerDetail) -> Result<String, RegistryError> {
        if detail.server.id.is_empty() {
            detail.server.id = Uuid::new_v4().to_string();
        }
        let id = detail.server.id.clone();
        if self.id_map.contains_key(&id) {
            return Err(RegistryError::ServerIdExists(id));
        }
        debug!("Adding server `{}`({})", detail.server.name, id);
        self.id_map.insert(id.clone(), self.servers.len());
        self.servers.push(detail);
        Ok(id)
    }

    pub(crate) fn get(&self, id: &str) -> Option<&ServerDetail> {
        self.id_map.get(id).and_then(|&idx| self.servers.get(idx))
    }

    /**
     * The cursor is the id of the last server in the previous page
     */
    pub(crate) fn page(
        &self,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<(Vec<Server>, Option<String>), RegistryError> {
        let start = match cursor {
            Some(c) => self
                .id_map
                .get(c)
                .map(|&idx| idx + 1)
                .ok_or_else(|| RegistryError::InvalidCursor(c.to_string()))?,
            None => 0,
        };
        let page: Vec<Server> = self
            .servers
            .iter()
            .skip(start)
            .take(limit)
            .map(|d| d.server.clone())
            .collect();
        let next_cursor = if start + page.len() < self.servers.len() {
            page.last().map(|s| s.id.clone())
        } else {
            None
        };
        Ok((page, next_cursor))
    }
}
