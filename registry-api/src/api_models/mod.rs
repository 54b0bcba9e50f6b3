use poem_openapi::Object;
use serde::{Deserialize, Serialize};

mod server;

pub use server::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct Metadata {
    #[oai(skip_serializing_if_is_none)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct ServerList {
    pub servers: Vec<Server>,
    pub metadata: Metadata,
}

impl ServerList {
    pub fn new(servers: Vec<registry_provider::Server>, next_cursor: Option<String>) -> Self {
        Self {
            metadata: Metadata {
                next_cursor,
                count: servers.len(),
            },
            servers: servers.into_iter().map(|s| s.into()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct HealthResponse {
    pub status: String,
}
