use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::Server;

/// One distributable artifact of a server
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub registry_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub version: String,
}

/// Remote endpoint of a hosted server
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Remote {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub transport_type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
}

/**
 * Server enriched with its packages and remotes.
 * Server fields are flattened, so a bare `Server` document also decodes into a `ServerDetail`
 * with no packages.
 */
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerDetail {
    #[serde(flatten)]
    pub server: Server,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub packages: Vec<Package>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub remotes: Vec<Remote>,
}

impl ServerDetail {
    pub fn new(server: Server, packages: Vec<Package>) -> Self {
        Self {
            server,
            packages,
            remotes: Default::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.server.id
    }

    pub fn name(&self) -> &str {
        &self.server.name
    }
}

impl From<Server> for ServerDetail {
    fn from(server: Server) -> Self {
        Self::new(server, vec![])
    }
}

impl From<ServerDetail> for Server {
    fn from(detail: ServerDetail) -> Self {
        detail.server
    }
}
