use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct Repository {
    pub url: String,
    pub source: String,
    pub id: String,
}

impl From<registry_provider::Repository> for Repository {
    fn from(v: registry_provider::Repository) -> Self {
        Self {
            url: v.url,
            source: v.source,
            id: v.id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct VersionDetail {
    pub version: String,
    pub release_date: String,
    pub is_latest: bool,
}

impl From<registry_provider::VersionDetail> for VersionDetail {
    fn from(v: registry_provider::VersionDetail) -> Self {
        Self {
            version: v.version,
            release_date: v.release_date,
            is_latest: v.is_latest,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct Package {
    pub registry_name: String,
    pub name: String,
    pub version: String,
}

impl From<registry_provider::Package> for Package {
    fn from(v: registry_provider::Package) -> Self {
        Self {
            registry_name: v.registry_name,
            name: v.name,
            version: v.version,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct Remote {
    pub transport_type: String,
    pub url: String,
}

impl From<registry_provider::Remote> for Remote {
    fn from(v: registry_provider::Remote) -> Self {
        Self {
            transport_type: v.transport_type,
            url: v.url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub description: String,
    pub repository: Repository,
    pub version_detail: VersionDetail,
}

impl From<registry_provider::Server> for Server {
    fn from(v: registry_provider::Server) -> Self {
        Self {
            id: v.id,
            name: v.name,
            description: v.description,
            repository: v.repository.into(),
            version_detail: v.version_detail.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Object)]
pub struct ServerDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub repository: Repository,
    pub version_detail: VersionDetail,
    pub packages: Vec<Package>,
    #[oai(default, skip_serializing_if_is_empty)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remotes: Vec<Remote>,
}

impl From<registry_provider::ServerDetail> for ServerDetail {
    fn from(v: registry_provider::ServerDetail) -> Self {
        let server = v.server;
        Self {
            id: server.id,
            name: server.name,
            description: server.description,
            repository: server.repository.into(),
            version_detail: server.version_detail.into(),
            packages: v.packages.into_iter().map(|p| p.into()).collect(),
            remotes: v.remotes.into_iter().map(|r| r.into()).collect(),
        }
    }
}
