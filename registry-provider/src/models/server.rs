use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Source code location of a server, `source` tells where `id` comes from, e.g. "github"
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionDetail {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub version: String,
    /// ISO-8601 timestamp, kept as-is
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub release_date: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub is_latest: bool,
}

/// A registry entry as returned by listing.
///
/// `id` is assigned by the registry and is the only stable identity, `name` may repeat.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub repository: Repository,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub version_detail: VersionDetail,
}
