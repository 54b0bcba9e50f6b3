use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use log::{debug, info};
use serde_json::{Map, Value};

use crate::{SeedError, ServerDetail};

pub const DEFAULT_SEED_PATH: &str = "data/seed.json";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Check if the seed location is a HTTP(S) URL rather than a local path
pub fn is_remote(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/**
 * Loads seed documents from a local file or a HTTP(S) URL.
 */
#[derive(Clone, Debug)]
pub struct SeedReader {
    default_path: PathBuf,
    timeout: Duration,
    client: reqwest::Client,
}

impl Default for SeedReader {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_SEED_PATH),
            timeout: DEFAULT_FETCH_TIMEOUT,
            client: Default::default(),
        }
    }
}

impl SeedReader {
    pub fn new(default_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            default_path: default_path.into(),
            timeout,
            client: Default::default(),
        }
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /**
     * Read and decode a seed document, empty `path` means the default location
     */
    pub async fn read(&self, path: &str) -> Result<Vec<ServerDetail>, SeedError> {
        let path = self.resolve(path).await?;
        info!("Reading seed file from {}", path);

        let content = if is_remote(&path) {
            self.fetch(&path).await?
        } else {
            tokio::fs::read(&path)
                .await
                .map_err(|source| SeedError::ReadError {
                    path: path.clone(),
                    source,
                })?
        };

        let servers = parse_seed(&content)?;
        info!("Found {} server entries in seed file", servers.len());
        Ok(servers)
    }

    /**
     * Location to read from, empty `path` resolves to the default location if it exists
     */
    pub async fn resolve(&self, path: &str) -> Result<String, SeedError> {
        if path.is_empty() {
            self.resolve_default().await
        } else {
            Ok(path.to_string())
        }
    }

    async fn resolve_default(&self) -> Result<String, SeedError> {
        let path = self.default_path.to_string_lossy().to_string();
        match tokio::fs::metadata(&self.default_path).await {
            Ok(_) => Ok(path),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SeedError::NotFound(path)),
            Err(source) => Err(SeedError::ReadError { path, source }),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SeedError> {
        let fetch_error = |status: Option<u16>, reason: String| SeedError::FetchError {
            url: url.to_string(),
            status,
            reason,
        };

        debug!("Fetching seed from {}, timeout {:?}", url, self.timeout);
        let resp = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| fetch_error(None, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fetch_error(
                Some(status.as_u16()),
                format!("HTTP request failed with status {}", status),
            ));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| fetch_error(Some(status.as_u16()), e.to_string()))?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

/**
 * Read a seed document with the default reader
 */
pub async fn read_seed_file(path: &str) -> Result<Vec<ServerDetail>, SeedError> {
    SeedReader::default().read(path).await
}

/**
 * Decode a seed document, which is a JSON array of `ServerDetail` or bare `Server` objects.
 *
 * Records only come from the typed decode. If it fails, the document is decoded again as a
 * generic array of objects to find out which entry is broken, the error is returned either way.
 */
pub fn parse_seed(content: &[u8]) -> Result<Vec<ServerDetail>, SeedError> {
    let primary = match serde_json::from_slice::<Vec<ServerDetail>>(content) {
        Ok(servers) => return Ok(servers),
        Err(e) => e,
    };

    match serde_json::from_slice::<Vec<Map<String, Value>>>(content) {
        Ok(raw) => {
            let offending = raw.into_iter().enumerate().find_map(|(idx, obj)| {
                serde_json::from_value::<ServerDetail>(Value::Object(obj))
                    .err()
                    .map(|e| (idx, e))
            });
            match offending {
                Some((idx, e)) => Err(SeedError::ParseError {
                    reason: format!("entry #{} is not a valid server: {}", idx, e),
                    entry: Some(idx),
                    fallback: None,
                }),
                None => Err(SeedError::ParseError {
                    reason: primary.to_string(),
                    entry: None,
                    fallback: None,
                }),
            }
        }
        Err(fallback) => Err(SeedError::ParseError {
            reason: primary.to_string(),
            entry: None,
            fallback: Some(fallback.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use crate::*;

    fn sample() -> Vec<ServerDetail> {
        vec![
            ServerDetail::new(
                Server {
                    id: "s1".to_string(),
                    name: "alpha".to_string(),
                    description: "First server".to_string(),
                    repository: Repository {
                        url: "https://github.com/example/alpha".to_string(),
                        source: "github".to_string(),
                        id: "1001".to_string(),
                    },
                    version_detail: VersionDetail {
                        version: "1.0.0".to_string(),
                        release_date: "2025-01-01T00:00:00Z".to_string(),
                        is_latest: true,
                    },
                },
                vec![Package {
                    registry_name: "npm".to_string(),
                    name: "pkg".to_string(),
                    version: "1.0.0".to_string(),
                }],
            ),
            ServerDetail::from(Server {
                id: "s2".to_string(),
                name: "beta".to_string(),
                ..Default::default()
            }),
        ]
    }

    /// Answer exactly one HTTP request with the given status line and body
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            socket.read(&mut buf).await.ok();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}/seed.json", addr)
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote("http://localhost/seed.json"));
        assert!(is_remote("https://example.com/seed.json"));
        assert!(!is_remote("data/seed.json"));
        assert!(!is_remote("/tmp/http://seed.json"));
        assert!(!is_remote("ftp://example.com/seed.json"));
    }

    #[test]
    fn parse_mixed_shapes() {
        let s = r#"[
            {"id": "s1", "name": "alpha", "packages": [{"registry_name": "npm", "name": "pkg", "version": "1.0.0"}]},
            {"id": "s2", "name": "beta", "description": "degraded"}
        ]"#;
        let servers = parse_seed(s.as_bytes()).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].name(), "alpha");
        assert_eq!(servers[0].packages.len(), 1);
        assert_eq!(servers[1].id(), "s2");
        assert!(servers[1].packages.is_empty());
    }

    #[test]
    fn parse_null_fields_as_defaults() {
        let s = r#"[
            {"id": "s1", "name": "alpha", "description": null, "packages": null, "remotes": null},
            {"id": "s2", "name": "beta", "repository": null, "version_detail": {"version": "1.0.0", "release_date": null, "is_latest": null}},
            {"id": "s3", "name": "gamma", "packages": [{"registry_name": "npm", "name": "pkg", "version": null}]}
        ]"#;
        let servers = parse_seed(s.as_bytes()).unwrap();
        assert_eq!(servers.len(), 3);
        assert_eq!(servers[0].server.description, "");
        assert!(servers[0].packages.is_empty());
        assert!(servers[0].remotes.is_empty());
        assert_eq!(servers[1].server.repository, Repository::default());
        assert_eq!(servers[1].server.version_detail.version, "1.0.0");
        assert!(!servers[1].server.version_detail.is_latest);
        assert_eq!(servers[2].packages[0].version, "");
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_seed(b"[]").unwrap().is_empty());
    }

    #[test]
    fn parse_reports_broken_entry() {
        let s = r#"[{"id": "s1", "name": "alpha"}, {"id": "s2", "name": 42}]"#;
        match parse_seed(s.as_bytes()) {
            Err(SeedError::ParseError {
                entry, fallback, ..
            }) => {
                assert_eq!(entry, Some(1));
                assert!(fallback.is_none());
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn parse_reports_both_errors() {
        for s in [r#"{"id": "s1"}"#, "[1, 2, 3]", "not json"] {
            match parse_seed(s.as_bytes()) {
                Err(e @ SeedError::ParseError { .. }) => {
                    assert!(e.to_string().contains("generic decode"), "{}", e);
                    assert!(matches!(
                        e,
                        SeedError::ParseError {
                            entry: None,
                            fallback: Some(_),
                            ..
                        }
                    ));
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn bundled_seed_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/seed.json");
        let servers = read_seed_file(path).await.unwrap();
        assert_eq!(servers.len(), 3);
        assert_eq!(servers[1].packages[0].registry_name, "pypi");
        assert!(servers[2].packages.is_empty());
    }

    #[tokio::test]
    async fn round_trip_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let servers = sample();
        std::fs::write(&path, serde_json::to_vec(&servers).unwrap()).unwrap();

        let loaded = read_seed_file(path.to_str().unwrap()).await.unwrap();
        assert_eq!(loaded, servers);
    }

    #[tokio::test]
    async fn empty_path_reads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, serde_json::to_vec(&sample()).unwrap()).unwrap();

        let reader = SeedReader::new(&path, DEFAULT_FETCH_TIMEOUT);
        assert_eq!(
            reader.resolve("").await.unwrap(),
            path.to_string_lossy().to_string()
        );
        assert_eq!(
            reader.resolve("https://example.com/seed.json").await.unwrap(),
            "https://example.com/seed.json"
        );
        let loaded = reader.read("").await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id(), "s1");
    }

    #[tokio::test]
    async fn missing_default_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reader = SeedReader::new(dir.path().join("data/seed.json"), DEFAULT_FETCH_TIMEOUT);
        assert!(matches!(reader.read("").await, Err(SeedError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_explicit_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.json");
        assert!(matches!(
            read_seed_file(path.to_str().unwrap()).await,
            Err(SeedError::ReadError { .. })
        ));
    }

    #[tokio::test]
    async fn remote_seed() {
        let body = serde_json::to_string(&sample()).unwrap();
        let url = serve_once("200 OK", body).await;
        let loaded = read_seed_file(&url).await.unwrap();
        assert_eq!(loaded, sample());
    }

    #[tokio::test]
    async fn remote_not_found_is_fetch_error() {
        let url = serve_once("404 Not Found", "".to_string()).await;
        match read_seed_file(&url).await {
            Err(SeedError::FetchError { status, .. }) => assert_eq!(status, Some(404)),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_remote_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let reader = SeedReader::new(DEFAULT_SEED_PATH, Duration::from_secs(2));
        match reader.read(&format!("http://{}/seed.json", addr)).await {
            Err(SeedError::FetchError { status, .. }) => assert_eq!(status, None),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
