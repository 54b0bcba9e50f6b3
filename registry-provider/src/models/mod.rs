mod detail;
mod server;

pub use detail::*;
pub use server::*;

#[cfg(test)]
mod tests {
    use crate::models::*;

    #[test]
    fn des_detail() {
        let s = r#"{
            "id": "b94b5f7e-c7c6-d760-2c78-a5e9b8a5b8c9",
            "name": "io.github.example/filesystem",
            "description": "Secure file operations with configurable access controls",
            "repository": {
                "url": "https://github.com/example/servers",
                "source": "github",
                "id": "190419869"
            },
            "version_detail": {
                "version": "0.0.1-seed",
                "release_date": "2025-05-16T19:13:21Z",
                "is_latest": true
            },
            "packages": [
                {
                    "registry_name": "npm",
                    "name": "@example/server-filesystem",
                    "version": "0.6.2"
                }
            ]
        }"#;
        let d: ServerDetail = serde_json::from_str(s).unwrap();
        assert_eq!(d.id(), "b94b5f7e-c7c6-d760-2c78-a5e9b8a5b8c9");
        assert_eq!(d.server.repository.source, "github");
        assert!(d.server.version_detail.is_latest);
        assert_eq!(d.packages.len(), 1);
        assert_eq!(d.packages[0].registry_name, "npm");
        assert!(d.remotes.is_empty());
    }

    #[test]
    fn des_bare_server_as_detail() {
        let s = r#"{"id": "s1", "name": "alpha"}"#;
        let d: ServerDetail = serde_json::from_str(s).unwrap();
        assert_eq!(d.server.name, "alpha");
        assert_eq!(d.server.description, "");
        assert!(d.packages.is_empty());
    }

    #[test]
    fn ser_server_has_no_packages() {
        let server = Server {
            id: "s1".to_string(),
            name: "alpha".to_string(),
            ..Default::default()
        };
        let v = serde_json::to_value(&server).unwrap();
        assert!(v.get("packages").is_none());
        assert_eq!(v["version_detail"]["is_latest"], false);

        let v = serde_json::to_value(&ServerDetail::from(server)).unwrap();
        assert_eq!(v["name"], "alpha");
        assert_eq!(v["packages"].as_array().map(Vec::len), Some(0));
        assert!(v.get("remotes").is_none());
    }
}
