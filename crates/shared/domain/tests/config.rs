use roster_domain::config::{ApiConfig, DirectoryConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 9000);
    assert!(server.ssl.is_none());

    let directory = DirectoryConfig::default();
    assert_eq!(directory.admin_email, "admin@email.com");
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "directory": { "admin_email": "root@example.org" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.directory.admin_email, "root@example.org");
}

#[test]
fn api_config_tolerates_partial_input() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.directory.admin_email, "admin@email.com");
}
