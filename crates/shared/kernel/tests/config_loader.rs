use roster_kernel::config::load_config;
use roster_kernel::prelude::ApiConfig;
use std::fs;

#[test]
fn loads_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 7070\n\n[directory]\nadmin_email = \"ops@email.com\"\n")
        .expect("write config");

    let cfg: ApiConfig = load_config(Some(&path)).expect("config should load");
    assert_eq!(cfg.server.port, 7070);
    assert_eq!(cfg.directory.admin_email, "ops@email.com");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result: Result<ApiConfig, _> = load_config(Some(dir.path().join("absent")));
    assert!(result.is_err());
}
