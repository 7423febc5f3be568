use std::fs;

use ledgerlink_tools::ToolError;
use ledgerlink_tools::config::{
    ClientConfig, DEFAULT_MINOR_VERSION, DEFAULT_PAGE_SIZE, PRODUCTION_ENDPOINT, PageSize,
    SANDBOX_ENDPOINT,
};
use tempfile::tempdir;

#[test]
fn missing_keys_fall_back_to_defaults() {
    let config = ClientConfig::from_toml("realm_id = \"123145\"").expect("config parsed");

    assert_eq!(config.realm_id, "123145");
    assert_eq!(config.endpoint, PRODUCTION_ENDPOINT);
    assert_eq!(config.minor_version, DEFAULT_MINOR_VERSION);
    assert_eq!(config.page_size.get(), DEFAULT_PAGE_SIZE);
    assert_eq!(config.access_token, None);
    assert_eq!(config.company_segments(), vec!["v3", "company", "123145"]);
}

#[test]
fn config_file_is_loaded() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("ledgerlink.toml");
    fs::write(
        &path,
        format!(
            "endpoint = \"{SANDBOX_ENDPOINT}\"\nrealm_id = \"9130\"\npage_size = 250\ntimeout_secs = 5\n"
        ),
    )
    .expect("config written");

    let config = ClientConfig::from_file(&path).expect("config loaded");

    assert_eq!(config.endpoint, SANDBOX_ENDPOINT);
    assert_eq!(config.page_size, PageSize::new(250).expect("valid page size"));
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn zero_page_size_in_file_is_rejected() {
    let result = ClientConfig::from_toml("page_size = 0");

    assert!(matches!(result, Err(ToolError::Config(_))));
}

#[test]
fn absent_config_file_is_reported() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("missing.toml");

    let result = ClientConfig::from_file(&path);

    assert!(matches!(result, Err(ToolError::MissingInput(p)) if p == path));
}

#[test]
fn builders_override_fields() {
    let config = ClientConfig::new(SANDBOX_ENDPOINT, "77")
        .with_page_size(PageSize::new(20).expect("valid page size"))
        .with_access_token("secret");

    assert_eq!(config.page_size.get(), 20);
    assert_eq!(config.access_token.as_deref(), Some("secret"));
}
