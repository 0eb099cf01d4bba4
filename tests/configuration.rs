//! Tests for configuration system

use riviera::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_defaults() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.body_limit, 10 * 1024 * 1024);
    assert_eq!(config.email.timeout_secs, 10);
    assert_eq!(config.theme.brand_name, "Riviera Stays");
    assert!(!config.email.contact_address.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("riviera.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 8080

[email]
contact_address = "reservations@azure-villas.test"
timeout_secs = 3

[theme]
brand_name = "Azure Villas"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.email.contact_address, "reservations@azure-villas.test");
    assert_eq!(config.email.timeout_secs, 3);
    assert_eq!(config.theme.brand_name, "Azure Villas");
    // Theme fields missing from the file keep their defaults
    assert_eq!(config.theme.website_url, "https://riviera-stays.com");
}
