use escrutini::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, "sqlite:eleccions.db?mode=rwc");
    assert_eq!(config.database.max_connections, 4);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty database URL should fail
    config.database.url = String::new();
    assert!(config.validate().is_err());

    // Reset and test connection pool bounds
    config.database.url = "sqlite::memory:".to_string();
    config.database.max_connections = 0;
    assert!(config.validate().is_err());
    config.database.max_connections = 64;
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.database.max_connections = 4;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("url = \"sqlite:eleccions.db?mode=rwc\""));
    assert!(toml_str.contains("max_connections = 4"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
url = "sqlite:proves.db"

[logging]
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.database.url, "sqlite:proves.db");
    assert_eq!(config.logging.level, "debug");

    // Check that unspecified values use defaults
    assert_eq!(config.database.max_connections, 4); // default value
    assert!(config.logging.enabled); // default value
}
