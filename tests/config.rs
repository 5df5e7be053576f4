use commander::config::Config;
use commander::constants::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert!(!config.database.sqlx_logging);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.database.max_connections = 0;
    assert!(config.validate().is_err());

    config.database.max_connections = 4;
    config.database.url = "postgres://localhost/commands".to_string();
    assert!(config.validate().is_err());

    config.database.url = "sqlite::memory:".to_string();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[database]
url = "sqlite::memory:"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.database.url, "sqlite::memory:");
    assert!(config.logging.enabled);

    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commander.toml");
    std::fs::write(&path, "[database]\nmax_connections = 500\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("max_connections"));
}

#[test]
fn test_generate_config_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Commander Configuration File"));
    assert!(content.contains("[database]"));

    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.database.url, DEFAULT_DATABASE_URL);
}

#[test]
fn test_env_database_url_applies_before_validation() {
    use commander::constants::DATABASE_URL_ENV;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commander.toml");
    std::fs::write(&path, "[database]\nurl = \"postgres://localhost/commands\"\n").unwrap();

    std::env::set_var(DATABASE_URL_ENV, "sqlite::memory:");
    let loaded = Config::load_from(Some(path.as_path()));
    std::env::remove_var(DATABASE_URL_ENV);

    assert_eq!(loaded.unwrap().database.url, "sqlite::memory:");
    assert!(Config::load_from_file(&path).is_err());
}
