use commander::config::Config;
use commander::logger;

#[test]
fn test_default_log_file_path() {
    if let Some(path) = logger::get_log_file_path() {
        assert!(path.ends_with("commander/commander.log"));
    }
}

#[test]
fn test_configured_log_file_wins() {
    let mut config = Config::default();
    config.logging.file = Some("/tmp/elsewhere.log".into());
    assert_eq!(
        logger::resolve_log_file(&config).unwrap(),
        std::path::PathBuf::from("/tmp/elsewhere.log")
    );
}

#[test]
fn test_enabled_logging_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("commander.log");

    let mut config = Config::default();
    config.logging.enabled = true;
    config.logging.level = "debug".to_string();
    config.logging.file = Some(path.clone());

    assert!(logger::build_dispatch(&config).is_ok());
    assert!(path.exists());
}

#[test]
fn test_invalid_level_is_rejected_only_when_enabled() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(logger::build_dispatch(&config).is_ok());

    let dir = tempfile::tempdir().unwrap();
    config.logging.enabled = true;
    config.logging.file = Some(dir.path().join("commander.log"));
    assert!(logger::build_dispatch(&config).is_err());
}
