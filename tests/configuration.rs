//! Tests for configuration system

use mealprep::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.calendar.timezone, "UTC");
    assert_eq!(config.calendar.preview_limit, 3);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.log_format, "pretty");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_loads_from_explicit_file() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("mealprep.toml");
    std::fs::write(
        &path,
        r#"
[calendar]
timezone = "America/New_York"
preview_limit = 5

[observability]
log_format = "json"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_str().unwrap().to_owned())).unwrap();

    assert_eq!(config.calendar.timezone, "America/New_York");
    assert_eq!(config.calendar.preview_limit, 5);
    assert_eq!(config.observability.log_format, "json");
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.to_str().unwrap().to_owned())).unwrap();

    assert_eq!(config.calendar.timezone, "UTC");
    assert_eq!(config.calendar.preview_limit, 3);
}
