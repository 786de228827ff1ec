use log_juggler::config::{
    ColorChoice, ConfigError, OutputStyle, default_config, load_config, load_config_from_path,
};
use log_juggler::reader::MalformedPolicy;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_full_config_from_path() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("juggler.toml");
    fs::write(
        &path,
        r#"
[input]
on_malformed = "abort"

[output]
format = "table"
color = "never"

[logging]
level = "debug"
"#,
    )
    .expect("write config");

    let cfg = load_config_from_path(&path).expect("config should load");
    assert_eq!(cfg.input.on_malformed, MalformedPolicy::Abort);
    assert_eq!(cfg.output.format, OutputStyle::Table);
    assert_eq!(cfg.output.color, ColorChoice::Never);
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
}

#[test]
fn test_no_path_yields_defaults() {
    let cfg = load_config(None).expect("defaults");
    assert_eq!(&cfg, default_config());
    assert_eq!(cfg.output.format, OutputStyle::Text);
}

#[test]
fn test_missing_and_invalid_files_are_distinguished() {
    let dir = tempdir().expect("temp dir");

    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_config_from_path(&missing),
        Err(ConfigError::Read { .. })
    ));

    let invalid = dir.path().join("bad.toml");
    fs::write(&invalid, "[output\nformat = ").expect("write config");
    assert!(matches!(
        load_config_from_path(&invalid),
        Err(ConfigError::Parse { .. })
    ));
}
