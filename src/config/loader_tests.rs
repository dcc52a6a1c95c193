//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::fs;

#[test]
fn default_config_path_ends_with_app_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains(APP_DIR) && path_str.ends_with("config.toml"),
            "Path should contain '{}' and end with 'config.toml', got: {}",
            APP_DIR,
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_app_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("transcript-stepper.log"),
        "Default log path should end with 'transcript-stepper.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("stepper_test_config.toml");

    let toml_content = r#"
transcript_path = "https://example.com/session.jsonl"
page_title = "Demo session"
theme = "monokai"
highlight = false
scroll_offset = 120
fetch_timeout_secs = 15
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("valid TOML parses")
        .expect("existing file yields Some");

    assert_eq!(
        config.transcript_path.as_deref(),
        Some("https://example.com/session.jsonl")
    );
    assert_eq!(config.page_title.as_deref(), Some("Demo session"));
    assert_eq!(config.theme.as_deref(), Some("monokai"));
    assert_eq!(config.highlight, Some(false));
    assert_eq!(config.scroll_offset, Some(120));
    assert_eq!(config.fetch_timeout_secs, Some(15));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("stepper_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("stepper_test_unknown_key.toml");
    fs::write(&config_path, "follow = true\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_without_file_is_default() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn defaults_match_documented_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.transcript_path, "claude.jsonl");
    assert_eq!(config.theme, "base16-ocean-dark");
    assert!(config.highlight);
    assert_eq!(config.scroll_offset, 80);
    assert_eq!(config.fetch_timeout, None);
    assert_eq!(config.template_path, None);
}

#[test]
fn merge_prefers_file_values() {
    let file = ConfigFile {
        theme: Some("nord".to_string()),
        fetch_timeout_secs: Some(3),
        log_file_path: Some(PathBuf::from("/custom/path/app.log")),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.theme, "nord");
    assert_eq!(resolved.fetch_timeout, Some(Duration::from_secs(3)));
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/app.log"));
    assert_eq!(resolved.transcript_path, DEFAULT_TRANSCRIPT);
}

#[test]
fn env_lookup_overrides_theme_and_transcript() {
    let vars: HashMap<&str, &str> =
        HashMap::from([(THEME_ENV, "dracula"), (TRANSCRIPT_ENV, "other.jsonl")]);

    let config = apply_overrides_from(ResolvedConfig::default(), |key| {
        vars.get(key).map(|v| v.to_string())
    });

    assert_eq!(config.theme, "dracula");
    assert_eq!(config.transcript_path, "other.jsonl");
}

#[test]
fn cli_overrides_win_over_everything() {
    let file = ConfigFile {
        theme: Some("nord".to_string()),
        transcript_path: Some("file.jsonl".to_string()),
        ..ConfigFile::default()
    };
    let with_env = apply_overrides_from(merge_config(Some(file)), |key| {
        (key == THEME_ENV).then(|| "dracula".to_string())
    });

    let config = apply_cli_overrides(
        with_env,
        CliOverrides {
            transcript_path: Some("cli.jsonl".to_string()),
            theme: Some("monokai".to_string()),
            highlight: Some(false),
            ..CliOverrides::default()
        },
    );

    assert_eq!(config.transcript_path, "cli.jsonl");
    assert_eq!(config.theme, "monokai");
    assert!(!config.highlight);
}

#[test]
fn absent_cli_flags_leave_config_alone() {
    let base = merge_config(Some(ConfigFile {
        page_title: Some("Kept".to_string()),
        ..ConfigFile::default()
    }));
    let config = apply_cli_overrides(base.clone(), CliOverrides::default());
    assert_eq!(config, base);
}

#[test]
#[serial(config_env)]
fn precedence_uses_env_config_path() {
    let config_path = env::temp_dir().join("stepper_test_env_config.toml");
    fs::write(&config_path, "page_title = \"From env\"\n").expect("Failed to write test config");

    env::set_var(CONFIG_ENV, &config_path);
    let result = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV);

    let config = result.expect("parses").expect("exists");
    assert_eq!(config.page_title.as_deref(), Some("From env"));

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(config_env)]
fn precedence_prefers_explicit_path_over_env() {
    let explicit = env::temp_dir().join("stepper_test_explicit.toml");
    fs::write(&explicit, "theme = \"nord\"\n").expect("Failed to write test config");

    env::set_var(CONFIG_ENV, "/nonexistent/env/config.toml");
    let result = load_config_with_precedence(Some(explicit.clone()));
    env::remove_var(CONFIG_ENV);

    let config = result.expect("parses").expect("exists");
    assert_eq!(config.theme.as_deref(), Some("nord"));

    fs::remove_file(explicit).ok();
}
