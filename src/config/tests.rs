use super::*;
use tempfile::{tempdir, TempDir};
use std::fs::File;
use std::io::Write;

/// Helper function to create a test configuration file
fn create_test_config_file(dir: &TempDir, content: &str) -> PathBuf {
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    let mut file = File::create(&config_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    config_path
}

fn sample_config() -> Config {
    Config {
        database_url: "original.db".to_string(),
        seed_count: 100,
        max_user_attempts: 10,
        retry_backoff_ms: 250,
        prompt_delay_ms: 1500,
    }
}

fn args(database_url: Option<&str>) -> CliArgs {
    CliArgs {
        database_url: database_url.map(str::to_string),
        user_input: false,
        debug: false,
    }
}

/// Tests for Config::apply_update
#[test]
fn test_apply_update_with_all_values() {
    let update = ConfigUpdate {
        database_url: Some("updated.db".to_string()),
        seed_count: Some(5),
        max_user_attempts: Some(2),
        retry_backoff_ms: Some(0),
        prompt_delay_ms: Some(10),
    };

    let updated = sample_config().apply_update(update);

    assert_eq!(updated.database_url, "updated.db");
    assert_eq!(updated.seed_count, 5);
    assert_eq!(updated.max_user_attempts, 2);
    assert_eq!(updated.retry_backoff_ms, 0);
    assert_eq!(updated.prompt_delay_ms, 10);
}

#[test]
fn test_apply_update_with_partial_values() {
    let update = ConfigUpdate {
        seed_count: Some(3),
        ..ConfigUpdate::default()
    };

    let updated = sample_config().apply_update(update);

    assert_eq!(updated.database_url, "original.db"); // Unchanged
    assert_eq!(updated.seed_count, 3);
    assert_eq!(updated.max_user_attempts, 10); // Unchanged
}

#[test]
fn test_durations() {
    let config = sample_config();
    assert_eq!(config.retry_backoff(), Duration::from_millis(250));
    assert_eq!(config.prompt_delay(), Duration::from_millis(1500));
}

/// Tests for base_config
#[test]
fn test_base_config_defaults() {
    let config = base_config(None);

    assert_eq!(config.database_url, "anythink.db");
    assert_eq!(config.seed_count, 100);
    assert_eq!(config.max_user_attempts, 10);
    assert_eq!(config.retry_backoff_ms, 250);
    assert_eq!(config.prompt_delay_ms, 1500);
}

#[test]
fn test_base_config_with_path() {
    let temp_dir = tempdir().unwrap();
    let config = base_config(Some(temp_dir.path().to_path_buf()));

    let expected_db_path = temp_dir.path().join("anythink.db").to_string_lossy().to_string();
    assert_eq!(config.database_url, expected_db_path);
}

/// Tests for config_from_args
#[test]
fn test_config_from_args_only_sets_database_url() {
    let update = config_from_args(&args(Some("args.db")));

    assert_eq!(update.database_url, Some("args.db".to_string()));
    assert_eq!(update.seed_count, None);
    assert_eq!(update.prompt_delay_ms, None);
}

#[test]
fn test_cli_args_parse_user_input_flag() {
    let parsed = CliArgs::try_parse_from(["anythink-seeds", "--user-input"]).unwrap();
    assert!(parsed.user_input);

    let parsed = CliArgs::try_parse_from(["anythink-seeds"]).unwrap();
    assert!(!parsed.user_input);
}

#[test]
fn test_cli_args_reject_unknown_flag() {
    assert!(CliArgs::try_parse_from(["anythink-seeds", "--seed-forever"]).is_err());
}

/// Tests for config_from_file
#[test]
fn test_config_from_file_with_no_path() {
    let update = config_from_file(None).unwrap();
    assert_eq!(update.database_url, None);
    assert_eq!(update.seed_count, None);
}

#[test]
fn test_config_from_file_with_valid_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = create_test_config_file(&temp_dir, r#"
        database_url = "file.db"
        seed_count = 20
        max_user_attempts = 4
        retry_backoff_ms = 100
        prompt_delay_ms = 0
    "#);

    let result = config_from_file(Some(config_path));

    assert!(result.is_ok(), "Failed to parse config file: {}", result.err().unwrap());
    let update = result.unwrap();
    assert_eq!(update.database_url, Some("file.db".to_string()));
    assert_eq!(update.seed_count, Some(20));
    assert_eq!(update.max_user_attempts, Some(4));
    assert_eq!(update.retry_backoff_ms, Some(100));
    assert_eq!(update.prompt_delay_ms, Some(0));
}

#[test]
fn test_config_from_file_with_partial_values() {
    let temp_dir = tempdir().unwrap();
    let config_path = create_test_config_file(&temp_dir, r#"
        seed_count = 7
        # Intentionally missing other fields
    "#);

    let update = config_from_file(Some(config_path)).unwrap();
    assert_eq!(update.seed_count, Some(7));
    assert_eq!(update.database_url, None);
}

#[test]
fn test_config_from_file_with_invalid_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = create_test_config_file(&temp_dir, r#"
        seed_count = "lots" # Type error
    "#);

    let result = config_from_file(Some(config_path));

    assert!(matches!(result, Err(SeedError::Config(_))));
}

#[test]
fn test_config_from_file_with_nonexistent_file() {
    let temp_dir = tempdir().unwrap();
    let nonexistent_path = temp_dir.path().join("nonexistent_config.toml");

    let update = config_from_file(Some(nonexistent_path)).unwrap();
    assert_eq!(update.database_url, None);
}

/// Tests for merge_config
#[test]
fn test_merge_config_precedence() {
    let file = ConfigUpdate {
        database_url: Some("file.db".to_string()),
        seed_count: Some(50),
        ..ConfigUpdate::default()
    };

    let config = merge_config(base_config(None), file, config_from_args(&args(Some("args.db"))));

    assert_eq!(config.database_url, "args.db"); // From args
    assert_eq!(config.seed_count, 50); // From file
    assert_eq!(config.max_user_attempts, 10); // From base
}

#[test]
fn test_merge_config_missing_database_url_falls_back() {
    let config = merge_config(base_config(None), ConfigUpdate::default(), config_from_args(&args(None)));
    assert_eq!(config.database_url, "anythink.db");
}
