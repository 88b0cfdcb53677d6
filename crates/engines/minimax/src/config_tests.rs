use super::*;

#[test]
fn test_defaults_match_source_depth() {
    let config = SearchConfig::default();
    assert_eq!(config.depth, 3);
    assert!(config.parallel);
    assert_eq!(config.tie_break, TieBreak::Lexicographic);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(SearchConfig::from_toml_str("").unwrap(), SearchConfig::default());
}

#[test]
fn test_partial_toml_overrides_fields() {
    let config = SearchConfig::from_toml_str(
        r#"
        depth = 5
        threads = 4
        tie_break = "first-found"
        move_time_ms = 250
        "#,
    )
    .unwrap();

    assert_eq!(config.depth, 5);
    assert_eq!(config.threads, Some(4));
    assert_eq!(config.tie_break, TieBreak::FirstFound);
    assert_eq!(config.max_parallel_ply, 2);

    let limits = config.limits();
    assert_eq!(limits.depth, Some(5));
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
}

#[test]
fn test_rejects_bad_values() {
    assert!(matches!(
        SearchConfig::from_toml_str("depth = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("threads = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("depth = \"deep\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SearchConfig::from_toml_str("alpha_beta = true"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let err = SearchConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("not/here.toml"));
}

#[test]
fn test_fan_out_policy() {
    let config = SearchConfig::default();
    assert!(config.forks_at(0, 20));
    assert!(config.forks_at(1, 2));
    assert!(!config.forks_at(2, 20));
    assert!(!config.forks_at(0, 1));
    assert!(!SearchConfig::sequential().forks_at(0, 20));
}

#[test]
fn test_tie_break_from_str() {
    assert_eq!("Lexicographic".parse::<TieBreak>().unwrap(), TieBreak::Lexicographic);
    assert_eq!("first-found".parse::<TieBreak>().unwrap(), TieBreak::FirstFound);
    assert!("random".parse::<TieBreak>().is_err());
}
