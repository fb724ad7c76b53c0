use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let config = PlayerConfig::default();
    assert_eq!(config.engine, EngineKind::Minimax);
    assert_eq!(config.depth, 5);
    assert!(!config.positional_term);
    assert!(config.search_limits().move_time.is_none());
}

#[test]
fn test_from_toml_partial() {
    let config = PlayerConfig::from_toml_str("depth = 3\nmove_time_ms = 250\n").unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.engine, EngineKind::Minimax);
    let limits = config.search_limits();
    assert_eq!(limits.depth, 3);
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
}

#[test]
fn test_from_toml_random_engine() {
    let config = PlayerConfig::from_toml_str("engine = \"random\"\nseed = 9\n").unwrap();
    assert_eq!(config.engine, EngineKind::Random);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.build_engine().name(), "Random v1.0");
}

#[test]
fn test_from_toml_rejects_bad_input() {
    assert!(PlayerConfig::from_toml_str("depth = 0").is_err());
    assert!(PlayerConfig::from_toml_str("depht = 4").is_err());
    assert!(PlayerConfig::from_toml_str("engine = \"alphazero\"").is_err());
}

#[test]
fn test_missing_file_gives_defaults() {
    let config = PlayerConfig::load(Path::new("/nonexistent/checkers.toml")).unwrap();
    assert_eq!(config, PlayerConfig::default());
}

#[test]
fn test_cli_parse_and_apply() {
    let cli = CliArgs::parse(&args(&["--depth", "2", "-e", "random"])).unwrap();
    assert_eq!(cli.depth, Some(2));
    assert_eq!(cli.engine, Some(EngineKind::Random));

    let mut config = PlayerConfig::default();
    config.apply(&cli);
    assert_eq!(config.depth, 2);
    assert_eq!(config.engine, EngineKind::Random);
}

#[test]
fn test_cli_parse_errors() {
    assert!(CliArgs::parse(&args(&["--depth"])).is_err());
    assert!(CliArgs::parse(&args(&["--depth", "0"])).is_err());
    assert!(CliArgs::parse(&args(&["--depth", "deep"])).is_err());
    assert!(CliArgs::parse(&args(&["--bogus"])).is_err());
    assert!(CliArgs::parse(&args(&["-e", "stockfish"])).is_err());
}

#[test]
fn test_cli_config_path_wins() {
    let cli = CliArgs::parse(&args(&["--config", "/nonexistent/player.toml", "-d", "4"])).unwrap();
    let config = PlayerConfig::resolve(&cli).unwrap();
    assert_eq!(config.depth, 4);
    assert_eq!(config.engine, EngineKind::Minimax);
}
