use namesift::{MatcherConfig, NamesiftConfig, StoreConfig};
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let config = NamesiftConfig::default();

    assert_eq!(
        config.store.dataset_path,
        PathBuf::from("combined_names.csv")
    );
    assert!(config.store.has_header);
    assert_eq!(config.matcher.limit, 10);
}

#[test]
fn test_config_modification() {
    let mut config = NamesiftConfig::default();

    config.store.dataset_path = PathBuf::from("names.csv");
    config.store.has_header = false;
    config.matcher.limit = 3;

    assert_eq!(config.store.dataset_path, PathBuf::from("names.csv"));
    assert!(!config.store.has_header);
    assert_eq!(config.matcher.limit, 3);
}

#[test]
fn test_config_json_round_trip() {
    let config = NamesiftConfig {
        store: StoreConfig {
            dataset_path: PathBuf::from("names.csv"),
            has_header: false,
        },
        matcher: MatcherConfig { limit: 5 },
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: NamesiftConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.store.dataset_path, config.store.dataset_path);
    assert_eq!(back.store.has_header, config.store.has_header);
    assert_eq!(back.matcher.limit, config.matcher.limit);
}
