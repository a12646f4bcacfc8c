use wutong_dosing::{HalvingPolicy, PolicyConfig, RescuePolicy};
use wutong_server::config::{ServerConfig, load_config_from, save_config};

#[test]
fn pre_versioned_config_gets_default_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"bind_addr": "0.0.0.0:9000"}"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.policy, PolicyConfig::default());
    assert!(!config.log_json);
}

#[test]
fn pre_versioned_policy_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"policy": {"halving": "all_zero"}}"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.policy.halving, HalvingPolicy::AllZero);
    assert_eq!(config.policy.rescue, RescuePolicy::Explicit);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 99, "policy": {}}"#).unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer"));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = ServerConfig {
        config_version: 0,
        log_json: true,
        policy: PolicyConfig {
            rescue: RescuePolicy::ScoreDerived,
            halving: HalvingPolicy::ZeroPresent,
        },
        ..Default::default()
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert!(loaded.log_json);
    assert_eq!(loaded.policy, config.policy);
    assert_eq!(loaded.export_styles.body_font, "Calibri");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn missing_file_is_an_error_when_path_is_explicit() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("absent.json")).is_err());
}
