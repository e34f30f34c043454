use figment::Jail;
use resellerclub::configs::{ConfigManager, LIVE_ENDPOINT, TEST_ENDPOINT};
use resellerclub::core::error::RcError;
use resellerclub::ClientConfig;
use std::time::Duration;

#[test]
fn test_local_json_with_env_override() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.json",
            r#"{"auth_userid": "111", "api_key": "file-key", "timeout_secs": 10}"#,
        )?;
        jail.set_env("RESELLERCLUB_API_KEY", "env-key");

        let mgr = ConfigManager::get_local_config("config.json").expect("config should load");
        let cfg = mgr.get();

        assert_eq!(cfg.auth_userid, "111");
        assert_eq!(cfg.api_key, "env-key");
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(cfg.endpoint(), LIVE_ENDPOINT);
        assert_eq!(mgr.source_info(), "local:config.json");
        Ok(())
    });
}

#[test]
fn test_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "reseller.toml",
            r#"
                auth_userid = "222"
                api_key = "toml-key"
                test_mode = true
            "#,
        )?;

        let cfg = ConfigManager::get_local_config("reseller.toml").unwrap().get();
        assert_eq!(cfg.auth_userid, "222");
        assert!(cfg.test_mode);
        assert_eq!(cfg.endpoint(), TEST_ENDPOINT);
        Ok(())
    });
}

#[test]
fn test_env_only_numeric_userid() {
    Jail::expect_with(|jail| {
        jail.set_env("RESELLERCLUB_AUTH_USERID", 12345);
        jail.set_env("RESELLERCLUB_API_KEY", "env-key");
        jail.set_env("RESELLERCLUB_ENDPOINT", "http://localhost:8080/api");

        let mgr = ConfigManager::get_env_config().unwrap();
        let cfg = mgr.get();
        assert_eq!(cfg.auth_userid, "12345");
        assert_eq!(cfg.endpoint(), "http://localhost:8080/api");
        assert_eq!(mgr.source_info(), "env");
        Ok(())
    });
}

#[test]
fn test_missing_file() {
    Jail::expect_with(|_jail| {
        let result = ConfigManager::get_local_config("nope.json");
        assert!(matches!(result, Err(RcError::Config(msg)) if msg.contains("not found")));
        Ok(())
    });
}

#[test]
fn test_empty_api_key_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", r#"{"auth_userid": "111", "api_key": "  "}"#)?;

        let result = ConfigManager::get_local_config("config.json");
        assert!(matches!(result, Err(RcError::Config(msg)) if msg.contains("api_key")));
        Ok(())
    });
}

#[test]
fn test_reload_picks_up_changes() {
    Jail::expect_with(|jail| {
        jail.create_file("config.json", r#"{"auth_userid": "111", "api_key": "old"}"#)?;
        let mgr = ConfigManager::get_local_config("config.json").unwrap();
        let before = mgr.get();

        jail.create_file("config.json", r#"{"auth_userid": "111", "api_key": "new"}"#)?;
        mgr.reload().unwrap();

        assert_eq!(before.api_key, "old");
        assert_eq!(mgr.get().api_key, "new");

        // a broken file keeps the last good config
        jail.create_file("config.json", r#"{"auth_userid": "111"}"#)?;
        assert!(mgr.reload().is_err());
        assert_eq!(mgr.get().api_key, "new");
        Ok(())
    });
}

#[test]
fn test_client_config_builders() {
    let cfg = ClientConfig::new("1", "k").with_timeout_secs(0);
    assert_eq!(cfg.timeout(), None);
    assert_eq!(cfg.endpoint(), LIVE_ENDPOINT);

    let cfg = cfg.with_test_mode(true);
    assert_eq!(cfg.endpoint(), TEST_ENDPOINT);

    // explicit endpoint beats test mode
    let cfg = cfg.with_endpoint("https://example.test/api");
    assert_eq!(cfg.endpoint(), "https://example.test/api");

    let bad = ClientConfig::new("1", "k").with_endpoint("ftp://example.test");
    assert!(bad.validate().is_err());
}
