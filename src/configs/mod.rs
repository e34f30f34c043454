use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;
use figment::{Figment, providers::{Format, Json, Toml, Env}};
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use crate::core::error::RcError;

pub const LIVE_ENDPOINT: &str = "https://httpapi.com/api";
pub const TEST_ENDPOINT: &str = "https://test.httpapi.com/api";
pub const ENV_PREFIX: &str = "RESELLERCLUB_";

/// Credentials and connection settings for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Reseller account id, sent as `auth-userid`.
    #[serde(deserialize_with = "string_or_number")]
    pub auth_userid: String,
    /// Secret key, sent as `api-key`.
    #[serde(deserialize_with = "string_or_number")]
    pub api_key: String,
    /// Use the sandbox endpoint when no explicit endpoint is set.
    #[serde(default)]
    pub test_mode: bool,
    /// Overrides the live/sandbox endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout; 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

// Environment values like RESELLERCLUB_AUTH_USERID=12345 reach serde as numbers.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected a string, got {}", other))),
    }
}

impl ClientConfig {
    pub fn new(auth_userid: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            auth_userid: auth_userid.into(),
            api_key: api_key.into(),
            test_mode: false,
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Base URL every request path is appended to.
    pub fn endpoint(&self) -> &str {
        match &self.endpoint {
            Some(e) if !e.is_empty() => e,
            _ if self.test_mode => TEST_ENDPOINT,
            _ => LIVE_ENDPOINT,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn validate(&self) -> Result<(), RcError> {
        if self.auth_userid.trim().is_empty() {
            return Err(RcError::Config("auth_userid is empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(RcError::Config("api_key is empty".into()));
        }
        let endpoint = self.endpoint();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(RcError::Config(format!(
                "endpoint must start with http:// or https://, got: {}",
                endpoint
            )));
        }
        Ok(())
    }
}

/// Holds the current [`ClientConfig`] and knows how to reload it.
///
/// Clients take a snapshot at construction; a reload only affects clients
/// built afterwards.
pub struct ConfigManager {
    current: ArcSwap<ClientConfig>,
    source: Option<PathBuf>,
    source_info: String,
}

impl ConfigManager {
    /// LOCAL: Merges file + RESELLERCLUB_ env vars. Fails if file missing.
    pub fn get_local_config(path: impl AsRef<Path>) -> Result<Self, RcError> {
        let path = path.as_ref();
        let config = Self::load(Some(path))?;

        Ok(Self {
            current: ArcSwap::from_pointee(config),
            source: Some(path.to_path_buf()),
            source_info: format!("local:{}", path.display()),
        })
    }

    /// ENV: RESELLERCLUB_ env vars only.
    pub fn get_env_config() -> Result<Self, RcError> {
        let config = Self::load(None)?;

        Ok(Self {
            current: ArcSwap::from_pointee(config),
            source: None,
            source_info: "env".to_string(),
        })
    }

    /// Re-reads the file or environment the config came from. The previous config stays active on failure.
    pub fn reload(&self) -> Result<(), RcError> {
        let config = Self::load(self.source.as_deref())?;
        self.current.store(Arc::new(config));
        Ok(())
    }

    pub fn get(&self) -> Arc<ClientConfig> {
        self.current.load_full()
    }

    pub fn source_info(&self) -> &str {
        &self.source_info
    }

    fn load(path: Option<&Path>) -> Result<ClientConfig, RcError> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !path.exists() {
                return Err(RcError::Config(format!("Local file not found: {}", path.display())));
            }
            let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
            figment = if is_toml {
                figment.merge(Toml::file(path))
            } else {
                figment.merge(Json::file(path))
            };
        }

        let config: ClientConfig = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| RcError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}
