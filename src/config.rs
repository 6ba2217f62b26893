//! Connection configuration.

use std::time::Duration;

use crate::auth::{Tier, DEFAULT_NONCE_LENGTH};
use crate::error::EdanError;
use crate::network::{DEFAULT_APP_VERSION, DEFAULT_EDAN_SERVER};

pub const ENV_SERVER: &str = "EDAN_SERVER";
pub const ENV_APP_ID: &str = "EDAN_APP_ID";
pub const ENV_AUTH_KEY: &str = "EDAN_AUTH_KEY";
pub const ENV_TIER_TYPE: &str = "EDAN_TIER_TYPE";

/// Everything needed to talk to one EDAN server with one application key.
#[derive(Clone)]
pub struct EdanConfig {
    pub server: String,
    pub app_id: String,
    pub auth_key: String,
    pub tier: Tier,
    pub app_version: String,
    pub nonce_length: usize,
    pub timeout: Duration,
}

impl EdanConfig {
    pub fn builder() -> EdanConfigBuilder {
        EdanConfigBuilder::default()
    }

    /// Read `EDAN_SERVER`, `EDAN_APP_ID`, `EDAN_AUTH_KEY` and
    /// `EDAN_TIER_TYPE`. Only the app id and key are required.
    pub fn from_env() -> Result<Self, EdanError> {
        let require = |name: &str| {
            std::env::var(name)
                .map_err(|_| EdanError::InvalidInput(format!("{} is not set", name)))
        };

        let mut builder = EdanConfig::builder()
            .app_id(&require(ENV_APP_ID)?)
            .auth_key(&require(ENV_AUTH_KEY)?);

        if let Ok(server) = std::env::var(ENV_SERVER) {
            builder = builder.server(&server);
        }
        if let Ok(tier) = std::env::var(ENV_TIER_TYPE) {
            let tier_type = tier.trim().parse::<i64>().map_err(|_| {
                EdanError::InvalidInput(format!("{} must be an integer, got {:?}", ENV_TIER_TYPE, tier))
            })?;
            builder = builder.tier(Tier::from_tier_type(tier_type));
        }

        builder.build()
    }
}

impl std::fmt::Debug for EdanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdanConfig")
            .field("server", &self.server)
            .field("app_id", &self.app_id)
            .field("tier", &self.tier)
            .field("app_version", &self.app_version)
            .field("nonce_length", &self.nonce_length)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct EdanConfigBuilder {
    server: String,
    app_id: Option<String>,
    auth_key: Option<String>,
    tier: Tier,
    app_version: String,
    nonce_length: usize,
    timeout: Duration,
}

impl Default for EdanConfigBuilder {
    fn default() -> Self {
        Self {
            server: DEFAULT_EDAN_SERVER.to_string(),
            app_id: None,
            auth_key: None,
            tier: Tier::Signed,
            app_version: DEFAULT_APP_VERSION.to_string(),
            nonce_length: DEFAULT_NONCE_LENGTH,
            timeout: Duration::from_secs(30),
        }
    }
}

impl EdanConfigBuilder {
    pub fn server(mut self, url: &str) -> Self {
        self.server = url.to_string();
        self
    }

    pub fn app_id(mut self, app_id: &str) -> Self {
        self.app_id = Some(app_id.to_string());
        self
    }

    pub fn auth_key(mut self, key: &str) -> Self {
        self.auth_key = Some(key.to_string());
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn app_version(mut self, version: &str) -> Self {
        self.app_version = version.to_string();
        self
    }

    pub fn nonce_length(mut self, length: usize) -> Self {
        self.nonce_length = length;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<EdanConfig, EdanError> {
        let app_id = self
            .app_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| EdanError::InvalidInput("app id is required".to_string()))?;
        let auth_key = self.auth_key.unwrap_or_default();
        if self.tier == Tier::Signed && auth_key.is_empty() {
            return Err(EdanError::InvalidInput(
                "auth key is required for signed requests".to_string(),
            ));
        }
        if self.server.is_empty() {
            return Err(EdanError::InvalidInput("server url is required".to_string()));
        }

        let mut server = self.server;
        if !server.ends_with('/') {
            server.push('/');
        }

        Ok(EdanConfig {
            server,
            app_id,
            auth_key,
            tier: self.tier,
            app_version: self.app_version,
            nonce_length: self.nonce_length,
            timeout: self.timeout,
        })
    }
}
