use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Log every allowed decision at debug level
    pub log_decisions: bool,
    /// Log denials at warn level
    pub log_denials: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("POLICY_LOG_DECISIONS") {
            self.policy.log_decisions = v.parse().unwrap_or(self.policy.log_decisions);
        }
        if let Ok(v) = env::var("POLICY_LOG_DENIALS") {
            self.policy.log_denials = v.parse().unwrap_or(self.policy.log_denials);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            policy: PolicyConfig {
                log_decisions: true,
                log_denials: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            policy: PolicyConfig {
                log_decisions: false,
                log_denials: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            policy: PolicyConfig {
                log_decisions: false,
                log_denials: true,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
