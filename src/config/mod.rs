use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub nav: NavConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    pub pages_file: String,
    pub max_limit: Option<usize>,
    pub debug_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
    pub enable_cors: bool,
    pub max_request_size_bytes: usize,
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
        // Navigation overrides
        if let Ok(v) = env::var("NAV_PAGES_FILE") {
            self.nav.pages_file = v;
        }
        if let Ok(v) = env::var("NAV_MAX_LIMIT") {
            self.nav.max_limit = v.parse().ok();
        }
        if let Ok(v) = env::var("NAV_DEBUG_LOGGING") {
            self.nav.debug_logging = v.parse().unwrap_or(self.nav.debug_logging);
        }

        // API overrides
        if let Ok(v) = env::var("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Ok(v) = env::var("API_ENABLE_CORS") {
            self.api.enable_cors = v.parse().unwrap_or(self.api.enable_cors);
        }
        if let Ok(v) = env::var("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = v.parse().unwrap_or(self.api.max_request_size_bytes);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            nav: NavConfig {
                pages_file: "pages.yaml".to_string(),
                max_limit: Some(1000),
                debug_logging: true,
            },
            api: ApiConfig {
                enable_request_logging: true,
                enable_cors: true,
                max_request_size_bytes: 10 * 1024 * 1024, // 10MB
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            nav: NavConfig {
                pages_file: "pages.yaml".to_string(),
                max_limit: Some(500),
                debug_logging: false,
            },
            api: ApiConfig {
                enable_request_logging: true,
                enable_cors: true,
                max_request_size_bytes: 5 * 1024 * 1024, // 5MB
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            nav: NavConfig {
                pages_file: "pages.yaml".to_string(),
                max_limit: Some(100),
                debug_logging: false,
            },
            api: ApiConfig {
                enable_request_logging: false,
                enable_cors: true,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
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
