//! Daemon settings from a YAML file with environment overrides
//!
//! Precedence (last wins): built-in defaults, YAML file, `NM_*` environment
//! variables.

use crate::constants;
use serde::{Deserialize, Serialize};

/// Runtime settings for the daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// TCP listen address for the HTTP API
    pub http_addr: String,

    /// Directory holding every known virtual-host configuration
    pub sites_available: String,

    /// Directory of symlinks into `sites_available` for active sites
    pub sites_enabled: String,

    /// Root under which site content directories are provisioned; recursive
    /// deletion never leaves this root
    pub workspace_root: String,

    /// Local directory for staging files before privileged installation
    pub staging_dir: String,

    /// Unit name of the managed web server
    pub service_unit: String,

    /// Optional second unit reported by the status endpoint
    pub dependent_unit: Option<String>,

    /// php-fpm socket path rendered into PHP-enabled static sites
    pub php_socket: String,

    /// Owner applied to freshly provisioned content directories; no chown
    /// when unset
    pub content_owner: Option<String>,

    /// Program + arguments for the configuration syntax check
    pub config_check: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_addr: constants::DEFAULT_HTTP_ADDR.to_string(),
            sites_available: constants::DEFAULT_SITES_AVAILABLE.to_string(),
            sites_enabled: constants::DEFAULT_SITES_ENABLED.to_string(),
            workspace_root: constants::DEFAULT_WORKSPACE_ROOT.to_string(),
            staging_dir: std::env::temp_dir().display().to_string(),
            service_unit: constants::DEFAULT_SERVICE_UNIT.to_string(),
            dependent_unit: Some(constants::DEFAULT_DEPENDENT_UNIT.to_string()),
            php_socket: constants::DEFAULT_PHP_SOCKET.to_string(),
            content_owner: None,
            config_check: vec!["nginx".to_string(), "-t".to_string()],
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML from '{}': {}", path, e))
    }

    /// Resolve effective settings: optional file, then environment overrides
    pub fn resolve(config_path: Option<&str>) -> Result<Self, String> {
        let mut settings = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_env();
        settings.validate()?;
        Ok(settings)
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("NM_HTTP_ADDR") {
            self.http_addr = v;
        }
        if let Ok(v) = std::env::var("NM_SITES_AVAILABLE") {
            self.sites_available = v;
        }
        if let Ok(v) = std::env::var("NM_SITES_ENABLED") {
            self.sites_enabled = v;
        }
        if let Ok(v) = std::env::var("NM_WORKSPACE_ROOT") {
            self.workspace_root = v;
        }
        if let Ok(v) = std::env::var("NM_STAGING_DIR") {
            self.staging_dir = v;
        }
        if let Ok(v) = std::env::var("NM_SERVICE_UNIT") {
            self.service_unit = v;
        }
        if let Ok(v) = std::env::var("NM_DEPENDENT_UNIT") {
            self.dependent_unit = if v.is_empty() { None } else { Some(v) };
        }
        if let Ok(v) = std::env::var("NM_PHP_SOCKET") {
            self.php_socket = v;
        }
        if let Ok(v) = std::env::var("NM_CONTENT_OWNER") {
            self.content_owner = if v.is_empty() { None } else { Some(v) };
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.service_unit.trim().is_empty() {
            return Err("service_unit must not be empty".to_string());
        }
        if self.workspace_root.trim().is_empty() || self.workspace_root == "/" {
            return Err(format!(
                "workspace_root '{}' is not a safe deletion boundary",
                self.workspace_root
            ));
        }
        if self.config_check.is_empty() {
            return Err("config_check must name a program".to_string());
        }
        Ok(())
    }
}
