//! SiteName value object
//! Filename-safe identifier for one virtual-host configuration entry.
//! Every user-supplied name passes through here before it can reach the
//! privileged command runner.

use crate::constants::CONF_SUFFIX;
use crate::domain::{DomainError, Result};
use std::fmt;

/// Validated site name, always carrying the `.conf` suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteName(String);

impl SiteName {
    /// Parse and validate a raw name, appending the `.conf` suffix if absent
    ///
    /// Accepted characters: ASCII alphanumerics, `-`, `_` and `.`. Names must
    /// not be empty, start with a dot, or contain `..`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("Name is required".to_string()));
        }
        if trimmed.starts_with('.') {
            return Err(DomainError::InvalidInput(format!(
                "Invalid site name '{}': must not start with a dot",
                trimmed
            )));
        }
        if trimmed.contains("..") {
            return Err(DomainError::InvalidInput(format!(
                "Invalid site name '{}': must not contain '..'",
                trimmed
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(DomainError::InvalidInput(format!(
                "Invalid site name '{}': only alphanumerics, '-', '_' and '.' are allowed",
                trimmed
            )));
        }

        let name = if trimmed.ends_with(CONF_SUFFIX) {
            trimmed.to_string()
        } else {
            format!("{}{}", trimmed, CONF_SUFFIX)
        };

        Ok(Self(name))
    }

    /// Full file name, including the `.conf` suffix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base name with the `.conf` suffix stripped
    /// Used for content directory paths and generated pages
    pub fn base(&self) -> &str {
        self.0.strip_suffix(CONF_SUFFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for SiteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
