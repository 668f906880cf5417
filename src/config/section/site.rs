//! `[site]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Site metadata and routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Site URL (e.g., "https://example.com"). Validated when set.
    pub url: Option<String>,

    /// Page slug that maps to the site root path `/`.
    pub home_slug: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            home_slug: "home".into(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url`, when set, must be an http(s) URL with a valid host
    /// - `home_slug` must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url_str) = &self.url {
            let parsed = url::Url::parse(url_str).map_err(|err| {
                ConfigError::Validation(format!("site.url: invalid URL: {err}"))
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "site.url: scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                )));
            }

            if parsed.host_str().is_none() {
                return Err(ConfigError::Validation(
                    "site.url: URL must have a valid host".into(),
                ));
            }
        }

        if self.home_slug.is_empty() {
            return Err(ConfigError::Validation(
                "site.home_slug must not be empty".into(),
            ));
        }

        Ok(())
    }
}
