//! `[source]` configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Content export location and database schema names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Export directory, relative to the config file.
    pub dir: PathBuf,

    /// Select property of the database that holds the collection options.
    pub collection_property: String,

    /// Reserved option marking top-level pages; never linked as a collection.
    pub page_collection: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("export"),
            collection_property: "Collection".into(),
            page_collection: "Page".into(),
        }
    }
}

impl SourceConfig {
    /// Validate source configuration.
    ///
    /// # Checks
    /// - `dir` must be relative (resolved against the config file's parent)
    /// - `collection_property` and `page_collection` must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.is_absolute() {
            return Err(ConfigError::Validation(format!(
                "source.dir must be relative to the config file, got `{}`",
                self.dir.display()
            )));
        }

        if self.collection_property.is_empty() {
            return Err(ConfigError::Validation(
                "source.collection_property must not be empty".into(),
            ));
        }

        if self.page_collection.is_empty() {
            return Err(ConfigError::Validation(
                "source.page_collection must not be empty".into(),
            ));
        }

        Ok(())
    }
}
