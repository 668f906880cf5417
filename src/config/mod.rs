//! Site configuration management for `vellum.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── source     # [source]
//! ├── error          # ConfigError
//! ├── util           # Upward config-file search
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[site]`   | Site metadata (title, url, home slug)            |
//! | `[source]` | Content export directory and database schema     |

mod error;
pub mod section;
mod util;

use util::find_config_file;

pub use error::ConfigError;
pub use section::{SiteSectionConfig, SourceConfig};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vellum.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file; empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata and routing
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Content export location and database schema names
    #[serde(default)]
    pub source: SourceConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration for the invoked command.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory. Commands that can run on defaults
    /// (`stats`) fall back to them when no file is found; `menu` needs the
    /// real schema names and refuses to run without one.
    pub fn load(cli: &Cli) -> Result<Self> {
        match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config.validate()?;

                debug!("config"; "loaded {}", config.config_path.display());
                Ok(config)
            }
            None if cli.requires_config() => {
                bail!(
                    "config file '{}' not found (searched upward from the current directory)",
                    cli.config.display()
                );
            }
            None => {
                debug!("config"; "no '{}' found, using defaults", cli.config.display());

                let cwd = std::env::current_dir()
                    .context("Failed to get current working directory")?;
                let mut config = Self::default();
                config.root = cwd;
                Ok(config)
            }
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (vellum.toml) since it's always at project root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Validate configuration, section by section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()?;
        self.source.validate()?;
        Ok(())
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute path of the content export directory.
    pub fn source_dir(&self) -> PathBuf {
        self.root_join(&self.source.dir)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
