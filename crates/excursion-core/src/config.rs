/*
 * config.rs
 * Copyright (c) 2026 Excursion Studio
 *
 * Site configuration and context discovery.
 */

//! Site context management.
//!
//! A site context represents either:
//! - A configured site (with `_digests.yml`)
//! - A bare content tree (no configuration file)
//!
//! The site context provides:
//! - Site root directory
//! - Parsed configuration (or built-in defaults)
//! - Resolved content and output roots

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ExcursionError, Result};
use crate::locale::LocalizedText;

/// A digest category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Stable category identifier
    pub id: String,

    /// Content subpath relative to the content directory
    pub path: String,

    /// Localized display name
    pub title: LocalizedText,
}

/// Parsed site configuration from `_digests.yml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteConfig {
    /// Content directory holding the category subtrees (relative to the site root)
    pub content_dir: PathBuf,

    /// Output directory for generated data documents (relative to the site root)
    pub output_dir: PathBuf,

    /// Digest categories, in output order
    pub categories: Vec<Category>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("es-digests"),
            output_dir: PathBuf::from("data"),
            categories: vec![
                Category {
                    id: "paper-guide".to_string(),
                    path: "paper-guide/papers".to_string(),
                    title: LocalizedText::new("论文导读", "Paper Guide"),
                },
                Category {
                    id: "paper-express".to_string(),
                    path: "paper-express/papers".to_string(),
                    title: LocalizedText::new("论文速递", "Paper Express"),
                },
            ],
        }
    }
}

/// Site context for generation
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Site root directory (directory containing `_digests.yml`, or the start directory)
    pub dir: PathBuf,

    /// Site configuration (built-in defaults when no config file was found)
    pub config: SiteConfig,

    /// Path of the discovered configuration file, if any
    pub config_file: Option<PathBuf>,
}

impl SiteContext {
    /// Discover the site context from a path.
    ///
    /// If the path is a file, looks for `_digests.yml` in parent directories.
    /// If the path is a directory, looks for `_digests.yml` in that directory
    /// and parents.
    ///
    /// If no `_digests.yml` is found, the start directory becomes the site
    /// root with the default configuration.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Canonicalize the path
        let path = path.canonicalize().map_err(ExcursionError::Io)?;

        let search_dir = if path.is_file() {
            path.parent()
                .ok_or_else(|| ExcursionError::config("Start path has no parent directory"))?
                .to_path_buf()
        } else {
            path
        };

        // Search for _digests.yml
        match Self::find_site_config(&search_dir)? {
            Some((config_file, config)) => {
                let dir = config_file
                    .parent()
                    .ok_or_else(|| ExcursionError::config("Config file has no parent directory"))?
                    .to_path_buf();
                Ok(Self {
                    dir,
                    config,
                    config_file: Some(config_file),
                })
            }
            None => Ok(Self {
                dir: search_dir,
                config: SiteConfig::default(),
                config_file: None,
            }),
        }
    }

    /// Resolved content root: `<site root>/<content dir>`
    pub fn content_root(&self) -> PathBuf {
        self.dir.join(&self.config.content_dir)
    }

    /// Resolved output root: `<site root>/<output dir>`
    pub fn output_root(&self) -> PathBuf {
        self.dir.join(&self.config.output_dir)
    }

    /// Search for `_digests.yml` in directory and parents
    fn find_site_config(start_dir: &Path) -> Result<Option<(PathBuf, SiteConfig)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join("_digests.yml");
            if config_path.exists() {
                let config = Self::parse_config(&config_path)?;
                return Ok(Some((config_path, config)));
            }

            // Also check for _digests.yaml (alternate extension)
            let config_path_yaml = current.join("_digests.yaml");
            if config_path_yaml.exists() {
                let config = Self::parse_config(&config_path_yaml)?;
                return Ok(Some((config_path_yaml, config)));
            }

            // Move to parent directory
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                // Reached root, no config found
                return Ok(None);
            }
        }
    }

    /// Parse a `_digests.yml` file
    fn parse_config(path: &Path) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExcursionError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
            ExcursionError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        // An empty config file means all defaults
        if value.is_null() {
            return Ok(SiteConfig::default());
        }

        serde_yaml::from_value(value).map_err(|e| {
            ExcursionError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
