//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{CourseCatalog, DEFAULT_COURSES};

/// Environment variable that replaces the configured course list.
pub const COURSES_ENV: &str = "GRADEBOOK_COURSES";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Course names seeded into the catalog at startup, in display order.
    #[serde(default = "default_courses")]
    pub courses: Vec<String>,
}

fn default_courses() -> Vec<String> {
    DEFAULT_COURSES.iter().map(|c| c.to_string()).collect()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            courses: default_courses(),
        }
    }
}

impl GradebookConfig {
    /// Build the course catalog this configuration describes.
    pub fn catalog(&self) -> Result<CourseCatalog> {
        CourseCatalog::from_names(&self.courses).context("invalid course list in configuration")
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse gradebook config")
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_COURSES` (comma-separated) then overrides the course list.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let mut config = read_config(path)?;
    apply_course_override(&mut config, std::env::var(COURSES_ENV).ok().as_deref());
    Ok(config)
}

/// Read the config file without applying environment overrides.
fn read_config(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            GradebookConfig::from_toml(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(GradebookConfig::default()),
    }
}

fn apply_course_override(config: &mut GradebookConfig, list: Option<&str>) {
    if let Some(list) = list {
        config.courses = split_course_list(list);
    }
}

fn split_course_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
