// ABOUTME: Configuration for the contrast-grid CLI.
// ABOUTME: Loaded from TOML with every field defaulted; command-line flags override it.

use anyhow::{Context, Result};
use clap::ValueEnum;
use contrast_core::layout::DEFAULT_SAMPLE_TEXT;
use contrast_core::TierSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Svg,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tiers whose cells are displayed; everything else is left blank
    pub visible_tiers: TierSet,

    /// Output format for `generate`
    pub format: OutputFormat,

    /// Paint text output with the actual colors (ANSI truecolor)
    pub color: bool,

    /// Sample text drawn on each tile
    pub sample_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visible_tiers: TierSet::all(),
            format: OutputFormat::Text,
            color: true,
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load config from `path`, or return defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default config file path (~/.config/contrast-grid/config.toml)
    pub fn default_path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("."))
            })
            .join("contrast-grid")
            .join("config.toml")
    }
}
