//! # slashart configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`SLASHART_RENDER__SLASH=#`)
//! 3. User config (`~/.config/slashart/config.toml`)
//! 4. Built-in defaults

pub mod presets;

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use notify::{recommended_watcher, Event, RecursiveMode, Watcher};
use parking_lot::RwLock;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use slashart_core::{ExportFormat, GlyphClass, Layout, RenderConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use presets::{find_preset, presets, Preset};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "SLASHART_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "slashart", "slashart")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/slashart"))
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph substitution and layout
    pub render: RenderSettings,
    /// Output format
    pub output: OutputSettings,
    /// Notices and cues
    pub feedback: FeedbackSettings,
}

/// Substitution specs as the user wrote them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Spec for `/` cells
    #[serde(deserialize_with = "spec_text")]
    pub slash: String,
    /// Spec for `=` cells
    #[serde(deserialize_with = "spec_text")]
    pub equals: String,
    /// Spec for background cells
    #[serde(deserialize_with = "spec_text")]
    pub void: String,
    /// Use the word-per-block title layout
    pub title: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            slash: GlyphClass::Slash.default_spec().to_string(),
            equals: GlyphClass::Equals.default_spec().to_string(),
            void: GlyphClass::Void.default_spec().to_string(),
            title: false,
        }
    }
}

impl RenderSettings {
    pub fn layout(&self) -> Layout {
        if self.title {
            Layout::Title
        } else {
            Layout::Lines
        }
    }

    /// Normalize the raw specs into a renderer config
    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig::from_user_input(&self.slash, &self.equals, &self.void, self.layout())
    }

    /// Raw spec for one class
    pub fn spec(&self, class: GlyphClass) -> &str {
        match class {
            GlyphClass::Slash => &self.slash,
            GlyphClass::Equals => &self.equals,
            GlyphClass::Void => &self.void,
        }
    }

    /// Replace the raw spec for one class
    pub fn set_spec(&mut self, class: GlyphClass, spec: impl Into<String>) {
        let spec = spec.into();
        match class {
            GlyphClass::Slash => self.slash = spec,
            GlyphClass::Equals => self.equals = spec,
            GlyphClass::Void => self.void = spec,
        }
    }
}

/// Accept a spec written as any scalar.
///
/// Environment values are parsed, so `7` or `true` arrive as numbers and
/// booleans; both are valid substitution characters.
fn spec_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct SpecText;

    impl Visitor<'_> for SpecText {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a string of substitution characters")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(SpecText)
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Export format
    pub format: ExportFormat,
}

/// User feedback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSettings {
    /// Ring the terminal bell with notices
    pub bell: bool,
    /// Warn about characters without a glyph
    pub warn_unsupported: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            bell: true,
            warn_unsupported: true,
        }
    }
}

/// Configuration manager with hot-reloading
pub struct ConfigManager {
    config: Arc<RwLock<Config>>,
    config_path: PathBuf,
    watcher: Option<notify::RecommendedWatcher>,
}

impl ConfigManager {
    /// Create a config manager for the default config path
    pub fn new() -> anyhow::Result<Self> {
        Self::with_path(default_config_path())
    }

    /// Create a config manager for a specific file. A missing file means defaults.
    pub fn with_path(config_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.into();
        let config = Self::load_from_file(&config_path)?;
        tracing::debug!("Configuration loaded from {}", config_path.display());

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
            watcher: None,
        })
    }

    /// Load configuration from file, then environment
    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path this manager loads from and saves to
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get current configuration
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Update configuration
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write();
        f(&mut config);
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config = self.config.read();
        let content = toml::to_string_pretty(&*config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        Ok(())
    }

    /// Re-read the file and environment now
    pub fn reload(&self) -> anyhow::Result<()> {
        let new_config = Self::load_from_file(&self.config_path)?;
        *self.config.write() = new_config;
        Ok(())
    }

    /// Enable hot-reloading of configuration
    pub fn enable_hot_reload(&mut self) -> anyhow::Result<()> {
        let config = Arc::clone(&self.config);
        let config_path = self.config_path.clone();

        let mut watcher = recommended_watcher(move |res: Result<Event, _>| {
            if let Ok(event) = res {
                if event.kind.is_modify() {
                    match Self::load_from_file(&config_path) {
                        Ok(new_config) => {
                            *config.write() = new_config;
                            tracing::info!("Configuration reloaded");
                        }
                        Err(e) => tracing::warn!("Keeping previous configuration: {:#}", e),
                    }
                }
            }
        })?;

        watcher.watch(&self.config_path, RecursiveMode::NonRecursive)?;
        self.watcher = Some(watcher);

        Ok(())
    }

    pub fn is_hot_reloading(&self) -> bool {
        self.watcher.is_some()
    }
}
