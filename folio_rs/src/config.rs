//! Configuration file support for folio.
//!
//! Loads optional `.folio/config.toml` from the project root. The landing
//! app embeds its own copy and parses it with [`FolioConfig::from_toml_str`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{Error, Result};
use crate::particles::{BackgroundMode, DEFAULT_GLYPHS};
use crate::resume::ResumeAsset;
use crate::theme::{DEFAULT_STORAGE_KEY, Theme};

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Perspective section navigator tuning
    pub navigator: NavigatorConfig,
    /// Background canvas
    pub background: BackgroundConfig,
    /// Particle field
    pub field: FieldConfig,
    /// Theme persistence
    pub theme: ThemeConfig,
    /// Resume asset served by the contact section
    pub resume: ResumeAsset,
}

/// Perspective navigator thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Milliseconds during which further transitions are ignored
    pub cooldown_ms: f64,
    /// Minimum absolute wheel delta that counts as a page turn
    pub wheel_threshold: f64,
    /// Minimum vertical swipe distance in pixels
    pub swipe_threshold: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 800.0,
            wheel_threshold: 4.0,
            swipe_threshold: 50.0,
        }
    }
}

/// Background canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Which animation to run
    pub mode: BackgroundMode,
    /// Code-rain population
    pub glyph_count: usize,
    /// Speed slider value (50 = nominal)
    pub speed: f64,
    /// Global alpha of the layer
    pub opacity: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            mode: BackgroundMode::CodeRain,
            glyph_count: DEFAULT_GLYPHS,
            speed: 30.0,
            opacity: 0.3,
        }
    }
}

/// Particle field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Upper bound on the population
    pub max_particles: usize,
    /// Pairs closer than this are linked
    pub link_distance: f64,
    /// Pointer attraction radius
    pub pointer_radius: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            link_distance: 150.0,
            pointer_radius: 200.0,
        }
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// localStorage key
    pub storage_key: String,
    /// Theme used when nothing is stored
    pub default: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default: Theme::Dark,
        }
    }
}

impl FolioConfig {
    /// Load config from `.folio/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".folio").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to default config");
                Self::default()
            }
        }
    }

    /// Load config from a specific path, reporting read and parse errors.
    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Render the effective configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig {
            path: "<effective>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.navigator.cooldown_ms, 800.0);
        assert_eq!(config.navigator.swipe_threshold, 50.0);
        assert_eq!(config.background.mode, BackgroundMode::CodeRain);
        assert_eq!(config.background.glyph_count, 200);
        assert_eq!(config.field.link_distance, 150.0);
        assert_eq!(config.theme.default, Theme::Dark);
        assert_eq!(config.resume.href, "/resume/Axel_Sundqvist_Resume.pdf");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = FolioConfig::load(temp.path());
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let folio_dir = temp.path().join(".folio");
        std::fs::create_dir_all(&folio_dir).expect("create .folio");

        let config_path = folio_dir.join("config.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[navigator]
cooldown_ms = 500.0

[background]
mode = "neural-network"

[theme]
storage_key = "my-theme"
default = "light"
"#
        )
        .expect("write config");

        let config = FolioConfig::load(temp.path());
        assert_eq!(config.navigator.cooldown_ms, 500.0);
        assert_eq!(config.navigator.wheel_threshold, 4.0);
        assert_eq!(config.background.mode, BackgroundMode::NeuralNetwork);
        assert_eq!(config.background.glyph_count, 200);
        assert_eq!(config.theme.storage_key, "my-theme");
        assert_eq!(config.theme.default, Theme::Light);
        assert_eq!(config.field, FieldConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[navigator\ncooldown_ms = ").expect("write");

        assert_eq!(FolioConfig::load_from_path(&path), FolioConfig::default());
        let err = FolioConfig::try_load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_effective_config_round_trips() {
        let mut config = FolioConfig::default();
        config.field.max_particles = 42;
        let text = config.to_toml_string().expect("render");
        assert_eq!(FolioConfig::from_toml_str(&text).expect("parse"), config);
    }
}
