//! Optional configuration from `~/.agriview/config.toml`.

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use agriview_types::{ScreenKind, ui::UiOptions};

#[derive(Debug, Default, Deserialize)]
pub struct AgriConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Screen shown at startup; unrecognized values resolve to the
    /// dashboard.
    pub start_screen: Option<String>,
    /// Use ASCII-only glyphs for icons and gauges.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable cycling glyph animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AgriConfig {
    /// `~/.agriview/config.toml`, when a home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".agriview").join("config.toml"))
    }

    /// Load the config file. `Ok(None)` when the file does not exist;
    /// a present-but-broken file is an error the caller can report.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Some(config))
    }

    /// Screen to show at startup (default-safe parsed).
    #[must_use]
    pub fn start_screen(&self) -> ScreenKind {
        self.app
            .as_ref()
            .and_then(|app| app.start_screen.as_deref())
            .map(ScreenKind::from_slug)
            .unwrap_or(ScreenKind::Dashboard)
    }

    /// Rendering options from the config file, with environment
    /// overrides (`AGRIVIEW_ASCII`, `AGRIVIEW_HIGH_CONTRAST`,
    /// `AGRIVIEW_REDUCED_MOTION`).
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: env_flag("AGRIVIEW_ASCII").unwrap_or(app.is_some_and(|a| a.ascii_only)),
            high_contrast: env_flag("AGRIVIEW_HIGH_CONTRAST")
                .unwrap_or(app.is_some_and(|a| a.high_contrast)),
            reduced_motion: env_flag("AGRIVIEW_REDUCED_MOTION")
                .unwrap_or(app.is_some_and(|a| a.reduced_motion)),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    match env::var(name) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        },
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use agriview_types::ScreenKind;

    use super::AgriConfig;

    #[test]
    fn start_screen_defaults_to_dashboard() {
        let config = AgriConfig::default();
        assert_eq!(config.start_screen(), ScreenKind::Dashboard);
    }

    #[test]
    fn start_screen_parses_known_slug() {
        let config: AgriConfig = toml::from_str("[app]\nstart_screen = \"weather\"\n")
            .expect("valid toml");
        assert_eq!(config.start_screen(), ScreenKind::Weather);
    }

    #[test]
    fn unknown_start_screen_falls_back_to_dashboard() {
        let config: AgriConfig = toml::from_str("[app]\nstart_screen = \"greenhouse\"\n")
            .expect("valid toml");
        assert_eq!(config.start_screen(), ScreenKind::Dashboard);
    }

    #[test]
    fn ui_flags_parse_from_toml() {
        let config: AgriConfig =
            toml::from_str("[app]\nascii_only = true\nhigh_contrast = true\n")
                .expect("valid toml");
        let app = config.app.as_ref().expect("app section");
        assert!(app.ascii_only);
        assert!(app.high_contrast);
        assert!(!app.reduced_motion);
    }
}
