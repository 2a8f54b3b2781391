//! Configuration loading
//!
//! Reads xmag.toml from disk, or falls back to the copy embedded at build
//! time. Missing keys take their defaults; the result is validated before
//! it is handed to the rest of the firmware.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::FirmwareConfig;
use crate::error::ConfigLoadError;

/// Default configuration, checked by build.rs
pub const DEFAULT_CONFIG: &str = include_str!("../../xmag.toml");

/// Load from `path`, or the embedded default when no path is given
pub fn load_config(path: Option<&Path>) -> Result<FirmwareConfig, ConfigLoadError> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&text, &path.display().to_string())?
        }
        None => {
            info!("using built-in configuration");
            parse_config(DEFAULT_CONFIG, "built-in xmag.toml")?
        }
    };

    let core = &config.core;
    debug!(
        width = core.display.width,
        height = core.display.height,
        zoom_min = core.zoom.min,
        zoom_max = core.zoom.max,
        confirm = core.buttons.confirm.name(),
        quit = core.buttons.quit.name(),
        leds = core.indicator.led_count,
        frame_period_ms = core.timing.frame_period_ms,
        "configuration loaded"
    );

    Ok(config)
}

/// Parse and validate a TOML document
///
/// `origin` names the document in error messages.
pub fn parse_config(text: &str, origin: &str) -> Result<FirmwareConfig, ConfigLoadError> {
    let config: FirmwareConfig = toml::from_str(text).map_err(|source| ConfigLoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    config.core.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LockConfig;
    use xmag_core::config::ConfigError;
    use xmag_core::indicator::SweepStyle;
    use xmag_core::input::Button;

    #[test]
    fn test_embedded_default_matches_defaults() {
        let config = parse_config(DEFAULT_CONFIG, "built-in").unwrap();
        assert_eq!(config, FirmwareConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("", "empty").unwrap();
        assert_eq!(config, FirmwareConfig::default());
    }

    #[test]
    fn test_partial_sections_layer_over_defaults() {
        let config = parse_config(
            r#"
            [zoom]
            max = 8

            [buttons]
            confirm = "red"

            [animation]
            style = "fill"

            [asset]
            path = "/home/root/cat.rgb565"
            width = 200
            height = 150

            [lock]
            wait = false
            "#,
            "partial",
        )
        .unwrap();

        assert_eq!(config.core.zoom.min, 1);
        assert_eq!(config.core.zoom.max, 8);
        assert_eq!(config.core.buttons.confirm, Button::Red);
        assert_eq!(config.core.buttons.quit, Button::Blue);
        assert_eq!(config.core.animation.style, SweepStyle::Fill);
        assert_eq!(config.core.animation.cycles, 3);
        assert_eq!(
            config.asset.path.as_deref(),
            Some(Path::new("/home/root/cat.rgb565"))
        );
        assert_eq!((config.asset.width, config.asset.height), (200, 150));
        assert!(!config.lock.wait);
        assert_eq!(config.lock.path, LockConfig::default().path);
    }

    #[test]
    fn test_syntax_error_names_origin() {
        let err = parse_config("[zoom\nmax = 3", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_unknown_button_rejected() {
        let err = parse_config("[buttons]\nquit = \"purple\"", "buttons").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = parse_config("[buttons]\nconfirm = \"blue\"", "conflict").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::ButtonConflict(Button::Blue))
        ));

        let err = parse_config("[zoom]\nmin = 5\nmax = 2", "zoom").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::InvertedZoomRange { min: 5, max: 2 })
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_config(Some(Path::new("/nonexistent/xmag.toml"))).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("xmag-config-{}.toml", std::process::id()));
        fs::write(&path, "[timing]\nframe_period_ms = 40\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.core.timing.frame_period_ms, 40);

        let _ = fs::remove_file(&path);
    }
}
