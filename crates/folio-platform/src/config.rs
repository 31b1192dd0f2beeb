use thiserror::Error;
use web_time::Duration;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: expected WIDTHxHEIGHT, e.g. 1280x800")]
    InvalidViewport { var: &'static str, value: String },

    #[error("invalid {var}={value:?}: expected a positive number")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration for a headless session, read from `FOLIO_*`
/// environment variables. Every knob has a sensible default; only malformed
/// overrides are errors.
#[derive(Clone, Debug)]
pub struct HeadlessConfig {
    /// Viewport size in physical pixels.
    pub size: (u32, u32),
    /// How many frames to play.
    pub frames: u32,
    /// Virtual time step per frame.
    pub frame_interval: Duration,
    /// Wheel delta dispatched per frame, in pixels.
    pub scroll_step: f32,
    /// dp→px multiplier.
    pub scale: f32,
    /// Session title, reported back by the runner.
    pub title: String,
    /// Dump the final scene as JSON on stdout.
    pub dump_scene: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            size: (1280, 800),
            frames: 180,
            frame_interval: Duration::from_millis(16),
            scroll_step: 60.0,
            scale: 1.0,
            title: String::new(),
            dump_scene: false,
        }
    }
}

impl HeadlessConfig {
    /// Read overrides from `FOLIO_VIEWPORT`, `FOLIO_FRAMES`,
    /// `FOLIO_SCROLL_STEP`, `FOLIO_SCALE` and `FOLIO_DUMP`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Ok(raw) = std::env::var("FOLIO_VIEWPORT") {
            cfg.size = parse_viewport("FOLIO_VIEWPORT", &raw)?;
        }
        if let Ok(raw) = std::env::var("FOLIO_FRAMES") {
            cfg.frames = parse_positive("FOLIO_FRAMES", &raw)?;
        }
        if let Ok(raw) = std::env::var("FOLIO_SCROLL_STEP") {
            cfg.scroll_step = parse_positive_f32("FOLIO_SCROLL_STEP", &raw)?;
        }
        if let Ok(raw) = std::env::var("FOLIO_SCALE") {
            cfg.scale = parse_positive_f32("FOLIO_SCALE", &raw)?;
        }
        if let Ok(raw) = std::env::var("FOLIO_DUMP") {
            cfg.dump_scene = raw == "scene";
        }

        Ok(cfg)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

fn parse_viewport(var: &'static str, raw: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidViewport {
        var,
        value: raw.to_string(),
    };
    let (w, h) = raw.split_once('x').ok_or_else(&invalid)?;
    let w: u32 = w.trim().parse().map_err(|_| invalid())?;
    let h: u32 = h.trim().parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}

fn parse_positive_f32(var: &'static str, raw: &str) -> Result<f32, ConfigError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_parsing() {
        assert_eq!(parse_viewport("V", "1280x800").unwrap(), (1280, 800));
        assert_eq!(parse_viewport("V", " 640 x 480 ").unwrap(), (640, 480));
        assert!(parse_viewport("V", "1280").is_err());
        assert!(parse_viewport("V", "0x600").is_err());
        assert!(parse_viewport("V", "wide x tall").is_err());
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_positive("N", "42").unwrap(), 42);
        assert!(parse_positive("N", "0").is_err());
        assert!(parse_positive("N", "-3").is_err());
        assert_eq!(parse_positive_f32("N", "1.5").unwrap(), 1.5);
        assert!(parse_positive_f32("N", "NaN").is_err());
    }
}
