// config.rs - Visual parameters
//
// Every section defaults to the values the site ships with. A partial
// JSON object overrides only the keys it names.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub rain: RainConfig,
    pub particles: ParticleConfig,
    pub typing: TypingConfig,
    pub terminal: TerminalConfig,
    pub counter: CounterConfig,
    pub chrome: ChromeConfig,
    pub waveform: WaveformConfig,
    pub traces: TraceConfig,
    pub hexagon: HexagonConfig,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Container element id
    pub container: String,
    pub font_size: f32,
    pub charset: String,
    /// Per-frame probability that an off-screen column restarts
    pub reset_chance: f32,
    pub fade_alpha: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            container: "hero".into(),
            font_size: 14.0,
            charset: "01×÷≠≈∞∫∂√πΩμ0xFF0x000xAB0xCD0x12".into(),
            reset_chance: 0.025,
            fade_alpha: 0.05,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub container: String,
    pub count: usize,
    pub link_distance: f32,
    /// Full width of the initial velocity range, centred on zero
    pub speed: f32,
    pub chip_ratio: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            container: "hero".into(),
            count: 60,
            link_distance: 150.0,
            speed: 0.5,
            chip_ratio: 0.3,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub element: String,
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
    pub gap_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            element: "hero-subtitle".into(),
            phrases: [
                "Embedded Systems Engineer",
                "IoT Solutions Architect",
                "Firmware Developer",
                "Hardware Designer",
                "RTOS Specialist",
            ]
            .map(String::from)
            .to_vec(),
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
            gap_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub enabled: bool,
    pub title: String,
    pub boot_step_ms: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Embedded System Console".into(),
            boot_step_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub flicker_every_ms: u32,
    pub flicker_chance: f32,
    pub flicker_hold_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            flicker_every_ms: 3000,
            flicker_chance: 0.05,
            flicker_hold_ms: 50,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub scrolled_after: f64,
    /// Extra look-ahead below the navbar when picking the active section
    pub active_offset: f64,
    pub tilt_divisor: f64,
    pub scan_line: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 50.0,
            active_offset: 100.0,
            tilt_divisor: 20.0,
            scan_line: true,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    pub width: f32,
    pub height: f32,
    pub amplitude: f32,
    pub phase_step: f32,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self { width: 1200.0, height: 60.0, amplitude: 15.0, phase_step: 0.05 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub container: String,
    pub count: usize,
    pub vias_per_trace: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { container: "hero".into(), count: 8, vias_per_trace: 3 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonConfig {
    /// Class of the element that receives the border
    pub container_class: String,
}

impl Default for HexagonConfig {
    fn default() -> Self {
        Self { container_class: "profile-image-container".into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let cfg = SiteConfig::from_json("  ").unwrap();
        assert_eq!(cfg.particles.count, 60);
        assert_eq!(cfg.typing.phrases.len(), 5);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{"rain": {"font_size": 20}, "log_level": "debug"}"#).unwrap();
        assert_eq!(cfg.rain.font_size, 20.0);
        assert_eq!(cfg.rain.reset_chance, 0.025);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.chrome.scrolled_after, 50.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{rain:").is_err());
    }
}
