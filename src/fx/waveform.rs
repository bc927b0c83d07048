// waveform.rs - Oscilloscope divider paths
//
// Closed-form SVG path data for sine, square and pulse traces. Only the
// sine trace is re-generated per frame, with an advancing phase.

use std::fmt::Write;
use std::str::FromStr;

use crate::config::WaveformConfig;
use crate::error::FxError;
use crate::render::Point;

const SINE_STEP: usize = 5;
const SINE_FREQ: f32 = 0.02;
const SQUARE_PERIOD: usize = 80;
const PULSE_PERIOD: usize = 100;
const PULSE_WIDTH: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaveKind {
    #[default]
    Sine,
    Square,
    Pulse,
    Flat,
}

impl FromStr for WaveKind {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(WaveKind::Sine),
            "square" => Ok(WaveKind::Square),
            "pulse" => Ok(WaveKind::Pulse),
            "flat" => Ok(WaveKind::Flat),
            other => Err(FxError::UnknownWave(other.to_string())),
        }
    }
}

impl WaveKind {
    /// Attribute value to kind. Missing or blank means sine, unknown draws a flat line.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim).filter(|s| !s.is_empty()) {
            None => WaveKind::Sine,
            Some(s) => s.parse().unwrap_or_else(|e| {
                log::warn!("{e}, drawing flat line");
                WaveKind::Flat
            }),
        }
    }

    pub fn is_live(self) -> bool {
        self == WaveKind::Sine
    }
}

pub struct Waveform {
    kind: WaveKind,
    width: f32,
    center: f32,
    amplitude: f32,
    phase: f32,
    phase_step: f32,
}

impl Waveform {
    pub fn new(kind: WaveKind, cfg: &WaveformConfig) -> Self {
        Self {
            kind,
            width: cfg.width,
            center: cfg.height / 2.0,
            amplitude: cfg.amplitude,
            phase: 0.0,
            phase_step: cfg.phase_step,
        }
    }

    pub fn kind(&self) -> WaveKind { self.kind }

    /// Advance the live trace one frame
    pub fn advance(&mut self) -> String {
        self.phase += self.phase_step;
        self.path()
    }

    /// Vertices after the implicit start at (0, center)
    pub fn points(&self) -> Vec<Point> {
        let (c, a) = (self.center, self.amplitude);
        let w = self.width.max(0.0) as usize;
        let p = |x: usize, y: f32| Point::new(x as f32, y);
        let mut pts = Vec::new();

        match self.kind {
            WaveKind::Sine => {
                for x in (0..=w).step_by(SINE_STEP) {
                    pts.push(p(x, c + a * (x as f32 * SINE_FREQ + self.phase).sin()));
                }
            }
            WaveKind::Square => {
                let half = SQUARE_PERIOD / 2;
                for x in (0..=w).step_by(SQUARE_PERIOD) {
                    pts.extend([p(x, c - a), p(x + half, c - a), p(x + half, c + a), p(x + SQUARE_PERIOD, c + a)]);
                }
            }
            WaveKind::Pulse => {
                for x in (0..=w).step_by(PULSE_PERIOD) {
                    pts.extend([p(x, c), p(x, c - a), p(x + PULSE_WIDTH, c - a), p(x + PULSE_WIDTH, c)]);
                }
            }
            WaveKind::Flat => pts.push(Point::new(self.width, c)),
        }
        pts
    }

    pub fn start(&self) -> Point {
        Point::new(0.0, self.center)
    }

    /// SVG path data
    pub fn path(&self) -> String {
        let mut d = format!("M 0,{}", self.center);
        for pt in self.points() {
            let _ = write!(d, " L {},{}", pt.x, pt.y);
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(kind: WaveKind) -> Waveform {
        Waveform::new(kind, &WaveformConfig::default())
    }

    #[test]
    fn attr_parsing() {
        assert_eq!(WaveKind::from_attr(None), WaveKind::Sine);
        assert_eq!(WaveKind::from_attr(Some("")), WaveKind::Sine);
        assert_eq!(WaveKind::from_attr(Some("  ")), WaveKind::Sine);
        assert_eq!(WaveKind::from_attr(Some(" square ")), WaveKind::Square);
        assert_eq!(WaveKind::from_attr(Some("pulse")), WaveKind::Pulse);
        assert_eq!(WaveKind::from_attr(Some("sawtooth")), WaveKind::Flat);
        assert!("sawtooth".parse::<WaveKind>().is_err());
    }

    #[test]
    fn flat_line() {
        assert_eq!(wave(WaveKind::Flat).path(), "M 0,30 L 1200,30");
    }

    #[test]
    fn sine_has_a_point_every_five_units() {
        let d = wave(WaveKind::Sine).path();
        assert!(d.starts_with("M 0,30 L 0,30 L 5,"));
        assert_eq!(d.matches(" L ").count(), 241);
    }

    #[test]
    fn square_first_period() {
        let d = wave(WaveKind::Square).path();
        assert!(d.starts_with("M 0,30 L 0,15 L 40,15 L 40,45 L 80,45 L 80,15"));
    }

    #[test]
    fn pulse_first_period() {
        let d = wave(WaveKind::Pulse).path();
        assert!(d.starts_with("M 0,30 L 0,30 L 0,15 L 10,15 L 10,30 L 100,30"));
    }

    #[test]
    fn live_sine_moves() {
        let mut w = wave(WaveKind::Sine);
        let first = w.path();
        assert_ne!(w.advance(), first);
        assert!(WaveKind::Sine.is_live() && !WaveKind::Square.is_live());
    }
}
