// counter.rs - Visibility-triggered numeric counters
//
// A counter animates at most once. After it settles it may briefly flicker
// to a random value, then restore the target.

use crate::config::CounterConfig;
use crate::rng::Entropy;

pub struct StatCounter {
    target: u32,
    duration_ms: f64,
    flicker_chance: f32,
    animated: bool,
}

impl StatCounter {
    pub fn new(target: u32, cfg: &CounterConfig) -> Self {
        Self {
            target,
            duration_ms: cfg.duration_ms.max(1.0),
            flicker_chance: cfg.flicker_chance,
            animated: false,
        }
    }

    /// Parse the `data-target` attribute by its leading integer, so `"100+"`
    /// is 100 and `"7.5"` is 7. No leading digits counts to 0.
    pub fn parse_target(attr: Option<&str>) -> u32 {
        let Some(s) = attr else { return 0 };
        let s = s.trim();
        let s = s.strip_prefix('+').unwrap_or(s);
        s.bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u32, |n, d| n.saturating_mul(10).saturating_add(u32::from(d - b'0')))
    }

    /// Claim the one animation run. False if it already happened.
    pub fn trigger(&mut self) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        true
    }

    pub fn has_animated(&self) -> bool { self.animated }
    pub fn target(&self) -> u32 { self.target }

    /// Displayed value `elapsed_ms` after the start, with ease-out-quart
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            return self.target;
        }
        let eased = 1.0 - (1.0 - p).powi(4);
        (self.target as f64 * eased).floor() as u32
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Roll for a flicker; returns the value to flash, if any
    pub fn flicker(&self, rng: &mut impl Entropy) -> Option<u32> {
        if rng.next_f32() > 1.0 - self.flicker_chance {
            let v = rng.index((self.target as usize).saturating_add(5));
            Some(u32::try_from(v).unwrap_or(u32::MAX))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;

    fn counter(target: u32) -> StatCounter {
        StatCounter::new(target, &CounterConfig::default())
    }

    #[test]
    fn eases_to_target() {
        let c = counter(100);
        assert_eq!(c.value_at(0.0), 0);
        assert_eq!(c.value_at(1000.0), 93);
        assert_eq!(c.value_at(2000.0), 100);
        assert_eq!(c.value_at(5000.0), 100);
    }

    #[test]
    fn parse_target_tolerates_garbage() {
        assert_eq!(StatCounter::parse_target(Some(" 42 ")), 42);
        assert_eq!(StatCounter::parse_target(Some("lots")), 0);
        assert_eq!(StatCounter::parse_target(None), 0);
        assert_eq!(StatCounter::parse_target(Some("100+")), 100);
        assert_eq!(StatCounter::parse_target(Some("7.5")), 7);
        assert_eq!(StatCounter::parse_target(Some("+12")), 12);
        assert_eq!(StatCounter::parse_target(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn flicker_is_rare_and_bounded() {
        let c = counter(10);
        assert_eq!(c.flicker(&mut Scripted::new([0.5])), None);
        let v = c.flicker(&mut Scripted::new([0.99, 0.999])).unwrap();
        assert!(v < 15);
    }

    #[test]
    fn flicker_at_max_target_does_not_overflow() {
        let c = counter(u32::MAX);
        assert!(c.flicker(&mut Scripted::new([0.99, 0.999])).is_some());
    }
}
