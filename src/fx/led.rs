// led.rs - Status LED blink patterns

use std::str::FromStr;

use crate::error::FxError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LedPattern {
    #[default]
    SlowPulse,
    FastBlink,
    Fade,
}

impl FromStr for LedPattern {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow-pulse" => Ok(LedPattern::SlowPulse),
            "fast-blink" => Ok(LedPattern::FastBlink),
            "fade" => Ok(LedPattern::Fade),
            other => Err(FxError::UnknownLedPattern(other.to_string())),
        }
    }
}

impl LedPattern {
    /// Missing or blank means slow-pulse
    pub fn from_attr(attr: Option<&str>) -> Self {
        attr.map(str::trim).filter(|s| !s.is_empty()).map(|s| {
            s.parse().unwrap_or_else(|e| {
                log::warn!("{e}, using slow-pulse");
                LedPattern::SlowPulse
            })
        })
        .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            LedPattern::SlowPulse => "slow-pulse",
            LedPattern::FastBlink => "fast-blink",
            LedPattern::Fade => "fade",
        }
    }

    pub fn class(self) -> String {
        format!("led-status led-{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns() {
        assert_eq!(LedPattern::from_attr(None), LedPattern::SlowPulse);
        assert_eq!(LedPattern::from_attr(Some("fade")).class(), "led-status led-fade");
        assert_eq!(LedPattern::from_attr(Some("strobe")), LedPattern::SlowPulse);
    }

    #[test]
    fn blank_pattern_is_default() {
        assert_eq!(LedPattern::from_attr(Some("")), LedPattern::SlowPulse);
        assert_eq!(LedPattern::from_attr(Some(" fast-blink ")), LedPattern::FastBlink);
    }
}
