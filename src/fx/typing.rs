// typing.rs - Type/delete phrase cycler
//
// State is (phrase index, visible length in chars, deleting). Each step
// moves one character and returns how long to wait before the next step.

use crate::config::TypingConfig;
use crate::error::{FxError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
    pub gap_ms: u32,
}

impl From<&TypingConfig> for Timing {
    fn from(cfg: &TypingConfig) -> Self {
        Self {
            type_ms: cfg.type_ms,
            delete_ms: cfg.delete_ms,
            pause_ms: cfg.pause_ms,
            gap_ms: cfg.gap_ms,
        }
    }
}

pub struct TypingCycler {
    phrases: Vec<String>,
    timing: Timing,
    index: usize,
    len: usize,
    deleting: bool,
}

impl TypingCycler {
    pub fn new(phrases: Vec<String>, timing: Timing) -> Result<Self> {
        if phrases.is_empty() {
            return Err(FxError::NoPhrases);
        }
        Ok(Self { phrases, timing, index: 0, len: 0, deleting: false })
    }

    pub fn from_config(cfg: &TypingConfig) -> Result<Self> {
        Self::new(cfg.phrases.clone(), Timing::from(cfg))
    }

    /// Move one character, returning the delay before the next step in ms
    pub fn step(&mut self) -> u32 {
        let full = self.phrases[self.index].chars().count();

        if self.deleting {
            self.len = self.len.saturating_sub(1);
        } else {
            self.len = (self.len + 1).min(full);
        }

        if !self.deleting && self.len == full {
            self.deleting = true;
            self.timing.pause_ms
        } else if self.deleting && self.len == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            self.timing.gap_ms
        } else if self.deleting {
            self.timing.delete_ms
        } else {
            self.timing.type_ms
        }
    }

    /// Currently visible prefix of the current phrase
    pub fn text(&self) -> &str {
        // After the gap the index already points at the next phrase; len is 0
        let phrase = &self.phrases[self.index];
        match phrase.char_indices().nth(self.len) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn is_deleting(&self) -> bool { self.deleting }
    pub fn phrase_index(&self) -> usize { self.index }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Timing = Timing { type_ms: 100, delete_ms: 50, pause_ms: 2000, gap_ms: 500 };

    fn cycler(p: &[&str]) -> TypingCycler {
        TypingCycler::new(p.iter().map(|s| s.to_string()).collect(), T).unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(TypingCycler::new(vec![], T), Err(FxError::NoPhrases)));
    }

    #[test]
    fn types_then_pauses() {
        let mut c = cycler(&["abc"]);
        assert_eq!(c.step(), 100);
        assert_eq!(c.text(), "a");
        assert_eq!(c.step(), 100);
        assert_eq!(c.step(), 2000);
        assert_eq!(c.text(), "abc");
        assert!(c.is_deleting());
        assert_eq!(c.step(), 50);
        assert_eq!(c.text(), "ab");
    }

    #[test]
    fn multibyte_prefixes() {
        let mut c = cycler(&["πΩ"]);
        c.step();
        assert_eq!(c.text(), "π");
        c.step();
        assert_eq!(c.text(), "πΩ");
    }

    #[test]
    fn empty_phrase_is_skipped_through() {
        let mut c = cycler(&["", "x"]);
        assert_eq!(c.step(), 2000);
        assert_eq!(c.text(), "");
        assert_eq!(c.step(), 500);
        assert_eq!(c.phrase_index(), 1);
    }
}
