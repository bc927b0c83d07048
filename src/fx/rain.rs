// rain.rs - Falling character columns
//
// One drop position per column, counted in cells. A column that has run
// off the bottom restarts only by chance, so columns drift out of phase.

use crate::config::RainConfig;
use crate::error::{FxError, Result};
use crate::rng::Entropy;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
}

pub struct CharRain {
    w: f32,
    h: f32,
    font_size: f32,
    reset_chance: f32,
    charset: Vec<char>,
    drops: Vec<u32>,
}

impl CharRain {
    pub fn new(w: f32, h: f32, cfg: &RainConfig) -> Result<Self> {
        let charset: Vec<char> = cfg.charset.chars().collect();
        if charset.is_empty() {
            return Err(FxError::EmptyCharset);
        }
        let mut rain = Self {
            w,
            h,
            font_size: cfg.font_size.max(1.0),
            reset_chance: cfg.reset_chance.clamp(0.0, 1.0),
            charset,
            drops: Vec::new(),
        };
        rain.resize(w, h);
        Ok(rain)
    }

    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
        let columns = (w / self.font_size).floor().max(0.0) as usize;
        self.drops = vec![1; columns];
    }

    /// Advance one frame, returning the glyph drawn in each column
    pub fn tick(&mut self, rng: &mut impl Entropy) -> Vec<Glyph> {
        let mut out = Vec::with_capacity(self.drops.len());
        let threshold = 1.0 - self.reset_chance;

        for i in 0..self.drops.len() {
            let ch = self.charset[rng.index(self.charset.len())];
            let x = i as f32 * self.font_size;
            let y = self.drops[i] as f32 * self.font_size;
            out.push(Glyph { ch, x, y });

            if y > self.h && rng.next_f32() > threshold {
                self.drops[i] = 0;
            }
            self.drops[i] += 1;
        }
        out
    }

    pub fn columns(&self) -> usize { self.drops.len() }
    pub fn drops(&self) -> &[u32] { &self.drops }
    pub fn font_size(&self) -> f32 { self.font_size }
    pub fn width(&self) -> f32 { self.w }
    pub fn height(&self) -> f32 { self.h }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Scripted, XorShift32};

    fn rain(w: f32, h: f32) -> CharRain {
        CharRain::new(w, h, &RainConfig::default()).unwrap()
    }

    #[test]
    fn columns_follow_width() {
        let mut r = rain(140.0, 100.0);
        assert_eq!(r.columns(), 10);
        r.resize(29.0, 100.0);
        assert_eq!(r.columns(), 2);
        assert!(r.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn drops_advance_one_cell_per_frame() {
        let mut r = rain(28.0, 1000.0);
        let mut rng = XorShift32::new(3);
        let g = r.tick(&mut rng);
        assert_eq!(g.len(), 2);
        assert_eq!(g[1].x, 14.0);
        assert_eq!(g[0].y, 14.0);
        assert_eq!(r.drops(), &[2, 2]);
    }

    #[test]
    fn glyphs_come_from_charset() {
        let cfg = RainConfig { charset: "ab".into(), ..RainConfig::default() };
        let mut r = CharRain::new(140.0, 100.0, &cfg).unwrap();
        let mut rng = XorShift32::new(11);
        for g in r.tick(&mut rng) {
            assert!(g.ch == 'a' || g.ch == 'b');
        }
    }

    #[test]
    fn empty_charset_rejected() {
        let cfg = RainConfig { charset: String::new(), ..RainConfig::default() };
        assert!(matches!(CharRain::new(10.0, 10.0, &cfg), Err(FxError::EmptyCharset)));
    }

    #[test]
    fn zero_width_has_no_columns() {
        let mut r = rain(0.0, 100.0);
        let mut rng = Scripted::new([0.5]);
        assert!(r.tick(&mut rng).is_empty());
    }
}
