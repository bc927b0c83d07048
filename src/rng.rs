// rng.rs - Random number source
//
// Effects only need uniform floats in [0, 1). Everything random goes
// through `Entropy` so tests can script the sequence.

pub trait Entropy {
    /// Uniform sample in [0, 1)
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in [lo, hi)
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform index in 0..n, n must be > 0
    fn index(&mut self, n: usize) -> usize {
        ((self.next_f32() * n as f32) as usize).min(n - 1)
    }

    /// True with probability p
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

/// xorshift32
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        Self { state: if seed == 0 { 0xDEADBEEF } else { seed } }
    }

    /// Seed from the browser's Math.random()
    #[cfg(target_arch = "wasm32")]
    pub fn from_js() -> Self {
        Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(0xDEADBEEF)
    }
}

impl Entropy for XorShift32 {
    #[inline(always)]
    fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f32 * (1.0 / 16777216.0)
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct Scripted {
    samples: Vec<f32>,
    pos: usize,
}

impl Scripted {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        Self { samples: samples.into(), pos: 0 }
    }
}

impl Entropy for Scripted {
    fn next_f32(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let v = self.samples[self.pos % self.samples.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_stays_in_unit_interval() {
        let mut rng = XorShift32::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut a = XorShift32::new(0);
        let mut b = XorShift32::default();
        assert_eq!(a.next_f32(), b.next_f32());
    }

    #[test]
    fn index_never_reaches_n() {
        let mut rng = Scripted::new([0.0, 0.5, 0.999_999]);
        for _ in 0..3 {
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn scripted_cycles() {
        let mut rng = Scripted::new([0.1, 0.9]);
        assert_eq!(rng.next_f32(), 0.1);
        assert_eq!(rng.next_f32(), 0.9);
        assert_eq!(rng.next_f32(), 0.1);
    }
}
