// particles.rs - Drifting particle network
//
// Structure-of-Arrays layout, same as the rain engine. Particles bounce off
// the canvas edges and are always clamped back inside.

use crate::config::ParticleConfig;
use crate::render::Point;
use crate::rng::Entropy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Node,
    Chip,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

pub struct ParticleField {
    w: f32,
    h: f32,
    link_distance: f32,

    // Position
    x: Vec<f32>,
    y: Vec<f32>,

    // Velocity
    vx: Vec<f32>,
    vy: Vec<f32>,

    radius: Vec<f32>,
    kind: Vec<Kind>,
}

impl ParticleField {
    pub fn new(w: f32, h: f32, cfg: &ParticleConfig, rng: &mut impl Entropy) -> Self {
        let mut field = Self::empty(w, h, cfg.link_distance);
        for _ in 0..cfg.count {
            let x = rng.next_f32() * w;
            let y = rng.next_f32() * h;
            let vx = (rng.next_f32() - 0.5) * cfg.speed;
            let vy = (rng.next_f32() - 0.5) * cfg.speed;
            let r = rng.range(1.0, 3.0);
            let kind = if rng.next_f32() > 1.0 - cfg.chip_ratio { Kind::Chip } else { Kind::Node };
            field.push(x, y, vx, vy, r, kind);
        }
        field
    }

    pub fn empty(w: f32, h: f32, link_distance: f32) -> Self {
        Self {
            w,
            h,
            link_distance,
            x: Vec::new(),
            y: Vec::new(),
            vx: Vec::new(),
            vy: Vec::new(),
            radius: Vec::new(),
            kind: Vec::new(),
        }
    }

    pub fn push(&mut self, x: f32, y: f32, vx: f32, vy: f32, radius: f32, kind: Kind) {
        self.x.push(x);
        self.y.push(y);
        self.vx.push(vx);
        self.vy.push(vy);
        self.radius.push(radius);
        self.kind.push(kind);
    }

    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
    }

    /// Euler step with edge reflection
    pub fn update(&mut self) {
        for i in 0..self.x.len() {
            self.x[i] += self.vx[i];
            self.y[i] += self.vy[i];

            if self.x[i] < 0.0 || self.x[i] > self.w { self.vx[i] = -self.vx[i]; }
            if self.y[i] < 0.0 || self.y[i] > self.h { self.vy[i] = -self.vy[i]; }

            self.x[i] = self.x[i].clamp(0.0, self.w.max(0.0));
            self.y[i] = self.y[i].clamp(0.0, self.h.max(0.0));
        }
    }

    /// Pairs closer than the link distance, fading with distance
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        let n = self.x.len();
        for a in 0..n {
            for b in (a + 1)..n {
                let d = self.position(a).dist(self.position(b));
                if d < self.link_distance {
                    out.push(Link { a, b, opacity: (1.0 - d / self.link_distance) * 0.3 });
                }
            }
        }
        out
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
    pub fn position(&self, i: usize) -> Point { Point::new(self.x[i], self.y[i]) }
    pub fn velocity(&self, i: usize) -> (f32, f32) { (self.vx[i], self.vy[i]) }
    pub fn radius(&self, i: usize) -> f32 { self.radius[i] }
    pub fn kind(&self, i: usize) -> Kind { self.kind[i] }
    pub fn bounds(&self) -> (f32, f32) { (self.w, self.h) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::XorShift32;

    #[test]
    fn seeded_field_matches_config() {
        let cfg = ParticleConfig::default();
        let mut rng = XorShift32::new(42);
        let f = ParticleField::new(800.0, 600.0, &cfg, &mut rng);
        assert_eq!(f.len(), 60);
        for i in 0..f.len() {
            let p = f.position(i);
            assert!((0.0..=800.0).contains(&p.x) && (0.0..=600.0).contains(&p.y));
            let (vx, vy) = f.velocity(i);
            assert!(vx.abs() <= 0.25 && vy.abs() <= 0.25);
            assert!((1.0..3.0).contains(&f.radius(i)));
        }
    }

    #[test]
    fn bottom_edge_reflects() {
        let mut f = ParticleField::empty(100.0, 100.0, 150.0);
        f.push(50.0, 99.9, 0.0, 0.5, 1.0, Kind::Node);
        f.update();
        assert_eq!(f.velocity(0).1, -0.5);
        assert_eq!(f.position(0).y, 100.0);
    }

    #[test]
    fn links_fade_with_distance() {
        let mut f = ParticleField::empty(500.0, 500.0, 150.0);
        f.push(0.0, 0.0, 0.0, 0.0, 1.0, Kind::Node);
        f.push(75.0, 0.0, 0.0, 0.0, 1.0, Kind::Chip);
        f.push(400.0, 400.0, 0.0, 0.0, 1.0, Kind::Node);
        let links = f.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].opacity - 0.15).abs() < 1e-6);
    }
}
