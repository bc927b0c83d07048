// raster.rs - Software Surface for offline previews
//
// Premultiplied RGBA in f32, 0..255 per channel. Coverage is binary: a pixel
// is either inside a shape or not. Glow is approximated with a wider, faint
// pass under circles and lines.

use circuit_fx::render::{Glow, Point, Rgba, Surface};

#[derive(Clone, Copy, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Premultiply a straight-alpha color
    pub fn from_rgba(c: Rgba) -> Self {
        let a = c.a.clamp(0.0, 1.0);
        Self { r: c.r as f32 * a, g: c.g as f32 * a, b: c.b as f32 * a, a }
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8,
        ]
    }

    /// Source-over
    pub fn over(self, dst: Color) -> Color {
        self + dst * (1.0 - self.a)
    }
}

impl std::ops::Add for Color {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self { r: self.r + o.r, g: self.g + o.g, b: self.b + o.b, a: self.a + o.a }
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self { r: self.r * s, g: self.g * s, b: self.b * s, a: self.a * s }
    }
}

pub struct Raster {
    w: u32,
    h: u32,
    px: Vec<Color>,
    glow: Option<Glow>,
}

impl Raster {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h, px: vec![Color::default(); (w * h) as usize], glow: None }
    }

    pub fn filled(w: u32, h: u32, color: Rgba) -> Self {
        let mut r = Self::new(w, h);
        r.px.fill(Color::from_rgba(color));
        r
    }

    /// Draw `top` over self
    pub fn composite(&mut self, top: &Raster) {
        for (dst, src) in self.px.iter_mut().zip(&top.px) {
            *dst = src.over(*dst);
        }
    }

    pub fn to_rgb(&self) -> Vec<u8> {
        self.px.iter().flat_map(|c| c.to_rgb()).collect()
    }

    fn plot(&mut self, x: i32, y: i32, c: Color) {
        if x < 0 || y < 0 || x >= self.w as i32 || y >= self.h as i32 {
            return;
        }
        let i = (y as u32 * self.w + x as u32) as usize;
        self.px[i] = c.over(self.px[i]);
    }

    fn disc(&mut self, c: Point, r: f32, color: Color) {
        let r2 = r * r;
        for y in (c.y - r).floor() as i32..=(c.y + r).ceil() as i32 {
            for x in (c.x - r).floor() as i32..=(c.x + r).ceil() as i32 {
                let dx = x as f32 + 0.5 - c.x;
                let dy = y as f32 + 0.5 - c.y;
                if dx * dx + dy * dy <= r2 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    fn segment(&mut self, a: Point, b: Point, color: Color, width: f32) {
        let steps = a.dist(b).ceil().max(1.0) as usize;
        let half = (width / 2.0).max(0.5);
        for i in 0..=steps {
            let p = a.lerp(b, i as f32 / steps as f32);
            if half <= 0.5 {
                self.plot(p.x as i32, p.y as i32, color);
            } else {
                self.disc(p, half, color);
            }
        }
    }

    fn halo(&self) -> Option<(f32, Color)> {
        self.glow.map(|g| (g.blur / 2.0, Color::from_rgba(g.color) * 0.15))
    }
}

impl Surface for Raster {
    fn size(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }

    fn clear(&mut self) {
        self.px.fill(Color::default());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let c = Color::from_rgba(color);
        for py in y.floor() as i32..(y + h).ceil() as i32 {
            for px in x.floor() as i32..(x + w).ceil() as i32 {
                self.plot(px, py, c);
            }
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, width: f32) {
        let c = Color::from_rgba(color);
        let corners = [Point::new(x, y), Point::new(x + w, y), Point::new(x + w, y + h), Point::new(x, y + h)];
        for i in 0..4 {
            self.segment(corners[i], corners[(i + 1) % 4], c, width);
        }
    }

    fn fill_circle(&mut self, c: Point, r: f32, color: Rgba) {
        if let Some((extra, halo)) = self.halo() {
            self.disc(c, r + extra, halo);
        }
        self.disc(c, r, Color::from_rgba(color));
    }

    fn line(&mut self, a: Point, b: Point, color: Rgba, width: f32) {
        if let Some((extra, halo)) = self.halo() {
            self.segment(a, b, halo, width + extra);
        }
        self.segment(a, b, Color::from_rgba(color), width);
    }

    fn quad_curve(&mut self, a: Point, ctrl: Point, b: Point, color: Rgba, width: f32) {
        const STEPS: usize = 16;
        let mut prev = a;
        for i in 1..=STEPS {
            let t = i as f32 / STEPS as f32;
            let next = a.lerp(ctrl, t).lerp(ctrl.lerp(b, t), t);
            self.line(prev, next, color, width);
            prev = next;
        }
    }

    /// No font here: each char becomes a 3x5 cell pattern taken from its code point
    fn text(&mut self, ch: char, at: Point, size: f32, color: Rgba) {
        let c = Color::from_rgba(color);
        let bits = (ch as u32).wrapping_mul(2654435761) >> 17;
        let cell = (size / 5.0).max(1.0);
        for row in 0..5 {
            for col in 0..3 {
                if bits & (1 << (row * 3 + col)) == 0 {
                    continue;
                }
                // `at` is the baseline-left corner, like canvas fillText
                let x = at.x + col as f32 * cell;
                let y = at.y - size + row as f32 * cell;
                for py in y as i32..(y + cell) as i32 {
                    for px in x as i32..(x + cell) as i32 {
                        self.plot(px, py, c);
                    }
                }
            }
        }
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_fx::render::RED;

    #[test]
    fn opaque_fill_replaces() {
        let mut r = Raster::filled(4, 4, Rgba::new(0, 0, 0, 1.0));
        r.fill_rect(1.0, 1.0, 2.0, 2.0, RED);
        let rgb = r.to_rgb();
        assert_eq!(&rgb[0..3], &[0, 0, 0]);
        // pixel (1, 1)
        let i = 5 * 3;
        assert_eq!(&rgb[i..i + 3], &[239, 68, 68]);
    }

    #[test]
    fn clear_is_transparent_for_composite() {
        let mut bottom = Raster::filled(2, 2, RED);
        let mut top = Raster::filled(2, 2, Rgba::new(255, 255, 255, 1.0));
        top.clear();
        bottom.composite(&top);
        assert_eq!(&bottom.to_rgb()[0..3], &[239, 68, 68]);
    }

    #[test]
    fn half_alpha_blends() {
        let mut r = Raster::filled(1, 1, Rgba::new(0, 0, 0, 1.0));
        r.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::new(200, 100, 0, 0.5));
        assert_eq!(r.to_rgb(), vec![100, 50, 0]);
    }
}
