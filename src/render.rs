// render.rs - Drawing seam between effect state and a 2D surface
//
// Frame renderers only talk to `Surface`. In the browser it is backed by a
// CanvasRenderingContext2d, in the preview tool by an RGBA raster.

use crate::fx::particles::{Kind, ParticleField};
use crate::fx::rain::Glyph;
use crate::fx::skills::Link;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const RED: Rgba = Rgba::new(239, 68, 68, 1.0);
pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
pub const BACKDROP: Rgba = Rgba::new(10, 10, 10, 1.0);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dist(self, o: Point) -> f32 {
        let dx = self.x - o.x;
        let dy = self.y - o.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn lerp(self, o: Point, t: f32) -> Point {
        Point::new(self.x + (o.x - self.x) * t, self.y + (o.y - self.y) * t)
    }
}

/// Soft glow applied to subsequent fills and strokes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba, width: f32);
    fn fill_circle(&mut self, c: Point, r: f32, color: Rgba);
    fn line(&mut self, a: Point, b: Point, color: Rgba, width: f32);
    fn quad_curve(&mut self, a: Point, ctrl: Point, b: Point, color: Rgba, width: f32);
    fn text(&mut self, ch: char, at: Point, size: f32, color: Rgba);
    fn set_glow(&mut self, glow: Option<Glow>);
}

// ============================================================================
// Frame renderers
// ============================================================================

/// One rain frame: dim what was there, then draw the new glyph row
pub fn draw_rain(s: &mut impl Surface, glyphs: &[Glyph], font_size: f32, fade_alpha: f32) {
    let (w, h) = s.size();
    s.set_glow(None);
    s.fill_rect(0.0, 0.0, w, h, BACKDROP.with_alpha(fade_alpha));

    s.set_glow(Some(Glow { blur: 10.0, color: RED.with_alpha(0.5) }));
    for g in glyphs {
        s.text(g.ch, Point::new(g.x, g.y), font_size, RED);
    }
    s.set_glow(None);
}

pub fn draw_particles(s: &mut impl Surface, field: &ParticleField) {
    s.clear();

    for link in field.links() {
        let a = field.position(link.a);
        let b = field.position(link.b);
        s.line(a, b, RED.with_alpha(link.opacity), 0.5);
    }

    for i in 0..field.len() {
        let p = field.position(i);
        match field.kind(i) {
            Kind::Chip => draw_chip(s, p),
            Kind::Node => {
                s.set_glow(Some(Glow { blur: 8.0, color: RED.with_alpha(0.6) }));
                s.fill_circle(p, field.radius(i), RED.with_alpha(0.8));
                s.set_glow(None);
            }
        }
    }
}

fn draw_chip(s: &mut impl Surface, p: Point) {
    s.fill_rect(p.x - 3.0, p.y - 3.0, 6.0, 6.0, RED.with_alpha(0.8));
    s.stroke_rect(p.x - 4.0, p.y - 4.0, 8.0, 8.0, RED.with_alpha(0.6), 1.0);

    let pin = RED.with_alpha(0.5);
    for side in [-1.0f32, 1.0] {
        for dy in [-2.0f32, 2.0] {
            let a = Point::new(p.x - 4.0 * side, p.y + dy);
            let b = Point::new(p.x - 6.0 * side, p.y + dy);
            s.line(a, b, pin, 1.0);
        }
    }
}

/// Skill overlay: curved links from the active node, then the node dots.
/// The active dot is drawn even when it has no links.
pub fn draw_skill_links(s: &mut impl Surface, active: Option<Point>, links: &[Link]) {
    s.clear();
    let Some(active) = active else { return };

    s.set_glow(Some(Glow { blur: 10.0, color: RED.with_alpha(0.5) }));
    for l in links {
        s.quad_curve(l.from, l.ctrl, l.to, RED.with_alpha(0.6), 2.0);
    }

    node_dot(s, active, 6.0, RED, 15.0);
    for l in links {
        node_dot(s, l.to, 4.0, RED.with_alpha(0.6), 8.0);
    }
    s.set_glow(None);
}

fn node_dot(s: &mut impl Surface, c: Point, r: f32, color: Rgba, blur: f32) {
    s.set_glow(Some(Glow { blur, color: RED }));
    s.fill_circle(c, r, color);
    s.set_glow(None);
    s.fill_circle(c, r / 2.0, WHITE.with_alpha(0.5));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts filled circles, ignores everything else
    #[derive(Default)]
    struct Circles(Vec<(Point, f32)>);

    impl Surface for Circles {
        fn size(&self) -> (f32, f32) { (100.0, 100.0) }
        fn clear(&mut self) { self.0.clear(); }
        fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Rgba) {}
        fn stroke_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Rgba, _: f32) {}
        fn fill_circle(&mut self, c: Point, r: f32, _: Rgba) { self.0.push((c, r)); }
        fn line(&mut self, _: Point, _: Point, _: Rgba, _: f32) {}
        fn quad_curve(&mut self, _: Point, _: Point, _: Point, _: Rgba, _: f32) {}
        fn text(&mut self, _: char, _: Point, _: f32, _: Rgba) {}
        fn set_glow(&mut self, _: Option<Glow>) {}
    }

    #[test]
    fn lone_active_node_still_gets_a_dot() {
        let mut s = Circles::default();
        let at = Point::new(10.0, 20.0);
        draw_skill_links(&mut s, Some(at), &[]);
        assert_eq!(s.0, vec![(at, 6.0), (at, 3.0)]);

        draw_skill_links(&mut s, None, &[]);
        assert!(s.0.is_empty());
    }

    #[test]
    fn linked_nodes_get_dots() {
        let mut s = Circles::default();
        let a = Point::new(0.0, 100.0);
        let b = Point::new(100.0, 100.0);
        draw_skill_links(&mut s, Some(a), &[Link::arc(a, b)]);
        assert_eq!(s.0.len(), 4);
        assert_eq!(s.0[2], (b, 4.0));
    }

    #[test]
    fn css_strings() {
        assert_eq!(RED.css(), "#ef4444");
        assert_eq!(RED.with_alpha(0.5).css(), "rgba(239, 68, 68, 0.5)");
    }

    #[test]
    fn point_math() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(1.5, 2.0));
    }
}
