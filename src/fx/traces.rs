// traces.rs - Random PCB trace paths with via points
//
// Paths are built once. Length and point-at-length are computed here by
// flattening quadratic segments, so vias land on the drawn curve.

use std::fmt::Write;

use crate::config::TraceConfig;
use crate::render::Point;
use crate::rng::Entropy;

const CURVE_STEPS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line(Point),
    Quad { ctrl: Point, to: Point },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Via {
    pub at: Point,
    pub pulse_s: f32,
    pub delay_s: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub start: Point,
    pub segments: Vec<Segment>,
    pub draw_s: f32,
    pub vias: Vec<Via>,
}

impl Trace {
    pub fn random(w: f32, h: f32, vias: usize, rng: &mut impl Entropy) -> Self {
        let start = random_point(w, h, rng);
        let n = 5 + rng.index(5);
        let mut segments = Vec::with_capacity(n);
        for _ in 0..n {
            let to = random_point(w, h, rng);
            if rng.next_f32() > 0.5 {
                segments.push(Segment::Line(to));
            } else {
                let ctrl = random_point(w, h, rng);
                segments.push(Segment::Quad { ctrl, to });
            }
        }

        let mut trace = Trace { start, segments, draw_s: rng.range(10.0, 20.0), vias: Vec::new() };
        let len = trace.length();
        for _ in 0..vias {
            let at = trace.point_at(rng.next_f32() * len);
            trace.vias.push(Via { at, pulse_s: rng.range(2.0, 4.0), delay_s: rng.range(0.0, 2.0) });
        }
        trace
    }

    pub fn path_data(&self) -> String {
        let mut d = format!("M {} {}", self.start.x, self.start.y);
        for s in &self.segments {
            let _ = match s {
                Segment::Line(p) => write!(d, " L {} {}", p.x, p.y),
                Segment::Quad { ctrl, to } => write!(d, " Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y),
            };
        }
        d
    }

    /// Polyline approximation of the whole path
    fn flatten(&self) -> Vec<Point> {
        let mut pts = vec![self.start];
        let mut cur = self.start;
        for s in &self.segments {
            match *s {
                Segment::Line(p) => {
                    pts.push(p);
                    cur = p;
                }
                Segment::Quad { ctrl, to } => {
                    for k in 1..=CURVE_STEPS {
                        let t = k as f32 / CURVE_STEPS as f32;
                        pts.push(cur.lerp(ctrl, t).lerp(ctrl.lerp(to, t), t));
                    }
                    cur = to;
                }
            }
        }
        pts
    }

    pub fn length(&self) -> f32 {
        self.flatten().windows(2).map(|w| w[0].dist(w[1])).sum()
    }

    pub fn point_at(&self, dist: f32) -> Point {
        let pts = self.flatten();
        let mut left = dist.max(0.0);
        for w in pts.windows(2) {
            let seg = w[0].dist(w[1]);
            if left <= seg && seg > 0.0 {
                return w[0].lerp(w[1], left / seg);
            }
            left -= seg;
        }
        pts.last().copied().unwrap_or(self.start)
    }
}

fn random_point(w: f32, h: f32, rng: &mut impl Entropy) -> Point {
    let x = rng.next_f32() * w;
    Point::new(x, rng.next_f32() * h)
}

pub fn generate(w: f32, h: f32, cfg: &TraceConfig, rng: &mut impl Entropy) -> Vec<Trace> {
    (0..cfg.count).map(|_| Trace::random(w, h, cfg.vias_per_trace, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::XorShift32;

    #[test]
    fn straight_path_length_and_midpoint() {
        let t = Trace {
            start: Point::new(0.0, 0.0),
            segments: vec![Segment::Line(Point::new(10.0, 0.0)), Segment::Line(Point::new(10.0, 10.0))],
            draw_s: 10.0,
            vias: vec![],
        };
        assert_eq!(t.length(), 20.0);
        assert_eq!(t.point_at(15.0), Point::new(10.0, 5.0));
        assert_eq!(t.point_at(99.0), Point::new(10.0, 10.0));
        assert_eq!(t.path_data(), "M 0 0 L 10 0 L 10 10");
    }

    #[test]
    fn quad_length_exceeds_chord() {
        let t = Trace {
            start: Point::new(0.0, 0.0),
            segments: vec![Segment::Quad { ctrl: Point::new(5.0, 10.0), to: Point::new(10.0, 0.0) }],
            draw_s: 10.0,
            vias: vec![],
        };
        assert!(t.length() > 10.0);
        assert!(t.path_data().contains(" Q 5 10 10 0"));
    }

    #[test]
    fn generated_traces_stay_in_bounds() {
        let mut rng = XorShift32::new(9);
        let traces = generate(400.0, 300.0, &TraceConfig::default(), &mut rng);
        assert_eq!(traces.len(), 8);
        for t in &traces {
            assert!((5..=9).contains(&t.segments.len()));
            assert!((10.0..20.0).contains(&t.draw_s));
            assert_eq!(t.vias.len(), 3);
            for v in &t.vias {
                assert!(v.at.x > -0.01 && v.at.x < 400.01 && v.at.y > -0.01 && v.at.y < 300.01);
            }
        }
    }
}
