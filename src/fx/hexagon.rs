// hexagon.rs - Hexagonal LED border geometry (200x200 view box)

use crate::render::Point;

pub const VIEW_BOX: &str = "0 0 200 200";
pub const PATH: &str = "M 100,10 L 173.2,50 L 173.2,150 L 100,190 L 26.8,150 L 26.8,50 Z";
pub const LAYERS: usize = 3;

const CENTER: Point = Point::new(100.0, 100.0);
const LED_RADIUS: f32 = 85.0;
const LED_COUNT: usize = 6;
const LED_STAGGER_S: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Led {
    pub at: Point,
    pub delay_s: f32,
}

/// One LED per side, starting at the top and going clockwise
pub fn leds() -> [Led; LED_COUNT] {
    std::array::from_fn(|i| {
        let angle = (i as f32 * 60.0 - 90.0).to_radians();
        Led {
            at: Point::new(CENTER.x + LED_RADIUS * angle.cos(), CENTER.y + LED_RADIUS * angle.sin()),
            delay_s: i as f32 * LED_STAGGER_S,
        }
    })
}

pub fn layer_class(i: usize) -> String {
    format!("hex-layer hex-layer-{i}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_led_is_at_top() {
        let l = leds();
        assert!((l[0].at.x - 100.0).abs() < 1e-3);
        assert!((l[0].at.y - 15.0).abs() < 1e-3);
        assert!((l[3].at.y - 185.0).abs() < 1e-3);
        assert!((l[5].delay_s - 0.75).abs() < 1e-6);
    }
}
