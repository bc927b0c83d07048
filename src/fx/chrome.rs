// chrome.rs - Page chrome decisions
//
// Pure functions over scroll offsets and element geometry. The DOM layer
// reads the numbers, calls these, and applies the result.

use crate::config::ChromeConfig;

pub const REVEAL_SELECTOR: &str = ".timeline-item, .project-card, .skill-category, .education-card, .stat-card";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

pub fn navbar_scrolled(scroll_y: f64, cfg: &ChromeConfig) -> bool {
    scroll_y > cfg.scrolled_after
}

/// Section under the probe line just below the navbar. Later sections win
/// when ranges overlap.
pub fn active_section<'a>(
    scroll_y: f64,
    navbar_height: f64,
    sections: &[Section<'a>],
    cfg: &ChromeConfig,
) -> Option<&'a str> {
    let probe = scroll_y + navbar_height + cfg.active_offset;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id)
}

/// Scroll offset that puts a target just under the fixed navbar
pub fn scroll_target(offset_top: f64, navbar_height: f64) -> f64 {
    offset_top - navbar_height
}

/// In-page anchor id, or None for a bare `#` or external link
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn at(x: f64, y: f64, w: f64, h: f64, cfg: &ChromeConfig) -> Self {
        Self {
            rotate_x: (y - h / 2.0) / cfg.tilt_divisor,
            rotate_y: (w / 2.0 - x) / cfg.tilt_divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }

    pub const RESET: &'static str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";
}

/// Hamburger menu: open flag plus the styles of the three bars
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool { self.open }

    /// (transform, opacity) per bar
    pub fn bars(&self) -> [(&'static str, &'static str); 3] {
        if self.open {
            [
                ("rotate(45deg) translateY(10px)", "1"),
                ("none", "0"),
                ("rotate(-45deg) translateY(-10px)", "1"),
            ]
        } else {
            [("none", "1"), ("none", "1"), ("none", "1")]
        }
    }
}

/// Form relay redirects back with `?success…#contact`
pub fn form_submitted(hash: &str, search: &str) -> bool {
    hash == "#contact" && search.contains("success")
}

pub const FORM_THANKS: &str = "<p style=\"color: #10b981; font-weight: 500;\"><i class=\"fas fa-check-circle\"></i> Thank you! Your message has been sent successfully. I'll get back to you soon.</p>";

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ChromeConfig {
        ChromeConfig::default()
    }

    #[test]
    fn navbar_threshold() {
        assert!(!navbar_scrolled(50.0, &cfg()));
        assert!(navbar_scrolled(50.5, &cfg()));
    }

    #[test]
    fn active_section_uses_probe_line() {
        let s = [
            Section { id: "about", top: 0.0, height: 800.0 },
            Section { id: "skills", top: 800.0, height: 600.0 },
        ];
        assert_eq!(active_section(0.0, 70.0, &s, &cfg()), Some("about"));
        assert_eq!(active_section(630.0, 70.0, &s, &cfg()), Some("skills"));
        assert_eq!(active_section(5000.0, 70.0, &s, &cfg()), None);
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("#projects"), Some("projects"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://x.dev"), None);
        assert_eq!(scroll_target(900.0, 70.0), 830.0);
    }

    #[test]
    fn tilt_is_zero_at_center() {
        let t = Tilt::at(100.0, 50.0, 200.0, 100.0, &cfg());
        assert_eq!(t, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
        let t = Tilt::at(0.0, 100.0, 200.0, 100.0, &cfg());
        assert_eq!(t.transform(), "perspective(1000px) rotateX(2.5deg) rotateY(5deg) translateY(-10px)");
    }

    #[test]
    fn menu_toggles() {
        let mut m = MenuState::default();
        assert!(m.toggle());
        assert_eq!(m.bars()[1], ("none", "0"));
        m.close();
        assert!(!m.is_open());
    }

    #[test]
    fn form_success_detection() {
        assert!(form_submitted("#contact", "?success=true"));
        assert!(!form_submitted("#about", "?success=true"));
        assert!(!form_submitted("#contact", ""));
    }
}
