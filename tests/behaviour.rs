use circuit_fx::config::{CounterConfig, RainConfig};
use circuit_fx::fx::counter::StatCounter;
use circuit_fx::fx::particles::{Kind, ParticleField};
use circuit_fx::fx::rain::CharRain;
use circuit_fx::fx::terminal::{self, LineClass, Response, Session};
use circuit_fx::fx::typing::{Timing, TypingCycler};
use circuit_fx::rng::{Scripted, XorShift32};
use proptest::prelude::*;

const TIMING: Timing = Timing { type_ms: 100, delete_ms: 50, pause_ms: 2000, gap_ms: 500 };

#[test]
fn typing_cycles_through_phrases() {
    let mut c = TypingCycler::new(vec!["A".into(), "BB".into()], TIMING).unwrap();

    let mut seen = Vec::new();
    for _ in 0..7 {
        let delay = c.step();
        seen.push((c.text().to_string(), delay, c.is_deleting()));
    }

    let expected = [
        ("A", 2000, true),
        ("", 500, false),
        ("B", 100, false),
        ("BB", 2000, true),
        ("B", 50, true),
        ("", 500, false),
        ("A", 2000, true),
    ];
    for (got, want) in seen.iter().zip(expected) {
        assert_eq!((got.0.as_str(), got.1, got.2), want);
    }
}

#[test]
fn typing_handles_multibyte_phrases() {
    let mut c = TypingCycler::new(vec!["héllo".into()], TIMING).unwrap();
    c.step();
    c.step();
    assert_eq!(c.text(), "hé");
}

#[test]
fn terminal_help_ignores_case_and_whitespace() {
    let resp = terminal::dispatch("HELP ", &mut Scripted::new([0.0]));
    assert_eq!(resp, Response::Text { body: terminal::HELP.to_string(), class: LineClass::Normal });
}

#[test]
fn terminal_unknown_command() {
    let resp = terminal::dispatch("xyz", &mut Scripted::new([0.0]));
    assert_eq!(
        resp,
        Response::Text {
            body: "Command not found: xyz\nType 'help' for available commands.".to_string(),
            class: LineClass::Error,
        }
    );
}

#[test]
fn terminal_session_clear_drops_history() {
    let mut rng = XorShift32::new(7);
    let mut s = Session::new();
    s.execute("about", &mut rng);
    assert_eq!(s.lines().len(), 2);
    assert_eq!(s.lines()[0].class, LineClass::Command);
    assert_eq!(s.execute("clear", &mut rng), Response::Clear);
    assert!(s.lines().is_empty());
}

#[test]
fn particle_past_right_edge_reflects() {
    let mut f = ParticleField::empty(100.0, 100.0, 150.0);
    f.push(99.5, 50.0, 1.0, 0.0, 2.0, Kind::Node);
    f.update();
    assert_eq!(f.velocity(0), (-1.0, 0.0));
    assert_eq!(f.position(0).x, 100.0);
}

proptest! {
    #[test]
    fn particles_stay_in_bounds(
        seed in 1u32..,
        w in 10.0f32..2000.0,
        h in 10.0f32..2000.0,
        frames in 1usize..200,
    ) {
        let cfg = circuit_fx::config::ParticleConfig { speed: 4.0, ..Default::default() };
        let mut f = ParticleField::new(w, h, &cfg, &mut XorShift32::new(seed));
        for _ in 0..frames {
            f.update();
        }
        for i in 0..f.len() {
            let p = f.position(i);
            prop_assert!((0.0..=w).contains(&p.x));
            prop_assert!((0.0..=h).contains(&p.y));
        }
    }
}

#[test]
fn rain_resets_only_past_bottom_and_on_roll() {
    // One column, two rows deep
    let mut rain = CharRain::new(14.0, 28.0, &RainConfig::default()).unwrap();
    assert_eq!(rain.columns(), 1);

    // Samples alternate: glyph pick, then reset roll when past the bottom
    let mut miss = Scripted::new([0.0, 0.5]);
    for _ in 0..3 {
        rain.tick(&mut miss);
    }
    assert_eq!(rain.drops(), [4]);

    let mut hit = Scripted::new([0.0, 0.99]);
    rain.tick(&mut hit);
    assert_eq!(rain.drops(), [1]);
}

#[test]
fn counter_animates_once() {
    let mut c = StatCounter::new(50, &CounterConfig::default());
    assert!(c.trigger());
    assert!(!c.trigger());
    assert!(c.has_animated());
}
