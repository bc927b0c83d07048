// fxpreview - Render the hero backdrop offline
//
// Runs the character rain and particle network for N frames with a fixed
// seed, lays a sine divider along the bottom edge and writes a PNG.
//
// Usage: cargo run --bin fxpreview -- <out.png> [--width N] [--height N] [--frames N] [--seed N]

#[cfg(not(target_arch = "wasm32"))]
mod raster;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::env;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <out.png> [--width N] [--height N] [--frames N] [--seed N]", args[0]);
        std::process::exit(1);
    }

    let out = &args[1];
    let mut opts = preview::Options::default();

    let mut i = 2;
    while i < args.len() {
        let val = args.get(i + 1).and_then(|s| s.parse().ok());
        match args[i].as_str() {
            "--width" => { opts.width = val.unwrap_or(opts.width); i += 2; }
            "--height" => { opts.height = val.unwrap_or(opts.height); i += 2; }
            "--frames" => { opts.frames = val.unwrap_or(opts.frames); i += 2; }
            "--seed" => { opts.seed = val.unwrap_or(opts.seed); i += 2; }
            _ => i += 1,
        }
    }

    println!("Rendering {} frames at {}x{} (seed {})...", opts.frames, opts.width, opts.height, opts.seed);
    if let Err(e) = preview::run(out, &opts) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    println!("Done! Wrote {out}");
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use std::error::Error;

    use circuit_fx::SiteConfig;
    use circuit_fx::fx::particles::ParticleField;
    use circuit_fx::fx::rain::CharRain;
    use circuit_fx::fx::waveform::{WaveKind, Waveform};
    use circuit_fx::render::{self, BACKDROP, Glow, Point, RED, Surface};
    use circuit_fx::rng::XorShift32;

    use crate::raster::Raster;

    pub struct Options {
        pub width: u32,
        pub height: u32,
        pub frames: u32,
        pub seed: u32,
    }

    impl Default for Options {
        fn default() -> Self {
            Self { width: 1280, height: 720, frames: 240, seed: 0xDEADBEEF }
        }
    }

    pub fn run(out: &str, opts: &Options) -> Result<(), Box<dyn Error>> {
        let cfg = SiteConfig::default();
        let (w, h) = (opts.width as f32, opts.height as f32);
        let mut rng = XorShift32::new(opts.seed);

        let mut rain = CharRain::new(w, h, &cfg.rain)?;
        let mut field = ParticleField::new(w, h, &cfg.particles, &mut rng);
        let mut wave = Waveform::new(WaveKind::Sine, &cfg.waveform);

        let mut backdrop = Raster::filled(opts.width, opts.height, BACKDROP);
        let mut network = Raster::new(opts.width, opts.height);

        println!("  Simulating...");
        for _ in 0..opts.frames {
            let glyphs = rain.tick(&mut rng);
            render::draw_rain(&mut backdrop, &glyphs, rain.font_size(), cfg.rain.fade_alpha);
            field.update();
            wave.advance();
        }

        println!("  Compositing...");
        render::draw_particles(&mut network, &field);
        backdrop.composite(&network);
        draw_wave(&mut backdrop, &wave, cfg.waveform.width, cfg.waveform.height);

        let img = image::RgbImage::from_raw(opts.width, opts.height, backdrop.to_rgb())
            .ok_or("raster size mismatch")?;
        img.save(out)?;
        Ok(())
    }

    /// Scale the divider to the image width and pin it to the bottom edge
    fn draw_wave(s: &mut impl Surface, wave: &Waveform, wave_w: f32, wave_h: f32) {
        let (w, h) = s.size();
        let sx = w / wave_w.max(1.0);
        let place = |p: Point| Point::new(p.x * sx, h - wave_h + p.y);

        s.set_glow(Some(Glow { blur: 4.0, color: RED.with_alpha(0.5) }));
        let mut prev = place(wave.start());
        for p in wave.points() {
            let next = place(p);
            s.line(prev, next, RED.with_alpha(0.8), 2.0);
            prev = next;
        }
        s.set_glow(None);
    }
}
