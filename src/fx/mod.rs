// fx/ - Effect state and geometry
//
// Everything here is plain Rust with no browser types, so it runs and
// tests natively. The dom/ layer owns the listeners and drives these.

pub mod chrome;
pub mod counter;
pub mod hexagon;
pub mod led;
pub mod particles;
pub mod rain;
pub mod skills;
pub mod styles;
pub mod terminal;
pub mod traces;
pub mod typing;
pub mod waveform;
