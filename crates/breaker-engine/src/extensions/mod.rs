// extensions/mod.rs
//
// Optional extension modules for the breaker engine.
// These are decoupled from collision; camera and animation opt in to them.

pub mod easing;
pub mod tween;

pub use easing::{ease, lerp, Easing};
pub use tween::Tween;
