pub mod controller;
pub mod queue;

pub use controller::{Controller, InputIntent, InputType, KeyMap};
pub use queue::{InputEvent, InputQueue};
