pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::game::{SimConfig, World};
pub use api::runner::LevelRunner;
pub use api::types::{ClipRect, EntityId};
pub use assets::level::{Level, TriggerCell};
pub use components::animation::{AnimationDef, AnimationKey, Animator};
pub use components::entity::Entity;
pub use components::kind::{ChoosesAnimation, EntityKind, ProtagonistKind, UpdatesMotion};
pub use components::motion::{MotionState, Tuning};
pub use core::collision::{resolve, Resolution};
pub use core::grid::{Cell, CellRange, Grid, TileKind, GRID_SIZE};
pub use core::rect::Rect;
pub use core::time::{FixedTimestep, ManualTicks, TickDriver};
pub use error::{ConfigError, LevelError, LoadError};
pub use input::{Controller, InputEvent, InputIntent, InputQueue, InputType, KeyMap};
pub use renderer::{compose, Camera, CameraMode, DirtyRegion, Layer, LayerStack};

pub use extensions::{ease, lerp, Easing, Tween};
