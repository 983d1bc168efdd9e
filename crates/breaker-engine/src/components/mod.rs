pub mod animation;
pub mod entity;
pub mod kind;
pub mod motion;

pub use animation::{AnimationDef, AnimationKey, Animator};
pub use entity::Entity;
pub use kind::{ChoosesAnimation, EntityKind, ProtagonistKind, UpdatesMotion};
pub use motion::{MotionState, Tuning};
