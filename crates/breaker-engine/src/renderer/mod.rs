pub mod camera;
pub mod compositor;
pub mod dirty;

pub use camera::{Camera, CameraMode};
pub use compositor::{compose, Layer, LayerStack};
pub use dirty::DirtyRegion;
