//! Software 3D rasterizer core
//!
//! Pure value-in/value-out pipeline: a model-space triangle and a camera go
//! in, a screen-space triangle comes out, and a per-pixel containment test
//! fills it into a framebuffer. Window, input, and presentation live in the
//! frame loop, not here.

mod camera;
mod math;
mod render;
mod transform;
mod types;

pub use camera::*;
pub use math::*;
pub use render::*;
pub use transform::*;
pub use types::*;

/// Viewport dimensions
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;
