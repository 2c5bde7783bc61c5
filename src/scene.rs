//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::rasterizer::{Camera, Color, Projection, Triangle, Vec3};

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::SerializeError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
            SceneError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// Everything the frame loop needs to render: one triangle, the camera,
/// the projection parameters, and a couple of knobs for input and colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub triangle: Triangle,
    pub camera: Camera,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera movement speed in world units per second
    pub move_speed: f32,
    pub fill_color: Color,
    pub background: Color,
}

impl Scene {
    /// Projection for the current viewport shape.
    pub fn projection(&self, aspect: f32) -> Projection {
        Projection::with_fov_degrees(self.fov_degrees, aspect, self.near, self.far)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            triangle: Triangle::new(
                Vec3::new(502.0, 3.0, 200.0),
                Vec3::new(381.0, 242.0, 300.0),
                Vec3::new(119.0, 113.0, 400.0),
            ),
            camera: Camera::new(
                Vec3::new(334.0, 119.0, 0.0),
                // Center of the triangle
                Vec3::new(334.0, 119.0, 300.0),
                Vec3::UP,
            ),
            fov_degrees: 60.0,
            near: 1.0,
            far: 1000.0,
            move_speed: 500.0,
            fill_color: Color::ORANGE,
            background: Color::BLACK,
        }
    }
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    let scene: Scene = ron::from_str(&contents)?;
    Ok(scene)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(scene, config)?;
    fs::write(path, contents)?;
    Ok(())
}
