//! Camera state and the view/projection matrix builders
//!
//! Convention used throughout: right-handed look-at. In view space the
//! camera sits at the origin looking down -Z, with +X right and +Y up.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::math::{deg_to_rad, Mat4, Vec3};

/// A look-at camera. Mutated by input handling between frames; the
/// transform pipeline only ever reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// Camera states that would degenerate into NaN basis vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// `target == position`: the forward vector has no direction
    DegenerateForward,
    /// `up` parallel to the view direction: the right vector vanishes
    UpParallelToForward,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::DegenerateForward => {
                write!(f, "camera target coincides with its position")
            }
            CameraError::UpParallelToForward => {
                write!(f, "camera up vector is parallel to the view direction")
            }
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { position, target, up }
    }

    /// Reject camera states whose basis vectors cannot be normalized.
    /// `view_matrix` trusts the caller; run this after mutating the camera.
    pub fn validate(&self) -> Result<(), CameraError> {
        let forward = self.target - self.position;
        if forward.len() < f32::EPSILON {
            return Err(CameraError::DegenerateForward);
        }
        if forward.normalize().cross(self.up).len() < 1e-6 {
            return Err(CameraError::UpParallelToForward);
        }
        Ok(())
    }

    /// Orthonormal camera basis: (right, true up, forward).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(self.up).normalize();
        let true_up = right.cross(forward);
        (right, true_up, forward)
    }

    /// Build the look-at (view) matrix: the inverse of the camera's own
    /// transform. Rows are the basis vectors, so the rotation block aligns
    /// the world with the camera axes, and the last column translates the
    /// camera to the origin:
    ///
    /// ```text
    /// |  r.x   r.y   r.z  -dot(r, pos) |
    /// |  u.x   u.y   u.z  -dot(u, pos) |
    /// | -f.x  -f.y  -f.z   dot(f, pos) |
    /// |  0     0     0     1           |
    /// ```
    ///
    /// The third row negates forward so that the view direction maps onto
    /// -Z. Degenerate camera states produce NaN here; see [`Camera::validate`].
    pub fn view_matrix(&self) -> Mat4 {
        let (right, true_up, forward) = self.basis();
        let back = -forward;

        Mat4 {
            m: [
                [right.x, right.y, right.z, -right.dot(self.position)],
                [true_up.x, true_up.y, true_up.z, -true_up.dot(self.position)],
                [back.x, back.y, back.z, forward.dot(self.position)],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Shift position and target together, keeping the view direction.
    pub fn translate(&mut self, delta: Vec3) {
        self.position = self.position + delta;
        self.target = self.target + delta;
    }
}

/// Perspective projection parameters. `fov_y` is the vertical field of
/// view in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// Projection parameters that break the matrix derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// fov outside (0, pi)
    InvalidFov,
    /// aspect ratio not strictly positive
    InvalidAspect,
    /// requires 0 < near < far, else the z-scaling terms divide by zero
    InvalidPlanes,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidFov => write!(f, "field of view must be in (0, pi)"),
            ProjectionError::InvalidAspect => write!(f, "aspect ratio must be positive"),
            ProjectionError::InvalidPlanes => {
                write!(f, "clip planes must satisfy 0 < near < far")
            }
        }
    }
}

impl Projection {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self { fov_y, aspect, near, far }
    }

    /// Same, with the field of view given in degrees.
    pub fn with_fov_degrees(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(deg_to_rad(fov_deg), aspect, near, far)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !(self.fov_y > 0.0 && self.fov_y < std::f32::consts::PI) {
            return Err(ProjectionError::InvalidFov);
        }
        if !(self.aspect > 0.0) {
            return Err(ProjectionError::InvalidAspect);
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ProjectionError::InvalidPlanes);
        }
        Ok(())
    }

    /// Standard perspective matrix over `tan(fov/2)`. View-space depth
    /// (-Z in front of the camera) lands in NDC z within [-1, 1] after the
    /// divide, increasing monotonically from near to far.
    pub fn matrix(&self) -> Mat4 {
        let tan_half_fov = (self.fov_y / 2.0).tan();
        let mut m = [[0.0f32; 4]; 4];

        m[0][0] = 1.0 / (self.aspect * tan_half_fov);
        m[1][1] = 1.0 / tan_half_fov;
        m[2][2] = -(self.far + self.near) / (self.far - self.near);
        m[2][3] = -(2.0 * self.far * self.near) / (self.far - self.near);
        m[3][2] = -1.0;

        Mat4 { m }
    }
}
