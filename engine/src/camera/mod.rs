//! Camera Module
//!
//! Perspective camera and mouse-driven view rotation for the drop field.
//! This module is window-system agnostic - it only deals with camera state
//! and math; the binary feeds it pointer deltas and reads matrices back.

use glam::{Mat4, Vec3};

/// Fixed-eye perspective camera looking down the field axis.
///
/// The eye sits behind the player plane and looks toward +z, into the fog.
/// Mouse input never moves the eye; it is applied separately as a
/// [`ViewRotation`] about the player pivot.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(25.0, 25.0, -20.0),
            target: Vec3::new(25.0, 25.0, 50.0),
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 500.0,
        }
    }
}

impl Camera {
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn get_projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }
}

/// Accumulated mouse rotation, applied as a world rotation about a pivot.
///
/// Pointer deltas accumulate scaled by `sensitivity`; the rotation that
/// actually reaches the view matrix is the accumulator divided by
/// `damping`, so a full sweep of the pointer nudges the view a few degrees
/// instead of spinning it.
pub struct ViewRotation {
    /// Accumulated rotation about the x axis (degrees, from vertical motion)
    pub pitch: f32,
    /// Accumulated rotation about the y axis (degrees, from horizontal motion)
    pub yaw: f32,
    /// Degrees accumulated per pixel of pointer motion
    pub sensitivity: f32,
    /// Divisor between the accumulator and the applied rotation
    pub damping: f32,
}

impl Default for ViewRotation {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            sensitivity: 0.4,
            damping: 10.0,
        }
    }
}

impl ViewRotation {
    pub fn new(sensitivity: f32, damping: f32) -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            sensitivity,
            damping,
        }
    }

    /// Feed one pointer-motion delta (pixels).
    pub fn track(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.sensitivity;
        self.pitch += delta_y * self.sensitivity;
    }

    /// Rotation actually applied to the view, in degrees (pitch, yaw).
    pub fn applied(&self) -> (f32, f32) {
        (self.pitch / self.damping, self.yaw / self.damping)
    }

    /// World-space rotation about `pivot`, pitch about x then yaw about y.
    pub fn pivot_matrix(&self, pivot: Vec3) -> Mat4 {
        let (pitch, yaw) = self.applied();
        Mat4::from_translation(pivot)
            * Mat4::from_rotation_x(pitch.to_radians())
            * Mat4::from_rotation_y(yaw.to_radians())
            * Mat4::from_translation(-pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::default();
        assert!((camera.fov - 60.0_f32.to_radians()).abs() < 1e-6);
        assert!(camera.near > 0.0);
        assert!(camera.far > camera.near);
    }

    #[test]
    fn test_view_matrix_looks_down_field_axis() {
        let camera = Camera::default();
        let view = camera.get_view_matrix();
        // The eye maps to the view-space origin.
        let eye = view.transform_point3(camera.position);
        assert!(eye.length() < 1e-4);
        // The target sits straight ahead (negative z in view space, RH).
        let target = view.transform_point3(camera.target);
        assert!(target.x.abs() < 1e-4);
        assert!(target.y.abs() < 1e-4);
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_rotation_accumulates_scaled_by_sensitivity() {
        let mut rotation = ViewRotation::default();
        rotation.track(10.0, -5.0);
        rotation.track(10.0, 0.0);
        assert!((rotation.yaw - 8.0).abs() < 1e-6);
        assert!((rotation.pitch + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_applied_rotation_is_damped() {
        let mut rotation = ViewRotation::new(0.4, 10.0);
        rotation.track(100.0, 50.0);
        let (pitch, yaw) = rotation.applied();
        assert!((yaw - 4.0).abs() < 1e-6);
        assert!((pitch - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_pivot_matrix_fixes_the_pivot() {
        let mut rotation = ViewRotation::default();
        rotation.track(320.0, -180.0);
        let pivot = Vec3::new(25.0, 25.0, 5.0);
        let rotated = rotation.pivot_matrix(pivot).transform_point3(pivot);
        assert!((rotated - pivot).length() < 1e-4);
    }

    #[test]
    fn test_zero_accumulator_is_identity() {
        let rotation = ViewRotation::default();
        let matrix = rotation.pivot_matrix(Vec3::new(1.0, 2.0, 3.0));
        let probe = Vec3::new(-4.0, 7.0, 11.0);
        assert!((matrix.transform_point3(probe) - probe).length() < 1e-5);
    }
}
