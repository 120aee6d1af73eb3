use glam::{Quat, Vec3};

/// Marks an entity as the scene camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraComponent {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Host may rotate the camera from pointer input.
    pub look_controls: bool,
    /// Wheel input moves the camera along its view direction.
    pub zoom_controls: bool,
}

impl CameraComponent {
    pub fn perspective(fov_deg: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            near,
            far,
            look_controls: false,
            zoom_controls: false,
        }
    }

    /// Direction the camera looks along for the given orientation (-Z forward).
    pub fn look_direction(rotation: Quat) -> Vec3 {
        rotation * Vec3::NEG_Z
    }
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self::perspective(80.0, 0.1, 10000.0)
    }
}
