use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use crate::components::camera::CameraComponent;

/// Camera block written next to the instances each frame.
/// Wire format: x, y, z, qx, qy, qz, qw, fov (degrees).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraView {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    pub fov_deg: f32,
}

impl CameraView {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, rotation: Quat, fov_deg: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            qx: rotation.x,
            qy: rotation.y,
            qz: rotation.z,
            qw: rotation.w,
            fov_deg,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_xyzw(self.qx, self.qy, self.qz, self.qw)
    }

    /// World → view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position()).inverse()
    }

    /// Right-handed perspective projection, depth in [0, 1].
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), aspect, near, far)
    }
}

impl Default for CameraView {
    fn default() -> Self {
        let cam = CameraComponent::default();
        Self::new(Vec3::ZERO, Quat::IDENTITY, cam.fov_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let view = CameraView::new(Vec3::new(0.0, 0.0, 100.0), Quat::IDENTITY, 75.0);
        let p = view.view_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(0.0, 0.0, -100.0)).length() < 1e-4);
    }

    #[test]
    fn top_view_sees_origin_straight_ahead() {
        let view = CameraView::new(
            Vec3::new(0.0, 200.0, 0.0),
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            80.0,
        );
        let p = view.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-3 && p.y.abs() < 1e-3);
        assert!((p.z + 200.0).abs() < 1e-3);
    }

    #[test]
    fn projection_is_perspective() {
        let view = CameraView::default();
        let m = view.projection_matrix(16.0 / 9.0, 0.1, 1000.0).to_cols_array_2d();
        // w' = -z for a right-handed perspective.
        assert_eq!(m[2][3], -1.0);
        assert_eq!(m[3][3], 0.0);
    }
}
