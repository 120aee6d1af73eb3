use glam::Vec3;

/// Where a planet is in the drag cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Held by the pointer. The body's own mass is parked here while it is zero.
    Dragging { saved_mass: f32 },
    /// Released, waiting for (or running) the trip back to its target.
    Settling,
}

impl DragPhase {
    pub fn is_dragging(self) -> bool {
        matches!(self, DragPhase::Dragging { .. })
    }
}

/// Keep `pos` at least `min_distance` away from `center`, pushing it out
/// along the center→pos direction when it is closer.
pub fn clamp_outside(pos: Vec3, center: Vec3, min_distance: f32) -> Vec3 {
    let offset = pos - center;
    if offset.length() > min_distance {
        return pos;
    }
    let direction = offset.try_normalize().unwrap_or(Vec3::X);
    center + direction * min_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_positions_pass_through() {
        let p = Vec3::new(10.0, 2.0, 0.0);
        assert_eq!(clamp_outside(p, Vec3::ZERO, 5.0), p);
    }

    #[test]
    fn close_positions_land_on_the_surface() {
        let center = Vec3::new(-150.0, 0.0, 0.0);
        let p = clamp_outside(Vec3::new(-60.0, 0.0, 0.0), center, 109.383);
        assert!((p.distance(center) - 109.383).abs() < 1e-3);
        assert!(p.x > -60.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn center_itself_has_a_direction() {
        let p = clamp_outside(Vec3::ZERO, Vec3::ZERO, 2.0);
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));
    }
}
