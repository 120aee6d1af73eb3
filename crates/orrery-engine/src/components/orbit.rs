use std::f32::consts::TAU;
use glam::Vec3;

/// Circular orbit around the origin in the XZ plane.
///
/// The angle decreases over time, so bodies travel clockwise when seen from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitComponent {
    /// Orbit radius in world units.
    pub radius: f32,
    /// Seconds per revolution.
    pub period: f32,
    /// Current angle in radians.
    pub theta: f32,
}

impl OrbitComponent {
    pub fn new(radius: f32, period: f32) -> Self {
        Self { radius, period, theta: 0.0 }
    }

    /// Advance the orbit by `dt` seconds. A non-positive period freezes the body.
    pub fn tick(&mut self, dt: f32) {
        if self.period > 0.0 {
            self.theta -= TAU / self.period * dt;
        }
    }

    /// Position on the orbit for the current angle.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.theta.cos(),
            0.0,
            self.radius * self.theta.sin(),
        )
    }
}

impl Default for OrbitComponent {
    fn default() -> Self {
        Self::new(10.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_period_moves_quarter_turn() {
        let mut orbit = OrbitComponent::new(15.0, 8.0);
        orbit.tick(2.0);
        let p = orbit.position();
        assert!(p.x.abs() < 1e-4, "x={}", p.x);
        assert!((p.z + 15.0).abs() < 1e-4, "z={}", p.z);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn zero_period_does_not_advance() {
        let mut orbit = OrbitComponent::new(5.0, 0.0);
        orbit.tick(1.0);
        assert_eq!(orbit.theta, 0.0);
        assert_eq!(orbit.position(), Vec3::new(5.0, 0.0, 0.0));
    }
}
