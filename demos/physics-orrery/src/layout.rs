//! Opening move into the final layout, and the idle bob that follows it.

use orrery_engine::{ease, EngineContext, Easing, Tween};

use crate::planets::Planet;

/// Seconds the opening slide into place takes.
pub const LAYOUT_DURATION: f32 = 5.0;
/// Completion code of the opening slide.
pub const LAYOUT_DONE: u32 = 1;

const BOB_HEIGHT: f32 = 1.0;
/// Seconds for one rise (or one fall).
const BOB_DURATION: f32 = 1.0;
const WOBBLE_AMPLITUDE: f32 = 0.2;

/// Lock every planet and slide it horizontally to its target. The sun is
/// held at its pin by the game and takes no part.
pub fn start_layout(ctx: &mut EngineContext, planets: &[Planet]) {
    for planet in planets.iter().filter(|p| !p.spec.is_sun()) {
        let Some(entity) = ctx.scene.get(planet.id) else {
            continue;
        };
        let from = entity.pos.x;
        ctx.lock(planet.id);
        ctx.tweens.add(
            planet.id,
            Tween::position_x(from, planet.target_x, LAYOUT_DURATION, Easing::QuadInOut)
                .with_on_complete(LAYOUT_DONE),
        );
    }
}

/// Endless up-and-down bob around a resting height, plus a slow wobble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levitation {
    base_y: f32,
    elapsed: f32,
}

impl Levitation {
    pub fn new(base_y: f32) -> Self {
        Self { base_y, elapsed: 0.0 }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Height at the current bob phase; `time` (seconds) drives the wobble.
    pub fn height(&self, time: f64) -> f32 {
        let cycle = (self.elapsed / BOB_DURATION) % 2.0;
        let t = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        let bob = ease(self.base_y, self.base_y + BOB_HEIGHT, t, Easing::QuadInOut);
        bob + WOBBLE_AMPLITUDE * (time.sin() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_rises_then_falls() {
        let mut lev = Levitation::new(0.0);
        assert_eq!(lev.height(0.0), 0.0);
        lev.advance(1.0);
        assert!((lev.height(0.0) - 1.0).abs() < 1e-6);
        lev.advance(0.5);
        assert!((lev.height(0.0) - 0.5).abs() < 1e-6);
        lev.advance(0.5);
        assert!(lev.height(0.0).abs() < 1e-6);
    }

    #[test]
    fn wobble_adds_on_top() {
        let lev = Levitation::new(2.0);
        let h = lev.height(std::f64::consts::FRAC_PI_2);
        assert!((h - 2.2).abs() < 1e-6);
    }
}
