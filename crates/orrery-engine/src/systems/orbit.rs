use crate::core::scene::Scene;

/// Advance every active orbit and move its entity onto the orbit.
pub fn tick_orbits(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        if !entity.active {
            continue;
        }
        if let Some(orbit) = &mut entity.orbit {
            orbit.tick(dt);
            entity.pos = orbit.position();
        }
    }
}
