//! Sound names and the volume rules for drags and collisions.

use glam::Vec3;

pub const DRAGGING: &str = "dragging";
pub const DRAGGING_SMALL: &str = "dragging_small";
pub const DRAGGING_MEDIUM: &str = "dragging_medium";
pub const DRAGGING_LARGE: &str = "dragging_large";
/// Played while bodies travel back to their place.
pub const MOVING: &str = "moving";
pub const COLLISION: &str = "collision";
pub const BACKGROUND: &str = "background_noise";

pub const MOVING_VOLUME: f32 = 0.01;
pub const BACKGROUND_VOLUME: f32 = 0.2;
const DRAG_VOLUME: f32 = 0.1;

const SMALL: [&str; 4] = ["Mercury", "Venus", "Earth", "Mars"];
const MEDIUM: [&str; 2] = ["Uranus", "Neptune"];
const LARGE: [&str; 2] = ["Jupiter", "Saturn"];

/// Whoosh for dragging `name`, louder for bigger bodies.
pub fn drag_sound(name: &str, radius: f32, max_radius: f32) -> (&'static str, f32) {
    let tier = if SMALL.contains(&name) {
        DRAGGING_SMALL
    } else if MEDIUM.contains(&name) {
        DRAGGING_MEDIUM
    } else if LARGE.contains(&name) {
        DRAGGING_LARGE
    } else {
        return (DRAGGING, DRAG_VOLUME);
    };
    let scale = if max_radius > 0.0 { radius / max_radius } else { 0.0 };
    (tier, DRAG_VOLUME * scale)
}

fn body_volume(name: &str) -> f32 {
    match name {
        "Mercury" | "Mars" => 0.01,
        "Venus" | "Earth" => 0.02,
        "Neptune" | "Uranus" => 0.03,
        "Jupiter" | "Saturn" => 0.04,
        "Sun" => 0.05,
        _ => 0.01,
    }
}

/// Collision volume for a pair: the louder of the two bodies.
pub fn collision_volume(a: &str, b: &str) -> f32 {
    body_volume(a).max(body_volume(b))
}

/// Index pairs `(i, j)`, `i < j`, whose spheres touch or overlap.
pub fn touching_pairs(bodies: &[(Vec3, f32)]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (pa, ra) = bodies[i];
            let (pb, rb) = bodies[j];
            if pa.distance(pb) <= ra + rb {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
