//! Scene entities for the scale-toggle orrery.
//!
//! Tags are the identifiers the scale profiles and the host page refer to.

use orrery_engine::MeshColor;

pub const SUN: &str = "sun";
pub const CAMERA: &str = "mainCamera";

/// Orbiting bodies, innermost first.
pub const PLANETS: [&str; 8] = [
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
];

/// Tag of the orbit ring that belongs to a planet.
pub fn ring_tag(planet: &str) -> String {
    format!("{}-orbit", planet)
}

pub const SUN_COLOR: u32 = 0xffcc33;
pub const SUN_EMISSIVE: f32 = 1.5;

const PLANET_COLORS: [u32; 8] = [
    0xa9a9a9, // mercury
    0xe8c27a, // venus
    0x3a6fd8, // earth
    0xc1440e, // mars
    0xd8a468, // jupiter
    0xe3d19c, // saturn
    0x8fd3e0, // uranus
    0x3f54ba, // neptune
];

pub const RING_COLOR: u32 = 0xffffff;

pub fn planet_color(index: usize) -> MeshColor {
    MeshColor::from_hex(PLANET_COLORS.get(index).copied().unwrap_or(0xffffff))
}

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV: f32 = 80.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10000.0;
/// Starting height of the top-down study view.
pub const TOP_VIEW_HEIGHT: f32 = 200.0;
