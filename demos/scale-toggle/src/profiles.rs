//! The three scale presets: distance-accurate, size-accurate, speed-accurate.
//!
//! A profile is an ordered list of target values keyed by entity tag, plus the
//! text of the overlay shown when the preset is picked.

use glam::Vec3;

use crate::bodies::{ring_tag, CAMERA, PLANETS, SUN};

/// One animated property of one entity.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEntry {
    Position { tag: String, to: Vec3 },
    SphereRadius { tag: String, to: f32 },
    /// Orbit ring annulus; `position` is only animated when present.
    OrbitRing { tag: String, inner: f32, outer: f32, position: Option<Vec3> },
    /// Orbit radius and period, animated from their live values.
    OrbitParams { tag: String, radius: f32, period: f32 },
    /// Vertical coordinate of the camera.
    CameraHeight { tag: String, y: f32 },
}

impl ProfileEntry {
    /// Tag of the entity this entry animates.
    pub fn tag(&self) -> &str {
        match self {
            ProfileEntry::Position { tag, .. }
            | ProfileEntry::SphereRadius { tag, .. }
            | ProfileEntry::OrbitRing { tag, .. }
            | ProfileEntry::OrbitParams { tag, .. }
            | ProfileEntry::CameraHeight { tag, .. } => tag,
        }
    }
}

/// Which preset a profile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Distance,
    Size,
    Speed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleProfile {
    pub kind: ScaleKind,
    pub title: &'static str,
    /// Overlay lines in display order.
    pub facts: Vec<(&'static str, &'static str)>,
    pub entries: Vec<ProfileEntry>,
}

// ── Tables (planets innermost first, sun separate) ──────────────────

pub(crate) const ORBIT_RADII: [f32; 8] = [6.0, 10.5, 15.0, 22.5, 75.0, 135.0, 270.0, 420.0];
const SPEED_POSITIONS: [f32; 8] = [3.0, 5.5, 8.0, 12.0, 40.0, 72.0, 145.0, 225.0];

pub(crate) const SUN_RADIUS: f32 = 5.0;
pub(crate) const WIDE_RADII: [f32; 8] = [1.0, 2.0, 2.0, 2.0, 4.0, 3.0, 2.5, 2.5];
const SIZE_RADII: [f32; 8] = [0.6, 0.8, 1.0, 0.8, 4.0, 3.0, 2.0, 2.0];

pub(crate) const DISTANCE_PERIODS: [f32; 8] = [8.0, 225.0, 365.0, 687.0, 4300.0, 10750.0, 30600.0, 60225.0];
const SIZE_PERIODS: [f32; 8] = [88.0, 225.0, 365.0, 687.0, 4300.0, 10750.0, 30600.0, 60225.0];
const SPEED_PERIODS: [f32; 8] = [2.0, 5.0, 8.0, 10.0, 9.0, 2.0, 10.0, 10.0];

/// Gap between the inner and outer edge of an orbit ring.
const RING_WIDTH: f32 = 0.1;

const DISTANCE_FACTS: [(&str, &str); 8] = [
    ("Mercury", "57.9 million km"),
    ("Venus", "108.2 million km"),
    ("Earth", "149.6 million km"),
    ("Mars", "227.9 million km"),
    ("Jupiter", "778.5 million km"),
    ("Saturn", "1.4 billion km"),
    ("Uranus", "2.9 billion km"),
    ("Neptune", "4.5 billion km"),
];

const SIZE_FACTS: [(&str, &str); 9] = [
    ("Sun", "4,379,000 km"),
    ("Mercury", "15,329 km"),
    ("Venus", "38,025 km"),
    ("Earth", "40,075 km"),
    ("Mars", "21,297 km"),
    ("Jupiter", "439,264 km"),
    ("Saturn", "365,882 km"),
    ("Uranus", "160,591 km"),
    ("Neptune", "154,948 km"),
];

const SPEED_FACTS: [(&str, &str); 8] = [
    ("Mercury", "88 Earth days, 47.87 km/s"),
    ("Venus", "224.7 Earth days, 35.02 km/s"),
    ("Earth", "365.2 Earth days, 29.78 km/s"),
    ("Mars", "687 Earth days, 24.08 km/s"),
    ("Jupiter", "4,331 Earth days, 13.07 km/s"),
    ("Saturn", "10,759 Earth days, 9.69 km/s"),
    ("Uranus", "30,688 Earth days, 6.81 km/s"),
    ("Neptune", "60,190 Earth days, 5.43 km/s"),
];

struct Table {
    positions: [f32; 8],
    radii: [f32; 8],
    periods: [f32; 8],
    ring_positions: bool,
    camera_y: f32,
}

/// Entries grouped by property kind, in the order the presets list them.
fn entries(table: &Table) -> Vec<ProfileEntry> {
    let mut entries = Vec::with_capacity(4 * PLANETS.len() + 3);

    entries.push(ProfileEntry::Position { tag: SUN.into(), to: Vec3::ZERO });
    for (planet, x) in PLANETS.iter().zip(table.positions) {
        entries.push(ProfileEntry::Position {
            tag: (*planet).into(),
            to: Vec3::new(x, 0.0, 0.0),
        });
    }

    entries.push(ProfileEntry::SphereRadius { tag: SUN.into(), to: SUN_RADIUS });
    for (planet, r) in PLANETS.iter().zip(table.radii) {
        entries.push(ProfileEntry::SphereRadius { tag: (*planet).into(), to: r });
    }

    for (planet, r) in PLANETS.iter().zip(ORBIT_RADII) {
        entries.push(ProfileEntry::OrbitRing {
            tag: ring_tag(planet),
            inner: r,
            outer: r + RING_WIDTH,
            position: table.ring_positions.then_some(Vec3::ZERO),
        });
    }

    for ((planet, radius), period) in PLANETS.iter().zip(ORBIT_RADII).zip(table.periods) {
        entries.push(ProfileEntry::OrbitParams { tag: (*planet).into(), radius, period });
    }

    entries.push(ProfileEntry::CameraHeight { tag: CAMERA.into(), y: table.camera_y });
    entries
}

pub fn distance() -> ScaleProfile {
    ScaleProfile {
        kind: ScaleKind::Distance,
        title: "Distances from the Sun",
        facts: DISTANCE_FACTS.to_vec(),
        entries: entries(&Table {
            positions: ORBIT_RADII,
            radii: WIDE_RADII,
            periods: DISTANCE_PERIODS,
            ring_positions: true,
            camera_y: 200.0,
        }),
    }
}

pub fn size() -> ScaleProfile {
    ScaleProfile {
        kind: ScaleKind::Size,
        title: "Equatorial Circumference",
        facts: SIZE_FACTS.to_vec(),
        entries: entries(&Table {
            positions: ORBIT_RADII,
            radii: SIZE_RADII,
            periods: SIZE_PERIODS,
            ring_positions: false,
            camera_y: 20.0,
        }),
    }
}

pub fn speed() -> ScaleProfile {
    ScaleProfile {
        kind: ScaleKind::Speed,
        title: "Orbital Period and Speed",
        facts: SPEED_FACTS.to_vec(),
        entries: entries(&Table {
            positions: SPEED_POSITIONS,
            radii: WIDE_RADII,
            periods: SPEED_PERIODS,
            ring_positions: false,
            camera_y: 200.0,
        }),
    }
}

pub fn by_kind(kind: ScaleKind) -> ScaleProfile {
    match kind {
        ScaleKind::Distance => distance(),
        ScaleKind::Size => size(),
        ScaleKind::Speed => speed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_covers_every_body_once_per_kind() {
        for profile in [distance(), size(), speed()] {
            // 9 positions, 9 radii, 8 rings, 8 orbits, 1 camera
            assert_eq!(profile.entries.len(), 35, "{:?}", profile.kind);
            let rings = profile
                .entries
                .iter()
                .filter(|e| matches!(e, ProfileEntry::OrbitRing { .. }))
                .count();
            assert_eq!(rings, 8);
        }
    }

    #[test]
    fn only_distance_moves_rings() {
        let has_ring_pos = |p: &ScaleProfile| {
            p.entries.iter().any(|e| {
                matches!(e, ProfileEntry::OrbitRing { position: Some(_), .. })
            })
        };
        assert!(has_ring_pos(&distance()));
        assert!(!has_ring_pos(&size()));
        assert!(!has_ring_pos(&speed()));
    }

    #[test]
    fn size_profile_shrinks_inner_planets() {
        let profile = size();
        let earth = profile.entries.iter().find_map(|e| match e {
            ProfileEntry::SphereRadius { tag, to } if tag == "earth" => Some(*to),
            _ => None,
        });
        assert_eq!(earth, Some(1.0));
        assert_eq!(profile.facts.len(), 9);
        assert_eq!(profile.facts[0], ("Sun", "4,379,000 km"));
    }

    #[test]
    fn ring_tags_follow_planet() {
        let profile = speed();
        let first_ring = profile
            .entries
            .iter()
            .find(|e| matches!(e, ProfileEntry::OrbitRing { .. }));
        assert_eq!(first_ring.map(|e| e.tag()), Some("mercury-orbit"));
    }
}
