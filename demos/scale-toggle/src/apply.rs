//! Turning a scale profile into tweens on the live scene.

use orrery_engine::{
    EngineContext, Entity, Overlay, OverlayItem,
    Easing, Tween, TweenTarget,
};

use crate::profiles::{ProfileEntry, ScaleProfile};

/// Seconds every profile animation takes.
pub const PROFILE_DURATION: f32 = 2.0;
/// Profile animations use the host framework's default curve.
pub const PROFILE_EASING: Easing = Easing::QuadIn;

/// Outcome of applying a profile.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplyReport {
    /// Entries that started at least one tween.
    pub applied: usize,
    /// Tags that were not found in the scene, in the order they were met.
    pub missing: Vec<String>,
}

/// Start the tweens for every entry of `profile`.
///
/// Each entry animates from the entity's live value, so a profile that is
/// already in place replays as a visual no-op. Entries naming an unknown
/// entity are logged and skipped; earlier entries are never rolled back.
pub fn apply_profile(ctx: &mut EngineContext, profile: &ScaleProfile) -> ApplyReport {
    let mut report = ApplyReport::default();

    for entry in &profile.entries {
        let Some(entity) = ctx.scene.find_by_tag(entry.tag()) else {
            log::error!("Entity with id '{}' not found", entry.tag());
            report.missing.push(entry.tag().to_string());
            continue;
        };
        let id = entity.id;
        let targets = targets_for(entity, entry);
        if targets.is_empty() {
            continue;
        }
        for target in targets {
            ctx.tweens.add(id, Tween::new(target, PROFILE_DURATION, PROFILE_EASING));
        }
        report.applied += 1;
    }

    report
}

/// Tween targets for one entry, starting from what the entity shows now.
/// Components the entity lacks contribute nothing.
fn targets_for(entity: &Entity, entry: &ProfileEntry) -> Vec<TweenTarget> {
    match entry {
        ProfileEntry::Position { to, .. } => {
            vec![TweenTarget::Position { from: entity.pos, to: *to }]
        }
        ProfileEntry::SphereRadius { to, .. } => entity
            .mesh
            .and_then(|m| m.sphere_radius())
            .map(|from| TweenTarget::SphereRadius { from, to: *to })
            .into_iter()
            .collect(),
        ProfileEntry::OrbitRing { inner, outer, position, .. } => {
            let mut targets = Vec::with_capacity(3);
            if let Some((from_inner, from_outer)) = entity.mesh.and_then(|m| m.ring_radii()) {
                targets.push(TweenTarget::RingInner { from: from_inner, to: *inner });
                targets.push(TweenTarget::RingOuter { from: from_outer, to: *outer });
            }
            if let Some(to) = position {
                targets.push(TweenTarget::Position { from: entity.pos, to: *to });
            }
            targets
        }
        ProfileEntry::OrbitParams { radius, period, .. } => match entity.orbit {
            Some(orbit) => vec![
                TweenTarget::OrbitRadius { from: orbit.radius, to: *radius },
                TweenTarget::OrbitPeriod { from: orbit.period, to: *period },
            ],
            None => Vec::new(),
        },
        ProfileEntry::CameraHeight { tag, y } => {
            if entity.camera.is_none() {
                log::warn!("Entity '{}' has no camera, height entry skipped", tag);
                return Vec::new();
            }
            vec![TweenTarget::PositionY { from: entity.pos.y, to: *y }]
        }
    }
}

/// Overlay content for a profile.
pub fn overlay_for(profile: &ScaleProfile) -> Overlay {
    Overlay {
        title: profile.title.to_string(),
        items: profile
            .facts
            .iter()
            .map(|(name, value)| OverlayItem::new(*name, *value))
            .collect(),
    }
}
