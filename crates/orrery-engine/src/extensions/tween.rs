// extensions/tween.rs
//
// Tween system — manages animated value transitions by EntityId.
// Completely decoupled from Entity/Scene internals.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(entity_id, Tween::position(from, to, 2.0, Easing::QuadOut));
//   let touched = tweens.tick(dt, &mut scene);
//
// At most one tween runs per (entity, channel). Adding a tween replaces the
// one already running on that channel.

use std::collections::BTreeMap;
use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use super::easing::{Easing, ease, ease_vec3};

/// What property a tween animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Animate Entity.pos
    Position { from: Vec3, to: Vec3 },
    /// Animate Entity.pos.x only
    PositionX { from: f32, to: f32 },
    /// Animate Entity.pos.y only
    PositionY { from: f32, to: f32 },
    /// Animate Entity.rotation (spherical interpolation)
    Rotation { from: Quat, to: Quat },
    /// Animate a sphere mesh's radius
    SphereRadius { from: f32, to: f32 },
    /// Animate a ring mesh's inner radius
    RingInner { from: f32, to: f32 },
    /// Animate a ring mesh's outer radius
    RingOuter { from: f32, to: f32 },
    /// Animate OrbitComponent.radius
    OrbitRadius { from: f32, to: f32 },
    /// Animate OrbitComponent.period
    OrbitPeriod { from: f32, to: f32 },
}

/// The property slot a tween writes to. Two tweens on the same channel of
/// the same entity would overwrite each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TweenChannel {
    Position,
    Rotation,
    SphereRadius,
    RingInner,
    RingOuter,
    OrbitRadius,
    OrbitPeriod,
}

impl TweenTarget {
    pub fn channel(&self) -> TweenChannel {
        match self {
            TweenTarget::Position { .. }
            | TweenTarget::PositionX { .. }
            | TweenTarget::PositionY { .. } => TweenChannel::Position,
            TweenTarget::Rotation { .. } => TweenChannel::Rotation,
            TweenTarget::SphereRadius { .. } => TweenChannel::SphereRadius,
            TweenTarget::RingInner { .. } => TweenChannel::RingInner,
            TweenTarget::RingOuter { .. } => TweenChannel::RingOuter,
            TweenTarget::OrbitRadius { .. } => TweenChannel::OrbitRadius,
            TweenTarget::OrbitPeriod { .. } => TweenChannel::OrbitPeriod,
        }
    }

    /// Write the interpolated value for progress `t` into the entity.
    /// Targets whose component is missing are a no-op.
    fn apply(&self, entity: &mut Entity, t: f32, easing: Easing) {
        match *self {
            TweenTarget::Position { from, to } => {
                entity.pos = ease_vec3(from, to, t, easing);
            }
            TweenTarget::PositionX { from, to } => {
                entity.pos.x = ease(from, to, t, easing);
            }
            TweenTarget::PositionY { from, to } => {
                entity.pos.y = ease(from, to, t, easing);
            }
            TweenTarget::Rotation { from, to } => {
                entity.rotation = if t >= 1.0 {
                    to
                } else {
                    from.slerp(to, easing.apply(t))
                };
            }
            TweenTarget::SphereRadius { from, to } => {
                if let Some(mesh) = &mut entity.mesh {
                    mesh.set_sphere_radius(ease(from, to, t, easing));
                }
            }
            TweenTarget::RingInner { from, to } => {
                if let Some(mesh) = &mut entity.mesh {
                    mesh.set_ring_inner(ease(from, to, t, easing));
                }
            }
            TweenTarget::RingOuter { from, to } => {
                if let Some(mesh) = &mut entity.mesh {
                    mesh.set_ring_outer(ease(from, to, t, easing));
                }
            }
            TweenTarget::OrbitRadius { from, to } => {
                if let Some(orbit) = &mut entity.orbit {
                    orbit.radius = ease(from, to, t, easing);
                }
            }
            TweenTarget::OrbitPeriod { from, to } => {
                if let Some(orbit) = &mut entity.orbit {
                    orbit.period = ease(from, to, t, easing);
                }
            }
        }
    }
}

/// A single one-shot tween animation. It is removed once it reaches its end
/// value.
#[derive(Debug, Clone)]
pub struct Tween {
    /// What to animate.
    pub target: TweenTarget,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time.
    pub elapsed: f32,
    /// Easing function.
    pub easing: Easing,
    /// Optional completion code reported through `drain_completed`.
    pub on_complete: Option<u32>,
}

impl Tween {
    /// Create a tween for any target.
    pub fn new(target: TweenTarget, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            duration,
            elapsed: 0.0,
            easing,
            on_complete: None,
        }
    }

    pub fn position(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Position { from, to }, duration, easing)
    }

    pub fn position_x(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::PositionX { from, to }, duration, easing)
    }

    pub fn position_y(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::PositionY { from, to }, duration, easing)
    }

    pub fn rotation(from: Quat, to: Quat, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Rotation { from, to }, duration, easing)
    }

    // -- Builder methods --

    pub fn with_on_complete(mut self, code: u32) -> Self {
        self.on_complete = Some(code);
        self
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether the tween has reached its end value.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: BTreeMap<TweenId, (EntityId, Tween)>,
    next_id: u32,
    /// Completion codes of finished tweens, with the entity they ran on.
    completed_events: Vec<(EntityId, u32)>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for an entity, replacing any tween already running on the
    /// same channel of that entity.
    pub fn add(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        self.cancel_channel(entity, tween.target.channel());
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (entity, tween));
        id
    }

    /// Remove all tweens for an entity.
    pub fn cancel_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|_, (e, _)| *e != entity);
    }

    /// Remove the tween running on one channel of an entity, if any.
    pub fn cancel_channel(&mut self, entity: EntityId, channel: TweenChannel) {
        self.tweens
            .retain(|_, (e, t)| !(*e == entity && t.target.channel() == channel));
    }

    /// Advance all tweens and apply them to entities in the scene.
    /// Returns the entities written this tick (each at most once).
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> Vec<EntityId> {
        let mut completed = Vec::new();
        let mut touched = Vec::new();

        for (&id, (entity_id, tween)) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            let t = tween.progress();

            if let Some(entity) = scene.get_mut(*entity_id) {
                tween.target.apply(entity, t, tween.easing);
                if !touched.contains(entity_id) {
                    touched.push(*entity_id);
                }
            }

            if tween.is_complete() {
                if let Some(code) = tween.on_complete {
                    self.completed_events.push((*entity_id, code));
                }
                completed.push(id);
            }
        }

        for id in completed {
            self.tweens.remove(&id);
        }

        touched
    }

    /// Drain completion codes of tweens that finished.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = (EntityId, u32)> + '_ {
        self.completed_events.drain(..)
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use crate::components::orbit::OrbitComponent;

    fn scene_with(entity: Entity) -> Scene {
        let mut scene = Scene::new();
        scene.spawn(entity);
        scene
    }

    #[test]
    fn tween_position() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));

        tweens.add(id, Tween::position(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, Easing::Linear));

        let touched = tweens.tick(0.5, &mut scene);
        assert_eq!(touched, vec![id]);
        assert!((scene.get(id).unwrap().pos.x - 50.0).abs() < 0.01);

        tweens.tick(0.5, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos, Vec3::new(100.0, 0.0, 0.0));
        assert!(tweens.is_empty());
    }

    #[test]
    fn newer_tween_replaces_older_on_same_channel() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));

        let first = tweens.add(id, Tween::position(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, Easing::Linear));
        let second = tweens.add(id, Tween::position_x(0.0, -20.0, 1.0, Easing::Linear));

        assert_ne!(first, second);
        assert_eq!(tweens.len(), 1);

        tweens.tick(1.0, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos.x, -20.0);
    }

    #[test]
    fn different_channels_run_together() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);
        let mut scene = scene_with(
            Entity::new(id)
                .with_mesh(MeshComponent::ring(15.0, 15.1, MeshColor::default()))
                .with_orbit(OrbitComponent::new(15.0, 365.0)),
        );

        tweens.add(id, Tween::new(TweenTarget::RingInner { from: 15.0, to: 10.5 }, 2.0, Easing::QuadIn));
        tweens.add(id, Tween::new(TweenTarget::RingOuter { from: 15.1, to: 10.6 }, 2.0, Easing::QuadIn));
        tweens.add(id, Tween::new(TweenTarget::OrbitPeriod { from: 365.0, to: 8.0 }, 2.0, Easing::QuadIn));
        assert_eq!(tweens.len(), 3);

        let touched = tweens.tick(2.0, &mut scene);
        assert_eq!(touched, vec![id]);

        let e = scene.get(id).unwrap();
        assert_eq!(e.mesh.as_ref().unwrap().ring_radii(), Some((10.5, 10.6)));
        assert_eq!(e.orbit.as_ref().unwrap().period, 8.0);
    }

    #[test]
    fn missing_component_is_noop() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));

        tweens.add(id, Tween::new(TweenTarget::SphereRadius { from: 1.0, to: 4.0 }, 1.0, Easing::Linear));
        tweens.tick(1.0, &mut scene);
        assert!(scene.get(id).unwrap().mesh.is_none());
    }

    #[test]
    fn finished_tween_lands_on_end_value_and_is_removed() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));

        tweens.add(id, Tween::position_y(0.0, 1.0, 1.0, Easing::QuadInOut));
        tweens.tick(0.6, &mut scene);
        tweens.tick(0.6, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos.y, 1.0);
        assert!(tweens.is_empty());

        tweens.tick(1.0, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos.y, 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);
        let mut scene = scene_with(Entity::new(id));

        tweens.add(id, Tween::position_x(3.0, -4.0, 0.0, Easing::QuadOut).with_on_complete(9));
        tweens.tick(0.016, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos.x, -4.0);
        assert_eq!(tweens.drain_completed().collect::<Vec<_>>(), vec![(id, 9)]);
    }

    #[test]
    fn completion_codes_carry_entity() {
        let mut tweens = TweenState::new();
        let id = EntityId(7);
        let mut scene = scene_with(Entity::new(id));

        tweens.add(id, Tween::position_x(0.0, 5.0, 0.5, Easing::QuadOut).with_on_complete(3));
        tweens.tick(0.25, &mut scene);
        assert_eq!(tweens.drain_completed().count(), 0);
        tweens.tick(0.25, &mut scene);
        let done: Vec<_> = tweens.drain_completed().collect();
        assert_eq!(done, vec![(id, 3)]);
    }

    #[test]
    fn cancel_entity_tweens() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);

        tweens.add(id, Tween::position(Vec3::ZERO, Vec3::ONE, 1.0, Easing::Linear));
        tweens.add(id, Tween::rotation(Quat::IDENTITY, Quat::from_rotation_x(-1.0), 1.0, Easing::Linear));
        tweens.add(EntityId(2), Tween::position(Vec3::ZERO, Vec3::ONE, 1.0, Easing::Linear));

        assert_eq!(tweens.len(), 3);
        tweens.cancel_entity(id);
        assert_eq!(tweens.len(), 1);
    }
}
