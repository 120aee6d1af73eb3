use std::collections::HashSet;

use crate::api::types::{EntityId, GameEvent, Overlay, SoundEvent, SoundId};
use crate::audio::bank::SoundBank;
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::extensions::timer::TimerState;
use crate::extensions::tween::TweenState;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::systems::orbit::tick_orbits;
#[cfg(feature = "physics")]
use crate::core::physics::{BodyDesc, ColliderMaterial, PhysicsWorld};
#[cfg(feature = "physics")]
use crate::components::entity::Entity;
#[cfg(feature = "physics")]
use glam::Vec3;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Physics step in seconds (default: 1/60). Exactly one step runs per frame.
    pub fixed_dt: f32,
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 16).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
    /// Gravity vector for physics simulation. Default: zero (no gravity).
    #[cfg(feature = "physics")]
    pub gravity: glam::Vec3,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_instances: 64,
            max_sounds: 16,
            max_events: 16,
            #[cfg(feature = "physics")]
            gravity: glam::Vec3::ZERO,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Runs before the physics step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Runs right after the physics step and mesh sync, before tweens.
    fn after_physics(&mut self, _ctx: &mut EngineContext) {}

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub tweens: TweenState,
    pub timers: TimerState,
    pub audio: SoundBank,
    pub clock: FrameClock,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    overlay: Option<Overlay>,
    overlay_serial: u32,
    /// Entities whose mesh is driven by something other than physics.
    locks: HashSet<EntityId>,
    next_id: u32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut world = PhysicsWorld::new(config.gravity);
            world.set_dt(config.fixed_dt);
            world
        };
        #[cfg(not(feature = "physics"))]
        let _ = config;

        Self {
            scene: Scene::new(),
            tweens: TweenState::new(),
            timers: TimerState::new(),
            audio: SoundBank::new(),
            clock: FrameClock::new(),
            sounds: Vec::new(),
            events: Vec::new(),
            overlay: None,
            overlay_serial: 0,
            locks: HashSet::new(),
            next_id: 1,
            #[cfg(feature = "physics")]
            physics,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Play a sound by name. Unknown or still-loading sounds are skipped.
    pub fn play_sound(&mut self, name: &str, volume: f32, looped: bool) -> Option<SoundId> {
        let event = self.audio.play(name, volume, looped)?;
        self.sounds.push(event);
        Some(event.sound)
    }

    /// Stop a sound by name.
    pub fn stop_sound(&mut self, name: &str) {
        if let Some(event) = self.audio.stop(name) {
            self.sounds.push(event);
        }
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Open the overlay, replacing whatever it showed before.
    pub fn show_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
        self.overlay_serial = self.overlay_serial.wrapping_add(1);
    }

    pub fn close_overlay(&mut self) {
        if self.overlay.take().is_some() {
            self.overlay_serial = self.overlay_serial.wrapping_add(1);
        }
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Changes each time the overlay is opened, replaced or closed.
    pub fn overlay_serial(&self) -> u32 {
        self.overlay_serial
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    // -- Drag locks --

    /// Stop copying the physics pose into this entity until unlocked.
    pub fn lock(&mut self, id: EntityId) {
        self.locks.insert(id);
    }

    pub fn unlock(&mut self, id: EntityId) {
        self.locks.remove(&id);
    }

    pub fn is_locked(&self, id: EntityId) -> bool {
        self.locks.contains(&id)
    }

    /// Apply tweens to the scene. Tweened entities with a physics body have
    /// the new position written into the body as well.
    pub fn tick_tweens(&mut self, dt: f32) -> Vec<EntityId> {
        let touched = self.tweens.tick(dt, &mut self.scene);
        #[cfg(feature = "physics")]
        for id in &touched {
            if let Some(entity) = self.scene.get(*id) {
                if let Some(body) = &entity.body {
                    self.physics.set_body_position(body, entity.pos);
                }
            }
        }
        touched
    }

    /// Despawn an entity, cleaning up its tweens, lock and physics body.
    pub fn despawn(&mut self, id: EntityId) {
        self.tweens.cancel_entity(id);
        self.locks.remove(&id);
        if let Some(_entity) = self.scene.despawn(id) {
            #[cfg(feature = "physics")]
            if let Some(body) = &_entity.body {
                self.physics.remove_body(body);
            }
        }
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// The entity's position is set from the BodyDesc.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity
            .with_pos(desc.position)
            .with_rotation(desc.rotation)
            .with_body(body);
        self.scene.spawn(entity);
        id
    }

    #[cfg(feature = "physics")]
    fn body_of(&self, id: EntityId) -> Option<crate::core::physics::PhysicsBody> {
        self.scene.get(id).and_then(|e| e.body)
    }

    /// Set the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec3) {
        if let Some(body) = self.body_of(id) {
            self.physics.set_velocity(&body, vel);
        }
    }

    /// Get the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec3 {
        self.body_of(id)
            .map(|body| self.physics.velocity(&body))
            .unwrap_or(Vec3::ZERO)
    }

    /// Position of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn body_position(&self, id: EntityId) -> Option<Vec3> {
        self.body_of(id).map(|body| self.physics.body_position(&body).0)
    }

    /// Teleport an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn set_body_position(&mut self, id: EntityId, pos: Vec3) {
        if let Some(body) = self.body_of(id) {
            self.physics.set_body_position(&body, pos);
        }
    }

    /// Change the mass of an entity's body. Zero holds it in place.
    #[cfg(feature = "physics")]
    pub fn set_mass(&mut self, id: EntityId, mass: f32) {
        if let Some(body) = self.body_of(id) {
            self.physics.set_mass(&body, mass);
        }
    }

    #[cfg(feature = "physics")]
    pub fn mass(&self, id: EntityId) -> Option<f32> {
        self.body_of(id).and_then(|body| self.physics.mass(&body))
    }

    /// Step the physics simulation once and sync poses back to entities.
    /// Locked entities keep their own pose.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.physics.step();

        for entity in self.scene.iter_mut() {
            if self.locks.contains(&entity.id) {
                continue;
            }
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}

/// Run one displayed frame of `game`. `dt` is the real frame delta in seconds.
///
/// Order: bookkeeping and timers, `update`, one physics step with pose sync,
/// `after_physics`, tweens, orbits. The caller builds the render buffer after.
pub fn run_frame<G: Game>(game: &mut G, ctx: &mut EngineContext, input: &mut InputQueue, dt: f32) {
    ctx.clear_frame_data();
    ctx.clock.advance(dt);
    let dt = ctx.clock.last_dt();
    ctx.timers.tick(dt);

    for event in input.iter() {
        match *event {
            InputEvent::SoundLoaded { sound } => ctx.audio.mark_loaded(SoundId(sound)),
            InputEvent::SoundEnded { sound } => ctx.audio.mark_ended(SoundId(sound)),
            InputEvent::SoundFailed { sound } => ctx.audio.mark_failed(SoundId(sound)),
            _ => {}
        }
    }

    game.update(ctx, input);
    input.drain();

    #[cfg(feature = "physics")]
    ctx.step_physics();

    game.after_physics(ctx);

    ctx.tick_tweens(dt);
    tick_orbits(&mut ctx.scene, dt);
}
