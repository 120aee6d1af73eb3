//! Physics Orrery: draggable planets in a zero-gravity rapier world.
//!
//! Planets slide into a scaled layout, bob in place, and can be dragged
//! around. Released planets are brought back home a few seconds later.
//! Touching spheres play a collision sound sized by the bodies involved.

use glam::Vec3;
use orrery_engine::{
    CameraComponent, EngineContext, Entity, EntityId, Game, GameConfig, GameEvent, InputEvent,
    InputQueue, LabelComponent, MeshColor, Overlay, Easing, TimerId, Tween,
};

use crate::drag::{clamp_outside, DragPhase};
use crate::layout::{start_layout, Levitation, LAYOUT_DONE};
use crate::planets::{max_radius, spawn_planets, Planet, SUN_PIN};
use crate::sounds;

// ── Custom event kinds from the host ─────────────────────────────────

pub const CUSTOM_TOGGLE_SOUND: u32 = 1;
/// The user dismissed the alert.
pub const CUSTOM_CLOSE_ALERT: u32 = 2;

// ── Game event kinds to the host ─────────────────────────────────────

/// The overlay now holds an alert.
pub const EVENT_ALERT: f32 = 1.0;
/// a = 1 when the background loop is on.
pub const EVENT_BACKGROUND: f32 = 2.0;

pub const SUN_ALERT: &str = "Oh, I am too heavy! You are not able to drag me!";

// ── Re-homing ────────────────────────────────────────────────────────

const TIMER_REHOME: u32 = 1;
const REHOME_FIRST_DELAY: f32 = 5.0;
const REHOME_SECOND_DELAY: f32 = 7.0;
const REHOME_PASSES: u32 = 2;
const REHOME_DURATION: f32 = 2.0;
const REHOME_DONE: u32 = 2;

// ── Scene ────────────────────────────────────────────────────────────

const TITLE: &str = "Space Odyssey VR";
const TITLE_POSITION: Vec3 = Vec3::new(0.0, 15.0, 10.0);
const TITLE_COLOR: u32 = 0xcdcdcd;
const TITLE_SIZE: f32 = 10.0;
const TITLE_DEPTH: f32 = 1.5;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 100.0);

/// Per-planet session state.
#[derive(Debug, Clone)]
struct Body {
    planet: Planet,
    phase: DragPhase,
    levitation: Option<Levitation>,
}

pub struct PhysicsOrrery {
    bodies: Vec<Body>,
    /// Dragging unlocks once the opening layout has finished.
    drag_enabled: bool,
    /// Set by the first drag; the bob never resumes.
    levitation_paused: bool,
    rehome_timer: Option<TimerId>,
    background_on: bool,
}

impl PhysicsOrrery {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            drag_enabled: false,
            levitation_paused: false,
            rehome_timer: None,
            background_on: true,
        }
    }

    fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.planet.id == id)
    }

    fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.planet.id == id)
    }

    pub fn phase(&self, id: EntityId) -> Option<DragPhase> {
        self.body(id).map(|b| b.phase)
    }

    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.bodies.iter().map(|b| &b.planet)
    }

    fn sun(&self) -> Option<&Planet> {
        self.planets().find(|p| p.spec.is_sun())
    }

    // ── Drag state machine ───────────────────────────────────────────

    fn drag_start(&mut self, ctx: &mut EngineContext, target: EntityId) {
        let Some(body) = self.body(target) else {
            return;
        };
        if body.planet.spec.is_sun() {
            ctx.show_overlay(Overlay { title: SUN_ALERT.to_string(), items: Vec::new() });
            ctx.emit_event(GameEvent::new(EVENT_ALERT));
            return;
        }
        if !self.drag_enabled || body.phase.is_dragging() {
            return;
        }

        let saved_mass = ctx.mass(target).unwrap_or(body.planet.spec.mass);
        ctx.set_mass(target, 0.0);
        ctx.lock(target);
        // The pointer owns the position now; drop any trip home in flight.
        ctx.tweens.cancel_entity(target);
        self.levitation_paused = true;
        if let Some(body) = self.body_mut(target) {
            body.phase = DragPhase::Dragging { saved_mass };
        }
    }

    fn drag_move(&mut self, ctx: &mut EngineContext, target: EntityId, pos: Vec3) {
        let Some(body) = self.body(target) else {
            return;
        };
        if !body.phase.is_dragging() {
            return;
        }
        let spec = body.planet.spec;

        let (sound, volume) =
            sounds::drag_sound(spec.name, spec.radius, max_radius(self.planets()));
        ctx.play_sound(sound, volume, false);

        let pos = match self.sun() {
            Some(sun) => {
                let center = ctx.scene.get(sun.id).map(|e| e.pos).unwrap_or(SUN_PIN);
                clamp_outside(pos, center, sun.spec.radius + spec.radius)
            }
            None => pos,
        };
        if let Some(entity) = ctx.scene.get_mut(target) {
            entity.pos = pos;
        }
        ctx.set_body_position(target, pos);
    }

    fn drag_end(&mut self, ctx: &mut EngineContext, target: EntityId) {
        let Some(body) = self.body_mut(target) else {
            return;
        };
        let DragPhase::Dragging { saved_mass } = body.phase else {
            return;
        };
        body.phase = DragPhase::Settling;

        ctx.set_mass(target, saved_mass);
        ctx.unlock(target);
        if let Some(pos) = ctx.scene.get(target).map(|e| e.pos) {
            ctx.set_body_position(target, pos);
        }

        if let Some(previous) = self.rehome_timer.take() {
            ctx.timers.cancel(previous);
        }
        self.rehome_timer = Some(ctx.timers.schedule_repeating(
            REHOME_FIRST_DELAY,
            REHOME_SECOND_DELAY,
            REHOME_PASSES,
            TIMER_REHOME,
        ));
    }

    /// Send every displaced, unheld body back to `(target, 0, z)`.
    fn rehome_pass(&mut self, ctx: &mut EngineContext) {
        for body in &mut self.bodies {
            let id = body.planet.id;
            if ctx.is_locked(id) {
                continue;
            }
            let Some(pos) = ctx.scene.get(id).map(|e| e.pos) else {
                continue;
            };
            if pos.x == body.planet.target_x {
                if body.phase == DragPhase::Settling {
                    body.phase = DragPhase::Idle;
                }
                continue;
            }
            let home = Vec3::new(body.planet.target_x, 0.0, pos.z);
            ctx.tweens.add(
                id,
                Tween::position(pos, home, REHOME_DURATION, Easing::QuadOut)
                    .with_on_complete(REHOME_DONE),
            );
            body.phase = DragPhase::Settling;
            play_moving(ctx);
        }
    }

    fn tween_finished(&mut self, ctx: &mut EngineContext, id: EntityId, code: u32) {
        let Some(body) = self.body_mut(id) else {
            return;
        };
        match code {
            LAYOUT_DONE => {
                ctx.unlock(id);
                let y = ctx.scene.get(id).map(|e| e.pos.y).unwrap_or(0.0);
                body.levitation = Some(Levitation::new(y));
                self.drag_enabled = true;
            }
            REHOME_DONE => {
                ctx.set_velocity(id, Vec3::ZERO);
                if body.phase == DragPhase::Settling {
                    body.phase = DragPhase::Idle;
                }
            }
            _ => {}
        }
    }

    fn toggle_background(&mut self, ctx: &mut EngineContext) {
        if self.background_on {
            ctx.stop_sound(sounds::BACKGROUND);
            if ctx.audio.is_playing(sounds::MOVING) {
                ctx.stop_sound(sounds::MOVING);
            }
            self.background_on = false;
        } else {
            self.background_on = true;
            ctx.play_sound(sounds::BACKGROUND, sounds::BACKGROUND_VOLUME, true);
        }
        let on = if self.background_on { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent { kind: EVENT_BACKGROUND, a: on, b: 0.0, c: 0.0 });
    }

    // ── Per-step rules ───────────────────────────────────────────────

    fn pin_sun(&self, ctx: &mut EngineContext) {
        let Some(sun) = self.sun() else {
            return;
        };
        let id = sun.id;
        ctx.set_body_position(id, SUN_PIN);
        ctx.set_velocity(id, Vec3::ZERO);
        if let Some(entity) = ctx.scene.get_mut(id) {
            entity.pos = SUN_PIN;
        }
    }

    fn levitate(&mut self, ctx: &mut EngineContext) {
        if self.levitation_paused {
            return;
        }
        let dt = ctx.clock.last_dt();
        let time = ctx.clock.elapsed();
        for body in &mut self.bodies {
            let Some(levitation) = &mut body.levitation else {
                continue;
            };
            levitation.advance(dt);
            let id = body.planet.id;
            let Some(entity) = ctx.scene.get_mut(id) else {
                continue;
            };
            entity.pos.y = levitation.height(time);
            let pos = entity.pos;
            ctx.set_body_position(id, pos);
        }
    }

    /// Keep the travel sound going until every body is home.
    fn check_arrivals(&self, ctx: &mut EngineContext) {
        let all_home = self.planets().all(|p| {
            ctx.body_position(p.id).is_some_and(|pos| pos.x == p.target_x)
        });
        let playing = ctx.audio.is_playing(sounds::MOVING);
        if !all_home && !playing {
            play_moving(ctx);
        } else if all_home && playing {
            ctx.audio.mark_stopped(sounds::MOVING);
        }
    }

    fn collision_sounds(&self, ctx: &mut EngineContext) {
        let spheres: Vec<(Vec3, f32)> = self
            .planets()
            .map(|p| {
                let pos = ctx.scene.get(p.id).map(|e| e.pos).unwrap_or(p.spec.start);
                (pos, p.spec.radius)
            })
            .collect();
        for (i, j) in sounds::touching_pairs(&spheres) {
            let a = self.bodies[i].planet.spec.name;
            let b = self.bodies[j].planet.spec.name;
            ctx.play_sound(sounds::COLLISION, sounds::collision_volume(a, b), false);
        }
    }

    fn keep_background(&self, ctx: &mut EngineContext) {
        if self.background_on
            && ctx.audio.is_loaded(sounds::BACKGROUND)
            && !ctx.audio.is_playing(sounds::BACKGROUND)
        {
            ctx.play_sound(sounds::BACKGROUND, sounds::BACKGROUND_VOLUME, true);
        }
    }
}

impl Default for PhysicsOrrery {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the travel sound unless it is already running.
fn play_moving(ctx: &mut EngineContext) {
    if !ctx.audio.is_playing(sounds::MOVING) {
        ctx.play_sound(sounds::MOVING, sounds::MOVING_VOLUME, false);
    }
}

impl Game for PhysicsOrrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 16,
            gravity: Vec3::ZERO,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let planets = spawn_planets(ctx);
        start_layout(ctx, &planets);
        self.bodies = planets
            .into_iter()
            .map(|planet| Body { planet, phase: DragPhase::Idle, levitation: None })
            .collect();

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("title")
                .with_pos(TITLE_POSITION)
                .with_label(LabelComponent::new(
                    TITLE,
                    TITLE_SIZE,
                    TITLE_DEPTH,
                    MeshColor::from_hex(TITLE_COLOR),
                )),
        );

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("camera")
                .with_pos(CAMERA_POSITION)
                .with_camera(CameraComponent::perspective(75.0, 0.1, 1000.0)),
        );

        log::info!("physics-orrery: {} bodies", self.bodies.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let finished: Vec<(EntityId, u32)> = ctx.tweens.drain_completed().collect();
        for (id, code) in finished {
            self.tween_finished(ctx, id, code);
        }

        let fired: Vec<_> = ctx.timers.drain_fired().collect();
        for (id, kind) in fired {
            if kind == TIMER_REHOME {
                if !ctx.timers.is_pending(id) && self.rehome_timer == Some(id) {
                    self.rehome_timer = None;
                }
                self.rehome_pass(ctx);
            }
        }

        for event in input.iter() {
            match *event {
                InputEvent::DragStart { target } => self.drag_start(ctx, target),
                InputEvent::DragMove { target, x, y, z } => {
                    self.drag_move(ctx, target, Vec3::new(x, y, z))
                }
                InputEvent::DragEnd { target } => self.drag_end(ctx, target),
                InputEvent::Custom { kind: CUSTOM_TOGGLE_SOUND, .. } => self.toggle_background(ctx),
                InputEvent::Custom { kind: CUSTOM_CLOSE_ALERT, .. } => ctx.close_overlay(),
                _ => {}
            }
        }
    }

    fn after_physics(&mut self, ctx: &mut EngineContext) {
        self.pin_sun(ctx);
        self.levitate(ctx);
        self.check_arrivals(ctx);
        self.collision_sounds(ctx);
        self.keep_background(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{run_frame, SoundCommand, SoundEvent, SoundId};

    struct Session {
        game: PhysicsOrrery,
        ctx: EngineContext,
        input: InputQueue,
    }

    impl Session {
        fn start() -> Self {
            let mut game = PhysicsOrrery::new();
            let mut ctx = EngineContext::with_config(&game.config());
            game.init(&mut ctx);
            Self { game, ctx, input: InputQueue::new() }
        }

        fn load(&mut self, name: &str) -> SoundId {
            let id = self.ctx.audio.register(name, &format!("{}.mp3", name));
            self.ctx.audio.mark_loaded(id);
            id
        }

        fn frame(&mut self, dt: f32) {
            run_frame(&mut self.game, &mut self.ctx, &mut self.input, dt);
        }

        fn run(&mut self, seconds: f32) {
            let frames = (seconds / 0.5).ceil() as u32;
            for _ in 0..frames {
                self.frame(0.5);
            }
        }

        /// Past the opening layout with dragging enabled.
        fn settled() -> Self {
            let mut s = Self::start();
            s.run(5.5);
            assert!(s.game.drag_enabled);
            s
        }

        fn id(&self, name: &str) -> EntityId {
            self.ctx.scene.id_of(name).unwrap()
        }

        fn planet(&self, name: &str) -> Planet {
            *self.game.planets().find(|p| p.spec.name == name).unwrap()
        }

        fn pos(&self, name: &str) -> Vec3 {
            self.ctx.scene.get(self.id(name)).unwrap().pos
        }
    }

    #[test]
    fn init_spawns_bodies_label_and_camera() {
        let s = Session::start();
        assert_eq!(s.ctx.scene.len(), 11);
        assert_eq!(s.ctx.physics.body_count(), 9);
        let title = s.ctx.scene.find_by_tag("title").unwrap();
        assert_eq!(title.label.as_ref().map(|l| l.text.as_str()), Some(TITLE));
        assert_eq!(s.ctx.scene.camera().map(|e| e.pos), Some(CAMERA_POSITION));
        for planet in s.game.planets() {
            assert_eq!(s.ctx.is_locked(planet.id), !planet.spec.is_sun(), "{}", planet.spec.name);
        }
    }

    #[test]
    fn sun_is_pinned_every_step() {
        let mut s = Session::start();
        s.frame(1.0 / 60.0);
        let sun = s.id("Sun");
        assert_eq!(s.ctx.body_position(sun).map(|p| (p.y, p.z)), Some((0.0, 0.0)));
        assert_eq!(s.ctx.velocity(sun), Vec3::ZERO);
    }

    #[test]
    fn layout_reaches_targets_and_enables_drag() {
        let mut s = Session::start();
        s.run(4.0);
        assert!(!s.game.drag_enabled);
        s.run(1.5);
        assert!(s.game.drag_enabled);

        for name in ["Mercury", "Earth", "Jupiter", "Neptune"] {
            let planet = s.planet(name);
            assert_eq!(s.pos(name).x, planet.target_x, "{}", name);
            assert!(!s.ctx.is_locked(planet.id));
        }
    }

    #[test]
    fn drag_before_layout_is_ignored() {
        let mut s = Session::start();
        let earth = s.id("Earth");
        s.input.push(InputEvent::DragStart { target: earth });
        s.frame(1.0 / 60.0);
        assert_eq!(s.game.phase(earth), Some(DragPhase::Idle));
        assert_eq!(s.ctx.mass(earth), Some(1.0));
    }

    #[test]
    fn dragging_the_sun_is_refused() {
        let mut s = Session::settled();
        let sun = s.id("Sun");
        s.input.push(InputEvent::DragStart { target: sun });
        s.frame(1.0 / 60.0);

        assert_eq!(s.ctx.overlay().map(|o| o.title.as_str()), Some(SUN_ALERT));
        assert_eq!(s.ctx.events, vec![GameEvent::new(EVENT_ALERT)]);
        assert!(!s.ctx.is_locked(sun));
        assert_eq!(s.ctx.mass(sun), Some(1_989_000.0));
        assert_eq!(s.game.phase(sun), Some(DragPhase::Idle));

        s.input.push(InputEvent::Custom { kind: CUSTOM_CLOSE_ALERT, a: 0.0, b: 0.0, c: 0.0 });
        s.frame(1.0 / 60.0);
        assert!(s.ctx.overlay().is_none());
    }

    #[test]
    fn drag_zeroes_and_restores_mass() {
        let mut s = Session::settled();
        let mercury = s.id("Mercury");

        s.input.push(InputEvent::DragStart { target: mercury });
        s.frame(1.0 / 60.0);
        assert_eq!(s.ctx.mass(mercury), Some(0.0));
        assert!(s.ctx.is_locked(mercury));
        assert!(s.game.levitation_paused);
        assert_eq!(s.game.phase(mercury), Some(DragPhase::Dragging { saved_mass: 0.055 }));

        s.input.push(InputEvent::DragMove { target: mercury, x: -20.0, y: 30.0, z: 0.0 });
        s.frame(1.0 / 60.0);
        assert_eq!(s.pos("Mercury"), Vec3::new(-20.0, 30.0, 0.0));

        s.input.push(InputEvent::DragEnd { target: mercury });
        s.frame(1.0 / 60.0);
        assert_eq!(s.ctx.mass(mercury), Some(0.055));
        assert!(!s.ctx.is_locked(mercury));
        assert_eq!(s.game.phase(mercury), Some(DragPhase::Settling));
    }

    #[test]
    fn drag_never_enters_the_sun() {
        let mut s = Session::settled();
        let mars = s.id("Mars");
        s.input.push(InputEvent::DragStart { target: mars });
        s.input.push(InputEvent::DragMove { target: mars, x: -100.0, y: 5.0, z: 0.0 });
        s.frame(1.0 / 60.0);

        let sun = s.pos("Sun");
        let min = 109.0 + 0.532;
        assert!(s.pos("Mars").distance(sun) >= min - 1e-3);
    }

    #[test]
    fn drag_plays_tiered_whoosh() {
        let mut s = Session::settled();
        let small = s.load(sounds::DRAGGING_SMALL);
        let earth = s.id("Earth");
        s.input.push(InputEvent::DragStart { target: earth });
        s.input.push(InputEvent::DragMove { target: earth, x: -30.0, y: 20.0, z: 0.0 });
        s.frame(1.0 / 60.0);

        let whoosh: Vec<&SoundEvent> = s.ctx.sounds.iter().filter(|e| e.sound == small).collect();
        assert_eq!(whoosh.len(), 1);
        assert!((whoosh[0].volume - 0.1 / 109.0).abs() < 1e-6);
    }

    #[test]
    fn released_planet_goes_home() {
        let mut s = Session::settled();
        let earth = s.id("Earth");
        let target = s.planet("Earth").target_x;

        s.input.push(InputEvent::DragStart { target: earth });
        s.input.push(InputEvent::DragMove { target: earth, x: -20.0, y: 20.0, z: 0.0 });
        s.input.push(InputEvent::DragEnd { target: earth });
        s.frame(1.0 / 60.0);
        assert_eq!(s.game.phase(earth), Some(DragPhase::Settling));

        s.run(4.5);
        assert!((s.pos("Earth").x - (-20.0)).abs() < 1e-3, "rehome started early");

        s.run(3.0);
        let pos = s.pos("Earth");
        assert!((pos.x - target).abs() < 1e-3, "pos={:?}", pos);
        assert!(pos.y.abs() < 1e-3, "pos={:?}", pos);
        assert_eq!(s.game.phase(earth), Some(DragPhase::Idle));
        assert!(s.ctx.velocity(earth).length() < 1e-3);
    }

    #[test]
    fn new_release_replaces_pending_rehome() {
        let mut s = Session::settled();
        let earth = s.id("Earth");
        for _ in 0..2 {
            s.input.push(InputEvent::DragStart { target: earth });
            s.input.push(InputEvent::DragEnd { target: earth });
            s.frame(1.0 / 60.0);
        }
        assert_eq!(s.ctx.timers.len(), 1);
    }

    #[test]
    fn moving_sound_plays_once_until_it_ends() {
        let mut s = Session::start();
        let moving = s.load(sounds::MOVING);
        s.frame(1.0 / 60.0);
        assert_eq!(s.ctx.sounds, vec![SoundEvent::play(moving, 0.01, false)]);

        s.frame(1.0 / 60.0);
        assert!(s.ctx.sounds.is_empty());

        s.input.push(InputEvent::SoundEnded { sound: moving.0 });
        s.frame(1.0 / 60.0);
        assert_eq!(s.ctx.sounds, vec![SoundEvent::play(moving, 0.01, false)]);
    }

    #[test]
    fn moving_sound_stops_once_everything_is_home() {
        let mut s = Session::start();
        s.load(sounds::MOVING);
        s.frame(0.5);
        assert!(s.ctx.audio.is_playing(sounds::MOVING));

        s.run(5.0);
        assert!(s.game.drag_enabled);
        assert!(!s.ctx.audio.is_playing(sounds::MOVING));

        s.frame(0.5);
        assert!(s.ctx.sounds.is_empty());
    }

    #[test]
    fn release_in_place_settles_without_a_trip_home() {
        let mut s = Session::settled();
        let earth = s.id("Earth");
        s.input.push(InputEvent::DragStart { target: earth });
        s.input.push(InputEvent::DragEnd { target: earth });
        s.frame(1.0 / 60.0);
        assert_eq!(s.game.phase(earth), Some(DragPhase::Settling));

        s.run(5.5);
        assert_eq!(s.game.phase(earth), Some(DragPhase::Idle));
        assert!(s.ctx.tweens.is_empty());
        assert_eq!(s.pos("Earth").x, s.planet("Earth").target_x);
    }

    #[test]
    fn background_loop_toggles() {
        let mut s = Session::start();
        let background = s.load(sounds::BACKGROUND);
        s.frame(1.0 / 60.0);
        assert!(s.ctx.sounds.contains(&SoundEvent::play(background, 0.2, true)));

        s.input.push(InputEvent::Custom { kind: CUSTOM_TOGGLE_SOUND, a: 0.0, b: 0.0, c: 0.0 });
        s.frame(1.0 / 60.0);
        assert!(s
            .ctx
            .sounds
            .iter()
            .any(|e| e.sound == background && e.command == SoundCommand::Stop));
        assert_eq!(s.ctx.events, vec![GameEvent { kind: EVENT_BACKGROUND, a: 0.0, b: 0.0, c: 0.0 }]);

        s.frame(1.0 / 60.0);
        assert!(!s.ctx.sounds.iter().any(|e| e.sound == background));
    }

    #[test]
    fn touching_planets_play_collision() {
        let mut s = Session::settled();
        let collision = s.load(sounds::COLLISION);
        let earth = s.id("Earth");
        let venus_pos = s.pos("Venus");

        s.input.push(InputEvent::DragStart { target: earth });
        s.input.push(InputEvent::DragMove { target: earth, x: venus_pos.x + 1.0, y: venus_pos.y, z: 0.0 });
        s.frame(1.0 / 60.0);

        let hits: Vec<&SoundEvent> = s.ctx.sounds.iter().filter(|e| e.sound == collision).collect();
        assert!(!hits.is_empty());
        assert_eq!(hits[0].volume, 0.02);
    }
}
