//! Scale Toggle: solar system with distance / size / speed presets.
//!
//! The host page forwards its buttons as custom events. Rust owns the scene,
//! the preset animations, the overlay text and the camera modes.

use glam::{EulerRot, Quat, Vec3};
use orrery_engine::{
    CameraComponent, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    Easing, Tween,
};

use crate::apply::{apply_profile, overlay_for};
use crate::bodies::CAMERA;
use crate::profiles::{self, ScaleKind};
use crate::scene::{spawn_scene, top_view_rotation};

// ── Custom event kinds from the host ─────────────────────────────────

pub const CUSTOM_DISTANCE: u32 = 1;
pub const CUSTOM_SIZE: u32 = 2;
pub const CUSTOM_SPEED: u32 = 3;
pub const CUSTOM_TOGGLE_VIEW: u32 = 4;
pub const CUSTOM_CLOSE_OVERLAY: u32 = 5;
/// a = pitch, b = yaw, both in degrees.
pub const CUSTOM_LOOK: u32 = 6;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = 1 in exploration mode, 0 in study mode. b = VR entry enabled.
pub const EVENT_VIEW_MODE: f32 = 1.0;

// ── Camera ───────────────────────────────────────────────────────────

const EXPLORATION_POSITION: Vec3 = Vec3::new(10.0, 11.6, 15.0);
const TOP_VIEW_POSITION: Vec3 = Vec3::new(0.0, 200.0, 0.0);
const VIEW_TOGGLE_DURATION: f32 = 1.0;

/// World units per wheel notch.
const ZOOM_STEP: f32 = 0.005;
const ZOOM_MIN_DISTANCE: f32 = 1.0;
const ZOOM_MAX_DISTANCE: f32 = 200.0;

/// `Math.sign` semantics: zero stays zero.
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Top-down view, no camera controls.
    Study,
    /// Free camera with look and zoom controls.
    Exploration,
}

impl ViewMode {
    /// Text of the toggle button while in this mode: it names the other mode.
    pub fn button_label(self) -> &'static str {
        match self {
            ViewMode::Study => "Exploration Mode",
            ViewMode::Exploration => "Study Mode",
        }
    }
}

pub struct ScaleToggle {
    view: ViewMode,
    /// Wheel movement collected since the last frame.
    wheel_delta: f32,
}

impl ScaleToggle {
    pub fn new() -> Self {
        Self {
            view: ViewMode::Study,
            wheel_delta: 0.0,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    fn select(&mut self, ctx: &mut EngineContext, kind: ScaleKind) {
        let profile = profiles::by_kind(kind);
        let report = apply_profile(ctx, &profile);
        log::info!(
            "{:?} scale: {} entries animated, {} missing",
            kind,
            report.applied,
            report.missing.len()
        );
        ctx.show_overlay(overlay_for(&profile));
    }

    fn toggle_view(&mut self, ctx: &mut EngineContext) {
        let (next, position, rotation, controls) = match self.view {
            ViewMode::Study => (ViewMode::Exploration, EXPLORATION_POSITION, Quat::IDENTITY, true),
            ViewMode::Exploration => (ViewMode::Study, TOP_VIEW_POSITION, top_view_rotation(), false),
        };

        let Some(camera) = ctx.scene.find_by_tag_mut(CAMERA) else {
            log::error!("Entity with id '{}' not found", CAMERA);
            return;
        };
        let id = camera.id;
        let (from_pos, from_rot) = (camera.pos, camera.rotation);
        let component = camera.camera.get_or_insert_with(CameraComponent::default);
        component.look_controls = controls;
        component.zoom_controls = controls;

        ctx.tweens.add(id, Tween::position(from_pos, position, VIEW_TOGGLE_DURATION, Easing::QuadInOut));
        ctx.tweens.add(id, Tween::rotation(from_rot, rotation, VIEW_TOGGLE_DURATION, Easing::QuadInOut));

        self.view = next;
        self.wheel_delta = 0.0;
        log::info!("view: {:?} (button reads '{}')", next, next.button_label());

        let vr = if controls { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent { kind: EVENT_VIEW_MODE, a: vr, b: vr, c: 0.0 });
    }

    fn look(&mut self, ctx: &mut EngineContext, pitch_deg: f32, yaw_deg: f32) {
        let Some(camera) = ctx.scene.find_by_tag_mut(CAMERA) else {
            return;
        };
        if !camera.camera.is_some_and(|c| c.look_controls) {
            return;
        }
        camera.rotation = Quat::from_euler(
            EulerRot::YXZ,
            yaw_deg.to_radians(),
            pitch_deg.to_radians(),
            0.0,
        );
    }

    /// Move the camera along its view direction by the collected wheel delta,
    /// unless that would leave the allowed distance band around the sun.
    fn apply_zoom(&mut self, ctx: &mut EngineContext) {
        if self.wheel_delta == 0.0 {
            return;
        }
        let delta = std::mem::take(&mut self.wheel_delta);
        let Some(camera) = ctx.scene.find_by_tag_mut(CAMERA) else {
            return;
        };
        let next = camera.pos + CameraComponent::look_direction(camera.rotation) * delta;
        let distance = next.length();
        if (ZOOM_MIN_DISTANCE..=ZOOM_MAX_DISTANCE).contains(&distance) {
            camera.pos = next;
        }
    }

    fn zoom_enabled(&self, ctx: &EngineContext) -> bool {
        ctx.scene
            .find_by_tag(CAMERA)
            .and_then(|e| e.camera)
            .is_some_and(|c| c.zoom_controls)
    }
}

impl Default for ScaleToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ScaleToggle {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 32,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        spawn_scene(ctx);
        let report = apply_profile(ctx, &profiles::distance());
        log::info!("scale-toggle: {} entities, {} entries animated", ctx.scene.len(), report.applied);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, b, .. } => match kind {
                    CUSTOM_DISTANCE => self.select(ctx, ScaleKind::Distance),
                    CUSTOM_SIZE => self.select(ctx, ScaleKind::Size),
                    CUSTOM_SPEED => self.select(ctx, ScaleKind::Speed),
                    CUSTOM_TOGGLE_VIEW => self.toggle_view(ctx),
                    CUSTOM_CLOSE_OVERLAY => ctx.close_overlay(),
                    CUSTOM_LOOK => self.look(ctx, a, b),
                    _ => {}
                },
                InputEvent::Wheel { delta_y } => {
                    if self.zoom_enabled(ctx) {
                        self.wheel_delta += sign(delta_y) * ZOOM_STEP;
                    }
                }
                _ => {}
            }
        }

        self.apply_zoom(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::run_frame;

    fn started() -> (ScaleToggle, EngineContext, InputQueue) {
        let mut game = ScaleToggle::new();
        let mut ctx = EngineContext::with_config(&game.config());
        game.init(&mut ctx);
        (game, ctx, InputQueue::new())
    }

    fn custom(kind: u32) -> InputEvent {
        InputEvent::Custom { kind, a: 0.0, b: 0.0, c: 0.0 }
    }

    fn camera_pos(ctx: &EngineContext) -> Vec3 {
        ctx.scene.find_by_tag(CAMERA).unwrap().pos
    }

    #[test]
    fn startup_has_no_overlay() {
        let (_, ctx, _) = started();
        assert!(ctx.overlay().is_none());
        assert!(!ctx.tweens.is_empty());
    }

    #[test]
    fn preset_button_opens_and_replaces_overlay() {
        let (mut game, mut ctx, mut input) = started();
        input.push(custom(CUSTOM_SIZE));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        assert_eq!(ctx.overlay().map(|o| o.title.as_str()), Some("Equatorial Circumference"));

        input.push(custom(CUSTOM_DISTANCE));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        assert_eq!(ctx.overlay().map(|o| o.title.as_str()), Some("Distances from the Sun"));

        input.push(custom(CUSTOM_CLOSE_OVERLAY));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        assert!(ctx.overlay().is_none());
    }

    #[test]
    fn toggle_view_round_trip() {
        let (mut game, mut ctx, mut input) = started();
        input.push(custom(CUSTOM_TOGGLE_VIEW));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        assert_eq!(game.view(), ViewMode::Exploration);
        assert_eq!(ctx.events, vec![GameEvent { kind: EVENT_VIEW_MODE, a: 1.0, b: 1.0, c: 0.0 }]);

        run_frame(&mut game, &mut ctx, &mut input, 1.0);
        assert_eq!(camera_pos(&ctx), EXPLORATION_POSITION);
        assert_eq!(ctx.scene.find_by_tag(CAMERA).unwrap().rotation, Quat::IDENTITY);

        input.push(custom(CUSTOM_TOGGLE_VIEW));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        run_frame(&mut game, &mut ctx, &mut input, 1.0);
        assert_eq!(game.view(), ViewMode::Study);
        assert_eq!(camera_pos(&ctx), TOP_VIEW_POSITION);
        assert_eq!(ViewMode::Study.button_label(), "Exploration Mode");
    }

    #[test]
    fn wheel_only_zooms_in_exploration() {
        let (mut game, mut ctx, mut input) = started();
        // Let the startup preset finish so nothing else moves the camera.
        run_frame(&mut game, &mut ctx, &mut input, 2.0);
        input.push(InputEvent::Wheel { delta_y: 120.0 });
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        assert_eq!(camera_pos(&ctx), TOP_VIEW_POSITION);

        input.push(custom(CUSTOM_TOGGLE_VIEW));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        run_frame(&mut game, &mut ctx, &mut input, 1.0);

        input.push(InputEvent::Wheel { delta_y: 120.0 });
        input.push(InputEvent::Wheel { delta_y: 3.0 });
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        let pos = camera_pos(&ctx);
        assert!((pos.z - (15.0 - 2.0 * ZOOM_STEP)).abs() < 1e-5, "pos={:?}", pos);
        assert_eq!(pos.x, 10.0);
    }

    #[test]
    fn zoom_stays_inside_distance_band() {
        let (mut game, mut ctx, _) = started();
        let camera = ctx.scene.find_by_tag_mut(CAMERA).unwrap();
        camera.pos = Vec3::new(0.0, 0.0, 1.002);
        camera.rotation = Quat::IDENTITY;

        game.wheel_delta = 3.0 * ZOOM_STEP;
        game.apply_zoom(&mut ctx);
        assert_eq!(camera_pos(&ctx), Vec3::new(0.0, 0.0, 1.002));
        assert_eq!(game.wheel_delta, 0.0);

        game.wheel_delta = -ZOOM_STEP;
        game.apply_zoom(&mut ctx);
        assert!((camera_pos(&ctx).z - 1.007).abs() < 1e-6);
    }

    #[test]
    fn look_requires_exploration() {
        let (mut game, mut ctx, mut input) = started();
        let before = ctx.scene.find_by_tag(CAMERA).unwrap().rotation;
        input.push(InputEvent::Custom { kind: CUSTOM_LOOK, a: 10.0, b: 45.0, c: 0.0 });
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        assert_eq!(ctx.scene.find_by_tag(CAMERA).unwrap().rotation, before);

        input.push(custom(CUSTOM_TOGGLE_VIEW));
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        run_frame(&mut game, &mut ctx, &mut input, 1.0);
        input.push(InputEvent::Custom { kind: CUSTOM_LOOK, a: 0.0, b: 90.0, c: 0.0 });
        run_frame(&mut game, &mut ctx, &mut input, 1.0 / 60.0);
        let dir = CameraComponent::look_direction(ctx.scene.find_by_tag(CAMERA).unwrap().rotation);
        assert!((dir - Vec3::NEG_X).length() < 1e-5, "dir={:?}", dir);
    }

    #[test]
    fn sign_keeps_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-4.0), -1.0);
        assert_eq!(sign(0.5), 1.0);
    }
}
