pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod audio;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext, run_frame};
pub use api::types::{EntityId, SoundId, SoundEvent, SoundCommand, GameEvent, Overlay, OverlayItem};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape, MeshColor};
pub use components::orbit::OrbitComponent;
pub use components::camera::CameraComponent;
pub use components::label::LabelComponent;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::CameraView;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use audio::bank::SoundBank;
pub use bridge::protocol::ProtocolLayout;
pub use systems::orbit::tick_orbits;
pub use systems::render::build_render_buffer;
pub use systems::text::{collect_labels, labels_json, LabelView};

#[cfg(feature = "physics")]
pub use core::physics::{
    PhysicsWorld, PhysicsBody, BodyDesc, BodyType,
    ColliderDesc, ColliderMaterial,
};

// Extensions: decoupled optional systems
pub use extensions::{
    Easing, lerp, lerp_vec3, ease, ease_vec3,
    TweenState, Tween, TweenId, TweenTarget, TweenChannel,
    TimerState, TimerId,
};
