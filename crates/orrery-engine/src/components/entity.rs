use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::camera::CameraComponent;
use crate::components::label::LabelComponent;
use crate::components::mesh::MeshComponent;
use crate::components::orbit::OrbitComponent;
#[cfg(feature = "physics")]
use crate::core::physics::PhysicsBody;

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity over ECS purity: a scene holds tens of these, not millions.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Stable string key used by the host page and by scale profiles ("earth", "mainCamera").
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    pub scale: Vec3,
    /// Visual shape (entities without a mesh are invisible).
    pub mesh: Option<MeshComponent>,
    /// Circular orbit driving `pos` every frame.
    pub orbit: Option<OrbitComponent>,
    /// Marks the entity the scene is rendered from.
    pub camera: Option<CameraComponent>,
    /// 3D text label.
    pub label: Option<LabelComponent>,
    /// Physics body (optional — requires "physics" feature).
    #[cfg(feature = "physics")]
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            mesh: None,
            orbit: None,
            camera: None,
            label: None,
            #[cfg(feature = "physics")]
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitComponent) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_camera(mut self, camera: CameraComponent) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_label(mut self, label: LabelComponent) -> Self {
        self.label = Some(label);
        self
    }

    #[cfg(feature = "physics")]
    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}
