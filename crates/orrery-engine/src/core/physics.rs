use std::collections::HashMap;

use glam::{Quat, Vec3};
use rapier3d::prelude::*;

use crate::api::types::EntityId;

// ---------------------------------------------------------------------------
// Conversion helpers (private) — glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec3_to_na(v: Vec3) -> nalgebra::Vector3<f32> {
    nalgebra::Vector3::new(v.x, v.y, v.z)
}

fn na_to_vec3(v: &nalgebra::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn quat_to_na(q: Quat) -> nalgebra::UnitQuaternion<f32> {
    nalgebra::UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
}

fn na_to_quat(q: &nalgebra::UnitQuaternion<f32>) -> Quat {
    let c = q.coords;
    Quat::from_xyzw(c.x, c.y, c.z, c.w)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
    /// Moved only by explicit position writes.
    KinematicPositionBased,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
            BodyType::KinematicPositionBased => RigidBodyType::KinematicPositionBased,
        }
    }
}

/// Shape description for a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderDesc {
    Ball { radius: f32 },
}

impl ColliderDesc {
    fn build_collider(&self) -> ColliderBuilder {
        match *self {
            ColliderDesc::Ball { radius } => ColliderBuilder::ball(radius),
        }
    }
}

/// Contact material for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.5,
            friction: 0.5,
        }
    }
}

/// Builder for describing a rigid body before creation.
///
/// Mass is given explicitly rather than derived from collider density, so a
/// body keeps exactly the mass it was created with (or last set to).
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub mass: f32,
    pub collider: ColliderDesc,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape and mass.
    pub fn dynamic(collider: ColliderDesc, mass: f32) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            mass,
            collider,
        }
    }

    /// Create a fixed (static) body description.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            mass: 0.0,
            ..Self::dynamic(collider, 0.0)
        }
    }

    pub fn with_position(mut self, pos: Vec3) -> Self {
        self.position = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_velocity(mut self, vel: Vec3) -> Self {
        self.velocity = vel;
        self
    }
}

/// Handle pair stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier3D boilerplate into a single struct.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector3<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    /// Authoritative mass per body. Zero means "held in place by the caller".
    masses: HashMap<RigidBodyHandle, f32>,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity vector.
    pub fn new(gravity: Vec3) -> Self {
        Self {
            gravity: vec3_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            masses: HashMap::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Create a rigid body + ball collider and return handles.
    /// The EntityId is stored in the body's `user_data`.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        // A dynamic body created with zero mass starts out held in place.
        let body_type = if desc.body_type == BodyType::Dynamic && desc.mass <= 0.0 {
            BodyType::KinematicPositionBased
        } else {
            desc.body_type
        };

        let rb = RigidBodyBuilder::new(body_type.to_rapier())
            .position(nalgebra::Isometry3::from_parts(
                nalgebra::Translation3::new(desc.position.x, desc.position.y, desc.position.z),
                quat_to_na(desc.rotation),
            ))
            .linvel(vec3_to_na(desc.velocity))
            .additional_mass(desc.mass.max(0.0))
            .user_data(entity_id.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = desc
            .collider
            .build_collider()
            .restitution(material.restitution)
            .friction(material.friction)
            .density(0.0)
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        self.masses.insert(body_handle, desc.mass.max(0.0));

        PhysicsBody {
            body_handle,
            collider_handle,
        }
    }

    /// Remove a body and all its colliders from the simulation.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        self.masses.remove(&body.body_handle);
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Current mass of a body as last set. `None` if the body does not exist.
    pub fn mass(&self, body: &PhysicsBody) -> Option<f32> {
        self.masses.get(&body.body_handle).copied()
    }

    /// Change a body's mass.
    ///
    /// Zero turns a dynamic body into a kinematic one: forces and contacts no
    /// longer move it, only explicit position writes do. A positive mass turns it
    /// back into a dynamic body carrying exactly that mass. Fixed bodies only
    /// record the value.
    pub fn set_mass(&mut self, body: &PhysicsBody, mass: f32) {
        let mass = mass.max(0.0);
        let Some(rb) = self.bodies.get_mut(body.body_handle) else {
            return;
        };
        if !rb.is_fixed() {
            if mass > 0.0 {
                // Released from position control at rest.
                if rb.is_kinematic() {
                    rb.set_linvel(nalgebra::Vector3::zeros(), false);
                    rb.set_angvel(nalgebra::Vector3::zeros(), false);
                }
                rb.set_body_type(RigidBodyType::Dynamic, true);
                rb.set_additional_mass(mass, true);
            } else {
                rb.set_body_type(RigidBodyType::KinematicPositionBased, true);
                rb.set_linvel(nalgebra::Vector3::zeros(), false);
                rb.set_angvel(nalgebra::Vector3::zeros(), false);
            }
        }
        self.masses.insert(body.body_handle, mass);
    }

    /// Whether the body is currently moved only by position writes.
    pub fn is_kinematic(&self, body: &PhysicsBody) -> bool {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.is_kinematic())
            .unwrap_or(false)
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec3) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec3_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec3 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec3(rb.linvel()))
            .unwrap_or(Vec3::ZERO)
    }

    /// Teleport a body to `pos`, keeping its orientation.
    pub fn set_body_position(&mut self, body: &PhysicsBody, pos: Vec3) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            let translation = vec3_to_na(pos);
            rb.set_translation(translation, true);
            if rb.is_kinematic() {
                rb.set_next_kinematic_translation(translation);
            }
        }
    }

    /// Get the current position and orientation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec3, Quat) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| (na_to_vec3(rb.translation()), na_to_quat(rb.rotation())))
            .unwrap_or((Vec3::ZERO, Quat::IDENTITY))
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
