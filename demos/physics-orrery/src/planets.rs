//! The nine bodies of the physics orrery and their layout targets.

use glam::Vec3;
use orrery_engine::{
    BodyDesc, ColliderDesc, ColliderMaterial, EngineContext, Entity, EntityId, MeshColor,
    MeshComponent,
};

pub const SUN: &str = "Sun";

/// Where the sun is held after every physics step.
pub const SUN_PIN: Vec3 = Vec3::new(-150.0, 0.0, 0.0);
pub const SUN_RADIUS: f32 = 109.0;
/// World units per astronomical unit in the final layout.
pub const AU_SCALE: f32 = 6.2;

/// Static description of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f32,
    pub mass: f32,
    pub start: Vec3,
    pub color: u32,
    /// Mean distance from the sun; `None` for the sun itself.
    pub au: Option<f32>,
}

pub const PLANETS: [PlanetSpec; 9] = [
    PlanetSpec { name: SUN, radius: SUN_RADIUS, mass: 1_989_000.0, start: Vec3::new(-125.0, 0.0, -10.0), color: 0xffff00, au: None },
    PlanetSpec { name: "Mercury", radius: 0.383, mass: 0.055, start: Vec3::new(-15.5, 0.0, 0.0), color: 0xa9a9a9, au: Some(0.4) },
    PlanetSpec { name: "Venus", radius: 0.72, mass: 0.815, start: Vec3::new(-13.2, 0.0, 0.0), color: 0xffa500, au: Some(0.7) },
    PlanetSpec { name: "Earth", radius: 1.0, mass: 1.0, start: Vec3::new(-10.4, 0.0, 0.0), color: 0x0000ff, au: Some(1.0) },
    PlanetSpec { name: "Mars", radius: 0.532, mass: 0.107, start: Vec3::new(-7.0, 0.0, 0.0), color: 0xff0000, au: Some(1.5) },
    PlanetSpec { name: "Jupiter", radius: 11.21, mass: 317.8, start: Vec3::new(7.0, 0.0, 0.0), color: 0xffa500, au: Some(5.2) },
    PlanetSpec { name: "Saturn", radius: 9.45, mass: 95.2, start: Vec3::new(30.0, 0.0, 0.0), color: 0xffc0cb, au: Some(9.6) },
    PlanetSpec { name: "Uranus", radius: 4.01, mass: 14.6, start: Vec3::new(45.8, 0.0, 0.0), color: 0x008000, au: Some(19.2) },
    PlanetSpec { name: "Neptune", radius: 3.88, mass: 17.2, start: Vec3::new(55.9, 0.0, 0.0), color: 0xffa500, au: Some(30.1) },
];

impl PlanetSpec {
    /// Horizontal coordinate this body settles at: the sun at its pin, the
    /// planets at their scaled distance from the sun's right edge.
    pub fn target_x(&self) -> f32 {
        match self.au {
            Some(au) => SUN_PIN.x + SUN_RADIUS + au * AU_SCALE,
            None => SUN_PIN.x,
        }
    }

    pub fn is_sun(&self) -> bool {
        self.au.is_none()
    }
}

/// A spawned body plus its layout target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub spec: PlanetSpec,
    pub id: EntityId,
    pub target_x: f32,
}

/// Spawn one entity with a ball body per spec, in table order.
pub fn spawn_planets(ctx: &mut EngineContext) -> Vec<Planet> {
    PLANETS
        .iter()
        .map(|spec| {
            let id = ctx.next_id();
            let entity = Entity::new(id)
                .with_tag(spec.name)
                .with_mesh(MeshComponent::sphere(spec.radius, MeshColor::from_hex(spec.color)));
            let desc = BodyDesc::dynamic(ColliderDesc::Ball { radius: spec.radius }, spec.mass)
                .with_position(spec.start);
            ctx.spawn_with_body(entity, desc, ColliderMaterial::default());
            Planet { spec: *spec, id, target_x: spec.target_x() }
        })
        .collect()
}

/// Largest radius among the spawned bodies.
pub fn max_radius<'a>(planets: impl IntoIterator<Item = &'a Planet>) -> f32 {
    planets.into_iter().map(|p| p.spec.radius).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_scaled_from_sun_edge() {
        let earth = PLANETS.iter().find(|p| p.name == "Earth").unwrap();
        assert!((earth.target_x() - (-34.8)).abs() < 1e-4);
        assert_eq!(PLANETS[0].target_x(), -150.0);
        assert!(PLANETS[0].is_sun());
    }

    #[test]
    fn spawned_bodies_keep_their_mass() {
        let mut ctx = EngineContext::new();
        let planets = spawn_planets(&mut ctx);
        assert_eq!(planets.len(), 9);
        assert_eq!(ctx.physics.body_count(), 9);
        assert_eq!(ctx.mass(planets[1].id), Some(0.055));
        assert_eq!(ctx.scene.get(planets[3].id).unwrap().pos, Vec3::new(-10.4, 0.0, 0.0));
        assert_eq!(max_radius(&planets), 109.0);
    }
}
