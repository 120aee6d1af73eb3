use glam::{Quat, Vec3};
use orrery_engine::{
    CameraComponent, EngineContext, Entity, MeshColor, MeshComponent, OrbitComponent,
};

use crate::bodies::{self, ring_tag, CAMERA, PLANETS, SUN};
use crate::profiles::{DISTANCE_PERIODS, ORBIT_RADII, SUN_RADIUS, WIDE_RADII};

/// Rotation of the top-down study camera (pitched straight down).
pub fn top_view_rotation() -> Quat {
    Quat::from_rotation_x(-90f32.to_radians())
}

/// Spawn the sun, the eight planets with their orbit rings, and the camera.
/// Everything starts where the distance preset puts it.
pub fn spawn_scene(ctx: &mut EngineContext) {
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(SUN)
            .with_mesh(
                MeshComponent::sphere(SUN_RADIUS, MeshColor::from_hex(bodies::SUN_COLOR))
                    .with_emissive(bodies::SUN_EMISSIVE),
            ),
    );

    for (i, planet) in PLANETS.iter().enumerate() {
        let orbit = OrbitComponent::new(ORBIT_RADII[i], DISTANCE_PERIODS[i]);
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(*planet)
                .with_pos(orbit.position())
                .with_mesh(MeshComponent::sphere(WIDE_RADII[i], bodies::planet_color(i)))
                .with_orbit(orbit),
        );

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(ring_tag(planet))
                .with_mesh(MeshComponent::ring(
                    ORBIT_RADII[i],
                    ORBIT_RADII[i] + 0.1,
                    MeshColor::from_hex(bodies::RING_COLOR),
                )),
        );
    }

    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(CAMERA)
            .with_pos(Vec3::new(0.0, bodies::TOP_VIEW_HEIGHT, 0.0))
            .with_rotation(top_view_rotation())
            .with_camera(CameraComponent::perspective(
                bodies::CAMERA_FOV,
                bodies::CAMERA_NEAR,
                bodies::CAMERA_FAR,
            )),
    );
}
