use crate::components::entity::Entity;
use crate::renderer::camera::CameraView;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Flatten an entity's mesh into a render instance. `None` if it has no mesh.
pub fn mesh_instance(entity: &Entity) -> Option<RenderInstance> {
    let mesh = entity.mesh.as_ref()?;
    let (a, b) = match (mesh.sphere_radius(), mesh.ring_radii()) {
        (Some(radius), _) => (radius * entity.scale.x, 0.0),
        (_, Some((inner, outer))) => (inner * entity.scale.x, outer * entity.scale.x),
        _ => (0.0, 0.0),
    };
    Some(RenderInstance {
        x: entity.pos.x,
        y: entity.pos.y,
        z: entity.pos.z,
        shape: mesh.shape.code(),
        qx: entity.rotation.x,
        qy: entity.rotation.y,
        qz: entity.rotation.z,
        qw: entity.rotation.w,
        a,
        b,
        emissive: mesh.emissive,
        entity_id: entity.id.0 as f32,
        r: mesh.color.r,
        g: mesh.color.g,
        b_color: mesh.color.b,
        alpha: 1.0,
    })
}

/// Build the render buffer from a set of entities.
/// Active mesh entities become instances (up to `max_instances`); the first
/// active camera entity sets the view.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
    max_instances: usize,
) {
    buffer.clear();
    let mut camera_set = false;

    for entity in entities {
        if !entity.active {
            continue;
        }

        if !camera_set {
            if let Some(cam) = &entity.camera {
                buffer.camera = CameraView::new(entity.pos, entity.rotation, cam.fov_deg);
                camera_set = true;
            }
        }

        if buffer.instances.len() >= max_instances {
            continue;
        }
        if let Some(instance) = mesh_instance(entity) {
            buffer.push(instance);
        }
    }
}
