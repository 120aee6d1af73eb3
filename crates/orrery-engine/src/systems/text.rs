//! 3D text labels.
//!
//! Glyph geometry comes from a typeface the host loads, so Rust only publishes
//! what to write and where. The host rebuilds its meshes when the list changes.

use serde::Serialize;
use crate::components::entity::Entity;

/// One label as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelView {
    pub entity: u32,
    pub text: String,
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub size: f32,
    pub depth: f32,
    pub color: [f32; 3],
}

/// Collect labels of active entities.
pub fn collect_labels<'a>(entities: impl Iterator<Item = &'a Entity>) -> Vec<LabelView> {
    entities
        .filter(|e| e.active)
        .filter_map(|e| {
            let label = e.label.as_ref()?;
            Some(LabelView {
                entity: e.id.0,
                text: label.text.clone(),
                position: e.pos.to_array(),
                rotation: e.rotation.to_array(),
                size: label.size,
                depth: label.depth,
                color: [label.color.r, label.color.g, label.color.b],
            })
        })
        .collect()
}

pub fn labels_json<'a>(entities: impl Iterator<Item = &'a Entity>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&collect_labels(entities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::label::LabelComponent;
    use crate::components::mesh::MeshColor;
    use glam::Vec3;

    #[test]
    fn only_labelled_entities_are_listed() {
        let entities = vec![
            Entity::new(EntityId(1)),
            Entity::new(EntityId(2))
                .with_pos(Vec3::new(0.0, 15.0, 10.0))
                .with_label(LabelComponent::new("Space Odyssey VR", 10.0, 1.5, MeshColor::from_hex(0xcdcdcd))),
        ];
        let labels = collect_labels(entities.iter());
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].entity, 2);
        assert_eq!(labels[0].text, "Space Odyssey VR");
        assert_eq!(labels[0].position, [0.0, 15.0, 10.0]);
        assert_eq!(labels[0].rotation, [0.0, 0.0, 0.0, 1.0]);

        let json = labels_json(entities.iter()).unwrap();
        assert!(json.starts_with(r#"[{"entity":2,"text":"Space Odyssey VR""#));
    }
}
