use crate::components::mesh::MeshColor;

/// Extruded 3D text. The host builds the geometry once its font has loaded;
/// until then the label is simply not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelComponent {
    pub text: String,
    /// Glyph height in world units.
    pub size: f32,
    /// Extrusion depth in world units.
    pub depth: f32,
    pub color: MeshColor,
}

impl LabelComponent {
    pub fn new(text: impl Into<String>, size: f32, depth: f32, color: MeshColor) -> Self {
        Self {
            text: text.into(),
            size,
            depth,
            color,
        }
    }
}
