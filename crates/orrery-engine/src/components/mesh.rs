/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Mesh primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus in the XZ plane (orbit track).
    Ring { inner: f32, outer: f32 },
}

impl MeshShape {
    /// Wire code read by the host renderer.
    pub fn code(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// Glow multiplier (default: 0.0).
    pub emissive: f32,
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: MeshColor) -> Self {
        Self { shape, color, emissive: 0.0 }
    }

    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Ring { inner, outer }, color)
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn sphere_radius(&self) -> Option<f32> {
        match self.shape {
            MeshShape::Sphere { radius } => Some(radius),
            MeshShape::Ring { .. } => None,
        }
    }

    pub fn ring_radii(&self) -> Option<(f32, f32)> {
        match self.shape {
            MeshShape::Ring { inner, outer } => Some((inner, outer)),
            MeshShape::Sphere { .. } => None,
        }
    }

    // Setters leave a mesh of the other shape untouched.

    pub fn set_sphere_radius(&mut self, value: f32) {
        if let MeshShape::Sphere { radius } = &mut self.shape {
            *radius = value;
        }
    }

    pub fn set_ring_inner(&mut self, value: f32) {
        if let MeshShape::Ring { inner, .. } = &mut self.shape {
            *inner = value;
        }
    }

    pub fn set_ring_outer(&mut self, value: f32) {
        if let MeshShape::Ring { outer, .. } = &mut self.shape {
            *outer = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color() {
        let c = MeshColor::from_hex(0xff8000);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn shape_accessors() {
        let sphere = MeshComponent::sphere(2.0, MeshColor::default());
        assert_eq!(sphere.sphere_radius(), Some(2.0));
        assert_eq!(sphere.ring_radii(), None);

        let ring = MeshComponent::ring(15.0, 15.1, MeshColor::default());
        assert_eq!(ring.ring_radii(), Some((15.0, 15.1)));
        assert_eq!(ring.sphere_radius(), None);
    }

    #[test]
    fn setters_respect_shape() {
        let mut sphere = MeshComponent::sphere(2.0, MeshColor::default());
        sphere.set_ring_inner(9.0);
        sphere.set_sphere_radius(4.0);
        assert_eq!(sphere.shape, MeshShape::Sphere { radius: 4.0 });

        let mut ring = MeshComponent::ring(15.0, 15.1, MeshColor::default());
        ring.set_sphere_radius(1.0);
        ring.set_ring_outer(10.6);
        assert_eq!(ring.ring_radii(), Some((15.0, 10.6)));
    }
}
