//! Section and material properties shared by every element of a beam

use serde::{Deserialize, Serialize};

/// Elastic properties of the beam cross-section.
///
/// The mesh layer only stores these; solver adapters read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Elastic modulus
    pub e: f64,
    /// Cross-sectional area
    pub a: f64,
    /// Second moment of area about the bending axis
    pub i: f64,
}

impl SectionProperties {
    /// Create section properties
    pub fn new(e: f64, a: f64, i: f64) -> Self {
        Self { e, a, i }
    }

    /// Create properties for a solid rectangle of the given width and depth
    pub fn rectangular(e: f64, width: f64, depth: f64) -> Self {
        Self::new(e, width * depth, width * depth.powi(3) / 12.0)
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.e * self.i
    }

    /// Axial rigidity EA
    pub fn axial_rigidity(&self) -> f64 {
        self.e * self.a
    }
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_section() {
        let section = SectionProperties::rectangular(200e9, 0.1, 0.3);
        assert_relative_eq!(section.a, 0.03);
        assert_relative_eq!(section.i, 0.1 * 0.027 / 12.0);
        assert_relative_eq!(section.flexural_rigidity(), 200e9 * 2.25e-4);
        assert_relative_eq!(section.axial_rigidity(), 6e9);
    }
}
