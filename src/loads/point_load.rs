//! Point loads applied directly to beam nodes

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A concentrated load at a node, ordered like the node DOFs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointLoad {
    /// Axial force (X)
    pub px: f64,
    /// Transverse force (Y)
    pub py: f64,
    /// Moment about Z
    pub m: f64,
}

impl PointLoad {
    /// Create a new point load with all components
    pub fn new(px: f64, py: f64, m: f64) -> Self {
        Self { px, py, m }
    }

    /// Create a load in the axial direction
    pub fn horizontal(px: f64) -> Self {
        Self::new(px, 0.0, 0.0)
    }

    /// Create a load in the transverse direction
    pub fn vertical(py: f64) -> Self {
        Self::new(0.0, py, 0.0)
    }

    /// Create a concentrated moment
    pub fn moment(m: f64) -> Self {
        Self::new(0.0, 0.0, m)
    }

    /// Get the load as an array [PX, PY, M]
    pub fn as_array(&self) -> [f64; 3] {
        [self.px, self.py, self.m]
    }

    /// Convert the load into an algebraic vector
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.px, self.py, self.m)
    }

    /// Check if every component is zero
    pub fn is_zero(&self) -> bool {
        self.px == 0.0 && self.py == 0.0 && self.m == 0.0
    }
}

impl From<[f64; 3]> for PointLoad {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vector3<f64>> for PointLoad {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<PointLoad> for Vector3<f64> {
    fn from(value: PointLoad) -> Self {
        value.to_vector()
    }
}
