//! Distributed loads recorded over a span of the beam

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Intensity of a distributed load (force or moment per unit length)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistLoad {
    /// Axial intensity
    pub qx: f64,
    /// Transverse intensity
    pub qy: f64,
    /// Distributed moment intensity
    #[serde(default)]
    pub m: f64,
}

impl DistLoad {
    /// Create a new distributed load intensity
    pub fn new(qx: f64, qy: f64, m: f64) -> Self {
        Self { qx, qy, m }
    }

    /// Transverse intensity only
    pub fn vertical(qy: f64) -> Self {
        Self::new(0.0, qy, 0.0)
    }

    /// Axial intensity only
    pub fn horizontal(qx: f64) -> Self {
        Self::new(qx, 0.0, 0.0)
    }

    /// Get the intensity as an array [QX, QY, M]
    pub fn as_array(&self) -> [f64; 3] {
        [self.qx, self.qy, self.m]
    }

    /// Convert the intensity into an algebraic vector
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.qx, self.qy, self.m)
    }
}

impl From<[f64; 2]> for DistLoad {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1], 0.0)
    }
}

impl From<[f64; 3]> for DistLoad {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

/// A distributed load between two node coordinates.
///
/// Interval loads are never merged; overlapping spans superpose when the
/// solver integrates them onto elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalLoad {
    /// Start coordinate
    pub x1: f64,
    /// End coordinate
    pub x2: f64,
    /// Load intensity over the span
    pub load: DistLoad,
}

impl IntervalLoad {
    /// Create a new interval load
    pub fn new(x1: f64, x2: f64, load: DistLoad) -> Self {
        Self { x1, x2, load }
    }

    /// Span bounds as (lower, upper)
    pub fn span(&self) -> (f64, f64) {
        (self.x1.min(self.x2), self.x1.max(self.x2))
    }

    /// Length of the loaded span
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Check if the segment [a, b] lies inside the loaded span
    pub fn covers(&self, a: f64, b: f64) -> bool {
        let (lo, hi) = self.span();
        a.min(b) >= lo && a.max(b) <= hi
    }

    /// Resultant of the load over its span
    pub fn resultant(&self) -> Vector3<f64> {
        self.load.to_vector() * self.length()
    }
}
