//! Element - the beam segment between two consecutive nodes

use serde::{Deserialize, Serialize};

/// A segment of the beam joining two adjacent nodes.
///
/// Elements are derived from the sorted node sequence and are never stored;
/// element `k` joins nodes `k` and `k + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// 1-based element id
    pub id: usize,
    /// Id of the start node
    pub i_node: usize,
    /// Id of the end node
    pub j_node: usize,
    /// Coordinate of the start node
    pub x_i: f64,
    /// Coordinate of the end node
    pub x_j: f64,
}

impl Element {
    /// Length of the element
    pub fn length(&self) -> f64 {
        self.x_j - self.x_i
    }

    /// Coordinate of the element midpoint
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.x_i + self.x_j)
    }
}
