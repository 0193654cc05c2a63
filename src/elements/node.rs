//! Node element - a location on the beam axis

use serde::{Deserialize, Serialize};

use super::fixity::Fixity;
use crate::loads::PointLoad;
use crate::results::NodeResults;

/// A node on the beam, keyed by its coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Coordinate along the beam axis
    pub x: f64,
    /// Support condition at the node
    pub fixity: Fixity,
    /// Concentrated load at the node
    pub point_load: PointLoad,

    /// 1-based rank of `x` among all nodes, reassigned on every insertion
    #[serde(default)]
    pub(crate) id: usize,

    /// Solved results, recorded after an analysis
    #[serde(skip)]
    pub(crate) results: Option<NodeResults>,
}

impl Node {
    /// Create a new node at the given coordinate
    pub fn new(x: f64, fixity: Fixity, point_load: PointLoad) -> Self {
        Self {
            x,
            fixity,
            point_load,
            id: 0,
            results: None,
        }
    }

    /// Position-derived identifier (1 = leftmost node)
    pub fn id(&self) -> usize {
        self.id
    }

    /// Solved results, if an analysis has been recorded
    pub fn results(&self) -> Option<&NodeResults> {
        self.results.as_ref()
    }

    /// Check if results are attached
    pub fn is_analyzed(&self) -> bool {
        self.results.is_some()
    }
}
