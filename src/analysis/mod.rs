//! Solver bridge: analysis options, the solver adapter seam and solutions

use serde::{Deserialize, Serialize};

use crate::error::BeamResult;
use crate::loads::DistLoad;
use crate::model::EulerBeam;
use crate::results::NodeResults;

/// Geometric transformation the solver should apply to beam elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeomTransform {
    /// First-order linear geometry
    #[default]
    Linear,
    /// Second-order P-Delta geometry
    PDelta,
}

/// Options for running an analysis through a solver adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Verify that the solution's coordinates match the model's nodes
    pub check_results: bool,
    /// Relative tolerance for the coordinate check
    pub tolerance: f64,
    /// Enable logging/progress output
    pub log: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            check_results: true,
            tolerance: 1e-9,
            log: false,
        }
    }
}

impl AnalysisOptions {
    /// Enable logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    /// Skip the coordinate check when recording results
    pub fn unchecked(mut self) -> Self {
        self.check_results = false;
        self
    }

    /// Set the coordinate tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }
}

/// A distributed load resolved onto one element of the mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementLoad {
    /// 1-based id of the loaded element
    pub element: usize,
    /// Index of the originating interval load
    pub source: usize,
    /// Intensity applied over the element
    pub load: DistLoad,
}

/// Solved fields for one node, as returned by a solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSolution {
    /// Coordinate of the solved node
    pub x: f64,
    /// Solved fields at that coordinate
    pub results: NodeResults,
}

/// Per-node results for a whole beam, ordered by ascending coordinate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// One entry per node, in ascending `x`
    pub nodes: Vec<NodeSolution>,
}

impl Solution {
    /// Create an empty solution
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the results for the next node
    pub fn push(&mut self, x: f64, results: NodeResults) {
        self.nodes.push(NodeSolution { x, results });
    }

    /// Parse a solution written by an out-of-process solver
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the solution to JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of solved nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the solution is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A structural solver that can analyze a finished beam.
///
/// Implementations create one structural node per beam node in ascending `x`,
/// apply each node's fixity and point load, integrate every
/// [`ElementLoad`] onto its element (overlapping loads add), run a linear
/// static solve and return one [`NodeResults`] per node in the same order.
/// The beam is borrowed immutably for the whole solve.
pub trait SolverAdapter {
    /// Solve the beam and return per-node results
    fn solve(&self, beam: &EulerBeam) -> BeamResult<Solution>;
}

impl<F> SolverAdapter for F
where
    F: Fn(&EulerBeam) -> BeamResult<Solution>,
{
    fn solve(&self, beam: &EulerBeam) -> BeamResult<Solution> {
        self(beam)
    }
}
