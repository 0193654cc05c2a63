//! Beam Builder - mesh and load bookkeeping for 1D beam analysis
//!
//! Describe a straight beam by the places where something happens (supports,
//! point loads, distributed loads) and get back a consistent, solver-ready
//! mesh:
//! - One node per referenced coordinate, kept sorted, ids derived from rank
//! - Point loads that replace earlier loads at the same coordinate
//! - Distributed loads kept as interval records, resolved onto elements
//! - A solver adapter seam and coordinate-aligned result diagrams
//!
//! ## Example
//! ```rust
//! use beam_builder::prelude::*;
//!
//! let mut beam = EulerBeam::new();
//!
//! // Supports
//! beam.set_fixity(0.0, [1, 1, 0]).unwrap();
//! beam.set_fixity(6.0, [0, 1, 0]).unwrap();
//!
//! // Loads
//! beam.add_vertical_load(3.0, -10.0).unwrap();
//! beam.add_dist_load(0.0, 6.0, [0.0, -1.0]).unwrap();
//!
//! assert_eq!(beam.coordinates(), vec![0.0, 3.0, 6.0]);
//! assert_eq!(beam.element_loads().len(), 2);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod model;
pub mod plot;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        AnalysisOptions, ElementLoad, GeomTransform, NodeSolution, Solution, SolverAdapter,
    };
    pub use crate::elements::{Element, Fixity, FixityInput, Node, SectionProperties};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{DistLoad, IntervalLoad, PointLoad};
    pub use crate::model::EulerBeam;
    pub use crate::plot::{plot_beam, plot_moment, plot_shear, CsvRenderer, DiagramRenderer};
    pub use crate::results::{
        BeamSummary, Diagram, InternalForce, InternalForces, NodeDisplacement, NodeResults,
        Reactions,
    };
}
