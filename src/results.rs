//! Result types and coordinate-aligned result extraction

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::model::EulerBeam;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Axial displacement
    pub dx: f64,
    /// Transverse displacement
    pub dy: f64,
    /// Rotation
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from array [DX, DY, RZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            rz: arr[2],
        }
    }

    /// Get as array [DX, DY, RZ]
    pub fn as_array(&self) -> [f64; 3] {
        [self.dx, self.dy, self.rz]
    }
}

/// Reaction forces at a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Axial reaction
    pub fx: f64,
    /// Transverse reaction
    pub fy: f64,
    /// Reaction moment
    pub mz: f64,
}

impl Reactions {
    /// Create from array [FX, FY, MZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }

    /// Get as array [FX, FY, MZ]
    pub fn as_array(&self) -> [f64; 3] {
        [self.fx, self.fy, self.mz]
    }
}

/// Internal forces in the beam at a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalForces {
    /// Axial force (positive = tension)
    pub axial: f64,
    /// Shear force
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
}

impl InternalForces {
    /// Create from array [N, V, M]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            axial: arr[0],
            shear: arr[1],
            moment: arr[2],
        }
    }

    /// Get a single component
    pub fn component(&self, component: InternalForce) -> f64 {
        match component {
            InternalForce::Axial => self.axial,
            InternalForce::Shear => self.shear,
            InternalForce::Moment => self.moment,
        }
    }
}

/// Solved fields attached to a node after analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeResults {
    /// Nodal displacement
    pub displacement: NodeDisplacement,
    /// Support reaction
    pub reaction: Reactions,
    /// Internal force at the node's coordinate
    pub internal_force: InternalForces,
}

impl NodeResults {
    /// Create from raw solver arrays
    pub fn from_arrays(disp: [f64; 3], reaction: [f64; 3], internal_force: [f64; 3]) -> Self {
        Self {
            displacement: NodeDisplacement::from_array(disp),
            reaction: Reactions::from_array(reaction),
            internal_force: InternalForces::from_array(internal_force),
        }
    }

    /// Reaction as an algebraic vector
    pub fn reaction_vector(&self) -> Vector3<f64> {
        Vector3::from(self.reaction.as_array())
    }
}

/// Internal force component selectable for diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternalForce {
    /// Axial force
    Axial,
    /// Shear force
    Shear,
    /// Bending moment
    Moment,
}

impl InternalForce {
    /// Label used on diagrams
    pub fn label(&self) -> &'static str {
        match self {
            InternalForce::Axial => "Axial",
            InternalForce::Shear => "Shear",
            InternalForce::Moment => "Moment",
        }
    }
}

/// Coordinate-aligned series ready for plotting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Series label
    pub label: String,
    /// Node coordinates, ascending
    pub xs: Vec<f64>,
    /// Value at each coordinate
    pub ys: Vec<f64>,
}

impl Diagram {
    /// Number of points
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the diagram has no points
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Point with the largest absolute value, as (x, y)
    pub fn abs_max(&self) -> Option<(f64, f64)> {
        self.xs
            .iter()
            .zip(&self.ys)
            .fold(None, |best: Option<(f64, f64)>, (&x, &y)| match best {
                Some((_, b)) if b.abs() >= y.abs() => best,
                _ => Some((x, y)),
            })
    }
}

/// Walk the nodes in order and project one value per node.
fn collect_series<F>(beam: &EulerBeam, label: &str, value: F) -> BeamResult<Diagram>
where
    F: Fn(&NodeResults) -> f64,
{
    let mut xs = Vec::with_capacity(beam.node_count());
    let mut ys = Vec::with_capacity(beam.node_count());
    for node in beam.nodes() {
        let results = node.results().ok_or(BeamError::NotAnalyzed { x: node.x })?;
        xs.push(node.x);
        ys.push(value(results));
    }
    Ok(Diagram {
        label: label.to_string(),
        xs,
        ys,
    })
}

/// Extract one internal force component at every node
pub fn internal_force_diagram(beam: &EulerBeam, component: InternalForce) -> BeamResult<Diagram> {
    collect_series(beam, component.label(), |r| {
        r.internal_force.component(component)
    })
}

/// Extract the bending moment at every node
pub fn moment_diagram(beam: &EulerBeam) -> BeamResult<Diagram> {
    internal_force_diagram(beam, InternalForce::Moment)
}

/// Extract the shear force at every node
pub fn shear_diagram(beam: &EulerBeam) -> BeamResult<Diagram> {
    internal_force_diagram(beam, InternalForce::Shear)
}

/// Extract the transverse displacement at every node
pub fn deflection_diagram(beam: &EulerBeam) -> BeamResult<Diagram> {
    collect_series(beam, "Deflection", |r| r.displacement.dy)
}

/// Extract the transverse reaction at every node
pub fn reaction_diagram(beam: &EulerBeam) -> BeamResult<Diagram> {
    collect_series(beam, "Reaction", |r| r.reaction.fy)
}

/// Extreme values of an analyzed beam
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BeamSummary {
    /// Moment with the largest magnitude
    pub max_moment: f64,
    /// Coordinate of `max_moment`
    pub max_moment_x: f64,
    /// Shear with the largest magnitude
    pub max_shear: f64,
    /// Coordinate of `max_shear`
    pub max_shear_x: f64,
    /// Transverse deflection with the largest magnitude
    pub max_deflection: f64,
    /// Coordinate of `max_deflection`
    pub max_deflection_x: f64,
    /// Sum of all reaction forces and moments
    pub total_reaction: [f64; 3],
    /// Number of nodes
    pub num_nodes: usize,
}

/// Summarize an analyzed beam
pub fn summary(beam: &EulerBeam) -> BeamResult<BeamSummary> {
    let mut summary = BeamSummary {
        num_nodes: beam.node_count(),
        ..Default::default()
    };

    if let Some((x, m)) = moment_diagram(beam)?.abs_max() {
        summary.max_moment = m;
        summary.max_moment_x = x;
    }
    if let Some((x, v)) = shear_diagram(beam)?.abs_max() {
        summary.max_shear = v;
        summary.max_shear_x = x;
    }
    if let Some((x, d)) = deflection_diagram(beam)?.abs_max() {
        summary.max_deflection = d;
        summary.max_deflection_x = x;
    }

    // every node is analyzed at this point, the diagrams above checked it
    let total = beam
        .nodes()
        .filter_map(|node| node.results())
        .fold(Vector3::zeros(), |acc, r| acc + r.reaction_vector());
    summary.total_reaction = [total.x, total.y, total.z];

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Solution;
    use approx::assert_relative_eq;

    fn analyzed_beam() -> EulerBeam {
        let mut beam = EulerBeam::new();
        beam.set_fixity(0.0, [1, 1, 0]).unwrap();
        beam.set_fixity(4.0, [0, 1, 0]).unwrap();
        beam.add_vertical_load(2.0, -10.0).unwrap();

        let mut solution = Solution::new();
        solution.push(0.0, NodeResults::from_arrays([0.0; 3], [0.0, 5.0, 0.0], [0.0, 5.0, 0.0]));
        solution.push(2.0, NodeResults::from_arrays([0.0, -0.1, 0.0], [0.0; 3], [0.0, -5.0, 10.0]));
        solution.push(4.0, NodeResults::from_arrays([0.0; 3], [0.0, 5.0, 0.0], [0.0, -5.0, 0.0]));
        beam.record_results(solution).unwrap();
        beam
    }

    #[test]
    fn test_moment_diagram_is_coordinate_aligned() {
        let beam = analyzed_beam();
        let diagram = moment_diagram(&beam).unwrap();
        assert_eq!(diagram.xs, vec![0.0, 2.0, 4.0]);
        assert_eq!(diagram.ys, vec![0.0, 10.0, 0.0]);
        assert_eq!(diagram.label, "Moment");
    }

    #[test]
    fn test_shear_diagram() {
        let beam = analyzed_beam();
        let diagram = shear_diagram(&beam).unwrap();
        assert_eq!(diagram.len(), beam.node_count());
        assert_eq!(diagram.ys, vec![5.0, -5.0, -5.0]);
    }

    #[test]
    fn test_unanalyzed_beam_fails() {
        let mut beam = EulerBeam::new();
        beam.add_vertical_load(1.5, -1.0).unwrap();
        match moment_diagram(&beam) {
            Err(BeamError::NotAnalyzed { x }) => assert_eq!(x, 1.5),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_reaction_diagram() {
        let beam = analyzed_beam();
        let diagram = reaction_diagram(&beam).unwrap();
        assert_eq!(diagram.xs, beam.coordinates());
        assert_eq!(diagram.ys, vec![5.0, 0.0, 5.0]);
        assert_eq!(diagram.label, "Reaction");

        let mut unsolved = EulerBeam::new();
        unsolved.set_fixity(0.0, 1).unwrap();
        assert!(matches!(
            reaction_diagram(&unsolved),
            Err(BeamError::NotAnalyzed { x }) if x == 0.0
        ));
    }

    #[test]
    fn test_summary() {
        let beam = analyzed_beam();
        let summary = summary(&beam).unwrap();
        assert_relative_eq!(summary.max_moment, 10.0);
        assert_relative_eq!(summary.max_moment_x, 2.0);
        assert_relative_eq!(summary.max_deflection, -0.1);
        assert_relative_eq!(summary.total_reaction[1], 10.0);
        assert_eq!(summary.num_nodes, 3);
    }

    #[test]
    fn test_abs_max_keeps_first_of_equal_magnitudes() {
        let diagram = Diagram {
            label: "Shear".to_string(),
            xs: vec![0.0, 1.0, 2.0],
            ys: vec![5.0, -5.0, 1.0],
        };
        assert_eq!(diagram.abs_max(), Some((0.0, 5.0)));
    }
}
