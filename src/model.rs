//! Euler beam model - coordinate-keyed node and load bookkeeping

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::hash::{Hash, Hasher};

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOptions, ElementLoad, GeomTransform, Solution, SolverAdapter};
use crate::elements::{Element, Fixity, FixityInput, Node, SectionProperties};
use crate::error::{BeamError, BeamResult};
use crate::loads::{DistLoad, IntervalLoad, PointLoad};

/// Node coordinate usable as a map key.
///
/// Only finite values are admitted and `-0.0` is folded onto `0.0`, so bitwise
/// equality agrees with numeric equality.
#[derive(Debug, Clone, Copy)]
struct Coord(f64);

impl Coord {
    fn new(x: f64) -> BeamResult<Self> {
        if !x.is_finite() {
            return Err(BeamError::InvalidCoordinate(x));
        }
        Ok(Self(x + 0.0))
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Coord {}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A straight multi-node Euler-Bernoulli beam.
///
/// Every support, point load and distributed-load endpoint owns exactly one
/// [`Node`]. Nodes are kept in ascending `x` and their ids always equal their
/// 1-based rank; ids change whenever a node is inserted to the left of
/// existing ones, so the coordinate is the only stable key.
///
/// ## Example
/// ```rust
/// use beam_builder::prelude::*;
///
/// let mut beam = EulerBeam::new();
/// beam.set_fixity(0.5, [1, 1, 0]).unwrap();
/// beam.add_vertical_load(2.5, -10.0).unwrap();
/// beam.add_dist_load(1.0, 4.0, [0.0, -2.0]).unwrap();
///
/// assert_eq!(beam.coordinates(), vec![0.5, 1.0, 2.5, 4.0]);
/// assert_eq!(beam.ele_loads().len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BeamData", into = "BeamData")]
pub struct EulerBeam {
    /// Nodes ordered by coordinate
    nodes: BTreeMap<Coord, Node>,
    /// Coordinates currently represented by a node
    node_coords: HashSet<Coord>,
    /// Distributed loads, in insertion order
    ele_loads: Vec<IntervalLoad>,
    /// Section properties shared by every element
    section: SectionProperties,
    /// Geometric transformation requested from the solver
    geom_transform: GeomTransform,
    /// Results are attached and current
    analyzed: bool,
}

impl Default for EulerBeam {
    fn default() -> Self {
        Self::new()
    }
}

impl EulerBeam {
    /// Create an empty beam with unit section properties
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            node_coords: HashSet::new(),
            ele_loads: Vec::new(),
            section: SectionProperties::default(),
            geom_transform: GeomTransform::default(),
            analyzed: false,
        }
    }

    /// Create a beam with unloaded nodes at the given coordinates.
    ///
    /// `fixities`, when given, must hold one entry per coordinate; otherwise
    /// every node starts free.
    pub fn with_nodes(xs: &[f64], fixities: Option<&[FixityInput]>) -> BeamResult<Self> {
        let mut beam = Self::new();
        beam.add_nodes(xs, fixities, None)?;
        Ok(beam)
    }

    /// Set the section properties
    pub fn with_section(mut self, section: SectionProperties) -> Self {
        self.set_section(section);
        self
    }

    /// Set the geometric transformation
    pub fn with_geom_transform(mut self, geom_transform: GeomTransform) -> Self {
        self.geom_transform = geom_transform;
        self.invalidate();
        self
    }

    /// Replace the section properties
    pub fn set_section(&mut self, section: SectionProperties) {
        self.section = section;
        self.invalidate();
    }

    /// Section properties shared by every element
    pub fn section(&self) -> SectionProperties {
        self.section
    }

    /// Geometric transformation requested from the solver
    pub fn geom_transform(&self) -> GeomTransform {
        self.geom_transform
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a new node.
    ///
    /// Fails with [`BeamError::DuplicateNode`] if a node already exists at
    /// `x`; use [`set_fixity`](Self::set_fixity) or
    /// [`add_point_load`](Self::add_point_load) to update an existing node.
    pub fn add_node(
        &mut self,
        x: f64,
        fixity: impl Into<FixityInput>,
        point_load: impl Into<PointLoad>,
    ) -> BeamResult<()> {
        let key = Coord::new(x)?;
        if self.node_coords.contains(&key) {
            return Err(BeamError::DuplicateNode(x));
        }
        let fixity = fixity.into().resolve()?;
        self.insert_node(key, fixity, point_load.into());
        Ok(())
    }

    /// Add several nodes at once.
    ///
    /// Optional fixity and load lists must match `xs` in length; missing
    /// lists default to free, unloaded nodes. All input is checked before any
    /// node is inserted.
    pub fn add_nodes(
        &mut self,
        xs: &[f64],
        fixities: Option<&[FixityInput]>,
        point_loads: Option<&[PointLoad]>,
    ) -> BeamResult<()> {
        if let Some(fixities) = fixities {
            check_length("fixities", xs.len(), fixities.len())?;
        }
        if let Some(point_loads) = point_loads {
            check_length("point loads", xs.len(), point_loads.len())?;
        }

        let mut seen = HashSet::with_capacity(xs.len());
        let mut pending = Vec::with_capacity(xs.len());
        for (i, &x) in xs.iter().enumerate() {
            let key = Coord::new(x)?;
            if self.node_coords.contains(&key) || !seen.insert(key) {
                return Err(BeamError::DuplicateNode(x));
            }
            let fixity = match fixities {
                Some(fixities) => fixities[i].resolve()?,
                None => Fixity::free(),
            };
            let point_load = point_loads.map_or_else(PointLoad::default, |loads| loads[i]);
            pending.push((key, fixity, point_load));
        }

        for (key, fixity, point_load) in pending {
            self.insert_node(key, fixity, point_load);
        }
        Ok(())
    }

    /// Set the fixity at `x`, creating an unloaded node if none exists.
    ///
    /// A single 0/1 flag applies to all DOFs; a list must hold exactly one
    /// 0/1 flag per DOF.
    pub fn set_fixity(&mut self, x: f64, fixity: impl Into<FixityInput>) -> BeamResult<()> {
        let key = Coord::new(x)?;
        let fixity = fixity.into().resolve().inspect_err(|e| {
            warn!("Rejected fixity at x = {x}: {e}");
        })?;

        match self.nodes.get_mut(&key) {
            Some(node) => {
                node.fixity = fixity;
                self.invalidate();
            }
            None => self.insert_node(key, fixity, PointLoad::default()),
        }
        Ok(())
    }

    /// Set the point load at `x`, creating a free node if none exists.
    ///
    /// An existing load at `x` is replaced, not added to.
    pub fn add_point_load(&mut self, x: f64, load: impl Into<PointLoad>) -> BeamResult<()> {
        let key = Coord::new(x)?;
        let load = load.into();

        match self.nodes.get_mut(&key) {
            Some(node) => {
                node.point_load = load;
                self.invalidate();
            }
            None => self.insert_node(key, Fixity::free(), load),
        }
        Ok(())
    }

    /// Set a transverse point load at `x`, replacing any existing load
    pub fn add_vertical_load(&mut self, x: f64, py: f64) -> BeamResult<()> {
        self.add_point_load(x, PointLoad::vertical(py))
    }

    /// Set an axial point load at `x`, replacing any existing load
    pub fn add_horizontal_load(&mut self, x: f64, px: f64) -> BeamResult<()> {
        self.add_point_load(x, PointLoad::horizontal(px))
    }

    /// Set a concentrated moment at `x`, replacing any existing load
    pub fn add_moment(&mut self, x: f64, m: f64) -> BeamResult<()> {
        self.add_point_load(x, PointLoad::moment(m))
    }

    /// Add a distributed load between `x1` and `x2`.
    ///
    /// Nodes are created at either endpoint if missing. The load is always
    /// appended; earlier loads over the same span are kept. Reversed bounds
    /// are stored in ascending order and a zero-length span is rejected.
    pub fn add_dist_load(
        &mut self,
        x1: f64,
        x2: f64,
        load: impl Into<DistLoad>,
    ) -> BeamResult<()> {
        let k1 = Coord::new(x1)?;
        let k2 = Coord::new(x2)?;
        if k1 == k2 {
            warn!("Rejected zero-length distributed load at x = {x1}");
            return Err(BeamError::ZeroLengthLoad(x1));
        }
        let (lo, hi) = if k1 < k2 { (k1, k2) } else { (k2, k1) };

        for key in [lo, hi] {
            if !self.node_coords.contains(&key) {
                self.insert_node(key, Fixity::free(), PointLoad::default());
            }
        }

        self.ele_loads.push(IntervalLoad::new(lo.0, hi.0, load.into()));
        self.invalidate();
        Ok(())
    }

    /// Add a transverse distributed load between `x1` and `x2`
    pub fn add_dist_load_vertical(&mut self, x1: f64, x2: f64, qy: f64) -> BeamResult<()> {
        self.add_dist_load(x1, x2, DistLoad::vertical(qy))
    }

    /// Add an axial distributed load between `x1` and `x2`
    pub fn add_dist_load_horizontal(&mut self, x1: f64, x2: f64, qx: f64) -> BeamResult<()> {
        self.add_dist_load(x1, x2, DistLoad::horizontal(qx))
    }

    /// Re-establish coordinate order and reassign node ids.
    ///
    /// Nodes are stored in coordinate order already, so this only relabels;
    /// calling it repeatedly gives the same ids.
    pub fn sort_nodes(&mut self) {
        self.relabel_nodes();
    }

    fn relabel_nodes(&mut self) {
        for (rank, node) in self.nodes.values_mut().enumerate() {
            node.id = rank + 1;
        }
        trace!("Relabelled {} nodes", self.nodes.len());
    }

    fn insert_node(&mut self, key: Coord, fixity: Fixity, point_load: PointLoad) {
        self.nodes.insert(key, Node::new(key.0, fixity, point_load));
        self.node_coords.insert(key);
        debug!("New node added at: {}", key.0);
        self.invalidate();
        self.sort_nodes();
    }

    /// Drop recorded results after a change to the model
    fn invalidate(&mut self) {
        if self.analyzed {
            for node in self.nodes.values_mut() {
                node.results = None;
            }
            self.analyzed = false;
        }
    }

    // ========================
    // Query Methods
    // ========================

    /// Nodes in ascending coordinate order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + DoubleEndedIterator + '_ {
        self.nodes.values()
    }

    /// Node at coordinate `x`
    pub fn node(&self, x: f64) -> Option<&Node> {
        let key = Coord::new(x).ok()?;
        self.nodes.get(&key)
    }

    /// Node with the given 1-based id
    pub fn node_by_id(&self, id: usize) -> Option<&Node> {
        id.checked_sub(1).and_then(|rank| self.nodes.values().nth(rank))
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if a node exists at `x`
    pub fn contains(&self, x: f64) -> bool {
        Coord::new(x).is_ok_and(|key| self.node_coords.contains(&key))
    }

    /// Node coordinates in ascending order
    pub fn coordinates(&self) -> Vec<f64> {
        self.nodes.values().map(|node| node.x).collect()
    }

    /// Distributed loads in insertion order
    pub fn ele_loads(&self) -> &[IntervalLoad] {
        &self.ele_loads
    }

    /// Distance between the first and last node
    pub fn length(&self) -> f64 {
        match (self.nodes.values().next(), self.nodes.values().next_back()) {
            (Some(first), Some(last)) => last.x - first.x,
            _ => 0.0,
        }
    }

    /// Elements joining each pair of adjacent nodes
    pub fn elements(&self) -> Vec<Element> {
        let nodes: Vec<&Node> = self.nodes.values().collect();
        nodes
            .windows(2)
            .enumerate()
            .map(|(k, pair)| Element {
                id: k + 1,
                i_node: pair[0].id,
                j_node: pair[1].id,
                x_i: pair[0].x,
                x_j: pair[1].x,
            })
            .collect()
    }

    /// Distributed loads resolved onto the elements they cover.
    ///
    /// Each interval load yields one entry per covered element; overlapping
    /// loads yield several entries for the same element.
    pub fn element_loads(&self) -> Vec<ElementLoad> {
        let mut loads = Vec::new();
        for (source, ele_load) in self.ele_loads.iter().enumerate() {
            let (lo, hi) = ele_load.span();
            let (Ok(lo), Ok(hi)) = (Coord::new(lo), Coord::new(hi)) else {
                continue;
            };
            let mut covered = self.nodes.range(lo..=hi).map(|(_, node)| node.id);
            let (Some(first), Some(last)) = (covered.next(), covered.next_back()) else {
                continue;
            };
            loads.extend((first..last).map(|element| ElementLoad {
                element,
                source,
                load: ele_load.load,
            }));
        }
        loads
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Solve the beam with `adapter` and record the results
    pub fn analyze(&mut self, adapter: &dyn SolverAdapter) -> BeamResult<()> {
        self.analyze_with(adapter, &AnalysisOptions::default())
    }

    /// Solve the beam with custom options
    pub fn analyze_with(
        &mut self,
        adapter: &dyn SolverAdapter,
        options: &AnalysisOptions,
    ) -> BeamResult<()> {
        if options.log {
            info!(
                "Analyzing beam: {} nodes, {} elements, {} distributed loads",
                self.node_count(),
                self.node_count().saturating_sub(1),
                self.ele_loads.len()
            );
        }
        let solution = adapter.solve(self)?;
        self.record_solution(solution, options)
    }

    /// Attach a solution to the nodes, checking it against the model
    pub fn record_results(&mut self, solution: Solution) -> BeamResult<()> {
        self.record_solution(solution, &AnalysisOptions::default())
    }

    fn record_solution(&mut self, solution: Solution, options: &AnalysisOptions) -> BeamResult<()> {
        if solution.len() != self.nodes.len() {
            return Err(BeamError::SolutionMismatch(format!(
                "expected results for {} nodes, got {}",
                self.nodes.len(),
                solution.len()
            )));
        }
        if let Some(solved) = solution.nodes.iter().find(|s| !s.x.is_finite()) {
            return Err(BeamError::SolutionMismatch(format!(
                "solution has non-finite coordinate {}",
                solved.x
            )));
        }
        if options.check_results {
            for (node, solved) in self.nodes.values().zip(&solution.nodes) {
                let scale = node.x.abs().max(1.0);
                let within = (node.x - solved.x).abs() <= options.tolerance * scale;
                if !within {
                    return Err(BeamError::SolutionMismatch(format!(
                        "node {} is at x = {}, solution has x = {}",
                        node.id, node.x, solved.x
                    )));
                }
            }
        }

        for (node, solved) in self.nodes.values_mut().zip(solution.nodes) {
            node.results = Some(solved.results);
        }
        self.analyzed = true;
        if options.log {
            info!("Recorded results for {} nodes", self.nodes.len());
        }
        Ok(())
    }

    /// Check if every node carries current results
    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    // ========================
    // Serialization
    // ========================

    /// Serialize the beam to JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild a beam from JSON
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn check_length(what: &'static str, expected: usize, actual: usize) -> BeamResult<()> {
    if expected != actual {
        return Err(BeamError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Serialized form of a beam
#[derive(Serialize, Deserialize)]
struct BeamData {
    #[serde(default)]
    section: SectionProperties,
    #[serde(default)]
    geom_transform: GeomTransform,
    nodes: Vec<Node>,
    #[serde(default)]
    ele_loads: Vec<IntervalLoad>,
}

impl From<EulerBeam> for BeamData {
    fn from(beam: EulerBeam) -> Self {
        Self {
            section: beam.section,
            geom_transform: beam.geom_transform,
            nodes: beam.nodes.into_values().collect(),
            ele_loads: beam.ele_loads,
        }
    }
}

impl TryFrom<BeamData> for EulerBeam {
    type Error = BeamError;

    fn try_from(data: BeamData) -> BeamResult<Self> {
        let mut beam = EulerBeam::new()
            .with_section(data.section)
            .with_geom_transform(data.geom_transform);
        for node in data.nodes {
            beam.add_node(node.x, node.fixity, node.point_load)?;
        }
        for ele_load in data.ele_loads {
            for x in [ele_load.x1, ele_load.x2] {
                if !beam.contains(x) {
                    return Err(BeamError::NodeNotFound(x));
                }
            }
            beam.add_dist_load(ele_load.x1, ele_load.x2, ele_load.load)?;
        }
        Ok(beam)
    }
}
