//! Beam mesh builder CLI
//!
//! Reads a JSON beam description and prints the resulting mesh as JSON.
//! Usage: `beam-mesh <beam.json>` (set `RUST_LOG=debug` to trace node creation)

use std::fs;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use beam_builder::prelude::*;

#[derive(Debug, Deserialize)]
struct BeamInput {
    #[serde(default)]
    section: Option<SectionProperties>,
    #[serde(default)]
    geom_transform: GeomTransform,
    /// Initial mesh coordinates
    #[serde(default)]
    nodes: Vec<f64>,
    /// Fixity per initial mesh node, free when omitted
    #[serde(default)]
    fixities: Option<Vec<FixityInput>>,
    #[serde(default)]
    supports: Vec<SupportData>,
    #[serde(default)]
    point_loads: Vec<PointLoadData>,
    #[serde(default)]
    dist_loads: Vec<DistLoadData>,
}

#[derive(Debug, Deserialize)]
struct SupportData {
    x: f64,
    fixity: FixityInput,
}

#[derive(Debug, Deserialize)]
struct PointLoadData {
    x: f64,
    load: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct DistLoadData {
    x1: f64,
    x2: f64,
    load: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct MeshOutput {
    nodes: Vec<NodeOutput>,
    elements: Vec<Element>,
    element_loads: Vec<ElementLoad>,
    length: f64,
}

#[derive(Debug, Serialize)]
struct NodeOutput {
    id: usize,
    x: f64,
    fixity: [u8; 3],
    point_load: [f64; 3],
}

fn dist_load(values: &[f64]) -> Result<DistLoad> {
    match *values {
        [qx, qy] => Ok(DistLoad::new(qx, qy, 0.0)),
        [qx, qy, m] => Ok(DistLoad::new(qx, qy, m)),
        _ => bail!(
            "distributed load must have 2 or 3 components, got {}",
            values.len()
        ),
    }
}

fn build_beam(input: BeamInput) -> Result<EulerBeam> {
    let mut beam = EulerBeam::with_nodes(&input.nodes, input.fixities.as_deref())
        .context("invalid initial mesh")?
        .with_geom_transform(input.geom_transform);
    if let Some(section) = input.section {
        beam.set_section(section);
    }

    for support in input.supports {
        beam.set_fixity(support.x, support.fixity)
            .with_context(|| format!("invalid support at x = {}", support.x))?;
    }
    for load in input.point_loads {
        beam.add_point_load(load.x, load.load)
            .with_context(|| format!("invalid point load at x = {}", load.x))?;
    }
    for load in input.dist_loads {
        let intensity = dist_load(&load.load)?;
        beam.add_dist_load(load.x1, load.x2, intensity)
            .with_context(|| format!("invalid distributed load {}..{}", load.x1, load.x2))?;
    }
    Ok(beam)
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: beam-mesh <beam.json>");
    };
    let text = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let input: BeamInput =
        serde_json::from_str(&text).with_context(|| format!("failed to parse {path}"))?;

    let beam = build_beam(input)?;
    log::info!(
        "Built mesh with {} nodes and {} distributed loads",
        beam.node_count(),
        beam.ele_loads().len()
    );

    let output = MeshOutput {
        nodes: beam
            .nodes()
            .map(|node| NodeOutput {
                id: node.id(),
                x: node.x,
                fixity: node.fixity.as_flags(),
                point_load: node.point_load.as_array(),
            })
            .collect(),
        elements: beam.elements(),
        element_loads: beam.element_loads(),
        length: beam.length(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
