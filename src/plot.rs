//! Diagram rendering seam

use std::io::Write;

use crate::error::BeamResult;
use crate::model::EulerBeam;
use crate::results::{self, Diagram};

/// Something that can draw an x-y diagram
pub trait DiagramRenderer {
    /// Render one diagram
    fn render(&mut self, diagram: &Diagram) -> BeamResult<()>;
}

/// Writes each diagram as a labelled block of `x,y` rows
pub struct CsvRenderer<W: Write> {
    out: W,
}

impl<W: Write> CsvRenderer<W> {
    /// Create a renderer writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagramRenderer for CsvRenderer<W> {
    fn render(&mut self, diagram: &Diagram) -> BeamResult<()> {
        writeln!(self.out, "# {}", diagram.label)?;
        writeln!(self.out, "x,y")?;
        for (x, y) in diagram.xs.iter().zip(&diagram.ys) {
            writeln!(self.out, "{x},{y}")?;
        }
        Ok(())
    }
}

/// Render the bending moment diagram
pub fn plot_moment(beam: &EulerBeam, renderer: &mut dyn DiagramRenderer) -> BeamResult<Diagram> {
    let diagram = results::moment_diagram(beam)?;
    renderer.render(&diagram)?;
    Ok(diagram)
}

/// Render the shear force diagram
pub fn plot_shear(beam: &EulerBeam, renderer: &mut dyn DiagramRenderer) -> BeamResult<Diagram> {
    let diagram = results::shear_diagram(beam)?;
    renderer.render(&diagram)?;
    Ok(diagram)
}

/// Render the node positions along the beam axis (y = 0)
pub fn plot_beam(beam: &EulerBeam, renderer: &mut dyn DiagramRenderer) -> BeamResult<Diagram> {
    let xs = beam.coordinates();
    let diagram = Diagram {
        label: "Beam".to_string(),
        ys: vec![0.0; xs.len()],
        xs,
    };
    renderer.render(&diagram)?;
    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeamError;

    #[test]
    fn test_csv_renderer_output() {
        let mut renderer = CsvRenderer::new(Vec::new());
        let diagram = Diagram {
            label: "Moment".to_string(),
            xs: vec![0.0, 1.5],
            ys: vec![0.0, -2.25],
        };
        renderer.render(&diagram).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "# Moment\nx,y\n0,0\n1.5,-2.25\n");
    }

    #[test]
    fn test_plot_beam_needs_no_results() {
        let mut beam = EulerBeam::new();
        beam.set_fixity(0.0, 1).unwrap();
        beam.add_vertical_load(2.0, -1.0).unwrap();

        let mut renderer = CsvRenderer::new(Vec::new());
        let diagram = plot_beam(&beam, &mut renderer).unwrap();
        assert_eq!(diagram.xs, vec![0.0, 2.0]);
        assert_eq!(diagram.ys, vec![0.0, 0.0]);
    }

    #[test]
    fn test_plot_moment_requires_analysis() {
        let mut beam = EulerBeam::new();
        beam.add_vertical_load(2.0, -1.0).unwrap();
        let mut renderer = CsvRenderer::new(Vec::new());
        assert!(matches!(
            plot_moment(&beam, &mut renderer),
            Err(BeamError::NotAnalyzed { .. })
        ));
        assert!(renderer.into_inner().is_empty());
    }
}
