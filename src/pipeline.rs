//! Report generation pipeline.
//!
//! The pipeline:
//! 1. Loads the filtered modal composites and column metadata (one pass)
//! 2. Detects the (a, t_b) grid shape once, shared by every family
//! 3. For each family: reshapes its variant columns, renders the composite
//!    figure, appends it as one PDF page
//! 4. Saves the report

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::PlotConfig;
use crate::dataset::{load_modal_composites, AnalysisError, FilterCriteria, GridShape, Result};
use crate::families::QUANTITY_FAMILIES;
use crate::render::composite::{render_composite, CompositeGrids, PanelGrid};
use crate::render::report::PdfReport;

/// Generate the modal analysis report for one model file.
///
/// Fully sequential; errors from any stage abort the run without the report
/// being written.
pub fn analyze_model(
    model_file: &Path,
    report_file: &Path,
    criteria: &FilterCriteria,
    config: &PlotConfig,
) -> Result<()> {
    let (composites, metadata) = load_modal_composites(model_file, criteria)?;
    if composites.is_empty() {
        return Err(AnalysisError::Config(
            "no sweep rows match the filter criteria".to_string(),
        ));
    }

    let a = composites.column("a")?;
    let t_b = composites.column("t_b")?;
    let shape = GridShape::detect(&a, &t_b)?;
    info!(n_a = shape.n_a, n_t = shape.n_t, "reconstructed parameter grid");

    let mut report = PdfReport::create(
        report_file,
        "FSM modal analysis",
        config.width,
        config.height,
        config.dpi,
    );

    for family in &QUANTITY_FAMILIES {
        info!(base_key = family.base_key, "plotting modal composite");
        let start = Instant::now();

        let panels = family
            .panels
            .iter()
            .map(|&panel| {
                let column = composites.column(&family.column_key(panel))?;
                Ok(PanelGrid {
                    panel,
                    grid: shape.reshape(&column)?,
                })
            })
            .collect::<Result<Vec<PanelGrid>>>()?;
        let grids = CompositeGrids {
            a: shape.reshape(&a)?,
            t_b: shape.reshape(&t_b)?,
            panels,
        };

        let figure = render_composite(family, &grids, &metadata, config)?;
        report.append_page(figure, config.width, config.height)?;

        info!(
            base_key = family.base_key,
            elapsed_s = start.elapsed().as_secs_f64(),
            "page completed"
        );
    }

    report.save()?;
    info!(report_file = %report_file.display(), "report written");
    Ok(())
}
