//! Composite figure rendering for one quantity family.
//!
//! Each family gets a 2x2 panel figure: false-color maps of the base quantity
//! and its variants, plus a 3D wireframe overview. Rendering targets an
//! in-memory RGB buffer; the caller owns the buffer and decides where it goes
//! (normally onto a PDF page), so no drawing state outlives the call.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::PlotConfig;
use crate::dataset::{AnalysisError, ColumnMetadata, Grid, Result};
use crate::families::{Panel, QuantityFamily};

/// Elevation of the 3D overview, matching a 30 degree viewing angle.
const OVERVIEW_ELEVATION_DEG: f64 = 30.0;

/// Default 3D overview azimuth when the family does not override it.
const OVERVIEW_AZIMUTH_DEG: f64 = 30.0;

/// Maximum number of wireframe lines along the `t_b` axis. The `a` axis is
/// kept at full resolution.
const MAX_WIREFRAME_LINES: usize = 10;

/// Width in pixels reserved for a panel's value-scale colorbar.
const COLORBAR_WIDTH: u32 = 70;

/// Reshaped inputs for one family page, all sharing one grid shape.
#[derive(Debug, Clone)]
pub struct CompositeGrids {
    /// Strip length at each grid cell
    pub a: Grid,
    /// Base strip thickness at each grid cell
    pub t_b: Grid,
    /// Dependent-variable grids, in panel slot order
    pub panels: Vec<PanelGrid>,
}

/// One dependent-variable grid paired with the panel that displays it.
#[derive(Debug, Clone)]
pub struct PanelGrid {
    pub panel: Panel,
    pub grid: Grid,
}

/// Render the 2x2 composite figure for one family into an RGB8 buffer of
/// `config.width * config.height * 3` bytes.
pub fn render_composite(
    family: &QuantityFamily,
    grids: &CompositeGrids,
    metadata: &ColumnMetadata,
    config: &PlotConfig,
) -> Result<Vec<u8>> {
    let suptitle = metadata.column_title(family.base_key)?;
    let x_label = metadata.column_title("a")?;
    let y_label = metadata.column_title("t_b")?;

    let (width, height) = (config.width, config.height);
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        // Suptitle sits in the band above the panel region.
        let title_style = TextStyle::from(("sans-serif", 30).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw_text(&suptitle, &title_style, ((width / 2) as i32, 10))
            .map_err(render_error)?;

        let inner = root.margin(
            ((1.0 - config.margin_top) * height as f64) as i32,
            (config.margin_bottom * height as f64) as i32,
            (config.margin_left * width as f64) as i32,
            ((1.0 - config.margin_right) * width as f64) as i32,
        );

        let slots = inner.split_evenly((2, 2));
        for (slot, panel_grid) in slots.iter().zip(&grids.panels) {
            let title = panel_grid.panel.description();
            match panel_grid.panel {
                Panel::Overview3d => draw_wireframe(
                    slot,
                    title,
                    &grids.a,
                    &grids.t_b,
                    &panel_grid.grid,
                    family.overview_azimuth_deg.unwrap_or(OVERVIEW_AZIMUTH_DEG),
                )?,
                _ => draw_heatmap(
                    slot,
                    title,
                    &grids.a,
                    &grids.t_b,
                    &panel_grid.grid,
                    &x_label,
                    &y_label,
                    config,
                )?,
            }
        }

        root.present().map_err(render_error)?;
    }
    Ok(buffer)
}

/// False-color map over the (a, t_b) extent with a value-scale colorbar.
///
/// Cells are uniform, covering the extent edge to edge, so the panel reads
/// like an image of the reshaped grid rather than a scatter of samples.
#[allow(clippy::too_many_arguments)]
fn draw_heatmap(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    title: &str,
    a: &Grid,
    t_b: &Grid,
    z: &Grid,
    x_label: &str,
    y_label: &str,
    config: &PlotConfig,
) -> Result<()> {
    let (panel_width, _) = area.dim_in_pixel();
    let (plot_area, bar_area) =
        area.split_horizontally(panel_width.saturating_sub(COLORBAR_WIDTH) as i32);

    let (x_min, x_max) = padded(a.value_range());
    let (y_min, y_max) = padded(t_b.value_range());
    let (v_min, v_max) = z.value_range();

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(title, ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(38)
        .y_label_area_size(48)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 12))
        .label_style(("sans-serif", 10))
        .draw()
        .map_err(render_error)?;

    let (n_a, n_t) = (z.n_a(), z.n_t());
    if n_a > 0 && n_t > 0 {
        let dx = (x_max - x_min) / n_a as f64;
        let dy = (y_max - y_min) / n_t as f64;
        let cmap = &config.colormap;
        chart
            .draw_series((0..n_a).flat_map(|i| (0..n_t).map(move |j| (i, j))).map(
                |(i, j)| {
                    let [r, g, b] = cmap.sample(z.at(i, j), v_min, v_max);
                    let x0 = x_min + dx * i as f64;
                    let y0 = y_min + dy * j as f64;
                    Rectangle::new(
                        [(x0, y0), (x0 + dx, y0 + dy)],
                        RGBColor(r, g, b).filled(),
                    )
                },
            ))
            .map_err(render_error)?;
    }

    draw_colorbar(&bar_area, v_min, v_max, config)
}

/// Vertical value-scale legend next to a heatmap panel.
fn draw_colorbar(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    v_min: f64,
    v_max: f64,
    config: &PlotConfig,
) -> Result<()> {
    let (lo, hi) = padded((v_min, v_max));

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Right, 44)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .label_style(("sans-serif", 9))
        .draw()
        .map_err(render_error)?;

    let steps = 64;
    let dv = (hi - lo) / steps as f64;
    let cmap = &config.colormap;
    chart
        .draw_series((0..steps).map(|k| {
            let v0 = lo + dv * k as f64;
            let [r, g, b] = cmap.sample(v0 + dv / 2.0, v_min, v_max);
            Rectangle::new([(0.0, v0), (1.0, v0 + dv)], RGBColor(r, g, b).filled())
        }))
        .map_err(render_error)?;

    Ok(())
}

/// 3D wireframe of the base quantity for qualitative overview.
///
/// Thinned to at most [`MAX_WIREFRAME_LINES`] lines along `t_b`, full
/// resolution along `a`.
fn draw_wireframe(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    title: &str,
    a: &Grid,
    t_b: &Grid,
    z: &Grid,
    azimuth_deg: f64,
) -> Result<()> {
    let (x_min, x_max) = padded(a.value_range());
    let (y_min, y_max) = padded(t_b.value_range());
    let (v_min, v_max) = padded(z.value_range());

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 16))
        .margin(8)
        .build_cartesian_3d(x_min..x_max, v_min..v_max, y_min..y_max)
        .map_err(render_error)?;

    chart.with_projection(|mut pb| {
        pb.pitch = OVERVIEW_ELEVATION_DEG.to_radians();
        pb.yaw = azimuth_deg.to_radians();
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .label_style(("sans-serif", 9))
        .draw()
        .map_err(render_error)?;

    let (n_a, n_t) = (z.n_a(), z.n_t());
    if n_a == 0 || n_t == 0 {
        return Ok(());
    }
    let stride = n_t.div_ceil(MAX_WIREFRAME_LINES).max(1);
    for j in (0..n_t).step_by(stride) {
        chart
            .draw_series(LineSeries::new(
                (0..n_a).map(|i| (a.at(i, j), z.at(i, j), t_b.at(i, j))),
                &BLUE,
            ))
            .map_err(render_error)?;
    }

    Ok(())
}

/// Widen a degenerate or non-finite range so plotters gets a drawable axis.
fn padded((min, max): (f64, f64)) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn render_error(e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Render(e.to_string())
}
