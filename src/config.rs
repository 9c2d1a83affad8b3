//! Plot styling configuration.
//!
//! Figure geometry and the colormap are an explicit value threaded into the
//! renderer rather than process-wide state, so nothing here is shared between
//! runs.

use crate::dataset::Result;
use crate::render::colormap::Colormap;

/// Figure and page styling for one report run.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Figure width in pixels (11.7 in at `dpi`)
    pub width: u32,
    /// Figure height in pixels (8.3 in at `dpi`)
    pub height: u32,
    /// Raster resolution used when sizing the PDF page
    pub dpi: f64,
    /// Left edge of the panel region, as a fraction of figure width
    pub margin_left: f64,
    /// Right edge of the panel region
    pub margin_right: f64,
    /// Bottom edge of the panel region, as a fraction of figure height
    pub margin_bottom: f64,
    /// Top edge of the panel region (space above is the suptitle band)
    pub margin_top: f64,
    /// Colormap for the false-color panels
    pub colormap: Colormap,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 1170,
            height: 830,
            dpi: 100.0,
            margin_left: 0.05,
            margin_right: 0.99,
            margin_bottom: 0.06,
            margin_top: 0.91,
            colormap: Colormap::by_name(crate::render::colormap::DEFAULT_CMAP)
                .unwrap_or_default(),
        }
    }
}

impl PlotConfig {
    /// Default configuration with a named colormap.
    pub fn with_colormap(name: &str) -> Result<Self> {
        Ok(PlotConfig {
            colormap: Colormap::by_name(name)?,
            ..PlotConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::AnalysisError;

    #[test]
    fn default_figure_matches_a4_landscape_at_100_dpi() {
        let config = PlotConfig::default();
        assert_eq!((config.width, config.height), (1170, 830));
        assert_eq!(config.colormap.name(), "inferno");
    }

    #[test]
    fn unknown_colormap_is_a_config_error() {
        let err = PlotConfig::with_colormap("no_such_map").unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }
}
