//! Composite figure rendering and PDF report output.
//!
//! Structure:
//! - `colormap.rs`: named sequential colormaps (embedded registry)
//! - `composite.rs`: 2x2 composite figure for one quantity family
//! - `report.rs`: multi-page PDF assembly

pub mod colormap;
pub mod composite;
pub mod report;

pub use colormap::Colormap;
pub use composite::{render_composite, CompositeGrids, PanelGrid};
pub use report::PdfReport;
