//! Visualization and modal analysis of the parametric model of buckling and
//! free vibration in prismatic shell structures, as computed by the
//! fsm_eigenvalue sweep.
//!
//! Module organization:
//! - `dataset`: filtered sweep-table access, column metadata, grid reconstruction
//! - `families`: quantity families and their panel layouts
//! - `render`: composite figure rendering and PDF report output
//! - `pipeline`: report assembly driving all of the above
//! - `config`: plot styling threaded explicitly through the renderer

pub mod config;
pub mod dataset;
pub mod families;
pub mod pipeline;
pub mod render;

pub use config::PlotConfig;
pub use dataset::{AnalysisError, FilterCriteria, Result};
pub use pipeline::analyze_model;
