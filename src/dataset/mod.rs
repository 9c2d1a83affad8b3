//! Access to the precomputed parameter-sweep dataset.
//!
//! Structure:
//! - `reader.rs`: filtered single-pass reads of the sweep table
//! - `metadata.rs`: per-column units and descriptions
//! - `grid.rs`: rectangular grid reconstruction from flat rows
//! - `error.rs`: error types

pub mod error;
pub mod grid;
pub mod metadata;
pub mod reader;

pub use error::{AnalysisError, Result};
pub use grid::{Grid, GridShape};
pub use metadata::ColumnMetadata;
pub use reader::{load_modal_composites, FilterCriteria, ModalComposites, ModalCompositeRow};
