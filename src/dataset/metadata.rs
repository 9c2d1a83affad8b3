//! Column display metadata attached to the sweep table.
//!
//! PyTables stores the unit and description lookups as two table-level string
//! attributes, each holding a YAML mapping of column name to text. Both are
//! written once at dataset-creation time and read-only afterwards.

use std::collections::HashMap;

use hdf5::types::VarLenUnicode;

use super::error::{AnalysisError, Result};

/// Table attribute holding the column name -> physical unit mapping.
pub const UNITS_ATTR: &str = "column_units_as_yaml";

/// Table attribute holding the column name -> description mapping.
pub const DESCRIPTIONS_ATTR: &str = "column_descriptions_as_yaml";

/// Per-column physical units and human-readable descriptions.
#[derive(Debug, Clone, Default)]
pub struct ColumnMetadata {
    units: HashMap<String, String>,
    descriptions: HashMap<String, String>,
}

impl ColumnMetadata {
    pub fn new(units: HashMap<String, String>, descriptions: HashMap<String, String>) -> Self {
        ColumnMetadata {
            units,
            descriptions,
        }
    }

    /// Read both lookups from the sweep table's attributes.
    pub fn read_from(table: &hdf5::Dataset) -> Result<Self> {
        Ok(ColumnMetadata {
            units: read_yaml_attr(table, UNITS_ATTR)?,
            descriptions: read_yaml_attr(table, DESCRIPTIONS_ATTR)?,
        })
    }

    /// The registered unit, if any. A missing or empty unit is not an error.
    pub fn unit(&self, column: &str) -> Option<&str> {
        self.units.get(column).map(String::as_str)
    }

    /// The registered description. Every rendered column must have one.
    pub fn description(&self, column: &str) -> Result<&str> {
        self.descriptions
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| AnalysisError::MissingMetadata {
                column: column.to_string(),
            })
    }

    /// Display title for a column: `"<description> [<unit>]"` when a
    /// non-empty unit is registered, `"<description>"` otherwise.
    pub fn column_title(&self, column: &str) -> Result<String> {
        let description = self.description(column)?;
        match self.unit(column) {
            Some(unit) if !unit.is_empty() => Ok(format!("{} [{}]", description, unit)),
            _ => Ok(description.to_string()),
        }
    }
}

fn read_yaml_attr(
    table: &hdf5::Dataset,
    attribute: &'static str,
) -> Result<HashMap<String, String>> {
    let raw: VarLenUnicode = table.attr(attribute)?.read_scalar()?;
    serde_yaml::from_str(raw.as_str())
        .map_err(|source| AnalysisError::MalformedMetadata { attribute, source })
}
