//! Quantity families and their panel layouts.
//!
//! Each report page shows one family: a base dependent variable plus the
//! variants rendered alongside it. Which panels a family gets is data here,
//! not name-string branching, so adding or removing a family is a table edit.

/// One panel of the 2x2 composite figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// False-color map of the base quantity
    Direct,
    /// 3D wireframe of the base quantity
    Overview3d,
    /// False-color map of the `_approx` variant
    Approximation,
    /// False-color map of the `_rel_err` variant
    RelativeError,
}

impl Panel {
    /// Column-name suffix appended to the family base key.
    pub fn key_suffix(self) -> &'static str {
        match self {
            Panel::Direct | Panel::Overview3d => "",
            Panel::Approximation => "_approx",
            Panel::RelativeError => "_rel_err",
        }
    }

    /// Fixed panel title.
    pub fn description(self) -> &'static str {
        match self {
            Panel::Direct => "direct method",
            Panel::Overview3d => "direct method (3D overview)",
            Panel::Approximation => "approximation via physical dualism",
            Panel::RelativeError => "relative approximation error",
        }
    }
}

/// A base quantity plus the variants rendered alongside it.
#[derive(Debug, Clone, Copy)]
pub struct QuantityFamily {
    /// Dataset column name of the base quantity
    pub base_key: &'static str,
    /// Panels to render, in 2x2 slot order
    pub panels: &'static [Panel],
    /// Viewing azimuth (degrees) for the 3D overview; `None` keeps the
    /// default view
    pub overview_azimuth_deg: Option<f64>,
}

impl QuantityFamily {
    /// Dataset column backing one panel of this family.
    pub fn column_key(&self, panel: Panel) -> String {
        format!("{}{}", self.base_key, panel.key_suffix())
    }
}

const ALL_PANELS: [Panel; 4] = [
    Panel::Direct,
    Panel::Overview3d,
    Panel::Approximation,
    Panel::RelativeError,
];

const MODE_PANELS: [Panel; 2] = [Panel::Direct, Panel::Overview3d];

/// Report families, in fixed page order.
///
/// The dominant-mode family has no approximation counterpart in the dataset,
/// so it renders only the direct panels. Its overview is rotated to make mode
/// crossings legible.
pub const QUANTITY_FAMILIES: [QuantityFamily; 3] = [
    QuantityFamily {
        base_key: "m_dominant",
        panels: &MODE_PANELS,
        overview_azimuth_deg: Some(105.0),
    },
    QuantityFamily {
        base_key: "omega",
        panels: &ALL_PANELS,
        overview_azimuth_deg: None,
    },
    QuantityFamily {
        base_key: "sigma_cr",
        panels: &ALL_PANELS,
        overview_azimuth_deg: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_in_fixed_page_order() {
        let keys: Vec<&str> = QUANTITY_FAMILIES.iter().map(|f| f.base_key).collect();
        assert_eq!(keys, vec!["m_dominant", "omega", "sigma_cr"]);
    }

    #[test]
    fn dominant_mode_family_skips_approximation_panels() {
        let family = &QUANTITY_FAMILIES[0];
        assert_eq!(family.panels, &[Panel::Direct, Panel::Overview3d]);
        assert!(family.overview_azimuth_deg.is_some());
    }

    #[test]
    fn variant_panels_map_to_suffixed_columns() {
        let family = &QUANTITY_FAMILIES[1];
        assert_eq!(family.column_key(Panel::Direct), "omega");
        assert_eq!(family.column_key(Panel::Overview3d), "omega");
        assert_eq!(family.column_key(Panel::Approximation), "omega_approx");
        assert_eq!(family.column_key(Panel::RelativeError), "omega_rel_err");
    }
}
