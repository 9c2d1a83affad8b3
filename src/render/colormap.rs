//! Sequential colormap registry.
//!
//! Colormaps are loaded from colormaps.json (embedded at compile time) and
//! looked up by name, case-insensitively. Each map is a short list of anchor
//! colors; values are linearly interpolated between anchors, matching the
//! familiar matplotlib sequential maps closely enough for report use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::dataset::{AnalysisError, Result};

/// Embedded colormaps.json content
const COLORMAPS_JSON: &str = include_str!("../../colormaps.json");

/// Default colormap name
pub const DEFAULT_CMAP: &str = "inferno";

/// Global colormap registry, initialized lazily on first access
static REGISTRY: Lazy<HashMap<String, Colormap>> = Lazy::new(|| {
    parse_registry(COLORMAPS_JSON).unwrap_or_else(|e| {
        // The registry is embedded; a parse failure is a packaging defect.
        tracing::error!("failed to load embedded colormaps.json: {e}");
        HashMap::new()
    })
});

#[derive(Debug, Deserialize)]
struct RegistryFile {
    colormaps: Vec<ColormapDefinition>,
}

#[derive(Debug, Deserialize)]
struct ColormapDefinition {
    name: String,
    colors: Vec<String>,
}

/// A named sequential colormap with precomputed RGB anchor stops.
#[derive(Debug, Clone, Default)]
pub struct Colormap {
    name: String,
    stops: Vec<[u8; 3]>,
}

impl Colormap {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a colormap by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Colormap> {
        REGISTRY
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| {
                AnalysisError::Config(format!(
                    "unknown colormap '{}', available: {}",
                    name,
                    available_names().join(", ")
                ))
            })
    }

    /// Interpolate a color at position t in [0, 1].
    ///
    /// t=0 returns the first anchor, t=1 the last; values in between are
    /// linearly interpolated. An empty map yields mid-gray.
    pub fn interpolate(&self, t: f64) -> [u8; 3] {
        if self.stops.is_empty() {
            return [128, 128, 128];
        }
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }

        let t = t.clamp(0.0, 1.0);
        let pos = t * (n - 1) as f64;
        let idx_low = pos.floor() as usize;
        let idx_high = (idx_low + 1).min(n - 1);
        let frac = pos - idx_low as f64;

        let lo = self.stops[idx_low];
        let hi = self.stops[idx_high];
        [
            (lo[0] as f64 * (1.0 - frac) + hi[0] as f64 * frac) as u8,
            (lo[1] as f64 * (1.0 - frac) + hi[1] as f64 * frac) as u8,
            (lo[2] as f64 * (1.0 - frac) + hi[2] as f64 * frac) as u8,
        ]
    }

    /// Color for `value` normalized over the inclusive [vmin, vmax] range.
    ///
    /// A degenerate range (vmin == vmax, or no finite cells at all) maps every
    /// value to the middle of the map. Non-finite values map to the low end.
    pub fn sample(&self, value: f64, vmin: f64, vmax: f64) -> [u8; 3] {
        if !vmin.is_finite() || !vmax.is_finite() || vmin >= vmax {
            return self.interpolate(0.5);
        }
        if !value.is_finite() {
            return self.interpolate(0.0);
        }
        self.interpolate((value - vmin) / (vmax - vmin))
    }
}

/// All registered colormap names, sorted.
pub fn available_names() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.keys().cloned().collect();
    names.sort();
    names
}

fn parse_registry(json: &str) -> serde_json::Result<HashMap<String, Colormap>> {
    let file: RegistryFile = serde_json::from_str(json)?;
    Ok(file
        .colormaps
        .into_iter()
        .map(|def| {
            let stops = def
                .colors
                .iter()
                .filter_map(|hex| parse_hex_color(hex))
                .collect();
            (
                def.name.to_lowercase(),
                Colormap {
                    name: def.name,
                    stops,
                },
            )
        })
        .collect())
}

/// Parse a "#rrggbb" hex color string.
fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colormap_is_registered() {
        let cmap = Colormap::by_name(DEFAULT_CMAP).unwrap();
        assert_eq!(cmap.name(), "inferno");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(Colormap::by_name("Viridis").is_ok());
    }

    #[test]
    fn unknown_colormap_lists_available_names() {
        let err = Colormap::by_name("jet").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("jet"));
        assert!(message.contains("inferno"));
    }

    #[test]
    fn interpolation_hits_the_anchors() {
        let cmap = Colormap::by_name("inferno").unwrap();
        assert_eq!(cmap.interpolate(0.0), [0x00, 0x00, 0x04]);
        assert_eq!(cmap.interpolate(1.0), [0xfc, 0xff, 0xa4]);
    }

    #[test]
    fn degenerate_range_samples_mid_map() {
        let cmap = Colormap::by_name("inferno").unwrap();
        assert_eq!(cmap.sample(3.0, 3.0, 3.0), cmap.interpolate(0.5));
        assert_eq!(
            cmap.sample(3.0, f64::INFINITY, f64::NEG_INFINITY),
            cmap.interpolate(0.5)
        );
    }

    #[test]
    fn parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("#ff0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#ff00"), None);
    }
}
