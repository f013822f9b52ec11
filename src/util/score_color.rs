//! Per-residue value → RGB color mapping.
//!
//! Values are min-max normalized within the current structure and sampled
//! from a [`ColorRamp`]: red (lowest) → white (midpoint) → blue (highest).

use std::collections::BTreeMap;

use crate::parser::ResidueValues;

/// RGB triple with every channel in [0, 1].
pub type Rgb = [f32; 3];

/// Normalized values keyed by residue sequence number.
pub type NormalizedValues = BTreeMap<i32, f64>;

/// Normalized position assigned to every residue when all raw values are
/// equal.
pub const DEGENERATE_MIDPOINT: f64 = 0.5;

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first color (lowest value), `t = 1` maps to the last
/// (highest value).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Rgb>,
}

impl ColorRamp {
    /// Interpolate the ramp at position `t` in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let n = self.stops.len() - 1;
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

impl Default for ColorRamp {
    /// Red → White → Blue
    fn default() -> Self {
        Self {
            stops: vec![
                [1.0, 0.0, 0.0], // red (low)
                [1.0, 1.0, 1.0], // white (mid)
                [0.0, 0.0, 1.0], // blue (high)
            ],
        }
    }
}

/// Rescale raw values to [0, 1] via `(v - min) / (max - min)`.
///
/// When every value is identical the range is zero and each residue gets
/// [`DEGENERATE_MIDPOINT`].
#[must_use]
pub fn normalize(values: &ResidueValues) -> NormalizedValues {
    let Some((min, max)) = value_range(values) else {
        return NormalizedValues::new();
    };
    let range = max - min;

    values
        .iter()
        .map(|(&residue_id, &value)| {
            let t = if range == 0.0 {
                DEGENERATE_MIDPOINT
            } else {
                (value - min) / range
            };
            (residue_id, t)
        })
        .collect()
}

/// Minimum and maximum raw value, or `None` for an empty mapping.
#[must_use]
pub fn value_range(values: &ResidueValues) -> Option<(f64, f64)> {
    values.values().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// One planned residue coloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueColor {
    /// Residue sequence number.
    pub residue_id: i32,
    /// Normalized value in [0, 1].
    pub normalized: f64,
    /// Color sampled from the ramp.
    pub rgb: Rgb,
}

/// Normalize raw values and sample a color for each, ordered by residue id.
#[must_use]
pub fn residue_colors(
    values: &ResidueValues,
    ramp: &ColorRamp,
) -> Vec<ResidueColor> {
    normalize(values)
        .into_iter()
        .map(|(residue_id, normalized)| ResidueColor {
            residue_id,
            normalized,
            rgb: ramp.sample(normalized as f32),
        })
        .collect()
}
