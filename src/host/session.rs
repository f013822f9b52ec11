use rustc_hash::FxHashMap;

use super::{ColorHost, Selector};
use crate::error::ResicolorError;
use crate::util::score_color::Rgb;

/// In-memory host: a named color registry plus the color name assigned to
/// each selector.
///
/// Assignments store the color *name*, so redefining a color recolors every
/// selector that uses it, as in PyMOL.
#[derive(Debug, Default)]
pub struct ColorSession {
    named: FxHashMap<String, Rgb>,
    assigned: FxHashMap<Selector, String>,
    calls: usize,
}

impl ColorSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// RGB value of a defined color.
    #[must_use]
    pub fn named_color(&self, name: &str) -> Option<Rgb> {
        self.named.get(name).copied()
    }

    /// Color currently shown for a selector.
    #[must_use]
    pub fn color_of(&self, selector: &Selector) -> Option<Rgb> {
        self.assigned
            .get(selector)
            .and_then(|name| self.named_color(name))
    }

    /// Every colored selector with its resolved color, ordered by residue id.
    #[must_use]
    pub fn assignments(&self) -> Vec<(Selector, Rgb)> {
        let mut out: Vec<(Selector, Rgb)> = self
            .assigned
            .keys()
            .filter_map(|sel| self.color_of(sel).map(|rgb| (sel.clone(), rgb)))
            .collect();
        out.sort_by(|a, b| {
            (a.0.residue_id, &a.0.atom_name)
                .cmp(&(b.0.residue_id, &b.0.atom_name))
        });
        out
    }

    /// Number of defined colors.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.named.len()
    }

    /// Total host operations received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ColorHost for ColorSession {
    fn set_color(
        &mut self,
        name: &str,
        rgb: Rgb,
    ) -> Result<(), ResicolorError> {
        self.calls += 1;
        if name.trim().is_empty() {
            return Err(ResicolorError::Host("empty color name".to_owned()));
        }
        let _ = self.named.insert(name.to_owned(), rgb);
        Ok(())
    }

    fn color(
        &mut self,
        name: &str,
        selector: &Selector,
    ) -> Result<(), ResicolorError> {
        self.calls += 1;
        if !self.named.contains_key(name) {
            return Err(ResicolorError::Host(format!(
                "unknown color '{name}'"
            )));
        }
        let _ = self.assigned.insert(selector.clone(), name.to_owned());
        Ok(())
    }
}
