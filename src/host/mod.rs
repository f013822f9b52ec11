//! Visualization host interface.
//!
//! The pipeline only needs two operations from a host: define a named color
//! and apply a named color to the atoms matched by a selector. Hosts
//! implement [`ColorHost`]; the crate ships a PyMOL script writer
//! ([`PmlScript`]) and an in-memory session ([`ColorSession`]).

mod script;
mod session;

use std::fmt;

pub use script::PmlScript;
pub use session::ColorSession;

use crate::error::ResicolorError;
use crate::util::score_color::Rgb;

/// Atoms of one residue with a given atom name, e.g. `resi 10 and name CA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Residue sequence number.
    pub residue_id: i32,
    /// Atom name within the residue.
    pub atom_name: String,
}

impl Selector {
    /// Select `atom_name` in residue `residue_id`.
    #[must_use]
    pub fn new(residue_id: i32, atom_name: &str) -> Self {
        Self {
            residue_id,
            atom_name: atom_name.to_owned(),
        }
    }
}

impl fmt::Display for Selector {
    /// PyMOL selection syntax. Negative residue ids are backslash-escaped so
    /// they are not read as a range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.residue_id < 0 {
            write!(
                f,
                "resi \\{} and name {}",
                self.residue_id, self.atom_name
            )
        } else {
            write!(f, "resi {} and name {}", self.residue_id, self.atom_name)
        }
    }
}

/// The coloring operations a visualization host must provide.
pub trait ColorHost {
    /// Define (or redefine) a named color.
    fn set_color(
        &mut self,
        name: &str,
        rgb: Rgb,
    ) -> Result<(), ResicolorError>;

    /// Apply a previously defined color to every atom matching `selector`.
    fn color(
        &mut self,
        name: &str,
        selector: &Selector,
    ) -> Result<(), ResicolorError>;
}
