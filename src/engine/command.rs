//! The host operations a coloring run issues.
//!
//! Every interaction with the visualization host is represented as a
//! [`HostCommand`]. A run first plans its commands, then executes them in
//! order against a [`ColorHost`].

use crate::error::ResicolorError;
use crate::host::{ColorHost, Selector};
use crate::options::ApplyOptions;
use crate::util::score_color::{ResidueColor, Rgb};

/// A single operation against the visualization host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Define a named color.
    SetColor {
        /// Color name, unique per residue.
        name: String,
        /// Color value.
        rgb: Rgb,
    },
    /// Apply a named color to the atoms matching a selector.
    Color {
        /// Previously defined color name.
        name: String,
        /// Target atoms.
        selector: Selector,
    },
}

impl HostCommand {
    /// Run this command against a host.
    pub fn execute<H: ColorHost + ?Sized>(
        &self,
        host: &mut H,
    ) -> Result<(), ResicolorError> {
        match self {
            Self::SetColor { name, rgb } => host.set_color(name, *rgb),
            Self::Color { name, selector } => host.color(name, selector),
        }
    }
}

/// Two commands per residue: define its color, then apply it to the
/// residue's `marker_atom`.
#[must_use]
pub fn plan_commands(
    colors: &[ResidueColor],
    marker_atom: &str,
    opts: &ApplyOptions,
) -> Vec<HostCommand> {
    colors
        .iter()
        .flat_map(|c| {
            let name = opts.color_name(c.residue_id);
            [
                HostCommand::SetColor {
                    name: name.clone(),
                    rgb: c.rgb,
                },
                HostCommand::Color {
                    name,
                    selector: Selector::new(c.residue_id, marker_atom),
                },
            ]
        })
        .collect()
}
