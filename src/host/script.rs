use std::io::Write;

use super::{ColorHost, Selector};
use crate::error::ResicolorError;
use crate::util::score_color::Rgb;

/// Host that writes each operation as a PyMOL command line.
///
/// Loading the output with `@script.pml` (or `load script.pml`) in PyMOL
/// reproduces the coloring.
pub struct PmlScript<W: Write> {
    out: W,
    commands: usize,
}

impl<W: Write> PmlScript<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, commands: 0 }
    }

    /// Number of command lines written so far.
    #[must_use]
    pub fn commands_written(&self) -> usize {
        self.commands
    }

    /// Flush and return the inner writer.
    pub fn into_inner(mut self) -> Result<W, ResicolorError> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(
        &mut self,
        args: std::fmt::Arguments<'_>,
    ) -> Result<(), ResicolorError> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.commands += 1;
        Ok(())
    }
}

impl<W: Write> ColorHost for PmlScript<W> {
    fn set_color(
        &mut self,
        name: &str,
        rgb: Rgb,
    ) -> Result<(), ResicolorError> {
        self.line(format_args!(
            "set_color {name}, [{:.3}, {:.3}, {:.3}]",
            rgb[0], rgb[1], rgb[2]
        ))
    }

    fn color(
        &mut self,
        name: &str,
        selector: &Selector,
    ) -> Result<(), ResicolorError> {
        self.line(format_args!("color {name}, {selector}"))
    }
}
