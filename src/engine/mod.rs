//! The coloring pipeline: parse → normalize → map → apply.
//!
//! [`color_by_value`] is the single entry point most callers need. It reads
//! the marker-atom values of a PDB file, maps them onto the red → white →
//! blue ramp and hands one named color per residue to the host. A file
//! without usable values yields [`RunOutcome::NoData`] and the host is never
//! called.

pub mod command;

use std::path::Path;

pub use command::{plan_commands, HostCommand};

use crate::error::ResicolorError;
use crate::host::ColorHost;
use crate::options::{ApplyOptions, Options};
use crate::parser::{parse_file, ResidueValues};
use crate::util::score_color::{
    residue_colors, value_range, ColorRamp, ResidueColor,
};

/// What a run did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No marker-atom record carried a usable value; nothing was applied.
    NoData,
    /// Colors were applied.
    Colored(RunSummary),
}

/// Details of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Smallest raw value (maps to red).
    pub min: f64,
    /// Largest raw value (maps to blue).
    pub max: f64,
    /// Applied colors, ordered by residue id.
    pub colors: Vec<ResidueColor>,
}

impl RunSummary {
    /// Number of residues colored.
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.colors.len()
    }
}

/// Color the marker atoms of `path` by their per-residue value using the
/// default options.
pub fn color_by_value<H: ColorHost + ?Sized>(
    path: &Path,
    host: &mut H,
) -> Result<RunOutcome, ResicolorError> {
    color_by_value_with(path, host, &Options::default())
}

/// Color the marker atoms of `path` by their per-residue value.
///
/// A missing or unreadable file is an error; malformed lines are skipped.
pub fn color_by_value_with<H: ColorHost + ?Sized>(
    path: &Path,
    host: &mut H,
    opts: &Options,
) -> Result<RunOutcome, ResicolorError> {
    log::info!("reading per-residue values from {}", path.display());
    let values = parse_file(path, &opts.parse)?;
    color_values(&values, host, opts)
}

/// Color already-parsed values.
pub fn color_values<H: ColorHost + ?Sized>(
    values: &ResidueValues,
    host: &mut H,
    opts: &Options,
) -> Result<RunOutcome, ResicolorError> {
    let marker = &opts.parse.marker_atom;
    let Some((min, max)) = value_range(values) else {
        log::warn!("No {marker} atoms with valid values found.");
        return Ok(RunOutcome::NoData);
    };
    if min == max {
        log::debug!("all values equal {min}; coloring every residue white");
    }

    let colors = residue_colors(values, &ColorRamp::default());
    apply_colors(host, &colors, marker, &opts.apply)?;

    log::info!(
        "colored {} residues (value range {min} .. {max})",
        colors.len()
    );
    Ok(RunOutcome::Colored(RunSummary { min, max, colors }))
}

/// Define and apply one color per residue on `marker_atom`.
pub fn apply_colors<H: ColorHost + ?Sized>(
    host: &mut H,
    colors: &[ResidueColor],
    marker_atom: &str,
    opts: &ApplyOptions,
) -> Result<(), ResicolorError> {
    for cmd in plan_commands(colors, marker_atom, opts) {
        if let HostCommand::Color { name, selector } = &cmd {
            log::debug!("{name} -> {selector}");
        }
        cmd.execute(&mut *host)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ColorSession, PmlScript, Selector};
    use crate::parser::parse_reader;

    fn atom_line(name: &str, resi: i32, value: &str) -> String {
        format!(
            "ATOM  {:>5} {:<4} GLY A{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6}{:>6}           C",
            resi, name, resi, 1.0, 2.0, 3.0, "1.00", value
        )
    }

    fn run(text: &str, session: &mut ColorSession) -> RunOutcome {
        let opts = Options::default();
        let values = parse_reader(text.as_bytes(), &opts.parse).unwrap();
        color_values(&values, session, &opts).unwrap()
    }

    fn three_residues() -> String {
        [
            atom_line("N", 10, "9.00"),
            atom_line("CA", 10, "1.0"),
            atom_line("CA", 20, "2.0"),
            atom_line("CA", 30, "3.0"),
        ]
        .join("\n")
    }

    #[test]
    fn three_residue_end_to_end() {
        let mut session = ColorSession::new();
        let RunOutcome::Colored(summary) = run(&three_residues(), &mut session)
        else {
            panic!("expected colors");
        };
        assert_eq!(summary.residue_count(), 3);
        assert_eq!((summary.min, summary.max), (1.0, 3.0));

        let normalized: Vec<(i32, f64)> = summary
            .colors
            .iter()
            .map(|c| (c.residue_id, c.normalized))
            .collect();
        assert_eq!(normalized, vec![(10, 0.0), (20, 0.5), (30, 1.0)]);

        assert_eq!(
            session.assignments(),
            vec![
                (Selector::new(10, "CA"), [1.0, 0.0, 0.0]),
                (Selector::new(20, "CA"), [1.0, 1.0, 1.0]),
                (Selector::new(30, "CA"), [0.0, 0.0, 1.0]),
            ]
        );
        assert_eq!(session.named_color("color_20"), Some([1.0, 1.0, 1.0]));
        assert_eq!(session.calls(), 6);
    }

    #[test]
    fn no_marker_atoms_makes_no_host_calls() {
        let mut session = ColorSession::new();
        let text = ["HEADER    EMPTY".to_owned(), atom_line("N", 1, "1.0")]
            .join("\n");
        assert_eq!(run(&text, &mut session), RunOutcome::NoData);
        assert_eq!(session.calls(), 0);
    }

    #[test]
    fn all_malformed_is_no_data() {
        let mut session = ColorSession::new();
        let text = [atom_line("CA", 1, "n/a"), atom_line("CA", 2, "----")]
            .join("\n");
        assert_eq!(run(&text, &mut session), RunOutcome::NoData);
        assert_eq!(session.calls(), 0);
    }

    #[test]
    fn malformed_line_is_excluded() {
        let mut session = ColorSession::new();
        let text = [
            atom_line("CA", 1, "0.0"),
            atom_line("CA", 2, "high"),
            atom_line("CA", 3, "4.0"),
        ]
        .join("\n");
        let RunOutcome::Colored(summary) = run(&text, &mut session) else {
            panic!("expected colors");
        };
        let ids: Vec<i32> =
            summary.colors.iter().map(|c| c.residue_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(session.color_of(&Selector::new(2, "CA")), None);
    }

    #[test]
    fn equal_values_color_everything_white() {
        let mut session = ColorSession::new();
        let text = [atom_line("CA", 1, "2.5"), atom_line("CA", 2, "2.5")]
            .join("\n");
        let RunOutcome::Colored(summary) = run(&text, &mut session) else {
            panic!("expected colors");
        };
        assert!(summary.colors.iter().all(|c| c.normalized == 0.5));
        assert!(session
            .assignments()
            .iter()
            .all(|(_, rgb)| *rgb == [1.0, 1.0, 1.0]));
    }

    #[test]
    fn rerun_on_fresh_session_is_identical() {
        let mut first = ColorSession::new();
        let mut second = ColorSession::new();
        let a = run(&three_residues(), &mut first);
        let b = run(&three_residues(), &mut second);
        assert_eq!(a, b);
        assert_eq!(first.assignments(), second.assignments());
    }

    #[test]
    fn rerun_on_same_session_reapplies_same_colors() {
        let mut session = ColorSession::new();
        let _ = run(&three_residues(), &mut session);
        let before = session.assignments();
        let _ = run(&three_residues(), &mut session);
        assert_eq!(session.assignments(), before);
        assert_eq!(session.color_count(), 3);
    }

    #[test]
    fn script_host_receives_commands_in_residue_order() {
        let opts = Options::default();
        let values =
            parse_reader(three_residues().as_bytes(), &opts.parse).unwrap();
        let mut script = PmlScript::new(Vec::new());
        let _ = color_values(&values, &mut script, &opts).unwrap();

        let text = String::from_utf8(script.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "set_color color_10, [1.000, 0.000, 0.000]");
        assert_eq!(lines[1], "color color_10, resi 10 and name CA");
        assert_eq!(lines[5], "color color_30, resi 30 and name CA");
    }

    #[test]
    fn file_round_trip_and_missing_file() {
        let path = std::env::temp_dir()
            .join(format!("resicolor-engine-{}.pdb", std::process::id()));
        std::fs::write(&path, three_residues()).unwrap();
        let mut session = ColorSession::new();
        let outcome = color_by_value(&path, &mut session);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(outcome, Ok(RunOutcome::Colored(_))));
        assert_eq!(session.color_count(), 3);

        let mut untouched = ColorSession::new();
        let err = color_by_value(&path, &mut untouched).unwrap_err();
        assert!(matches!(err, ResicolorError::Io(_)));
        assert_eq!(untouched.calls(), 0);
    }
}
