//! Fixed-column extraction of per-residue values from PDB coordinate files.
//!
//! Only the three fields needed for coloring are read from each atom
//! record:
//!
//! | Columns (1-indexed) | Field                                   |
//! |---------------------|-----------------------------------------|
//! | 13-16               | atom name                               |
//! | 23-26               | residue sequence number                 |
//! | 63-66               | per-residue value (B-factor slot)       |
//!
//! Lines are decided one at a time by [`parse_line`]; a selected line whose
//! numeric fields do not parse is reported as [`LineOutcome::Malformed`] and
//! skipped, never turned into an error.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ResicolorError;
use crate::options::ParseOptions;

/// Raw values keyed by residue sequence number.
pub type ResidueValues = BTreeMap<i32, f64>;

const ATOM_NAME_COLUMNS: (usize, usize) = (13, 16);
const RESIDUE_ID_COLUMNS: (usize, usize) = (23, 26);
const VALUE_COLUMNS: (usize, usize) = (63, 66);

/// Numeric field of a selected record that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedField {
    /// Residue sequence number (columns 23-26).
    ResidueId,
    /// Per-residue value (columns 63-66).
    Value,
}

/// Per-line parse decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineOutcome {
    /// Marker-atom record with a usable residue id and value.
    Value {
        /// Residue sequence number.
        residue_id: i32,
        /// Raw per-residue value.
        value: f64,
    },
    /// Not an accepted record type, or not the marker atom.
    Ignored,
    /// Marker-atom record whose numeric field did not parse.
    Malformed(MalformedField),
}

/// Slice 1-indexed inclusive columns out of a line, truncating at the end of
/// the line. Returns `None` when the range does not fall on character
/// boundaries.
fn column(line: &str, (first, last): (usize, usize)) -> Option<&str> {
    let start = (first - 1).min(line.len());
    let end = last.min(line.len());
    line.get(start..end)
}

/// Decide what a single line contributes.
#[must_use]
pub fn parse_line(line: &str, opts: &ParseOptions) -> LineOutcome {
    if !opts.accepts_record(line) {
        return LineOutcome::Ignored;
    }
    let is_marker = column(line, ATOM_NAME_COLUMNS)
        .is_some_and(|name| name.trim() == opts.marker_atom);
    if !is_marker {
        return LineOutcome::Ignored;
    }

    let Some(residue_id) = column(line, RESIDUE_ID_COLUMNS)
        .and_then(|field| field.trim().parse::<i32>().ok())
    else {
        return LineOutcome::Malformed(MalformedField::ResidueId);
    };

    match column(line, VALUE_COLUMNS)
        .and_then(|field| field.trim().parse::<f64>().ok())
    {
        Some(value) if value.is_finite() => {
            LineOutcome::Value { residue_id, value }
        }
        _ => LineOutcome::Malformed(MalformedField::Value),
    }
}

/// Collect marker-atom values from any buffered reader.
///
/// A residue id seen more than once keeps its last value. Malformed lines
/// are skipped; only I/O failures are errors.
pub fn parse_reader<R: BufRead>(
    reader: R,
    opts: &ParseOptions,
) -> Result<ResidueValues, ResicolorError> {
    let mut values = ResidueValues::new();
    let mut malformed = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, opts) {
            LineOutcome::Value { residue_id, value } => {
                let _ = values.insert(residue_id, value);
            }
            LineOutcome::Ignored => {}
            LineOutcome::Malformed(field) => {
                malformed += 1;
                log::debug!("line {}: skipping {:?} field", idx + 1, field);
            }
        }
    }

    log::info!(
        "parsed {} {} residue values ({} malformed lines skipped)",
        values.len(),
        opts.marker_atom,
        malformed
    );
    Ok(values)
}

/// Collect marker-atom values from a PDB file on disk.
pub fn parse_file(
    path: &Path,
    opts: &ParseOptions,
) -> Result<ResidueValues, ResicolorError> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), opts)
}
