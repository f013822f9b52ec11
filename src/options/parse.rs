use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which coordinate records the line parser reads values from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Parse", inline)]
#[serde(default)]
pub struct ParseOptions {
    /// Atom name (columns 13-16, trimmed) of the representative atom of
    /// each residue.
    #[schemars(title = "Marker Atom")]
    pub marker_atom: String,
    /// Whether `HETATM` records are read in addition to `ATOM` records.
    #[schemars(title = "Include HETATM")]
    pub include_hetatm: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            marker_atom: "CA".to_owned(),
            include_hetatm: false,
        }
    }
}

impl ParseOptions {
    /// Whether a line starts with one of the accepted record types.
    #[must_use]
    pub fn accepts_record(&self, line: &str) -> bool {
        line.starts_with("ATOM")
            || (self.include_hetatm && line.starts_with("HETATM"))
    }
}
