use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How colors handed to the visualization host are named.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Apply", inline)]
#[serde(default)]
pub struct ApplyOptions {
    /// Prefix of every generated color name; the residue id follows it.
    #[schemars(title = "Color Prefix")]
    pub color_prefix: String,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            color_prefix: "color_".to_owned(),
        }
    }
}

impl ApplyOptions {
    /// Host color name for a residue, e.g. `color_42`.
    ///
    /// Negative residue ids are written with a leading `m` (`color_m5`) so
    /// the name stays a plain identifier.
    #[must_use]
    pub fn color_name(&self, residue_id: i32) -> String {
        if residue_id < 0 {
            format!("{}m{}", self.color_prefix, residue_id.unsigned_abs())
        } else {
            format!("{}{residue_id}", self.color_prefix)
        }
    }
}
