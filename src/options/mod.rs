//! Run options with TOML file support.
//!
//! Parsing and color-application settings are consolidated here. The default
//! options select `ATOM` records of alpha-carbons and name colors
//! `color_<resi>`; a TOML file only needs to list the fields it overrides.

mod apply;
mod parse;

use std::path::Path;

pub use apply::ApplyOptions;
pub use parse::ParseOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ResicolorError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[parse]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Record selection for the line parser.
    pub parse: ParseOptions,
    /// Naming of the colors handed to the host.
    pub apply: ApplyOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ResicolorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ResicolorError> {
        toml::from_str(content)
            .map_err(|e| ResicolorError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ResicolorError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ResicolorError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_select_alpha_carbon_atoms() {
        let opts = Options::default();
        assert_eq!(opts.parse.marker_atom, "CA");
        assert!(!opts.parse.include_hetatm);
        assert_eq!(opts.apply.color_prefix, "color_");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[parse]
marker_atom = "CB"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.parse.marker_atom, "CB");
        // Everything else should be default
        assert!(!opts.parse.include_hetatm);
        assert_eq!(opts.apply, ApplyOptions::default());
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[parse\nmarker_atom = 3").unwrap_err();
        assert!(matches!(err, ResicolorError::OptionsParse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/resicolor.toml"))
            .unwrap_err();
        assert!(matches!(err, ResicolorError::Io(_)));
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let dir = std::env::temp_dir()
            .join(format!("resicolor-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.apply.color_prefix = "bfac_".to_owned();
        opts.parse.include_hetatm = true;

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded, opts);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("parse"));
        assert!(props.contains_key("apply"));

        let parse = &props["parse"]["properties"];
        assert!(parse.get("marker_atom").is_some());
        assert!(parse.get("include_hetatm").is_some());
    }
}
