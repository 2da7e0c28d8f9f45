//! Export output settings.

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory the CSV file is written to when no explicit path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Keep students that have no recorded score on any assignment.
    #[serde(default)]
    pub include_ungraded: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            include_ungraded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, ".");
        assert!(!config.include_ungraded);
    }
}
