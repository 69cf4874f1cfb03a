use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "chosen.txt";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Write the chosen sensors to `output_path`.
    pub write_file: bool,
    /// Print the chosen sensors after the timing summary.
    pub print_result: bool,
    pub output_path: PathBuf,
    /// Read sensors from this file; standard input when unset.
    pub input_path: Option<PathBuf>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            write_file: true,
            print_result: true,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            input_path: None,
        }
    }
}

/// Only `true` (in any letter case) enables a flag. Anything else, including
/// typos, disables it without complaint.
pub fn parse_flag(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Builds a config from the positional flags. A missing flag keeps its
    /// default of `true`.
    pub fn from_args(
        write_file: Option<&str>,
        print_result: Option<&str>,
        output_path: PathBuf,
        input_path: Option<PathBuf>,
    ) -> Self {
        Self {
            write_file: write_file.map_or(true, parse_flag),
            print_result: print_result.map_or(true, parse_flag),
            output_path,
            input_path,
        }
    }
}
