use crate::serializable_struct_with_getters;
use anyhow::Result;
use kp_engine::SolverConfig;
use kp_utils::load_json_arg;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

serializable_struct_with_getters! {
    RuntimeConfig {
        solver: Option<SolverConfig>,
        output_dir: Option<String>,
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            solver: None,
            output_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Loads a config from an inline json string, a `.json` path or `-`.
    pub fn load(arg: &str) -> Result<Self> {
        load_json_arg(arg, "config")
    }

    pub fn solver_config(&self) -> SolverConfig {
        self.solver.unwrap_or_default()
    }

    /// Places a bare file name under `output_dir`. Paths with a directory
    /// component are used as given.
    pub fn resolve_output_path(&self, file: &Path) -> PathBuf {
        let is_bare = file
            .parent()
            .map_or(true, |parent| parent.as_os_str().is_empty());
        match &self.output_dir {
            Some(dir) if is_bare => Path::new(dir).join(file),
            _ => file.to_path_buf(),
        }
    }
}
