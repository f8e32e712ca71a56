use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Setters, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[setters(into)]
/// Represents the environment in which the dialogs are being shown.
pub struct Environment {
    /// The base path relative to which everything else is stored.
    pub base_path: PathBuf,
    /// Answer pre-selected on terminal confirmation dialogs.
    pub confirm_default: bool,
}

impl Environment {
    pub fn log_path(&self) -> PathBuf {
        self.base_path.join("logs")
    }
}

/// Resolves the [`Environment`] from wherever configuration lives.
pub trait EnvironmentService: Send + Sync {
    fn get_environment(&self) -> Environment;
}
