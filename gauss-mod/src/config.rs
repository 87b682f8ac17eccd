use crate::errors::SolverError;

use serde::{Deserialize, Serialize};

/// Default ceiling on the number of solutions a solve may enumerate.
pub const DEFAULT_MAX_SOLUTIONS: u64 = 100;

/// Tunables of [`GaussSolver`](crate::gauss::GaussSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Solves whose multiplicity exceeds this are refused with `TooManySolutions`.
    pub max_solutions: u64,
    /// Accept an all-zero remaining column as a pivot instead of failing with
    /// `NoPivot`. The unknown behind it then ranges over every residue.
    pub free_columns: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            free_columns: false,
        }
    }
}

impl SolverConfig {
    /// Parses a config from JSON; missing fields keep their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// # use gauss_mod::config::SolverConfig;
    /// let config = SolverConfig::from_json(r#"{ "free_columns": true }"#).unwrap();
    /// assert!(config.free_columns);
    /// assert_eq!(config.max_solutions, 100);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SolverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_max_solutions(mut self, max_solutions: u64) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    pub fn with_free_columns(mut self, free_columns: bool) -> Self {
        self.free_columns = free_columns;
        self
    }
}
