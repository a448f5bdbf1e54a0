use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default ceiling on dynamic programming cells (one `u64` each).
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 1 << 27;

/// How the solver recovers the selected items once the optimum is known.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Keeps the full `(n + 1) x (W + 1)` table and walks it backwards.
    #[default]
    Table,
    /// Keeps a single row and recomputes it for every traceback step.
    /// `O(W)` memory at `O(n^2 * W)` time.
    Recompute,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Table => "table",
            Strategy::Recompute => "recompute",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Strategy::Table),
            "recompute" => Ok(Strategy::Recompute),
            other => Err(format!(
                "Unknown strategy '{}', expected 'table' or 'recompute'",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    pub max_table_cells: u64,
    pub strategy: Strategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            strategy: Strategy::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_table_cells(mut self, max_table_cells: u64) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }
}
