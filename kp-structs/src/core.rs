use crate::serializable_struct_with_getters;
use anyhow::{anyhow, Result};
use kp_engine::{validate, ProblemInstance, RawItem, ResultSet, Strategy, ValidationError};
use serde::{Deserialize, Serialize};

// Persisted request: `{capacity, items: [{value, weight}, ...]}`. Older request
// files also carry `num_items`.
serializable_struct_with_getters! {
    SolveRequest {
        capacity: i64,
        items: Vec<RawItem>,
        num_items: Option<usize>,
    }
}

impl SolveRequest {
    pub fn new(capacity: i64, items: Vec<RawItem>) -> Self {
        Self {
            capacity,
            num_items: Some(items.len()),
            items,
        }
    }

    /// Rejects a request whose declared `num_items` disagrees with its items.
    pub fn check_num_items(&self) -> Result<()> {
        match self.num_items {
            Some(declared) if declared != self.items.len() => Err(anyhow!(
                "Request declares {} items but lists {}",
                declared,
                self.items.len()
            )),
            _ => Ok(()),
        }
    }

    pub fn to_instance(&self) -> Result<ProblemInstance, ValidationError> {
        validate(self.capacity, &self.items)
    }
}

serializable_struct_with_getters! {
    OutputData {
        capacity: i64,
        num_items: usize,
        strategy: Strategy,
        result: ResultSet,
    }
}

impl OutputData {
    pub fn new(request: &SolveRequest, strategy: Strategy, result: ResultSet) -> Self {
        Self {
            capacity: request.capacity,
            num_items: request.items.len(),
            strategy,
            result,
        }
    }

    pub fn summary(&self) -> String {
        format!("{} items selected", self.result.len())
    }
}
