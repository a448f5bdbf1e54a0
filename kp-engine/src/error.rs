use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    #[error("capacity must be at least 1")]
    InvalidCapacity,
    #[error("weight must be at least 1")]
    InvalidWeight,
    #[error("value must not be negative")]
    InvalidValue,
    #[error("value and weight are identical to an earlier item")]
    DuplicateItem,
}

/// A rejected input. `offending_index` is the 1-based position of the item in
/// entry order, absent for capacity errors.
#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{}{}", item_prefix(.offending_index), .kind)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub offending_index: Option<usize>,
}

fn item_prefix(offending_index: &Option<usize>) -> String {
    match offending_index {
        Some(index) => format!("item {}: ", index),
        None => String::new(),
    }
}

impl ValidationError {
    pub fn capacity() -> Self {
        Self {
            kind: ValidationErrorKind::InvalidCapacity,
            offending_index: None,
        }
    }

    pub fn at(kind: ValidationErrorKind, position: usize) -> Self {
        Self {
            kind,
            offending_index: Some(position),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceExceeded {
    #[error("table needs {requested} cells but the limit is {limit}")]
    TableCells { requested: u128, limit: u64 },
    #[error("values of items that fit together may not fit in 64 bits")]
    ValueOverflow,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("refusing to solve: {0}")]
    ResourceExceeded(#[from] ResourceExceeded),
}
