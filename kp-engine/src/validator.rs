use crate::{Item, ProblemInstance, RawItem, ValidationError, ValidationErrorKind};
use std::collections::HashSet;

/// Checks `capacity` and `items` and builds a [`ProblemInstance`].
///
/// Capacity is checked first, then items one by one in entry order: weight,
/// value, then whether the `(value, weight)` pair was already seen. The first
/// failure wins and carries the 1-based position of the offending item.
pub fn validate(capacity: i64, items: &[RawItem]) -> Result<ProblemInstance, ValidationError> {
    if capacity < 1 {
        return Err(ValidationError::capacity());
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut validated = Vec::with_capacity(items.len());
    for (i, raw) in items.iter().enumerate() {
        let position = i + 1;
        if raw.weight < 1 {
            return Err(ValidationError::at(
                ValidationErrorKind::InvalidWeight,
                position,
            ));
        }
        if raw.value < 0 {
            return Err(ValidationError::at(
                ValidationErrorKind::InvalidValue,
                position,
            ));
        }
        if !seen.insert((raw.value, raw.weight)) {
            return Err(ValidationError::at(
                ValidationErrorKind::DuplicateItem,
                position,
            ));
        }
        validated.push(Item::new(raw.value as u64, raw.weight as u64));
    }

    Ok(ProblemInstance::new(capacity as u64, validated))
}
