use crate::{optimal_value, EngineError, ProblemInstance, ResultSet, SolverConfig};
use anyhow::{anyhow, Result};

/// Checks a reported selection against `instance`: every position exists and
/// appears once in ascending order, each record matches its item, totals add
/// up, the weight fits and the value is the optimum.
///
/// When the optimum cannot be computed under `config` the error is an
/// [`EngineError::ResourceExceeded`], not a verdict on the result.
pub fn verify(instance: &ProblemInstance, result: &ResultSet, config: &SolverConfig) -> Result<()> {
    let items = instance.items();
    let mut last_position = 0;
    let mut total_value = 0u64;
    let mut total_weight = 0u64;

    for record in &result.records {
        let position = record.item_position;
        if position == 0 || position > items.len() {
            return Err(anyhow!("Item ({}) is out of bounds", position));
        }
        if position <= last_position {
            return Err(anyhow!(
                "Item ({}) is duplicated or out of order",
                position
            ));
        }
        last_position = position;

        let item = &items[position - 1];
        if item.weight() != record.weight || item.value() != record.value {
            return Err(anyhow!(
                "Item ({}) reported as value {} weight {}, but is value {} weight {}",
                position,
                record.value,
                record.weight,
                item.value(),
                item.weight()
            ));
        }
        total_value = total_value
            .checked_add(item.value())
            .ok_or_else(|| anyhow!("Total value overflowed"))?;
        total_weight = total_weight
            .checked_add(item.weight())
            .ok_or_else(|| anyhow!("Total weight overflowed"))?;
    }

    if total_weight != result.total_weight {
        return Err(anyhow!(
            "Reported total weight ({}) does not match selected items ({})",
            result.total_weight,
            total_weight
        ));
    }
    if total_value != result.total_value {
        return Err(anyhow!(
            "Reported total value ({}) does not match selected items ({})",
            result.total_value,
            total_value
        ));
    }
    if total_weight > instance.capacity() {
        return Err(anyhow!(
            "Total weight ({}) exceeded capacity ({})",
            total_weight,
            instance.capacity()
        ));
    }

    let optimum = optimal_value(instance, config).map_err(EngineError::from)?;
    if total_value != optimum {
        return Err(anyhow!(
            "Total value ({}) is not optimal ({})",
            total_value,
            optimum
        ));
    }
    Ok(())
}
