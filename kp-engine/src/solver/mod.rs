mod recompute;
mod table;

use crate::{Item, ProblemInstance, ResourceExceeded, SolverConfig, Strategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The optimal selection for one instance.
///
/// `selected_indices` are 0-based positions into [`ProblemInstance::items`],
/// ascending.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub selected_indices: Vec<usize>,
    pub total_value: u64,
    pub total_weight: u64,
}

impl Solution {
    fn from_selection(instance: &ProblemInstance, mut selected_indices: Vec<usize>) -> Self {
        selected_indices.sort_unstable();
        let items = instance.items();
        let total_value = selected_indices.iter().map(|&i| items[i].value()).sum();
        let total_weight = selected_indices.iter().map(|&i| items[i].weight()).sum();
        Self {
            selected_indices,
            total_value,
            total_weight,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected_indices.is_empty()
    }
}

/// Computes an optimal subset of `instance`.
///
/// Among equally valuable subsets the one found by walking the items from
/// last to first is returned: item `i` is taken exactly when the best value
/// over the first `i` items differs from the best value over the first
/// `i - 1` items at the remaining capacity. Both strategies return the same
/// subset.
pub fn solve(instance: &ProblemInstance, config: &SolverConfig) -> Result<Solution, ResourceExceeded> {
    let width = check_resources(instance, config)?;
    debug!(
        items = instance.len(),
        capacity = instance.capacity(),
        strategy = %config.strategy,
        "solving knapsack instance"
    );

    let selected = match config.strategy {
        Strategy::Table => table::select(instance.items(), width),
        Strategy::Recompute => recompute::select(instance.items(), width),
    };
    let solution = Solution::from_selection(instance, selected);

    debug_assert!(solution.total_weight <= instance.capacity());
    debug_assert_eq!(
        solution.total_value,
        optimal_value_unchecked(instance.items(), width)
    );
    debug!(
        selected = solution.selected_indices.len(),
        total_value = solution.total_value,
        total_weight = solution.total_weight,
        "knapsack instance solved"
    );
    Ok(solution)
}

/// Best achievable value without recovering the items. Needs one row of
/// `capacity + 1` cells.
pub fn optimal_value(instance: &ProblemInstance, config: &SolverConfig) -> Result<u64, ResourceExceeded> {
    let width = row_width(instance)?;
    check_cells(width as u128, config.max_table_cells)?;
    Ok(optimal_value_unchecked(instance.items(), width))
}

fn optimal_value_unchecked(items: &[Item], width: usize) -> u64 {
    let mut row = Vec::new();
    fill_row(items, width, &mut row);
    row[width - 1]
}

/// Cells held by each strategy for an instance with `n` items and row width
/// `width`.
pub fn table_cells(strategy: Strategy, n: usize, width: usize) -> u128 {
    match strategy {
        Strategy::Table => (n as u128 + 1) * width as u128,
        Strategy::Recompute => width as u128,
    }
}

fn row_width(instance: &ProblemInstance) -> Result<usize, ResourceExceeded> {
    if instance.value_bound().is_none() {
        return Err(ResourceExceeded::ValueOverflow);
    }
    instance
        .capacity()
        .checked_add(1)
        .and_then(|w| usize::try_from(w).ok())
        .ok_or(ResourceExceeded::TableCells {
            requested: instance.capacity() as u128 + 1,
            limit: u64::MAX,
        })
}

fn check_cells(requested: u128, limit: u64) -> Result<(), ResourceExceeded> {
    if requested > limit as u128 {
        return Err(ResourceExceeded::TableCells { requested, limit });
    }
    Ok(())
}

fn check_resources(instance: &ProblemInstance, config: &SolverConfig) -> Result<usize, ResourceExceeded> {
    let width = row_width(instance)?;
    let requested = table_cells(config.strategy, instance.len(), width);
    check_cells(requested, config.max_table_cells).map_err(|e| {
        debug!(%e, strategy = %config.strategy, "table exceeds configured ceiling");
        e
    })?;
    Ok(width)
}

/// Overwrites `row` with `dp[items.len()][0..width]`, the best value over
/// `items` for every capacity below `width`.
pub(crate) fn fill_row(items: &[Item], width: usize, row: &mut Vec<u64>) {
    row.clear();
    row.resize(width, 0);
    for item in items {
        let Some(weight) = item.weight_offset().filter(|&w| w < width) else {
            continue;
        };
        for w in (weight..width).rev() {
            let candidate = row[w - weight] + item.value();
            if candidate > row[w] {
                row[w] = candidate;
            }
        }
    }
}
