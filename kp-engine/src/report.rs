use crate::{ProblemInstance, Solution};
use serde::{Deserialize, Serialize};

/// One selected item, numbered from 1 in entry order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRecord {
    pub item_position: usize,
    pub weight: u64,
    pub value: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub records: Vec<ResultRecord>,
    pub total_value: u64,
    pub total_weight: u64,
}

impl ResultSet {
    /// No item was selected. A valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn positions(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.item_position).collect()
    }
}

/// Packages `solution` as records in ascending position order.
///
/// `solution` must come from [`solve`](crate::solve) on the same `instance`;
/// an index past the end of its items panics.
pub fn report(instance: &ProblemInstance, solution: &Solution) -> ResultSet {
    let mut indices = solution.selected_indices.clone();
    indices.sort_unstable();
    debug_assert!(
        indices.last().map_or(true, |&i| i < instance.len()),
        "solution selects item {:?} but the instance has {} items",
        indices.last(),
        instance.len()
    );
    let records = indices
        .into_iter()
        .map(|i| {
            let item = &instance.items()[i];
            ResultRecord {
                item_position: i + 1,
                weight: item.weight(),
                value: item.value(),
            }
        })
        .collect();

    ResultSet {
        records,
        total_value: solution.total_value,
        total_weight: solution.total_weight,
    }
}
