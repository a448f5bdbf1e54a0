use serde::{Deserialize, Serialize};

/// An item as supplied by a caller, before any checks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawItem {
    pub value: i64,
    pub weight: i64,
}

impl RawItem {
    pub fn new(value: i64, weight: i64) -> Self {
        Self { value, weight }
    }
}

/// A validated item: `value >= 0`, `weight >= 1`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    value: u64,
    weight: u64,
}

impl Item {
    pub(crate) fn new(value: u64, weight: u64) -> Self {
        debug_assert!(weight >= 1);
        Self { value, weight }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Weight as a table offset, `None` if it cannot fit in any table.
    pub(crate) fn weight_offset(&self) -> Option<usize> {
        usize::try_from(self.weight).ok()
    }
}

/// A validated, read-only knapsack instance. Items keep their entry order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    capacity: u64,
    items: Vec<Item>,
}

impl ProblemInstance {
    pub(crate) fn new(capacity: u64, items: Vec<Item>) -> Self {
        debug_assert!(capacity >= 1);
        Self { capacity, items }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Upper bound on the value of any subset that fits, `None` if that bound
    /// overflows `u64`.
    ///
    /// A fitting subset holds at most `capacity / lightest fitting weight`
    /// items, so the bound sums only that many of the largest fitting values.
    /// Every cell of the dynamic program is the value of some fitting subset.
    pub fn value_bound(&self) -> Option<u64> {
        let fitting: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.weight <= self.capacity)
            .collect();
        let Some(lightest) = fitting.iter().map(|item| item.weight).min() else {
            return Some(0);
        };
        let max_count = usize::try_from(self.capacity / lightest).unwrap_or(usize::MAX);

        let mut values: Vec<u64> = fitting.iter().map(|item| item.value).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
            .into_iter()
            .take(max_count)
            .try_fold(0u64, |acc, value| acc.checked_add(value))
    }
}
