use super::fill_row;
use crate::Item;
use tracing::trace;

/// Same walk as the table strategy, but `dp[i - 1][..=w]` is rebuilt from
/// scratch at every step. Only cells up to the remaining capacity are ever
/// needed, so the row shrinks as items are taken.
pub(super) fn select(items: &[Item], width: usize) -> Vec<usize> {
    let mut row = Vec::with_capacity(width);
    let mut w = width - 1;
    let mut selected = Vec::new();

    for i in (1..=items.len()).rev() {
        fill_row(&items[..i - 1], w + 1, &mut row);
        let item = &items[i - 1];
        let without = row[w];
        let with = item
            .weight_offset()
            .filter(|&weight| weight <= w)
            .map(|weight| (weight, row[w - weight] + item.value()));

        // dp[i][w] differs from dp[i - 1][w] only when taking the item is strictly better
        if let Some((weight, with)) = with {
            if with > without {
                trace!(item = i, remaining = w, weight, "item taken");
                selected.push(i - 1);
                w -= weight;
            }
        }
    }
    selected
}
