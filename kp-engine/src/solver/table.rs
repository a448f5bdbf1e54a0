use crate::Item;
use tracing::trace;

/// Fills the full `(n + 1) x width` table row by row, then walks it from the
/// last item back to the first.
pub(super) fn select(items: &[Item], width: usize) -> Vec<usize> {
    let n = items.len();
    let mut dp = vec![0u64; (n + 1) * width];

    for (i, item) in items.iter().enumerate() {
        let (prev, row) = dp[i * width..(i + 2) * width].split_at_mut(width);
        let weight = item.weight_offset().unwrap_or(usize::MAX).min(width);
        row[..weight].copy_from_slice(&prev[..weight]);
        for w in weight..width {
            row[w] = prev[w].max(prev[w - weight] + item.value());
        }
    }

    let cell = |i: usize, w: usize| dp[i * width + w];
    let mut w = width - 1;
    let mut selected = Vec::new();
    for i in (1..=n).rev() {
        if cell(i, w) != cell(i - 1, w) {
            let weight = items[i - 1].weight() as usize;
            trace!(item = i, remaining = w, weight, "item taken");
            selected.push(i - 1);
            w -= weight;
        }
    }
    selected
}
