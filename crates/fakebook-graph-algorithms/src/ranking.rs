//! Deterministic top-N selection

use rayon::prelude::*;
use std::cmp::Ordering;

/// Keep the `n` best items under `cmp`, sorted best first.
///
/// `cmp` must be a total order over the items: the ranking key followed by
/// tie-break keys that are unique per item. Items are partitioned around the
/// N-th position, the head is sorted and the rest is dropped. With a total
/// order there is never a tie at the N-th boundary, so the result does not
/// depend on input order.
pub fn top_n<T, F>(mut items: Vec<T>, n: usize, cmp: F) -> Vec<T>
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if n == 0 {
        return Vec::new();
    }
    if items.len() > n {
        items.select_nth_unstable_by(n - 1, &cmp);
        items.truncate(n);
    }
    items.par_sort_unstable_by(cmp);
    items
}
