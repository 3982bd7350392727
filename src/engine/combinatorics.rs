use itertools::Itertools;

/// All `k`-element subsets of `items`, by position. Equal values at different
/// positions are distinct items. Output is lexicographic in position order.
pub fn k_subsets<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    k_subsets_iter(items, k).collect()
}

/// Lazy form of [`k_subsets`].
pub fn k_subsets_iter<T: Clone>(items: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
    items.iter().cloned().combinations(k)
}

/// C(n, k), saturating on overflow.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}
