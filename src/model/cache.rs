/// Memoized rank projection over a scored slice.
///
/// The cached value is a permutation of indices into the backing slice,
/// ordered by descending score. Staleness is judged by length alone: a
/// query recomputes the projection only when the slice has grown or
/// shrunk since the last sort. Mutating scores in place, or reordering
/// entries without changing the count, does NOT invalidate the cache;
/// callers that need a resort after such mutations must call
/// [`RankedCache::invalidate`] explicitly.
#[derive(Debug, Clone, Default)]
pub struct RankedCache {
    order: Option<Vec<usize>>,
}

impl RankedCache {
    pub fn new() -> Self {
        Self { order: None }
    }

    /// Returns the rank projection for `entries`, recomputing it if the
    /// cached one was built for a different number of entries.
    ///
    /// The sort is stable and descending: entries with equal scores keep
    /// their backing-slice order, which makes position queries
    /// deterministic. First call after a length change costs
    /// O(n log n); further calls are served from the cache.
    pub fn view<T, S, F>(&mut self, entries: &[T], score: F) -> &[usize]
    where
        S: Ord,
        F: Fn(&T) -> S,
    {
        if self.order.as_ref().map_or(false, |o| o.len() != entries.len()) {
            self.order = None;
        }

        self.order.get_or_insert_with(|| {
            log::debug!("recomputing rank projection over {} entries", entries.len());
            let mut order = (0..entries.len()).collect::<Vec<_>>();
            order.sort_by(|&a, &b| score(&entries[b]).cmp(&score(&entries[a])));
            order
        })
    }

    /// Drops the cached projection so the next query sorts again,
    /// regardless of whether the backing length changed.
    pub fn invalidate(&mut self) {
        self.order = None;
    }
}
