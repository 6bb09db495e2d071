//! Balanced binary merging of per-file line streams.
//!
//! Chaining N iterators with a left-to-right fold nests them N deep, so
//! every `next()` on the tail walks the whole chain. Merging pairwise keeps
//! the composition at ceil(log2 N) depth, which also keeps the later files
//! as cheap to reach as the first one.

/// A boxed per-file line iterator, sendable across the worker pool.
pub type BoxedLines<T> = Box<dyn Iterator<Item = T> + Send>;

/// Combine `items` pairwise in rounds until one remains. Each round halves
/// the count, so an item passes through at most ceil(log2 N) combines.
/// Returns `None` for an empty input.
pub fn balanced_merge<T, F>(items: Vec<T>, mut combine: F) -> Option<T>
where
    F: FnMut(T, T) -> T,
{
    let mut layer = items;
    while layer.len() > 1 {
        let mut next = Vec::with_capacity(layer.len().div_ceil(2));
        let mut pairs = layer.into_iter();
        while let Some(left) = pairs.next() {
            match pairs.next() {
                Some(right) => next.push(combine(left, right)),
                None => next.push(left),
            }
        }
        layer = next;
    }
    layer.into_iter().next()
}

/// Chain per-file streams into one lazy stream with logarithmic chain depth.
/// Encounter order follows the input order of `streams`.
pub fn balanced_chain<T: 'static>(streams: Vec<BoxedLines<T>>) -> BoxedLines<T> {
    balanced_merge(streams, |left, right| {
        Box::new(left.chain(right)) as BoxedLines<T>
    })
    .unwrap_or_else(|| Box::new(std::iter::empty()))
}
