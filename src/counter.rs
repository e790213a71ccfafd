use std::cell::Cell;
use std::cmp::Ordering;

/// Counts comparisons made by a sort.
///
/// The count only ever grows until [`reset`](Self::reset). Read it before and after a sort to get
/// the comparisons of that sort. Every engine asks its comparator exactly once per comparison of
/// two list fronts, so wrapping the comparator counts those comparisons and nothing else.
///
/// ```ignore
/// let counter = ComparisonCounter::new();
/// let head = bottom_up::sort_by(&mut arena, head, counter.compare());
/// println!("{} comparisons", counter.count());
/// ```
#[derive(Debug, Default)]
pub struct ComparisonCounter {
    count: Cell<u64>,
}

impl ComparisonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }

    /// Natural key order, counted.
    pub fn compare(&self) -> impl FnMut(&u64, &u64) -> Ordering + '_ {
        self.wrap(|a: &u64, b: &u64| a.cmp(b))
    }

    /// Counts every call of `compare`.
    pub fn wrap<'a, F>(&'a self, mut compare: F) -> impl FnMut(&u64, &u64) -> Ordering + 'a
    where
        F: FnMut(&u64, &u64) -> Ordering + 'a,
    {
        move |a, b| {
            self.count.set(self.count.get() + 1);
            compare(a, b)
        }
    }
}
