use std::ops::RangeInclusive;

/// A closed range `[lo, hi]` of suffix array ranks: an LCP-interval, i.e. a node of the implicit
/// suffix tree. `lo == hi` is a leaf.
///
/// Intervals are only handed out by an [`EnhancedSuffixArray`](crate::EnhancedSuffixArray), so
/// every interval names a real node of the index that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    pub(crate) lo: usize,
    pub(crate) hi: usize,
}

impl Interval {
    #[inline]
    pub(crate) fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    #[cfg(test)]
    pub(crate) fn leaf(rank: usize) -> Self {
        Self { lo: rank, hi: rank }
    }

    /// Rank of the first suffix.
    #[inline]
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Rank of the last suffix.
    #[inline]
    pub fn hi(&self) -> usize {
        self.hi
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.lo == self.hi
    }

    /// Number of suffixes in the interval.
    #[inline]
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    #[inline]
    pub fn contains(&self, rank: usize) -> bool {
        self.lo <= rank && rank <= self.hi
    }

    #[inline]
    pub fn ranks(&self) -> RangeInclusive<usize> {
        self.lo..=self.hi
    }
}

impl From<Interval> for RangeInclusive<usize> {
    fn from(iv: Interval) -> Self {
        iv.ranks()
    }
}
