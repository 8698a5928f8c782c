//! Top-down traversal of the implicit suffix tree.
use crate::error::{Error, Result};
use crate::esa::EnhancedSuffixArray;
use crate::interval::Interval;

impl EnhancedSuffixArray {
    /// First l-index of an internal interval: the right neighbour boundary of its first child.
    #[inline]
    pub(crate) fn first_l_index(&self, iv: Interval) -> usize {
        debug_assert!(!iv.is_leaf());
        if self.lcp_at(iv.lo) <= self.lcp_at(iv.hi + 1) {
            self.cld[iv.hi]
        } else {
            self.cld[iv.lo]
        }
    }

    #[inline]
    pub(crate) fn depth_of(&self, iv: Interval) -> Option<usize> {
        if iv.is_leaf() {
            None
        } else {
            Some(self.lcp[self.first_l_index(iv)] as usize)
        }
    }

    /// Pre-condition: `iv` fits the index and, if internal, `depth` is its branch depth.
    pub(crate) fn child_at(&self, iv: Interval, depth: usize, c: u8) -> Option<Interval> {
        if iv.is_leaf() {
            return match self.text.get(self.sa[iv.lo] + depth) {
                Some(&b) if b == c => Some(iv),
                _ => None,
            };
        }

        let l = self.lcp[self.first_l_index(iv)] as usize;
        debug_assert_eq!(l, depth);
        self.child_intervals(iv)
            .find(|child| self.text[self.sa[child.lo] + l] == c)
    }

    pub(crate) fn child_intervals(&self, iv: Interval) -> ChildIntervals<'_> {
        if iv.is_leaf() {
            return ChildIntervals {
                esa: self,
                parent: iv,
                depth: -1,
                k: iv.lo,
                m: 0,
                done: true,
            };
        }

        let m = self.first_l_index(iv);
        ChildIntervals {
            esa: self,
            parent: iv,
            depth: self.lcp[m],
            k: iv.lo,
            m,
            done: false,
        }
    }

    /// Length of the prefix shared by all suffixes of an internal interval. `None` for a leaf.
    pub fn branch_depth(&self, iv: Interval) -> Result<Option<usize>> {
        let iv = self.check(iv)?;
        Ok(self.depth_of(iv))
    }

    /// The part of `iv` whose suffixes have `c` at offset `depth`.
    ///
    /// At the branch depth of an internal interval this is the child starting with `c`. Above
    /// it, or anywhere along a leaf's suffix, all suffixes agree on the symbol, so the result is
    /// `iv` itself or nothing. A depth past the branch depth of an internal interval is an error.
    pub fn child(&self, iv: Interval, depth: usize, c: u8) -> Result<Option<Interval>> {
        let iv = self.check(iv)?;

        match self.depth_of(iv) {
            Some(l) if depth > l => Err(Error::DepthBeyondBranch {
                depth,
                branch_depth: l,
            }),
            Some(l) if depth < l => {
                Ok(Some(iv).filter(|iv| self.text[self.sa[iv.lo] + depth] == c))
            }
            _ => Ok(self.child_at(iv, depth, c)),
        }
    }

    /// Children of `iv` from left to right; empty for a leaf.
    pub fn children(&self, iv: Interval) -> Result<ChildIntervals<'_>> {
        let iv = self.check(iv)?;
        Ok(self.child_intervals(iv))
    }
}

/// Iterator over the child intervals of an LCP-interval, following the sibling chain of the
/// child table.
#[derive(Clone, Debug)]
pub struct ChildIntervals<'a> {
    esa: &'a EnhancedSuffixArray,
    parent: Interval,
    depth: isize,
    // start of the next child
    k: usize,
    // l-index that ends it
    m: usize,
    done: bool,
}

impl<'a> Iterator for ChildIntervals<'a> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        if self.done {
            return None;
        }

        if self.k < self.parent.hi && self.esa.lcp_at(self.m) == self.depth {
            let child = Interval::new(self.k, self.m - 1);
            self.k = self.m;
            if self.k < self.parent.hi {
                self.m = self.esa.cld[self.m];
            }
            return Some(child);
        }

        self.done = true;
        Some(Interval::new(self.k, self.parent.hi))
    }
}

impl<'a> std::iter::FusedIterator for ChildIntervals<'a> {}
