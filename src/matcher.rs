//! Longest-prefix matching against the index.
use crate::error::{Error, Result};
use crate::esa::EnhancedSuffixArray;
use crate::interval::Interval;
use log::trace;

/// Result of [`EnhancedSuffixArray::match_prefix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// Ranks of every suffix that starts with the matched prefix.
    pub interval: Interval,
    /// Length of the longest pattern prefix that occurs in the text.
    pub len: usize,
}

impl Match {
    /// Number of occurrences of the matched prefix.
    pub fn count(&self) -> usize {
        self.interval.len()
    }
}

impl EnhancedSuffixArray {
    /// Find the longest prefix of `pattern` occurring in the text, and where it occurs.
    ///
    /// A partial or empty match is a normal result: compare [`Match::len`] with the pattern
    /// length. Fails only if `pattern` contains the sentinel.
    pub fn match_prefix(&self, pattern: &[u8]) -> Result<Match> {
        let sentinel = self.sentinel();
        if let Some(offset) = pattern.iter().position(|&c| c == sentinel) {
            return Err(Error::SentinelInPattern { offset });
        }

        let found = self.descend(pattern);
        trace!(
            "match_prefix: {} of {} bytes in [{}, {}]",
            found.len,
            pattern.len(),
            found.interval.lo,
            found.interval.hi
        );
        Ok(found)
    }

    // Pre-condition: pattern has no sentinel, so a mismatch stops every scan at the text end.
    fn descend(&self, pattern: &[u8]) -> Match {
        let m = pattern.len();
        let mut iv = self.root();
        let mut k = 0;

        while k < m {
            let child = match self.child_at(iv, k, pattern[k]) {
                Some(child) => child,
                None => return Match { interval: iv, len: k },
            };

            // symbols up to the child's branch depth are shared by all its suffixes
            let l = match self.depth_of(child) {
                Some(depth) => depth.min(m),
                None => m,
            };

            let suffix = &self.text[self.sa[child.lo]..];
            for w in k + 1..l {
                if suffix[w] != pattern[w] {
                    return Match {
                        interval: child,
                        len: w,
                    };
                }
            }

            k = l;
            iv = child;
        }

        Match { interval: iv, len: m }
    }

    /// Interval of `pattern`'s occurrences, if it occurs in full.
    pub fn find(&self, pattern: &[u8]) -> Result<Option<Interval>> {
        let found = self.match_prefix(pattern)?;
        Ok(if found.len == pattern.len() {
            Some(found.interval)
        } else {
            None
        })
    }

    pub fn contains(&self, pattern: &[u8]) -> Result<bool> {
        Ok(self.find(pattern)?.is_some())
    }

    /// Number of occurrences of `pattern`. The empty pattern occurs at every offset, the end of
    /// the text included.
    pub fn count(&self, pattern: &[u8]) -> Result<usize> {
        Ok(self.find(pattern)?.map_or(0, |iv| iv.len()))
    }

    /// Start offsets of `pattern` in the text, ascending.
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        match self.find(pattern)? {
            Some(iv) => self.offsets(iv),
            None => Ok(Vec::new()),
        }
    }
}
