use crate::config::Config;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::sort::{self, Sais, SuffixSort};
use crate::{cld, lcp};
use log::debug;

/// Suffix array of a sentinel-terminated text together with its LCP array and child table.
///
/// Immutable once built; every query takes `&self`, so one index can be shared between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnhancedSuffixArray {
    pub(crate) text: Vec<u8>,
    pub(crate) sa: Vec<usize>,
    pub(crate) lcp: Vec<isize>,
    pub(crate) cld: Vec<usize>,
}

impl EnhancedSuffixArray {
    /// Index `text` with the default [`Config`] and the [`Sais`] sorter.
    ///
    /// ```
    /// let esa = esa::EnhancedSuffixArray::build(b"banana")?;
    /// let m = esa.match_prefix(b"ana")?;
    /// assert_eq!(m.len, 3);
    /// assert_eq!(esa.offsets(m.interval)?, vec![1, 3]);
    /// # Ok::<(), esa::Error>(())
    /// ```
    pub fn build(text: &[u8]) -> Result<Self> {
        Builder::new().build(text)
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The indexed text without its sentinel.
    pub fn text(&self) -> &[u8] {
        &self.text[..self.text.len() - 1]
    }

    /// The indexed text, sentinel included.
    pub fn indexed(&self) -> &[u8] {
        &self.text
    }

    pub fn sentinel(&self) -> u8 {
        self.text[self.text.len() - 1]
    }

    /// Number of suffixes, the sentinel-only suffix included.
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.sa
    }

    pub fn lcp(&self) -> &[isize] {
        &self.lcp
    }

    pub fn child_table(&self) -> &[usize] {
        &self.cld
    }

    /// Suffix of rank `rank`, sentinel included.
    pub fn suffix(&self, rank: usize) -> Option<&[u8]> {
        self.sa.get(rank).map(|&i| &self.text[i..])
    }

    /// Text offsets of the suffixes in `interval`, ascending.
    pub fn offsets(&self, interval: Interval) -> Result<Vec<usize>> {
        let interval = self.check(interval)?;
        let mut offsets = self.sa[interval.ranks()].to_vec();
        offsets.sort_unstable();
        Ok(offsets)
    }

    /// Reject an interval that does not fit this index, e.g. one taken from a larger index.
    pub(crate) fn check(&self, iv: Interval) -> Result<Interval> {
        if iv.lo <= iv.hi && iv.hi < self.sa.len() {
            Ok(iv)
        } else {
            Err(Error::IntervalOutOfRange {
                lo: iv.lo,
                hi: iv.hi,
                len: self.sa.len(),
            })
        }
    }

    /// The interval of all suffixes.
    pub fn root(&self) -> Interval {
        Interval::new(0, self.sa.len() - 1)
    }

    /// `lcp[i]`, with the trailing `lcp[n] == -1`.
    #[inline]
    pub(crate) fn lcp_at(&self, i: usize) -> isize {
        self.lcp.get(i).copied().unwrap_or(-1)
    }
}

/// Builds an [`EnhancedSuffixArray`] with a chosen [`Config`] and [`SuffixSort`] implementation.
#[derive(Clone, Debug, Default)]
pub struct Builder<S = Sais> {
    config: Config,
    sorter: S,
}

impl Builder<Sais> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SuffixSort> Builder<S> {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn sorter<T: SuffixSort>(self, sorter: T) -> Builder<T> {
        Builder {
            config: self.config,
            sorter,
        }
    }

    /// Append the sentinel to `text`, sort its suffixes, then derive the LCP array and the child
    /// table, in that order. Nothing is returned unless every step succeeds.
    pub fn build(&self, text: &[u8]) -> Result<EnhancedSuffixArray> {
        let indexed = self.validate(text)?;
        let n = indexed.len();

        debug!("building index over {} symbols", n);

        let sa = self.sorter.sort(&indexed)?;
        if self.config.verify_sort {
            sort::verify(&indexed, &sa)?;
        } else if sa.len() != n {
            return Err(Error::indexing(format!(
                "sorter returned {} entries for {} symbols",
                sa.len(),
                n
            )));
        }
        debug!("suffix array done");

        let lcp = lcp::build(&indexed, &sa);
        debug!(
            "lcp array done, max lcp {}",
            lcp.iter().copied().max().unwrap_or(-1)
        );

        let cld = cld::build(&lcp);
        debug!("child table done, {} slots", cld.len());

        Ok(EnhancedSuffixArray {
            text: indexed,
            sa,
            lcp,
            cld,
        })
    }

    fn validate(&self, text: &[u8]) -> Result<Vec<u8>> {
        let sentinel = self.config.sentinel;

        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        if let Some(offset) = text.iter().position(|&c| c <= sentinel) {
            return Err(Error::SentinelInText {
                offset,
                byte: text[offset],
            });
        }

        let len = text.len().saturating_add(1);
        if len > self.config.max_len {
            return Err(Error::TextTooLong {
                len,
                limit: self.config.max_len,
            });
        }

        let mut indexed = Vec::with_capacity(len);
        indexed.extend_from_slice(text);
        indexed.push(sentinel);
        Ok(indexed)
    }
}
