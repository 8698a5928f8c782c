use std::fmt;

/// Errors reported while building or querying an [`EnhancedSuffixArray`](crate::EnhancedSuffixArray).
///
/// A query that matches nothing is not an error; see [`Match`](crate::Match).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The text to index is empty.
    EmptyText,
    /// A text byte is not strictly greater than the sentinel.
    SentinelInText { offset: usize, byte: u8 },
    /// The pattern contains the sentinel byte.
    SentinelInPattern { offset: usize },
    /// The text, sentinel included, is longer than the configured limit.
    TextTooLong { len: usize, limit: usize },
    /// An interval or rank that does not fit the index.
    IntervalOutOfRange { lo: usize, hi: usize, len: usize },
    /// A navigation depth past the point where an interval's suffixes diverge.
    DepthBeyondBranch { depth: usize, branch_depth: usize },
    /// The suffix sorter failed or broke its contract.
    IndexingFailure { reason: String },
}

impl Error {
    /// True for errors caused by malformed caller input rather than by the sorter.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::IndexingFailure { .. })
    }

    pub(crate) fn indexing<S: Into<String>>(reason: S) -> Self {
        Error::IndexingFailure {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyText => write!(f, "invalid input: text is empty"),
            Error::SentinelInText { offset, byte } => write!(
                f,
                "invalid input: text byte {:#04x} at offset {} does not sort after the sentinel",
                byte, offset
            ),
            Error::SentinelInPattern { offset } => {
                write!(f, "invalid input: pattern has the sentinel at offset {}", offset)
            }
            Error::TextTooLong { len, limit } => write!(
                f,
                "invalid input: text of {} bytes exceeds the limit of {}",
                len, limit
            ),
            Error::IntervalOutOfRange { lo, hi, len } => write!(
                f,
                "invalid input: interval [{}, {}] does not fit an index of {} suffixes",
                lo, hi, len
            ),
            Error::DepthBeyondBranch {
                depth,
                branch_depth,
            } => write!(
                f,
                "invalid input: depth {} is past the branch depth {}",
                depth, branch_depth
            ),
            Error::IndexingFailure { reason } => write!(f, "suffix sorting failed: {}", reason),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
