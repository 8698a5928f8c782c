/// Construction settings for [`Builder`](crate::Builder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Byte appended to the text as terminator. Every text byte must be strictly greater.
    pub sentinel: u8,
    /// Check the sorter's output (permutation and order) before using it.
    pub verify_sort: bool,
    /// Maximum indexed length, sentinel included.
    pub max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sentinel: 0,
            verify_sort: true,
            max_len: isize::MAX as usize,
        }
    }
}

impl Config {
    /// Skip sorter verification; for sorters already known to be correct.
    pub fn trusted() -> Self {
        Self {
            verify_sort: false,
            ..Self::default()
        }
    }

    pub fn with_sentinel(sentinel: u8) -> Self {
        Self {
            sentinel,
            ..Self::default()
        }
    }
}
