//! Enhanced suffix array: suffix array, LCP array and child table of a byte string, queried
//! like a suffix tree without building one.
//!
//! The construction follows Abouelhoda, Kurtz and Ohlebusch, [*Replacing suffix trees with
//! enhanced suffix arrays*](https://doi.org/10.1016/S1570-8667(03)00065-0). Suffix sorting is
//! pluggable through [`SuffixSort`]; the default [`Sais`] sorter is linear time.
//!
//! # Example
//! ```
//! use esa::EnhancedSuffixArray;
//!
//! let esa = EnhancedSuffixArray::build(b"mississippi")?;
//!
//! let m = esa.match_prefix(b"ssix")?;
//! assert_eq!(m.len, 3); // "ssi" occurs, "ssix" does not
//! assert_eq!(esa.offsets(m.interval)?, vec![2, 5]);
//!
//! assert_eq!(esa.locate(b"issi")?, vec![1, 4]);
//! # Ok::<(), esa::Error>(())
//! ```
pub mod cld;
mod config;
mod error;
mod esa;
mod interval;
pub mod lcp;
mod matcher;
mod navigate;
pub mod sort;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::esa::{Builder, EnhancedSuffixArray};
pub use crate::interval::Interval;
pub use crate::matcher::Match;
pub use crate::navigate::ChildIntervals;
pub use crate::sort::{NaiveSort, Sais, SuffixSort};
