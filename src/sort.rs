//! Suffix sorting: the contract the index is built on, and two sorters that satisfy it.
//!
//! [`Sais`] is induced sorting after Nong, Zhang and Chan, *Linear Suffix Array Construction
//! by Almost Pure Induced-Sorting* (2009). It runs in O(N+|Σ|) time and recurses on the string
//! of LMS-substring names when those names are not yet unique.
//!
//! [`NaiveSort`] compares suffixes directly and exists to cross-check other sorters.
use crate::error::{Error, Result};
use contracts::*;
use log::{debug, warn};
use std::cmp::Ordering::*;

mod private {
    use num::PrimInt;
    use std::fmt::Debug;

    pub trait Char: PrimInt + Debug {
        fn to_u(&self) -> usize;
    }

    macro_rules! impl_char {
        ($uint:ty) => {
            impl Char for $uint {
                #[inline]
                fn to_u(&self) -> usize {
                    *self as usize
                }
            }
        };
    }

    impl_char!(u8);

    impl_char!(u16);

    #[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
    impl_char!(u32);

    #[cfg(target_pointer_width = "64")]
    impl_char!(u64);

    impl_char!(usize);
}

/// A symbol of a string to be suffix sorted: primitive unsigned integer type that fits into `usize`.
///
/// This is a [sealed trait](https://rust-lang.github.io/api-guidelines/future-proofing.html).
pub trait Char: private::Char {}

macro_rules! impl_char {
    ($uint:ty) => {
        impl Char for $uint {}
    };
}

impl_char!(u8);

impl_char!(u16);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_char!(u32);

#[cfg(target_pointer_width = "64")]
impl_char!(u64);

impl_char!(usize);

/// Produces the suffix array of a sentinel-terminated text.
///
/// `text` ends with a sentinel byte that is strictly smaller than every other byte of `text`.
/// The result is an owned permutation of `0..text.len()` listing suffix start offsets in
/// lexicographic order, so `sa[0] == text.len() - 1`.
pub trait SuffixSort {
    fn sort(&self, text: &[u8]) -> Result<Vec<usize>>;
}

impl<S: SuffixSort + ?Sized> SuffixSort for &S {
    fn sort(&self, text: &[u8]) -> Result<Vec<usize>> {
        (**self).sort(text)
    }
}

/// Linear time induced sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sais {
    limit: usize,
}

impl Default for Sais {
    fn default() -> Self {
        Self {
            limit: isize::MAX as usize,
        }
    }
}

impl Sais {
    /// Refuse texts longer than `limit` symbols (sentinel included).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.min(isize::MAX as usize),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl SuffixSort for Sais {
    fn sort(&self, text: &[u8]) -> Result<Vec<usize>> {
        if text.len() > self.limit {
            return Err(Error::indexing(format!(
                "{} symbols exceed the sorter limit of {}",
                text.len(),
                self.limit
            )));
        }

        let sentinel = match text.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                if rest.iter().any(|c| c <= last) {
                    return Err(Error::indexing("last symbol is not a unique minimum"));
                }
                *last
            }
            _ => return Err(Error::indexing("need at least one symbol before the sentinel")),
        };

        debug!("sais: sorting {} symbols, sentinel {:#04x}", text.len(), sentinel);

        let mut sa = vec![0usize; text.len()];
        sais(text, u8::MAX as usize + 1, &mut sa);
        Ok(sa)
    }
}

/// Sorts suffixes by direct comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaiveSort;

impl SuffixSort for NaiveSort {
    fn sort(&self, text: &[u8]) -> Result<Vec<usize>> {
        let mut sa: Vec<usize> = (0..text.len()).collect();
        sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
        Ok(sa)
    }
}

const EMPTY: usize = usize::MAX;

/// S-type flags: `stype[i]` iff suffix `i` is smaller than suffix `i + 1`. The last one is S.
fn classify<C: Char>(s: &[C]) -> Vec<bool> {
    let n = s.len();
    let mut stype = vec![false; n];
    stype[n - 1] = true;

    for i in (0..n - 1).rev() {
        stype[i] = match s[i].cmp(&s[i + 1]) {
            Less => true,
            Equal => stype[i + 1],
            Greater => false,
        };
    }

    stype
}

#[inline]
fn is_lms(stype: &[bool], i: usize) -> bool {
    i > 0 && stype[i] && !stype[i - 1]
}

/// bucket[c] = first slot of bucket c if `head`, one past its last slot otherwise
fn fill_bucket<C: Char>(s: &[C], bucket: &mut [usize], head: bool) {
    bucket.iter_mut().for_each(|e| *e = 0);

    s.iter().for_each(|c| bucket[c.to_u()] += 1);

    (0..bucket.len()).fold(0, |sum, i| {
        let sum = sum + bucket[i];
        bucket[i] = if head { sum - bucket[i] } else { sum };
        sum
    });
}

fn sort_l<C: Char>(s: &[C], stype: &[bool], bucket: &mut [usize], sa: &mut [usize]) {
    fill_bucket(s, bucket, true);

    for i in 0..sa.len() {
        let j = sa[i];
        // s[j-1] is L-type?
        if j != EMPTY && j > 0 && !stype[j - 1] {
            let b = &mut bucket[s[j - 1].to_u()];
            sa[*b] = j - 1;
            *b += 1;
        }
    }
}

fn sort_s<C: Char>(s: &[C], stype: &[bool], bucket: &mut [usize], sa: &mut [usize]) {
    fill_bucket(s, bucket, false);

    for i in (0..sa.len()).rev() {
        let j = sa[i];
        // s[j-1] is S-type?
        if j != EMPTY && j > 0 && stype[j - 1] {
            let b = &mut bucket[s[j - 1].to_u()];
            *b -= 1;
            sa[*b] = j - 1;
        }
    }
}

fn eq_lms_substr<C: Char>(s: &[C], stype: &[bool], a: usize, b: usize) -> bool {
    let last = s.len() - 1;
    if a == last || b == last {
        return a == b;
    }

    let mut k = 0;
    loop {
        let (x, y) = (a + k, b + k);
        if s[x] != s[y] || stype[x] != stype[y] {
            return false;
        }
        if k > 0 && (is_lms(stype, x) || is_lms(stype, y)) {
            return is_lms(stype, x) && is_lms(stype, y);
        }
        k += 1;
    }
}

/// Pre-condition: s ends with its unique minimum, every symbol is below `alphabet`
fn sais<C: Char>(s: &[C], alphabet: usize, sa: &mut [usize]) {
    debug_assert_eq!(s.len(), sa.len());

    let n = s.len();
    if n == 1 {
        sa[0] = 0;
        return;
    }

    let stype = classify(s);
    let mut bucket = vec![0usize; alphabet];

    // sort LMS-substrings
    fill_bucket(s, &mut bucket, false);
    sa.iter_mut().for_each(|e| *e = EMPTY);
    for i in 1..n {
        if is_lms(&stype, i) {
            let b = &mut bucket[s[i].to_u()];
            *b -= 1;
            sa[*b] = i;
        }
    }

    sort_l(s, &stype, &mut bucket, sa);

    sort_s(s, &stype, &mut bucket, sa);

    // -> LMS-substrings appear in sorted order; move them to the front
    let mut lms_count = 0;
    for i in 0..n {
        let p = sa[i];
        if p != EMPTY && is_lms(&stype, p) {
            sa[lms_count] = p;
            lms_count += 1;
        }
    }

    let mut names = vec![EMPTY; n];
    let mut name_count = 0;
    let mut prev = None;
    for &p in &sa[..lms_count] {
        if prev.map_or(true, |q| !eq_lms_substr(s, &stype, q, p)) {
            name_count += 1;
        }
        names[p] = name_count - 1;
        prev = Some(p);
    }

    let lms: Vec<usize> = (1..n).filter(|&i| is_lms(&stype, i)).collect();
    let reduced: Vec<usize> = lms.iter().map(|&p| names[p]).collect();
    drop(names);

    debug_assert_eq!(lms.len(), lms_count);
    debug_assert!(lms_count <= n / 2 + 1);

    let mut sa1 = vec![0usize; lms_count];
    if name_count < lms_count {
        sais(&reduced, name_count, &mut sa1);
    } else {
        for (i, &c) in reduced.iter().enumerate() {
            sa1[c] = i;
        }
    }

    // put sorted LMS suffixes at their bucket tails, then induce the rest
    fill_bucket(s, &mut bucket, false);
    sa.iter_mut().for_each(|e| *e = EMPTY);
    for &r in sa1.iter().rev() {
        let p = lms[r];
        let b = &mut bucket[s[p].to_u()];
        *b -= 1;
        sa[*b] = p;
    }

    sort_l(s, &stype, &mut bucket, sa);

    sort_s(s, &stype, &mut bucket, sa);
}

/// Construct suffix array.
///
/// Runs in O(N+|Σ|) time.
/// # Arguments
/// - `s`: Input string
/// - `sa`: Output suffix array
/// # Example
/// ```
/// let s = b"abracadabra$";
///
/// let mut sa = vec![0usize; s.len()];
///
/// esa::sort::construct(s, &mut sa);
///
/// assert_eq!(sa, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// ```
#[requires(s.len() >= 2, "`s` have 2 or more characters (including sentinel)")]
#[requires(s.len() == sa.len(), "`s` and `sa` have same length")]
#[requires(s.iter().min() == s.last(), "last character is minimum")]
#[requires(s.iter().filter(|c| *c == s.last().unwrap()).count() == 1, "last character is unique")]
pub fn construct<C: Char>(s: &[C], sa: &mut [usize]) {
    let upper = s.iter().map(|c| c.to_u()).max().unwrap_or(0);
    sais(s, upper + 1, sa);
}

/// Checks that `sa` is the suffix array of `text` in O(N).
///
/// Adjacent suffixes are in order iff their first symbols are, and on a tie the suffixes one
/// symbol further in are.
pub fn verify(text: &[u8], sa: &[usize]) -> Result<()> {
    let n = text.len();
    if sa.len() != n {
        warn!("sorter returned {} entries for {} symbols", sa.len(), n);
        return Err(Error::indexing(format!(
            "sorter returned {} entries for {} symbols",
            sa.len(),
            n
        )));
    }

    let mut rank = vec![EMPTY; n];
    for (r, &p) in sa.iter().enumerate() {
        if p >= n || rank[p] != EMPTY {
            warn!("sorter output is not a permutation (rank {} -> {})", r, p);
            return Err(Error::indexing("sorter output is not a permutation"));
        }
        rank[p] = r;
    }

    for r in 1..n {
        let (a, b) = (sa[r - 1], sa[r]);
        let ordered = match text[a].cmp(&text[b]) {
            Less => true,
            Equal => a + 1 < n && b + 1 < n && rank[a + 1] < rank[b + 1],
            Greater => false,
        };
        if !ordered {
            warn!("sorter output out of order at rank {}", r);
            return Err(Error::indexing(format!(
                "suffixes at ranks {} and {} are out of order",
                r - 1,
                r
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_suffix_array_of<C: Char>(sa: &[usize], s: &[C]) -> bool {
        s.len() == sa.len()
            && (0..sa.len() - 1).all(|i| {
                sa[i] < sa.len() && sa[i + 1] < sa.len() && s[sa[i]..] < s[sa[i + 1]..]
            })
    }

    #[test]
    fn bucket_head_works() {
        let s = "abbaebabdab"
            .chars()
            .map(|c| c as u8 - b'a')
            .collect::<Vec<_>>();

        let mut bucket = vec![0usize; 5];

        fill_bucket(&s, &mut bucket, true);

        assert_eq!(bucket, vec![0, 4, 9, 9, 10]);
    }

    #[test]
    fn bucket_tail_works() {
        let s = "abbaebabdab"
            .chars()
            .map(|c| c as u8 - b'a')
            .collect::<Vec<_>>();

        let mut bucket = vec![0usize; 5];

        fill_bucket(&s, &mut bucket, false);

        assert_eq!(bucket, vec![4, 9, 9, 10, 11]);
    }

    #[test]
    fn classify_abracadabra() {
        // 012345678901
        // abracadabra$
        // SSLSLSLSSLLS
        let stype = classify(b"abracadabra$");
        let types: String = stype.iter().map(|&t| if t { 'S' } else { 'L' }).collect();
        assert_eq!(types, "SSLSLSLSSLLS");

        let lms: Vec<usize> = (0..stype.len()).filter(|&i| is_lms(&stype, i)).collect();
        assert_eq!(lms, vec![3, 5, 7, 11]);
    }

    #[test]
    fn lms_substrings_compare_by_symbols_and_types() {
        // 0123456789
        // LSLSSLSSLS
        // 2121121120
        // LMSSubstr=121,1121,1120,0
        let s: Vec<u8> = vec![2, 1, 2, 1, 1, 2, 1, 1, 2, 0];
        let stype = classify(&s);
        assert!(eq_lms_substr(&s, &stype, 1, 1));
        assert!(!eq_lms_substr(&s, &stype, 1, 3));
        assert!(!eq_lms_substr(&s, &stype, 3, 6));
        assert!(!eq_lms_substr(&s, &stype, 6, 9));
    }

    #[test]
    fn suffix_array_abracadabra() {
        let s = b"abracadabra$";
        let mut sa = vec![0usize; s.len()];
        construct(s, &mut sa);
        assert_eq!(sa, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }

    #[test]
    fn suffix_array_mmiissiippii() {
        let s = b"mmiissiissiippii$";
        let mut sa = vec![0usize; s.len()];
        construct(s, &mut sa);
        assert_eq!(
            sa,
            vec![16, 15, 14, 10, 6, 2, 11, 7, 3, 1, 0, 13, 12, 9, 5, 8, 4]
        );
    }

    #[test]
    fn sais_matches_naive() {
        let text = b"mississippi\0";
        assert_eq!(Sais::default().sort(text), NaiveSort.sort(text));
        assert_eq!(
            Sais::default().sort(text).unwrap(),
            vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]
        );
    }

    #[test]
    fn sais_rejects_over_limit() {
        let err = Sais::with_limit(4).sort(b"banana\0").unwrap_err();
        assert!(!err.is_invalid_input());
        assert!(matches!(err, Error::IndexingFailure { .. }));
    }

    #[test]
    fn sais_rejects_missing_sentinel() {
        assert!(Sais::default().sort(b"banana").is_err());
        assert!(Sais::default().sort(b"\0").is_err());
        assert!(Sais::default().sort(b"").is_err());
        assert!(Sais::default().sort(b"ba\0na\0").is_err());
    }

    #[test]
    fn verify_accepts_sorted() {
        let text = b"banana\0";
        assert_eq!(verify(text, &[6, 5, 3, 1, 0, 4, 2]), Ok(()));
    }

    #[test]
    fn verify_rejects_bad_output() {
        let text = b"banana\0";
        // wrong length
        assert!(verify(text, &[6, 5, 3, 1, 0, 4]).is_err());
        // repeated offset
        assert!(verify(text, &[6, 5, 3, 3, 0, 4, 2]).is_err());
        // out of range offset
        assert!(verify(text, &[6, 5, 3, 1, 0, 4, 7]).is_err());
        // "anana" before "ana"
        assert!(verify(text, &[6, 5, 1, 3, 0, 4, 2]).is_err());
    }

    use proptest::collection::*;
    use proptest::prelude::*;

    const UNARY: std::ops::Range<u8> = 1..2;
    const BINARY: std::ops::Range<u8> = 1..3;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]
        #[test]
        fn suffix_array_unary(mut s in vec(UNARY, 1..(u8::MAX as usize))) {
            s.push(0u8);
            let sa = Sais::default().sort(&s).unwrap();
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn suffix_array_binary(mut s in vec(BINARY, 1..(u8::MAX as usize))) {
            s.push(0u8);
            let sa = Sais::default().sort(&s).unwrap();
            prop_assert!(is_suffix_array_of(&sa, &s));
            prop_assert_eq!(verify(&s, &sa), Ok(()));
        }

        #[test]
        fn suffix_array_u8(mut s in vec(1u8..=u8::MAX, 1..1024)) {
            s.push(0u8);
            let sa = Sais::default().sort(&s).unwrap();
            prop_assert_eq!(&sa, &NaiveSort.sort(&s).unwrap());
        }

        #[test]
        fn suffix_array_short(mut s in vec(1u8..=u8::MAX, 1..=1)) {
            s.push(0u8);
            prop_assert_eq!(Sais::default().sort(&s).unwrap(), vec![1, 0]);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]
        #[test]
        fn suffix_array_u32(mut s in vec(1u32..=1_000_000u32, 1..(u8::MAX as usize))) {
            s.push(0u32);
            let mut sa = vec![0usize; s.len()];
            construct(&s, &mut sa);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn suffix_array_u16(mut s in vec(1u16..=u16::MAX, 1..(u8::MAX as usize))) {
            s.push(0u16);
            let mut sa = vec![0usize; s.len()];
            construct(&s, &mut sa);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        // one bucket per symbol value up to the maximum, so keep the alphabet small
        #[cfg(target_pointer_width = "64")]
        #[test]
        fn suffix_array_u64(mut s in vec(1u64..=1000u64, 1..(u8::MAX as usize))) {
            s.push(0u64);
            let mut sa = vec![0usize; s.len()];
            construct(&s, &mut sa);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }
    }

    #[test]
    fn wide_symbols_sort_like_bytes() {
        let bytes = b"mmiissiissiippii\0";
        let wide: Vec<u16> = bytes.iter().map(|&b| b as u16 * 257).collect();
        let mut sa = vec![0usize; wide.len()];
        construct(&wide, &mut sa);
        assert_eq!(sa, NaiveSort.sort(bytes).unwrap());
    }

    #[test]
    fn regression1() {
        // 012345678901
        // LSLSSLSSLSLS
        // 212112112120
        //             L    S    S   L S
        // LMSSubstr=121,1121,1121,120,0
        // The LMS substrings at 3 and 6 are equal, so they share a name and the reduced
        // string [3, 1, 1, 2, 0] has to be sorted by a recursive call.
        let s: Vec<u8> = vec![2, 1, 2, 1, 1, 2, 1, 1, 2, 1, 2, 0];
        let mut sa = vec![0usize; s.len()];
        construct(&s, &mut sa);
        assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    fn regression2() {
        // LMS positions 1, 3, 9, 13, 17, 22, 24, 28. The substrings "121" at 1 and 22 tie,
        // so the reduced string [3, 6, 1, 5, 2, 3, 4, 0] is sorted by a recursive call.
        let s: Vec<u8> = vec![
            2, 1, 2, 1, 2, 2, 2, 2, 2, 1, 1, 1, 2, 1, 2, 2, 2, 1, 1, 1, 2, 2, 1, 2, 1, 2, 1, 1, 0,
        ];
        let mut sa = vec![0usize; s.len()];
        construct(&s, &mut sa);
        assert!(is_suffix_array_of(&sa, &s));
    }

    #[test]
    #[should_panic]
    fn no_sentinel() {
        // the last symbol must be the unique minimum
        let s = vec![2u8, 1, 2, 2];
        let mut sa = vec![0usize; s.len()];
        construct(&s, &mut sa);
    }

    #[test]
    #[should_panic]
    fn empty_string() {
        // a lone sentinel has no suffix to sort against
        let s = vec![0u8];
        let mut sa = vec![0usize; s.len()];
        construct(&s, &mut sa);
    }
}
