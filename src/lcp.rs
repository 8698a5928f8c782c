//! LCP array construction after Kasai et al., *Linear-Time Longest-Common-Prefix Computation
//! in Suffix Arrays and Its Applications* (2001).
use contracts::*;

/// Build the LCP array of `text` from its suffix array.
///
/// `lcp[0] == -1` since the first suffix has no predecessor; `lcp[i]` is the length of the
/// common prefix of suffixes `sa[i-1]` and `sa[i]`.
///
/// Offsets are visited in text order so the match length carried from offset `i` to `i + 1`
/// drops by at most one, which bounds the total number of symbol comparisons by 2N.
#[debug_requires(text.len() == sa.len(), "`text` and `sa` have same length")]
#[debug_ensures(ret.len() == sa.len())]
#[debug_ensures(ret.first().map_or(true, |&l| l == -1))]
pub fn build(text: &[u8], sa: &[usize]) -> Vec<isize> {
    let n = text.len();
    let mut lcp = vec![0isize; n];
    if n == 0 {
        return lcp;
    }

    let mut rank = vec![0usize; n];
    for (j, &i) in sa.iter().enumerate() {
        rank[i] = j;
    }

    lcp[0] = -1;
    let mut l = 0;
    for i in 0..n {
        let j = rank[i];
        if j == 0 {
            continue;
        }

        let k = sa[j - 1];
        while k + l < n && i + l < n && text[k + l] == text[i + l] {
            l += 1;
        }
        lcp[j] = l as isize;
        l = l.saturating_sub(1);
    }

    lcp
}
