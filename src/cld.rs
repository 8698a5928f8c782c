//! Child table construction after Abouelhoda, Kurtz and Ohlebusch, *Replacing suffix trees
//! with enhanced suffix arrays* (2004).
//!
//! One table packs three kinds of links:
//! - down: `cld[i]` at the left boundary `i` of an interval is the first l-index of its
//!   children.
//! - next l-index: `cld[i]` at an l-index `i` is the parent's following l-index, which
//!   chains the children left to right.
//! - up: `cld[j]` at the right boundary `j` of an interval is its first l-index, stored on
//!   behalf of position `j + 1`.
use contracts::*;

#[inline]
fn lcp_at(lcp: &[isize], i: usize) -> isize {
    // lcp[n] = -1
    lcp.get(i).copied().unwrap_or(-1)
}

/// Build the child table of an LCP array.
///
/// The result has one more slot than `lcp`; `cld[0]` marks the right end of the root.
#[debug_requires(lcp.first().map_or(true, |&l| l == -1), "`lcp` starts with -1")]
#[debug_ensures(ret.len() == lcp.len() + 1)]
pub fn build(lcp: &[isize]) -> Vec<usize> {
    let n = lcp.len();
    let mut cld = vec![0usize; n + 1];
    cld[0] = n;

    // (index, lcp value)
    let mut stack: Vec<(usize, isize)> = Vec::with_capacity(64);
    stack.push((0, -1));

    for i in 1..=n {
        let li = lcp_at(lcp, i);

        while li < top(&stack).1 {
            let mut last = pop(&mut stack);

            // same-depth siblings: link each l-index to the next
            while top(&stack).1 == last.1 {
                cld[top(&stack).0] = last.0;
                last = pop(&mut stack);
            }

            if li < top(&stack).1 {
                cld[top(&stack).0] = last.0;
            } else {
                cld[i - 1] = last.0;
            }
        }

        stack.push((i, li));
    }

    cld
}

// The (0, -1) bottom record is never popped: no lcp value is below -1.
#[inline]
fn top(stack: &[(usize, isize)]) -> (usize, isize) {
    stack[stack.len() - 1]
}

#[inline]
fn pop(stack: &mut Vec<(usize, isize)>) -> (usize, isize) {
    match stack.pop() {
        Some(e) => e,
        None => unreachable!("child table stack underflow"),
    }
}
