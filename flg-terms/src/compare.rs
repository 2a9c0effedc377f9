//! Structural total order over [`Term`]s.
//!
//! Terms are ordered by tag first; equal boxed tags compare their scalars
//! and equal complex tags compare arity, then children left to right.  The walk keeps
//! its pending pairs on a heap-allocated stack, so term depth never turns
//! into native stack depth, and pairs that are the same shared instance are
//! skipped without looking inside.

use crate::{term::Node, Term};
use core::hash::{Hash, Hasher};
use std::cmp::Ordering;

/// Counters describing one comparison walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CompareStats {
    /// Pairs whose contents were inspected.
    pub(crate) inspected: usize,
    /// Pairs skipped because both sides were the same instance.
    pub(crate) shared: usize,
}

/// Compare two terms under the structural total order.
///
/// ```rust
/// use flg_terms::{compare, Term};
/// use std::cmp::Ordering;
/// assert_eq!(compare(&Term::str("apple"), &Term::str("banana")), Ordering::Less);
/// assert_eq!(compare(&Term::min_term(), &Term::i32(i32::MIN)), Ordering::Less);
/// ```
#[inline]
pub fn compare(a: &Term, b: &Term) -> Ordering {
    compare_with_stats(a, b).0
}

pub(crate) fn compare_with_stats(a: &Term, b: &Term) -> (Ordering, CompareStats) {
    let mut stats = CompareStats::default();
    let mut work: Vec<(&Term, &Term)> = vec![(a, b)];
    while let Some((x, y)) = work.pop() {
        if Term::ptr_eq(x, y) {
            stats.shared += 1;
            continue;
        }
        stats.inspected += 1;
        let ord = x.sym().cmp(&y.sym());
        if ord != Ordering::Equal {
            return (ord, stats);
        }
        let ord = match (&*x.0, &*y.0) {
            (Node::I32(p), Node::I32(q)) => p.cmp(q),
            (Node::I64(p), Node::I64(q)) => p.cmp(q),
            (Node::F32(p), Node::F32(q)) => p.total_cmp(q),
            (Node::F64(p), Node::F64(q)) => p.total_cmp(q),
            (Node::Str(p), Node::Str(q)) => p.as_bytes().cmp(q.as_bytes()),
            (Node::Func(_, xs), Node::Func(_, ys)) => {
                let ord = xs.len().cmp(&ys.len());
                if ord == Ordering::Equal {
                    // Reversed so that the first child is popped first.
                    work.extend(xs.iter().zip(ys.iter()).rev());
                }
                ord
            }
            _ => unreachable!("terms with equal tags have the same shape"),
        };
        if ord != Ordering::Equal {
            return (ord, stats);
        }
    }
    (Ordering::Equal, stats)
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Term {}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

/// Hashes the structure of the term, consistently with [`Eq`]: floats hash
/// their bit pattern, which is exactly what `total_cmp` distinguishes.
impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut work: Vec<&Term> = vec![self];
        while let Some(t) = work.pop() {
            t.sym().hash(state);
            match &*t.0 {
                Node::I32(v) => v.hash(state),
                Node::I64(v) => v.hash(state),
                Node::F32(v) => v.to_bits().hash(state),
                Node::F64(v) => v.to_bits().hash(state),
                Node::Str(s) => s.as_str().hash(state),
                Node::Func(_, args) => {
                    args.len().hash(state);
                    work.extend(args.iter().rev());
                }
            }
        }
    }
}
