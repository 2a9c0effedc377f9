//! Defines [`View`], a borrowed read-only representation of a [`Term`].
//!
//! Matching on a view is the only way to reach a term's payload, and the
//! match is exhaustive, so a boxed payload can never be read as children or
//! the other way round.

use crate::{term::Node, Symbol, Term};

/// A borrowed view into the contents of a [`Term`].
///
/// Use [`Term::view`] to obtain a view.  Boxed variants copy their scalar
/// out; strings and children are borrowed from the term.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// A boxed 32 bit integer.
    I32(i32),
    /// A boxed 64 bit integer.
    I64(i64),
    /// A boxed 32 bit float.
    F32(f32),
    /// A boxed 64 bit float.
    F64(f64),
    /// A boxed UTF‑8 string.
    Str(&'a str),
    /// A complex term: its head and children.  Atoms and the sentinels
    /// have an empty child slice.
    Func(Symbol, &'a [Term]),
}

impl View<'_> {
    /// The tag of the viewed term.
    pub fn sym(&self) -> Symbol {
        match self {
            View::I32(_) => Symbol::BOXED_I32,
            View::I64(_) => Symbol::BOXED_I64,
            View::F32(_) => Symbol::BOXED_FP32,
            View::F64(_) => Symbol::BOXED_FP64,
            View::Str(_) => Symbol::BOXED_STRING,
            View::Func(sym, _) => *sym,
        }
    }
}

impl Term {
    /// Produce a [`View`] of this term.
    #[inline]
    pub fn view(&self) -> View<'_> {
        match &*self.0 {
            Node::I32(v) => View::I32(*v),
            Node::I64(v) => View::I64(*v),
            Node::F32(v) => View::F32(*v),
            Node::F64(v) => View::F64(*v),
            Node::Str(s) => View::Str(s.as_str()),
            Node::Func(sym, args) => View::Func(*sym, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolTable;

    #[test]
    fn view_matches_constructor() {
        assert!(matches!(Term::i32(-4).view(), View::I32(-4)));
        assert!(matches!(Term::i64(1 << 40).view(), View::I64(v) if v == 1 << 40));
        assert!(matches!(Term::f32(1.5).view(), View::F32(v) if v == 1.5));
        assert!(matches!(Term::f64(-2.5).view(), View::F64(v) if v == -2.5));
        assert!(matches!(Term::str("héllo").view(), View::Str("héllo")));
    }

    #[test]
    fn view_of_complex_borrows_children() {
        let mut symbols = SymbolTable::new();
        let f = symbols.intern("f", 2).unwrap();
        let a = Term::i32(1);
        let t = symbols.func(f, [a.clone(), Term::nil()]).unwrap();
        match t.view() {
            View::Func(sym, args) => {
                assert_eq!(sym, f);
                assert_eq!(args.len(), 2);
                assert!(Term::ptr_eq(&args[0], &a));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn view_sym_agrees_with_term_sym() {
        let terms = [
            Term::i32(0),
            Term::i64(0),
            Term::f32(0.0),
            Term::f64(0.0),
            Term::str(""),
            Term::nil(),
            Term::min_term(),
            Term::max_term(),
        ];
        for t in &terms {
            assert_eq!(t.view().sym(), t.sym());
        }
    }

    #[test]
    fn sentinel_views_have_no_children() {
        assert!(matches!(Term::min_term().view(), View::Func(Symbol::MIN_TERM, [])));
        assert!(matches!(Term::max_term().view(), View::Func(Symbol::MAX_TERM, [])));
    }
}
