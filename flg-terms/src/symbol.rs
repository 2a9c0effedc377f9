//! Defines [`Symbol`], the discriminant carried by every term, and the
//! [`SymbolTable`] that names user symbols and fixes their arity.
//!
//! Symbols are totally ordered by their numeric id.  The id space is laid
//! out so that the two sentinels bound everything else:
//!
//! ```text
//! MIN_TERM < boxed tags < built-in constructors < user symbols < MAX_TERM
//! ```

use crate::{Term, TermError};
use core::fmt;
use indexmap::IndexMap;
use smartstring::alias::String;

/// An opaque, copyable term tag.
///
/// The ordering of symbols is the ordering of their ids, which is what the
/// comparator uses to order terms with different heads.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

/// Names and arities of the reserved symbols, indexed by id.  Boxed tags
/// and sentinels have no arity.
const BUILTINS: [(&str, Option<usize>); 15] = [
    ("min_term", None),
    ("boxed_i32", None),
    ("boxed_i64", None),
    ("boxed_fp32", None),
    ("boxed_fp64", None),
    ("boxed_string", None),
    ("nil", Some(0)),
    ("cons", Some(2)),
    ("none", Some(0)),
    ("some", Some(1)),
    ("true", Some(0)),
    ("false", Some(0)),
    ("cmp_lt", Some(0)),
    ("cmp_eq", Some(0)),
    ("cmp_gt", Some(0)),
];

impl Symbol {
    /// Global minimum; only the [`Term::min_term`] sentinel carries it.
    pub const MIN_TERM: Symbol = Symbol(0);
    pub const BOXED_I32: Symbol = Symbol(1);
    pub const BOXED_I64: Symbol = Symbol(2);
    pub const BOXED_FP32: Symbol = Symbol(3);
    pub const BOXED_FP64: Symbol = Symbol(4);
    pub const BOXED_STRING: Symbol = Symbol(5);
    pub const NIL: Symbol = Symbol(6);
    pub const CONS: Symbol = Symbol(7);
    pub const NONE: Symbol = Symbol(8);
    pub const SOME: Symbol = Symbol(9);
    pub const TRUE: Symbol = Symbol(10);
    pub const FALSE: Symbol = Symbol(11);
    pub const CMP_LT: Symbol = Symbol(12);
    pub const CMP_EQ: Symbol = Symbol(13);
    pub const CMP_GT: Symbol = Symbol(14);
    /// Global maximum; only the [`Term::max_term`] sentinel carries it.
    pub const MAX_TERM: Symbol = Symbol(u32::MAX);

    /// First id handed out by a [`SymbolTable`].
    pub(crate) const FIRST_USER: u32 = BUILTINS.len() as u32;

    /// Returns the raw id.
    #[inline]
    pub fn id(self) -> u32 {
        self.0
    }

    /// Returns `true` for the five tags bound to a scalar payload.
    #[inline]
    pub fn is_boxed(self) -> bool {
        (Self::BOXED_I32.0..=Self::BOXED_STRING.0).contains(&self.0)
    }

    /// Returns `true` for [`Symbol::MIN_TERM`] and [`Symbol::MAX_TERM`].
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self == Self::MIN_TERM || self == Self::MAX_TERM
    }

    /// Returns `true` for symbols defined by this crate rather than a table.
    #[inline]
    pub fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_USER || self == Self::MAX_TERM
    }

    /// Returns the fixed name of a built-in symbol.
    pub fn builtin_name(self) -> Option<&'static str> {
        if self == Self::MAX_TERM {
            return Some("max_term");
        }
        BUILTINS.get(self.0 as usize).map(|(name, _)| *name)
    }

    /// Returns the fixed arity of a built-in constructor symbol.
    pub fn builtin_arity(self) -> Option<usize> {
        BUILTINS.get(self.0 as usize).and_then(|(_, arity)| *arity)
    }

    fn builtin_by_name(name: &str) -> Option<Symbol> {
        if name == "max_term" {
            return Some(Self::MAX_TERM);
        }
        BUILTINS
            .iter()
            .position(|(n, _)| *n == name)
            .map(|i| Symbol(i as u32))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.builtin_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "sym#{}", self.0),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({self})")
    }
}

/// Registry of user-defined functor symbols.
///
/// Each name is bound to exactly one arity, which keeps the invariant that
/// two complex terms with the same head have the same number of children.
/// Symbols are numbered in registration order, so that order is also their
/// sort order.
///
/// ### Example
/// ```rust
/// use flg_terms::{SymbolTable, Term};
/// let mut symbols = SymbolTable::new();
/// let edge = symbols.intern("edge", 2).unwrap();
/// let t = symbols.func(edge, [Term::i32(1), Term::i32(2)]).unwrap();
/// assert_eq!(symbols.display(&t).to_string(), "edge(1, 2)");
/// ```
#[derive(Default, Clone, Debug)]
pub struct SymbolTable {
    /// Name to arity, in registration order.
    user: IndexMap<String, usize>,
}

impl SymbolTable {
    /// Create a table knowing only the built-in symbols.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with room for `capacity` user symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            user: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of user symbols.
    pub fn len(&self) -> usize {
        self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty()
    }

    /// Return the symbol for `name`, registering it with `arity` if needed.
    ///
    /// Built-in constructor names resolve to their built-in symbol when the
    /// arity agrees.  Sentinel and boxed names cannot be interned.
    pub fn intern(&mut self, name: impl AsRef<str>, arity: usize) -> Result<Symbol, TermError> {
        let name = name.as_ref();
        if let Some(sym) = Symbol::builtin_by_name(name) {
            return match sym.builtin_arity() {
                Some(existing) if existing == arity => Ok(sym),
                Some(existing) => Err(TermError::ArityConflict {
                    name: name.into(),
                    existing,
                    requested: arity,
                }),
                None => Err(TermError::ReservedSymbol(name.into())),
            };
        }
        if let Some((index, _, &existing)) = self.user.get_full(name) {
            if existing != arity {
                return Err(TermError::ArityConflict {
                    name: name.into(),
                    existing,
                    requested: arity,
                });
            }
            return Ok(Symbol(Symbol::FIRST_USER + index as u32));
        }
        let id = Symbol::FIRST_USER as usize + self.user.len();
        if id >= Symbol::MAX_TERM.0 as usize {
            return Err(TermError::SymbolTableFull);
        }
        self.user.insert(name.into(), arity);
        log::trace!("interned symbol {name}/{arity} as #{id}");
        Ok(Symbol(id as u32))
    }

    /// Find a symbol by name without registering it.
    pub fn lookup(&self, name: impl AsRef<str>) -> Option<Symbol> {
        let name = name.as_ref();
        Symbol::builtin_by_name(name).or_else(|| {
            self.user
                .get_index_of(name)
                .map(|i| Symbol(Symbol::FIRST_USER + i as u32))
        })
    }

    /// Display name of `sym`, if it is built-in or registered here.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        if let Some(name) = sym.builtin_name() {
            return Some(name);
        }
        self.user_entry(sym).map(|(name, _)| name.as_str())
    }

    /// Arity of a complex symbol.  Returns `None` for boxed tags and for
    /// symbols this table does not know.
    pub fn arity(&self, sym: Symbol) -> Option<usize> {
        if sym.is_sentinel() {
            return Some(0);
        }
        if sym.is_builtin() {
            return sym.builtin_arity();
        }
        self.user_entry(sym).map(|(_, arity)| *arity)
    }

    /// Iterate over user symbols in registration (and sort) order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str, usize)> + '_ {
        self.user
            .iter()
            .enumerate()
            .map(|(i, (name, arity))| (Symbol(Symbol::FIRST_USER + i as u32), name.as_str(), *arity))
    }

    /// Build a complex term headed by `sym`, using the arity this table
    /// records for it.
    pub fn func(&self, sym: Symbol, args: impl IntoIterator<Item = Term>) -> Result<Term, TermError> {
        if sym.is_boxed() {
            return Err(TermError::BoxedSymbol(sym));
        }
        let arity = self.arity(sym).ok_or(TermError::UnknownSymbol(sym))?;
        Term::complex(sym, arity, args)
    }

    /// Build the atom headed by `sym`; fails unless `sym` has arity 0.
    #[inline]
    pub fn atom(&self, sym: Symbol) -> Result<Term, TermError> {
        self.func(sym, [])
    }

    fn user_entry(&self, sym: Symbol) -> Option<(&String, &usize)> {
        let index = sym.0.checked_sub(Symbol::FIRST_USER)?;
        self.user.get_index(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_bound_every_symbol() {
        let mut symbols = SymbolTable::new();
        let f = symbols.intern("f", 1).unwrap();
        for sym in [Symbol::BOXED_I32, Symbol::BOXED_STRING, Symbol::CONS, Symbol::CMP_GT, f] {
            assert!(Symbol::MIN_TERM < sym);
            assert!(sym < Symbol::MAX_TERM);
        }
    }

    #[test]
    fn boxed_partition() {
        let boxed = [
            Symbol::BOXED_I32,
            Symbol::BOXED_I64,
            Symbol::BOXED_FP32,
            Symbol::BOXED_FP64,
            Symbol::BOXED_STRING,
        ];
        assert!(boxed.iter().all(|s| s.is_boxed()));
        assert!(!Symbol::MIN_TERM.is_boxed());
        assert!(!Symbol::MAX_TERM.is_boxed());
        assert!(!Symbol::NIL.is_boxed());
        assert!(!Symbol::CMP_GT.is_boxed());
    }

    #[test]
    fn intern_is_idempotent_and_ordered() {
        let mut symbols = SymbolTable::new();
        let a = symbols.intern("edge", 2).unwrap();
        let b = symbols.intern("path", 2).unwrap();
        assert_eq!(symbols.intern("edge", 2).unwrap(), a);
        assert!(a < b);
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols.lookup("path"), Some(b));
        assert_eq!(symbols.lookup("missing"), None);
        assert_eq!(symbols.name(a), Some("edge"));
        assert_eq!(symbols.arity(b), Some(2));
        let listed: Vec<_> = symbols.iter().map(|(s, n, k)| (s, n.to_owned(), k)).collect();
        assert_eq!(listed, vec![(a, "edge".to_owned(), 2), (b, "path".to_owned(), 2)]);
    }

    #[test]
    fn intern_rejects_arity_conflicts() {
        let mut symbols = SymbolTable::new();
        symbols.intern("f", 1).unwrap();
        assert_eq!(
            symbols.intern("f", 2),
            Err(TermError::ArityConflict {
                name: "f".into(),
                existing: 1,
                requested: 2
            })
        );
        assert!(matches!(
            symbols.intern("cons", 3),
            Err(TermError::ArityConflict { existing: 2, .. })
        ));
    }

    #[test]
    fn builtins_resolve_by_name() {
        let mut symbols = SymbolTable::new();
        assert_eq!(symbols.intern("cons", 2), Ok(Symbol::CONS));
        assert_eq!(symbols.intern("nil", 0), Ok(Symbol::NIL));
        assert_eq!(symbols.lookup("some"), Some(Symbol::SOME));
        assert!(symbols.is_empty());
    }

    #[test]
    fn reserved_names_cannot_be_interned() {
        let mut symbols = SymbolTable::new();
        for name in ["min_term", "max_term", "boxed_i32", "boxed_string"] {
            assert!(matches!(
                symbols.intern(name, 0),
                Err(TermError::ReservedSymbol(_))
            ));
        }
    }

    #[test]
    fn names_and_arities_of_builtins() {
        let symbols = SymbolTable::new();
        assert_eq!(symbols.name(Symbol::MIN_TERM), Some("min_term"));
        assert_eq!(symbols.name(Symbol::MAX_TERM), Some("max_term"));
        assert_eq!(symbols.name(Symbol::BOXED_FP64), Some("boxed_fp64"));
        assert_eq!(symbols.arity(Symbol::BOXED_FP64), None);
        assert_eq!(symbols.arity(Symbol::CONS), Some(2));
        assert_eq!(symbols.arity(Symbol::MAX_TERM), Some(0));
        assert_eq!(symbols.name(Symbol(1000)), None);
        assert_eq!(Symbol(1000).to_string(), "sym#1000");
    }

    #[test]
    fn func_checks_registered_arity() {
        let mut symbols = SymbolTable::new();
        let f = symbols.intern("f", 2).unwrap();
        assert!(symbols.func(f, [Term::i32(1), Term::i32(2)]).is_ok());
        assert_eq!(
            symbols.func(f, [Term::i32(1)]).unwrap_err(),
            TermError::ArityMismatch {
                symbol: f,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            symbols.func(Symbol(5000), []).unwrap_err(),
            TermError::UnknownSymbol(Symbol(5000))
        );
        assert_eq!(
            symbols.func(Symbol::BOXED_I32, []).unwrap_err(),
            TermError::BoxedSymbol(Symbol::BOXED_I32)
        );
    }

    #[test]
    fn atom_requires_zero_arity() {
        let mut symbols = SymbolTable::new();
        let foo = symbols.intern("foo", 0).unwrap();
        let f = symbols.intern("f", 1).unwrap();
        assert_eq!(symbols.atom(foo).unwrap().arity(), 0);
        assert_eq!(symbols.atom(Symbol::NIL).unwrap(), Term::nil());
        assert_eq!(
            symbols.atom(f).unwrap_err(),
            TermError::ArityMismatch {
                symbol: f,
                expected: 1,
                found: 0
            }
        );
        assert!(matches!(
            symbols.atom(Symbol::MAX_TERM),
            Err(TermError::ReservedSymbol(_))
        ));
    }
}
