//! Defines [`TermDisplay`], a formatter for rendering [`Term`] values.
//!
//! Boxed numbers print their native literal form, strings print between
//! double quotes, and complex terms print as `name(arg, ...)`, with the
//! parentheses dropped for atoms.  Rendering walks the term with an explicit
//! stack, so deeply nested terms print without recursion.

use crate::{Symbol, SymbolTable, Term, View};
use once_cell::sync::Lazy;
use std::fmt;

/// Table with no user symbols, used where no table is at hand.
static BUILTIN_SYMBOLS: Lazy<SymbolTable> = Lazy::new(SymbolTable::new);

/// A wrapper that ties together a [`Term`] and the [`SymbolTable`] naming
/// its functors.
///
/// It implements [`fmt::Display`], so it works with `format!`, `println!`
/// and friends.
///
/// ### Example
/// ```rust
/// use flg_terms::{SymbolTable, Term};
/// let mut symbols = SymbolTable::new();
/// let f = symbols.intern("f", 2).unwrap();
/// let t = symbols.func(f, [Term::str("a"), Term::str("b")]).unwrap();
/// assert_eq!(t.display(&symbols).to_string(), r#"f("a", "b")"#);
/// ```
///
/// Construct instances via [`Term::display`] or [`SymbolTable::display`].
pub struct TermDisplay<'a> {
    /// The term to display.
    term: &'a Term,
    /// Names for the term's functors.
    symbols: &'a SymbolTable,
}

impl Term {
    /// Return a [`TermDisplay`] suitable for formatting with [`fmt::Display`].
    #[inline]
    pub fn display<'a>(&'a self, symbols: &'a SymbolTable) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            symbols,
        }
    }
}

impl SymbolTable {
    /// Return a [`TermDisplay`] naming functors from this table.
    #[inline]
    pub fn display<'a>(&'a self, term: &'a Term) -> TermDisplay<'a> {
        term.display(self)
    }
}

/// Display using only built-in symbol names.
pub(crate) fn display_builtin(term: &Term) -> TermDisplay<'_> {
    term.display(&BUILTIN_SYMBOLS)
}

enum Step<'a> {
    Term(&'a Term),
    Text(&'static str),
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_symbol(f: &mut fmt::Formatter<'_>, symbols: &SymbolTable, sym: Symbol) -> fmt::Result {
            match symbols.name(sym) {
                Some(name) => f.write_str(name),
                None => write!(f, "{sym}"),
            }
        }

        let mut stack = vec![Step::Term(self.term)];
        while let Some(step) = stack.pop() {
            let term = match step {
                Step::Text(s) => {
                    f.write_str(s)?;
                    continue;
                }
                Step::Term(term) => term,
            };
            match term.view() {
                View::I32(v) => write!(f, "{v}")?,
                View::I64(v) => write!(f, "{v}")?,
                View::F32(v) => write!(f, "{v}")?,
                View::F64(v) => write!(f, "{v}")?,
                View::Str(s) => write!(f, "\"{s}\"")?,
                View::Func(sym, args) => {
                    write_symbol(f, self.symbols, sym)?;
                    if !args.is_empty() {
                        f.write_str("(")?;
                        stack.push(Step::Text(")"));
                        for (i, arg) in args.iter().enumerate().rev() {
                            stack.push(Step::Term(arg));
                            if i > 0 {
                                stack.push(Step::Text(", "));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
