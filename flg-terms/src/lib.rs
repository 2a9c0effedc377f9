//! # flg-terms
//!
//! Immutable, structurally shared first-order terms for a Datalog-style
//! rule engine.
//!
//! A [`Term`] is either *boxed*, wrapping a single scalar (`i32`, `i64`,
//! `f32`, `f64` or a string), or *complex*, a functor [`Symbol`] applied to
//! a fixed number of child terms.  Children are reference-counted handles,
//! so one subterm can sit under many parents without being copied.  Terms
//! are matched through [`Term::view`], which yields an exhaustive [`View`].
//!
//! Terms are totally ordered (see [`compare`]): tags first, then scalars or
//! children left to right, with a process-wide minimum and maximum term
//! bounding everything.  Comparison, hashing, printing and dropping all walk
//! terms with explicit heap stacks, so arbitrarily deep terms are safe.
//!
//! ## Example
//! ```rust
//! use flg_terms::{SymbolTable, Term, View};
//! use std::collections::BTreeSet;
//!
//! let mut symbols = SymbolTable::new();
//! let edge = symbols.intern("edge", 2).unwrap();
//!
//! // the same node shared by two facts
//! let a = Term::str("a");
//! let e1 = symbols.func(edge, [a.clone(), Term::i32(1)]).unwrap();
//! let e2 = symbols.func(edge, [a.clone(), Term::i32(2)]).unwrap();
//! assert!(e1 < e2);
//!
//! let facts: BTreeSet<Term> = [e2.clone(), e1.clone(), e2.shallow_copy()].into_iter().collect();
//! assert_eq!(facts.len(), 2);
//!
//! if let View::Func(sym, args) = e1.view() {
//!     assert_eq!(symbols.name(sym), Some("edge"));
//!     assert!(Term::ptr_eq(&args[0], &a));
//! }
//! assert_eq!(symbols.display(&e1).to_string(), r#"edge("a", 1)"#);
//! ```
//!
//! ## License
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0 or
//! (at your option) any later version (LGPL-3.0-or-later).

mod compare;
mod display;
mod error;
mod sample;
mod symbol;
mod term;
mod view;

pub use compare::compare;
pub use display::TermDisplay;
pub use error::TermError;
pub use sample::{SamplerConfig, TermSampler};
pub use symbol::{Symbol, SymbolTable};
pub use term::Term;
pub use view::View;
