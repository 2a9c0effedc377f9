//! Defines [`TermError`], the unified error type for term operations.
//!
//! Provides descriptive error variants for arity disagreements, misuse of
//! boxed or reserved symbols, symbol-table conflicts and shape mismatches.

use crate::Symbol;
use smartstring::alias::String;
use thiserror::Error;

/// Represents all contract violations detected while building or
/// inspecting terms.
///
/// Every fallible operation in this crate returns `Result<_, TermError>`,
/// so callers can propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("Arity mismatch for {symbol}: expected {expected}, found {found}")]
    ArityMismatch {
        symbol: Symbol,
        expected: usize,
        found: usize,
    },

    #[error("Symbol {0} is boxed and cannot head a complex term")]
    BoxedSymbol(Symbol),

    #[error("Reserved symbol {0}")]
    ReservedSymbol(String),

    #[error("Symbol {name} already declared with arity {existing}, requested {requested}")]
    ArityConflict {
        name: String,
        existing: usize,
        requested: usize,
    },

    #[error("Unknown symbol {0}")]
    UnknownSymbol(Symbol),

    #[error("Symbol table is full")]
    SymbolTableFull,

    #[error("Type mismatch: expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}
