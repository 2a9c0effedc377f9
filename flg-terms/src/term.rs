//! Defines the core [`Term`] type and related constructors.
//!
//! A term is an immutable, reference-counted node.  Cloning a [`Term`]
//! shares the node, so a child may sit under any number of parents.
//! Dropping the last handle to a deep term releases it iteratively.

use crate::{Symbol, TermError, View};
use core::{fmt, mem};
use once_cell::sync::Lazy;
use smartstring::alias::String;
use std::cmp::Ordering;
use std::sync::Arc;

/// Internal node describing the shape of a term and storing its data.
///
/// Boxed variants carry their scalar directly; their tag is implied by the
/// variant, so a boxed tag can never be paired with the wrong payload.
/// `Func` covers every complex term, including atoms and the sentinels.
pub(crate) enum Node {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Func(Symbol, Box<[Term]>),
}

/// A cheap-to-clone handle to an immutable term.
///
/// Use the associated constructors to build terms and [`Term::view`] to
/// match on their shape.  Equality, ordering and hashing are structural
/// (see the `compare` module); `Clone` shares the underlying node.
#[derive(Clone)]
pub struct Term(pub(crate) Arc<Node>);

static MIN: Lazy<Term> = Lazy::new(|| Term::func_unchecked(Symbol::MIN_TERM, Vec::new()));
static MAX: Lazy<Term> = Lazy::new(|| Term::func_unchecked(Symbol::MAX_TERM, Vec::new()));

macro_rules! impl_from_scalars_for_term {
    ($($t:ty => $ctor:ident),* $(,)?) => {$(
        impl From<$t> for Term {
            #[inline]
            fn from(v: $t) -> Self { Term::$ctor(v) }
        }
    )*};
}
impl_from_scalars_for_term!(i32 => i32, i64 => i64, f32 => f32, f64 => f64);

impl From<&str> for Term {
    #[inline]
    fn from(s: &str) -> Self {
        Term::str(s)
    }
}

impl From<std::string::String> for Term {
    #[inline]
    fn from(s: std::string::String) -> Self {
        Term::str(s)
    }
}

impl From<String> for Term {
    #[inline]
    fn from(s: String) -> Self {
        Self(Arc::new(Node::Str(s)))
    }
}

impl From<bool> for Term {
    #[inline]
    fn from(b: bool) -> Self {
        Term::bool(b)
    }
}

impl Term {
    /// Construct a boxed 32 bit integer.
    #[inline]
    pub fn i32(v: i32) -> Self {
        Self(Arc::new(Node::I32(v)))
    }

    /// Construct a boxed 64 bit integer.
    #[inline]
    pub fn i64(v: i64) -> Self {
        Self(Arc::new(Node::I64(v)))
    }

    /// Construct a boxed 32 bit float.
    #[inline]
    pub fn f32(v: f32) -> Self {
        Self(Arc::new(Node::F32(v)))
    }

    /// Construct a boxed 64 bit float.
    #[inline]
    pub fn f64(v: f64) -> Self {
        Self(Arc::new(Node::F64(v)))
    }

    /// Construct a boxed UTF‑8 string.
    #[inline]
    pub fn str(s: impl AsRef<str>) -> Self {
        Self(Arc::new(Node::Str(s.as_ref().into())))
    }

    /// Construct a complex term headed by `sym` with exactly `arity`
    /// children.
    ///
    /// Fails if the children do not number `arity`, if `sym` is a built-in
    /// constructor with a different fixed arity, if `sym` is a boxed tag,
    /// or if `sym` is one of the sentinels (those terms are singletons, see
    /// [`Term::min_term`] and [`Term::max_term`]).  The arity of a user
    /// symbol is trusted, so outside callers go through
    /// [`SymbolTable::func`](crate::SymbolTable::func).
    pub(crate) fn complex(
        sym: Symbol,
        arity: usize,
        args: impl IntoIterator<Item = Term>,
    ) -> Result<Self, TermError> {
        if sym.is_boxed() {
            return Err(TermError::BoxedSymbol(sym));
        }
        if sym.is_sentinel() {
            return Err(TermError::ReservedSymbol(sym.to_string().into()));
        }
        if let Some(expected) = sym.builtin_arity() {
            if expected != arity {
                return Err(TermError::ArityMismatch {
                    symbol: sym,
                    expected,
                    found: arity,
                });
            }
        }
        let args: Vec<Term> = args.into_iter().collect();
        if args.len() != arity {
            return Err(TermError::ArityMismatch {
                symbol: sym,
                expected: arity,
                found: args.len(),
            });
        }
        Ok(Self::func_unchecked(sym, args))
    }

    /// The process-wide minimum term.  Every handle returned shares the
    /// same instance.
    #[inline]
    pub fn min_term() -> Self {
        MIN.clone()
    }

    /// The process-wide maximum term.  Every handle returned shares the
    /// same instance.
    #[inline]
    pub fn max_term() -> Self {
        MAX.clone()
    }

    /// The empty list.
    #[inline]
    pub fn nil() -> Self {
        Self::func_unchecked(Symbol::NIL, Vec::new())
    }

    /// A list cell.
    #[inline]
    pub fn cons(head: Term, tail: Term) -> Self {
        Self::func_unchecked(Symbol::CONS, vec![head, tail])
    }

    /// Build a proper `cons`/`nil` list from `items`, back to front.
    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        let items: Vec<Term> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Self::nil(), |tail, head| Self::cons(head, tail))
    }

    #[inline]
    pub fn none() -> Self {
        Self::func_unchecked(Symbol::NONE, Vec::new())
    }

    #[inline]
    pub fn some(value: Term) -> Self {
        Self::func_unchecked(Symbol::SOME, vec![value])
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Self::func_unchecked(if b { Symbol::TRUE } else { Symbol::FALSE }, Vec::new())
    }

    /// The comparison atom (`cmp_lt`, `cmp_eq` or `cmp_gt`) for `ord`.
    #[inline]
    pub fn ordering(ord: Ordering) -> Self {
        let sym = match ord {
            Ordering::Less => Symbol::CMP_LT,
            Ordering::Equal => Symbol::CMP_EQ,
            Ordering::Greater => Symbol::CMP_GT,
        };
        Self::func_unchecked(sym, Vec::new())
    }

    #[inline]
    pub(crate) fn func_unchecked(sym: Symbol, args: Vec<Term>) -> Self {
        Self(Arc::new(Node::Func(sym, args.into_boxed_slice())))
    }

    /// Build a new term with the same head and `args` as its children.
    /// The original term is left untouched.
    pub fn with_args(&self, args: impl IntoIterator<Item = Term>) -> Result<Self, TermError> {
        match &*self.0 {
            Node::Func(sym, old) => Self::complex(*sym, old.len(), args),
            _ => Err(TermError::UnexpectedKind {
                expected: "complex",
                found: self.kind_name(),
            }),
        }
    }

    /// Copy this term's node into a fresh allocation.
    ///
    /// For a complex term the child array is duplicated, but the children
    /// themselves are shared with the original.  A boxed term duplicates
    /// its scalar.
    pub fn shallow_copy(&self) -> Self {
        let node = match &*self.0 {
            Node::I32(v) => Node::I32(*v),
            Node::I64(v) => Node::I64(*v),
            Node::F32(v) => Node::F32(*v),
            Node::F64(v) => Node::F64(*v),
            Node::Str(s) => Node::Str(s.clone()),
            Node::Func(sym, args) => Node::Func(*sym, args.clone()),
        };
        Self(Arc::new(node))
    }

    /// Returns `true` if both handles refer to the same instance.
    #[inline]
    pub fn ptr_eq(a: &Term, b: &Term) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Returns the tag of this term.
    #[inline]
    pub fn sym(&self) -> Symbol {
        match &*self.0 {
            Node::I32(_) => Symbol::BOXED_I32,
            Node::I64(_) => Symbol::BOXED_I64,
            Node::F32(_) => Symbol::BOXED_FP32,
            Node::F64(_) => Symbol::BOXED_FP64,
            Node::Str(_) => Symbol::BOXED_STRING,
            Node::Func(sym, _) => *sym,
        }
    }

    /// Number of children.  Boxed terms have arity 0.
    #[inline]
    pub fn arity(&self) -> usize {
        match &*self.0 {
            Node::Func(_, args) => args.len(),
            _ => 0,
        }
    }

    #[inline]
    pub fn is_boxed(&self) -> bool {
        !self.is_complex()
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        matches!(&*self.0, Node::Func(..))
    }

    /// Returns `true` for the two sentinel terms.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.sym().is_sentinel()
    }

    /// Returns a string describing the shape of this term.
    pub fn kind_name(&self) -> &'static str {
        match &*self.0 {
            Node::I32(_) => "i32",
            Node::I64(_) => "i64",
            Node::F32(_) => "fp32",
            Node::F64(_) => "fp64",
            Node::Str(_) => "string",
            Node::Func(sym, _) if sym.is_sentinel() => "sentinel",
            Node::Func(..) => "complex",
        }
    }

    /// Returns the value if this is a boxed `i32`, otherwise an error.
    pub fn unpack_i32(&self) -> Result<i32, TermError> {
        match self.view() {
            View::I32(v) => Ok(v),
            _ => Err(self.unexpected("i32")),
        }
    }

    /// Returns the value if this is a boxed `i64`, otherwise an error.
    pub fn unpack_i64(&self) -> Result<i64, TermError> {
        match self.view() {
            View::I64(v) => Ok(v),
            _ => Err(self.unexpected("i64")),
        }
    }

    /// Returns the value if this is a boxed `f32`, otherwise an error.
    pub fn unpack_f32(&self) -> Result<f32, TermError> {
        match self.view() {
            View::F32(v) => Ok(v),
            _ => Err(self.unexpected("fp32")),
        }
    }

    /// Returns the value if this is a boxed `f64`, otherwise an error.
    pub fn unpack_f64(&self) -> Result<f64, TermError> {
        match self.view() {
            View::F64(v) => Ok(v),
            _ => Err(self.unexpected("fp64")),
        }
    }

    /// Returns the string slice if this is a boxed string, otherwise an error.
    pub fn unpack_str(&self) -> Result<&str, TermError> {
        match self.view() {
            View::Str(s) => Ok(s),
            _ => Err(self.unexpected("string")),
        }
    }

    /// Returns the head and children if this is a complex term, otherwise
    /// an error.
    pub fn unpack_func(&self) -> Result<(Symbol, &[Term]), TermError> {
        match self.view() {
            View::Func(sym, args) => Ok((sym, args)),
            _ => Err(self.unexpected("complex")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> TermError {
        TermError::UnexpectedKind {
            expected,
            found: self.kind_name(),
        }
    }
}

impl Drop for Node {
    // Children whose last handle is ours are unlinked onto a heap stack
    // before they drop, so native recursion never exceeds one level.
    fn drop(&mut self) {
        let Node::Func(_, args) = self else {
            return;
        };
        if args.is_empty() {
            return;
        }
        let mut pending: Vec<Term> = mem::take(args).into_vec();
        while let Some(term) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(term.0) {
                if let Node::Func(_, args) = &mut node {
                    pending.extend(mem::take(args).into_vec());
                }
            }
        }
    }
}

/// Formats the term with built-in symbol names only; user symbols print
/// as `sym#<id>`.  Use [`Term::display`] for readable output.
impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({})", crate::display::display_builtin(self))
    }
}
