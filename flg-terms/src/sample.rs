//! Seeded random term generation.
//!
//! [`TermSampler`] builds terms over a fixed set of functors.  With a
//! non-zero reuse probability it plugs previously generated subterms back
//! in, producing graphs with real structural sharing.

use crate::{Symbol, SymbolTable, Term, TermError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tuning knobs for [`TermSampler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Maximum nesting depth of generated complex terms.
    pub max_depth: usize,
    /// Probability of emitting a boxed leaf at a depth below the maximum.
    pub leaf_probability: f64,
    /// Probability of reusing an earlier subterm instead of building one.
    pub reuse_probability: f64,
    /// Largest absolute value of generated integers; keeps collisions likely.
    pub int_range: i32,
    /// Number of subterms remembered for reuse.
    pub pool_size: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            leaf_probability: 0.4,
            reuse_probability: 0.0,
            int_range: 4,
            pool_size: 256,
        }
    }
}

/// A deterministic generator of random terms.
///
/// ```rust
/// use flg_terms::{SamplerConfig, SymbolTable, TermSampler};
/// let mut symbols = SymbolTable::new();
/// let f = symbols.intern("f", 2).unwrap();
/// let mut a = TermSampler::seeded(1, &symbols, vec![f], SamplerConfig::default()).unwrap();
/// let mut b = TermSampler::seeded(1, &symbols, vec![f], SamplerConfig::default()).unwrap();
/// assert_eq!(a.sample(), b.sample());
/// ```
#[derive(Debug)]
pub struct TermSampler {
    rng: StdRng,
    /// Functors with their arities.
    functors: Vec<(Symbol, usize)>,
    config: SamplerConfig,
    pool: Vec<Term>,
}

impl TermSampler {
    /// Create a sampler seeded with `seed` over `functors`, whose arities
    /// are taken from `symbols`.
    pub fn seeded(
        seed: u64,
        symbols: &SymbolTable,
        functors: Vec<Symbol>,
        config: SamplerConfig,
    ) -> Result<Self, TermError> {
        let functors = functors
            .into_iter()
            .map(|sym| {
                if sym.is_boxed() {
                    return Err(TermError::BoxedSymbol(sym));
                }
                if sym.is_sentinel() {
                    return Err(TermError::ReservedSymbol(sym.to_string().into()));
                }
                let arity = symbols.arity(sym).ok_or(TermError::UnknownSymbol(sym))?;
                Ok((sym, arity))
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::trace!("sampler seeded with {seed} over {} functors", functors.len());
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            functors,
            config,
            pool: Vec::with_capacity(config.pool_size),
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Generate one term.
    ///
    /// Partially built parents wait on an explicit stack, so `max_depth`
    /// never becomes native recursion depth.
    pub fn sample(&mut self) -> Term {
        let mut open: Vec<(Symbol, usize, Vec<Term>)> = Vec::new();
        'next: loop {
            let mut term = match self.start(open.len()) {
                Start::Done(term) => term,
                Start::Open(sym, arity) => {
                    open.push((sym, arity, Vec::with_capacity(arity)));
                    continue;
                }
            };
            while let Some((sym, arity, mut args)) = open.pop() {
                args.push(term);
                if args.len() < arity {
                    open.push((sym, arity, args));
                    continue 'next;
                }
                term = Term::func_unchecked(sym, args);
                self.remember(&term);
            }
            return term;
        }
    }

    /// Decide what goes at `depth`: a finished term, or a parent whose
    /// children come next.
    fn start(&mut self, depth: usize) -> Start {
        if !self.pool.is_empty() && self.chance(self.config.reuse_probability) {
            let i = self.rng.random_range(0..self.pool.len());
            return Start::Done(self.pool[i].clone());
        }
        let leaf = self.functors.is_empty()
            || depth >= self.config.max_depth
            || self.chance(self.config.leaf_probability);
        let term = if leaf {
            self.sample_leaf()
        } else {
            let (sym, arity) = self.functors[self.rng.random_range(0..self.functors.len())];
            if arity > 0 {
                return Start::Open(sym, arity);
            }
            Term::func_unchecked(sym, Vec::new())
        };
        self.remember(&term);
        Start::Done(term)
    }

    fn chance(&mut self, p: f64) -> bool {
        p > 0.0 && self.rng.random_bool(p.min(1.0))
    }

    fn sample_leaf(&mut self) -> Term {
        let n = self.config.int_range.max(0);
        let v = self.rng.random_range(-n..=n);
        match self.rng.random_range(0..5) {
            0 => Term::i32(v),
            1 => Term::i64(i64::from(v) * 3_000_000_000),
            2 => Term::f32(v as f32 / 2.0),
            3 => Term::f64(f64::from(v) / 4.0),
            _ => Term::str(LEAF_WORDS[v.unsigned_abs() as usize % LEAF_WORDS.len()]),
        }
    }

    fn remember(&mut self, term: &Term) {
        if self.config.pool_size == 0 {
            return;
        }
        if self.pool.len() < self.config.pool_size {
            self.pool.push(term.clone());
        } else {
            let i = self.rng.random_range(0..self.pool.len());
            self.pool[i] = term.clone();
        }
    }
}

enum Start {
    Done(Term),
    Open(Symbol, usize),
}

const LEAF_WORDS: [&str; 5] = ["", "a", "apple", "banana", "b\"q"];
