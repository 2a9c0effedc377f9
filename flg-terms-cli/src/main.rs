//! Command-line interface (CLI) for exercising the `flg-terms` crate.
//!
//! This binary builds terms in memory and reports on them: the sizes of the
//! core types, the cost of comparing very deep terms (with and without a
//! shared tail), and the sorted, deduplicated form of a batch of random
//! terms.

use clap::{Parser as ClapParser, Subcommand};
use flg_terms::{SamplerConfig, Symbol, SymbolTable, Term, TermError, TermSampler, View};
use std::collections::BTreeSet;
use std::mem;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints sizes
    Sizes {},
    /// Compares two unary chains of the given depth
    Chain {
        /// Nesting depth of each chain
        #[arg(short, long, default_value_t = 100_000)]
        depth: usize,
        /// Build the second chain on top of the first one's tail
        #[arg(short, long)]
        shared: bool,
    },
    /// Generates random terms, then sorts and deduplicates them
    Sort {
        /// Number of terms to generate
        #[arg(short, long, default_value_t = 20)]
        count: usize,
        /// Maximum nesting depth
        #[arg(short, long, default_value_t = 3)]
        depth: usize,
        /// RNG seed
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Probability of reusing an earlier subterm
        #[arg(short, long, default_value_t = 0.2)]
        reuse: f64,
    },
}

fn main() -> Result<(), TermError> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Sizes {} => {
            println!("Size of Term: {}", mem::size_of::<Term>());
            println!("Size of Option<Term>: {}", mem::size_of::<Option<Term>>());
            println!("Size of Symbol: {}", mem::size_of::<Symbol>());
            println!("Size of View: {}", mem::size_of::<View>());
        }
        Commands::Chain { depth, shared } => {
            let mut symbols = SymbolTable::new();
            let s = symbols.intern("s", 1)?;

            let started = Instant::now();
            let a = chain(&symbols, s, depth, Term::i32(0))?;
            let b = if shared {
                // Same depth, but the bottom half is the first chain's node.
                let mut tail = a.clone();
                for _ in 0..depth / 2 {
                    let next = tail.unpack_func()?.1[0].clone();
                    tail = next;
                }
                chain(&symbols, s, depth / 2, tail)?
            } else {
                chain(&symbols, s, depth, Term::i32(0))?
            };
            log::info!("built two chains of depth {depth} in {:?}", started.elapsed());

            let started = Instant::now();
            let ord = a.cmp(&b);
            println!(
                "compare = {} ({:?}, shared tail: {shared})",
                Term::ordering(ord).display(&symbols),
                started.elapsed()
            );
        }
        Commands::Sort {
            count,
            depth,
            seed,
            reuse,
        } => {
            let mut symbols = SymbolTable::new();
            let functors = vec![
                symbols.intern("a", 0)?,
                symbols.intern("f", 1)?,
                symbols.intern("g", 2)?,
                Symbol::CONS,
                Symbol::NIL,
                Symbol::SOME,
            ];
            let config = SamplerConfig {
                max_depth: depth,
                reuse_probability: reuse,
                ..SamplerConfig::default()
            };
            let mut sampler = TermSampler::seeded(seed, &symbols, functors, config)?;
            let terms: BTreeSet<Term> = (0..count).map(|_| sampler.sample()).collect();
            log::info!("{count} generated, {} distinct", terms.len());
            for term in &terms {
                println!("{}", term.display(&symbols));
            }
        }
    }

    Ok(())
}

fn chain(symbols: &SymbolTable, s: Symbol, depth: usize, leaf: Term) -> Result<Term, TermError> {
    (0..depth).try_fold(leaf, |t, _| symbols.func(s, [t]))
}
