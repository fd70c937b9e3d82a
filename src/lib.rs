//! # kanren
//!
//! `kanren` is a small, fast relational (logic) programming engine in the
//! miniKanren family. It has no parser, no knowledge base and no
//! backward-chaining rule search: a program is built directly out of Rust
//! values — goals are functions from a substitution to a lazy stream of
//! substitutions, composed with a small set of combinators.
//!
//! ## Briefly
//!
//! A logic variable is introduced with [goal::call_fresh] or [goal::fresh]:
//!
//! <pre>
//! let g = fresh(&["$X"], |vs| eq(vs[0].clone(), Term::Int(5)));
//! let answers: Vec<_> = run(10, &g).collect();</pre>
//!
//! Goals are combined with [goal::conj] (all must succeed), [goal::disj]
//! (either may succeed, first-clause-first order), and their fair,
//! round-robin counterparts [goal::condi]/[goal::disji], which interleave
//! clauses so that an infinite clause never starves the others. [goal::delay]
//! is what makes recursive goal definitions (a relation that calls itself)
//! safe to write: it is the one place that suspends a goal's search rather
//! than running it immediately.
//!
//! <pre>
//! fn fives(x: Term) -> Goal {
//!     disj(vec![eq(x.clone(), Term::Int(5)), delay(move || fives(x.clone()))])
//! }</pre>
//!
//! [goal::conda] and [goal::condu] commit to the first clause whose head
//! succeeds (soft-cut and committed-choice respectively), and [goal::condr]
//! commits to a clause chosen at random — see their doc comments for the
//! exact semantics.
//!
//! The [relational] module builds a small library of relations — list,
//! arithmetic, string and type predicates — entirely on top of the goal
//! algebra in this crate; none of it reaches into [subst::State] or
//! [term::Term] beyond [subst::walk]/[subst::walk_star].
//!
//! ## Error handling
//!
//! A stream element is `Result<State, error::EngineError>` rather than a
//! bare `State`: logical failure is modeled as "no next element", while an
//! ill-formed query (an operation applied to an argument it cannot resolve,
//! such as `pluso` with two unbound operands) surfaces as an `Err` value
//! that terminates the stream the first time it's pulled, instead of
//! panicking or silently failing. See [error::EngineError].
//!
//! ## Logging
//!
//! `kanren` logs through the `log` facade: `trace!` around stream
//! advancement (forcing a suspended clause, the round-robin cursor moving),
//! `debug!` around `conda`/`condu`/`condr` committing to a clause. Enable a
//! subscriber such as `env_logger` and set `RUST_LOG=kanren=trace` to watch
//! a search unfold.
//!
//! ## Requirements
//!
//! `kanren` was developed and tested with Rust/Cargo version 1.70.0.
//!
//! ## License
//!
//! The source code for `kanren` is licensed under the MIT license, which
//! you can find here: [LICENSE](./LICENSE).

pub mod error;
pub mod goal;
pub mod relational;
pub mod run;
pub mod stream;
pub mod subst;
pub mod term;
pub mod var;

pub use error::*;
pub use goal::*;
pub use relational::*;
pub use run::*;
pub use stream::*;
pub use subst::*;
pub use term::*;
pub use var::*;
