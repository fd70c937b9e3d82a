//! The entry point: seeds the empty substitution and materializes answers.
//!
//! Exposed as two pairs of functions rather than one API with an
//! `Option<usize>` count: `run`/`run_in` (bounded) and `run_all`/`run_all_in`
//! (unbounded).

use crate::goal::{take, Goal};
use crate::stream::Stream;
use crate::subst::State;

/// `run(n, goal)`: at most `n` answers, starting from the empty
/// substitution.
pub fn run(n: usize, goal: &Goal) -> Stream {
    run_in(n, goal, State::empty())
}

/// As [run], but seeded with a caller-supplied initial state instead of
/// the empty substitution.
pub fn run_in(n: usize, goal: &Goal, state: State) -> Stream {
    take(n, goal.clone()).run(state)
}

/// `run(goal)` (no count): the full stream of answers, starting from the
/// empty substitution. Only terminates if `goal` itself has finitely many
/// answers.
pub fn run_all(goal: &Goal) -> Stream {
    run_all_in(goal, State::empty())
}

/// As [run_all], but seeded with a caller-supplied initial state.
pub fn run_all_in(goal: &Goal, state: State) -> Stream {
    goal.run(state)
}
