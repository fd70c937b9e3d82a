//! Logic variables and the global fresh-id counter.
//!
//! A logic variable's identity is its id, a process-wide unique number
//! handed out by [next_id()]. Two variables with the same id are the same
//! variable; the name carried alongside is a human-readable label only,
//! never consulted for equality or hashing.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_VAR_ID: AtomicUsize = AtomicUsize::new(1);

/// Hands out the next globally unique variable id.
///
/// IDs start at 1; 0 is reserved so that an all-zero substitution slot
/// can never be mistaken for a real variable.
pub fn next_id() -> usize {
    NEXT_VAR_ID.fetch_add(1, Ordering::Relaxed)
}

/// Resets the counter to 1.
///
/// Only meant for tests that need reproducible ids across runs; never
/// call this from library code that other callers might be using
/// concurrently with.
pub fn reset_ids() {
    NEXT_VAR_ID.store(1, Ordering::Relaxed);
}

/// A logic variable: an id plus a display name.
///
/// Equality, hashing and ordering are all by `id` alone; `name` is never
/// consulted, so two variables minted with the same label are still
/// distinct unless they share an id.
#[derive(Debug, Clone)]
pub struct LogicVar {
    pub id: usize,
    pub name: Rc<str>,
}

impl LogicVar {
    /// Mints a fresh variable with a unique id and the given label.
    pub fn fresh(name: &str) -> Self {
        LogicVar { id: next_id(), name: Rc::from(name) }
    }

    /// Builds a variable with an explicit id. Used internally by
    /// predicates that need to recreate a variable they have already
    /// seen (e.g. when re-walking a term); library callers should use
    /// [LogicVar::fresh].
    pub fn with_id(id: usize, name: &str) -> Self {
        LogicVar { id, name: Rc::from(name) }
    }
}

impl PartialEq for LogicVar {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for LogicVar {}

impl fmt::Display for LogicVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.id)
    }
}
