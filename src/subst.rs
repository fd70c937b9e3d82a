//! The substitution (`State`): an immutable mapping from variable id to term.
//!
//! Operations never mutate an existing `State`; `extend` returns a new
//! handle. Lookup is array indexing by id rather than a hash map, since var
//! ids are allocated densely from a single counter.

use std::rc::Rc;

use crate::term::Term;

/// An immutable substitution: variable id → bound term.
///
/// Cloning a `State` is O(1) (an `Rc` bump); `extend` clones the backing
/// vector only when it actually grows or writes a new slot, producing a
/// new `State` that shares no further mutation with the old one.
#[derive(Debug, Clone)]
pub struct State {
    bindings: Rc<Vec<Option<Rc<Term>>>>,
}

impl State {
    /// The unique initial state: no bindings.
    pub fn empty() -> State {
        State { bindings: Rc::new(Vec::new()) }
    }

    /// Number of variable slots currently allocated. Only meaningful for
    /// debugging/tests; not part of the semantic contract.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// The term a variable id is bound to, or `None` if unbound (including
    /// ids that have never been allocated a slot at all).
    pub fn lookup(&self, id: usize) -> Option<&Term> {
        self.bindings.get(id).and_then(|slot| slot.as_deref())
    }

    /// Returns a new state binding `id` to `term`. Does not check whether
    /// `id` is already bound; callers (the unifier) guarantee that.
    pub fn extend(&self, id: usize, term: Term) -> State {
        let mut v = (*self.bindings).clone();
        if id >= v.len() {
            v.resize(id + 1, None);
        }
        v[id] = Some(Rc::new(term));
        State { bindings: Rc::new(v) }
    }
}

impl Default for State {
    fn default() -> Self {
        State::empty()
    }
}

/// Resolves `term` one step: follows a variable's binding chain until a
/// non-variable or an unbound variable is reached. Does not descend into
/// sequence elements — see [walk_star] for that. Never modifies `s`.
pub fn walk(term: &Term, s: &State) -> Term {
    let mut current = term.clone();
    loop {
        match &current {
            Term::Var(v) => match s.lookup(v.id) {
                Some(bound) => {
                    // A self-binding v -> v terminates here rather than looping.
                    if let Term::Var(v2) = bound {
                        if v2.id == v.id {
                            return current;
                        }
                    }
                    current = bound.clone();
                }
                None => return current,
            },
            _ => return current,
        }
    }
}

/// `walk` followed by recursion into sequence elements: rewrites every
/// element of a (possibly nested) sequence by `walk_star`, leaving
/// ground subterms untouched.
pub fn walk_star(term: &Term, s: &State) -> Term {
    let resolved = walk(term, s);
    match resolved {
        Term::Seq(items) => {
            let rewritten: Vec<Term> = items.iter().map(|t| walk_star(t, s)).collect();
            Term::Seq(Rc::new(rewritten))
        }
        other => other,
    }
}

/// True iff `walk_star(term, s)` contains no unbound variables.
pub fn is_ground(term: &Term, s: &State) -> bool {
    match walk(term, s) {
        Term::Var(_) => false,
        Term::Seq(items) => items.iter().all(|t| is_ground(t, s)),
        _ => true,
    }
}
