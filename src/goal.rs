//! The goal algebra: a goal is a function from a substitution to a lazy
//! stream of substitutions. `conde`/`condi`/`conda`/`condu` share a
//! head-goal-plus-trailing-conjuncts clause shape: each clause is a head
//! goal plus a tail of remaining conjuncts.

use std::rc::Rc;

use log::{debug, trace};
use rand::Rng;

use crate::error::EngineError;
use crate::stream::{bind, mplus_int_n, mplus_seq, take_stream, Stream};
use crate::subst::State;
use crate::term::Term;
use crate::unify::{unify, unify_oc};
use crate::var::LogicVar;

/// A goal: `State -> Stream`, wrapped so it can be cloned (cheaply, via
/// `Rc`) and stored in clause lists.
#[derive(Clone)]
pub struct Goal(Rc<dyn Fn(State) -> Stream>);

impl Goal {
    /// Builds a goal from a closure.
    pub fn new<F>(f: F) -> Goal
    where
        F: Fn(State) -> Stream + 'static,
    {
        Goal(Rc::new(f))
    }

    /// Invokes the goal on a substitution, producing its stream of answers.
    pub fn run(&self, s: State) -> Stream {
        (self.0)(s)
    }
}

/// `s -> [s]`. The identity of `conj`.
pub fn succeed() -> Goal {
    Goal::new(|s| Stream::unit(Ok(s)))
}

/// `s -> []`. The identity of `disj`/`disji`.
pub fn fail() -> Goal {
    Goal::new(|_s| Stream::Empty)
}

/// `==(u, v)`: unifies `u` and `v`, yielding the extended state once on
/// success or nothing on failure.
pub fn eq(u: Term, v: Term) -> Goal {
    Goal::new(move |s| match unify(&u, &v, &s) {
        Some(s2) => Stream::unit(Ok(s2)),
        None => Stream::Empty,
    })
}

/// `==c(u, v)`: as [eq], but uses the occurs-check unifier.
pub fn eqc(u: Term, v: Term) -> Goal {
    Goal::new(move |s| match unify_oc(&u, &v, &s) {
        Some(s2) => Stream::unit(Ok(s2)),
        None => Stream::Empty,
    })
}

/// `conj(g1, ..., gn)`: left fold with `bind`. `conj()` is `succeed`;
/// `conj(g)` is `g`.
pub fn conj(goals: Vec<Goal>) -> Goal {
    let mut it = goals.into_iter();
    let first = match it.next() {
        Some(g) => g,
        None => return succeed(),
    };
    it.fold(first, |acc, g| {
        Goal::new(move |s| {
            let g2 = g.clone();
            bind(acc.run(s), move |s2| g2.run(s2))
        })
    })
}

/// `disj(g1, ..., gn)`: left fold with `mplus_seq`. `disj()` is `fail`;
/// `disj(g)` is `g`.
pub fn disj(goals: Vec<Goal>) -> Goal {
    let mut it = goals.into_iter();
    let first = match it.next() {
        Some(g) => g,
        None => return fail(),
    };
    it.fold(first, |acc, g| {
        Goal::new(move |s| mplus_seq(acc.run(s.clone()), g.run(s)))
    })
}

/// `disji(g1, ..., gn)`: `n`-ary fair interleaving. `disji()` is `fail`;
/// `disji(g)` is `g`.
pub fn disji(goals: Vec<Goal>) -> Goal {
    if goals.is_empty() {
        return fail();
    }
    if goals.len() == 1 {
        return goals.into_iter().next().unwrap();
    }
    Goal::new(move |s| {
        let streams: Vec<Stream> = goals.iter().map(|g| g.run(s.clone())).collect();
        mplus_int_n(streams)
    })
}

/// Wraps a goal constructor so it is built fresh, lazily, each time the
/// returned goal is invoked — breaking otherwise-unguarded recursion.
/// `gc` is NOT called at construction time, nor is it run eagerly: the
/// resulting goal's stream is a `Stream::Delay` until a consumer pulls
/// past it.
pub fn delay<F>(gc: F) -> Goal
where
    F: Fn() -> Goal + Clone + 'static,
{
    Goal::new(move |s| {
        let gc = gc.clone();
        Stream::delay(move || gc().run(s))
    })
}

/// `take(n, g)`: truncates `g`'s stream to at most `n` substitutions,
/// lazily.
pub fn take(n: usize, g: Goal) -> Goal {
    Goal::new(move |s| take_stream(n, g.run(s)))
}

/// `call-fresh(name, gc)`: mints a fresh variable, self-binds it in the
/// incoming state (`id -> v`; a self-binding terminates `walk` at that
/// variable rather than looping), and invokes `gc(v)` on the extended
/// state.
pub fn call_fresh<F>(name: &str, gc: F) -> Goal
where
    F: Fn(Term) -> Goal + 'static,
{
    let name = name.to_string();
    Goal::new(move |s| {
        let v = LogicVar::fresh(&name);
        let term = Term::Var(v.clone());
        let s2 = s.extend(v.id, term.clone());
        trace!("call_fresh: minted {}", v);
        gc(term).run(s2)
    })
}

/// `fresh([names...], gc)`: `call_fresh` iterated over `names`, then
/// `gc` is invoked with all the fresh terms at once, in order.
pub fn fresh<F>(names: &[&str], gc: F) -> Goal
where
    F: Fn(&[Term]) -> Goal + 'static,
{
    let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    Goal::new(move |s| {
        let mut terms = Vec::with_capacity(names.len());
        let mut state = s;
        for name in &names {
            let v = LogicVar::fresh(name);
            let term = Term::Var(v.clone());
            state = state.extend(v.id, term.clone());
            terms.push(term);
        }
        gc(&terms).run(state)
    })
}

/// One `conde`/`condi`/`conda`/`condu` clause: a head goal plus any number
/// of trailing conjuncts. A bare goal is a single-element clause.
pub type Clause = Vec<Goal>;

/// `conde(clauses...)`: `disj` of each clause's conjunction, evaluated
/// with sequential disjunction between clauses.
pub fn conde(clauses: Vec<Clause>) -> Goal {
    disj(clauses.into_iter().map(conj).collect())
}

/// `condi(clauses...)`: as `conde`, but clauses are combined with fair
/// interleaving instead of sequential disjunction.
pub fn condi(clauses: Vec<Clause>) -> Goal {
    disji(clauses.into_iter().map(conj).collect())
}

/// `conda(clauses...)`: soft cut. Commits to the first clause whose head
/// yields at least one substitution, running the clause's remaining
/// conjuncts over the *entire* stream the head produces; later clauses
/// are discarded without their heads being driven past their first
/// element. A clause whose head succeeds once but whose tail then fails
/// everywhere yields nothing — `conda` does not fall through to the next
/// clause in that case. An empty clause is a misuse error.
pub fn conda(clauses: Vec<Clause>) -> Goal {
    Goal::new(move |s| conda_from(&clauses, 0, s))
}

fn conda_from(clauses: &[Clause], idx: usize, s: State) -> Stream {
    if idx >= clauses.len() {
        return Stream::Empty;
    }
    let clause = clauses[idx].clone();
    let (head, tail) = match clause.split_first() {
        Some(parts) => parts,
        None => return Stream::unit(Err(EngineError::misuse("conda: clause must be non-empty"))),
    };
    let tail = tail.to_vec();
    let head_stream = head.run(s.clone());
    match head_stream.uncons() {
        None => conda_from(clauses, idx + 1, s),
        Some((first, rest)) => {
            debug!("conda: committing to clause {}", idx);
            let full_head = Stream::Cons(first, Box::new(rest));
            let tail_goal = conj(tail);
            bind(full_head, move |s2| tail_goal.run(s2))
        }
    }
}

/// `condu(clauses...)`: committed choice. As `conda`, but only the first
/// substitution the committing clause's head yields is used; the clause's
/// tail is evaluated exactly once against it. An empty clause is a misuse
/// error.
pub fn condu(clauses: Vec<Clause>) -> Goal {
    Goal::new(move |s| condu_from(&clauses, 0, s))
}

fn condu_from(clauses: &[Clause], idx: usize, s: State) -> Stream {
    if idx >= clauses.len() {
        return Stream::Empty;
    }
    let clause = clauses[idx].clone();
    let (head, tail) = match clause.split_first() {
        Some(parts) => parts,
        None => return Stream::unit(Err(EngineError::misuse("condu: clause must be non-empty"))),
    };
    let tail_goal = conj(tail.to_vec());
    let head_stream = head.run(s.clone());
    match head_stream.uncons() {
        None => condu_from(clauses, idx + 1, s),
        Some((Ok(s2), _rest)) => {
            debug!("condu: committing to clause {}", idx);
            tail_goal.run(s2)
        }
        Some((Err(e), _rest)) => Stream::unit(Err(e)),
    }
}

/// `condr(clauses...)`: randomized interleaved disjunction. Each pull
/// selects a uniformly random non-exhausted clause. Makes no stream-order
/// guarantees, and should not appear in deterministic tests.
pub fn condr(clauses: Vec<Goal>) -> Goal {
    Goal::new(move |s| {
        let streams: Vec<Stream> = clauses.iter().map(|g| g.run(s.clone())).collect();
        random_round_robin(streams)
    })
}

fn random_round_robin(mut streams: Vec<Stream>) -> Stream {
    loop {
        if streams.is_empty() {
            return Stream::Empty;
        }
        let idx = rand::thread_rng().gen_range(0..streams.len());
        let candidate = streams.swap_remove(idx);
        match candidate {
            Stream::Empty => continue,
            Stream::Delay(thunk) => streams.push(thunk()),
            Stream::Cons(item, rest) => {
                streams.push(*rest);
                return Stream::Cons(item, Box::new(Stream::delay(move || random_round_robin(streams))));
            }
        }
    }
}

/// Raises an instantiation error as a one-element, then-terminated stream.
pub fn instantiation_error(msg: impl Into<String>) -> Goal {
    let msg = msg.into();
    Goal::new(move |_s| Stream::unit(Err(EngineError::instantiation(msg.clone()))))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::subst::walk_star;

    #[test]
    fn fresh_then_eq_binds_the_variable() {
        let mut bound: Vec<Term> = Vec::new();
        let captured: std::rc::Rc<std::cell::RefCell<Option<Term>>> =
            std::rc::Rc::new(std::cell::RefCell::new(None));
        let captured2 = captured.clone();
        let g = fresh(&["$X"], move |vs| {
            *captured2.borrow_mut() = Some(vs[0].clone());
            eq(vs[0].clone(), Term::Int(3))
        });
        let results: Vec<_> = g.run(State::empty()).collect();
        assert_eq!(results.len(), 1);
        let x = captured.borrow().clone().unwrap();
        let s = results.into_iter().next().unwrap().unwrap();
        bound.push(walk_star(&x, &s));
        assert_eq!(bound, vec![Term::Int(3)]);
    }

    #[test]
    fn conj_succeed_is_identity() {
        let g = eq(Term::Int(1), Term::Int(1));
        let combined = conj(vec![succeed(), g.clone()]);
        let a: Vec<_> = combined.run(State::empty()).collect();
        let b: Vec<_> = g.run(State::empty()).collect();
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn conj_fail_short_circuits() {
        let combined = conj(vec![fail(), succeed()]);
        let out: Vec<_> = combined.run(State::empty()).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn disj_fail_is_identity() {
        let g = eq(Term::Int(1), Term::Int(1));
        let combined = disj(vec![fail(), g.clone()]);
        let out: Vec<_> = combined.run(State::empty()).collect();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn conda_commits_and_does_not_fall_through() {
        // Head succeeds once, tail fails -> conda yields nothing, never
        // tries the second clause.
        let clauses = vec![
            vec![succeed(), fail()],
            vec![succeed(), succeed()],
        ];
        let g = conda(clauses);
        let out: Vec<_> = g.run(State::empty()).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn conda_rejects_an_empty_clause() {
        let g = conda(vec![Vec::new()]);
        let out: Vec<_> = g.run(State::empty()).collect();
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], Err(EngineError::Misuse(_))));
    }

    #[test]
    fn condu_rejects_an_empty_clause() {
        let g = condu(vec![Vec::new()]);
        let out: Vec<_> = g.run(State::empty()).collect();
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], Err(EngineError::Misuse(_))));
    }
}
