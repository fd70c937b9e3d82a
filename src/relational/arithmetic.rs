//! Arithmetic predicates: `succo`, `pluso`, `between`/`between_unbounded`.
//!
//! Ground operands are computed eagerly; a single unbound operand is
//! solved for from the others; results are arbitrary-precision so they
//! never wrap on overflow.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::goal::{delay, disj, eq, fail, instantiation_error, succeed, Goal};
use crate::subst::walk;
use crate::term::Term;

/// `succo(u, v)`: `v = u + 1`. Either argument may be the ground one; the
/// other is solved for. Fails if the would-be predecessor is negative.
pub fn succo(u: Term, v: Term) -> Goal {
    Goal::new(move |st| {
        let ru = walk(&u, &st).as_bigint();
        let rv = walk(&v, &st).as_bigint();
        match (ru, rv) {
            (Some(n), _) => eq(v.clone(), Term::from_bigint(n + BigInt::one())).run(st),
            (None, Some(m)) => {
                if m <= BigInt::zero() {
                    return crate::stream::Stream::Empty;
                }
                eq(u.clone(), Term::from_bigint(m - BigInt::one())).run(st)
            }
            (None, None) => instantiation_error("succo: u or v must be a ground number").run(st),
        }
    })
}

/// `pluso(a, b, c)`: `c = a + b`. Any one of the three may be the unbound
/// one, solved for from the other two; with fewer than two ground
/// arguments the relation is underdetermined and raises an instantiation
/// error rather than guessing.
pub fn pluso(a: Term, b: Term, c: Term) -> Goal {
    Goal::new(move |st| {
        let ra = walk(&a, &st).as_bigint();
        let rb = walk(&b, &st).as_bigint();
        let rc = walk(&c, &st).as_bigint();
        match (ra, rb, rc) {
            (Some(x), Some(y), _) => eq(c.clone(), Term::from_bigint(x + y)).run(st),
            (Some(x), None, Some(z)) => eq(b.clone(), Term::from_bigint(z - x)).run(st),
            (None, Some(y), Some(z)) => eq(a.clone(), Term::from_bigint(z - y)).run(st),
            _ => instantiation_error("pluso: at least two of a, b, c must be ground numbers")
                .run(st),
        }
    })
}

/// `between(lo, hi, x)`: `x` ranges over the closed interval `[lo, hi]`.
/// `lo` and `hi` must be ground; `x` may be ground (checked) or unbound
/// (enumerated, lowest first).
pub fn between(lo: Term, hi: Term, x: Term) -> Goal {
    Goal::new(move |st| {
        let rlo = walk(&lo, &st).as_bigint();
        let rhi = walk(&hi, &st).as_bigint();
        match (rlo, rhi) {
            (Some(l), Some(h)) => {
                let rx = walk(&x, &st);
                if rx.is_var() {
                    between_enum(x.clone(), l, h).run(st)
                } else {
                    match rx.as_bigint() {
                        Some(v) if v >= l && v <= h => succeed().run(st),
                        _ => crate::stream::Stream::Empty,
                    }
                }
            }
            _ => instantiation_error("between: lo and hi must be ground integers").run(st),
        }
    })
}

fn between_enum(x: Term, lo: BigInt, hi: BigInt) -> Goal {
    if lo > hi {
        return fail();
    }
    let next = lo.clone() + BigInt::one();
    disj(vec![
        eq(x.clone(), Term::from_bigint(lo)),
        delay(move || between_enum(x.clone(), next.clone(), hi.clone())),
    ])
}

/// `between_unbounded(lo, x)`: `between` with `hi = +∞`, kept as a
/// separate function since [Term] has no infinity sentinel — `x` ranges
/// over every integer `>= lo`.
pub fn between_unbounded(lo: Term, x: Term) -> Goal {
    Goal::new(move |st| match walk(&lo, &st).as_bigint() {
        Some(l) => {
            let rx = walk(&x, &st);
            if rx.is_var() {
                between_unbounded_enum(x.clone(), l).run(st)
            } else {
                match rx.as_bigint() {
                    Some(v) if v >= l => succeed().run(st),
                    _ => crate::stream::Stream::Empty,
                }
            }
        }
        None => instantiation_error("between: lo must be a ground integer").run(st),
    })
}

fn between_unbounded_enum(x: Term, lo: BigInt) -> Goal {
    let next = lo.clone() + BigInt::one();
    disj(vec![
        eq(x.clone(), Term::from_bigint(lo)),
        delay(move || between_unbounded_enum(x.clone(), next.clone())),
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::subst::{walk_star, State};

    #[test]
    fn succo_solves_forward_and_backward() {
        let v = Term::fresh("$V");
        let st = succo(Term::Int(4), v.clone()).run(State::empty()).next().unwrap().unwrap();
        assert_eq!(walk_star(&v, &st), Term::Int(5));

        let u = Term::fresh("$U");
        let st2 = succo(u.clone(), Term::Int(5)).run(State::empty()).next().unwrap().unwrap();
        assert_eq!(walk_star(&u, &st2), Term::Int(4));
    }

    #[test]
    fn succo_rejects_predecessor_of_zero() {
        let u = Term::fresh("$U");
        let out: Vec<_> = succo(u, Term::Int(0)).run(State::empty()).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn pluso_solves_for_any_missing_argument() {
        let c = Term::fresh("$C");
        let st = pluso(Term::Int(2), Term::Int(3), c.clone())
            .run(State::empty())
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(walk_star(&c, &st), Term::Int(5));
    }

    #[test]
    fn between_enumerates_inclusive_range() {
        let x = Term::fresh("$X");
        let out: Vec<_> = between(Term::Int(1), Term::Int(3), x.clone())
            .run(State::empty())
            .map(|r| walk_star(&x, &r.unwrap()))
            .collect();
        assert_eq!(out, vec![Term::Int(1), Term::Int(2), Term::Int(3)]);
    }
}
