//! List predicates: `membero`, `listo`, `lengtho`, `appendo`, `conso`,
//! `firsto`, `lasto`, `ntho`.
//!
//! Lists are flat `Term::Seq` values rather than Prolog-style cons cells
//! with open tails, so an unbound-list enumeration (in `membero`/`appendo`)
//! works by trying successively longer candidate lists rather than walking
//! an open tail one cons cell at a time.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::goal::{conde, conj, delay, disj, disji, eq, instantiation_error, Clause, Goal};
use crate::stream::Stream;
use crate::subst::walk;
use crate::term::Term;

/// `membero(el, list)`: succeeds once for each element of `list` that
/// unifies with `el`. If `list` is unbound, lazily enumerates every
/// context `list = [v1, ..., el]` (el at the end of an increasingly long
/// prefix of fresh variables), so every length is eventually reached.
pub fn membero(el: Term, list: Term) -> Goal {
    Goal::new(move |s| match walk(&list, &s) {
        Term::Seq(items) => {
            let goals: Vec<Goal> = items.iter().map(|x| eq(el.clone(), x.clone())).collect();
            disj(goals).run(s)
        }
        Term::Var(_) => membero_open(el.clone(), list.clone(), 0).run(s),
        _ => Stream::Empty,
    })
}

fn membero_open(el: Term, list: Term, k: usize) -> Goal {
    let prefix: Vec<Term> = (0..k).map(|i| Term::fresh(&format!("_mem{}", i))).collect();
    let mut items = prefix;
    items.push(el.clone());
    let candidate = Term::list(items);
    let list2 = list.clone();
    let el2 = el.clone();
    disji(vec![
        eq(list.clone(), candidate),
        delay(move || membero_open(el2.clone(), list2.clone(), k + 1)),
    ])
}

/// `listo(x)`: a ground list succeeds once; a ground non-list fails; an
/// unbound `x` enumerates `x = [v1, ..., vn]` for `n = 0, 1, 2, ...`.
pub fn listo(x: Term) -> Goal {
    Goal::new(move |s| match walk(&x, &s) {
        Term::Seq(_) => Stream::unit(Ok(s)),
        Term::Var(_) => listo_open(x.clone(), 0).run(s),
        _ => Stream::Empty,
    })
}

fn listo_open(x: Term, n: usize) -> Goal {
    let vars: Vec<Term> = (0..n).map(|i| Term::fresh(&format!("_lst{}", i))).collect();
    let candidate = Term::list(vars);
    let x2 = x.clone();
    disji(vec![
        eq(x.clone(), candidate),
        delay(move || listo_open(x2.clone(), n + 1)),
    ])
}

/// `lengtho(list, n)`: relates a list to its length, as an arbitrary
/// precision natural. With `list` unbound and `n` ground, binds `list` to
/// `n` fresh variables. With both unbound, enumerates `(n, list-of-n-
/// fresh-vars)` for `n = 0, 1, 2, ...`.
pub fn lengtho(list: Term, n: Term) -> Goal {
    Goal::new(move |s| {
        let rl = walk(&list, &s);
        match &rl {
            Term::Seq(items) => {
                let len = Term::from_bigint(BigInt::from(items.len()));
                eq(n.clone(), len).run(s)
            }
            Term::Var(_) => {
                let rn = walk(&n, &s);
                match rn.as_bigint() {
                    Some(k) => match k.to_usize() {
                        Some(k) => {
                            let vars: Vec<Term> =
                                (0..k).map(|i| Term::fresh(&format!("_len{}", i))).collect();
                            eq(list.clone(), Term::list(vars)).run(s)
                        }
                        None => Stream::Empty,
                    },
                    None if rn.is_var() => lengtho_open(list.clone(), n.clone(), 0).run(s),
                    None => Stream::Empty,
                }
            }
            _ => Stream::Empty,
        }
    })
}

fn lengtho_open(list: Term, n: Term, k: usize) -> Goal {
    let vars: Vec<Term> = (0..k).map(|i| Term::fresh(&format!("_len{}", i))).collect();
    let candidate_list = Term::list(vars);
    let candidate_n = Term::from_bigint(BigInt::from(k));
    let list2 = list.clone();
    let n2 = n.clone();
    disji(vec![
        conj(vec![eq(n.clone(), candidate_n), eq(list.clone(), candidate_list)]),
        delay(move || lengtho_open(list2.clone(), n2.clone(), k + 1)),
    ])
}

/// `appendo(p, s, l)`: `l` is `p` concatenated with `s`.
///
/// When `p` and `s` are both ground, `l` is constructed directly. When `p`
/// and `l` are both ground, `l` is decomposed by `p`'s length. When only
/// `l` is ground, every one of its `len(l) + 1` splits is enumerated in
/// order (matching the documented scenario: splitting `[1,2,3,4]` yields
/// the prefixes of increasing length, shortest first). When `l` is
/// unbound, solutions are enumerated by increasing total length of `l`,
/// trying every split of that length — sound and complete, though the
/// enumeration order differs from a cons-cell implementation that can
/// grow an open tail one element at a time.
pub fn appendo(p: Term, s: Term, l: Term) -> Goal {
    Goal::new(move |st| {
        let rp = walk(&p, &st);
        let rs = walk(&s, &st);
        let rl = walk(&l, &st);
        match (&rp, &rs, &rl) {
            (Term::Seq(pi), Term::Seq(si), _) => {
                let mut combined = (**pi).clone();
                combined.extend(si.iter().cloned());
                eq(l.clone(), Term::list(combined)).run(st)
            }
            (Term::Seq(pi), _, Term::Seq(li)) => {
                if li.len() < pi.len() {
                    return Stream::Empty;
                }
                let (head, tail) = li.split_at(pi.len());
                conj(vec![
                    eq(p.clone(), Term::list(head.to_vec())),
                    eq(s.clone(), Term::list(tail.to_vec())),
                ])
                .run(st)
            }
            (_, _, Term::Seq(li)) => appendo_splits(p.clone(), s.clone(), (**li).clone()).run(st),
            _ => appendo_open(p.clone(), s.clone(), l.clone(), 0).run(st),
        }
    })
}

/// Tries every split of a concrete item vector between `p` and `s`,
/// shortest prefix first.
fn appendo_splits(p: Term, s: Term, items: Vec<Term>) -> Goal {
    let n = items.len();
    let mut clauses: Vec<Clause> = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let (head, tail) = items.split_at(k);
        clauses.push(vec![
            eq(p.clone(), Term::list(head.to_vec())),
            eq(s.clone(), Term::list(tail.to_vec())),
        ]);
    }
    conde(clauses)
}

/// `l` is unbound: enumerates candidate lists of length `n = 0, 1, 2, ...`,
/// each built from fresh variables, and for each one tries every split —
/// `appendo_splits` over a list of fresh rather than ground elements.
fn appendo_open(p: Term, s: Term, l: Term, n: usize) -> Goal {
    let items: Vec<Term> = (0..n).map(|i| Term::fresh(&format!("_app{}", i))).collect();
    let l_candidate = Term::list(items.clone());
    let this_len = conj(vec![eq(l.clone(), l_candidate), appendo_splits(p.clone(), s.clone(), items)]);
    let p2 = p.clone();
    let s2 = s.clone();
    let l2 = l.clone();
    disji(vec![this_len, delay(move || appendo_open(p2.clone(), s2.clone(), l2.clone(), n + 1))])
}

/// `conso(car, cdr, list)`: `list = [car | cdr]`. Works whenever `list` or
/// `cdr` resolves to a list of known length; otherwise raises an
/// instantiation error.
pub fn conso(car: Term, cdr: Term, list: Term) -> Goal {
    Goal::new(move |st| match walk(&list, &st) {
        Term::Seq(items) if !items.is_empty() => {
            let head = items[0].clone();
            let tail = Term::list(items[1..].to_vec());
            conj(vec![eq(car.clone(), head), eq(cdr.clone(), tail)]).run(st)
        }
        Term::Seq(_) => Stream::Empty,
        _ => match walk(&cdr, &st) {
            Term::Seq(items) => {
                let mut full = vec![car.clone()];
                full.extend(items.iter().cloned());
                eq(list.clone(), Term::list(full)).run(st)
            }
            _ => instantiation_error("conso: list or cdr must be a known-length list").run(st),
        },
    })
}

/// `firsto(list, el)`: `el` is the first element of `list`.
pub fn firsto(list: Term, el: Term) -> Goal {
    Goal::new(move |st| match walk(&list, &st) {
        Term::Seq(items) if !items.is_empty() => eq(el.clone(), items[0].clone()).run(st),
        Term::Seq(_) => Stream::Empty,
        _ => instantiation_error("firsto: list must be a known-length list").run(st),
    })
}

/// `lasto(list, el)`: `el` is the last element of `list`.
pub fn lasto(list: Term, el: Term) -> Goal {
    Goal::new(move |st| match walk(&list, &st) {
        Term::Seq(items) if !items.is_empty() => {
            eq(el.clone(), items[items.len() - 1].clone()).run(st)
        }
        Term::Seq(_) => Stream::Empty,
        _ => instantiation_error("lasto: list must be a known-length list").run(st),
    })
}

/// `ntho(idx, list, el)`: `el` is the (0-indexed) `idx`-th element of
/// `list`. With `list` known, an unbound `idx` enumerates every valid
/// index. With `idx` known and `list` unbound, constructs a list of
/// length `idx + 1` with `el` at position `idx`. With both unbound,
/// enumerates `(idx = k, list-of-length-k+1-with-el-at-k)` for
/// `k = 0, 1, 2, ...`.
pub fn ntho(idx: Term, list: Term, el: Term) -> Goal {
    Goal::new(move |st| {
        let rlist = walk(&list, &st);
        match &rlist {
            Term::Seq(items) => {
                let ridx = walk(&idx, &st);
                match ridx.as_bigint().and_then(|b| b.to_usize()) {
                    Some(k) => match items.get(k) {
                        Some(item) => eq(el.clone(), item.clone()).run(st),
                        None => Stream::Empty,
                    },
                    None if ridx.is_var() => {
                        let clauses: Vec<Clause> = items
                            .iter()
                            .enumerate()
                            .map(|(k, item)| {
                                vec![
                                    eq(idx.clone(), Term::from_bigint(BigInt::from(k))),
                                    eq(el.clone(), item.clone()),
                                ]
                            })
                            .collect();
                        conde(clauses).run(st)
                    }
                    None => Stream::Empty,
                }
            }
            Term::Var(_) => {
                let ridx = walk(&idx, &st);
                match ridx.as_bigint().and_then(|b| b.to_usize()) {
                    Some(k) => {
                        let prefix: Vec<Term> =
                            (0..k).map(|i| Term::fresh(&format!("_nth{}", i))).collect();
                        let mut items = prefix;
                        items.push(el.clone());
                        eq(list.clone(), Term::list(items)).run(st)
                    }
                    None if ridx.is_var() => ntho_open(idx.clone(), list.clone(), el.clone(), 0).run(st),
                    None => Stream::Empty,
                }
            }
            _ => Stream::Empty,
        }
    })
}

fn ntho_open(idx: Term, list: Term, el: Term, k: usize) -> Goal {
    let prefix: Vec<Term> = (0..k).map(|i| Term::fresh(&format!("_nth{}", i))).collect();
    let mut items = prefix;
    items.push(el.clone());
    let candidate_list = Term::list(items);
    let candidate_idx = Term::from_bigint(BigInt::from(k));
    let idx2 = idx.clone();
    let list2 = list.clone();
    let el2 = el.clone();
    disji(vec![
        conj(vec![eq(idx.clone(), candidate_idx), eq(list.clone(), candidate_list)]),
        delay(move || ntho_open(idx2.clone(), list2.clone(), el2.clone(), k + 1)),
    ])
}
