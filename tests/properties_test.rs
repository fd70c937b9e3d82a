// Invariants of unification and the substitution checked against randomly
// generated terms, rather than hand-picked examples.

use kanren::*;
use proptest::prelude::*;

fn arb_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Term::Int),
        "[a-z]{1,6}".prop_map(Term::str),
        any::<bool>().prop_map(Term::Bool),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Term::list)
    })
}

proptest! {
    #[test]
    fn unify_produces_equal_walks(a in arb_term(), b in arb_term()) {
        if let Some(s) = unify(&a, &b, &State::empty()) {
            prop_assert_eq!(walk_star(&a, &s), walk_star(&b, &s));
        }
    }

    #[test]
    fn unify_extends_the_input_substitution(a in arb_term(), b in arb_term(), seed in 1u64..50) {
        let base = State::empty().extend(seed as usize, Term::Int(0));
        if let Some(extended) = unify(&a, &b, &base) {
            prop_assert_eq!(extended.lookup(seed as usize).cloned(), Some(Term::Int(0)));
        }
    }

    #[test]
    fn appendo_is_sound(p_len in 0usize..5, s_len in 0usize..5) {
        let p_items: Vec<Term> = (0..p_len).map(|i| Term::Int(i as i64)).collect();
        let s_items: Vec<Term> = (0..s_len).map(|i| Term::Int(100 + i as i64)).collect();
        let p = Term::list(p_items.clone());
        let s = Term::list(s_items.clone());
        let l = Term::fresh("$L");
        let l2 = l.clone();
        let g = appendo(p, s, l);
        let out: Vec<_> = run(1, &g).collect();
        prop_assert_eq!(out.len(), 1);
        let st = out.into_iter().next().unwrap().unwrap();
        let mut expect = p_items;
        expect.extend(s_items);
        prop_assert_eq!(walk_star(&l2, &st), Term::list(expect));
    }
}

#[test]
fn conj_with_succeed_is_identity() {
    let x = Term::fresh("$X");
    let g = eq(x, Term::Int(1));
    let a = conj(vec![succeed(), g.clone()]).run(State::empty()).count();
    let b = g.run(State::empty()).count();
    assert_eq!(a, b);
}

#[test]
fn conj_with_fail_short_circuits() {
    let x = Term::fresh("$X");
    let out = conj(vec![fail(), eq(x, Term::Int(1))]).run(State::empty()).count();
    assert_eq!(out, 0);
}

#[test]
fn disj_with_fail_is_identity() {
    let x = Term::fresh("$X");
    let g = eq(x, Term::Int(1));
    let a = disj(vec![fail(), g.clone()]).run(State::empty()).count();
    let b = g.run(State::empty()).count();
    assert_eq!(a, b);
}

#[test]
fn unify_with_occurs_check_rejects_a_cycle() {
    let x = Term::fresh("$X");
    let cyclic = Term::list(vec![x.clone()]);
    assert!(unify_oc(&x, &cyclic, &State::empty()).is_none());
    assert!(unify(&x, &cyclic, &State::empty()).is_some());
}

#[test]
fn disji_fairness_bound_on_two_infinite_clauses() {
    fn fives(x: Term) -> Goal {
        disj(vec![eq(x.clone(), Term::Int(5)), delay(move || fives(x.clone()))])
    }
    fn sixes(x: Term) -> Goal {
        disj(vec![eq(x.clone(), Term::Int(6)), delay(move || sixes(x.clone()))])
    }
    let x = Term::fresh("$X");
    let g = disji(vec![fives(x.clone()), sixes(x.clone())]);
    // d = 0 for both clauses (a satisfying answer at depth 0 in each);
    // within the first m*(d+1) = 2*1 = 2 pulls, both values must appear.
    let out: Vec<_> = run(2, &g).collect();
    let vals: Vec<i64> = out
        .into_iter()
        .map(|r| match walk_star(&x, &r.unwrap()) {
            Term::Int(i) => i,
            other => panic!("unexpected term {other:?}"),
        })
        .collect();
    assert!(vals.contains(&5));
    assert!(vals.contains(&6));
}
