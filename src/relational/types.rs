//! Type-testing predicates: `numbero`, `groundo`.
//!
//! Neither binds anything; each only asks a question of the current
//! substitution.

use crate::goal::{succeed, Goal};
use crate::stream::Stream;
use crate::subst::{is_ground, walk};
use crate::term::Term;

/// `numbero(x)`: succeeds, without binding anything, iff `x` walks to a
/// number. An unbound `x` fails rather than being constrained.
pub fn numbero(x: Term) -> Goal {
    Goal::new(move |st| {
        if walk(&x, &st).is_number() {
            succeed().run(st)
        } else {
            Stream::Empty
        }
    })
}

/// `groundo(x)`: succeeds, without binding anything, iff `x` contains no
/// unbound variables anywhere in its structure.
pub fn groundo(x: Term) -> Goal {
    Goal::new(move |st| {
        if is_ground(&x, &st) {
            succeed().run(st)
        } else {
            Stream::Empty
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::subst::State;

    #[test]
    fn numbero_accepts_numbers_and_rejects_others() {
        assert_eq!(numbero(Term::Int(5)).run(State::empty()).count(), 1);
        assert_eq!(numbero(Term::str("5")).run(State::empty()).count(), 0);
        assert_eq!(numbero(Term::fresh("$X")).run(State::empty()).count(), 0);
    }

    #[test]
    fn groundo_rejects_a_sequence_with_an_unbound_element() {
        let x = Term::fresh("$X");
        let seq = Term::list(vec![Term::Int(1), x]);
        assert_eq!(groundo(seq).run(State::empty()).count(), 0);
        let ground_seq = Term::list(vec![Term::Int(1), Term::Int(2)]);
        assert_eq!(groundo(ground_seq).run(State::empty()).count(), 1);
    }
}
