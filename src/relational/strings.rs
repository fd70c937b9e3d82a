//! String predicates: `string_chars`, `number_chars`.
//!
//! Both convert between a ground term and a list form; neither guesses a
//! direction when both arguments are unbound.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::goal::{eq, instantiation_error, Goal};
use crate::stream::Stream;
use crate::subst::walk;
use crate::term::Term;

fn chars_of(items: &[Term]) -> Option<String> {
    let mut out = String::new();
    for item in items {
        match item {
            Term::Str(c) if c.chars().count() == 1 => out.push_str(c),
            _ => return None,
        }
    }
    Some(out)
}

/// `string_chars(s, cs)`: relates a string to the list of its single-
/// character substrings. At least one side must be ground.
pub fn string_chars(s: Term, cs: Term) -> Goal {
    Goal::new(move |st| match walk(&s, &st) {
        Term::Str(text) => {
            let chars: Vec<Term> = text.chars().map(|c| Term::str(c.to_string())).collect();
            eq(cs.clone(), Term::list(chars)).run(st)
        }
        _ => match walk(&cs, &st) {
            Term::Seq(items) => match chars_of(&items) {
                Some(joined) => eq(s.clone(), Term::str(joined)).run(st),
                None => Stream::Empty,
            },
            _ => instantiation_error("string-chars: s or cs must be ground").run(st),
        },
    })
}

/// `number_chars(n, cs)`: relates a number to the list of the single-
/// character substrings of its decimal representation. At least one side
/// must be ground.
pub fn number_chars(n: Term, cs: Term) -> Goal {
    Goal::new(move |st| {
        let rn = walk(&n, &st);
        if rn.is_number() {
            let text = rn.as_bigint().expect("is_number implies as_bigint").to_string();
            let chars: Vec<Term> = text.chars().map(|c| Term::str(c.to_string())).collect();
            eq(cs.clone(), Term::list(chars)).run(st)
        } else {
            match walk(&cs, &st) {
                Term::Seq(items) => match chars_of(&items) {
                    Some(joined) => match BigInt::from_str(&joined) {
                        Ok(b) => eq(n.clone(), Term::from_bigint(b)).run(st),
                        Err(_) => Stream::Empty,
                    },
                    None => Stream::Empty,
                },
                _ => instantiation_error("number-chars: n or cs must be ground").run(st),
            }
        }
    })
}
