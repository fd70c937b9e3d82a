//! Terms: the values logic variables can be bound to.
//!
//! A term is a variable, an atomic ground value, or an ordered sequence of
//! terms. Sequences double as both tuples and lists; the empty sequence is
//! the empty list. `Seq` and `Str` carry an `Rc` payload so that cloning a
//! term stays cheap, since terms get cloned constantly while threading
//! substitutions through goals.

use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::var::LogicVar;

/// A unifiable term.
#[derive(Debug, Clone)]
pub enum Term {
    /// A logic variable.
    Var(LogicVar),
    /// A machine-width integer. Arithmetic predicates promote to `Big`
    /// rather than wrapping on overflow.
    Int(i64),
    /// An arbitrary-precision integer.
    Big(BigInt),
    /// A string constant.
    Str(Rc<str>),
    /// A boolean constant.
    Bool(bool),
    /// An ordered sequence of terms. Represents both tuples and lists;
    /// `Term::Seq(Rc::new(vec![]))` is the empty list.
    Seq(Rc<Vec<Term>>),
    /// The sentinel for "undefined" (distinct from an unbound variable).
    Undef,
}

impl Term {
    /// The empty list.
    pub fn nil() -> Term {
        Term::Seq(Rc::new(Vec::new()))
    }

    /// Builds a list term from owned elements.
    pub fn list(items: Vec<Term>) -> Term {
        Term::Seq(Rc::new(items))
    }

    /// Mints a fresh, uniquely-numbered variable term labeled `name`.
    pub fn fresh(name: &str) -> Term {
        Term::Var(LogicVar::fresh(name))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Term::Seq(_))
    }

    /// True for `Int` and `Big`.
    pub fn is_number(&self) -> bool {
        matches!(self, Term::Int(_) | Term::Big(_))
    }

    /// Returns this term's numeric value as a `BigInt`, if it is a number.
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Term::Int(i) => Some(BigInt::from(*i)),
            Term::Big(b) => Some(b.clone()),
            _ => None,
        }
    }

    /// Normalizes a `BigInt` back to `Term::Int` when it fits in an `i64`,
    /// otherwise keeps full precision as `Term::Big`.
    pub fn from_bigint(b: BigInt) -> Term {
        match b.to_i64() {
            Some(i) => Term::Int(i),
            None => Term::Big(b),
        }
    }

    pub fn str(s: impl Into<Rc<str>>) -> Term {
        Term::Str(s.into())
    }
}

/// Structural equality. Numbers compare by value across `Int`/`Big`;
/// variables compare by id.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Str(a), Term::Str(b)) => a == b,
            (Term::Bool(a), Term::Bool(b)) => a == b,
            (Term::Undef, Term::Undef) => true,
            (Term::Seq(a), Term::Seq(b)) => a == b,
            (a, b) if a.is_number() && b.is_number() => {
                a.as_bigint() == b.as_bigint()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::Int(i) => write!(f, "{}", i),
            Term::Big(b) => write!(f, "{}", b),
            Term::Str(s) => write!(f, "{:?}", s),
            Term::Bool(b) => write!(f, "{}", b),
            Term::Undef => write!(f, "undefined"),
            Term::Seq(items) => {
                write!(f, "[")?;
                for (i, t) in items.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", t)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Zero, for the `lengtho`/`between` naturals.
pub fn zero_bigint() -> BigInt {
    BigInt::zero()
}
