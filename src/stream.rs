//! The lazy stream of substitutions a goal produces.
//!
//! A `Stream` is a tagged variant with three cases — empty, a materialized
//! head with a tail, and a suspended thunk not yet forced. `mplus_seq`/
//! `mplus_int`/`bind` pattern-match and re-suspend rather than recursing
//! eagerly, so recursive goal construction via [crate::goal::delay] never
//! runs ahead of what the consumer has pulled.
//!
//! A stream element is `Result<State, EngineError>`: logical failure is the
//! absence of a next element, while an instantiation/misuse error is a
//! value the stream yields once before terminating. Every combinator below
//! that joins two streams together stops at the first `Err` it sees rather
//! than splicing in the other operand afterward — once a stream has raised
//! an error it never produces anything else.

use log::trace;

use crate::error::EngineError;
use crate::subst::State;

pub type StreamItem = Result<State, EngineError>;

/// A lazy, forward-only, single-consumption sequence of substitutions.
pub enum Stream {
    /// No more elements.
    Empty,
    /// A materialized head (possibly an error) with the rest of the
    /// stream, not yet forced.
    Cons(StreamItem, Box<Stream>),
    /// Work not yet done; forcing it produces a new `Stream`.
    Delay(Box<dyn FnOnce() -> Stream>),
}

impl Stream {
    /// The stream with no elements.
    pub fn empty() -> Stream {
        Stream::Empty
    }

    /// A stream of exactly one element.
    pub fn unit(item: StreamItem) -> Stream {
        Stream::Cons(item, Box::new(Stream::Empty))
    }

    /// A suspended stream; `f` is not invoked until something pulls past it.
    pub fn delay<F>(f: F) -> Stream
    where
        F: FnOnce() -> Stream + 'static,
    {
        Stream::Delay(Box::new(f))
    }

    /// Forces suspended thunks until the stream exposes `Empty` or `Cons`.
    fn force(self) -> Stream {
        let mut s = self;
        loop {
            match s {
                Stream::Delay(thunk) => s = thunk(),
                other => return other,
            }
        }
    }

    /// Splits off the head element, forcing as many thunks as needed to
    /// find it. Returns `None` once the stream is exhausted.
    pub fn uncons(self) -> Option<(StreamItem, Stream)> {
        match self.force() {
            Stream::Empty => None,
            Stream::Cons(item, rest) => Some((item, *rest)),
            Stream::Delay(_) => unreachable!("force() never returns Delay"),
        }
    }
}

/// Pull-based consumption: `for result in stream { ... }`. Each `next()`
/// call forces only as much of the stream as needed for one element.
impl Iterator for Stream {
    type Item = StreamItem;

    fn next(&mut self) -> Option<Self::Item> {
        let current = std::mem::replace(self, Stream::Empty);
        let (item, rest) = current.uncons()?;
        *self = rest;
        Some(item)
    }
}

/// Sequential concatenation: fully enumerates `a` before yielding anything
/// from `b`. Used by `disj`/`conde`. Stops immediately, without touching
/// `b` at all, the moment `a` yields an `Err`.
pub fn mplus_seq(a: Stream, b: Stream) -> Stream {
    match a {
        Stream::Empty => b,
        Stream::Delay(thunk) => Stream::delay(move || mplus_seq(thunk(), b)),
        Stream::Cons(Err(e), _rest) => Stream::unit(Err(e)),
        Stream::Cons(item, rest) => Stream::Cons(item, Box::new(mplus_seq(*rest, b))),
    }
}

/// Fair interleaving of two streams: swaps sides every time it has to
/// suspend or has just produced an element, so a finite answer buried in
/// either stream surfaces at finite depth regardless of the other stream's
/// length (even if the other is infinite). Used by `disji`/`condi`. Stops
/// immediately, without visiting the other side again, the moment either
/// side yields an `Err`.
pub fn mplus_int(a: Stream, b: Stream) -> Stream {
    match a {
        Stream::Empty => b,
        Stream::Delay(thunk) => Stream::delay(move || mplus_int(b, thunk())),
        Stream::Cons(Err(e), _rest) => Stream::unit(Err(e)),
        Stream::Cons(item, rest) => Stream::Cons(item, Box::new(mplus_int(b, *rest))),
    }
}

/// `n`-ary fair interleaving: visits each still-live stream in turn,
/// round-robin, skipping any that are already exhausted. Stops immediately,
/// without visiting any other queued stream, the moment one yields an
/// `Err`.
pub fn mplus_int_n(streams: Vec<Stream>) -> Stream {
    round_robin(streams.into_iter().collect())
}

fn round_robin(mut q: std::collections::VecDeque<Stream>) -> Stream {
    loop {
        match q.pop_front() {
            None => return Stream::Empty,
            Some(Stream::Empty) => continue,
            Some(Stream::Delay(thunk)) => {
                trace!("disji/condi: forcing a suspended clause");
                q.push_back(thunk());
            }
            Some(Stream::Cons(Err(e), _rest)) => {
                trace!("disji/condi: a clause raised an error, terminating the stream");
                return Stream::unit(Err(e));
            }
            Some(Stream::Cons(item, rest)) => {
                trace!("disji/condi: round-robin cursor advances");
                q.push_back(*rest);
                return Stream::Cons(item, Box::new(Stream::delay(move || round_robin(q))));
            }
        }
    }
}

/// Sequential composition: for each substitution pulled from `stream`,
/// splices in `goal(s)` — fully, before advancing to the next element of
/// `stream`. Used by `conj`. An `Err` item from `stream` is passed through
/// and ends the stream: it is never pulled again, and `goal` is never
/// invoked on it.
pub fn bind<F>(stream: Stream, goal: F) -> Stream
where
    F: Fn(State) -> Stream + 'static + Clone,
{
    match stream {
        Stream::Empty => Stream::Empty,
        Stream::Delay(thunk) => Stream::delay(move || bind(thunk(), goal)),
        Stream::Cons(Ok(state), rest) => {
            let goal2 = goal.clone();
            mplus_seq(goal(state), Stream::delay(move || bind(*rest, goal2)))
        }
        Stream::Cons(Err(e), _rest) => Stream::unit(Err(e)),
    }
}

/// Truncates `stream` to at most `n` elements, lazily: elements beyond
/// `n` are never computed.
pub fn take_stream(n: usize, stream: Stream) -> Stream {
    if n == 0 {
        return Stream::Empty;
    }
    match stream {
        Stream::Empty => Stream::Empty,
        Stream::Delay(thunk) => Stream::delay(move || take_stream(n, thunk())),
        Stream::Cons(item, rest) => Stream::Cons(item, Box::new(take_stream(n - 1, *rest))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn s(n: i64) -> State {
        State::empty().extend(1, crate::term::Term::Int(n))
    }

    #[test]
    fn mplus_seq_enumerates_a_before_b() {
        let a = Stream::Cons(Ok(s(1)), Box::new(Stream::unit(Ok(s(2)))));
        let b = Stream::unit(Ok(s(3)));
        let out: Vec<_> = mplus_seq(a, b).collect();
        let vals: Vec<i64> = out
            .into_iter()
            .map(|r| match r.unwrap().lookup(1).unwrap() {
                crate::term::Term::Int(i) => *i,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(vals, vec![1, 2, 3]);
    }

    #[test]
    fn mplus_int_alternates() {
        let a = Stream::Cons(Ok(s(1)), Box::new(Stream::unit(Ok(s(1)))));
        let b = Stream::Cons(Ok(s(2)), Box::new(Stream::unit(Ok(s(2)))));
        let out: Vec<_> = mplus_int(a, b).collect();
        let vals: Vec<i64> = out
            .into_iter()
            .map(|r| match r.unwrap().lookup(1).unwrap() {
                crate::term::Term::Int(i) => *i,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(vals, vec![1, 2, 1, 2]);
    }

    #[test]
    fn take_stream_bounds_an_infinite_stream() {
        fn naturals(n: i64) -> Stream {
            Stream::Cons(Ok(s(n)), Box::new(Stream::delay(move || naturals(n + 1))))
        }
        let out: Vec<_> = take_stream(3, naturals(0)).collect();
        assert_eq!(out.len(), 3);
    }

    fn err() -> StreamItem {
        Err(EngineError::instantiation("test"))
    }

    #[test]
    fn mplus_seq_stops_at_an_error_without_touching_b() {
        let a = Stream::unit(err());
        let b = Stream::unit(Ok(s(9)));
        let out: Vec<_> = mplus_seq(a, b).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_err());
    }

    #[test]
    fn mplus_int_stops_at_an_error_without_touching_b() {
        let a = Stream::unit(err());
        let b = Stream::unit(Ok(s(9)));
        let out: Vec<_> = mplus_int(a, b).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_err());
    }

    #[test]
    fn mplus_int_n_stops_at_an_error_without_visiting_other_streams() {
        let streams = vec![Stream::unit(err()), Stream::unit(Ok(s(9))), Stream::unit(Ok(s(10)))];
        let out: Vec<_> = mplus_int_n(streams).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_err());
    }

    #[test]
    fn bind_never_invokes_goal_on_an_error() {
        let stream = Stream::unit(err());
        let out: Vec<_> = bind(stream, |s| Stream::unit(Ok(s))).collect();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_err());
    }
}
