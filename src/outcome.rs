// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::{
    any::Any,
    fmt,
    panic::{
        self,
        UnwindSafe,
    },
};

use crate::cause::{
    Cause,
    EmptyOutcome,
};

/// The message of the cause fabricated for outcomes that were never given
/// a value or a cause.
const EMPTY_MESSAGE: &str = "Attempted to unwrap an Outcome holding neither a value nor a cause.";

/// A value that is either a success of type `T` or a failure carrying a [Cause].
///
/// An outcome is created at the return statement of a function that would
/// otherwise panic: the failure travels back to the caller as an ordinary
/// value, stays contained while the caller inspects or compares it, and only
/// re-enters the panic channel if the caller [unwraps](Outcome::unwrap) it.
///
/// Once constructed an outcome never changes. It holds exactly one of the two
/// branches, except for the [default](Outcome::default) outcome, which holds
/// neither and fails on unwrap.
#[derive(Clone)]
pub struct Outcome<T> {
    state: State<T>,
}

#[derive(Clone)]
enum State<T> {
    Value(T),
    Failed(Cause),
    Empty,
}

impl<T> Outcome<T> {
    /// Creates a successful outcome holding the given value.
    pub fn ok(value: T) -> Self {
        Outcome {
            state: State::Value(value),
        }
    }
    /// Creates a failed outcome holding the given cause.
    pub fn err(cause: Cause) -> Self {
        Outcome {
            state: State::Failed(cause),
        }
    }
    /// Runs a closure, capturing a panic as a failed outcome.
    ///
    /// This is the inverse of [unwrap](Outcome::unwrap): a panic whose payload
    /// is a [Cause] keeps its kind and message, so a cause round-trips through
    /// the panic channel unchanged. See [Cause::from_panic] for how other
    /// payloads are converted.
    pub fn catch<F>(f: F) -> Self
    where F: FnOnce() -> T + UnwindSafe {
        match panic::catch_unwind(f) {
            Ok(value) => Outcome::ok(value),
            Err(payload) => Outcome::err(Cause::from_panic(payload)),
        }
    }
    /// Returns true if this outcome holds a value.
    ///
    /// The default outcome holds nothing: it is not ok, yet
    /// [is_err](Outcome::is_err) is false for it as well.
    pub fn is_ok(&self) -> bool {
        matches!(self.state, State::Value(_))
    }
    /// Returns true if this outcome holds a cause.
    pub fn is_err(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }
    /// Returns true if this outcome holds a cause whose kind is exactly `K`.
    ///
    /// See [Cause::is]: the comparison is runtime type identity, never
    /// any broader form of matching.
    pub fn is_err_of<K: Any>(&self) -> bool {
        match self.state {
            State::Failed(ref cause) => cause.is::<K>(),
            _ => false,
        }
    }
    /// Returns true if this outcome holds a cause whose message equals the
    /// given cause's message. Kinds are not compared.
    ///
    /// An outcome holding neither a value nor a cause compares by the message
    /// of the cause [unwrap](Outcome::unwrap) would panic with.
    pub fn equals_cause(&self, other: &Cause) -> bool {
        match self.state {
            State::Value(_) => false,
            State::Failed(ref cause) => cause.message() == other.message(),
            State::Empty => EMPTY_MESSAGE == other.message(),
        }
    }
    /// Returns the held value or panics with the held cause.
    ///
    /// This is the only operation in the crate that can panic and the single
    /// point where a contained failure re-enters the panic channel. The panic
    /// payload is the [Cause] itself, so a handler that downcasts the payload
    /// (or [Outcome::catch]) sees the original kind and message.
    /// # Panics
    /// Panics with the stored cause when this outcome holds one. Panics with
    /// a fabricated [EmptyOutcome] cause when this outcome holds neither a
    /// value nor a cause; a value of `T` is never invented.
    pub fn unwrap(self) -> T {
        match self.state {
            State::Value(value) => value,
            State::Failed(cause) => panic::panic_any(cause),
            State::Empty => panic::panic_any(empty_cause()),
        }
    }
    /// Converts this outcome into a standard [Result].
    ///
    /// An outcome holding neither a value nor a cause converts to the same
    /// [EmptyOutcome] failure that [unwrap](Outcome::unwrap) panics with.
    pub fn into_result(self) -> Result<T, Cause> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Failed(cause) => Err(cause),
            State::Empty => Err(empty_cause()),
        }
    }
}

fn empty_cause() -> Cause {
    Cause::of::<EmptyOutcome>(EMPTY_MESSAGE)
}

impl<T> Default for Outcome<T> {
    /// Creates an outcome holding neither a value nor a cause.
    ///
    /// This mirrors zero-initialized storage: it reports neither ok nor err,
    /// and unwrapping it panics rather than producing a default value.
    fn default() -> Self {
        Outcome { state: State::Empty }
    }
}

impl<T> From<T> for Outcome<T> {
    /// Wraps a bare value, so a fallible function can end with `value.into()`.
    ///
    /// The symmetric conversion from a [Cause] would overlap this one when
    /// `T` is itself `Cause`; failures use [Outcome::err] instead.
    fn from(value: T) -> Self {
        Outcome::ok(value)
    }
}

impl<T> From<Result<T, Cause>> for Outcome<T> {
    fn from(result: Result<T, Cause>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(cause) => Outcome::err(cause),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Cause> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: PartialEq> PartialEq<T> for Outcome<T> {
    /// An outcome equals a bare value when it holds a value equal to it by
    /// `T`'s own equality. Failed and default outcomes equal no value, and
    /// `!=` is the strict negation of this.
    fn eq(&self, other: &T) -> bool {
        match self.state {
            State::Value(ref value) => value == other,
            State::Failed(_) | State::Empty => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            State::Value(ref value) => f.debug_tuple("Outcome::ok").field(value).finish(),
            State::Failed(ref cause) => f.debug_tuple("Outcome::err").field(cause).finish(),
            State::Empty => f.write_str("Outcome::default"),
        }
    }
}
