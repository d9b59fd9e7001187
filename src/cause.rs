// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::{
    any::{
        self,
        Any,
        TypeId,
    },
    error,
    fmt,
};

/// The error descriptor carried by a failed [Outcome](crate::Outcome).
///
/// A cause pairs a kind tag with a message. The kind is the [TypeId] of the
/// type the cause was created from, so kind checks are exact runtime identity:
/// a cause created from one error type never matches another, related or not.
#[derive(Clone)]
pub struct Cause {
    kind: TypeId,
    kind_name: &'static str,
    message: String,
}

impl Cause {
    /// Creates a cause with the given message, tagged as a plain [Cause].
    pub fn new(message: impl Into<String>) -> Self {
        Cause::of::<Cause>(message)
    }
    /// Creates a cause with the given message, tagged with the kind `K`.
    ///
    /// Any `'static` type can serve as a kind, including unit structs that
    /// exist only to name a failure category.
    pub fn of<K: Any>(message: impl Into<String>) -> Self {
        Cause {
            kind: TypeId::of::<K>(),
            kind_name: any::type_name::<K>(),
            message: message.into(),
        }
    }
    /// Captures an error value as a cause.
    ///
    /// The kind becomes the error's concrete type and the message its display
    /// form. Nothing is wrapped and nothing is lost.
    pub fn from_error<E>(error: E) -> Self
    where E: error::Error + 'static {
        Cause {
            kind: TypeId::of::<E>(),
            kind_name: any::type_name::<E>(),
            message: error.to_string(),
        }
    }
    /// Converts a panic payload into a cause.
    ///
    /// A payload that is itself a [Cause] passes through unchanged. A string
    /// payload (what `panic!` with a message produces) becomes a
    /// [CaughtPanic] cause carrying that text. Any other payload becomes a
    /// [CaughtPanic] cause with a placeholder message.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Cause>() {
            Ok(cause) => *cause,
            Err(payload) => match payload.downcast::<String>() {
                Ok(message) => Cause::of::<CaughtPanic>(*message),
                Err(payload) => match payload.downcast::<&'static str>() {
                    Ok(message) => Cause::of::<CaughtPanic>(*message),
                    Err(_) => {
                        Cause::of::<CaughtPanic>("A panic occurred with a payload that is not a message.")
                    },
                },
            },
        }
    }
    /// Returns true if this cause's kind is exactly `K`.
    pub fn is<K: Any>(&self) -> bool {
        self.kind == TypeId::of::<K>()
    }
    /// The message this cause was created with.
    pub fn message(&self) -> &str {
        &self.message
    }
    /// The name of the type this cause is tagged with.
    pub fn kind_name(&self) -> &'static str {
        self.kind_name
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("kind", &self.kind_name)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for Cause {}

/// The kind of the cause fabricated when an outcome holding neither a value
/// nor a cause is unwrapped.
#[derive(Copy, Clone, Debug)]
pub struct EmptyOutcome;

/// The kind of causes recovered from panic payloads that are not themselves
/// a [Cause].
#[derive(Copy, Clone, Debug)]
pub struct CaughtPanic;
