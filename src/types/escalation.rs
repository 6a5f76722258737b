//! Errors that leave a handler chain.
//!
//! A [`HandlerChain`](crate::types::HandlerChain) either absorbs a domain error or
//! escalates it. Escalation takes one of two forms:
//!
//! - [`UnhandledError`] when the scan finished without a terminal match
//! - a boxed error raised by a matched handler's own action
//!
//! Both are carried by [`Escalation`], the error type of every fallible entry point
//! in this crate.
//!
//! # Examples
//!
//! ```
//! use handler_rail::{Escalation, HandlerChain};
//!
//! let chain = HandlerChain::<&str>::new();
//! let escalation = chain.dispatch("disk full").unwrap_err();
//!
//! assert!(escalation.is_unhandled());
//! assert_eq!(escalation.cause(), Some(&"disk full"));
//! assert_eq!(escalation.to_string(), "unhandled error: disk full");
//! ```
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::Box;

/// Type-erased error raised by a handler action.
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Produced when a chain is exhausted without a terminal match.
///
/// Wraps the original domain error as its cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledError<E> {
    cause: E,
}

impl<E> UnhandledError<E> {
    /// Wraps `cause`.
    #[inline]
    pub fn new(cause: E) -> Self {
        Self { cause }
    }

    /// Returns the original domain error.
    #[inline]
    pub fn cause(&self) -> &E {
        &self.cause
    }

    /// Consumes the wrapper, returning the original domain error.
    #[inline]
    pub fn into_cause(self) -> E {
        self.cause
    }
}

impl<E: Display> Display for UnhandledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unhandled error: {}", self.cause)
    }
}

impl<E> core::error::Error for UnhandledError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// An error that a handler chain refused to absorb.
pub enum Escalation<E> {
    /// No terminal handler matched; the domain error is preserved as the cause.
    Unhandled(UnhandledError<E>),
    /// A matched handler raised its own error (e.g. a wrap-and-raise handler).
    Raised(BoxedError),
}

impl<E> Escalation<E> {
    /// Creates an [`Escalation::Unhandled`] wrapping `cause`.
    #[inline]
    pub fn unhandled(cause: E) -> Self {
        Escalation::Unhandled(UnhandledError::new(cause))
    }

    /// Creates an [`Escalation::Raised`] from anything convertible into a boxed error.
    #[inline]
    pub fn raised<R>(error: R) -> Self
    where
        R: Into<BoxedError>,
    {
        Escalation::Raised(error.into())
    }

    /// Returns `true` if the chain was exhausted without a terminal match.
    #[inline]
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Escalation::Unhandled(_))
    }

    /// Returns `true` if a handler raised its own error.
    #[inline]
    pub fn is_raised(&self) -> bool {
        matches!(self, Escalation::Raised(_))
    }

    /// Returns the original domain error for unhandled escalations.
    #[inline]
    pub fn cause(&self) -> Option<&E> {
        match self {
            Escalation::Unhandled(unhandled) => Some(unhandled.cause()),
            Escalation::Raised(_) => None,
        }
    }

    /// Returns the raised error, if any, as a concrete type.
    ///
    /// # Examples
    ///
    /// ```
    /// use handler_rail::{Escalation, HandlerChain};
    /// use handler_rail::types::Handler;
    ///
    /// #[derive(Debug)]
    /// struct Fatal(String);
    ///
    /// impl std::fmt::Display for Fatal {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(f, "fatal: {}", self.0)
    ///     }
    /// }
    ///
    /// impl std::error::Error for Fatal {}
    ///
    /// let chain = HandlerChain::<&str>::new();
    /// chain.append(Handler::try_new(|e: &&str| Err(Fatal(e.to_string()).into())));
    ///
    /// let escalation = chain.dispatch("timeout").unwrap_err();
    /// assert_eq!(escalation.downcast_ref::<Fatal>().unwrap().0, "timeout");
    /// ```
    pub fn downcast_ref<R>(&self) -> Option<&R>
    where
        R: core::error::Error + 'static,
    {
        match self {
            Escalation::Raised(raised) => raised.downcast_ref::<R>(),
            Escalation::Unhandled(_) => None,
        }
    }

    /// Converts into the [`UnhandledError`], if this is one.
    #[inline]
    pub fn into_unhandled(self) -> Option<UnhandledError<E>> {
        match self {
            Escalation::Unhandled(unhandled) => Some(unhandled),
            Escalation::Raised(_) => None,
        }
    }

    /// Converts into the raised error, if this is one.
    #[inline]
    pub fn into_raised(self) -> Option<BoxedError> {
        match self {
            Escalation::Raised(raised) => Some(raised),
            Escalation::Unhandled(_) => None,
        }
    }
}

impl<E> From<UnhandledError<E>> for Escalation<E> {
    #[inline]
    fn from(unhandled: UnhandledError<E>) -> Self {
        Escalation::Unhandled(unhandled)
    }
}

impl<E: Debug> Debug for Escalation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escalation::Unhandled(unhandled) => {
                f.debug_tuple("Unhandled").field(unhandled).finish()
            },
            Escalation::Raised(raised) => f.debug_tuple("Raised").field(raised).finish(),
        }
    }
}

impl<E: Display> Display for Escalation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escalation::Unhandled(unhandled) => Display::fmt(unhandled, f),
            Escalation::Raised(raised) => Display::fmt(raised, f),
        }
    }
}

impl<E> core::error::Error for Escalation<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Escalation::Unhandled(unhandled) => Some(unhandled.cause()),
            Escalation::Raised(raised) => raised.source(),
        }
    }
}
