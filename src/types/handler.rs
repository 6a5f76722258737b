//! A single matching rule in a [`HandlerChain`](crate::types::HandlerChain).
//!
//! A [`Handler`] pairs a matcher, an action and a terminal flag:
//!
//! - the matcher decides whether the handler applies to an error
//! - the action runs on every matching error and may raise its own error
//! - a terminal handler stops the scan once its action has run
//!
//! Handlers are immutable once built. Builder methods consume and return the
//! handler, so configuration reads left to right.
//!
//! # Examples
//!
//! ```
//! use handler_rail::types::Handler;
//!
//! let audit = Handler::new(|e: &i32| println!("audit: {e}"))
//!     .matching(|e| *e >= 500)
//!     .non_terminal();
//!
//! assert!(audit.can_handle(&503));
//! assert!(!audit.can_handle(&404));
//! assert!(!audit.is_terminal());
//! ```
use core::fmt;

use crate::traits::Classified;
use crate::types::alloc_type::Box;
use crate::types::escalation::BoxedError;

type Matcher<E> = Box<dyn Fn(&E) -> bool>;
type Action<E> = Box<dyn Fn(&E) -> Result<(), BoxedError>>;

/// One `(matcher, action, terminal)` rule.
///
/// By default a handler matches every error and is terminal.
#[must_use]
pub struct Handler<E> {
    matcher: Matcher<E>,
    action: Action<E>,
    terminal: bool,
}

impl<E: 'static> Handler<E> {
    /// Creates a terminal catch-all handler whose action cannot fail.
    #[inline]
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&E) + 'static,
    {
        Self::try_new(move |error| {
            action(error);
            Ok(())
        })
    }

    /// Creates a terminal catch-all handler whose action may raise.
    ///
    /// An `Err` returned by the action escalates out of the chain as
    /// [`Escalation::Raised`](crate::Escalation::Raised).
    #[inline]
    pub fn try_new<F>(action: F) -> Self
    where
        F: Fn(&E) -> Result<(), BoxedError> + 'static,
    {
        Self { matcher: Box::new(|_: &E| true), action: Box::new(action), terminal: true }
    }

    /// Creates a terminal handler that absorbs matching errors without doing anything.
    #[inline]
    pub fn absorb() -> Self {
        Self::new(|_: &E| {})
    }

    /// Replaces the matcher with an explicit predicate.
    #[inline]
    pub fn matching<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + 'static,
    {
        self.matcher = Box::new(predicate);
        self
    }

    /// Restricts the handler to errors of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use handler_rail::types::Handler;
    /// use std::io;
    ///
    /// let handler = Handler::new(|_: &io::Error| {}).of_kind(io::ErrorKind::NotFound);
    ///
    /// assert!(handler.can_handle(&io::Error::from(io::ErrorKind::NotFound)));
    /// assert!(!handler.can_handle(&io::Error::from(io::ErrorKind::TimedOut)));
    /// ```
    #[inline]
    pub fn of_kind(self, kind: E::Kind) -> Self
    where
        E: Classified,
        E::Kind: 'static,
    {
        self.matching(move |error| error.is_kind(&kind))
    }

    /// Shorthand for `Handler::new(action).of_kind(kind)`.
    #[inline]
    pub fn for_kind<F>(kind: E::Kind, action: F) -> Self
    where
        E: Classified,
        E::Kind: 'static,
        F: Fn(&E) + 'static,
    {
        Self::new(action).of_kind(kind)
    }
}

impl<E> Handler<E> {
    /// Sets whether a match stops the scan.
    #[inline]
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Lets later handlers run after this one matched.
    #[inline]
    pub fn non_terminal(self) -> Self {
        self.terminal(false)
    }

    /// Returns `true` if a match stops the scan.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns `true` if this handler applies to `error`.
    #[inline]
    pub fn can_handle(&self, error: &E) -> bool {
        (self.matcher)(error)
    }

    /// Runs the action on `error`.
    #[inline]
    pub fn handle(&self, error: &E) -> Result<(), BoxedError> {
        (self.action)(error)
    }
}

impl Handler<BoxedError> {
    /// Creates a terminal handler for type-erased errors that matches when the
    /// error is a `K`.
    ///
    /// The action receives the error already downcast.
    ///
    /// # Examples
    ///
    /// ```
    /// use handler_rail::types::{BoxedError, Handler};
    /// use std::fmt;
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    ///
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("timed out")
    ///     }
    /// }
    ///
    /// impl std::error::Error for Timeout {}
    ///
    /// let handler = Handler::downcast(|_: &Timeout| {});
    /// let timeout: BoxedError = Box::new(Timeout);
    /// let other: BoxedError = "other".into();
    ///
    /// assert!(handler.can_handle(&timeout));
    /// assert!(!handler.can_handle(&other));
    /// ```
    pub fn downcast<K, F>(action: F) -> Self
    where
        K: core::error::Error + 'static,
        F: Fn(&K) + 'static,
    {
        Self::try_new(move |error: &BoxedError| {
            if let Some(typed) = error.downcast_ref::<K>() {
                action(typed);
            }
            Ok(())
        })
        .matching(|error: &BoxedError| error.is::<K>())
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("terminal", &self.terminal)
            .finish_non_exhaustive()
    }
}
