//! Extension trait for routing a `Result`'s error through a handler chain.
//!
//! This is the building block of the [`adapter`](crate::adapter) module: a
//! fallible call produces a `Result`, and [`DispatchExt`] turns it into either
//! the success value, an absorbed-error fallback, or an [`Escalation`].
//!
//! # Examples
//!
//! ```
//! use handler_rail::traits::DispatchExt;
//! use handler_rail::types::{Handler, HandlerChain};
//!
//! let chain = HandlerChain::<std::num::ParseIntError>::new().with(Handler::absorb());
//!
//! assert_eq!("42".parse::<i32>().dispatch_to(&chain).unwrap(), Some(42));
//! assert_eq!("x".parse::<i32>().dispatch_to(&chain).unwrap(), None);
//! assert_eq!("x".parse::<i32>().dispatch_or(&chain, -1).unwrap(), -1);
//! ```
use crate::types::{Escalation, HandlerChain};

/// Routes errors of a `Result` into a [`HandlerChain`].
pub trait DispatchExt<T, E> {
    /// Returns `Some(value)` on success, `None` if the chain absorbed the error.
    ///
    /// # Errors
    ///
    /// Returns the chain's [`Escalation`] if no terminal handler absorbed the error.
    fn dispatch_to(self, chain: &HandlerChain<E>) -> Result<Option<T>, Escalation<E>>;

    /// Returns the success value, or `fallback` if the chain absorbed the error.
    ///
    /// # Errors
    ///
    /// Returns the chain's [`Escalation`] if no terminal handler absorbed the error.
    fn dispatch_or(self, chain: &HandlerChain<E>, fallback: T) -> Result<T, Escalation<E>>;
}

impl<T, E> DispatchExt<T, E> for Result<T, E> {
    #[inline]
    fn dispatch_to(self, chain: &HandlerChain<E>) -> Result<Option<T>, Escalation<E>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(error) => chain.dispatch(error).map(|()| None),
        }
    }

    #[inline]
    fn dispatch_or(self, chain: &HandlerChain<E>, fallback: T) -> Result<T, Escalation<E>> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => chain.dispatch(error).map(|()| fallback),
        }
    }
}
