//! An optional value whose transformations may fail.
//!
//! [`TryOption`] mirrors `Option` and adds `try_*` variants of its combinators
//! that accept fallible closures. Each `try_*` method returns a [`Deferred`]
//! computation so the caller decides how failures are handled before anything
//! runs:
//!
//! ```
//! use handler_rail::types::{Handler, TryOption};
//!
//! let port = TryOption::of("80a")
//!     .try_map(|s: &str| s.parse::<u16>())
//!     .handle(Handler::absorb())
//!     .terminate()
//!     .unwrap();
//!
//! assert!(port.is_empty());
//! ```
use core::cell::Cell;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adapter::{
    adapt_function, adapt_optional_function, adapt_predicate, adapt_procedure, adapt_supplier,
};
use crate::types::alloc_type::Rc;
use crate::types::deferred::Deferred;
use crate::types::escalation::Escalation;
use crate::types::handler_chain::HandlerChain;

/// Returned by [`TryOption::get`] when no value is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no value present")
    }
}

impl core::error::Error for NoSuchElement {}

/// An `Option` with fallible, handler-driven combinators.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TryOption<T> {
    inner: Option<T>,
}

impl<T> TryOption<T> {
    /// Returns an empty value.
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Returns a present value.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Wraps an existing `Option`.
    #[inline]
    pub const fn from_option(inner: Option<T>) -> Self {
        Self { inner }
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the value is absent.
    #[inline]
    pub fn get(&self) -> Result<&T, NoSuchElement> {
        self.inner.as_ref().ok_or(NoSuchElement)
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    /// Runs `action` with the value if present.
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.inner {
            action(value);
        }
    }

    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self { inner: self.inner.filter(predicate) }
    }

    #[inline]
    pub fn map<U, F>(self, mapper: F) -> TryOption<U>
    where
        F: FnOnce(T) -> U,
    {
        TryOption { inner: self.inner.map(mapper) }
    }

    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> TryOption<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        TryOption { inner: self.inner.and_then(mapper) }
    }

    #[inline]
    pub fn or_else(self, other: T) -> T {
        self.inner.unwrap_or(other)
    }

    #[inline]
    pub fn or_else_get<F>(self, other: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.inner.unwrap_or_else(other)
    }

    /// Returns the value, or the error built by `error` if absent.
    ///
    /// # Errors
    ///
    /// Returns `error()` if the value is absent.
    #[inline]
    pub fn or_else_throw<X, F>(self, error: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        self.inner.ok_or_else(error)
    }
}

impl<T: Clone + 'static> TryOption<T> {
    /// Fallible [`if_present`](Self::if_present).
    ///
    /// The deferred value is this `TryOption`, unchanged.
    pub fn try_if_present<E, F>(self, action: F) -> Deferred<TryOption<T>, E>
    where
        E: 'static,
        F: Fn(&T) -> Result<(), E> + 'static,
    {
        let (chain, callable) = adapt_procedure(move |value: T| action(&value)).into_parts();
        let source = self.inner.clone();
        let effect = move || match source.clone() {
            Some(value) => callable(value),
            None => Ok(()),
        };
        Deferred::of_with_effect(self, chain, effect)
    }

    /// Fallible [`filter`](Self::filter). An absorbed error filters the value out.
    pub fn try_filter<E, P>(self, predicate: P) -> Deferred<TryOption<T>, E>
    where
        E: 'static,
        P: Fn(&T) -> Result<bool, E> + 'static,
    {
        let (chain, callable) = adapt_predicate(move |value: T| predicate(&value)).into_parts();
        let source = self.inner;
        deferred_through(chain, move || match source.clone() {
            Some(value) => {
                let keep = callable(value.clone())?;
                Ok(TryOption { inner: keep.then_some(value) })
            },
            None => Ok(TryOption::empty()),
        })
    }

    /// Fallible [`map`](Self::map). An absorbed error yields an empty result.
    pub fn try_map<U, E, F>(self, mapper: F) -> Deferred<TryOption<U>, E>
    where
        U: 'static,
        E: 'static,
        F: Fn(T) -> Result<U, E> + 'static,
    {
        let (chain, callable) = adapt_function(mapper).into_parts();
        let source = self.inner;
        deferred_through(chain, move || {
            let mapped = source.clone().map(&callable).transpose()?;
            Ok(TryOption { inner: mapped.flatten() })
        })
    }

    /// Fallible [`flat_map`](Self::flat_map). An absorbed error yields an empty result.
    pub fn try_flat_map<U, E, F>(self, mapper: F) -> Deferred<TryOption<U>, E>
    where
        U: 'static,
        E: 'static,
        F: Fn(T) -> Result<Option<U>, E> + 'static,
    {
        let (chain, callable) = adapt_optional_function(mapper).into_parts();
        let source = self.inner;
        deferred_through(chain, move || {
            let mapped = source.clone().map(&callable).transpose()?;
            Ok(TryOption { inner: mapped.flatten() })
        })
    }

    /// Fallible [`or_else_get`](Self::or_else_get).
    ///
    /// The deferred value is `None` only when the value was absent and the
    /// supplier's error was absorbed.
    pub fn try_or_else_get<E, F>(self, other: F) -> Deferred<Option<T>, E>
    where
        E: 'static,
        F: Fn() -> Result<T, E> + 'static,
    {
        let (chain, callable) = adapt_supplier(other).into_parts();
        let source = self.inner;
        deferred_through(chain, move || match source.clone() {
            Some(value) => Ok(Some(value)),
            None => callable(),
        })
    }
}

/// Builds a [`Deferred`] whose side effect computes the value and whose producer
/// hands it over.
fn deferred_through<R, E, S>(chain: HandlerChain<E>, mut compute: S) -> Deferred<R, E>
where
    R: Default + 'static,
    E: 'static,
    S: FnMut() -> Result<R, Escalation<E>> + 'static,
{
    let slot = Rc::new(Cell::new(None));
    let sink = Rc::clone(&slot);
    let effect = move || {
        sink.set(Some(compute()?));
        Ok(())
    };
    Deferred::lazy_with_effect(move || slot.take().unwrap_or_default(), chain, effect)
}

impl<T> Default for TryOption<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for TryOption<T> {
    #[inline]
    fn from(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<TryOption<T>> for Option<T> {
    #[inline]
    fn from(value: TryOption<T>) -> Self {
        value.inner
    }
}
