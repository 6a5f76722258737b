//! Adapters that turn fallible closures into total ones bound to a fresh chain.
//!
//! Each `adapt_*` function takes a closure returning `Result<_, E>` and returns an
//! [`Adapted`] pair: a new, empty [`HandlerChain`] and a total callable sharing it.
//! When the inner closure fails, the total callable hands the error to the chain.
//! If the chain absorbs it, the callable returns a shape-specific fallback:
//!
//! | Adapter                     | Inner closure returns  | Total callable returns (`Ok`) |
//! |-----------------------------|------------------------|-------------------------------|
//! | [`adapt_procedure`]         | `Result<(), E>`        | `()`                          |
//! | [`adapt_predicate`]         | `Result<bool, E>`      | `bool`, `false` if absorbed   |
//! | [`adapt_function`]          | `Result<U, E>`         | `Option<U>`, `None` if absorbed |
//! | [`adapt_optional_function`] | `Result<Option<U>, E>` | `Option<U>`, `None` if absorbed |
//! | [`adapt_supplier`]          | `Result<T, E>`         | `Option<T>`, `None` if absorbed |
//!
//! The total callable never returns the inner error directly; it only returns
//! `Err` when the chain escalates. Handlers should be appended to
//! [`Adapted::chain`] before the callable is first invoked.
//!
//! # Examples
//!
//! ```
//! use handler_rail::adapter::adapt_function;
//! use handler_rail::types::Handler;
//!
//! let parse = adapt_function(|s: &str| s.parse::<u16>());
//! parse.chain().append(Handler::absorb());
//!
//! let call = parse.callable();
//! assert_eq!(call("8080").unwrap(), Some(8080));
//! assert_eq!(call("eighty").unwrap(), None);
//! ```

use crate::traits::DispatchExt;
use crate::types::{Escalation, HandlerChain};

/// A handler chain paired with the total callable that dispatches into it.
#[must_use]
pub struct Adapted<F, E> {
    chain: HandlerChain<E>,
    callable: F,
}

impl<F, E> Adapted<F, E> {
    /// Returns the chain the callable dispatches into.
    #[inline]
    pub fn chain(&self) -> &HandlerChain<E> {
        &self.chain
    }

    /// Returns the total callable.
    #[inline]
    pub fn callable(&self) -> &F {
        &self.callable
    }

    /// Splits the pair into the chain and the callable.
    #[inline]
    pub fn into_parts(self) -> (HandlerChain<E>, F) {
        (self.chain, self.callable)
    }
}

/// Adapts a one-argument procedure. Absorbed errors leave nothing further to do.
///
/// # Examples
///
/// ```
/// use handler_rail::adapter::adapt_procedure;
/// use handler_rail::types::Handler;
///
/// let write = adapt_procedure(|n: i32| if n < 0 { Err("negative") } else { Ok(()) });
/// write.chain().append(Handler::absorb());
///
/// assert!(write.callable()(-1).is_ok());
/// ```
pub fn adapt_procedure<A, E, F>(
    procedure: F,
) -> Adapted<impl Fn(A) -> Result<(), Escalation<E>>, E>
where
    F: Fn(A) -> Result<(), E>,
{
    let chain = HandlerChain::new();
    let bound = chain.clone();
    let callable = move |arg: A| procedure(arg).dispatch_or(&bound, ());
    Adapted { chain, callable }
}

/// Adapts a one-argument predicate. Absorbed errors read as `false`.
///
/// # Examples
///
/// ```
/// use handler_rail::adapter::adapt_predicate;
///
/// let is_even = adapt_predicate(|s: &str| s.parse::<i64>().map(|n| n % 2 == 0));
///
/// assert!(is_even.callable()("10").unwrap());
/// // nothing registered yet, so a parse failure escalates
/// assert!(is_even.callable()("ten").unwrap_err().is_unhandled());
/// ```
pub fn adapt_predicate<A, E, F>(
    predicate: F,
) -> Adapted<impl Fn(A) -> Result<bool, Escalation<E>>, E>
where
    F: Fn(A) -> Result<bool, E>,
{
    let chain = HandlerChain::new();
    let bound = chain.clone();
    let callable = move |arg: A| predicate(arg).dispatch_or(&bound, false);
    Adapted { chain, callable }
}

/// Adapts a one-argument function. Absorbed errors read as `None`.
pub fn adapt_function<A, U, E, F>(
    function: F,
) -> Adapted<impl Fn(A) -> Result<Option<U>, Escalation<E>>, E>
where
    F: Fn(A) -> Result<U, E>,
{
    let chain = HandlerChain::new();
    let bound = chain.clone();
    let callable = move |arg: A| function(arg).dispatch_to(&bound);
    Adapted { chain, callable }
}

/// Adapts a one-argument function that already returns an `Option`.
///
/// Absorbed errors read as `None`, the same as an inner `Ok(None)`.
pub fn adapt_optional_function<A, U, E, F>(
    function: F,
) -> Adapted<impl Fn(A) -> Result<Option<U>, Escalation<E>>, E>
where
    F: Fn(A) -> Result<Option<U>, E>,
{
    let chain = HandlerChain::new();
    let bound = chain.clone();
    let callable = move |arg: A| function(arg).dispatch_or(&bound, None);
    Adapted { chain, callable }
}

/// Adapts a zero-argument supplier. Absorbed errors read as `None`.
///
/// # Examples
///
/// ```
/// use handler_rail::adapter::adapt_supplier;
/// use handler_rail::types::Handler;
///
/// let port = adapt_supplier(|| std::env::var("HANDLER_RAIL_UNSET_PORT"));
/// port.chain().append(Handler::absorb());
///
/// assert_eq!(port.callable()().unwrap(), None);
/// ```
pub fn adapt_supplier<T, E, F>(
    supplier: F,
) -> Adapted<impl Fn() -> Result<Option<T>, Escalation<E>>, E>
where
    F: Fn() -> Result<T, E>,
{
    let chain = HandlerChain::new();
    let bound = chain.clone();
    let callable = move || supplier().dispatch_to(&bound);
    Adapted { chain, callable }
}
