use core::fmt;

use crate::types::alloc_type::Box;
use crate::types::escalation::{BoxedError, Escalation};
use crate::types::handler::Handler;
use crate::types::handler_chain::HandlerChain;

type Producer<T> = Box<dyn FnMut() -> T>;
type SideEffect<E> = Box<dyn FnMut() -> Result<(), Escalation<E>>>;

/// A pipeline that is built first and run later.
///
/// `Deferred` couples three things:
///
/// - a [`HandlerChain`], usually the one created by an
///   [`adapter`](crate::adapter) function
/// - an optional pending side effect, usually a call of that adapter's total callable
/// - a lazy producer of the final value
///
/// Fluent methods such as [`print`](Self::print) and
/// [`throw_runtime`](Self::throw_runtime) append handlers to the chain. Nothing
/// runs until [`terminate`](Self::terminate) (or [`rethrow`](Self::rethrow)),
/// which first fires the side effect and then reads the value. Terminating again
/// fires the side effect again.
///
/// # Examples
///
/// ```
/// use handler_rail::adapter::adapt_procedure;
/// use handler_rail::types::Deferred;
///
/// #[derive(Debug)]
/// struct Rejected(String);
///
/// impl std::fmt::Display for Rejected {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "rejected: {}", self.0)
///     }
/// }
///
/// impl std::error::Error for Rejected {}
///
/// let (chain, store) = adapt_procedure(|key: &'static str| {
///     if key.is_empty() { Err("empty key") } else { Ok(()) }
/// })
/// .into_parts();
///
/// let escalation = Deferred::of_with_effect(0_u32, chain, move || store(""))
///     .print()
///     .rethrow_with(|e: &&str| Rejected(e.to_string()))
///     .unwrap_err();
///
/// assert_eq!(escalation.downcast_ref::<Rejected>().unwrap().0, "empty key");
/// ```
#[must_use]
pub struct Deferred<T, E> {
    chain: HandlerChain<E>,
    effect: Option<SideEffect<E>>,
    producer: Producer<T>,
}

impl<T: 'static, E: 'static> Deferred<T, E> {
    /// Creates a computation that yields a clone of `value` on every terminate.
    #[inline]
    pub fn of(value: T, chain: HandlerChain<E>) -> Self
    where
        T: Clone,
    {
        Self::lazy(move || value.clone(), chain)
    }

    /// Creates a computation whose value is produced on terminate.
    #[inline]
    pub fn lazy<P>(producer: P, chain: HandlerChain<E>) -> Self
    where
        P: FnMut() -> T + 'static,
    {
        Self { chain, effect: None, producer: Box::new(producer) }
    }

    /// Like [`of`](Self::of), with a side effect fired before the value is read.
    #[inline]
    pub fn of_with_effect<S>(value: T, chain: HandlerChain<E>, effect: S) -> Self
    where
        T: Clone,
        S: FnMut() -> Result<(), Escalation<E>> + 'static,
    {
        Self::lazy_with_effect(move || value.clone(), chain, effect)
    }

    /// Like [`lazy`](Self::lazy), with a side effect fired before the value is produced.
    #[inline]
    pub fn lazy_with_effect<P, S>(producer: P, chain: HandlerChain<E>, effect: S) -> Self
    where
        P: FnMut() -> T + 'static,
        S: FnMut() -> Result<(), Escalation<E>> + 'static,
    {
        Self { chain, effect: Some(Box::new(effect)), producer: Box::new(producer) }
    }

    /// Appends an arbitrary handler to the chain.
    #[inline]
    pub fn handle(self, handler: Handler<E>) -> Self {
        self.chain.append(handler);
        self
    }

    /// Appends a non-terminal handler that prints each error to standard output.
    ///
    /// On its own this makes errors visible but still fatal; follow it with a
    /// terminal handler to absorb them.
    #[cfg(feature = "std")]
    #[inline]
    pub fn print(self) -> Self
    where
        E: fmt::Display,
    {
        self.handle(Handler::new(|error: &E| std::println!("{error}")).non_terminal())
    }

    /// Appends a non-terminal handler that records each error as a `tracing` warning.
    #[cfg(feature = "tracing")]
    #[inline]
    pub fn trace(self) -> Self
    where
        E: fmt::Display,
    {
        self.handle(
            Handler::new(|error: &E| tracing::warn!(error = %error, "deferred pipeline error"))
                .non_terminal(),
        )
    }

    /// Appends a terminal handler that raises `wrap(error)` instead of absorbing.
    #[inline]
    pub fn throw_runtime<W, R>(self, wrap: W) -> Self
    where
        W: Fn(&E) -> R + 'static,
        R: Into<BoxedError>,
    {
        self.handle(wrap_and_raise(wrap))
    }

    /// [`throw_runtime`](Self::throw_runtime) followed by [`terminate`](Self::terminate).
    ///
    /// # Errors
    ///
    /// Returns `wrap(error)` as [`Escalation::Raised`] for any error reaching the
    /// new handler, or an earlier handler's escalation.
    #[inline]
    pub fn rethrow_with<W, R>(&mut self, wrap: W) -> Result<T, Escalation<E>>
    where
        W: Fn(&E) -> R + 'static,
        R: Into<BoxedError>,
    {
        self.chain.append(wrap_and_raise(wrap));
        self.terminate()
    }
}

impl<T, E> Deferred<T, E> {
    /// Returns the chain this computation dispatches into.
    #[inline]
    pub fn chain(&self) -> &HandlerChain<E> {
        &self.chain
    }

    /// Returns `true` if a side effect fires on terminate.
    #[inline]
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Same as [`terminate`](Self::terminate).
    ///
    /// # Errors
    ///
    /// See [`terminate`](Self::terminate).
    #[inline]
    pub fn rethrow(&mut self) -> Result<T, Escalation<E>> {
        self.terminate()
    }

    /// Fires the pending side effect, if any, then produces the value.
    ///
    /// Every call fires the side effect again; the value is not memoized.
    ///
    /// # Errors
    ///
    /// Returns the chain's [`Escalation`] if the side effect escalated. The value
    /// is not produced in that case.
    pub fn terminate(&mut self) -> Result<T, Escalation<E>> {
        if let Some(effect) = self.effect.as_mut() {
            effect()?;
        }
        Ok((self.producer)())
    }
}

fn wrap_and_raise<E, W, R>(wrap: W) -> Handler<E>
where
    E: 'static,
    W: Fn(&E) -> R + 'static,
    R: Into<BoxedError>,
{
    Handler::try_new(move |error: &E| Err(wrap(error).into()))
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("chain", &self.chain)
            .field("has_effect", &self.has_effect())
            .finish_non_exhaustive()
    }
}
