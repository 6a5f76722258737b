use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::types::alloc_type::Rc;
use crate::types::escalation::Escalation;
use crate::types::handler::Handler;

/// Inline storage for the common case of one or two handlers per pipeline.
type HandlerVec<E> = SmallVec<[Rc<Handler<E>>; 2]>;

/// An ordered, append-only list of [`Handler`]s that decides whether an error
/// is absorbed or escalated.
///
/// `HandlerChain` is a shared handle: cloning it yields another handle to the
/// same list. This is how an adapted callable and the
/// [`Deferred`](crate::types::Deferred) computation wrapping it keep building one
/// chain together. The handle is `!Send`; a pipeline lives in one logical flow.
///
/// # Dispatch
///
/// Handlers are scanned in append order. Every handler whose matcher accepts the
/// error runs its action. The first matching *terminal* handler ends the scan and
/// the error is absorbed. If the scan ends without a terminal match, the error
/// escalates as [`Escalation::Unhandled`]. A matched action that returns `Err`
/// stops the scan immediately and escalates as [`Escalation::Raised`].
///
/// Overlapping matchers are resolved purely by append order; register the most
/// specific handlers first.
///
/// # Examples
///
/// ```
/// use handler_rail::types::{Handler, HandlerChain};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(Cell::new(0));
/// let chain = HandlerChain::<&str>::new();
///
/// let counter = Rc::clone(&seen);
/// chain.append(Handler::new(move |_| counter.set(counter.get() + 1)).non_terminal());
/// chain.append(Handler::absorb());
///
/// assert!(chain.dispatch("boom").is_ok());
/// assert_eq!(seen.get(), 1);
/// ```
#[must_use]
pub struct HandlerChain<E> {
    handlers: Rc<RefCell<HandlerVec<E>>>,
}

impl<E> HandlerChain<E> {
    /// Creates an empty chain. An empty chain escalates every error.
    #[inline]
    pub fn new() -> Self {
        Self { handlers: Rc::new(RefCell::new(SmallVec::new())) }
    }

    /// Appends `handler` to the end of the chain.
    #[inline]
    pub fn append(&self, handler: Handler<E>) {
        self.append_shared(Rc::new(handler));
    }

    /// Appends a handler that may also be registered on other chains.
    #[inline]
    pub fn append_shared(&self, handler: Rc<Handler<E>>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Builder-style [`append`](Self::append).
    #[inline]
    pub fn with(self, handler: Handler<E>) -> Self {
        self.append(handler);
        self
    }

    /// Returns the number of registered handlers.
    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Returns `true` if no handler has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Returns `true` if both handles refer to the same chain.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handlers, &other.handlers)
    }

    /// Routes `error` through the chain.
    ///
    /// Returns `Ok(())` when a terminal handler absorbed the error. Handlers
    /// appended by an action during this call only see later dispatches.
    pub fn dispatch(&self, error: E) -> Result<(), Escalation<E>> {
        let snapshot: HandlerVec<E> = self.handlers.borrow().iter().cloned().collect();

        for (_index, handler) in snapshot.iter().enumerate() {
            if !handler.can_handle(&error) {
                continue;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(handler = _index, terminal = handler.is_terminal(), "handler matched");

            handler.handle(&error).map_err(Escalation::Raised)?;

            if handler.is_terminal() {
                return Ok(());
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(handlers = snapshot.len(), "no terminal handler matched, escalating");

        Err(Escalation::unhandled(error))
    }
}

impl<E> Clone for HandlerChain<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { handlers: Rc::clone(&self.handlers) }
    }
}

impl<E> Default for HandlerChain<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HandlerChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("handlers", &self.len())
            .finish()
    }
}
