//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use handler_rail::prelude::*;
//!
//! let total = adapt_predicate(|n: i32| if n < 0 { Err("negative") } else { Ok(n > 10) });
//! total.chain().append(Handler::absorb());
//!
//! assert!(!total.callable()(-3).unwrap());
//! ```

pub use crate::adapter::{
    adapt_function, adapt_optional_function, adapt_predicate, adapt_procedure, adapt_supplier,
    Adapted,
};
pub use crate::traits::{Classified, DispatchExt};
pub use crate::types::{
    BoxedError, Deferred, Escalation, Handler, HandlerChain, TryOption, UnhandledError,
};
