//! Ordered error-handler chains for fallible closures.
//!
//! The crate is built from three pieces:
//!
//! - [`HandlerChain`]: an ordered list of [`Handler`]s that absorbs or escalates an error
//! - [`adapter`]: turns a closure returning `Result` into a total callable bound to a
//!   fresh chain
//! - [`Deferred`]: a pipeline that collects handlers fluently and runs only when
//!   terminated
//!
//! [`TryOption`] combines them into fallible variants of the usual `Option`
//! combinators.
//!
//! # Examples
//!
//! ## Dispatching through a chain
//!
//! ```
//! use handler_rail::{Handler, HandlerChain};
//!
//! let chain = HandlerChain::<i32>::new()
//!     .with(
//!         Handler::new(|code: &i32| println!("server error {code}"))
//!             .matching(|c: &i32| *c >= 500),
//!     )
//!     .with(Handler::absorb().matching(|c: &i32| *c >= 400));
//!
//! assert!(chain.dispatch(503).is_ok());
//! assert!(chain.dispatch(404).is_ok());
//! assert!(chain.dispatch(302).unwrap_err().is_unhandled());
//! ```
//!
//! ## Deferred pipeline over an optional value
//!
//! ```
//! use handler_rail::{Escalation, TryOption};
//!
//! let result = TryOption::of("12x")
//!     .try_map(|s: &str| s.parse::<u32>())
//!     .print()
//!     .rethrow_with(|e: &std::num::ParseIntError| format!("bad quantity: {e}"));
//!
//! match result {
//!     Err(Escalation::Raised(raised)) => assert!(raised.to_string().starts_with("bad quantity")),
//!     _ => unreachable!(),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Total adapters for fallible closures
pub mod adapter;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for routing and classifying errors
pub mod traits;
/// Handler chains, escalation errors, and deferred pipelines
pub mod types;

pub use adapter::Adapted;
pub use traits::*;
pub use types::{
    BoxedError, Deferred, Escalation, Handler, HandlerChain, NoSuchElement, TryOption,
    UnhandledError,
};
