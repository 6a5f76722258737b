//! Handler chains, escalation errors, and deferred pipelines.
//!
//! # Examples
//!
//! ```
//! use handler_rail::types::{Deferred, Handler, HandlerChain};
//!
//! let chain = HandlerChain::<&str>::new();
//! let mut pipeline = Deferred::lazy_with_effect(|| "done", chain.clone(), move || {
//!     chain.dispatch("transient glitch")
//! })
//! .handle(Handler::absorb());
//!
//! assert_eq!(pipeline.terminate().unwrap(), "done");
//! ```
pub mod alloc_type;
pub mod deferred;
pub mod escalation;
pub mod handler;
pub mod handler_chain;
pub mod try_option;

pub use deferred::*;
pub use escalation::*;
pub use handler::*;
pub use handler_chain::*;
pub use try_option::*;
