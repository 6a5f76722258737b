//! Core traits for routing and classifying errors.
//!
//! - [`Classified`]: closed error-kind enumeration used for handler matching
//! - [`DispatchExt`]: routes the error side of a `Result` into a handler chain
//!
//! # Examples
//!
//! ```
//! use handler_rail::traits::DispatchExt;
//! use handler_rail::types::HandlerChain;
//!
//! let chain = HandlerChain::<&str>::new();
//! let escalation = Err::<(), _>("boom").dispatch_to(&chain).unwrap_err();
//!
//! assert!(escalation.is_unhandled());
//! ```

pub mod classified;
pub mod dispatch_ext;

pub use classified::Classified;
pub use dispatch_ext::DispatchExt;
