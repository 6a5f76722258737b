//! Closed error-kind classification for handler matching.
//!
//! Handlers can match on an explicit predicate, but most domain errors already
//! come with a natural, finite set of categories. Implementing [`Classified`]
//! exposes that category so [`Handler::for_kind`](crate::types::Handler::for_kind)
//! can match by equality instead of by runtime type identity.
//!
//! # Examples
//!
//! ```
//! use handler_rail::traits::Classified;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Io,
//!     Parse,
//! }
//!
//! #[derive(Debug)]
//! enum LoadError {
//!     Missing(String),
//!     BadNumber(String),
//! }
//!
//! impl Classified for LoadError {
//!     type Kind = Kind;
//!
//!     fn kind(&self) -> Kind {
//!         match self {
//!             LoadError::Missing(_) => Kind::Io,
//!             LoadError::BadNumber(_) => Kind::Parse,
//!         }
//!     }
//! }
//!
//! assert_eq!(LoadError::Missing("a.toml".into()).kind(), Kind::Io);
//! assert!(LoadError::BadNumber("x".into()).is_kind(&Kind::Parse));
//! ```

/// An error that belongs to exactly one of a closed set of kinds.
pub trait Classified {
    /// The kind enumeration; usually a fieldless `enum`.
    type Kind: PartialEq;

    /// Returns the kind of this error.
    fn kind(&self) -> Self::Kind;

    /// Returns `true` if this error is of `kind`.
    #[inline]
    fn is_kind(&self, kind: &Self::Kind) -> bool {
        self.kind() == *kind
    }
}

#[cfg(feature = "std")]
impl Classified for std::io::Error {
    type Kind = std::io::ErrorKind;

    #[inline]
    fn kind(&self) -> std::io::ErrorKind {
        std::io::Error::kind(self)
    }
}
