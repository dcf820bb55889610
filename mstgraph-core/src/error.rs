//! Error types for the mstgraph core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph, spanning-tree, and session operations.
///
/// A failed operation never leaves partial state behind: sessions stage every
/// mutation and only commit once the spanning tree has been rebuilt.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An operation referenced a handle with no corresponding live vertex.
    #[error("vertex {handle} does not exist")]
    UnknownVertex {
        /// The handle that could not be resolved.
        handle: VertexId,
    },
    /// A configuration value or mutation argument was rejected.
    #[error("invalid configuration: `{parameter}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the constraint that was violated.
        reason: &'static str,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An operation referenced a handle with no corresponding live vertex.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// A configuration value or mutation argument was rejected.
        InvalidConfiguration => InvalidConfiguration { .. } => "GRAPH_INVALID_CONFIGURATION",
        /// A synchronisation primitive became poisoned after a panic.
        LockPoisoned => LockPoisoned { .. } => "GRAPH_LOCK_POISONED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
