//! Error types for the disjoint-set core library.
//!
//! Every failure is detected before the structure is touched, so a caller
//! receiving one of these errors still holds the state it had before the call.

use std::fmt;

use thiserror::Error;

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] and partition operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// An element index was not below the current length.
    #[error("element {index} is out of range for a disjoint set of length {len}")]
    IndexOutOfRange {
        /// The offending element index, widened to `usize`.
        index: usize,
        /// Length of the structure at the time of the call.
        len: usize,
    },
    /// The requested length exceeds what the index type can address.
    #[error("length {requested} exceeds the index type's capacity of {capacity}")]
    Capacity {
        /// Length the caller asked for.
        requested: usize,
        /// Largest length representable by the index type.
        capacity: usize,
    },
    /// A growth request asked for fewer elements than already exist.
    #[error("cannot shrink a disjoint set from length {len} to {requested}")]
    Shrink {
        /// Length the caller asked for.
        requested: usize,
        /// Length of the structure at the time of the call.
        len: usize,
    },
    /// Two partitions were combined or compared over different universes.
    #[error("partitions cover different universes: left has {left} elements, right has {right}")]
    UniverseMismatch {
        /// Length of the left-hand structure.
        left: usize,
        /// Length of the right-hand structure.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// An element index was not below the current length.
        IndexOutOfRange => IndexOutOfRange { .. } => "DISJOINT_INDEX_OUT_OF_RANGE",
        /// The requested length exceeds what the index type can address.
        Capacity => Capacity { .. } => "DISJOINT_CAPACITY_EXCEEDED",
        /// A growth request asked for fewer elements than already exist.
        Shrink => Shrink { .. } => "DISJOINT_SHRINK",
        /// Two partitions were combined or compared over different universes.
        UniverseMismatch => UniverseMismatch { .. } => "DISJOINT_UNIVERSE_MISMATCH",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DisjointSetError>;
