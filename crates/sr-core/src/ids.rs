//! Typed identifiers for road-network nodes and edges.
//!
//! Both are thin `u32` wrappers that index straight into the network's
//! arrays.  Ordering is the integer ordering, which is what the locator and
//! solver use for deterministic tie-breaking ("lowest id wins").

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Placeholder for "no id"; never handed out by a builder.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }

            /// Build an id from a `Vec` position.  Positions that do not fit in
            /// a `u32` saturate to `INVALID`.
            #[inline]
            pub fn from_index(i: usize) -> $name {
                $name(u32::try_from(i).unwrap_or(u32::MAX))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<u32> for $name {
            #[inline(always)]
            fn from(raw: u32) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Index of a road-network node, dense from 0 in insertion order.
    NodeId, "n"
}

typed_id! {
    /// Index of a directed edge in the network's CSR edge arrays.
    EdgeId, "e"
}
