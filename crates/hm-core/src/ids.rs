//! Arena indices for tiles and units.
//!
//! The map owns its tiles and the mobility store owns its units, each in a
//! `Vec`; everything else (score maps, routes, orders) refers to them by
//! these ids.  `u32::MAX` is reserved as the `INVALID` sentinel.

use std::fmt;

macro_rules! arena_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            pub const INVALID: $name = $name(u32::MAX);

            /// Id of the `i`-th arena slot.
            ///
            /// # Panics
            ///
            /// If `i` does not fit below the `INVALID` sentinel.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                assert!(i < u32::MAX as usize, "arena index {i} out of range");
                $name(i as u32)
            }

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        /// Defaults to `INVALID` so an unset id never aliases slot 0.
        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

arena_id! {
    /// Index of a tile in a map's tile arena.
    TileId
}

arena_id! {
    /// Index of a unit in the mobility store.
    UnitId
}
