//! Tie-break counter type for insertion order tracking.
//!
//! Every value pushed onto a [`StableHeap`](crate::StableHeap) is tagged with
//! the next value of a monotonically increasing counter. When two values
//! compare equal, the one with the smaller counter (the older one) wins.
//!
//! # Why generic?
//!
//! The default counter is `u64`: at one billion inserts per second it takes
//! over 500 years to run out, so the renumbering fallback is effectively
//! unreachable. Narrower types trade that headroom for smaller entries, and
//! `u8` makes exhaustion trivially reachable in tests.
//!
//! The largest value of the type is never handed out. When the counter
//! reaches [`Counter::MAX`], the heap renumbers its entries before the next
//! insert, so a heap with counter type `N` holds at most `N::MAX` entries.

use std::fmt;

/// An unsigned integer usable as a tie-break counter
pub trait Counter: Copy + Ord + Default + fmt::Debug {
    /// First counter value handed out
    const ZERO: Self;

    /// Exhaustion marker; never assigned to an entry
    const MAX: Self;

    /// Returns the next counter value.
    ///
    /// # Panics
    ///
    /// Panics if `self == Self::MAX`. The heap renumbers before that can
    /// happen, so reaching the panic indicates a bug.
    fn increment(self) -> Self;

    /// Converts a count of entries into a counter value, if it fits
    fn from_len(len: usize) -> Option<Self>;
}

macro_rules! impl_counter {
    ($($t:ty),+) => {
        $(
            impl Counter for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn increment(self) -> Self {
                    self.checked_add(1)
                        .expect("tie-break counter overflow: heap must renumber before the counter wraps")
                }

                #[inline]
                fn from_len(len: usize) -> Option<Self> {
                    <$t>::try_from(len).ok()
                }
            }
        )+
    };
}

impl_counter!(u8, u16, u32, u64, u128, usize);
