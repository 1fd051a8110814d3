//! Ready-made comparators
//!
//! | Comparator      | Order                                          |
//! |-----------------|------------------------------------------------|
//! | [`Natural`]     | ascending by `Ord` (the default)               |
//! | [`Reversed<C>`] | the opposite of `C`                            |
//! | [`ByKey<F, K>`] | ascending by the `Ord` key `F` projects out    |
//!
//! Closures `Fn(&T, &T) -> Ordering` are comparators too, see [`Compare`].
//!
//! # Example
//!
//! ```rust
//! use stable_heap::compare::by_key;
//! use stable_heap::StableHeap;
//!
//! struct Player {
//!     name: &'static str,
//!     energy: u32,
//! }
//!
//! let mut heap = StableHeap::with_comparator(by_key(|p: &Player| p.energy));
//! heap.push(Player { name: "player", energy: 10 });
//! heap.push(Player { name: "monster1", energy: 10 });
//! heap.push(Player { name: "monster2", energy: 5 });
//!
//! let names: Vec<_> = heap.drain_sorted().map(|p| p.name).collect();
//! assert_eq!(names, ["monster2", "player", "monster1"]);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::traits::Compare;

/// Ascending order through `T: Ord`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of the wrapped comparator
///
/// Ties stay ties, so a reversed heap is still stable: equal values leave in
/// insertion order, not in reverse insertion order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Wraps `inner`, inverting its order
    pub fn new(inner: C) -> Self {
        Self(inner)
    }

    /// Returns the wrapped comparator
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Compares values by a key extracted with `F`
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Compare<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Builds a [`ByKey`] comparator from a key projection
pub fn by_key<T, K, F>(key: F) -> ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    ByKey {
        key,
        _key: PhantomData,
    }
}
