//! Stable binary heap implementation
//!
//! A binary min-heap that breaks ties in first-in-first-out order: values the
//! comparator considers equal come out in the order they were pushed.
//! A plain binary heap gives no such guarantee because sift-down freely
//! reorders equal siblings.
//!
//! # Stability
//!
//! Each entry carries a tie-break counter taken from a per-heap, monotonically
//! increasing sequence. Every structural decision uses the composite order
//!
//! ```text
//! a < b  <=>  cmp(a.value, b.value) == Less
//!             || (cmp(a.value, b.value) == Equal && a.counter < b.counter)
//! ```
//!
//! which is a strict total order over live entries, so the minimum is always
//! unique and a drain reproduces a stable sort.
//!
//! The counter is a bounded integer. Before it would run out, the heap
//! [renumbers](StableHeap::renumber) itself: it drains into a buffer (already
//! in final order), resets the counter and pushes everything back.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `push`     | O(log n) amortized |
//! | `pop`      | O(log n)           |
//! | `peek`     | O(1)               |
//! | `renumber` | O(n log n)         |
//! | `trim`     | O(n) worst case    |
//!
//! # Example
//!
//! ```rust
//! use stable_heap::StableHeap;
//!
//! let mut heap = StableHeap::new();
//! heap.push(1);
//! heap.push(0);
//! heap.push(5);
//! heap.push(4);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Some(&0));
//! assert_eq!(heap.len(), 5);
//! assert_eq!(heap.into_sorted_vec(), vec![0, 1, 3, 4, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::compare::Natural;
use crate::counter::Counter;
use crate::traits::{Compare, HeapError};

/// A value tagged with its insertion counter
#[derive(Debug, Clone)]
struct Entry<T, N> {
    value: T,
    counter: N,
}

/// A binary min-heap with FIFO order among equal elements
///
/// - `T`: the value type
/// - `C`: the comparator, [`Natural`] (ascending `Ord`) by default
/// - `N`: the tie-break counter type, `u64` by default
///
/// The heap owns its comparator and its counter; separate heaps are fully
/// independent.
#[derive(Clone)]
pub struct StableHeap<T, C = Natural, N = u64> {
    /// Live entries in implicit binary heap order; spare capacity is not live
    data: Vec<Entry<T, N>>,
    /// Counter handed to the next pushed value
    next_counter: N,
    compare: C,
}

impl<T: Ord> StableHeap<T> {
    /// Creates an empty heap ordered ascending by `Ord`
    pub fn new() -> Self {
        Self::with_capacity_and_comparator(0, Natural)
    }

    /// Creates an empty heap with room for `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Compare<T>> StableHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    ///
    /// # Example
    ///
    /// ```rust
    /// use stable_heap::StableHeap;
    ///
    /// let mut heap = StableHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.extend([1, 0, 5, 4, 3]);
    /// assert_eq!(heap.into_sorted_vec(), vec![5, 4, 3, 1, 0]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self::with_capacity_and_comparator(0, compare)
    }

    /// Creates an empty heap ordered by `compare` with room for `capacity` values
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self::with_capacity_and_counter(capacity, compare)
    }
}

impl<T, C: Compare<T>, N: Counter> StableHeap<T, C, N> {
    /// Creates an empty heap with a counter type other than `u64`
    ///
    /// The counter type is picked up from the annotation:
    ///
    /// ```rust
    /// use stable_heap::compare::Natural;
    /// use stable_heap::StableHeap;
    ///
    /// let mut heap: StableHeap<i32, Natural, u8> = StableHeap::with_counter(Natural);
    /// for i in 0..1000 {
    ///     heap.push(i % 3);
    ///     if heap.len() > 100 {
    ///         heap.pop();
    ///     }
    /// }
    /// assert_eq!(heap.len(), 100);
    /// ```
    pub fn with_counter(compare: C) -> Self {
        Self::with_capacity_and_counter(0, compare)
    }

    /// Like [`with_counter`](Self::with_counter), with room for `capacity` values
    pub fn with_capacity_and_counter(capacity: usize, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            next_counter: N::ZERO,
            compare,
        }
    }

    /// Returns true if the heap holds no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns how many values the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the comparator the heap orders by
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the counter the next pushed value will receive
    pub fn next_counter(&self) -> N {
        self.next_counter
    }

    /// Pushes a value onto the heap
    ///
    /// If the tie-break counter is exhausted, the heap [renumbers](Self::renumber)
    /// first; this is invisible apart from the one-off O(n log n) cost.
    ///
    /// # Panics
    ///
    /// Panics if the heap already holds `N::MAX` values, which leaves no free
    /// counter to tag the new value with. Allocation failure aborts, as with
    /// `Vec::push`. Use [`try_push`](Self::try_push) to get an error for
    /// either case instead.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.reclaim_counters() {
            panic!("{err}");
        }
        self.push_entry(value);
    }

    /// Alias for [`push`](Self::push)
    #[inline]
    pub fn add(&mut self, value: T) {
        self.push(value);
    }

    /// Pushes a value, reporting failure instead of panicking
    ///
    /// On error the heap keeps the same values in the same drain order. A
    /// renumbering pass may already have run, and a failed reservation may
    /// leave capacity changed.
    ///
    /// # Errors
    ///
    /// - [`HeapError::CounterExhausted`] if the heap holds `N::MAX` values;
    ///   checked first, before any storage is reserved
    /// - [`HeapError::AllocationFailed`] if the storage could not grow, including
    ///   the temporary buffer of an automatic renumbering pass
    pub fn try_push(&mut self, value: T) -> Result<(), HeapError> {
        self.reclaim_counters()?;
        self.data.try_reserve(1)?;
        self.push_entry(value);
        Ok(())
    }

    /// Returns the minimum value without removing it
    ///
    /// Among equal minima this is the one pushed first.
    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|entry| &entry.value)
    }

    /// Removes and returns the minimum value
    ///
    /// Among equal minima this is the one pushed first.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if self.data.len() > 1 {
            self.sift_down(0);
        }

        result.map(|entry| entry.value)
    }

    /// Alias for [`pop`](Self::pop)
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.pop()
    }

    /// Reassigns dense tie-break counters, preserving the drain order
    ///
    /// Called automatically when the counter runs out. Calling it explicitly
    /// frees counter headroom ahead of time; it never changes what
    /// [`pop`](Self::pop) returns. After renumbering a heap of `n` values,
    /// [`next_counter`](Self::next_counter) is `n`.
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn renumber(&mut self) {
        let buffer = Vec::with_capacity(self.data.len());
        self.renumber_into(buffer);
    }

    /// Drains into `buffer` (which must already hold room for every value) and refills
    fn renumber_into(&mut self, mut buffer: Vec<T>) {
        let len = self.data.len();
        while let Some(value) = self.pop() {
            buffer.push(value);
        }

        // The buffer is in final order, so dense counters from zero keep it.
        self.next_counter = N::ZERO;
        for value in buffer {
            self.push_entry(value);
        }

        debug!(
            len,
            counter_bits = std::mem::size_of::<N>() * 8,
            "renumbered stable heap"
        );
    }

    /// Releases storage beyond the live values
    ///
    /// Only capacity changes; size, peek and drain order are unaffected.
    pub fn trim(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Reserves room for at least `additional` more values
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes every value and resets the tie-break counter
    pub fn clear(&mut self) {
        self.data.clear();
        self.next_counter = N::ZERO;
    }

    /// Returns an iterator that pops values in order
    ///
    /// Values not consumed by the time the iterator is dropped are removed
    /// too, leaving the heap empty.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C, N> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, returning its values in drain order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the heap-order invariant over every parent/child pair
    ///
    /// Always true unless the comparator breaks its contract. O(n).
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.stable_less(&self.data[i], &self.data[parent])
        })
    }

    /// Renumbers if the counter is exhausted, failing when renumbering cannot help
    fn reclaim_counters(&mut self) -> Result<(), HeapError> {
        if self.next_counter != N::MAX {
            return Ok(());
        }

        let len = self.data.len();
        match N::from_len(len) {
            Some(dense) if dense < N::MAX => {
                trace!(len, "tie-break counter exhausted, renumbering");
                let mut buffer = Vec::new();
                buffer.try_reserve_exact(len)?;
                self.renumber_into(buffer);
                Ok(())
            }
            _ => Err(HeapError::CounterExhausted { len }),
        }
    }

    /// Tags `value` with the next counter and sifts it into place
    ///
    /// Callers ensure `next_counter < N::MAX`.
    fn push_entry(&mut self, value: T) {
        let counter = self.next_counter;
        self.next_counter = counter.increment();
        self.data.push(Entry { value, counter });
        self.sift_up(self.data.len() - 1);
    }

    /// Composite order: the comparator first, then insertion order
    #[inline]
    fn stable_less(&self, a: &Entry<T, N>, b: &Entry<T, N>) -> bool {
        match self.compare.compare(&a.value, &b.value) {
            Ordering::Less => true,
            Ordering::Equal => a.counter < b.counter,
            Ordering::Greater => false,
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.stable_less(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.stable_less(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };

            if self.stable_less(&self.data[child], &self.data[index]) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for StableHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C, N: fmt::Debug> fmt::Debug for StableHeap<T, C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StableHeap")
            .field("len", &self.data.len())
            .field("next_counter", &self.next_counter)
            .field(
                "values",
                &self.data.iter().map(|entry| &entry.value).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T, C: Compare<T>, N: Counter> Extend<T> for StableHeap<T, C, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default, N: Counter> FromIterator<T> for StableHeap<T, C, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_counter(C::default());
        heap.extend(iter);
        heap
    }
}

/// Draining iterator returned by [`StableHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Compare<T>, N: Counter> {
    heap: &'a mut StableHeap<T, C, N>,
}

impl<T, C: Compare<T>, N: Counter> Iterator for DrainSorted<'_, T, C, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>, N: Counter> ExactSizeIterator for DrainSorted<'_, T, C, N> {}

impl<T, C: Compare<T>, N: Counter> FusedIterator for DrainSorted<'_, T, C, N> {}

impl<T, C: Compare<T>, N: Counter> Drop for DrainSorted<'_, T, C, N> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
