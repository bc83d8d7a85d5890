// ESTL - estl-foundation
// Module: StaticVec - Inline-storage sequence
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Contiguous sequence with inline storage and compile-time capacity.
//!
//! `StaticVec<T, N>` keeps up to `N` elements in insertion order. It derefs
//! to `[T]`, so every slice method and every function in
//! [`crate::algorithm`] applies to its contents.
//!
//! # Characteristics
//!
//! - **Zero allocation**: all memory is an inline `[MaybeUninit<T>; N]`
//! - **O(1)** `push()`, `pop()` and indexed access
//! - **O(n)** `insert()` and `remove()` (tail shift)
//! - **Silent truncation** for bulk assignment past capacity; every other
//!   overflow is a contract violation

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::{self, SliceIndex};

use estl_error::{Error, Result};

use super::inline::{InlineStorage, IntoIter};
use crate::algorithm;
use crate::contract;
use crate::iter::{Category, Cursor};

const CAPACITY_EXCEEDED: &str = "StaticVec capacity exceeded";
const INDEX_OUT_OF_BOUNDS: &str = "StaticVec index out of bounds";

/// A sequence with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Elements `[0..len)` are initialized, in insertion order
///
/// # Examples
///
/// ```
/// use estl_foundation::StaticVec;
///
/// let mut vec = StaticVec::<u32, 10>::new();
/// vec.push(1)?;
/// vec.push(3)?;
/// vec.insert(1, 2)?;
///
/// assert_eq!(vec.as_slice(), &[1, 2, 3]);
/// assert_eq!(vec.pop(), Some(3));
/// # Ok::<(), estl_foundation::Error>(())
/// ```
pub struct StaticVec<T, const N: usize> {
    storage: InlineStorage<T, N>,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Creates an empty vector.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: InlineStorage::new(),
        }
    }

    /// Creates a vector holding `min(count, N)` clones of `value`.
    #[must_use]
    pub fn from_fill(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::new();
        vec.assign_fill(count, value);
        vec
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Returns `true` if no further element fits.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// Returns the live elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[allow(unsafe_code)]
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: upheld by the caller
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns the element at `index` mutably without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[allow(unsafe_code)]
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: upheld by the caller
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::INDEX_OUT_OF_BOUNDS`] when `index >= len()`,
    /// subject to the contract policy.
    #[track_caller]
    pub fn at(&self, index: usize) -> Result<&T> {
        match self.as_slice().get(index) {
            Some(item) => Ok(item),
            None => Err(contract::violation(Error::index_out_of_bounds(INDEX_OUT_OF_BOUNDS))),
        }
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::INDEX_OUT_OF_BOUNDS`] when `index >= len()`,
    /// subject to the contract policy.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        match self.storage.as_mut_slice().get_mut(index) {
            Some(item) => Ok(item),
            None => Err(contract::violation(Error::index_out_of_bounds(INDEX_OUT_OF_BOUNDS))),
        }
    }

    /// Returns the element at `index`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index` mutably, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// First element.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// First element, mutably.
    #[inline]
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Last element, mutably.
    #[inline]
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the vector is full. The
    /// contents are left unchanged and `value` is dropped.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<()> {
        match self.storage.push(value) {
            Ok(()) => Ok(()),
            Err(_rejected) => Err(contract::violation(Error::capacity_exceeded(CAPACITY_EXCEEDED))),
        }
    }

    /// Removes and returns the last element.
    ///
    /// Popping an empty vector is a no-op that returns `None`.
    ///
    /// ```
    /// use estl_foundation::StaticVec;
    ///
    /// let mut vec = StaticVec::<u8, 2>::new();
    /// assert_eq!(vec.pop(), None);
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot toward
    /// the back. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the vector is full;
    /// [`estl_error::codes::INDEX_OUT_OF_BOUNDS`] when `index > len()`. The
    /// contents are left unchanged in both cases.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if self.is_full() {
            return Err(contract::violation(Error::capacity_exceeded(CAPACITY_EXCEEDED)));
        }
        if index > self.len() {
            return Err(contract::violation(Error::index_out_of_bounds(INDEX_OUT_OF_BOUNDS)));
        }

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::shifting("StaticVec", index, self.len()).entered();

        match self.storage.insert(index, value) {
            Ok(()) => Ok(()),
            Err(_rejected) => Err(contract::violation(Error::capacity_exceeded(CAPACITY_EXCEEDED))),
        }
    }

    /// Removes and returns the element at `index`, shifting the tail one slot
    /// toward the front.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::INDEX_OUT_OF_BOUNDS`] when `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> Result<T> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::shifting("StaticVec", index, self.len()).entered();

        match self.storage.remove(index) {
            Some(removed) => Ok(removed),
            None => Err(contract::violation(Error::index_out_of_bounds(INDEX_OUT_OF_BOUNDS))),
        }
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Drops every element at or after `len`. No-op when `len >= len()`.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.storage.truncate(len);
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.storage.retain(keep);
    }

    /// Grows with `T::default()` or shrinks to `min(new_len, N)`.
    ///
    /// Returns the resulting length.
    pub fn resize_default(&mut self, new_len: usize) -> usize
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Grows with clones of `value` or shrinks to `min(new_len, N)`.
    ///
    /// Returns the resulting length.
    ///
    /// ```
    /// use estl_foundation::StaticVec;
    ///
    /// let mut vec = StaticVec::<u8, 4>::new();
    /// assert_eq!(vec.resize(9, 7), 4);
    /// assert_eq!(vec.as_slice(), &[7, 7, 7, 7]);
    /// assert_eq!(vec.resize(1, 0), 1);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) -> usize
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut fill: F) -> usize {
        let target = new_len.min(N);
        self.storage.truncate(target);
        while self.len() < target {
            if self.storage.push(fill()).is_err() {
                break;
            }
        }
        self.len()
    }

    /// Replaces the contents with the items of `iter`, keeping at most `N`.
    ///
    /// Items past capacity are not consumed from the iterator. Returns the
    /// number of elements stored.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> usize {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::assigning("StaticVec", N).entered();

        self.clear();
        for item in iter.into_iter().take(N) {
            if self.storage.push(item).is_err() {
                break;
            }
        }
        self.len()
    }

    /// Replaces the contents with `min(count, N)` clones of `value`.
    ///
    /// Returns the number of elements stored.
    pub fn assign_fill(&mut self, count: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.assign_iter(core::iter::repeat_n(value, count.min(N)).cloned())
    }

    /// Replaces the contents with clones of the first `N` items of `items`.
    ///
    /// Returns the number of elements stored.
    ///
    /// ```
    /// use estl_foundation::StaticVec;
    ///
    /// let mut vec = StaticVec::<u8, 3>::new();
    /// assert_eq!(vec.assign_slice(&[1, 2, 3, 4, 5]), 3);
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn assign_slice(&mut self, items: &[T]) -> usize
    where
        T: Clone,
    {
        self.assign_iter(items.iter().cloned())
    }

    /// Appends clones of every item of `items`, or nothing at all.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the items do not all
    /// fit. The vector is left unchanged.
    #[track_caller]
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if items.len() > N - self.len() {
            return Err(contract::violation(Error::capacity_exceeded(CAPACITY_EXCEEDED)));
        }
        for item in items {
            if self.storage.push(item.clone()).is_err() {
                break;
            }
        }
        Ok(())
    }

    /// Exchanges contents with `other` element by element.
    ///
    /// Unlike `core::mem::swap`, which moves both inline arrays wholesale,
    /// this touches only the live elements of both vectors.
    pub fn swap_contents(&mut self, other: &mut Self) {
        self.storage.swap_contents(&mut other.storage);
    }

    /// Iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor on the first element (equal to `cursor_end()` when empty).
    #[inline]
    #[must_use]
    pub fn cursor_front(&self) -> VecCursor<'_, T> {
        VecCursor {
            items: self.as_slice(),
            index: 0,
        }
    }

    /// Cursor one past the last element.
    #[inline]
    #[must_use]
    pub fn cursor_end(&self) -> VecCursor<'_, T> {
        VecCursor {
            items: self.as_slice(),
            index: self.len(),
        }
    }

    /// Cursor at `index`, which may equal `len()` for the end position.
    #[inline]
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Option<VecCursor<'_, T>> {
        (index <= self.len()).then(|| VecCursor {
            items: self.as_slice(),
            index,
        })
    }
}

impl<T, const N: usize> Default for StaticVec<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality: same length, then element-wise
impl<T: PartialEq, const N: usize, const M: usize> PartialEq<StaticVec<T, M>> for StaticVec<T, N> {
    #[inline]
    fn eq(&self, other: &StaticVec<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}

// Ordering: lexicographic, across capacities like equality
impl<T: PartialOrd, const N: usize, const M: usize> PartialOrd<StaticVec<T, M>> for StaticVec<T, N> {
    fn partial_cmp(&self, other: &StaticVec<T, M>) -> Option<Ordering> {
        algorithm::lexicographic_partial_cmp(self.iter(), other.iter())
    }
}

impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        algorithm::lexicographic_cmp(self.iter(), other.iter())
    }
}

impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;

    /// # Errors
    ///
    /// [`estl_error::codes::SLICE_TOO_LONG`] when `items.len() > N`.
    #[track_caller]
    fn try_from(items: &[T]) -> Result<Self> {
        if items.len() > N {
            return Err(contract::violation(Error::slice_too_long(
                "slice longer than StaticVec capacity",
            )));
        }
        let mut vec = Self::new();
        vec.assign_slice(items);
        Ok(vec)
    }
}

/// Collects at most `N` items; the rest of the iterator is not consumed.
impl<T, const N: usize> FromIterator<T> for StaticVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.assign_iter(iter);
        vec
    }
}

/// Appends until full; the rest of the iterator is not consumed.
impl<T, const N: usize> Extend<T> for StaticVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let room = N - self.len();
        for item in iter.into_iter().take(room) {
            if self.storage.push(item).is_err() {
                break;
            }
        }
    }
}

impl<T, const N: usize> IntoIterator for StaticVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Random-access cursor into a [`StaticVec`].
///
/// Borrows the vector, so the vector cannot change shape while the cursor
/// exists. Two cursors are equal when they view the same vector at the same
/// index.
pub struct VecCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> VecCursor<'a, T> {
    /// Zero-based index of this position; `len()` for the end position.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the end position.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index == self.items.len()
    }

    /// The elements from this position to the end.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        &self.items[self.index..]
    }
}

impl<T> Clone for VecCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VecCursor<'_, T> {}

impl<T> PartialEq for VecCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.items, other.items) && self.index == other.index
    }
}

impl<T> Eq for VecCursor<'_, T> {}

impl<T> fmt::Debug for VecCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecCursor")
            .field("index", &self.index)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<'a, T> Cursor for VecCursor<'a, T> {
    type Item = &'a T;

    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    fn get(&self) -> Option<&'a T> {
        self.items.get(self.index)
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        if self.index < self.items.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn move_prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn offset(&self) -> Option<usize> {
        Some(self.index)
    }

    #[inline]
    fn seek(&mut self, offset: usize) -> bool {
        if offset <= self.items.len() {
            self.index = offset;
            true
        } else {
            false
        }
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_failed_push_leaves_contents() {
        let mut vec: StaticVec<u8, 3> = StaticVec::new();
        for value in [1u8, 2, 3] {
            assert!(vec.push(value).is_ok());
        }
        let extra: u8 = kani::any();
        assert!(vec.push(extra).is_err());
        assert!(vec.as_slice() == [1, 2, 3]);
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_insert_places_value() {
        let mut vec: StaticVec<u8, 4> = StaticVec::new();
        for value in [10u8, 20, 30] {
            assert!(vec.push(value).is_ok());
        }
        let index: usize = kani::any();
        kani::assume(index <= 3);

        assert!(vec.insert(index, 99).is_ok());
        assert!(vec.len() == 4);
        assert!(vec[index] == 99);
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_resize_clamps() {
        let mut vec: StaticVec<u8, 4> = StaticVec::new();
        let requested: usize = kani::any();
        kani::assume(requested <= 8);
        let len = vec.resize(requested, 1);
        assert!(len == requested.min(4));
        assert!(vec.len() == len);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[derive(Clone)]
    struct Tracked<'a> {
        drops: &'a Cell<usize>,
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_new() {
        let vec: StaticVec<u32, 10> = StaticVec::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 10);
        assert!(vec.is_empty());
        assert!(!vec.is_full());
    }

    #[test]
    fn test_push_to_capacity_then_pop() -> Result<()> {
        let mut vec = StaticVec::<u32, 3>::new();
        vec.push(1)?;
        vec.push(2)?;
        vec.push(3)?;
        assert!(vec.is_full());

        assert_eq!(vec.pop(), Some(3));
        assert_eq!(vec.as_slice(), &[1, 2]);
        assert_eq!(vec.len(), 2);
        Ok(())
    }

    #[cfg(not(feature = "abort-on-violation"))]
    #[test]
    fn test_push_when_full_reports_and_keeps_contents() -> Result<()> {
        let mut vec = StaticVec::<u32, 3>::new();
        vec.push(1)?;
        vec.push(2)?;
        vec.push(3)?;

        let err = vec.push(4).unwrap_err();
        assert!(err.is_capacity_error());
        assert_eq!(err.code, estl_error::codes::CAPACITY_EXCEEDED);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut vec = StaticVec::<u32, 2>::new();
        assert_eq!(vec.pop(), None);
        assert_eq!(vec.len(), 0);
    }

    #[allow(unsafe_code)]
    #[test]
    fn test_accessors() -> Result<()> {
        let mut vec = StaticVec::<u32, 4>::new();
        assert_eq!(vec.front(), None);
        assert_eq!(vec.back(), None);
        vec.extend_from_slice(&[5, 6, 7])?;

        assert_eq!(vec.front(), Some(&5));
        assert_eq!(vec.back(), Some(&7));
        assert_eq!(*vec.at(1)?, 6);
        assert_eq!(vec[2], 7);
        assert_eq!(&vec[..2], &[5, 6]);

        *vec.at_mut(0)? = 50;
        if let Some(last) = vec.back_mut() {
            *last = 70;
        }
        vec[1] += 1;
        assert_eq!(vec.as_slice(), &[50, 7, 70]);
        // SAFETY: 1 < len
        assert_eq!(unsafe { *vec.get_unchecked(1) }, 7);
        Ok(())
    }

    #[cfg(not(feature = "abort-on-violation"))]
    #[test]
    fn test_at_out_of_range_never_reads_past_len() {
        let mut vec = StaticVec::<u32, 4>::new();
        let _ = vec.push(1);
        let err = vec.at(1).unwrap_err();
        assert!(err.is_bounds_error());
        assert!(vec.at_mut(3).is_err());
        assert!(vec.at(4).is_err());
    }

    #[test]
    fn test_insert_positions() -> Result<()> {
        let mut vec = StaticVec::<char, 5>::new();
        vec.insert(0, 'b')?;
        vec.insert(0, 'a')?;
        vec.insert(2, 'd')?;
        vec.insert(2, 'c')?;
        assert_eq!(vec.as_slice(), &['a', 'b', 'c', 'd']);
        Ok(())
    }

    #[cfg(not(feature = "abort-on-violation"))]
    #[test]
    fn test_insert_rejections() -> Result<()> {
        let mut vec = StaticVec::<u32, 2>::new();
        assert!(vec.insert(1, 9).unwrap_err().is_bounds_error());
        vec.push(1)?;
        vec.push(2)?;
        assert!(vec.insert(0, 9).unwrap_err().is_capacity_error());
        assert_eq!(vec.as_slice(), &[1, 2]);
        Ok(())
    }

    #[test]
    fn test_remove_then_insert_restores() -> Result<()> {
        let mut vec: StaticVec<u32, 8> = (1..=5).collect();
        let removed = vec.remove(2)?;
        assert_eq!(removed, 3);
        assert_eq!(vec.as_slice(), &[1, 2, 4, 5]);
        vec.insert(2, removed)?;
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
        Ok(())
    }

    #[cfg(not(feature = "abort-on-violation"))]
    #[test]
    fn test_remove_out_of_range() {
        let mut vec: StaticVec<u32, 4> = (1..=2).collect();
        assert!(vec.remove(2).unwrap_err().is_bounds_error());
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_clear_then_reuse() -> Result<()> {
        let mut vec: StaticVec<u32, 2> = (1..=2).collect();
        vec.clear();
        assert!(vec.is_empty());
        vec.push(9)?;
        vec.push(8)?;
        assert_eq!(vec.as_slice(), &[9, 8]);
        Ok(())
    }

    #[test]
    fn test_resize_clamps_to_capacity() {
        let mut vec = StaticVec::<u32, 4>::new();
        assert_eq!(vec.resize_default(2), 2);
        assert_eq!(vec.as_slice(), &[0, 0]);
        assert_eq!(vec.resize(10, 3), 4);
        assert_eq!(vec.as_slice(), &[0, 0, 3, 3]);
        assert_eq!(vec.resize_default(1), 1);
        assert_eq!(vec.as_slice(), &[0]);
    }

    #[test]
    fn test_bulk_assign_truncates_silently() {
        let mut vec = StaticVec::<u32, 3>::new();
        assert_eq!(vec.assign_iter(1..=10), 3);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
        assert_eq!(vec.assign_fill(5, &7), 3);
        assert_eq!(vec.as_slice(), &[7, 7, 7]);
        assert_eq!(vec.assign_slice(&[4]), 1);
        assert_eq!(vec.as_slice(), &[4]);

        let mut source = 1..=10;
        let collected: StaticVec<u32, 3> = source.by_ref().collect();
        assert_eq!(collected.as_slice(), &[1, 2, 3]);
        assert_eq!(source.next(), Some(4));

        let filled = StaticVec::<u8, 2>::from_fill(9, &1);
        assert_eq!(filled.as_slice(), &[1, 1]);
    }

    #[test]
    fn test_extend_variants() -> Result<()> {
        let mut vec = StaticVec::<u32, 4>::new();
        vec.extend_from_slice(&[1, 2])?;
        vec.extend(10..20);
        assert_eq!(vec.as_slice(), &[1, 2, 10, 11]);
        Ok(())
    }

    #[cfg(not(feature = "abort-on-violation"))]
    #[test]
    fn test_extend_from_slice_is_all_or_nothing() {
        let mut vec: StaticVec<u32, 4> = (1..=3).collect();
        assert!(vec.extend_from_slice(&[4, 5]).is_err());
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_from_slice() {
        let vec = StaticVec::<u32, 3>::try_from(&[1, 2][..]);
        assert_eq!(vec.map(|v| v.len()), Ok(2));
    }

    #[cfg(not(feature = "abort-on-violation"))]
    #[test]
    fn test_try_from_slice_too_long() {
        let err = StaticVec::<u32, 1>::try_from(&[1, 2][..]).unwrap_err();
        assert_eq!(err.code, estl_error::codes::SLICE_TOO_LONG);
    }

    #[test]
    fn test_truncate_and_retain() {
        let mut vec: StaticVec<u32, 8> = (1..=8).collect();
        vec.retain(|value| value % 2 == 0);
        assert_eq!(vec.as_slice(), &[2, 4, 6, 8]);
        vec.truncate(2);
        assert_eq!(vec.as_slice(), &[2, 4]);
        vec.truncate(5);
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_swap_contents_exchanges_everything() {
        let mut a: StaticVec<u32, 4> = (1..=4).collect();
        let mut b: StaticVec<u32, 4> = (7..=8).collect();
        a.swap_contents(&mut b);
        assert_eq!(a.as_slice(), &[7, 8]);
        assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_comparisons() {
        let a: StaticVec<u32, 4> = [1, 2, 3].into_iter().collect();
        let b: StaticVec<u32, 4> = [1, 2, 4].into_iter().collect();
        let c: StaticVec<u32, 4> = [1, 2].into_iter().collect();
        let wide: StaticVec<u32, 9> = [1, 2, 3].into_iter().collect();

        assert!(a < b);
        assert!(c < a);
        assert_eq!(a, wide);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_ordering_across_capacities() {
        let small: StaticVec<u32, 3> = [1, 2, 3].into_iter().collect();
        let wide: StaticVec<u32, 9> = [1, 2, 4].into_iter().collect();
        let same: StaticVec<u32, 9> = [1, 2, 3].into_iter().collect();

        assert!(small < wide);
        assert!(wide > small);
        assert_eq!(small.partial_cmp(&same), Some(Ordering::Equal));
        assert_eq!(small == same, small.partial_cmp(&same) == Some(Ordering::Equal));
        assert!(small <= same && same >= small);
    }

    #[test]
    fn test_debug_lists_live_elements() {
        let vec: StaticVec<u32, 8> = (1..=3).collect();
        assert_eq!(format!("{vec:?}"), "[1, 2, 3]");
    }

    #[test]
    fn test_iterators() {
        let mut vec: StaticVec<u32, 4> = (1..=4).collect();
        for value in &mut vec {
            *value *= 10;
        }
        let reversed: StaticVec<u32, 4> = vec.iter().rev().copied().collect();
        assert_eq!(reversed.as_slice(), &[40, 30, 20, 10]);
        let total: u32 = vec.into_iter().sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_cursors() {
        let vec: StaticVec<u32, 4> = (1..=3).collect();
        let mut cursor = vec.cursor_front();
        assert_eq!(cursor.get(), Some(&1));
        assert!(cursor.seek(3));
        assert!(cursor.is_end());
        assert_eq!(cursor, vec.cursor_end());
        assert!(!cursor.seek(4));
        assert_eq!(vec.cursor_at(2).map(|c| c.remaining()), Some(&[3][..]));
        assert!(vec.cursor_at(4).is_none());

        let other: StaticVec<u32, 4> = (1..=3).collect();
        assert_ne!(vec.cursor_front(), other.cursor_front());
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut vec: StaticVec<u32, 4> = (1..=3).collect();
        let moved = core::mem::take(&mut vec);
        assert!(vec.is_empty());
        assert_eq!(moved.len(), 3);
    }

    #[test]
    fn test_every_element_dropped_once() -> Result<()> {
        let drops = Cell::new(0);
        {
            let mut vec = StaticVec::<Tracked<'_>, 4>::new();
            for _ in 0..4 {
                vec.push(Tracked { drops: &drops })?;
            }
            drop(vec.remove(1)?);
            assert_eq!(drops.get(), 1);

            let copy = vec.clone();
            vec.truncate(1);
            assert_eq!(drops.get(), 3);

            let mut iter = copy.into_iter();
            drop(iter.next());
            assert_eq!(drops.get(), 4);
        }
        // Iterator dropped its two leftovers, vec its last element.
        assert_eq!(drops.get(), 7);
        Ok(())
    }
}
