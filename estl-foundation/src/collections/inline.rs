// ESTL - estl-foundation
// Module: InlineStorage - Uninitialized slot array with a live prefix
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// MaybeUninit handling for every container lives here (checked via KANI)
#![allow(unsafe_code)]

//! Raw inline storage shared by the containers.
//!
//! `InlineStorage<T, N>` owns `N` possibly-uninitialized slots and a live
//! count. Slots `[0, len)` hold constructed values; slots `[len, N)` are
//! uninitialized. Every method keeps that invariant, even when a `Drop`
//! implementation of `T` panics halfway through.

use core::fmt;
use core::iter::FusedIterator;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ptr;
use core::slice;

/// `N` slots of `T`, the first `len` of which are initialized.
pub(crate) struct InlineStorage<T, const N: usize> {
    /// Invariant: slots[0..len) are initialized
    slots: [MaybeUninit<T>; N],

    /// Invariant: len <= N
    len: usize,
}

impl<T, const N: usize> InlineStorage<T, N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
            len:   0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots[0..len) are initialized and MaybeUninit<T> has the
        // layout of T
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and we hold the only borrow
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Appends `value`, handing it back when every slot is taken.
    #[inline]
    pub(crate) fn push(&mut self, value: T) -> Result<(), T> {
        if self.len == N {
            return Err(value);
        }
        self.slots[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialized and is now outside the live
        // prefix, so it is read exactly once
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }

    /// Places `value` at `index`, moving `[index, len)` one slot toward the
    /// tail, last element first.
    ///
    /// Hands `value` back when the storage is full or `index > len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if self.len == N || index > self.len {
            return Err(value);
        }

        for i in (index..self.len).rev() {
            // SAFETY: i < len, so the source is initialized; i + 1 <= len < N,
            // so the destination is in bounds. The source slot is
            // overwritten below or by the next iteration.
            unsafe {
                let moved = self.slots[i].assume_init_read();
                self.slots[i + 1].write(moved);
            }
        }

        self.slots[index].write(value);
        self.len += 1;
        Ok(())
    }

    /// Takes the value at `index` out, moving `(index, len)` one slot toward
    /// the front.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        // SAFETY: index < len, so the slot is initialized
        let removed = unsafe { self.slots[index].assume_init_read() };

        for i in index..(self.len - 1) {
            // SAFETY: i + 1 < len, so the source is initialized; the
            // destination was vacated by the previous read
            unsafe {
                let moved = self.slots[i + 1].assume_init_read();
                self.slots[i].write(moved);
            }
        }

        self.len -= 1;
        Some(removed)
    }

    /// Drops every element at or after `new_len`.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // Shrink first: a panicking destructor must not cause a double drop.
        self.len = new_len;
        // SAFETY: slots[new_len..new_len + tail_len) were initialized and
        // are no longer part of the live prefix
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.slots.as_mut_ptr().add(new_len).cast::<T>(),
                tail_len,
            );
            ptr::drop_in_place(tail);
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.truncate(0);
    }

    /// Keeps the elements for which `keep` returns `true`, in order.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let mut index = 0;
        while index < self.len {
            if keep(&self.as_slice()[index]) {
                index += 1;
            } else {
                drop(self.remove(index));
            }
        }
    }

    /// Exchanges contents with `other`, element by element.
    ///
    /// The common prefix is swapped in place; the longer side's surplus is
    /// moved into the shorter side, then the live counts are exchanged.
    pub(crate) fn swap_contents(&mut self, other: &mut Self) {
        let common = self.len.min(other.len);
        self.as_mut_slice()[..common].swap_with_slice(&mut other.as_mut_slice()[..common]);

        let (long, short) = if self.len > other.len {
            (self, other)
        } else {
            (other, self)
        };
        for i in common..long.len {
            // SAFETY: i < long.len, so the source is initialized; i >=
            // short.len, so the destination is vacant. long.len is lowered
            // below, so the source is never read again.
            unsafe {
                let moved = long.slots[i].assume_init_read();
                short.slots[i].write(moved);
            }
        }
        core::mem::swap(&mut long.len, &mut short.len);
    }
}

impl<T, const N: usize> Drop for InlineStorage<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for InlineStorage<T, N> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for (slot, item) in copy.slots.iter_mut().zip(self.as_slice()) {
            slot.write(item.clone());
            // Counted one by one so a panicking clone drops what was built.
            copy.len += 1;
        }
        copy
    }
}

impl<T, const N: usize> IntoIterator for InlineStorage<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `this` is never dropped, so ownership of the slots
            // moves into the iterator exactly once
            slots: unsafe { ptr::read(&this.slots) },
            front: 0,
            back:  this.len,
        }
    }
}

/// Owning iterator over the elements of a fixed-capacity container.
///
/// Elements not consumed by the time the iterator is dropped are dropped
/// with it.
pub struct IntoIter<T, const N: usize> {
    /// Invariant: slots[front..back) are initialized
    slots: [MaybeUninit<T>; N],
    front: usize,
    back:  usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots[front..back) are initialized
        unsafe {
            slice::from_raw_parts(
                self.slots.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: index was inside the live window and has left it
        Some(unsafe { self.slots[index].assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: back was inside the live window and has left it
        Some(unsafe { self.slots[self.back].assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        let start = self.front;
        self.front = self.back;
        // SAFETY: slots[start..start + remaining) were initialized and are
        // now outside the live window
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(
                self.slots.as_mut_ptr().add(start).cast::<T>(),
                remaining,
            );
            ptr::drop_in_place(rest);
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
    fn verify_push_respects_capacity() {
        let mut storage: InlineStorage<u8, 3> = InlineStorage::new();
        let pushes: usize = kani::any();
        kani::assume(pushes <= 4);

        for i in 0..pushes {
            let accepted = storage.push(i as u8).is_ok();
            assert!(accepted == (i < 3));
        }
        assert!(storage.len() <= 3);
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_insert_remove_round_trip() {
        let mut storage: InlineStorage<u8, 4> = InlineStorage::new();
        for value in [10u8, 20, 30] {
            assert!(storage.push(value).is_ok());
        }

        let index: usize = kani::any();
        kani::assume(index < 3);

        let removed = storage.remove(index);
        assert!(removed.is_some());
        assert!(storage.insert(index, removed.unwrap_or_default()).is_ok());
        assert!(storage.as_slice() == [10, 20, 30]);
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_swap_contents_exchanges_lengths() {
        let mut a: InlineStorage<u8, 3> = InlineStorage::new();
        let mut b: InlineStorage<u8, 3> = InlineStorage::new();
        let a_len: usize = kani::any();
        let b_len: usize = kani::any();
        kani::assume(a_len <= 3 && b_len <= 3);

        for i in 0..a_len {
            let _ = a.push(i as u8);
        }
        for i in 0..b_len {
            let _ = b.push(10 + i as u8);
        }

        a.swap_contents(&mut b);
        assert!(a.len() == b_len);
        assert!(b.len() == a_len);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    /// Counts its own drops in a shared cell.
    struct Tracked<'a> {
        drops: &'a Cell<usize>,
    }

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            Self { drops: self.drops }
        }
    }

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn filled<'a>(drops: &'a Cell<usize>, count: usize) -> InlineStorage<Tracked<'a>, 4> {
        let mut storage = InlineStorage::new();
        for _ in 0..count {
            assert!(storage.push(Tracked { drops }).is_ok());
        }
        storage
    }

    #[test]
    fn test_push_pop() {
        let mut storage = InlineStorage::<u32, 2>::new();
        assert!(storage.push(1).is_ok());
        assert!(storage.push(2).is_ok());
        assert_eq!(storage.push(3), Err(3));
        assert!(storage.is_full());
        assert_eq!(storage.pop(), Some(2));
        assert_eq!(storage.pop(), Some(1));
        assert_eq!(storage.pop(), None);
    }

    #[test]
    fn test_insert_shifts_tail() {
        let mut storage = InlineStorage::<u32, 4>::new();
        for value in [1, 3, 4] {
            assert!(storage.push(value).is_ok());
        }
        assert!(storage.insert(1, 2).is_ok());
        assert_eq!(storage.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(storage.insert(0, 0), Err(0));

        let mut storage = InlineStorage::<u32, 4>::new();
        assert_eq!(storage.insert(1, 9), Err(9));
        assert!(storage.insert(0, 9).is_ok());
        assert_eq!(storage.as_slice(), &[9]);
    }

    #[test]
    fn test_remove_shifts_tail() {
        let mut storage = InlineStorage::<u32, 4>::new();
        for value in [1, 2, 3, 4] {
            assert!(storage.push(value).is_ok());
        }
        assert_eq!(storage.remove(1), Some(2));
        assert_eq!(storage.as_slice(), &[1, 3, 4]);
        assert_eq!(storage.remove(3), None);
        assert_eq!(storage.remove(2), Some(4));
        assert_eq!(storage.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_retain() {
        let mut storage = InlineStorage::<u32, 6>::new();
        for value in 1..=6 {
            assert!(storage.push(value).is_ok());
        }
        storage.retain(|value| value % 3 != 0);
        assert_eq!(storage.as_slice(), &[1, 2, 4, 5]);
    }

    #[test]
    fn test_swap_contents_uneven() {
        let mut a = InlineStorage::<u32, 4>::new();
        let mut b = InlineStorage::<u32, 4>::new();
        for value in [1, 2, 3, 4] {
            assert!(a.push(value).is_ok());
        }
        assert!(b.push(9).is_ok());

        a.swap_contents(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3, 4]);

        b.swap_contents(&mut a);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(b.as_slice(), &[9]);
    }

    #[test]
    fn test_drop_releases_live_elements_once() {
        let drops = Cell::new(0);
        {
            let mut storage = filled(&drops, 3);
            drop(storage.pop());
            assert_eq!(drops.get(), 1);
            storage.truncate(1);
            assert_eq!(drops.get(), 2);
        }
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_swap_does_not_duplicate_drops() {
        let drops = Cell::new(0);
        {
            let mut a = filled(&drops, 3);
            let mut b = filled(&drops, 1);
            a.swap_contents(&mut b);
            assert_eq!(drops.get(), 0);
            assert_eq!((a.len(), b.len()), (1, 3));
        }
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_clone_and_retain_drop_accounting() {
        let drops = Cell::new(0);
        {
            let original = filled(&drops, 2);
            let mut copy = original.clone();
            assert_eq!(copy.len(), 2);
            copy.retain(|_| false);
            assert_eq!(copy.len(), 0);
            assert_eq!(drops.get(), 2);
        }
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_into_iter_drops_unconsumed() {
        let drops = Cell::new(0);
        let storage = filled(&drops, 4);
        let mut iter = storage.into_iter();
        assert_eq!(iter.len(), 4);
        drop(iter.next());
        drop(iter.next_back());
        assert_eq!(drops.get(), 2);
        assert_eq!(iter.as_slice().len(), 2);
        drop(iter);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let mut storage = InlineStorage::<u32, 5>::new();
        for value in 1..=5 {
            assert!(storage.push(value).is_ok());
        }
        let mut iter = storage.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
