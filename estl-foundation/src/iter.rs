// ESTL - estl-foundation
// Module: Cursor Contract
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Position-based cursors.
//!
//! Rust iterators cover plain traversal (`iter()`, `.rev()`), but the sorted
//! map also hands out *positions*: the result of `find`, `lower_bound` or
//! `upper_bound` is a place inside the container, possibly the one-past-the-end
//! place. A [`Cursor`] models such a place. It names its element type, the
//! signed [`Difference`] type used to measure between two cursors and a
//! [`Category`] that decides how [`distance`] and [`advance`] move it.
//!
//! Cursors borrow their container, so no structural mutation can happen
//! while one is alive.

/// Signed distance between two cursors.
pub type Difference = isize;

/// Traversal capabilities of a cursor, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Single forward pass
    Input,
    /// Repeatable forward traversal
    Forward,
    /// Forward and backward single steps
    Bidirectional,
    /// Constant-time jumps to any offset
    RandomAccess,
}

impl Category {
    /// Returns `true` when cursors of this category can step backward.
    #[must_use]
    pub const fn supports_backward(self) -> bool {
        matches!(self, Self::Bidirectional | Self::RandomAccess)
    }

    /// Returns `true` when cursors of this category can jump to an offset.
    #[must_use]
    pub const fn supports_jump(self) -> bool {
        matches!(self, Self::RandomAccess)
    }
}

/// A position inside a container.
///
/// A cursor may rest on an element or on the end position; [`Cursor::get`]
/// returns `None` at the end. Equality means "same container, same place".
pub trait Cursor: Clone + PartialEq {
    /// What [`Cursor::get`] yields
    type Item;

    /// Traversal capabilities of this cursor type
    const CATEGORY: Category;

    /// The element at the current position, or `None` at the end.
    fn get(&self) -> Option<Self::Item>;

    /// Steps forward. Returns `false`, without moving, at the end.
    fn move_next(&mut self) -> bool;

    /// Steps backward. Returns `false`, without moving, at the front or
    /// when the category does not support it.
    fn move_prev(&mut self) -> bool {
        false
    }

    /// Zero-based offset from the front, for random-access cursors.
    fn offset(&self) -> Option<usize> {
        None
    }

    /// Jumps to `offset`. Returns `false`, without moving, when the offset
    /// lies past the end or the category does not support jumps.
    fn seek(&mut self, offset: usize) -> bool {
        let _ = offset;
        false
    }
}

#[allow(clippy::cast_possible_wrap)]
fn signed_gap(from: usize, to: usize) -> Difference {
    if to >= from {
        (to - from) as Difference
    } else {
        -((from - to) as Difference)
    }
}

/// Number of forward steps from `first` to `last`.
///
/// Random-access cursors answer in constant time and may return a negative
/// value. Other cursors are stepped from `first` until they compare equal to
/// `last`; if the end is reached first, the steps taken so far are returned.
pub fn distance<C: Cursor>(first: &C, last: &C) -> Difference {
    if C::CATEGORY.supports_jump() {
        if let (Some(from), Some(to)) = (first.offset(), last.offset()) {
            return signed_gap(from, to);
        }
    }

    let mut cursor = first.clone();
    let mut steps: Difference = 0;
    while cursor != *last && cursor.move_next() {
        steps += 1;
    }
    steps
}

/// Moves `cursor` by `n` positions (backward when negative).
///
/// Returns the part of `n` that could not be applied: `0` on success, the
/// remainder when the front or end was hit, or `n` itself for a backward
/// move on a cursor that cannot step backward.
pub fn advance<C: Cursor>(cursor: &mut C, n: Difference) -> Difference {
    if C::CATEGORY.supports_jump() {
        let target = cursor.offset().and_then(|at| at.checked_add_signed(n));
        if let Some(target) = target {
            if cursor.seek(target) {
                return 0;
            }
        }
    }

    let mut remaining = n;
    while remaining > 0 && cursor.move_next() {
        remaining -= 1;
    }
    if C::CATEGORY.supports_backward() {
        while remaining < 0 && cursor.move_prev() {
            remaining += 1;
        }
    }
    remaining
}

/// Walks `first` forward, yielding every element until `last`.
///
/// ```
/// use estl_foundation::{iter, StaticMap};
///
/// let mut map = StaticMap::<u32, char, 8>::new();
/// for (key, value) in [(1, 'a'), (3, 'c'), (5, 'e'), (7, 'g')] {
///     map.insert(key, value)?;
/// }
/// let keys: Vec<u32> = iter::between(map.lower_bound(&2), map.upper_bound(&5))
///     .map(|(key, _)| *key)
///     .collect();
/// assert_eq!(keys, [3, 5]);
/// # Ok::<(), estl_foundation::Error>(())
/// ```
pub fn between<C: Cursor>(first: C, last: C) -> Between<C> {
    Between {
        cursor: first,
        last,
    }
}

/// Iterator returned by [`between`].
#[derive(Debug, Clone)]
pub struct Between<C> {
    cursor: C,
    last:   C,
}

impl<C: Cursor> Iterator for Between<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.last {
            return None;
        }
        let item = self.cursor.get()?;
        self.cursor.move_next();
        Some(item)
    }
}

/// Reverse-order adapter.
///
/// `Rev` over a base cursor at position `p` refers to the element at
/// `p - 1`, so the reverse of the end cursor is the last element and the
/// reverse of the front cursor is the reverse end. The base cursor must
/// support backward steps.
///
/// A reversed cursor has no offset of its own, so it is at most
/// [`Category::Bidirectional`] even over a random-access base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rev<C> {
    base: C,
}

impl<C> Rev<C> {
    /// Wraps `base`.
    pub const fn new(base: C) -> Self {
        Self { base }
    }

    /// The underlying cursor.
    pub const fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the underlying cursor.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Cursor> Cursor for Rev<C> {
    type Item = C::Item;

    const CATEGORY: Category = if C::CATEGORY.supports_jump() {
        Category::Bidirectional
    } else {
        C::CATEGORY
    };

    fn get(&self) -> Option<Self::Item> {
        let mut probe = self.base.clone();
        if probe.move_prev() {
            probe.get()
        } else {
            None
        }
    }

    fn move_next(&mut self) -> bool {
        self.base.move_prev()
    }

    fn move_prev(&mut self) -> bool {
        self.base.move_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StaticMap, StaticVec, VecCursor};

    fn sample() -> StaticVec<u32, 8> {
        (10..15).collect()
    }

    #[test]
    fn test_category_capabilities() {
        assert!(!Category::Forward.supports_backward());
        assert!(Category::Bidirectional.supports_backward());
        assert!(!Category::Bidirectional.supports_jump());
        assert!(Category::RandomAccess.supports_jump());
        assert!(Category::Input < Category::RandomAccess);
    }

    #[test]
    fn test_distance_random_access() {
        let vec = sample();
        assert_eq!(distance(&vec.cursor_front(), &vec.cursor_end()), 5);
        assert_eq!(distance(&vec.cursor_end(), &vec.cursor_front()), -5);
    }

    #[test]
    fn test_distance_bidirectional_steps() {
        let mut map = StaticMap::<u32, (), 8>::new();
        for key in [4, 2, 9] {
            map.insert(key, ()).unwrap();
        }
        assert_eq!(distance(&map.begin(), &map.end()), 3);
        assert_eq!(distance(&map.find(&4), &map.end()), 2);
    }

    #[test]
    fn test_advance_random_access() {
        let vec = sample();
        let mut cursor = vec.cursor_front();
        assert_eq!(advance(&mut cursor, 3), 0);
        assert_eq!(cursor.get(), Some(&13));
        assert_eq!(advance(&mut cursor, -2), 0);
        assert_eq!(cursor.get(), Some(&11));
        // Two steps remain once the end is reached.
        assert_eq!(advance(&mut cursor, 6), 2);
        assert_eq!(cursor, vec.cursor_end());
    }

    #[test]
    fn test_advance_bidirectional() {
        let mut map = StaticMap::<u32, (), 8>::new();
        for key in [1, 2, 3] {
            map.insert(key, ()).unwrap();
        }
        let mut cursor = map.begin();
        assert_eq!(advance(&mut cursor, 2), 0);
        assert_eq!(cursor.key(), Some(&3));
        assert_eq!(advance(&mut cursor, -5), -3);
        assert_eq!(cursor, map.begin());
    }

    #[test]
    fn test_rev_walks_backwards() {
        let vec = sample();
        let mut rev = Rev::new(vec.cursor_end());
        let rend = Rev::new(vec.cursor_front());

        assert_eq!(rev.get(), Some(&14));
        assert!(rev.move_next());
        assert_eq!(rev.get(), Some(&13));
        assert_eq!(distance(&rev, &rend), 4);

        let collected: StaticVec<u32, 8> = between(rev, rend).copied().collect();
        assert_eq!(collected.as_slice(), &[13, 12, 11, 10]);
        assert_eq!(rend.get(), None);
    }

    #[test]
    fn test_rev_over_random_access_steps() {
        let vec: StaticVec<u32, 8> = (1..=3).collect();
        let rbegin = Rev::new(vec.cursor_end());
        let rend = Rev::new(vec.cursor_front());

        assert_eq!(<Rev<VecCursor<'_, u32>> as Cursor>::CATEGORY, Category::Bidirectional);
        assert!(!<Rev<VecCursor<'_, u32>> as Cursor>::CATEGORY.supports_jump());
        assert_eq!(rbegin.offset(), None);

        assert_eq!(distance(&rbegin, &rend), 3);
        // Stepping cursors stop at the end instead of measuring backward.
        assert_eq!(distance(&rend, &rbegin), 0);

        let mut cursor = rbegin;
        assert_eq!(advance(&mut cursor, 2), 0);
        assert_eq!(cursor.get(), Some(&1));
        assert_eq!(advance(&mut cursor, -1), 0);
        assert_eq!(cursor.get(), Some(&2));
        assert_eq!(advance(&mut cursor, 5), 3);
        assert_eq!(cursor, rend);
    }

    #[test]
    fn test_rev_keeps_weaker_categories() {
        let map = StaticMap::<u32, (), 4>::new();
        assert_eq!(
            <Rev<crate::MapCursor<'_, u32, ()>> as Cursor>::CATEGORY,
            Category::Bidirectional
        );
        assert_eq!(Rev::new(map.end()), Rev::new(map.begin()));
    }

    #[test]
    fn test_between_empty_range() {
        let vec = sample();
        assert_eq!(between(vec.cursor_end(), vec.cursor_end()).count(), 0);
    }
}
