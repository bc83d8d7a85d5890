// ESTL - estl-foundation
// Module: Key Comparators
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Type-level ordering predicates.
//!
//! A [`Comparator`] is chosen as a generic parameter of the container, not
//! stored in it: every map of a given type sorts its keys the same way and
//! carries no per-instance comparator state.

use core::cmp::Ordering;

/// Strict weak ordering over `K`.
///
/// `less(a, b)` must be irreflexive and transitive. Two keys are
/// *equivalent* when neither is less than the other.
pub trait Comparator<K: ?Sized> {
    /// Returns `true` when `a` sorts strictly before `b`.
    fn less(a: &K, b: &K) -> bool;

    /// Returns `true` when neither key sorts before the other.
    #[inline]
    fn equivalent(a: &K, b: &K) -> bool {
        !Self::less(a, b) && !Self::less(b, a)
    }

    /// Three-way comparison derived from [`Comparator::less`].
    #[inline]
    fn ordering(a: &K, b: &K) -> Ordering {
        if Self::less(a, b) {
            Ordering::Less
        } else if Self::less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Ascending order by `PartialOrd` (the default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<K: PartialOrd + ?Sized> Comparator<K> for Less {
    #[inline]
    fn less(a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending order by `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<K: PartialOrd + ?Sized> Comparator<K> for Greater {
    #[inline]
    fn less(a: &K, b: &K) -> bool {
        b < a
    }
}
