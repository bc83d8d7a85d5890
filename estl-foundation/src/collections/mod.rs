// ESTL - estl-foundation
// Module: Collections
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collections with inline storage.
//!
//! Both containers keep their elements in an inline array sized by a const
//! generic parameter. Nothing is ever allocated; a container that would
//! outgrow its capacity reports a contract violation instead.
//!
//! - [`StaticVec`]: ordered sequence, O(1) push/pop, O(n) insert/remove
//! - [`StaticMap`]: sorted unique-key map, O(n) lookup, insert and erase

mod inline;
mod static_map;
mod static_vec;

pub use inline::IntoIter;
pub use static_map::{
    Entry, IntoIter as MapIntoIter, Iter as MapIter, IterMut as MapIterMut, MapCursor,
    OccupiedEntry, StaticMap, VacantEntry,
};
pub use static_vec::{StaticVec, VecCursor};

/// Detached handle to a slot in a [`StaticMap`].
///
/// A position is a plain index and does not borrow the map. It stays
/// meaningful only while no insert or erase shifts the slots at or before
/// it; operations taking a stale position past the end report
/// [`estl_error::codes::INVALID_POSITION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}
