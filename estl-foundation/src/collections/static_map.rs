// ESTL - estl-foundation
// Module: StaticMap - Inline-storage sorted map
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sorted key-value map with inline storage and compile-time capacity.
//!
//! `StaticMap<K, V, N, C>` keeps up to `N` entries in a contiguous array,
//! ascending by key under the type-level comparator `C` (default
//! [`Less`]). Keys are unique: inserting a key equivalent to a stored one
//! leaves the map untouched and reports the existing entry.
//!
//! # Characteristics
//!
//! - **Zero allocation**: all memory is an inline `[MaybeUninit<(K, V)>; N]`
//! - **O(n) lookup**: linear scan that stops at the first key not less than
//!   the probe, which is the cheapest search for the small `N` this map is
//!   sized for
//! - **O(n) insert and erase**: tail shift keeps the array sorted
//! - **Stateless ordering**: `C` is a type, so maps carry no comparator

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::slice;

use estl_error::{Error, Result};

use super::inline::{self, InlineStorage};
use super::Position;
use crate::algorithm;
use crate::compare::{Comparator, Less};
use crate::contract;
use crate::iter::{Category, Cursor};

const CAPACITY_EXCEEDED: &str = "StaticMap capacity exceeded";
const KEY_NOT_FOUND: &str = "StaticMap key not found";
const INVALID_POSITION: &str = "StaticMap position out of range";

/// A sorted map with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Entries `[0..len)` are initialized and strictly ascending by key
///    under `C`
/// 3. No two keys are equivalent
///
/// # Examples
///
/// ```
/// use estl_foundation::StaticMap;
///
/// let mut map = StaticMap::<&str, u32, 10>::new();
/// map.insert("foo", 42)?;
/// map.insert("bar", 100)?;
///
/// assert_eq!(map.get(&"foo"), Some(&42));
/// assert_eq!(map.get(&"baz"), None);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["bar", "foo"]);
/// # Ok::<(), estl_foundation::Error>(())
/// ```
pub struct StaticMap<K, V, const N: usize = { crate::config::DEFAULT_MAP_CAPACITY }, C = Less> {
    entries: InlineStorage<(K, V), N>,
    _order:  PhantomData<fn() -> C>,
}

impl<K, V, const N: usize, C: Comparator<K>> StaticMap<K, V, N, C> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: InlineStorage::new(),
            _order:  PhantomData,
        }
    }

    /// Builds a map from `(key, value)` pairs.
    ///
    /// When a key repeats, the first value is kept.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the pairs hold more
    /// than `N` distinct keys.
    pub fn try_from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Result<Self> {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Returns `true` if no further key fits.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Linear scan for `key`.
    ///
    /// Returns `Ok(index)` of the equivalent key, or `Err(index)` of the
    /// first key that sorts after it (the insertion point).
    fn search(&self, key: &K) -> core::result::Result<usize, usize> {
        let entries = self.entries.as_slice();
        for (index, (candidate, _)) in entries.iter().enumerate() {
            if !C::less(candidate, key) {
                return if C::less(key, candidate) { Err(index) } else { Ok(index) };
            }
        }
        Err(entries.len())
    }

    fn upper_index(&self, key: &K) -> usize {
        let entries = self.entries.as_slice();
        entries
            .iter()
            .position(|(candidate, _)| C::less(key, candidate))
            .unwrap_or(entries.len())
    }

    fn cursor(&self, index: usize) -> MapCursor<'_, K, V> {
        MapCursor {
            entries: self.entries.as_slice(),
            index,
        }
    }

    /// Inserts `key` with `value` unless an equivalent key is present.
    ///
    /// Returns the position of the entry holding the key and whether the
    /// insertion happened. An existing entry keeps its value.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the key is new and the
    /// map is full. The map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use estl_foundation::StaticMap;
    ///
    /// let mut map = StaticMap::<u32, &str, 4>::new();
    /// let (at, inserted) = map.insert(7, "seven")?;
    /// assert!(inserted);
    ///
    /// let (again, inserted) = map.insert(7, "SEVEN")?;
    /// assert!(!inserted);
    /// assert_eq!(again, at);
    /// assert_eq!(map.get(&7), Some(&"seven"));
    /// # Ok::<(), estl_foundation::Error>(())
    /// ```
    #[track_caller]
    pub fn insert(&mut self, key: K, value: V) -> Result<(Position, bool)> {
        match self.search(&key) {
            Ok(index) => Ok((Position::new(index), false)),
            Err(index) => {
                self.insert_at(index, key, value)?;
                Ok((Position::new(index), true))
            }
        }
    }

    #[track_caller]
    fn insert_at(&mut self, index: usize, key: K, value: V) -> Result<()> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::shifting("StaticMap", index, self.len()).entered();

        match self.entries.insert(index, (key, value)) {
            Ok(()) => Ok(()),
            Err(_rejected) => Err(contract::violation(Error::capacity_exceeded(CAPACITY_EXCEEDED))),
        }
    }

    /// Inserts `key` with `value`, overwriting the value of an equivalent
    /// key. Returns the value it replaced.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the key is new and the
    /// map is full.
    #[track_caller]
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self.search(&key) {
            Ok(index) => Ok(Some(core::mem::replace(
                &mut self.entries.as_mut_slice()[index].1,
                value,
            ))),
            Err(index) => {
                self.insert_at(index, key, value)?;
                Ok(None)
            }
        }
    }

    /// Mutable access to the value for `key`, inserting `V::default()` first
    /// when the key is absent.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the key is new and the
    /// map is full.
    #[track_caller]
    pub fn get_or_insert_default(&mut self, key: K) -> Result<&mut V>
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// ```
    /// use estl_foundation::StaticMap;
    ///
    /// let mut counts = StaticMap::<char, u32, 8>::new();
    /// for letter in "abca".chars() {
    ///     *counts.entry(letter).or_insert(0)? += 1;
    /// }
    /// assert_eq!(counts.get(&'a'), Some(&2));
    /// # Ok::<(), estl_foundation::Error>(())
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, N, C> {
        match self.search(&key) {
            Ok(index) => Entry::Occupied(OccupiedEntry { map: self, index }),
            Err(index) => Entry::Vacant(VacantEntry {
                map: self,
                key,
                index,
            }),
        }
    }

    /// Cursor on the entry whose key is equivalent to `key`, or
    /// [`end()`](Self::end) when there is none.
    #[must_use]
    pub fn find(&self, key: &K) -> MapCursor<'_, K, V> {
        match self.search(key) {
            Ok(index) => self.cursor(index),
            Err(_) => self.end(),
        }
    }

    /// The value for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// The value for `key`, mutably.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            Ok(index) => Some(&mut self.entries.as_mut_slice()[index].1),
            Err(_) => None,
        }
    }

    /// The stored key and value for `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let index = self.search(key).ok()?;
        self.entries.as_slice().get(index).map(|(k, v)| (k, v))
    }

    /// Returns `true` if an equivalent key is stored.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Number of entries with a key equivalent to `key`: 0 or 1.
    #[inline]
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Detached position of `key`.
    #[must_use]
    pub fn position(&self, key: &K) -> Option<Position> {
        self.search(key).ok().map(Position::new)
    }

    /// Must-exist lookup.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::KEY_NOT_FOUND`] when no equivalent key is
    /// stored, subject to the contract policy.
    #[track_caller]
    pub fn at(&self, key: &K) -> Result<&V> {
        match self.get(key) {
            Some(value) => Ok(value),
            None => Err(contract::violation(Error::key_not_found(KEY_NOT_FOUND))),
        }
    }

    /// Must-exist mutable lookup.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::KEY_NOT_FOUND`] when no equivalent key is
    /// stored, subject to the contract policy.
    #[track_caller]
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.search(key) {
            Ok(index) => Ok(&mut self.entries.as_mut_slice()[index].1),
            Err(_) => Err(contract::violation(Error::key_not_found(KEY_NOT_FOUND))),
        }
    }

    /// Removes the entry at `position`.
    ///
    /// Returns the position of the entry that followed it, which is the
    /// end position when the last entry was removed.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::INVALID_POSITION`] when `position` does not
    /// refer to a live entry.
    #[track_caller]
    pub fn erase_at(&mut self, position: Position) -> Result<Position> {
        let index = position.index();

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::shifting("StaticMap", index, self.len()).entered();

        match self.entries.remove(index) {
            Some(_removed) => Ok(Position::new(index)),
            None => Err(contract::violation(Error::invalid_position(INVALID_POSITION))),
        }
    }

    /// Removes the entry for `key`. Returns how many entries were removed:
    /// 0 or 1.
    pub fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove_entry(key).is_some())
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key` and returns the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.search(key).ok()?;

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::CollectionTrace::shifting("StaticMap", index, self.len()).entered();

        self.entries.remove(index)
    }

    /// Cursor on the first entry whose key is not less than `key`.
    #[must_use]
    pub fn lower_bound(&self, key: &K) -> MapCursor<'_, K, V> {
        match self.search(key) {
            Ok(index) | Err(index) => self.cursor(index),
        }
    }

    /// Cursor on the first entry whose key is greater than `key`.
    #[must_use]
    pub fn upper_bound(&self, key: &K) -> MapCursor<'_, K, V> {
        self.cursor(self.upper_index(key))
    }

    /// `(lower_bound(key), upper_bound(key))`: spans the one entry for `key`,
    /// or is empty when the key is absent.
    #[must_use]
    pub fn equal_range(&self, key: &K) -> (MapCursor<'_, K, V>, MapCursor<'_, K, V>) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Drops every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Exchanges contents with `other` entry by entry.
    pub fn swap_contents(&mut self, other: &mut Self) {
        self.entries.swap_contents(&mut other.entries);
    }

    /// Entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entries.as_slice().first().map(|(k, v)| (k, v))
    }

    /// Entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entries.as_slice().last().map(|(k, v)| (k, v))
    }

    /// Cursor on the first entry.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> MapCursor<'_, K, V> {
        self.cursor(0)
    }

    /// Cursor one past the last entry.
    #[inline]
    #[must_use]
    pub fn end(&self) -> MapCursor<'_, K, V> {
        self.cursor(self.len())
    }

    /// Cursor at `position`, which may be the end position.
    #[must_use]
    pub fn cursor_at(&self, position: Position) -> Option<MapCursor<'_, K, V>> {
        (position.index() <= self.len()).then(|| self.cursor(position.index()))
    }
}

impl<K, V, const N: usize, C> StaticMap<K, V, N, C> {
    /// Iterator over `(key, value)` in key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.as_slice().iter(),
        }
    }

    /// Iterator over `(key, value)` in key order with mutable values.
    ///
    /// Keys stay immutable so the order cannot be broken.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.as_mut_slice().iter_mut(),
        }
    }

    /// Keys in order.
    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(k, _)| k)
    }

    /// Values in key order.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, v)| v)
    }

    /// Mutable values in key order.
    #[inline]
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.iter_mut().map(|(_, v)| v)
    }
}

/// A view into a single entry of a map, vacant or occupied.
pub enum Entry<'a, K, V, const N: usize, C> {
    /// The key is stored
    Occupied(OccupiedEntry<'a, K, V, N, C>),
    /// The key is absent
    Vacant(VacantEntry<'a, K, V, N, C>),
}

impl<'a, K, V, const N: usize, C: Comparator<K>> Entry<'a, K, V, N, C> {
    /// Inserts `default` if the entry is vacant, then returns the value.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when vacant and the map is
    /// full.
    #[track_caller]
    pub fn or_insert(self, default: V) -> Result<&'a mut V> {
        match self {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant, then returns
    /// the value.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when vacant and the map is
    /// full.
    #[track_caller]
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> Result<&'a mut V> {
        match self {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Inserts `V::default()` if the entry is vacant, then returns the value.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when vacant and the map is
    /// full.
    #[track_caller]
    pub fn or_default(self) -> Result<&'a mut V>
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// The key of this entry.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Applies `f` to the value if the entry is occupied.
    #[must_use]
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

/// An entry whose key is stored in the map.
pub struct OccupiedEntry<'a, K, V, const N: usize, C> {
    map:   &'a mut StaticMap<K, V, N, C>,
    index: usize,
}

impl<'a, K, V, const N: usize, C> OccupiedEntry<'a, K, V, N, C> {
    /// The stored key.
    pub fn key(&self) -> &K {
        &self.map.entries.as_slice()[self.index].0
    }

    /// The stored value.
    pub fn get(&self) -> &V {
        &self.map.entries.as_slice()[self.index].1
    }

    /// The stored value, mutably.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.entries.as_mut_slice()[self.index].1
    }

    /// The stored value, borrowed for as long as the map.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.map.entries.as_mut_slice()[self.index].1
    }

    /// Replaces the value and returns the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Detached position of this entry.
    pub fn position(&self) -> Position {
        Position::new(self.index)
    }
}

/// An entry whose key is absent from the map.
pub struct VacantEntry<'a, K, V, const N: usize, C> {
    map:   &'a mut StaticMap<K, V, N, C>,
    key:   K,
    index: usize,
}

impl<'a, K, V, const N: usize, C: Comparator<K>> VacantEntry<'a, K, V, N, C> {
    /// The key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Gives the key back.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the key with `value` at its sorted position.
    ///
    /// # Errors
    ///
    /// [`estl_error::codes::CAPACITY_EXCEEDED`] when the map is full.
    #[track_caller]
    pub fn insert(self, value: V) -> Result<&'a mut V> {
        let Self { map, key, index } = self;
        map.insert_at(index, key, value)?;
        Ok(&mut map.entries.as_mut_slice()[index].1)
    }
}

impl<K, V, const N: usize, C: Comparator<K>> Default for StaticMap<K, V, N, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, const N: usize, C> Clone for StaticMap<K, V, N, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _order:  PhantomData,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize, C> fmt::Debug for StaticMap<K, V, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, const N: usize, C> PartialEq for StaticMap<K, V, N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.as_slice() == other.entries.as_slice()
    }
}

impl<K: Eq, V: Eq, const N: usize, C> Eq for StaticMap<K, V, N, C> {}

impl<K: PartialOrd, V: PartialOrd, const N: usize, C> PartialOrd for StaticMap<K, V, N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        algorithm::lexicographic_partial_cmp(self.iter(), other.iter())
    }
}

impl<K: Ord, V: Ord, const N: usize, C> Ord for StaticMap<K, V, N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        algorithm::lexicographic_cmp(self.iter(), other.iter())
    }
}

impl<K: Hash, V: Hash, const N: usize, C> Hash for StaticMap<K, V, N, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.as_slice().hash(state);
    }
}

/// Iterator over the entries of a [`StaticMap`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the entries of a [`StaticMap`] with mutable values.
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (&*k, v))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over the entries of a [`StaticMap`].
#[derive(Debug)]
pub struct IntoIter<K, V, const N: usize> {
    inner: inline::IntoIter<(K, V), N>,
}

impl<K, V, const N: usize> Iterator for IntoIter<K, V, N> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, const N: usize> DoubleEndedIterator for IntoIter<K, V, N> {
    #[inline]
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V, const N: usize> ExactSizeIterator for IntoIter<K, V, N> {}

impl<K, V, const N: usize> FusedIterator for IntoIter<K, V, N> {}

impl<K, V, const N: usize, C> IntoIterator for StaticMap<K, V, N, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V, const N: usize, C> IntoIterator for &'a StaticMap<K, V, N, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, const N: usize, C> IntoIterator for &'a mut StaticMap<K, V, N, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Bidirectional cursor into a [`StaticMap`].
///
/// Produced by [`StaticMap::find`], the bound queries and
/// [`StaticMap::begin`]/[`StaticMap::end`]. It borrows the map, so no entry
/// can move while the cursor exists.
pub struct MapCursor<'a, K, V> {
    entries: &'a [(K, V)],
    index:   usize,
}

impl<'a, K, V> MapCursor<'a, K, V> {
    /// Key at this position, `None` at the end.
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.entries.get(self.index).map(|(k, _)| k)
    }

    /// Value at this position, `None` at the end.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        self.entries.get(self.index).map(|(_, v)| v)
    }

    /// Detached position, usable after the cursor is gone.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.index)
    }

    /// Returns `true` at the end position.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index == self.entries.len()
    }
}

impl<K, V> Clone for MapCursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for MapCursor<'_, K, V> {}

impl<K, V> PartialEq for MapCursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.entries, other.entries) && self.index == other.index
    }
}

impl<K, V> Eq for MapCursor<'_, K, V> {}

impl<K, V> fmt::Debug for MapCursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCursor")
            .field("index", &self.index)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<'a, K, V> Cursor for MapCursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    const CATEGORY: Category = Category::Bidirectional;

    #[inline]
    fn get(&self) -> Option<Self::Item> {
        self.entries.get(self.index).map(|(k, v)| (k, v))
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        if self.index < self.entries.len() {
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
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_sorted_order() {
        let mut map: StaticMap<u8, u8, 4> = StaticMap::new();
        let keys: [u8; 4] = kani::any();
        for key in keys {
            let _ = map.insert(key, 0);
        }

        let mut previous: Option<u8> = None;
        for (key, _) in map.iter() {
            if let Some(prev) = previous {
                assert!(prev < *key);
            }
            previous = Some(*key);
        }
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_duplicate_insert_is_noop() {
        let mut map: StaticMap<u8, u8, 3> = StaticMap::new();
        let key: u8 = kani::any();
        assert!(map.insert(key, 1).is_ok());
        let again = map.insert(key, 2);
        assert!(matches!(again, Ok((_, false))));
        assert!(map.get(&key) == Some(&1));
        assert!(map.len() == 1);
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_capacity_enforcement() {
        let mut map: StaticMap<u8, u8, 2> = StaticMap::new();
        assert!(map.insert(1, 10).is_ok());
        assert!(map.insert(2, 20).is_ok());
        assert!(map.insert(3, 30).is_err());
        assert!(map.len() == 2);
    }
}

// ============================================================================
// Tests
// ============================================================================
