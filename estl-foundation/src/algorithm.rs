// ESTL - estl-foundation
// Module: Generic Algorithms
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Stateless algorithms over slices and iterators.
//!
//! None of these functions allocate or keep state between calls. The
//! `_by` variants take a strict "less than" predicate; the plain variants use
//! `PartialOrd`. Every container in this crate derefs to a slice (or yields
//! an iterator), so the functions apply to container contents directly.

use core::cmp::Ordering;

use crate::compare::Comparator;

/// Index of the first element matching `predicate`.
pub fn find_if<T, P>(items: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    items.iter().position(|item| predicate(item))
}

/// Index of the first element not matching `predicate`.
pub fn find_if_not<T, P>(items: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    find_if(items, |item| !predicate(item))
}

/// Returns `true` when every element matches `predicate` (also when empty).
pub fn all_of<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    find_if_not(items, predicate).is_none()
}

/// Returns `true` when at least one element matches `predicate`.
pub fn any_of<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    find_if(items, predicate).is_some()
}

/// Returns `true` when no element matches `predicate` (also when empty).
pub fn none_of<T, P>(items: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !any_of(items, predicate)
}

/// Number of elements matching `predicate`.
pub fn count_if<T, P>(items: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count()
}

/// Number of elements equal to `value`.
pub fn count<T: PartialEq>(items: &[T], value: &T) -> usize {
    count_if(items, |item| item == value)
}

/// Assigns a clone of `value` to every element.
pub fn fill<T: Clone>(items: &mut [T], value: &T) {
    for item in items {
        item.clone_from(value);
    }
}

/// Assigns a clone of `value` to the first `n` elements (or all, if fewer).
///
/// Returns the number of elements written.
pub fn fill_n<T: Clone>(items: &mut [T], n: usize, value: &T) -> usize {
    let n = n.min(items.len());
    fill(&mut items[..n], value);
    n
}

/// Replaces every element equal to `old` with a clone of `new`.
pub fn replace<T: PartialEq + Clone>(items: &mut [T], old: &T, new: &T) {
    replace_if(items, |item| item == old, new);
}

/// Replaces every element matching `predicate` with a clone of `new`.
pub fn replace_if<T, P>(items: &mut [T], mut predicate: P, new: &T)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    for item in items {
        if predicate(item) {
            item.clone_from(new);
        }
    }
}

/// Clones elements from `source` into `dest` until either runs out.
///
/// Returns the number of elements copied.
pub fn copy_into<T: Clone>(source: &[T], dest: &mut [T]) -> usize {
    let n = source.len().min(dest.len());
    dest[..n].clone_from_slice(&source[..n]);
    n
}

/// Clones the elements of `source` matching `predicate` into `dest`, in
/// order, until `dest` is full.
///
/// Returns the number of elements copied.
pub fn copy_if<T, P>(source: &[T], dest: &mut [T], mut predicate: P) -> usize
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut written = 0;
    for item in source.iter().filter(|item| predicate(item)) {
        let Some(slot) = dest.get_mut(written) else {
            break;
        };
        slot.clone_from(item);
        written += 1;
    }
    written
}

/// Sorts `items` in ascending order.
///
/// Insertion sort: stable, in place, no allocation, quadratic in the worst
/// case. Suited to the small lengths of fixed-capacity containers.
pub fn insertion_sort<T: PartialOrd>(items: &mut [T]) {
    insertion_sort_by(items, |a, b| a < b);
}

/// Sorts `items` with a strict "less than" predicate. Stable.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for unsorted in 1..items.len() {
        let mut hole = unsorted;
        while hole > 0 && less(&items[hole], &items[hole - 1]) {
            items.swap(hole, hole - 1);
            hole -= 1;
        }
    }
}

/// Sorts `items` by a type-level [`Comparator`]. Stable.
pub fn insertion_sort_with<T, C: Comparator<T>>(items: &mut [T]) {
    insertion_sort_by(items, C::less);
}

/// First index whose element is not less than `value` (`items.len()` if
/// none). `items` must be partitioned by `less(_, value)`.
pub fn lower_bound<T: PartialOrd>(items: &[T], value: &T) -> usize {
    lower_bound_by(items, value, |a, b| a < b)
}

/// [`lower_bound`] with a custom predicate.
pub fn lower_bound_by<T, F>(items: &[T], value: &T, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut first = 0;
    let mut count = items.len();
    while count > 0 {
        let step = count / 2;
        let probe = first + step;
        if less(&items[probe], value) {
            first = probe + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }
    first
}

/// First index whose element is greater than `value` (`items.len()` if
/// none). `items` must be partitioned by `!less(value, _)`.
pub fn upper_bound<T: PartialOrd>(items: &[T], value: &T) -> usize {
    upper_bound_by(items, value, |a, b| a < b)
}

/// [`upper_bound`] with a custom predicate.
pub fn upper_bound_by<T, F>(items: &[T], value: &T, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut first = 0;
    let mut count = items.len();
    while count > 0 {
        let step = count / 2;
        let probe = first + step;
        if less(value, &items[probe]) {
            count = step;
        } else {
            first = probe + 1;
            count -= step + 1;
        }
    }
    first
}

/// Returns `true` when a sorted `items` contains an element equivalent to
/// `value`.
pub fn binary_search<T: PartialOrd>(items: &[T], value: &T) -> bool {
    binary_search_by(items, value, |a, b| a < b)
}

/// [`binary_search`] with a custom predicate.
pub fn binary_search_by<T, F>(items: &[T], value: &T, mut less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let index = lower_bound_by(items, value, &mut less);
    items
        .get(index)
        .is_some_and(|found| !less(value, found))
}

/// The smaller of two values; `a` when they are equivalent.
pub fn min<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    min_by(a, b, |x, y| x < y)
}

/// [`min`] with a custom predicate.
pub fn min_by<'a, T, F>(a: &'a T, b: &'a T, mut less: F) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    if less(b, a) {
        b
    } else {
        a
    }
}

/// The larger of two values; `a` when they are equivalent.
pub fn max<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    max_by(a, b, |x, y| x < y)
}

/// [`max`] with a custom predicate.
pub fn max_by<'a, T, F>(a: &'a T, b: &'a T, mut less: F) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    if less(a, b) {
        b
    } else {
        a
    }
}

/// Index of the first smallest element, `None` when empty.
pub fn min_element<T: PartialOrd>(items: &[T]) -> Option<usize> {
    min_element_by(items, |a, b| a < b)
}

/// [`min_element`] with a custom predicate.
pub fn min_element_by<T, F>(items: &[T], mut less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut best = None;
    for (index, item) in items.iter().enumerate() {
        match best {
            Some(current) if !less(item, &items[current]) => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Index of the first largest element, `None` when empty.
pub fn max_element<T: PartialOrd>(items: &[T]) -> Option<usize> {
    max_element_by(items, |a, b| a < b)
}

/// [`max_element`] with a custom predicate.
pub fn max_element_by<T, F>(items: &[T], mut less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut best = None;
    for (index, item) in items.iter().enumerate() {
        match best {
            Some(current) if !less(&items[current], item) => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Returns `true` when the sequence `a` sorts strictly before `b`.
pub fn lexicographical_compare<I, J, T>(a: I, b: J) -> bool
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: PartialOrd,
{
    lexicographical_compare_by(a, b, |x, y| x < y)
}

/// [`lexicographical_compare`] with a custom predicate.
pub fn lexicographical_compare_by<I, J, T, F>(a: I, b: J, mut less: F) -> bool
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if less(&x, &y) {
                    return true;
                }
                if less(&y, &x) {
                    return false;
                }
            }
            (None, Some(_)) => return true,
            _ => return false,
        }
    }
}

/// Three-way lexicographic comparison for partially ordered elements.
///
/// Returns `None` as soon as a pair of elements is unordered.
pub fn lexicographic_partial_cmp<I, J, T>(a: I, b: J) -> Option<Ordering>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: PartialOrd,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => match x.partial_cmp(&y)? {
                Ordering::Equal => {}
                decided => return Some(decided),
            },
            (Some(_), None) => return Some(Ordering::Greater),
            (None, Some(_)) => return Some(Ordering::Less),
            (None, None) => return Some(Ordering::Equal),
        }
    }
}

/// Three-way lexicographic comparison for totally ordered elements.
pub fn lexicographic_cmp<I, J, T>(a: I, b: J) -> Ordering
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Ord,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {}
                decided => return decided,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}
