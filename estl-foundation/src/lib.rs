// ESTL - estl-foundation
// Module: Crate Root
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity containers for embedded targets.
//!
//! Every container in this crate stores its elements inline, in an array
//! whose length is a const generic parameter. Nothing allocates. Capacity is
//! part of the type, so a `StaticVec<u8, 32>` costs the same memory whether it
//! holds zero elements or thirty-two.
//!
//! - [`StaticVec`]: contiguous sequence of up to `N` elements
//! - [`StaticMap`]: sorted, unique-key map of up to `N` entries, ordered by a
//!   type-level [`Comparator`]
//! - [`iter`]: cursor contract (categories, `distance`, `advance`, [`Rev`])
//! - [`algorithm`]: stateless search, sort and comparison helpers
//! - [`contract`]: what happens when a precondition is violated
//!
//! # Feature Flags
//!
//! - `std`: implements `std::error::Error` for the error type
//! - `tracing`: emits `tracing` events for contract violations and
//!   structural mutations
//! - `abort-on-violation`: contract violations panic by default instead of
//!   being returned as `Err`
//!
//! # Concurrency
//!
//! The containers are plain data. They are `Send`/`Sync` whenever their
//! element types are, but no method synchronizes internally: sharing one
//! container between threads requires an external lock.
//!
//! # Example
//!
//! ```
//! use estl_foundation::{StaticMap, StaticVec};
//!
//! let mut readings = StaticVec::<u16, 4>::new();
//! readings.push(410)?;
//! readings.push(395)?;
//! assert_eq!(readings.as_slice(), &[410, 395]);
//!
//! let mut devices = StaticMap::<u8, &str, 8>::new();
//! devices.insert(3, "pressure")?;
//! devices.insert(1, "temperature")?;
//! assert_eq!(devices.keys().copied().collect::<Vec<_>>(), [1, 3]);
//! # Ok::<(), estl_foundation::Error>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Route an event to `tracing` when the feature is enabled; expands to
/// nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        $crate::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub mod algorithm;
pub mod collections;
pub mod compare;
pub mod config;
pub mod contract;
pub mod iter;
pub mod tracing;

pub use collections::{
    Entry, IntoIter, MapCursor, OccupiedEntry, Position, StaticMap, StaticVec, VacantEntry,
    VecCursor,
};
pub use compare::{Comparator, Greater, Less};
pub use contract::{OrAbort, ViolationPolicy};
pub use estl_error::{codes, Error, ErrorCategory, Result};
pub use iter::{Category, Cursor, Rev};
