// ESTL - estl-error
// Module: Error Types
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Error` value returned by every fallible container operation.
//!
//! Errors are plain `Copy` data: a category, a numeric code and a static
//! message. Nothing here allocates, so the type is usable on targets without
//! a heap.

use core::fmt;

use crate::codes;

/// `Error` categories for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// The fixed capacity would be exceeded
    Capacity = 1,
    /// An index or position lies outside the live range
    Bounds   = 2,
    /// A required key is absent
    Lookup   = 3,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// estl `Error` type
///
/// Carries the category and code of a contract violation together with a
/// short static description of the operation that failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Generic capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Container capacity exceeded",
    );
    /// Generic slice too long error
    pub const SLICE_TOO_LONG: Self = Self::new(
        ErrorCategory::Capacity,
        codes::SLICE_TOO_LONG,
        "Slice longer than container capacity",
    );
    /// Generic index out of bounds error
    pub const INDEX_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_BOUNDS,
        "Index out of bounds",
    );
    /// Generic invalid position error
    pub const INVALID_POSITION: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INVALID_POSITION,
        "Position out of range",
    );
    /// Generic key not found error
    pub const KEY_NOT_FOUND: Self =
        Self::new(ErrorCategory::Lookup, codes::KEY_NOT_FOUND, "Key not found");

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Same category and code, different message.
    #[must_use]
    pub const fn with_message(self, message: &'static str) -> Self {
        Self { message, ..self }
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::CAPACITY_EXCEEDED.with_message(message)
    }

    /// Create a slice too long error
    #[must_use]
    pub const fn slice_too_long(message: &'static str) -> Self {
        Self::SLICE_TOO_LONG.with_message(message)
    }

    /// Create an index out of bounds error
    #[must_use]
    pub const fn index_out_of_bounds(message: &'static str) -> Self {
        Self::INDEX_OUT_OF_BOUNDS.with_message(message)
    }

    /// Create an invalid position error
    #[must_use]
    pub const fn invalid_position(message: &'static str) -> Self {
        Self::INVALID_POSITION.with_message(message)
    }

    /// Create a key not found error
    #[must_use]
    pub const fn key_not_found(message: &'static str) -> Self {
        Self::KEY_NOT_FOUND.with_message(message)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a lookup error
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        self.category == ErrorCategory::Lookup
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
