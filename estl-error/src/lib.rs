// ESTL - estl-error
// Module: Error Handling
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! estl error handling library
//!
//! The fixed-capacity containers never unwind to report a broken
//! precondition. Every fallible operation returns [`Result`], whose error
//! value is a small `Copy` struct that needs no allocator.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1999)
//! - Insertion into a full container
//! - Conversion from a slice longer than the capacity
//!
//! ## Bounds Errors (2000-2999)
//! - Checked index access outside the live range
//! - Stale position handles
//!
//! ## Lookup Errors (3000-3999)
//! - Must-exist key lookups on absent keys
//!
//! # Usage
//!
//! ```
//! use estl_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::capacity_exceeded("StaticVec capacity exceeded");
//! assert_eq!(error.category, ErrorCategory::Capacity);
//! assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for estl
pub mod codes;
/// Error and error handling types
pub mod errors;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for estl operations.
///
/// This type alias uses `estl_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
