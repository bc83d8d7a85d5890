// ESTL - estl-error
// Module: Error Codes
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for estl

// Capacity error codes (1000-1999)
/// Insertion into a container that already holds its compile-time capacity
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Source slice holds more elements than the target capacity
pub const SLICE_TOO_LONG: u16 = 1001;

// Bounds error codes (2000-2999)
/// Checked index access outside `[0, len)`
pub const INDEX_OUT_OF_BOUNDS: u16 = 2000;
/// Position handle that no longer refers to a live entry
pub const INVALID_POSITION: u16 = 2001;

// Lookup error codes (3000-3999)
/// Must-exist lookup of a key that is not stored
pub const KEY_NOT_FOUND: u16 = 3000;
