// ESTL - estl-foundation
// Module: Tracing Support
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for the containers
//!
//! This module wraps the `tracing` crate. It works without `std`: the events
//! are dispatched to whatever subscriber the embedding application installs,
//! and cost a single branch when none is installed.

#![cfg(feature = "tracing")]

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, trace_span, Level, Span};

/// Spans for structural container mutations
#[derive(Debug, Clone)]
pub struct CollectionTrace;

impl CollectionTrace {
    /// Create a span around an element shift (insert or erase)
    #[inline]
    pub fn shifting(container: &'static str, index: usize, len: usize) -> Span {
        trace_span!("collection_shift", container = %container, index = %index, len = %len)
    }

    /// Create a span around a bulk assignment
    #[inline]
    pub fn assigning(container: &'static str, capacity: usize) -> Span {
        debug_span!("collection_assign", container = %container, capacity = %capacity)
    }
}
