// ESTL - estl-foundation
// Module: Contract Violation Policy
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Reaction to broken preconditions.
//!
//! Every container operation that can violate its contract (pushing into a
//! full container, checked access outside the live range, must-exist lookup
//! of an absent key) returns [`estl_error::Result`]. Before the error reaches
//! the caller it passes through [`violation`], which applies the process-wide
//! [`ViolationPolicy`]:
//!
//! - [`ViolationPolicy::Report`]: the error is returned and the container is
//!   left untouched. Callers propagate it with `?`.
//! - [`ViolationPolicy::Abort`]: the violation panics. With `panic = "abort"`
//!   this is the fatal stop expected by targets that have no recovery path.
//!
//! The default comes from [`crate::config::DEFAULT_POLICY`]. Call sites that
//! want the fatal behaviour for a single operation can use
//! [`OrAbort::or_abort`] regardless of the global policy.

use core::sync::atomic::{AtomicU8, Ordering};

use estl_error::{Error, Result};

use crate::config::DEFAULT_POLICY;

/// How contract violations are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ViolationPolicy {
    /// Return the error to the caller
    Report = 0,
    /// Panic with the formatted error
    Abort  = 1,
}

impl ViolationPolicy {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Abort,
            _ => Self::Report,
        }
    }
}

// Plain load/store: targets without compare-and-swap still support these.
static POLICY: AtomicU8 = AtomicU8::new(DEFAULT_POLICY as u8);

/// Returns the policy currently in effect.
#[inline]
#[must_use]
pub fn policy() -> ViolationPolicy {
    ViolationPolicy::from_raw(POLICY.load(Ordering::Relaxed))
}

/// Installs `policy` for the whole program and returns the previous one.
///
/// Intended to be called once during start-up. The read of the previous
/// value and the store are separate operations, so concurrent callers may
/// observe each other's intermediate state.
pub fn set_policy(policy: ViolationPolicy) -> ViolationPolicy {
    let previous = self::policy();
    POLICY.store(policy as u8, Ordering::Relaxed);
    previous
}

/// Applies the current policy to `error`.
///
/// Returns `error` unchanged under [`ViolationPolicy::Report`] and never
/// returns under [`ViolationPolicy::Abort`].
#[cold]
#[track_caller]
pub fn violation(error: Error) -> Error {
    trace_event!(
        warn,
        category = ?error.category,
        code = error.code,
        detail = error.message,
        "contract violation"
    );
    if policy() == ViolationPolicy::Abort {
        abort(error);
    }
    error
}

#[cold]
#[track_caller]
fn abort(error: Error) -> ! {
    panic!("{error}")
}

/// Fatal-check conversion for a single call site.
///
/// ```should_panic
/// use estl_foundation::{OrAbort, StaticVec};
///
/// let mut vec = StaticVec::<u8, 1>::new();
/// vec.push(1).or_abort();
/// vec.push(2).or_abort(); // full: panics
/// ```
pub trait OrAbort<T> {
    /// Returns the success value or panics with the error.
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for Result<T> {
    #[inline]
    #[track_caller]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => abort(error),
        }
    }
}
