// ESTL - estl-foundation
// Module: Build Configuration
//
// Copyright (c) 2025 The ESTL Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Build-time configuration.
//!
//! Capacity and comparator are chosen per container through generic
//! parameters. The only build-wide choice is the contract policy, selected
//! with the `abort-on-violation` cargo feature and adjustable at runtime
//! through [`crate::contract::set_policy`].

use crate::contract::ViolationPolicy;

/// Library major version
pub const VERSION_MAJOR: u32 = 0;
/// Library minor version
pub const VERSION_MINOR: u32 = 1;
/// Library patch version
pub const VERSION_PATCH: u32 = 0;

/// Map capacity used when `StaticMap` is named without one
pub const DEFAULT_MAP_CAPACITY: usize = 16;

/// Contract policy in effect until the application calls `set_policy`
pub const DEFAULT_POLICY: ViolationPolicy = if cfg!(feature = "abort-on-violation") {
    ViolationPolicy::Abort
} else {
    ViolationPolicy::Report
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        let manifest = env!("CARGO_PKG_VERSION");
        let expected = format!("{VERSION_MAJOR}.{VERSION_MINOR}.{VERSION_PATCH}");
        assert_eq!(manifest, expected);
    }

    #[test]
    fn test_default_policy_follows_feature() {
        #[cfg(feature = "abort-on-violation")]
        assert_eq!(DEFAULT_POLICY, ViolationPolicy::Abort);
        #[cfg(not(feature = "abort-on-violation"))]
        assert_eq!(DEFAULT_POLICY, ViolationPolicy::Report);
    }
}
