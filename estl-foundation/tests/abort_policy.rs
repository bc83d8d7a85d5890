// Integration test for the abort contract policy
// Every test here installs `ViolationPolicy::Abort`; the policy is
// process-wide, so these live in their own test binary.

use estl_foundation::contract::{self, ViolationPolicy};
use estl_foundation::{StaticMap, StaticVec};

/// Installs the abort policy. Tests run on parallel threads, so nothing
/// here ever switches back to reporting.
fn abort_on_violation() {
    contract::set_policy(ViolationPolicy::Abort);
}

#[test]
#[should_panic(expected = "StaticVec capacity exceeded")]
fn test_push_past_capacity_aborts() {
    abort_on_violation();
    let mut vec = StaticVec::<u8, 1>::new();
    let _ = vec.push(1);
    let _ = vec.push(2);
}

#[test]
#[should_panic(expected = "StaticVec index out of bounds")]
fn test_checked_access_aborts() {
    abort_on_violation();
    let vec = StaticVec::<u8, 4>::new();
    let _ = vec.at(0);
}

#[test]
#[should_panic(expected = "StaticMap key not found")]
fn test_missing_key_aborts() {
    abort_on_violation();
    let map = StaticMap::<u8, u8, 4>::new();
    let _ = map.at(&7);
}

#[test]
#[should_panic(expected = "StaticMap capacity exceeded")]
fn test_full_map_aborts() {
    abort_on_violation();
    let mut map = StaticMap::<u8, u8, 1>::new();
    let _ = map.insert(1, 1);
    let _ = map.insert(2, 2);
}

#[test]
fn test_successful_operations_do_not_abort() {
    abort_on_violation();
    assert_eq!(contract::policy(), ViolationPolicy::Abort);

    let mut map = StaticMap::<u8, u8, 1>::new();
    assert!(map.insert(1, 1).is_ok());
    // Duplicate keys are not a violation, even when full.
    assert!(matches!(map.insert(1, 2), Ok((_, false))));
    // Bulk assignment truncates instead of failing.
    let mut vec = StaticVec::<u8, 2>::new();
    assert_eq!(vec.assign_slice(&[1, 2, 3]), 2);
}
