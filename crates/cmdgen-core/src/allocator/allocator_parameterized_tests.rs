#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Base offset shift loop
// ============================================================================

#[test_case(1, 0, 0x1000 ; "app one empty file")]
#[test_case(1, 5, 0x1000 ; "app one five messages")]
#[test_case(1, 0x1000, 0x1000 ; "count equal to base")]
#[test_case(1, 0x1001, 0x10000 ; "count one past base")]
#[test_case(1, 5000, 0x10000 ; "app one five thousand messages")]
#[test_case(1, 70000, 0x100000 ; "two shifts")]
#[test_case(2, 5, 0x2000 ; "app two")]
#[test_case(0x12, 3, 0x12000 ; "two digit app id")]
#[test_case(0, 0, 0 ; "app zero empty file")]
#[test_case(0, 1, 1 ; "app zero single message")]
#[test_case(0, 5, 0x10 ; "app zero five messages")]
fn base_offset___app_id_and_count___resolves_base(app_id: u32, count: usize, expected: u64) {
    assert_eq!(base_offset(app_id, count), expected);
}

#[test_case(0, 17)]
#[test_case(1, 100)]
#[test_case(3, 0x3000)]
#[test_case(7, 1_000_000)]
fn base_offset___any_input___is_at_least_message_count(app_id: u32, count: usize) {
    assert!(base_offset(app_id, count) >= count as u64);
}
