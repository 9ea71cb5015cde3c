//! Property-based tests for `StayDates` and `Occupancy`.

use super::{Occupancy, StayDates};
use chrono::NaiveDate;
use proptest::prelude::*;

// Strategy for generating valid stay intervals within a two-year window.
fn stay_strategy() -> impl Strategy<Value = StayDates> {
    (0i64..700, 1i64..30).prop_map(|(start_offset, nights)| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let check_in = base + chrono::Duration::days(start_offset);
        let check_out = check_in + chrono::Duration::days(nights);
        StayDates::new(check_in, check_out).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        .. ProptestConfig::default()
    })]

    // Overlap is symmetric
    #[test]
    fn overlap_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // Every interval overlaps itself
    #[test]
    fn overlap_reflexive(a in stay_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // Back-to-back turnover never conflicts under the half-open rule
    #[test]
    fn back_to_back_never_overlaps(a in stay_strategy(), nights in 1i64..30) {
        let next = StayDates::new(a.check_out(), a.check_out() + chrono::Duration::days(nights))
            .unwrap();
        prop_assert!(!a.overlaps(&next));
        prop_assert!(!next.overlaps(&a));
    }

    // Overlap agrees with a brute-force count of shared nights
    #[test]
    fn overlap_matches_shared_nights(a in stay_strategy(), b in stay_strategy()) {
        let shared = (0..a.nights())
            .map(|offset| a.check_in() + chrono::Duration::days(offset))
            .filter(|night| *night >= b.check_in() && *night < b.check_out())
            .count();
        prop_assert_eq!(a.overlaps(&b), shared > 0);
    }

    // Total guests is always the sum of its components, even at the
    // extremes of the count range
    #[test]
    fn total_is_sum(adults in 1u32.., children in 0u32..) {
        let occupancy = Occupancy::new(adults, children).unwrap();
        prop_assert_eq!(
            occupancy.total(),
            u64::from(adults) + u64::from(children)
        );
    }
}
