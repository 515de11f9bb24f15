//! Property tests for the status classifier
//!
//! Covers the rules that must hold over the whole accepted input space:
//! - Overcrowding always yields Critical
//! - Exact capacity with normal health yields Warning
//! - Fixed-level output is one of three discrete levels
//! - Occupancy-scaled output stays in 400-1200 ppm and is monotone
//! - Classification is deterministic

mod common;

use airguard_core::{
    Classifier, FixedLevelClassifier, HealthReading, HealthSeverity, LevelPolicy,
    OccupancyScaledClassifier, Status,
};
use proptest::prelude::*;

use common::{any_health, normal_health};

const POLICIES: [LevelPolicy; 2] = [LevelPolicy::FixedLevel, LevelPolicy::OccupancyScaled];

/// Readings ordered by severity: normal, elevated, critical
fn escalating(reading: HealthReading) -> [HealthReading; 3] {
    [
        HealthReading { respiration_rate: 16, heart_rate: 75, spo2: 98 },
        HealthReading { respiration_rate: 20, ..reading },
        HealthReading { respiration_rate: 30, ..reading },
    ]
}

proptest! {
    #[test]
    fn prop_overcrowding_is_critical(
        health in any_health(),
        max_people in 1u32..=100,
        excess in 1u32..=50,
    ) {
        let people = max_people + excess;
        for policy in POLICIES {
            prop_assert_eq!(policy.classify(&health, people, max_people).status, Status::Critical);
        }
    }

    #[test]
    fn prop_at_capacity_is_never_normal(health in any_health(), max_people in 1u32..=100) {
        for policy in POLICIES {
            let status = policy.classify(&health, max_people, max_people).status;
            prop_assert!(status >= Status::Warning);
        }
    }

    #[test]
    fn prop_fixed_level_at_capacity_with_normal_health_is_warning(
        health in normal_health(),
        max_people in 1u32..=100,
    ) {
        let assessment = FixedLevelClassifier.classify(&health, max_people, max_people);
        prop_assert_eq!(assessment.status, Status::Warning);
        prop_assert_eq!(assessment.co2_ppm, 700);
    }

    #[test]
    fn prop_fixed_levels_are_discrete(
        health in any_health(),
        people in 1u32..=60,
        max_people in 1u32..=100,
    ) {
        let assessment = FixedLevelClassifier.classify(&health, people, max_people);
        prop_assert!([400, 700, 1000].contains(&assessment.co2_ppm));

        let expected = match assessment.status {
            Status::Normal => 400,
            Status::Warning => 700,
            Status::Critical => 1000,
        };
        prop_assert_eq!(assessment.co2_ppm, expected);
    }

    #[test]
    fn prop_scaled_level_in_range(
        health in any_health(),
        people in 1u32..=1_000,
        max_people in 1u32..=100,
    ) {
        let level = OccupancyScaledClassifier.classify(&health, people, max_people).co2_ppm;
        prop_assert!((400..=1200).contains(&level));
    }

    #[test]
    fn prop_scaled_level_monotone_in_people(
        health in any_health(),
        people in 1u32..=20,
        max_people in 1u32..=100,
    ) {
        let fewer = OccupancyScaledClassifier.classify(&health, people, max_people);
        let more = OccupancyScaledClassifier.classify(&health, people + 1, max_people);
        prop_assert!(more.co2_ppm >= fewer.co2_ppm);
        prop_assert!(more.status >= fewer.status);
    }

    #[test]
    fn prop_scaled_level_monotone_in_severity(
        health in any_health(),
        people in 1u32..=20,
        max_people in 1u32..=100,
    ) {
        let readings = escalating(health);
        let levels: Vec<u32> = readings
            .iter()
            .map(|reading| OccupancyScaledClassifier.classify(reading, people, max_people).co2_ppm)
            .collect();

        prop_assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_health_critical_is_critical(
        health in any_health(),
        people in 1u32..=20,
        max_people in 1u32..=100,
    ) {
        prop_assume!(health.severity() == HealthSeverity::Critical);
        for policy in POLICIES {
            prop_assert_eq!(policy.classify(&health, people, max_people).status, Status::Critical);
        }
    }

    #[test]
    fn prop_classification_is_deterministic(
        health in any_health(),
        people in 1u32..=60,
        max_people in 1u32..=100,
    ) {
        for policy in POLICIES {
            prop_assert_eq!(
                policy.classify(&health, people, max_people),
                policy.classify(&health, people, max_people)
            );
        }
    }
}

#[test]
fn respiration_boundary_at_25_and_26() {
    let calm = HealthReading::new(25, 75, 98).unwrap();
    let rapid = HealthReading::new(26, 75, 98).unwrap();

    // 25 is only elevated; 26 trips the critical clause
    assert_eq!(FixedLevelClassifier.classify(&calm, 1, 25).status, Status::Warning);
    assert_eq!(FixedLevelClassifier.classify(&rapid, 1, 25).status, Status::Critical);

    assert_eq!(OccupancyScaledClassifier.classify(&calm, 1, 25).co2_ppm, 800);
    assert_eq!(OccupancyScaledClassifier.classify(&rapid, 1, 25).co2_ppm, 1100);
}
