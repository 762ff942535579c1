//! Dispatch table mapping workout codes to record constructors.
//!
//! The table is built once, on first use, and never mutated.

use crate::workout::{Running, SportsWalking, Swimming, Workout};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A dispatchable workout variant
pub struct WorkoutKind {
    /// Three-letter code, e.g. `RUN`
    pub code: &'static str,
    /// Display name of the record it builds
    pub name: &'static str,
    /// Field names in the order readings are bound to them
    pub fields: &'static [&'static str],
    build: fn(&[f64]) -> Result<Workout>,
}

impl WorkoutKind {
    /// Number of readings this variant expects
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

const RUNNING_FIELDS: &[&str] = &["action_count", "duration_hours", "weight_kg"];
const WALKING_FIELDS: &[&str] = &["action_count", "duration_hours", "weight_kg", "height_cm"];
const SWIMMING_FIELDS: &[&str] = &[
    "action_count",
    "duration_hours",
    "weight_kg",
    "pool_lengths",
    "pool_length_m",
];

static WORKOUT_KINDS: Lazy<HashMap<&'static str, WorkoutKind>> = Lazy::new(|| {
    [
        WorkoutKind {
            code: "RUN",
            name: "Running",
            fields: RUNNING_FIELDS,
            build: build_running,
        },
        WorkoutKind {
            code: "WLK",
            name: "SportsWalking",
            fields: WALKING_FIELDS,
            build: build_walking,
        },
        WorkoutKind {
            code: "SWM",
            name: "Swimming",
            fields: SWIMMING_FIELDS,
            build: build_swimming,
        },
    ]
    .into_iter()
    .map(|kind| (kind.code, kind))
    .collect()
});

/// Look up a workout variant by its code
pub fn lookup(code: &str) -> Option<&'static WorkoutKind> {
    WORKOUT_KINDS.get(code)
}

/// All known workout codes, sorted
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = WORKOUT_KINDS.keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// All known workout variants, sorted by code
pub fn workout_kinds() -> Vec<&'static WorkoutKind> {
    let mut kinds: Vec<_> = WORKOUT_KINDS.values().collect();
    kinds.sort_by_key(|k| k.code);
    kinds
}

/// Build a workout record from raw sensor readings
///
/// Readings are bound positionally to the variant's fields. The count
/// is validated before anything is constructed.
pub fn read_package(code: &str, readings: &[f64]) -> Result<Workout> {
    let kind = lookup(code).ok_or_else(|| Error::UnknownWorkoutType {
        code: code.to_string(),
        known: known_codes().into_iter().map(String::from).collect(),
    })?;

    if readings.len() != kind.field_count() {
        return Err(Error::FieldCountMismatch {
            workout: kind.name,
            expected: kind.field_count(),
            actual: readings.len(),
        });
    }

    let workout = (kind.build)(readings)?;
    tracing::debug!("Read {} package: {:?}", kind.code, workout);
    Ok(workout)
}

fn build_running(r: &[f64]) -> Result<Workout> {
    let (action_count, duration_hours, weight_kg) = common_fields("Running", r)?;
    Ok(Running::new(action_count, duration_hours, weight_kg).into())
}

fn build_walking(r: &[f64]) -> Result<Workout> {
    let (action_count, duration_hours, weight_kg) = common_fields("SportsWalking", r)?;
    let height_cm = positive("SportsWalking", "height_cm", r[3])?;
    Ok(SportsWalking::new(action_count, duration_hours, weight_kg, height_cm).into())
}

fn build_swimming(r: &[f64]) -> Result<Workout> {
    let (action_count, duration_hours, weight_kg) = common_fields("Swimming", r)?;
    let pool_lengths = whole_number("Swimming", "pool_lengths", r[3])?;
    let pool_length_m = positive("Swimming", "pool_length_m", r[4])?;
    Ok(Swimming::new(action_count, duration_hours, weight_kg, pool_lengths, pool_length_m).into())
}

/// Bind the leading (action_count, duration_hours, weight_kg) readings
fn common_fields(workout: &'static str, r: &[f64]) -> Result<(u32, f64, f64)> {
    let action_count = whole_number(workout, "action_count", r[0])?;
    let duration_hours = positive(workout, "duration_hours", r[1])?;
    let weight_kg = positive(workout, "weight_kg", r[2])?;
    Ok((action_count, duration_hours, weight_kg))
}

/// Measurements must be finite and strictly positive
fn positive(workout: &'static str, field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidReading {
            workout,
            field,
            value,
        })
    }
}

fn whole_number(workout: &'static str, field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(Error::InvalidReading {
            workout,
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::Trainable;

    #[test]
    fn test_table_field_counts() {
        assert_eq!(lookup("RUN").unwrap().field_count(), 3);
        assert_eq!(lookup("WLK").unwrap().field_count(), 4);
        assert_eq!(lookup("SWM").unwrap().field_count(), 5);
        assert_eq!(known_codes(), vec!["RUN", "SWM", "WLK"]);
    }

    #[test]
    fn test_table_names_match_records() {
        for kind in workout_kinds() {
            let readings = vec![1.0; kind.field_count()];
            let workout = read_package(kind.code, &readings).unwrap();
            assert_eq!(workout.workout_type(), kind.name);
        }
    }

    #[test]
    fn test_read_swimming_package() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25, 40.0))
        );
    }

    #[test]
    fn test_read_walking_package() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            workout,
            Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
        );
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        match err {
            Error::UnknownWorkoutType { code, known } => {
                assert_eq!(code, "XYZ");
                assert_eq!(known, vec!["RUN", "SWM", "WLK"]);
            }
            other => panic!("expected UnknownWorkoutType, got {other:?}"),
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(matches!(
            read_package("run", &[1.0, 1.0, 1.0]),
            Err(Error::UnknownWorkoutType { .. })
        ));
    }

    /// The count check must run before binding: a short RUN package
    /// would otherwise index past the end of the readings.
    #[test]
    fn test_field_count_checked_before_construction() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        match err {
            Error::FieldCountMismatch {
                workout,
                expected,
                actual,
            } => {
                assert_eq!(workout, "Running");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected FieldCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_readings() {
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]),
            Err(Error::FieldCountMismatch {
                expected: 5,
                actual: 6,
                ..
            })
        ));
        assert!(matches!(
            read_package("WLK", &[]),
            Err(Error::FieldCountMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn test_negative_or_fractional_counts_rejected() {
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(Error::InvalidReading {
                field: "action_count",
                ..
            })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 2.5, 40.0]),
            Err(Error::InvalidReading {
                field: "pool_lengths",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        for duration in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                read_package("RUN", &[1000.0, duration, 75.0]),
                Err(Error::InvalidReading {
                    field: "duration_hours",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_non_finite_or_non_positive_measurements_rejected() {
        let cases: [(&str, Vec<f64>, &str); 6] = [
            ("RUN", vec![15000.0, 1.0, f64::NAN], "weight_kg"),
            ("RUN", vec![15000.0, 1.0, 0.0], "weight_kg"),
            ("WLK", vec![9000.0, 1.0, 75.0, 0.0], "height_cm"),
            ("WLK", vec![9000.0, 1.0, 75.0, f64::INFINITY], "height_cm"),
            ("SWM", vec![720.0, 1.0, 80.0, 25.0, f64::INFINITY], "pool_length_m"),
            ("SWM", vec![720.0, 1.0, 80.0, 25.0, -40.0], "pool_length_m"),
        ];
        for (code, readings, expected_field) in cases {
            match read_package(code, &readings) {
                Err(Error::InvalidReading { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("{} {:?}: expected InvalidReading, got {:?}", code, readings, other),
            }
        }
    }

    #[test]
    fn test_parsed_nan_never_reaches_report() {
        for input in ["WLK:9000,1,75,0", "RUN:15000,1,NaN", "SWM:720,1,80,25,inf"] {
            let pkg: crate::SensorPackage = input.parse().unwrap();
            assert!(
                matches!(pkg.read(), Err(Error::InvalidReading { .. })),
                "{} should be rejected",
                input
            );
        }
    }
}
