//! Raw sensor packages: a workout code plus its ordered readings.

use crate::{dispatch, Error, Result, Workout};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One package as received from the sensors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub readings: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }

    /// Dispatch this package into a workout record
    pub fn read(&self) -> Result<Workout> {
        dispatch::read_package(&self.code, &self.readings)
    }
}

/// Parses the `CODE:v1,v2,...` form
impl FromStr for SensorPackage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPackage {
            input: s.to_string(),
            reason,
        };

        let (code, values) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected CODE:v1,v2,...".into()))?;

        let code = code.trim();
        if code.is_empty() {
            return Err(invalid("missing workout code".into()));
        }

        let readings = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<f64>()
                    .map_err(|e| invalid(format!("'{}' is not a number: {}", v, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(code, readings))
    }
}

impl fmt::Display for SensorPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readings: Vec<String> = self.readings.iter().map(|r| r.to_string()).collect();
        write!(f, "{}:{}", self.code, readings.join(","))
    }
}

/// Built-in sample data, one package per workout type
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_package() {
        let pkg: SensorPackage = "SWM:720,1,80,25,40".parse().unwrap();
        assert_eq!(pkg, sample_packages()[0]);

        let pkg: SensorPackage = " WLK : 9000, 1.5 ,75,180 ".parse().unwrap();
        assert_eq!(pkg.code, "WLK");
        assert_eq!(pkg.readings, vec![9000.0, 1.5, 75.0, 180.0]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["RUN", ":1,2,3", "RUN:1,abc,3"] {
            assert!(
                matches!(
                    input.parse::<SensorPackage>(),
                    Err(Error::InvalidPackage { .. })
                ),
                "{} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_parse_empty_readings() {
        let pkg: SensorPackage = "RUN:".parse().unwrap();
        assert!(pkg.readings.is_empty());
        assert!(matches!(
            pkg.read(),
            Err(Error::FieldCountMismatch { actual: 0, .. })
        ));
    }

    #[test]
    fn test_display_matches_parse_form() {
        let pkg = SensorPackage::new("RUN", vec![15000.0, 1.5, 75.0]);
        assert_eq!(pkg.to_string(), "RUN:15000,1.5,75");
    }

    #[test]
    fn test_samples_cover_every_code() {
        let mut codes: Vec<_> = sample_packages().into_iter().map(|p| p.code).collect();
        codes.sort();
        assert_eq!(codes, dispatch::known_codes());
        for pkg in sample_packages() {
            assert!(pkg.read().is_ok());
        }
    }
}
