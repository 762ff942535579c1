//! Human-readable workout reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only summary of a finished workout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the report as a single line, every metric to three decimals
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
