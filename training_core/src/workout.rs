//! Workout variants and their formula set.
//!
//! Every variant shares one computation shape:
//! distance (km) → mean speed (km/h) → calories (kcal).
//! Variants override the distance unit and the calorie formula;
//! swimming also derives its mean speed from pool geometry.

use crate::report::InfoMessage;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;
/// km/h → m/s, rounded to three decimals (1000 / 3600 ≈ 0.278)
pub const KMH_TO_MS: f64 = 0.278;
/// Distance covered per step
pub const STEP_LEN_M: f64 = 0.65;
/// Distance covered per swimming stroke
pub const STROKE_LEN_M: f64 = 1.38;

/// Common capability set of every workout record.
///
/// # Preconditions
///
/// `duration_hours()` must be strictly positive. Mean speed divides by
/// the duration and the formulas do not guard against zero; a zero
/// duration yields infinite or NaN metrics. Records built through
/// [`crate::dispatch::read_package`] have already been checked.
pub trait Trainable {
    /// Display name used in reports
    fn workout_type(&self) -> &'static str;

    fn action_count(&self) -> u32;

    fn duration_hours(&self) -> f64;

    fn weight_kg(&self) -> f64;

    /// Kilocalories burned over the whole workout
    fn get_calories(&self) -> f64;

    /// Distance covered by one action (step or stroke), in meters
    fn distance_unit_m(&self) -> f64 {
        STEP_LEN_M
    }

    fn get_distance_km(&self) -> f64 {
        self.action_count() as f64 * self.distance_unit_m() / M_IN_KM
    }

    fn get_mean_speed_kmh(&self) -> f64 {
        self.get_distance_km() / self.duration_hours()
    }

    /// Build a fresh report for this workout
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.workout_type().to_string(),
            duration: self.duration_hours(),
            distance: self.get_distance_km(),
            speed: self.get_mean_speed_kmh(),
            calories: self.get_calories(),
        }
    }
}

// ============================================================================
// Running
// ============================================================================

/// Running: calories scale with speed
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

impl Trainable for Running {
    fn workout_type(&self) -> &'static str {
        "Running"
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn get_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.get_mean_speed_kmh() + Self::SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}

// ============================================================================
// Sports walking
// ============================================================================

/// Brisk walking: calories depend on speed and the walker's height
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Trainable for SportsWalking {
    fn workout_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn get_calories(&self) -> f64 {
        let speed_ms = self.get_mean_speed_kmh() * KMH_TO_MS;
        (Self::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_ms.powi(2) / (self.height_cm / CM_IN_M)
                * Self::SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Swimming: speed comes from pool geometry, not stroke count
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    /// Number of pool lengths swum
    pub pool_lengths: u32,
    pub pool_length_m: f64,
}

impl Swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_lengths: u32,
        pool_length_m: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_lengths,
            pool_length_m,
        }
    }
}

impl Trainable for Swimming {
    fn workout_type(&self) -> &'static str {
        "Swimming"
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn distance_unit_m(&self) -> f64 {
        STROKE_LEN_M
    }

    fn get_mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lengths as f64 / M_IN_KM / self.duration_hours
    }

    fn get_calories(&self) -> f64 {
        (self.get_mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}

// ============================================================================
// Tagged union
// ============================================================================

/// Any workout record produced by the dispatcher
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Trainable {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Trainable for Workout {
    fn workout_type(&self) -> &'static str {
        self.inner().workout_type()
    }

    fn action_count(&self) -> u32 {
        self.inner().action_count()
    }

    fn duration_hours(&self) -> f64 {
        self.inner().duration_hours()
    }

    fn weight_kg(&self) -> f64 {
        self.inner().weight_kg()
    }

    fn get_calories(&self) -> f64 {
        self.inner().get_calories()
    }

    fn distance_unit_m(&self) -> f64 {
        self.inner().distance_unit_m()
    }

    fn get_distance_km(&self) -> f64 {
        self.inner().get_distance_km()
    }

    fn get_mean_speed_kmh(&self) -> f64 {
        self.inner().get_mean_speed_kmh()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
