#![forbid(unsafe_code)]

//! Core domain model for the fittrack workout calculator.
//!
//! This crate provides:
//! - Workout variants and their distance/speed/calorie formulas
//! - Report formatting
//! - Code-based dispatch from raw sensor readings
//! - Batch processing, configuration and logging

pub mod workout;
pub mod report;
pub mod error;
pub mod dispatch;
pub mod package;
pub mod batch;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use workout::{Running, SportsWalking, Swimming, Trainable, Workout};
pub use report::InfoMessage;
pub use dispatch::{known_codes, read_package};
pub use package::{sample_packages, SensorPackage};
pub use batch::{run_batch, BatchOutcome, ErrorPolicy};
pub use config::Config;
