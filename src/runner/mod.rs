//! Step execution orchestration.

pub mod installer;

pub use installer::{Installer, PlannedStep, RunOptions, RunOutcome, StepOutcome};
