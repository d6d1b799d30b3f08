//! Tuning configuration and optimizer parameters.
//!
//! Policy
//! - All tuning constants live in one immutable `SolverCfg` value, built once
//!   (defaults or a JSON file) and passed by value into the kernel and optimizers.
//! - Parameters are validated when a request is accepted (`validate`), not inside
//!   the search loops. The loops themselves tolerate degenerate values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration or optimizer parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("invalid parameters: {reason}")]
    Invalid { reason: String },
}

impl ParamsError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

fn check_probability(name: &str, p: f64) -> Result<(), ParamsError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ParamsError::invalid(format!("{name} must be in [0, 1], got {p}")));
    }
    Ok(())
}

fn check_positive(name: &str, v: f64) -> Result<(), ParamsError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ParamsError::invalid(format!(
            "{name} must be finite and > 0, got {v}"
        )));
    }
    Ok(())
}

/// Shared tuning constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverCfg {
    /// Probability that a child inherits a gene from the father rather than the mother.
    pub crossover_bias: f64,
    /// Every interior angle of an accepted obstacle must be strictly below this (radians).
    pub max_angle: f64,
    /// Field generation sub-box half-extent is `coordinate / area_size_reducer`.
    pub area_size_reducer: f64,
    /// Annealing angle step half-width (radians).
    pub neighbor_angle: f64,
    /// Annealing launch-y step half-width is `y_max / neighbor_coord`.
    pub neighbor_coord: f64,
    /// Sampling attempts before field generation gives up.
    pub max_placement_attempts: u64,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            crossover_bias: 0.5,
            max_angle: 160f64.to_radians(),
            area_size_reducer: 5.0,
            neighbor_angle: 0.1,
            neighbor_coord: 20.0,
            max_placement_attempts: 100_000,
        }
    }
}

impl SolverCfg {
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_probability("crossover_bias", self.crossover_bias)?;
        check_positive("max_angle", self.max_angle)?;
        check_positive("area_size_reducer", self.area_size_reducer)?;
        if !self.neighbor_angle.is_finite() || self.neighbor_angle < 0.0 {
            return Err(ParamsError::invalid("neighbor_angle must be finite and >= 0"));
        }
        check_positive("neighbor_coord", self.neighbor_coord)?;
        if self.max_placement_attempts == 0 {
            return Err(ParamsError::invalid("max_placement_attempts must be >= 1"));
        }
        Ok(())
    }
}

/// Genetic optimizer parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticParams {
    pub population_size: usize,
    pub iterations_count: usize,
    pub mutation_rate: f64,
}

impl Default for GeneticParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            iterations_count: 100,
            mutation_rate: 0.05,
        }
    }
}

impl GeneticParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.population_size == 0 {
            return Err(ParamsError::invalid("population_size must be >= 1"));
        }
        check_probability("mutation_rate", self.mutation_rate)
    }
}

/// Simulated-annealing parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingParams {
    pub initial_temperature: f64,
    pub stopping_temperature: f64,
    pub cooling_factor: f64,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            stopping_temperature: 0.01,
            cooling_factor: 0.95,
        }
    }
}

impl AnnealingParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_positive("initial_temperature", self.initial_temperature)?;
        check_positive("stopping_temperature", self.stopping_temperature)?;
        if self.initial_temperature <= self.stopping_temperature {
            return Err(ParamsError::invalid(
                "initial_temperature must exceed stopping_temperature",
            ));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ParamsError::invalid(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        Ok(())
    }
}
