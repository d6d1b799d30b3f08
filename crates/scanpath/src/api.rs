//! Request-level entry point.
//!
//! `solve` validates configuration, parameters and the field, then dispatches:
//! the genetic algorithm yields a two-leg `Solution`, simulated annealing a
//! single `Leg`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::cfg::{AnnealingParams, GeneticParams, ParamsError, SolverCfg};
use crate::field::{validate_field, Field, FieldError};
use crate::rng::RandomSource;
use crate::search::{AnnealingOptimizer, Leg, PathComposer, Solution};

/// Search algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Genetic,
    SimulatedAnnealing,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genetic => write!(f, "genetic"),
            Self::SimulatedAnnealing => write!(f, "simulated_annealing"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "genetic" => Ok(Self::Genetic),
            "simulated_annealing" | "annealing" => Ok(Self::SimulatedAnnealing),
            other => Err(ParamsError::Invalid {
                reason: format!("unknown algorithm `{other}`"),
            }),
        }
    }
}

/// Per-algorithm parameters; the selected algorithm reads its own block.
/// Missing blocks or fields fall back to defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub genetic: GeneticParams,
    pub annealing: AnnealingParams,
}

/// Result of one request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Leg(Leg),
    Solution(Solution),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Validate and run one request.
pub fn solve<R: RandomSource + ?Sized>(
    algorithm: Algorithm,
    field: &Field,
    params: &Params,
    cfg: &SolverCfg,
    rng: &mut R,
) -> Result<Outcome, SolveError> {
    cfg.validate()?;
    let field = Field::new(field.x_max, field.y_max, validate_field(field)?);
    info!(%algorithm, obstacles = field.obstacles.len(), "solve");
    match algorithm {
        Algorithm::Genetic => {
            params.genetic.validate()?;
            let solution = PathComposer::new(&field, params.genetic, *cfg)
                .two_leg(rng)
                .ok_or_else(|| ParamsError::Invalid {
                    reason: "empty population".into(),
                })?;
            Ok(Outcome::Solution(solution))
        }
        Algorithm::SimulatedAnnealing => {
            params.annealing.validate()?;
            let leg = AnnealingOptimizer::new(&field, params.annealing, *cfg).run(rng);
            Ok(Outcome::Leg(leg))
        }
    }
}
