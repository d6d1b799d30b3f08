//! Scan-path optimization over a field of convex quadrilateral obstacles.
//!
//! A candidate path leg is a straight segment launched from the left edge of
//! the field (`x = 0`) and running to the right edge (`x = x_max`). Its fitness
//! is the number of obstacles it crosses. Two metaheuristics search the
//! (angle, launch point) space: a generational genetic algorithm and a
//! simulated-annealing trajectory. The composer chains two genetic runs into a
//! two-leg "V" path.
//!
//! Layout
//! - `geom2`: orientation predicate, segment intersection, convex-quadrilateral tests.
//! - `field`: field bounds + obstacles, random field generation, field validation.
//! - `search`: candidate encoding, genetic/annealing optimizers, path composer.
//! - `cfg`, `rng`: explicit tuning configuration and the injectable random source.
//! - `api`: the `solve` entry point used by the CLI.

pub mod api;
pub mod cfg;
pub mod field;
pub mod geom2;
pub mod rng;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{solve, Algorithm, Outcome, Params, SolveError};
    pub use crate::cfg::{AnnealingParams, GeneticParams, ParamsError, SolverCfg};
    pub use crate::field::{generate_field, validate_field, Field, FieldError};
    pub use crate::geom2::{Coord, Obstacle, Segment};
    pub use crate::rng::RandomSource;
    pub use crate::search::{Chromosome, Leg, Solution};
}
