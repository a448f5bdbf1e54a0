//! Exact 0/1 knapsack decision engine.
//!
//! The engine is a pure function of a capacity and an ordered item list:
//! [`validate`] turns raw input into a [`ProblemInstance`], [`solve`] picks the
//! optimal subset by dynamic programming and [`report`] packages it as a
//! [`ResultSet`] whose positions map back to the caller's numbering.

mod config;
pub use config::*;
mod error;
pub use error::*;
mod instance;
pub use instance::*;
mod report;
pub use report::*;
mod solver;
pub use solver::*;
mod validator;
pub use validator::*;
mod verify;
pub use verify::*;

/// Validates the raw input, solves it and reports the selection.
///
/// Validation failures are returned before any table is sized, and resource
/// failures before any table is allocated.
pub fn validate_and_solve(
    capacity: i64,
    items: &[RawItem],
    config: &SolverConfig,
) -> Result<ResultSet, EngineError> {
    let instance = validate(capacity, items)?;
    let solution = solve(&instance, config)?;
    Ok(report(&instance, &solution))
}
