//! Countdown - a library for the countdown numbers game
//!
//! Given a multiset of positive integers and an objective number, this
//! library searches for an arithmetic expression built from those numbers
//! (each used at most as often as it appears) whose value is as close as
//! possible to the objective, within a fixed wall-clock budget.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{EvalError, evaluate};
pub use solver::{Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_number_list, validate_numbers};

/// Find the expression over `numbers` whose value is closest to `objective`
///
/// This is a convenience function that validates the input, runs a solver
/// with the default configuration, and returns its terminal report.
///
/// # Arguments
///
/// * `numbers` - The available numbers; each may be used at most as many
///   times as it appears
/// * `objective` - The number to get as close to as possible
///
/// # Returns
///
/// * `Ok(String)` - The report: best expression found, its value, and the
///   elapsed time
/// * `Err(SolverError)` - If the input is empty or contains a non-positive
///   number
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * `numbers` contains a zero or negative entry
///
/// # Examples
///
/// ```
/// use countdown::solve_countdown;
///
/// let report = solve_countdown(&[1, 2, 3, 4, 5], 15).expect("valid input");
/// assert!(report.contains("= 15"));
/// ```
pub fn solve_countdown(numbers: &[i64], objective: i64) -> Result<String, SolverError> {
    validate_numbers(numbers)?;

    let mut solver = Solver::new(numbers.to_vec(), objective);
    Ok(solver.solve())
}
