use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::expression::evaluate;
use crate::solver::best::BestTracker;
use crate::solver::bounds::Bounds;
use crate::solver::catalog::{OPERATIONS, TokenCatalog};
use crate::solver::constants::{
    FOLLOWED_PARENTHESIS, MAX_DEPTH, MAX_PARENTHESIS, MAX_TIME, PRUNE_DEPTH,
};
use crate::solver::prune::Pruner;
use crate::utils::{extract_numbers, is_balanced_prefix, is_sub_multiset};

/// Tunable search limits; see [`constants`](crate::solver::constants) for
/// the defaults.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub max_time: Duration,
    pub followed_parenthesis: usize,
    pub max_parenthesis: usize,
    pub max_depth: usize,
    pub prune_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_time: MAX_TIME,
            followed_parenthesis: FOLLOWED_PARENTHESIS,
            max_parenthesis: MAX_PARENTHESIS,
            max_depth: MAX_DEPTH,
            prune_depth: PRUNE_DEPTH,
        }
    }
}

/// Exhaustive level-by-level search for the expression whose value is as
/// close as possible to the objective.
///
/// Candidates are strings; each depth step appends one operator and one
/// extension token to every surviving candidate. The search is synchronous
/// and deterministic: frontier order is insertion order, and the wall clock
/// is polled after every candidate.
pub struct Solver {
    available_numbers: Vec<i64>,
    objective: i64,
    config: SolverConfig,
    catalog: TokenCatalog,
    pruner: Pruner,
    best: BestTracker,
}

impl Solver {
    pub fn new(available_numbers: Vec<i64>, objective: i64) -> Self {
        Self::with_config(available_numbers, objective, SolverConfig::default())
    }

    pub fn with_config(available_numbers: Vec<i64>, objective: i64, config: SolverConfig) -> Self {
        let bounds = Bounds::compute(&available_numbers, objective);
        let catalog = TokenCatalog::new(&available_numbers, config.followed_parenthesis);
        let pruner = Pruner::new(bounds, config.max_parenthesis, config.prune_depth);
        let best = BestTracker::new(available_numbers.clone(), objective);

        Self {
            available_numbers,
            objective,
            config,
            catalog,
            pruner,
            best,
        }
    }

    pub fn objective(&self) -> i64 {
        self.objective
    }

    pub fn best_expression(&self) -> &str {
        self.best.expression()
    }

    pub fn best_distance(&self) -> i64 {
        self.best.distance()
    }

    /// Runs the search to completion and returns the terminal report. Always
    /// returns: exhaustion of the time budget is a designed termination path,
    /// not an error.
    pub fn solve(&mut self) -> String {
        let start = Instant::now();

        let mut frontier: Vec<String> = self
            .available_numbers
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut seen: HashSet<i64> = HashSet::new();
        let mut depth = 1;

        loop {
            info!(
                "Depth {}: {} candidates, {:.2} s elapsed",
                depth,
                frontier.len(),
                start.elapsed().as_secs_f64()
            );

            seen.clear();
            let mut next_frontier: Vec<String> = Vec::new();

            for candidate in &frontier {
                match evaluate(candidate) {
                    Ok(value) => {
                        if depth < self.config.max_depth {
                            // expand only the first candidate seen with each
                            // value this depth; later equal-valued siblings
                            // reach the same completions
                            if value > 0 && value < self.pruner.bounds().upper && seen.insert(value)
                            {
                                self.best.update(candidate, value);
                                self.expand_into(candidate, depth, &mut next_frontier);
                            }
                        } else {
                            self.best.update(candidate, value);
                        }
                    }
                    // no value to dedup on yet, always expand
                    Err(_) => {
                        if depth < self.config.max_depth {
                            self.expand_into(candidate, depth, &mut next_frontier);
                        }
                    }
                }

                if self.best.is_exact() || start.elapsed() > self.config.max_time {
                    return self.report(start.elapsed());
                }
            }

            if depth == self.config.max_depth {
                self.last_try(start);
                return self.report(start.elapsed());
            }

            frontier = next_frontier;
            depth += 1;
        }
    }

    /// Checks that a candidate consumes no number beyond its availability and
    /// never closes more parentheses than it has opened.
    pub fn is_valid(&self, expr: &str) -> bool {
        is_sub_multiset(&extract_numbers(expr), &self.available_numbers)
            && is_balanced_prefix(expr)
    }

    /// Appends every surviving child of `expr` to `out`: one operator plus
    /// one catalog token, skipping the redundant pairing of `+`/`-` with a
    /// parenthesis-opening token, then filtered through validity and pruning.
    pub(crate) fn expand_into(&self, expr: &str, depth: usize, out: &mut Vec<String>) {
        for token in self.catalog.tokens() {
            for op in OPERATIONS {
                if !op.pairs_with_open_paren() && token.starts_with('(') {
                    continue;
                }

                let child = format!("{expr} {} {token}", op.symbol());
                if !self.is_valid(&child) {
                    continue;
                }
                if self
                    .pruner
                    .should_prune(&child, evaluate(&child).ok(), depth)
                {
                    continue;
                }
                out.push(child);
            }
        }
    }

    /// One extra expansion of the best-known expression once the maximum
    /// depth is reached, giving it a final chance to be corrected or extended
    /// before the budget closes.
    fn last_try(&mut self, start: Instant) {
        let best_expr = self.best.expression().to_string();
        if best_expr.is_empty() {
            return;
        }

        debug!("Last try on: {}", best_expr);
        let mut extended = Vec::new();
        self.expand_into(&best_expr, self.config.max_depth, &mut extended);

        for candidate in extended {
            if let Ok(value) = evaluate(&candidate) {
                self.best.update(&candidate, value);
            }
            if self.best.is_exact() || start.elapsed() > self.config.max_time {
                return;
            }
        }
    }

    fn report(&self, elapsed: Duration) -> String {
        let seconds = elapsed.as_secs_f64();
        match evaluate(self.best.expression()) {
            Ok(value) => format!(
                "{} = {}. Time elapsed: {:.2} s.",
                self.best.expression(),
                value,
                seconds
            ),
            // nothing ever beat the initial distance, there is no expression
            // to print
            Err(_) => format!("No solution found. Time elapsed: {:.2} s.", seconds),
        }
    }
}
