use log::debug;

use crate::utils::extract_numbers;

/// Best-so-far candidate and its absolute distance to the objective.
///
/// The stored pair is only ever replaced by a strictly smaller distance, so
/// the first candidate to reach a given distance wins ties. Before comparing,
/// `update` tries a one-token correction: when the gap to the objective
/// equals an available number that the expression has not used up, appending
/// that number closes the gap exactly.
#[derive(Debug, Clone)]
pub struct BestTracker {
    available_numbers: Vec<i64>,
    objective: i64,
    expression: String,
    distance: i64,
}

impl BestTracker {
    pub fn new(available_numbers: Vec<i64>, objective: i64) -> Self {
        Self {
            available_numbers,
            objective,
            expression: String::new(),
            distance: objective,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }

    /// Offers a fully evaluated candidate.
    pub fn update(&mut self, expr: &str, value: i64) {
        let diff = value - self.objective;
        let mut distance = diff.abs();
        let mut expression = expr.to_string();

        if distance > 0 && self.has_spare(expr, distance) {
            let sign = if diff < 0 { '+' } else { '-' };
            expression = format!("{expr} {sign} {distance}");
            distance = 0;
        }

        if distance < self.distance {
            debug!("New best at distance {}: {}", distance, expression);
            self.expression = expression;
            self.distance = distance;
        }
    }

    /// True when `gap` is an available number with more occurrences in the
    /// pool than already spent inside `expr`.
    fn has_spare(&self, expr: &str, gap: i64) -> bool {
        let available = self
            .available_numbers
            .iter()
            .filter(|&&num| num == gap)
            .count();
        if available == 0 {
            return false;
        }

        let used = extract_numbers(expr)
            .iter()
            .filter(|&&num| num == gap)
            .count();
        used < available
    }
}
