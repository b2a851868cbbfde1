/// Static numeric brackets derived once from the objective and the two
/// largest available numbers. These are pruning heuristics, not correctness
/// bounds: a value outside them can occasionally still be salvaged by the
/// best tracker's leftover-number correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
}

impl Bounds {
    pub fn compute(numbers: &[i64], objective: i64) -> Self {
        let mut sorted = numbers.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        // a missing second-largest counts as 1, so a single-number puzzle
        // still gets a usable upper bracket; clamping the largest keeps the
        // division total even on contract-violating empty input
        let largest = sorted.first().copied().unwrap_or(1).max(1);
        let second = sorted.get(1).copied().unwrap_or(1);

        Self {
            lower: objective / largest,
            upper: objective.saturating_add(largest.saturating_mul(second)),
        }
    }
}
