use std::time::Duration;

/// Wall-clock budget for a whole search.
pub const MAX_TIME: Duration = Duration::from_secs(45);

/// How many opening/closing parentheses an extension token may carry.
pub const FOLLOWED_PARENTHESIS: usize = 1;

/// Cap on opening parentheses across a whole candidate; deeper nesting
/// rarely pays for its exponential blowup.
pub const MAX_PARENTHESIS: usize = 2;

/// Maximum number of operands in an expression.
pub const MAX_DEPTH: usize = 5;

/// Depth from which candidates outside the numeric brackets are dropped.
pub const PRUNE_DEPTH: usize = 4;
