/// Binary operators of the expression vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Whether pairing this operator with a parenthesis-opening token can
    /// change the value: "a + (b" reaches the same completions as "a + b",
    /// so only multiplication is worth following with a parenthesis.
    pub const fn pairs_with_open_paren(self) -> bool {
        matches!(self, Op::Mul)
    }
}

/// Operators the search actually generates. Division stays in the vocabulary
/// but is disabled here.
pub const OPERATIONS: [Op; 3] = [Op::Add, Op::Sub, Op::Mul];

/// The fixed set of extension tokens used to grow any partial expression:
/// every available number as a bare literal, then prefixed with 1..=N opening
/// parens, then suffixed with 1..=N closing parens. Built once and reused at
/// every depth; the order is fixed because frontier order decides ties.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    tokens: Vec<String>,
}

impl TokenCatalog {
    pub fn new(numbers: &[i64], followed_parenthesis: usize) -> Self {
        let mut tokens: Vec<String> = numbers.iter().map(ToString::to_string).collect();

        for wrap in 1..=followed_parenthesis {
            tokens.extend(
                numbers
                    .iter()
                    .map(|num| format!("{}{}", "(".repeat(wrap), num)),
            );
            tokens.extend(
                numbers
                    .iter()
                    .map(|num| format!("{}{}", num, ")".repeat(wrap))),
            );
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
