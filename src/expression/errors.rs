use thiserror::Error;

/// Classification of expressions that do not evaluate to a value.
///
/// None of these is a fault: the search generates incomplete expressions by
/// design and treats every variant the same way, as "no value yet".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Expression is incomplete")]
    Incomplete,
    #[error("Expression is malformed")]
    Malformed,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Unexpected character: '{0}'")]
    UnexpectedCharacter(char),
}
