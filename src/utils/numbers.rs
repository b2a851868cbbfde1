use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Extracts every maximal digit run of `expr` as an integer, in order of
/// appearance. A run too long for `i64` saturates, which can never match an
/// available number and therefore fails containment downstream.
pub fn extract_numbers(expr: &str) -> Vec<i64> {
    let mut numbers = Vec::new();
    let mut current: Option<i64> = None;

    for character in expr.chars() {
        match character.to_digit(10) {
            Some(digit) => {
                let acc = current.unwrap_or(0);
                current = Some(
                    acc.saturating_mul(10)
                        .saturating_add(i64::from(digit)),
                );
            }
            None => {
                if let Some(num) = current.take() {
                    numbers.push(num);
                }
            }
        }
    }

    if let Some(num) = current {
        numbers.push(num);
    }

    numbers
}

/// Parses a comma-separated list such as `"3,25,9,8,6,7"`.
///
/// # Errors
///
/// Returns an error if the list is empty, an entry does not parse as an
/// integer, or any parsed number is not positive.
pub fn parse_number_list(input: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing number list: '{}'", input);

    let trimmed = input.trim();
    if trimmed.is_empty() {
        warn!("Number list is empty");
        return Err(UtilsError::EmptyNumberList);
    }

    let mut numbers = Vec::new();
    for entry in trimmed.split(',') {
        let entry = entry.trim();
        let num: i64 = entry
            .parse()
            .map_err(|_| UtilsError::InvalidNumberEntry(entry.to_string()))?;
        numbers.push(num);
    }

    validate_numbers(&numbers)?;
    Ok(numbers)
}

/// # Errors
///
/// Returns an error if `numbers` is empty or contains a non-positive entry.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    if numbers.is_empty() {
        warn!("Number list is empty");
        return Err(UtilsError::EmptyNumberList);
    }

    for &num in numbers {
        if num <= 0 {
            warn!("Rejecting non-positive number: {}", num);
            return Err(UtilsError::NonPositiveNumber(num));
        }
    }

    Ok(())
}
