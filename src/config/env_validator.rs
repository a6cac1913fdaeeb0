//! Input value validation with helpful error messages
//!
//! Provides consistent validation for typed inputs with:
//! - Clear error messages naming the input and the rejected value
//! - Levenshtein-based typo suggestions

use crate::error::RemoteDeployError;

/// Validator for one named input
pub struct InputValidator<'a> {
    input_name: &'a str,
    expected: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> InputValidator<'a> {
    /// Create a new validator for the given input
    ///
    /// `valid_values` only feeds suggestions; parsing is up to the caller.
    pub fn new(input_name: &'a str, expected: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            input_name,
            expected,
            valid_values,
        }
    }

    /// Parse a value, or explain why it was rejected
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, RemoteDeployError>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| RemoteDeployError::InvalidInput {
            name: self.input_name.to_string(),
            value: value.to_string(),
            expected: self.expected.to_string(),
            suggestion: self.suggest(value),
        })
    }

    /// Suggest a valid value based on Levenshtein distance
    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        let mut best: Option<(&str, usize)> = None;

        for &valid in self.valid_values {
            let dist = levenshtein(&input, valid);
            match best {
                None => best = Some((valid, dist)),
                Some((_, best_dist)) if dist < best_dist => best = Some((valid, dist)),
                _ => {}
            }
        }

        // Only suggest if distance is reasonable (≤ 2 edits)
        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let a_len = a_bytes.len();
    let b_len = b_bytes.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_identical() {
        assert_eq!(levenshtein("true", "true"), 0);
    }

    #[test]
    fn test_levenshtein_typos() {
        assert_eq!(levenshtein("ture", "true"), 2);
        assert_eq!(levenshtein("flase", "false"), 2);
        assert_eq!(levenshtein("tru", "true"), 1);
    }

    #[test]
    fn test_validator_valid_value() {
        let validator = InputValidator::new("wait", "a boolean", &["true", "false"]);
        let result = validator.parse("true", |s| (s == "true").then_some(true));
        assert!(result.unwrap());
    }

    #[test]
    fn test_validator_suggests_close_value() {
        let validator = InputValidator::new("wait", "a boolean", &["true", "false"]);
        let err = validator
            .parse("flase", |_| None::<bool>)
            .unwrap_err()
            .to_string();
        assert!(err.contains("'wait'"), "{}", err);
        assert!(err.contains("Did you mean 'false'?"), "{}", err);
    }

    #[test]
    fn test_validator_no_suggestion_for_distant_value() {
        let validator = InputValidator::new("wait", "a boolean", &["true", "false"]);
        let err = validator
            .parse("something_else", |_| None::<bool>)
            .unwrap_err()
            .to_string();
        assert!(!err.contains("Did you mean"), "{}", err);
    }
}
