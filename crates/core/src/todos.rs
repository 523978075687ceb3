//! Validation rules for todo inputs.
//!
//! These run before any database access, so an invalid input never reaches
//! the store (and never partially applies a mutation).

/// Validate a todo title: must be at least one character.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_title() {
        assert_eq!(validate_title(""), Err("Title is required".to_string()));
    }

    #[test]
    fn accepts_non_empty_title() {
        assert_eq!(validate_title("Buy milk"), Ok(()));
        // Length is checked on the raw string; whitespace counts.
        assert_eq!(validate_title(" "), Ok(()));
    }
}
