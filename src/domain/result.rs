//! Result type alias for Shiplabel

use super::errors::ShiplabelError;

/// Result type alias for Shiplabel operations
///
/// # Examples
///
/// ```
/// use shiplabel::domain::result::Result;
/// use shiplabel::domain::errors::ShiplabelError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ShiplabelError::Schema("missing invoiceNumber".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ShiplabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ShiplabelError::Schema("test error".to_string()));
        assert!(result.is_err());
    }
}
