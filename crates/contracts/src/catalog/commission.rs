use thiserror::Error;

use super::product::CommissionUpdate;

/// Why a commission input string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommissionParseError {
    #[error("commission is empty")]
    Empty,
    #[error("commission is not a number: {0}")]
    NotANumber(String),
    #[error("commission cannot be negative: {0}")]
    Negative(String),
}

/// Parse a commission input field.
///
/// Invalid input is an error, never silently coerced to zero.
pub fn parse_commission(input: &str) -> Result<f64, CommissionParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CommissionParseError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CommissionParseError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(CommissionParseError::NotANumber(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(CommissionParseError::Negative(trimmed.to_string()));
    }
    Ok(value)
}

/// Decide whether a single-row commission edit should issue a PATCH.
///
/// Returns `Ok(None)` when the parsed value equals the previous one,
/// so an unchanged field never produces a request.
pub fn plan_commission_edit(
    previous: f64,
    input: &str,
) -> Result<Option<CommissionUpdate>, CommissionParseError> {
    let commission = parse_commission(input)?;
    if commission == previous {
        return Ok(None);
    }
    Ok(Some(CommissionUpdate { commission }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commission_accepts_numbers() {
        assert_eq!(parse_commission("7"), Ok(7.0));
        assert_eq!(parse_commission("12.5"), Ok(12.5));
        assert_eq!(parse_commission(" 0 "), Ok(0.0));
    }

    #[test]
    fn test_parse_commission_rejects_garbage() {
        assert_eq!(parse_commission(""), Err(CommissionParseError::Empty));
        assert_eq!(parse_commission("   "), Err(CommissionParseError::Empty));
        assert_eq!(
            parse_commission("abc"),
            Err(CommissionParseError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_commission("NaN"),
            Err(CommissionParseError::NotANumber("NaN".to_string()))
        );
    }

    #[test]
    fn test_parse_commission_rejects_negative() {
        assert_eq!(
            parse_commission("-3"),
            Err(CommissionParseError::Negative("-3".to_string()))
        );
    }

    #[test]
    fn test_plan_edit_issues_update_on_change() {
        let plan = plan_commission_edit(5.0, "7").unwrap();
        assert_eq!(plan, Some(CommissionUpdate { commission: 7.0 }));
    }

    #[test]
    fn test_plan_edit_skips_unchanged_value() {
        assert_eq!(plan_commission_edit(5.0, "5").unwrap(), None);
        assert_eq!(plan_commission_edit(5.0, "5.0").unwrap(), None);
    }

    #[test]
    fn test_plan_edit_propagates_parse_errors() {
        assert!(plan_commission_edit(5.0, "x").is_err());
        assert!(plan_commission_edit(5.0, "-1").is_err());
    }
}
