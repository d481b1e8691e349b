pub mod countries;
pub mod exchange_rates;
pub mod health;
pub mod price_index;
pub mod products;

use crate::errors::AppError;

/// Parse the required `year` query parameter. Absence and malformed values
/// are distinct client errors, rejected before any data access.
pub(crate) fn parse_year(raw: Option<&str>) -> Result<i32, AppError> {
    let raw = raw.ok_or(AppError::MissingParameter("year"))?;
    raw.parse().map_err(|_| {
        AppError::MalformedInput(format!("Year must be a valid number, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(Some("2025")).unwrap(), 2025);
        assert!(matches!(
            parse_year(None),
            Err(AppError::MissingParameter("year"))
        ));
        assert!(matches!(
            parse_year(Some("20x5")),
            Err(AppError::MalformedInput(_))
        ));
    }
}
