use std::path::PathBuf;

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `data-sample.json`, `products.json` and
    /// `exchange-rates/`.
    pub data_dir: PathBuf,
    pub port: u16,
    /// Product used when a request names none.
    pub default_product_id: String,
    /// Currencies displayed in whole units (no decimal places).
    pub zero_decimal_currencies: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            default_product_id: std::env::var("DEFAULT_PRODUCT_ID")
                .unwrap_or_else(|_| "big-mac".to_string()),
            zero_decimal_currencies: parse_currency_list(
                &std::env::var("ZERO_DECIMAL_CURRENCIES")
                    .unwrap_or_else(|_| "JPY,KRW,VND".to_string()),
            ),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.default_product_id.is_empty() {
            return Err("DEFAULT_PRODUCT_ID must not be empty".to_string());
        }
        // The yen is always quoted in whole units.
        if !self.zero_decimal_currencies.iter().any(|c| c == "JPY") {
            return Err("ZERO_DECIMAL_CURRENCIES must include JPY".to_string());
        }
        Ok(())
    }
}

fn parse_currency_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_list_is_normalized() {
        assert_eq!(
            parse_currency_list(" jpy, KRW ,,vnd"),
            vec!["JPY".to_string(), "KRW".to_string(), "VND".to_string()]
        );
    }

    #[test]
    fn test_validate_requires_jpy_in_zero_decimal_set() {
        let config = AppConfig {
            data_dir: "data".into(),
            port: 3000,
            default_product_id: "big-mac".into(),
            zero_decimal_currencies: vec!["KRW".into()],
        };
        assert!(config.validate().is_err());
    }
}
