use serde::{Deserialize, Serialize};

/// Turns a raw amount into the string shown next to it on screen.
///
/// In the browser this is backed by `Intl.NumberFormat`; anything that can
/// format a number (including a plain closure) can stand in for it.
pub trait CurrencyFormatter {
    fn format(&self, amount: f64) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, amount: f64) -> String {
        self(amount)
    }
}

/// Locale and ISO currency code handed to the host formatter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurrencyConfig {
    pub locale: String,
    pub currency: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            locale: "en-IN".to_string(),
            currency: "INR".to_string(),
        }
    }
}

/// Rupee formatting with Indian digit grouping (1,23,456.78).
///
/// Matches what `Intl.NumberFormat("en-IN", { style: "currency", currency: "INR" })`
/// produces, so labels stay stable when the host formatter is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndianRupeeFormatter;

impl IndianRupeeFormatter {
    pub const SYMBOL: &'static str = "₹";

    fn group_indian(digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }

        let (head, last_three) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        format!("{},{}", groups.join(","), last_three)
    }
}

impl CurrencyFormatter for IndianRupeeFormatter {
    fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", Self::SYMBOL);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}∞", sign, Self::SYMBOL);
        }

        let fixed = format!("{:.2}", amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        // -0.001 rounds to 0.00 and should not carry a sign
        let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

        format!(
            "{}{}{}.{}",
            sign,
            Self::SYMBOL,
            Self::group_indian(whole),
            fraction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_grouping() {
        let formatter = IndianRupeeFormatter;
        assert_eq!(formatter.format(10.0), "₹10.00");
        assert_eq!(formatter.format(0.0), "₹0.00");
        assert_eq!(formatter.format(999.999), "₹1,000.00");
    }

    #[test]
    fn test_indian_digit_grouping() {
        let formatter = IndianRupeeFormatter;
        assert_eq!(formatter.format(1234.5), "₹1,234.50");
        assert_eq!(formatter.format(123456.78), "₹1,23,456.78");
        assert_eq!(formatter.format(12345678.0), "₹1,23,45,678.00");
    }

    #[test]
    fn test_negative_amounts() {
        let formatter = IndianRupeeFormatter;
        assert_eq!(formatter.format(-10.0), "-₹10.00");
        assert_eq!(formatter.format(-150000.0), "-₹1,50,000.00");
        assert_eq!(formatter.format(-0.001), "₹0.00");
    }

    #[test]
    fn test_non_finite_amounts() {
        let formatter = IndianRupeeFormatter;
        assert_eq!(formatter.format(f64::NAN), "₹NaN");
        assert_eq!(formatter.format(f64::INFINITY), "₹∞");
        assert_eq!(formatter.format(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn test_closure_acts_as_formatter() {
        let dollars = |amount: f64| format!("${:.2}", amount);
        assert_eq!(CurrencyFormatter::format(&dollars, 25.0), "$25.00");
    }

    #[test]
    fn test_currency_config_defaults_missing_fields() {
        let config: CurrencyConfig = serde_json::from_str(r#"{ "currency": "USD" }"#).unwrap();
        assert_eq!(config.locale, "en-IN");
        assert_eq!(config.currency, "USD");
    }
}
