use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Ratios expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Multiples (e.g., 14.9x P/E)
pub type Multiple = Decimal;

/// Bounded scores and percentages on a 0-100 scale.
pub type Score = Decimal;

/// Clamp `value` into `[min, max]`.
///
/// Every derived score and percentage in the engine goes through this
/// helper so range handling lives in one place.
pub fn clamp(min: Decimal, max: Decimal, value: Decimal) -> Decimal {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp to the standard 0-100 score range.
pub fn clamp_score(value: Decimal) -> Score {
    clamp(Decimal::ZERO, Decimal::ONE_HUNDRED, value)
}

/// Sum currency amounts, saturating at the Decimal range.
pub fn sum_money<I: IntoIterator<Item = Money>>(amounts: I) -> Money {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

/// Colour tag attached to grades and tiers for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Emerald,
    Green,
    Teal,
    Blue,
    Yellow,
    Orange,
    Red,
    Gray,
    Purple,
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Emerald => "emerald",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
            Self::Purple => "purple",
        };
        write!(f, "{}", s)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(dec!(0), dec!(100), dec!(-3)), dec!(0));
        assert_eq!(clamp(dec!(0), dec!(100), dec!(140)), dec!(100));
        assert_eq!(clamp(dec!(0), dec!(0.95), dec!(0.5)), dec!(0.5));
    }

    #[test]
    fn test_clamp_score_passthrough() {
        assert_eq!(clamp_score(dec!(57.25)), dec!(57.25));
    }

    #[test]
    fn test_sum_money_saturates() {
        assert_eq!(sum_money([dec!(1.5), dec!(2.5)]), dec!(4));
        assert_eq!(sum_money([Decimal::MAX, dec!(1)]), Decimal::MAX);
        assert_eq!(sum_money(std::iter::empty()), Decimal::ZERO);
    }

    #[test]
    fn test_metadata_envelope() {
        let out = with_metadata("Test", &serde_json::json!({}), vec![], 12, 7u32);
        assert_eq!(out.result, 7);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert_eq!(out.metadata.computation_time_us, 12);
    }
}
