//! Secondary ratios derived from the raw vendor fields.
//!
//! Only market cap and EBITDA are available, so the "margin" used across the
//! engine is EBITDA relative to market capitalisation. The same ratio,
//! restricted to positive inputs, is reported as the EBITDA yield.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;
use crate::vendor::VendorRecord;

pub const BILLION: Decimal = dec!(1_000_000_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub market_cap_bn: Decimal,
    pub ebitda_bn: Decimal,
    /// EBITDA / market cap. Zero when market cap is zero or the quotient
    /// overflows; negative when EBITDA is negative.
    pub ebitda_margin: Rate,
    /// EBITDA / market cap, defined only when both are positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebitda_yield: Option<Rate>,
}

/// Express a currency amount in billions.
pub fn to_billions(amount: Decimal) -> Decimal {
    amount / BILLION
}

/// EBITDA / market cap, or zero when market cap is not positive or the
/// ratio does not fit in a Decimal.
pub fn ebitda_margin(vendor: &VendorRecord) -> Rate {
    if vendor.market_cap <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    vendor.ebitda.checked_div(vendor.market_cap).unwrap_or(Decimal::ZERO)
}

/// EBITDA yield when both EBITDA and market cap are positive and the
/// ratio is representable.
pub fn ebitda_yield(vendor: &VendorRecord) -> Option<Rate> {
    if vendor.market_cap > Decimal::ZERO && vendor.ebitda > Decimal::ZERO {
        vendor.ebitda.checked_div(vendor.market_cap)
    } else {
        None
    }
}

pub fn derive_metrics(vendor: &VendorRecord) -> DerivedMetrics {
    DerivedMetrics {
        market_cap_bn: to_billions(vendor.market_cap),
        ebitda_bn: to_billions(vendor.ebitda),
        ebitda_margin: ebitda_margin(vendor),
        ebitda_yield: ebitda_yield(vendor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(market_cap: Decimal, ebitda: Decimal) -> VendorRecord {
        VendorRecord {
            symbol: "TST".into(),
            name: "Test Corp".into(),
            market_cap,
            pe_ratio: dec!(20),
            ebitda,
        }
    }

    #[test]
    fn test_billions() {
        let m = derive_metrics(&vendor(dec!(35_600_000_000), dec!(4_100_000_000)));
        assert_eq!(m.market_cap_bn, dec!(35.6));
        assert_eq!(m.ebitda_bn, dec!(4.1));
    }

    #[test]
    fn test_margin_and_yield_positive() {
        let m = derive_metrics(&vendor(dec!(10_000_000_000), dec!(1_500_000_000)));
        assert_eq!(m.ebitda_margin, dec!(0.15));
        assert_eq!(m.ebitda_yield, Some(dec!(0.15)));
    }

    #[test]
    fn test_negative_ebitda_has_no_yield() {
        let m = derive_metrics(&vendor(dec!(10_000_000_000), dec!(-500_000_000)));
        assert_eq!(m.ebitda_margin, dec!(-0.05));
        assert_eq!(m.ebitda_yield, None);
    }

    #[test]
    fn test_overflowing_ratio_falls_back() {
        let m = derive_metrics(&vendor(dec!(0.0000000000000000001), dec!(100_000_000_000_000)));
        assert_eq!(m.ebitda_margin, Decimal::ZERO);
        assert_eq!(m.ebitda_yield, None);
    }

    #[test]
    fn test_zero_market_cap() {
        let m = derive_metrics(&vendor(Decimal::ZERO, dec!(1_000)));
        assert_eq!(m.ebitda_margin, Decimal::ZERO);
        assert_eq!(m.ebitda_yield, None);
    }
}
