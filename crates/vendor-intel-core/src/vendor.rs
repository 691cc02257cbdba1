//! Vendor records and upstream overview sanitizing.
//!
//! A [`VendorRecord`] is the only input the engine consumes. The market-data
//! provider returns string-typed overview payloads where missing values show
//! up as `"None"`, `"N/A"`, `"-"` or an empty string; [`RawOverview`] accepts
//! that shape and [`sanitize_overview`] turns it into a clean record.

use rust_decimal::prelude::*;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::VendorIntelError;
use crate::types::{Money, Multiple};
use crate::VendorIntelResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Financial snapshot of one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Ticker symbol. Unique, non-empty.
    pub symbol: String,
    pub name: String,
    /// Market capitalisation in currency units.
    pub market_cap: Money,
    /// Price / earnings. Zero means "not available or not meaningful".
    pub pe_ratio: Multiple,
    /// EBITDA in currency units. May be negative.
    pub ebitda: Money,
}

impl VendorRecord {
    /// Build a validated record.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        market_cap: Money,
        pe_ratio: Multiple,
        ebitda: Money,
    ) -> VendorIntelResult<Self> {
        let record = Self {
            symbol: symbol.into().trim().to_uppercase(),
            name: name.into().trim().to_string(),
            market_cap,
            pe_ratio,
            ebitda,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the structural preconditions of a record.
    pub fn validate(&self) -> VendorIntelResult<()> {
        if self.symbol.trim().is_empty() {
            return Err(VendorIntelError::InvalidInput {
                field: "symbol".into(),
                reason: "Symbol must not be empty".into(),
            });
        }
        if self.market_cap < Decimal::ZERO {
            return Err(VendorIntelError::InvalidInput {
                field: "market_cap".into(),
                reason: format!("Market cap must be non-negative (got {})", self.market_cap),
            });
        }
        if self.pe_ratio < Decimal::ZERO {
            return Err(VendorIntelError::InvalidInput {
                field: "pe_ratio".into(),
                reason: format!(
                    "P/E must be non-negative; use 0 for unavailable (got {})",
                    self.pe_ratio
                ),
            });
        }
        Ok(())
    }

    /// True when the P/E sentinel marks earnings as unavailable.
    pub fn has_earnings_data(&self) -> bool {
        self.pe_ratio > Decimal::ZERO
    }
}

/// Overview payload as returned by the market-data provider.
///
/// Every field is optional and loosely typed; numbers may arrive as JSON
/// numbers or as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOverview {
    #[serde(rename = "Symbol", default)]
    pub symbol: Option<serde_json::Value>,
    #[serde(rename = "Name", default)]
    pub name: Option<serde_json::Value>,
    #[serde(rename = "MarketCapitalization", default)]
    pub market_cap: Option<serde_json::Value>,
    #[serde(rename = "PERatio", default)]
    pub pe_ratio: Option<serde_json::Value>,
    #[serde(rename = "EBITDA", default)]
    pub ebitda: Option<serde_json::Value>,
}

/// Result of sanitizing one overview payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedOverview {
    pub record: VendorRecord,
    /// Fields that were missing or unparseable and fell back to defaults.
    pub defaulted_fields: Vec<String>,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PLACEHOLDERS: &[&str] = &["None", "", "N/A", "-"];
const UNKNOWN_TEXT: &str = "Unknown";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Clean an upstream overview payload into a [`VendorRecord`].
///
/// Symbols are trimmed and upper-cased. Placeholder text (symbol included)
/// becomes `"Unknown"`, placeholder or unparseable numbers
/// become zero, and market cap / EBITDA are truncated to whole currency
/// units. A negative P/E is reported by the provider for loss-making
/// companies and is folded into the zero sentinel.
pub fn sanitize_overview(raw: &RawOverview) -> VendorIntelResult<SanitizedOverview> {
    let mut defaulted_fields = Vec::new();

    let symbol = clean_text(raw.symbol.as_ref(), "symbol", &mut defaulted_fields);
    let name = clean_text(raw.name.as_ref(), "name", &mut defaulted_fields);
    let market_cap =
        clean_number(raw.market_cap.as_ref(), "market_cap", &mut defaulted_fields).trunc();
    let mut pe_ratio = clean_number(raw.pe_ratio.as_ref(), "pe_ratio", &mut defaulted_fields);
    let ebitda = clean_number(raw.ebitda.as_ref(), "ebitda", &mut defaulted_fields).trunc();

    if pe_ratio < Decimal::ZERO {
        tracing::debug!(%symbol, %pe_ratio, "negative P/E folded into the unavailable sentinel");
        pe_ratio = Decimal::ZERO;
        defaulted_fields.push("pe_ratio".to_string());
    }

    let mut record = VendorRecord::new(symbol, name, market_cap, pe_ratio, ebitda)?;
    // Tickers are upper-cased; the placeholder keeps its spelling.
    if defaulted_fields.iter().any(|f| f == "symbol") {
        record.symbol = UNKNOWN_TEXT.to_string();
    }
    Ok(SanitizedOverview {
        record,
        defaulted_fields,
    })
}

/// Parse and sanitize an overview payload from a JSON string.
pub fn sanitize_overview_json(json: &str) -> VendorIntelResult<SanitizedOverview> {
    let raw: RawOverview = serde_json::from_str(json)?;
    sanitize_overview(&raw)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_placeholder(s: &str) -> bool {
    PLACEHOLDERS.contains(&s.trim())
}

fn clean_text(
    value: Option<&serde_json::Value>,
    field: &str,
    defaulted: &mut Vec<String>,
) -> String {
    let text = match value {
        Some(serde_json::Value::String(s)) if !is_placeholder(s) => Some(s.trim().to_string()),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    text.unwrap_or_else(|| {
        defaulted.push(field.to_string());
        UNKNOWN_TEXT.to_string()
    })
}

fn clean_number(
    value: Option<&serde_json::Value>,
    field: &str,
    defaulted: &mut Vec<String>,
) -> Decimal {
    let parsed = match value {
        Some(serde_json::Value::String(s)) if !is_placeholder(s) => parse_decimal(s.trim()),
        Some(serde_json::Value::Number(n)) => parse_decimal(&n.to_string()),
        _ => None,
    };
    match parsed {
        Some(d) => d,
        None => {
            if let Some(v) = value {
                if !matches!(v, serde_json::Value::String(s) if is_placeholder(s)) {
                    tracing::warn!(field, value = %v, "could not convert overview field to a number");
                }
            }
            defaulted.push(field.to_string());
            Decimal::ZERO
        }
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_new_normalises_symbol() {
        let v = VendorRecord::new(" dd ", "DuPont de Nemours Inc", dec!(1), dec!(2), dec!(3)).unwrap();
        assert_eq!(v.symbol, "DD");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let err = VendorRecord::new("  ", "Nameless", dec!(1), dec!(0), dec!(0)).unwrap_err();
        match err {
            VendorIntelError::InvalidInput { field, .. } => assert_eq!(field, "symbol"),
            other => panic!("Expected InvalidInput for symbol, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_market_cap_rejected() {
        let err = VendorRecord::new("X", "X Corp", dec!(-1), dec!(0), dec!(0)).unwrap_err();
        assert!(matches!(err, VendorIntelError::InvalidInput { ref field, .. } if field == "market_cap"));
    }

    #[test]
    fn test_sanitize_alpha_vantage_strings() {
        let raw: RawOverview = serde_json::from_value(json!({
            "Symbol": "LYB",
            "Name": "LyondellBasell Industries NV",
            "MarketCapitalization": "31200000000",
            "PERatio": "13.45",
            "EBITDA": "5980000000.7"
        }))
        .unwrap();
        let out = sanitize_overview(&raw).unwrap();
        assert_eq!(out.record.market_cap, dec!(31_200_000_000));
        assert_eq!(out.record.pe_ratio, dec!(13.45));
        assert_eq!(out.record.ebitda, dec!(5_980_000_000));
        assert!(out.defaulted_fields.is_empty());
    }

    #[test]
    fn test_sanitize_placeholders() {
        let out = sanitize_overview_json(
            r#"{"Symbol":"ST","Name":"None","MarketCapitalization":"-","PERatio":"N/A","EBITDA":""}"#,
        )
        .unwrap();
        assert_eq!(out.record.name, "Unknown");
        assert_eq!(out.record.market_cap, Decimal::ZERO);
        assert_eq!(out.record.pe_ratio, Decimal::ZERO);
        assert_eq!(out.record.ebitda, Decimal::ZERO);
        assert_eq!(
            out.defaulted_fields,
            vec!["name", "market_cap", "pe_ratio", "ebitda"]
        );
    }

    #[test]
    fn test_sanitize_negative_pe_becomes_sentinel() {
        let out = sanitize_overview_json(
            r#"{"Symbol":"CE","Name":"Celanese","MarketCapitalization":9000000000,"PERatio":-4.2,"EBITDA":-100}"#,
        )
        .unwrap();
        assert_eq!(out.record.pe_ratio, Decimal::ZERO);
        assert_eq!(out.record.ebitda, dec!(-100));
        assert!(!out.record.has_earnings_data());
    }

    #[test]
    fn test_sanitize_garbage_number() {
        let out = sanitize_overview_json(
            r#"{"Symbol":"TEL","Name":"TE Connectivity","MarketCapitalization":"lots","PERatio":"20","EBITDA":"1e9"}"#,
        )
        .unwrap();
        assert_eq!(out.record.market_cap, Decimal::ZERO);
        assert_eq!(out.record.ebitda, dec!(1_000_000_000));
        assert_eq!(out.defaulted_fields, vec!["market_cap"]);
    }

    #[test]
    fn test_missing_symbol_becomes_unknown() {
        let out = sanitize_overview(&RawOverview::default()).unwrap();
        assert_eq!(out.record.symbol, "Unknown");
        assert!(out.defaulted_fields.contains(&"symbol".to_string()));
    }

    #[test]
    fn test_placeholder_symbol_keeps_spelling() {
        let out = sanitize_overview_json(
            r#"{"Symbol":"N/A","Name":"Mystery Corp","MarketCapitalization":"1000","PERatio":"12","EBITDA":"50"}"#,
        )
        .unwrap();
        assert_eq!(out.record.symbol, "Unknown");

        let out = sanitize_overview_json(r#"{"Symbol":" tel ","Name":"TE"}"#).unwrap();
        assert_eq!(out.record.symbol, "TEL");
    }
}
