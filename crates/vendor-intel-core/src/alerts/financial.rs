//! Financial health alerts.
//!
//! Seven independent rules, each inspecting one vendor record. Any subset
//! may fire. Output is ordered by severity (highest first); ties keep the
//! order in which the rules are declared in [`ALERT_RULES`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::metrics::derivation::{ebitda_yield, to_billions};
use crate::vendor::VendorRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Critical,
    Warning,
    Opportunity,
    Info,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Warning => write!(f, "warning"),
            Self::Opportunity => write!(f, "opportunity"),
            Self::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Profitability,
    Valuation,
    MarketPosition,
    CashGeneration,
    DataQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTimeframe {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAlert {
    /// `"{SYMBOL}-{rule}"`, unique per vendor and rule.
    pub id: String,
    pub kind: AlertKind,
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    /// 1 (informational) to 10 (urgent).
    pub severity: u8,
    pub actionable: bool,
    pub timeframe: AlertTimeframe,
}

/// Static description of one alert rule.
#[derive(Debug, Clone, Copy)]
pub struct AlertRule {
    pub slug: &'static str,
    pub kind: AlertKind,
    pub category: AlertCategory,
    pub title: &'static str,
    pub severity: u8,
    pub actionable: bool,
    pub timeframe: AlertTimeframe,
    pub triggered: fn(&VendorRecord) -> bool,
    pub message: fn(&VendorRecord) -> String,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HIGH_PE: Decimal = dec!(50);
const VALUE_PE: Decimal = dec!(15);
const VALUE_MIN_EBITDA: Decimal = dec!(1_000_000_000);
const SMALL_CAP: Decimal = dec!(5_000_000_000);
const LEADER_CAP: Decimal = dec!(50_000_000_000);
const LEADER_MIN_EBITDA: Decimal = dec!(5_000_000_000);
const STRONG_YIELD: Decimal = dec!(0.12);

/// Declaration order is the tie-break order for equal severities.
pub const ALERT_RULES: &[AlertRule] = &[
    AlertRule {
        slug: "negative-ebitda",
        kind: AlertKind::Critical,
        category: AlertCategory::Profitability,
        title: "Negative EBITDA",
        severity: 9,
        actionable: true,
        timeframe: AlertTimeframe::Immediate,
        triggered: |v| v.ebitda < Decimal::ZERO,
        message: |v| {
            format!(
                "{} reports negative EBITDA of ${}B; operating losses raise counterparty risk on multi-year contracts",
                v.symbol,
                to_billions(v.ebitda).round_dp(2)
            )
        },
    },
    AlertRule {
        slug: "high-valuation",
        kind: AlertKind::Warning,
        category: AlertCategory::Valuation,
        title: "High Valuation Risk",
        severity: 7,
        actionable: true,
        timeframe: AlertTimeframe::ShortTerm,
        triggered: |v| v.pe_ratio > HIGH_PE,
        message: |v| {
            format!(
                "{} trades at {}x earnings; a valuation reset could tighten discretionary budgets",
                v.symbol,
                v.pe_ratio.round_dp(1)
            )
        },
    },
    AlertRule {
        slug: "value-opportunity",
        kind: AlertKind::Opportunity,
        category: AlertCategory::Valuation,
        title: "Value Opportunity",
        severity: 5,
        actionable: true,
        timeframe: AlertTimeframe::MediumTerm,
        triggered: |v| {
            v.pe_ratio > Decimal::ZERO && v.pe_ratio < VALUE_PE && v.ebitda > VALUE_MIN_EBITDA
        },
        message: |v| {
            format!(
                "{} combines a {}x P/E with ${}B EBITDA; profitable and conservatively valued",
                v.symbol,
                v.pe_ratio.round_dp(1),
                to_billions(v.ebitda).round_dp(2)
            )
        },
    },
    AlertRule {
        slug: "small-cap",
        kind: AlertKind::Warning,
        category: AlertCategory::MarketPosition,
        title: "Small Cap Vendor Risk",
        severity: 6,
        actionable: true,
        timeframe: AlertTimeframe::MediumTerm,
        triggered: |v| v.market_cap < SMALL_CAP,
        message: |v| {
            format!(
                "{} has a market cap of ${}B, below the $5B threshold; review supply continuity and concentration",
                v.symbol,
                to_billions(v.market_cap).round_dp(2)
            )
        },
    },
    AlertRule {
        slug: "market-leader",
        kind: AlertKind::Info,
        category: AlertCategory::MarketPosition,
        title: "Market Leader Stability",
        severity: 3,
        actionable: false,
        timeframe: AlertTimeframe::LongTerm,
        triggered: |v| v.market_cap > LEADER_CAP && v.ebitda > LEADER_MIN_EBITDA,
        message: |v| {
            format!(
                "{} is a large, cash-generative market leader (${}B cap, ${}B EBITDA)",
                v.symbol,
                to_billions(v.market_cap).round_dp(1),
                to_billions(v.ebitda).round_dp(1)
            )
        },
    },
    AlertRule {
        slug: "strong-ebitda-yield",
        kind: AlertKind::Opportunity,
        category: AlertCategory::CashGeneration,
        title: "Strong Cash Generation",
        severity: 4,
        actionable: true,
        timeframe: AlertTimeframe::MediumTerm,
        triggered: |v| ebitda_yield(v).map_or(false, |y| y > STRONG_YIELD),
        message: |v| {
            let pct = ebitda_yield(v).unwrap_or_default().saturating_mul(dec!(100));
            format!(
                "{} generates an EBITDA yield of {}% on its market cap; capacity to fund new programs",
                v.symbol,
                pct.round_dp(1)
            )
        },
    },
    AlertRule {
        slug: "no-earnings-data",
        kind: AlertKind::Warning,
        category: AlertCategory::DataQuality,
        title: "No Earnings Data Available",
        severity: 6,
        actionable: false,
        timeframe: AlertTimeframe::ShortTerm,
        triggered: |v| v.pe_ratio.is_zero(),
        message: |v| {
            format!(
                "{} has no meaningful P/E ratio; earnings may be negative or unreported",
                v.symbol
            )
        },
    },
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate every alert rule against a vendor.
pub fn generate_financial_alerts(vendor: &VendorRecord) -> Vec<FinancialAlert> {
    let mut alerts: Vec<FinancialAlert> = ALERT_RULES
        .iter()
        .filter(|rule| (rule.triggered)(vendor))
        .map(|rule| build_alert(rule, vendor))
        .collect();
    // sort_by is stable: ties keep rule declaration order.
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    alerts
}

/// Alerts for a collection of vendors, flattened and ordered by severity.
pub fn generate_portfolio_alerts(vendors: &[VendorRecord]) -> Vec<FinancialAlert> {
    let mut alerts: Vec<FinancialAlert> =
        vendors.iter().flat_map(generate_financial_alerts).collect();
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    alerts
}

fn build_alert(rule: &AlertRule, vendor: &VendorRecord) -> FinancialAlert {
    FinancialAlert {
        id: format!("{}-{}", vendor.symbol, rule.slug),
        kind: rule.kind,
        category: rule.category,
        title: rule.title.to_string(),
        message: (rule.message)(vendor),
        severity: rule.severity,
        actionable: rule.actionable,
        timeframe: rule.timeframe,
    }
}
