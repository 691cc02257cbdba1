//! Contract readiness grading.
//!
//! Weighted strength score on a 0-100 scale:
//! 1. **Size** (up to 40) -- stepped on market cap in billions.
//! 2. **Profitability** (up to 40) -- stepped on EBITDA in billions.
//! 3. **Efficiency** (up to 20) -- stepped on EBITDA / market cap.
//! 4. **Valuation adjustment** -- +5 for a low positive P/E, -5 above 50x.
//!
//! The clamped score maps onto seven letter grades from A+ down to C.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::metrics::derivation::derive_metrics;
use crate::types::{clamp_score, DisplayColor, Score};
use crate::vendor::VendorRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Letter grade, ordered from weakest (`C`) to strongest (`APlus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessGrade {
    C,
    #[serde(rename = "B-")]
    BMinus,
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl ReadinessGrade {
    /// Grade expressed back on a 0-100 scale, used by the sales ranker.
    pub fn points(&self) -> Score {
        match self {
            Self::APlus => dec!(95),
            Self::A => dec!(85),
            Self::AMinus => dec!(75),
            Self::BPlus => dec!(65),
            Self::B => dec!(50),
            Self::BMinus => dec!(35),
            Self::C => dec!(20),
        }
    }
}

impl std::fmt::Display for ReadinessGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::C => "C",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessComponents {
    pub size: Score,
    pub profitability: Score,
    pub efficiency: Score,
    pub valuation_adjustment: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReadinessResult {
    pub grade: ReadinessGrade,
    pub label: String,
    pub color: DisplayColor,
    /// Clamped strength score (0-100).
    pub score: Score,
    pub components: ReadinessComponents,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// (market cap in $bn strictly above, points)
const SIZE_STEPS: &[(Decimal, Decimal)] = &[
    (dec!(100), dec!(40)),
    (dec!(50), dec!(35)),
    (dec!(20), dec!(30)),
    (dec!(10), dec!(25)),
    (dec!(5), dec!(20)),
    (dec!(1), dec!(12)),
];
const SIZE_FLOOR: Decimal = dec!(5);

/// (EBITDA in $bn strictly above, points)
const PROFIT_STEPS: &[(Decimal, Decimal)] = &[
    (dec!(10), dec!(40)),
    (dec!(5), dec!(35)),
    (dec!(2), dec!(30)),
    (dec!(1), dec!(25)),
    (dec!(0.5), dec!(20)),
    (dec!(0), dec!(10)),
];

/// (EBITDA / market cap strictly above, points)
const EFFICIENCY_STEPS: &[(Decimal, Decimal)] = &[
    (dec!(0.15), dec!(20)),
    (dec!(0.10), dec!(15)),
    (dec!(0.05), dec!(10)),
    (dec!(0.02), dec!(5)),
];

const PE_FAVORABLE_CEILING: Decimal = dec!(15);
const PE_EXPENSIVE_FLOOR: Decimal = dec!(50);
const PE_ADJUSTMENT: Decimal = dec!(5);

/// (minimum score, grade, label, colour), strongest first.
const GRADE_BANDS: &[(Decimal, ReadinessGrade, &str, DisplayColor)] = &[
    (dec!(85), ReadinessGrade::APlus, "Excellent", DisplayColor::Emerald),
    (dec!(75), ReadinessGrade::A, "Very Strong", DisplayColor::Green),
    (dec!(65), ReadinessGrade::AMinus, "Strong", DisplayColor::Teal),
    (dec!(50), ReadinessGrade::BPlus, "Good", DisplayColor::Blue),
    (dec!(35), ReadinessGrade::B, "Fair", DisplayColor::Yellow),
    (dec!(20), ReadinessGrade::BMinus, "Weak", DisplayColor::Orange),
];
const FLOOR_BAND: (ReadinessGrade, &str, DisplayColor) =
    (ReadinessGrade::C, "High Risk", DisplayColor::Red);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Grade how ready a vendor's financial profile is for a contract.
///
/// Infallible: negative EBITDA and a zero P/E simply score low.
pub fn score_contract_readiness(vendor: &VendorRecord) -> ContractReadinessResult {
    let metrics = derive_metrics(vendor);

    let size = step_points(metrics.market_cap_bn, SIZE_STEPS, SIZE_FLOOR);
    let profitability = step_points(metrics.ebitda_bn, PROFIT_STEPS, Decimal::ZERO);
    let efficiency = step_points(metrics.ebitda_margin, EFFICIENCY_STEPS, Decimal::ZERO);
    let valuation_adjustment = valuation_adjustment(vendor.pe_ratio);

    let score = clamp_score(size + profitability + efficiency + valuation_adjustment);
    let (grade, label, color) = grade_for_score(score);

    ContractReadinessResult {
        grade,
        label: label.to_string(),
        color,
        score,
        components: ReadinessComponents {
            size,
            profitability,
            efficiency,
            valuation_adjustment,
        },
    }
}

/// Map a 0-100 score to its grade band.
pub fn grade_for_score(score: Score) -> (ReadinessGrade, &'static str, DisplayColor) {
    GRADE_BANDS
        .iter()
        .find(|(min, ..)| score >= *min)
        .map(|(_, grade, label, color)| (*grade, *label, *color))
        .unwrap_or(FLOOR_BAND)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Points for the first threshold that `value` strictly exceeds.
pub(crate) fn step_points(value: Decimal, steps: &[(Decimal, Decimal)], floor: Decimal) -> Decimal {
    steps
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

fn valuation_adjustment(pe: Decimal) -> Decimal {
    if pe > Decimal::ZERO && pe < PE_FAVORABLE_CEILING {
        PE_ADJUSTMENT
    } else if pe > PE_EXPENSIVE_FLOOR {
        -PE_ADJUSTMENT
    } else {
        Decimal::ZERO
    }
}
