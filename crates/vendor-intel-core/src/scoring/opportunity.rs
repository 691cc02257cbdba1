//! Sales opportunity ranking.
//!
//! Composite of the weather exposure tier (50%), the contract readiness
//! grade (35%), deal size (10%) and an urgency bonus (up to 5 points),
//! with two multiplicative boosts for high-value combinations:
//! - Critical exposure with readiness of at least 75 points: x1.15
//! - Market cap above $50bn with High or Critical exposure: x1.10

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::metrics::derivation::to_billions;
use crate::scoring::exposure::{classify_weather_exposure, ExposureTier, WeatherExposureResult};
use crate::scoring::readiness::{score_contract_readiness, step_points, ContractReadinessResult};
use crate::types::{clamp_score, DisplayColor, Multiple, Score};
use crate::vendor::VendorRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Sales priority, ordered from `Cold` to `Platinum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalesPriority {
    Cold,
    Cool,
    Warm,
    Silver,
    Gold,
    Platinum,
}

impl std::fmt::Display for SalesPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cold => write!(f, "Cold"),
            Self::Cool => write!(f, "Cool"),
            Self::Warm => write!(f, "Warm"),
            Self::Silver => write!(f, "Silver"),
            Self::Gold => write!(f, "Gold"),
            Self::Platinum => write!(f, "Platinum"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityComponents {
    /// Exposure tier points after the 50% weight.
    pub exposure: Score,
    /// Readiness grade points after the 35% weight.
    pub readiness: Score,
    /// Deal size points after the 10% weight.
    pub deal_size: Score,
    pub urgency: Score,
    /// Product of the combination boosts (1 when none apply).
    pub multiplier: Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOpportunityResult {
    pub priority: SalesPriority,
    pub reason: String,
    pub color: DisplayColor,
    /// Clamped composite score (0-100), two decimal places.
    pub score: Score,
    pub components: OpportunityComponents,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const EXPOSURE_WEIGHT: Decimal = dec!(0.50);
const READINESS_WEIGHT: Decimal = dec!(0.35);
const DEAL_SIZE_WEIGHT: Decimal = dec!(0.10);

/// (market cap in $bn strictly above, points before weighting)
const DEAL_SIZE_STEPS: &[(Decimal, Decimal)] = &[
    (dec!(100), dec!(100)),
    (dec!(50), dec!(80)),
    (dec!(20), dec!(60)),
    (dec!(5), dec!(40)),
];
const DEAL_SIZE_FLOOR: Decimal = dec!(20);

const DISTRESS_URGENCY: Decimal = dec!(5);
const RICH_VALUATION_URGENCY: Decimal = dec!(3);
const RICH_VALUATION_PE: Decimal = dec!(40);

const CRITICAL_READY_BOOST: Decimal = dec!(1.15);
const CRITICAL_READY_MIN_POINTS: Decimal = dec!(75);
const LARGE_EXPOSED_BOOST: Decimal = dec!(1.10);
const LARGE_EXPOSED_MIN_CAP_BN: Decimal = dec!(50);

const PRIORITY_BANDS: &[(Decimal, SalesPriority, DisplayColor)] = &[
    (dec!(85), SalesPriority::Platinum, DisplayColor::Purple),
    (dec!(70), SalesPriority::Gold, DisplayColor::Yellow),
    (dec!(55), SalesPriority::Silver, DisplayColor::Gray),
    (dec!(40), SalesPriority::Warm, DisplayColor::Orange),
    (dec!(20), SalesPriority::Cool, DisplayColor::Blue),
];
const FLOOR_PRIORITY: (SalesPriority, DisplayColor) = (SalesPriority::Cold, DisplayColor::Gray);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rank a vendor as a sales opportunity.
///
/// Scores readiness and exposure for the same record, then composes them.
pub fn rank_sales_opportunity(vendor: &VendorRecord) -> SalesOpportunityResult {
    let readiness = score_contract_readiness(vendor);
    let exposure = classify_weather_exposure(vendor);
    rank_from_components(&readiness, &exposure, vendor.market_cap, vendor.pe_ratio, vendor.ebitda)
}

/// Pure composition of pre-computed readiness and exposure results with
/// the raw size / valuation / profitability inputs.
pub fn rank_from_components(
    readiness: &ContractReadinessResult,
    exposure: &WeatherExposureResult,
    market_cap: Decimal,
    pe_ratio: Decimal,
    ebitda: Decimal,
) -> SalesOpportunityResult {
    let market_cap_bn = to_billions(market_cap);
    let readiness_points = readiness.grade.points();

    let exposure_component = exposure_tier_points(exposure.tier) * EXPOSURE_WEIGHT;
    let readiness_component = readiness_points * READINESS_WEIGHT;
    let deal_size_component =
        step_points(market_cap_bn, DEAL_SIZE_STEPS, DEAL_SIZE_FLOOR) * DEAL_SIZE_WEIGHT;
    let urgency = urgency_bonus(pe_ratio, ebitda);

    let mut multiplier = Decimal::ONE;
    if exposure.tier == ExposureTier::Critical && readiness_points >= CRITICAL_READY_MIN_POINTS {
        multiplier *= CRITICAL_READY_BOOST;
    }
    if market_cap_bn > LARGE_EXPOSED_MIN_CAP_BN && exposure.tier >= ExposureTier::High {
        multiplier *= LARGE_EXPOSED_BOOST;
    }

    let raw = (exposure_component + readiness_component + deal_size_component + urgency) * multiplier;
    let score = clamp_score(raw).round_dp(2);
    let (priority, color) = priority_for_score(score);
    let reason = reason_for(priority, readiness, exposure);

    SalesOpportunityResult {
        priority,
        reason,
        color,
        score,
        components: OpportunityComponents {
            exposure: exposure_component,
            readiness: readiness_component,
            deal_size: deal_size_component,
            urgency,
            multiplier,
        },
    }
}

/// Fixed point value of each exposure tier before weighting.
pub fn exposure_tier_points(tier: ExposureTier) -> Score {
    match tier {
        ExposureTier::Critical => dec!(100),
        ExposureTier::High => dec!(80),
        ExposureTier::Medium => dec!(60),
        ExposureTier::Low => dec!(35),
        ExposureTier::Minimal => dec!(15),
    }
}

pub fn priority_for_score(score: Score) -> (SalesPriority, DisplayColor) {
    PRIORITY_BANDS
        .iter()
        .find(|(min, ..)| score >= *min)
        .map(|(_, priority, color)| (*priority, *color))
        .unwrap_or(FLOOR_PRIORITY)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn urgency_bonus(pe_ratio: Decimal, ebitda: Decimal) -> Decimal {
    if pe_ratio.is_zero() && ebitda < Decimal::ZERO {
        DISTRESS_URGENCY
    } else if pe_ratio > RICH_VALUATION_PE {
        RICH_VALUATION_URGENCY
    } else {
        Decimal::ZERO
    }
}

fn reason_for(
    priority: SalesPriority,
    readiness: &ContractReadinessResult,
    exposure: &WeatherExposureResult,
) -> String {
    let tier = exposure.tier;
    let e = exposure.score.normalize();
    let grade = readiness.grade;
    let r = readiness.score.normalize();
    match priority {
        SalesPriority::Platinum => format!(
            "Top priority: {tier} weather exposure (score {e}) and {grade} contract readiness (score {r}) make this a flagship forecasting prospect"
        ),
        SalesPriority::Gold => format!(
            "Strong prospect: {tier} weather exposure (score {e}) backed by {grade} contract readiness (score {r})"
        ),
        SalesPriority::Silver => format!(
            "Solid prospect: {tier} weather exposure (score {e}) with {grade} contract readiness (score {r}); qualify budget before outreach"
        ),
        SalesPriority::Warm => format!(
            "Warm lead: {tier} weather exposure (score {e}) and {grade} contract readiness (score {r}) justify a nurture sequence"
        ),
        SalesPriority::Cool => format!(
            "Cool lead: {tier} weather exposure (score {e}) or {grade} contract readiness (score {r}) limits near-term fit"
        ),
        SalesPriority::Cold => format!(
            "Cold: {tier} weather exposure (score {e}) and {grade} contract readiness (score {r}) do not support active pursuit"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::readiness::ReadinessGrade;

    fn vendor(symbol: &str, name: &str, market_cap: Decimal, pe_ratio: Decimal, ebitda: Decimal) -> VendorRecord {
        VendorRecord {
            symbol: symbol.into(),
            name: name.into(),
            market_cap,
            pe_ratio,
            ebitda,
        }
    }

    #[test]
    fn test_dupont_is_gold() {
        let v = vendor(
            "DD",
            "DuPont de Nemours Inc",
            dec!(35_600_000_000),
            dec!(14.9),
            dec!(4_100_000_000),
        );
        let r = rank_sales_opportunity(&v);
        // High exposure 80*0.5 = 40, grade A 85*0.35 = 29.75, deal 60*0.1 = 6
        assert_eq!(r.score, dec!(75.75));
        assert_eq!(r.priority, SalesPriority::Gold);
        assert_eq!(r.components.multiplier, Decimal::ONE);
        assert!(r.reason.contains("High weather exposure (score 57)"));
        assert!(r.reason.contains("A contract readiness (score 80)"));
    }

    #[test]
    fn test_both_boosts_apply() {
        let v = vendor(
            "NEE",
            "NextEra Energy Inc",
            dec!(150_000_000_000),
            dec!(20),
            dec!(12_000_000_000),
        );
        let r = rank_sales_opportunity(&v);
        assert_eq!(r.components.multiplier, dec!(1.15) * dec!(1.10));
        assert_eq!(r.priority, SalesPriority::Platinum);
        assert_eq!(r.score, dec!(100));
    }

    fn components(tier: ExposureTier) -> (ContractReadinessResult, WeatherExposureResult) {
        let v = vendor("DD", "DuPont de Nemours Inc", dec!(35_600_000_000), dec!(14.9), dec!(4_100_000_000));
        let mut readiness = score_contract_readiness(&v);
        readiness.grade = ReadinessGrade::A;
        let mut exposure = classify_weather_exposure(&v);
        exposure.tier = tier;
        (readiness, exposure)
    }

    #[test]
    fn test_large_high_tier_gets_size_boost_only() {
        let (readiness, exposure) = components(ExposureTier::High);
        let boosted = rank_from_components(&readiness, &exposure, dec!(60_000_000_000), dec!(20), dec!(5_000_000_000));
        assert_eq!(boosted.components.multiplier, dec!(1.10));

        // At exactly $50bn the size boost is not earned.
        let plain = rank_from_components(&readiness, &exposure, dec!(50_000_000_000), dec!(20), dec!(5_000_000_000));
        assert_eq!(plain.components.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_small_critical_tier_gets_readiness_boost_only() {
        let (readiness, exposure) = components(ExposureTier::Critical);
        let r = rank_from_components(&readiness, &exposure, dec!(50_000_000_000), dec!(20), dec!(5_000_000_000));
        assert_eq!(r.components.multiplier, dec!(1.15));

        let r = rank_from_components(&readiness, &exposure, dec!(8_000_000_000), dec!(20), dec!(5_000_000_000));
        assert_eq!(r.components.multiplier, dec!(1.15));
    }

    #[test]
    fn test_critical_boost_needs_ready_vendor() {
        let (mut readiness, exposure) = components(ExposureTier::Critical);
        readiness.grade = ReadinessGrade::BPlus;
        let r = rank_from_components(&readiness, &exposure, dec!(8_000_000_000), dec!(20), dec!(5_000_000_000));
        assert_eq!(r.components.multiplier, Decimal::ONE);
    }

    #[test]
    fn test_distress_urgency() {
        let v = vendor("ZZZ", "Acme Holdings", dec!(800_000_000), dec!(0), dec!(-20_000_000));
        let r = rank_sales_opportunity(&v);
        assert_eq!(r.components.urgency, dec!(5));
        // Minimal 15*0.5 = 7.5, grade C 20*0.35 = 7, deal 20*0.1 = 2, urgency 5
        assert_eq!(r.score, dec!(21.5));
        assert_eq!(r.priority, SalesPriority::Cool);
    }

    #[test]
    fn test_rich_valuation_urgency() {
        let v = vendor("ZZZ", "Acme Holdings", dec!(800_000_000), dec!(45), dec!(10_000_000));
        assert_eq!(rank_sales_opportunity(&v).components.urgency, dec!(3));
    }

    #[test]
    fn test_composition_is_pure() {
        let v = vendor("ST", "Sensata Technologies", dec!(5_300_000_000), dec!(32), dec!(900_000_000));
        let readiness = score_contract_readiness(&v);
        let exposure = classify_weather_exposure(&v);
        let a = rank_from_components(&readiness, &exposure, v.market_cap, v.pe_ratio, v.ebitda);
        let b = rank_from_components(&readiness, &exposure, v.market_cap, v.pe_ratio, v.ebitda);
        assert_eq!(a, b);
        assert_eq!(a, rank_sales_opportunity(&v));
    }

    #[test]
    fn test_priority_bands() {
        assert_eq!(priority_for_score(dec!(85)).0, SalesPriority::Platinum);
        assert_eq!(priority_for_score(dec!(70)).0, SalesPriority::Gold);
        assert_eq!(priority_for_score(dec!(55)).0, SalesPriority::Silver);
        assert_eq!(priority_for_score(dec!(40)).0, SalesPriority::Warm);
        assert_eq!(priority_for_score(dec!(20)).0, SalesPriority::Cool);
        assert_eq!(priority_for_score(dec!(19.99)).0, SalesPriority::Cold);
        assert!(SalesPriority::Warm < SalesPriority::Silver);
    }

    #[test]
    fn test_grade_points_feed_boost_threshold() {
        assert_eq!(ReadinessGrade::AMinus.points(), dec!(75));
    }
}
