//! Per-vendor weather-risk profile.

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::benchmarks::industry::industry_benchmark;
use crate::benchmarks::sector::{sector_weather_profile, SensitivityLevel};
use crate::metrics::derivation::to_billions;
use crate::types::{clamp, clamp_score, Rate, Score};
use crate::vendor::VendorRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRiskProfile {
    pub sensitivity: SensitivityLevel,
    /// Weather/revenue correlation, capped at 0.95.
    pub correlation: Rate,
    /// Forecast coverage percentage, capped at 98.
    pub coverage: Score,
    pub risk_level: RiskLevel,
    pub climate_exposure: Score,
    pub supply_chain_vulnerability: Score,
    pub seasonal_variance: Rate,
}

const MAX_CORRELATION: Decimal = dec!(0.95);
const SIZE_REFERENCE_BN: Decimal = dec!(50);
const MAX_SIZE_FACTOR: Decimal = dec!(1.5);
const PE_REFERENCE: Decimal = dec!(30);
const MAX_VALUATION_FACTOR: Decimal = dec!(1.3);
const HIGH_RISK_CORRELATION: Decimal = dec!(0.7);
const MEDIUM_RISK_CORRELATION: Decimal = dec!(0.5);
const BASE_COVERAGE: Decimal = dec!(75);
const MAX_COVERAGE: Decimal = dec!(98);
const COVERAGE_PER_BN: Decimal = dec!(0.3);
const MAX_COVERAGE_JITTER: u32 = 15;

/// Profile used when the sector or industry tag is not in the tables.
pub fn low_risk_default() -> WeatherRiskProfile {
    WeatherRiskProfile {
        sensitivity: SensitivityLevel::Low,
        correlation: dec!(0.20),
        coverage: dec!(85),
        risk_level: RiskLevel::Low,
        climate_exposure: dec!(20),
        supply_chain_vulnerability: dec!(15),
        seasonal_variance: dec!(0.10),
    }
}

/// Weather-risk profile for a vendor in the given sector and industry.
///
/// Only the coverage figure consumes randomness (one draw).
pub fn calculate_weather_risk<R: Rng + ?Sized>(
    vendor: &VendorRecord,
    sector: &str,
    industry: &str,
    rng: &mut R,
) -> WeatherRiskProfile {
    let (Some(profile), Some(benchmark)) = (sector_weather_profile(sector), industry_benchmark(industry)) else {
        tracing::debug!(symbol = %vendor.symbol, sector, industry, "unknown sector or industry; low-risk default");
        return low_risk_default();
    };

    let correlation = weather_correlation(profile.base_correlation, vendor.market_cap, vendor.pe_ratio);
    let risk_level = risk_level_for(correlation);

    let cap_bn = to_billions(vendor.market_cap);
    let jitter = Decimal::from(rng.gen_range(0..MAX_COVERAGE_JITTER));
    let coverage = clamp(
        Decimal::ZERO,
        MAX_COVERAGE,
        BASE_COVERAGE + (cap_bn * COVERAGE_PER_BN).floor() + jitter,
    );

    let climate_exposure =
        clamp_score((benchmark.weather_dependency + correlation * dec!(20)).floor());
    let supply_chain_vulnerability =
        clamp_score((profile.seasonal_variance * dec!(100) + correlation * dec!(30)).floor());

    WeatherRiskProfile {
        sensitivity: profile.sensitivity,
        correlation,
        coverage,
        risk_level,
        climate_exposure,
        supply_chain_vulnerability,
        seasonal_variance: profile.seasonal_variance,
    }
}

/// `min(0.95, base × size factor × valuation factor)`.
pub fn weather_correlation(base: Rate, market_cap: Decimal, pe_ratio: Decimal) -> Rate {
    let size_factor = (to_billions(market_cap) / SIZE_REFERENCE_BN).min(MAX_SIZE_FACTOR);
    let valuation_factor = if pe_ratio > Decimal::ZERO {
        (pe_ratio / PE_REFERENCE).min(MAX_VALUATION_FACTOR)
    } else {
        Decimal::ONE
    };
    clamp(Decimal::ZERO, MAX_CORRELATION, base * size_factor * valuation_factor).round_dp(4)
}

pub fn risk_level_for(correlation: Rate) -> RiskLevel {
    if correlation > HIGH_RISK_CORRELATION {
        RiskLevel::High
    } else if correlation > MEDIUM_RISK_CORRELATION {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Correlation as a whole percentage, for display.
pub fn correlation_pct(profile: &WeatherRiskProfile) -> u32 {
    (profile.correlation * dec!(100)).round().to_u32().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vendor(market_cap: Decimal, pe_ratio: Decimal) -> VendorRecord {
        VendorRecord {
            symbol: "LYB".into(),
            name: "LyondellBasell Industries NV".into(),
            market_cap,
            pe_ratio,
            ebitda: dec!(5_000_000_000),
        }
    }

    #[test]
    fn test_large_chemicals_vendor() {
        // 0.72 × min(1.5, 60/50 = 1.2) × min(1.3, 15/30 = 0.5) = 0.432
        let v = vendor(dec!(60_000_000_000), dec!(15));
        let p = calculate_weather_risk(&v, "BASIC MATERIALS", "CHEMICALS", &mut StdRng::seed_from_u64(1));
        assert_eq!(p.correlation, dec!(0.432));
        assert_eq!(p.risk_level, RiskLevel::Low);
        assert_eq!(p.sensitivity, SensitivityLevel::High);
        // floor(60 + 8.64) = 68
        assert_eq!(p.climate_exposure, dec!(68));
        // floor(35 + 12.96) = 47
        assert_eq!(p.supply_chain_vulnerability, dec!(47));
        // 75 + floor(18) + jitter[0,15) stays under the cap
        assert!(p.coverage >= dec!(93) && p.coverage <= dec!(98));
    }

    #[test]
    fn test_correlation_capped() {
        // 0.85 × 1.5 × 1.3 would be 1.6575
        let c = weather_correlation(dec!(0.85), dec!(500_000_000_000), dec!(60));
        assert_eq!(c, dec!(0.95));
        assert_eq!(risk_level_for(c), RiskLevel::High);
    }

    #[test]
    fn test_no_pe_uses_neutral_valuation() {
        // 0.45 × 1.0 × 1
        assert_eq!(weather_correlation(dec!(0.45), dec!(50_000_000_000), Decimal::ZERO), dec!(0.45));
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(risk_level_for(dec!(0.71)), RiskLevel::High);
        assert_eq!(risk_level_for(dec!(0.70)), RiskLevel::Medium);
        assert_eq!(risk_level_for(dec!(0.51)), RiskLevel::Medium);
        assert_eq!(risk_level_for(dec!(0.50)), RiskLevel::Low);
    }

    #[test]
    fn test_unknown_tags_use_default() {
        let v = vendor(dec!(60_000_000_000), dec!(15));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(calculate_weather_risk(&v, "SPACE MINING", "CHEMICALS", &mut rng), low_risk_default());
        assert_eq!(calculate_weather_risk(&v, "BASIC MATERIALS", "ASTEROIDS", &mut rng), low_risk_default());
    }

    #[test]
    fn test_coverage_capped_for_mega_caps() {
        let v = vendor(dec!(2_000_000_000_000), dec!(30));
        for seed in 0..20 {
            let p = calculate_weather_risk(&v, "TECHNOLOGY", "SEMICONDUCTORS", &mut StdRng::seed_from_u64(seed));
            assert_eq!(p.coverage, dec!(98));
            assert!(p.climate_exposure <= dec!(100));
        }
    }

    #[test]
    fn test_correlation_pct() {
        let mut p = low_risk_default();
        p.correlation = dec!(0.432);
        assert_eq!(correlation_pct(&p), 43);
    }
}
