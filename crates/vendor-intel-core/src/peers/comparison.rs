//! Peer comparison against the static industry benchmarks.
//!
//! Each metric is scored as `clamp(0, 100, vendor / benchmark * 50)`, so
//! parity with the peer average lands at 50. Metrics that are unavailable
//! (P/E sentinel, non-positive EBITDA, zero market cap) score 0.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::benchmarks::industry::IndustryBenchmark;
use crate::metrics::derivation::{derive_metrics, to_billions};
use crate::peers::classifier::benchmark_for;
use crate::types::{clamp_score, Score};
use crate::vendor::VendorRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Quartile ranking, ordered from `BottomQuartile` to `TopQuartile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerRanking {
    BottomQuartile,
    BelowAverage,
    AboveAverage,
    TopQuartile,
}

impl std::fmt::Display for PeerRanking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BottomQuartile => write!(f, "Bottom Quartile"),
            Self::BelowAverage => write!(f, "Below Average"),
            Self::AboveAverage => write!(f, "Above Average"),
            Self::TopQuartile => write!(f, "Top Quartile"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerComparisonResult {
    pub symbol: String,
    pub benchmark: IndustryBenchmark,
    pub pe_percentile: Score,
    pub market_cap_percentile: Score,
    pub ebitda_margin_percentile: Score,
    pub overall_ranking: PeerRanking,
    pub insights: Vec<String>,
}

impl PeerComparisonResult {
    pub fn mean_percentile(&self) -> Score {
        (self.pe_percentile + self.market_cap_percentile + self.ebitda_margin_percentile) / dec!(3)
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PARITY_SCALE: Decimal = dec!(50);

const PREMIUM_PE_MULTIPLE: Decimal = dec!(1.5);
const DISCOUNT_PE_MULTIPLE: Decimal = dec!(0.7);
const HEAVYWEIGHT_CAP_MULTIPLE: Decimal = dec!(1.5);
const SMALL_CAP_MULTIPLE: Decimal = dec!(0.5);
const STRONG_MARGIN_MULTIPLE: Decimal = dec!(1.2);
const WEAK_MARGIN_MULTIPLE: Decimal = dec!(0.8);
const HIGH_VOLATILITY_INDEX: u8 = 7;

const RANKING_BANDS: &[(Decimal, PeerRanking)] = &[
    (dec!(75), PeerRanking::TopQuartile),
    (dec!(50), PeerRanking::AboveAverage),
    (dec!(25), PeerRanking::BelowAverage),
];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compare a vendor with the benchmark of its classified industry.
pub fn compare_to_peers(vendor: &VendorRecord) -> PeerComparisonResult {
    compare_to_benchmark(vendor, benchmark_for(vendor))
}

/// Compare a vendor with an explicitly chosen benchmark.
pub fn compare_to_benchmark(vendor: &VendorRecord, benchmark: &IndustryBenchmark) -> PeerComparisonResult {
    let metrics = derive_metrics(vendor);

    let pe_percentile = relative_percentile(vendor.pe_ratio, benchmark.avg_pe);
    let market_cap_percentile = relative_percentile(metrics.market_cap_bn, benchmark.avg_market_cap_bn);
    let ebitda_margin_percentile = match metrics.ebitda_yield {
        Some(margin) => relative_percentile(margin, benchmark.avg_ebitda_margin),
        None => Decimal::ZERO,
    };

    let mean = (pe_percentile + market_cap_percentile + ebitda_margin_percentile) / dec!(3);
    let overall_ranking = ranking_for_mean(mean);
    let insights = peer_insights(vendor, benchmark);

    PeerComparisonResult {
        symbol: vendor.symbol.clone(),
        benchmark: *benchmark,
        pe_percentile,
        market_cap_percentile,
        ebitda_margin_percentile,
        overall_ranking,
        insights,
    }
}

/// `clamp(0, 100, value / reference * 50)`; 0 for non-positive inputs.
pub fn relative_percentile(value: Decimal, reference: Decimal) -> Score {
    if value <= Decimal::ZERO || reference <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    value
        .checked_div(reference)
        .and_then(|ratio| ratio.checked_mul(PARITY_SCALE))
        .map_or(Decimal::ONE_HUNDRED, clamp_score)
        .round_dp(2)
}

pub fn ranking_for_mean(mean: Score) -> PeerRanking {
    RANKING_BANDS
        .iter()
        .find(|(min, _)| mean >= *min)
        .map(|(_, ranking)| *ranking)
        .unwrap_or(PeerRanking::BottomQuartile)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn peer_insights(vendor: &VendorRecord, b: &IndustryBenchmark) -> Vec<String> {
    let mut insights = Vec::new();
    let industry = b.industry.to_lowercase();

    let pe = vendor.pe_ratio;
    if pe.is_zero() {
        insights.push("P/E not available; valuation comparison skipped".to_string());
    } else if pe > b.avg_pe * PREMIUM_PE_MULTIPLE {
        insights.push(format!(
            "Premium valuation: P/E of {}x vs {}x industry average",
            pe.round_dp(1),
            b.avg_pe
        ));
    } else if pe < b.avg_pe * DISCOUNT_PE_MULTIPLE {
        insights.push(format!(
            "Discount valuation: P/E of {}x vs {}x industry average",
            pe.round_dp(1),
            b.avg_pe
        ));
    }

    let cap_bn = to_billions(vendor.market_cap);
    if cap_bn > b.avg_market_cap_bn * HEAVYWEIGHT_CAP_MULTIPLE {
        insights.push(format!(
            "Industry heavyweight: ${}B market cap vs ${}B peer average",
            cap_bn.round_dp(1),
            b.avg_market_cap_bn
        ));
    } else if cap_bn < b.avg_market_cap_bn * SMALL_CAP_MULTIPLE {
        insights.push(format!(
            "Smaller than typical {} peers: ${}B vs ${}B average",
            industry,
            cap_bn.round_dp(1),
            b.avg_market_cap_bn
        ));
    }

    match derive_metrics(vendor).ebitda_yield {
        None => insights.push(format!(
            "Non-positive EBITDA against a {} peer group averaging {}% EBITDA / market cap",
            industry,
            (b.avg_ebitda_margin * dec!(100)).normalize()
        )),
        Some(margin) if margin > b.avg_ebitda_margin * STRONG_MARGIN_MULTIPLE => {
            insights.push(format!(
                "EBITDA efficiency above peers: {}% vs {}% average",
                (margin * dec!(100)).round_dp(1),
                (b.avg_ebitda_margin * dec!(100)).normalize()
            ))
        }
        Some(margin) if margin < b.avg_ebitda_margin * WEAK_MARGIN_MULTIPLE => {
            insights.push(format!(
                "EBITDA efficiency trails peers: {}% vs {}% average",
                (margin * dec!(100)).round_dp(1),
                (b.avg_ebitda_margin * dec!(100)).normalize()
            ))
        }
        Some(_) => {}
    }

    if b.volatility_index >= HIGH_VOLATILITY_INDEX {
        insights.push(format!(
            "High-volatility industry (index {}/10): expect wider valuation swings",
            b.volatility_index
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::industry::industry_benchmark;

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
    fn test_dupont_against_specialty_chemicals() {
        let r = compare_to_peers(&vendor(
            "DD",
            "DuPont de Nemours Inc",
            dec!(35_600_000_000),
            dec!(14.9),
            dec!(4_100_000_000),
        ));
        assert_eq!(r.benchmark.industry, "SPECIALTY CHEMICALS");
        // 14.9 / 18.5 * 50
        assert_eq!(r.pe_percentile, dec!(40.27));
        // 35.6 / 25 * 50
        assert_eq!(r.market_cap_percentile, dec!(71.2));
        // (4.1 / 35.6) / 0.12 * 50
        assert_eq!(r.ebitda_margin_percentile, dec!(47.99));
        // mean 53.15
        assert_eq!(r.overall_ranking, PeerRanking::AboveAverage);
        assert!(r.insights.is_empty());
    }

    #[test]
    fn test_unavailable_metrics_score_zero() {
        let r = compare_to_peers(&vendor("ZZZ", "Widgets Unlimited", dec!(0), dec!(0), dec!(-10)));
        assert_eq!(r.pe_percentile, Decimal::ZERO);
        assert_eq!(r.market_cap_percentile, Decimal::ZERO);
        assert_eq!(r.ebitda_margin_percentile, Decimal::ZERO);
        assert_eq!(r.overall_ranking, PeerRanking::BottomQuartile);
        assert!(r.insights.iter().any(|i| i.starts_with("P/E not available")));
        assert!(r.insights.iter().any(|i| i.starts_with("Non-positive EBITDA")));
    }

    #[test]
    fn test_percentile_clamped_at_100() {
        assert_eq!(relative_percentile(dec!(500), dec!(10)), dec!(100));
        assert_eq!(relative_percentile(dec!(10), dec!(10)), dec!(50));
        assert_eq!(relative_percentile(dec!(-3), dec!(10)), dec!(0));
    }

    #[test]
    fn test_percentile_saturates_instead_of_overflowing() {
        assert_eq!(relative_percentile(Decimal::MAX, dec!(18.5)), dec!(100));
        assert_eq!(relative_percentile(Decimal::MAX, dec!(0.5)), dec!(100));
    }

    #[test]
    fn test_premium_and_heavyweight_insights() {
        let b = industry_benchmark("ELECTRONIC COMPONENTS").unwrap();
        let v = vendor("TEL", "TE Connectivity", dec!(60_000_000_000), dec!(40), dec!(3_000_000_000));
        let r = compare_to_benchmark(&v, b);
        assert!(r.insights.iter().any(|i| i.starts_with("Premium valuation")));
        assert!(r.insights.iter().any(|i| i.starts_with("Industry heavyweight")));
        assert_eq!(r.pe_percentile, dec!(83.33));
        assert_eq!(r.market_cap_percentile, dec!(85.71));
        assert_eq!(r.ebitda_margin_percentile, dec!(31.25));
        // mean 66.76
        assert_eq!(r.overall_ranking, PeerRanking::AboveAverage);
    }

    #[test]
    fn test_high_volatility_insight() {
        let r = compare_to_peers(&vendor("LYB", "LyondellBasell", dec!(30_000_000_000), dec!(15), dec!(4_200_000_000)));
        assert!(r.insights.iter().any(|i| i.starts_with("High-volatility industry")));
        // parity on every metric
        assert_eq!(r.pe_percentile, dec!(50));
        assert_eq!(r.market_cap_percentile, dec!(50));
        assert_eq!(r.ebitda_margin_percentile, dec!(50));
        assert_eq!(r.overall_ranking, PeerRanking::AboveAverage);
    }

    #[test]
    fn test_ranking_bands_monotone() {
        assert_eq!(ranking_for_mean(dec!(75)), PeerRanking::TopQuartile);
        assert_eq!(ranking_for_mean(dec!(74.99)), PeerRanking::AboveAverage);
        assert_eq!(ranking_for_mean(dec!(50)), PeerRanking::AboveAverage);
        assert_eq!(ranking_for_mean(dec!(25)), PeerRanking::BelowAverage);
        assert_eq!(ranking_for_mean(dec!(24.99)), PeerRanking::BottomQuartile);
        let mut prev = ranking_for_mean(Decimal::ZERO);
        for m in 0..=100 {
            let r = ranking_for_mean(Decimal::from(m));
            assert!(r >= prev);
            prev = r;
        }
    }
}
