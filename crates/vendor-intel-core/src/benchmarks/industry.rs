//! Per-industry reference statistics used for peer percentiles and weather dependency.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::normalize_key;
use crate::error::VendorIntelError;
use crate::VendorIntelResult;

/// Reference statistics for one industry peer group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryBenchmark {
    pub industry: &'static str,
    pub sector: &'static str,
    pub avg_pe: Decimal,
    /// Average market cap in billions.
    pub avg_market_cap_bn: Decimal,
    /// Average EBITDA / market cap for the peer group.
    pub avg_ebitda_margin: Decimal,
    pub peer_count: u32,
    /// 1 (stable) to 10 (highly volatile).
    pub volatility_index: u8,
    /// Baseline climate exposure points for the industry (0-100).
    pub weather_dependency: Decimal,
}

/// Industry used when classification finds no better match.
pub const DEFAULT_INDUSTRY: &str = "SPECIALTY INDUSTRIAL MACHINERY";

const INDUSTRY_BENCHMARKS: &[IndustryBenchmark] = &[
    IndustryBenchmark {
        industry: "SPECIALTY CHEMICALS",
        sector: "BASIC MATERIALS",
        avg_pe: dec!(18.5),
        avg_market_cap_bn: dec!(25),
        avg_ebitda_margin: dec!(0.12),
        peer_count: 42,
        volatility_index: 6,
        weather_dependency: dec!(55),
    },
    IndustryBenchmark {
        industry: "CHEMICALS",
        sector: "BASIC MATERIALS",
        avg_pe: dec!(15),
        avg_market_cap_bn: dec!(30),
        avg_ebitda_margin: dec!(0.14),
        peer_count: 28,
        volatility_index: 7,
        weather_dependency: dec!(60),
    },
    IndustryBenchmark {
        industry: "ELECTRONIC COMPONENTS",
        sector: "TECHNOLOGY",
        avg_pe: dec!(24),
        avg_market_cap_bn: dec!(35),
        avg_ebitda_margin: dec!(0.08),
        peer_count: 36,
        volatility_index: 5,
        weather_dependency: dec!(30),
    },
    IndustryBenchmark {
        industry: "SCIENTIFIC & TECHNICAL INSTRUMENTS",
        sector: "TECHNOLOGY",
        avg_pe: dec!(28),
        avg_market_cap_bn: dec!(20),
        avg_ebitda_margin: dec!(0.07),
        peer_count: 24,
        volatility_index: 5,
        weather_dependency: dec!(25),
    },
    IndustryBenchmark {
        industry: "SEMICONDUCTORS",
        sector: "TECHNOLOGY",
        avg_pe: dec!(30),
        avg_market_cap_bn: dec!(120),
        avg_ebitda_margin: dec!(0.06),
        peer_count: 55,
        volatility_index: 8,
        weather_dependency: dec!(20),
    },
    IndustryBenchmark {
        industry: "AEROSPACE & DEFENSE",
        sector: "INDUSTRIALS",
        avg_pe: dec!(22),
        avg_market_cap_bn: dec!(60),
        avg_ebitda_margin: dec!(0.09),
        peer_count: 31,
        volatility_index: 6,
        weather_dependency: dec!(45),
    },
    IndustryBenchmark {
        industry: "UTILITIES - REGULATED ELECTRIC",
        sector: "UTILITIES",
        avg_pe: dec!(17),
        avg_market_cap_bn: dec!(40),
        avg_ebitda_margin: dec!(0.16),
        peer_count: 38,
        volatility_index: 3,
        weather_dependency: dec!(75),
    },
    IndustryBenchmark {
        industry: "OIL & GAS INTEGRATED",
        sector: "ENERGY",
        avg_pe: dec!(12),
        avg_market_cap_bn: dec!(150),
        avg_ebitda_margin: dec!(0.22),
        peer_count: 20,
        volatility_index: 7,
        weather_dependency: dec!(70),
    },
    IndustryBenchmark {
        industry: "PACKAGED FOODS",
        sector: "CONSUMER DEFENSIVE",
        avg_pe: dec!(19),
        avg_market_cap_bn: dec!(28),
        avg_ebitda_margin: dec!(0.10),
        peer_count: 45,
        volatility_index: 3,
        weather_dependency: dec!(50),
    },
    IndustryBenchmark {
        industry: DEFAULT_INDUSTRY,
        sector: "INDUSTRIALS",
        avg_pe: dec!(21),
        avg_market_cap_bn: dec!(30),
        avg_ebitda_margin: dec!(0.10),
        peer_count: 60,
        volatility_index: 5,
        weather_dependency: dec!(40),
    },
];

/// Look up an industry benchmark by tag (case-insensitive).
pub fn industry_benchmark(industry: &str) -> Option<&'static IndustryBenchmark> {
    let key = normalize_key(industry);
    INDUSTRY_BENCHMARKS.iter().find(|b| b.industry == key)
}

/// Look up an industry benchmark, failing on unknown tags.
///
/// For explicit user input (CLI flags, bindings) where silently
/// falling back would hide a typo.
pub fn require_industry_benchmark(industry: &str) -> VendorIntelResult<&'static IndustryBenchmark> {
    industry_benchmark(industry).ok_or_else(|| VendorIntelError::UnknownKey {
        table: "industry benchmarks".into(),
        key: industry.to_string(),
    })
}

/// The fallback benchmark. Always present.
pub fn default_industry_benchmark() -> &'static IndustryBenchmark {
    INDUSTRY_BENCHMARKS
        .iter()
        .find(|b| b.industry == DEFAULT_INDUSTRY)
        .unwrap_or(&INDUSTRY_BENCHMARKS[0])
}

pub fn all_industry_benchmarks() -> &'static [IndustryBenchmark] {
    INDUSTRY_BENCHMARKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let b = industry_benchmark("  specialty chemicals ").unwrap();
        assert_eq!(b.sector, "BASIC MATERIALS");
    }

    #[test]
    fn test_unknown_industry() {
        assert!(industry_benchmark("UNDERWATER BASKET WEAVING").is_none());
        let err = require_industry_benchmark("UNDERWATER BASKET WEAVING").unwrap_err();
        assert!(matches!(err, VendorIntelError::UnknownKey { .. }));
    }

    #[test]
    fn test_default_industry_present() {
        assert_eq!(default_industry_benchmark().industry, DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_table_invariants() {
        for b in all_industry_benchmarks() {
            assert!(b.avg_pe > Decimal::ZERO, "{} avg_pe", b.industry);
            assert!(b.avg_market_cap_bn > Decimal::ZERO, "{} avg cap", b.industry);
            assert!(b.avg_ebitda_margin > Decimal::ZERO, "{} margin", b.industry);
            assert!((1..=10).contains(&b.volatility_index), "{} volatility", b.industry);
            assert!(b.weather_dependency <= dec!(100));
        }
    }
}
