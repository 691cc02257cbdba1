//! Ticker / keyword classification into an industry peer group.

use crate::benchmarks::industry::{default_industry_benchmark, industry_benchmark, IndustryBenchmark, DEFAULT_INDUSTRY};
use crate::vendor::VendorRecord;

#[derive(Debug, Clone, Copy)]
pub struct IndustryRule {
    pub industry: &'static str,
    pub tickers: &'static [&'static str],
    /// Lower-case substrings matched against the vendor name.
    pub keywords: &'static [&'static str],
}

impl IndustryRule {
    pub fn matches(&self, vendor: &VendorRecord) -> bool {
        let symbol = vendor.symbol.trim().to_uppercase();
        let name = vendor.name.to_lowercase();
        self.tickers.iter().any(|t| *t == symbol) || self.keywords.iter().any(|k| name.contains(k))
    }
}

/// Priority-ordered; every industry named here exists in the benchmark table.
pub const INDUSTRY_RULES: &[IndustryRule] = &[
    IndustryRule {
        industry: "SPECIALTY CHEMICALS",
        tickers: &["DD", "CE", "EMN"],
        keywords: &["specialty chemical", "nemours"],
    },
    IndustryRule {
        industry: "CHEMICALS",
        tickers: &["LYB", "DOW"],
        keywords: &["chemical", "plastics", "polymer"],
    },
    IndustryRule {
        industry: "ELECTRONIC COMPONENTS",
        tickers: &["TEL", "APH", "GLW"],
        keywords: &["connectivity", "electronic", "connector"],
    },
    IndustryRule {
        industry: "SCIENTIFIC & TECHNICAL INSTRUMENTS",
        tickers: &["ST"],
        keywords: &["sensor", "instrument"],
    },
    IndustryRule {
        industry: "SEMICONDUCTORS",
        tickers: &["NVDA", "INTC", "TXN"],
        keywords: &["semiconductor"],
    },
    IndustryRule {
        industry: "AEROSPACE & DEFENSE",
        tickers: &["BA", "LMT", "RTX"],
        keywords: &["aerospace", "defense"],
    },
    IndustryRule {
        industry: "UTILITIES - REGULATED ELECTRIC",
        tickers: &["NEE", "DUK", "SO"],
        keywords: &["utilit", "electric power"],
    },
    IndustryRule {
        industry: "OIL & GAS INTEGRATED",
        tickers: &["XOM", "CVX"],
        keywords: &["petroleum", "oil"],
    },
    IndustryRule {
        industry: "PACKAGED FOODS",
        tickers: &["GIS", "KHC"],
        keywords: &["foods"],
    },
];

/// Industry tag for a vendor, or [`DEFAULT_INDUSTRY`] when nothing matches.
pub fn classify_industry(vendor: &VendorRecord) -> &'static str {
    INDUSTRY_RULES
        .iter()
        .find(|r| r.matches(vendor))
        .map(|r| r.industry)
        .unwrap_or(DEFAULT_INDUSTRY)
}

/// Benchmark for a vendor's classified industry.
pub fn benchmark_for(vendor: &VendorRecord) -> &'static IndustryBenchmark {
    let industry = classify_industry(vendor);
    industry_benchmark(industry).unwrap_or_else(|| {
        tracing::debug!(industry, "classified industry missing from table; using default");
        default_industry_benchmark()
    })
}
