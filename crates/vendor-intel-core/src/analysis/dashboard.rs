//! Dashboard report: every engine component applied to a vendor collection.
//!
//! Randomized sections draw from one generator seeded by the
//! [`SimulationContext`], in vendor order (risk profile, then events), so a
//! context reproduces the whole report.

use std::collections::HashSet;
use std::time::Instant;

use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::alerts::financial::{generate_financial_alerts, AlertKind, FinancialAlert};
use crate::benchmarks::company::company_profile;
use crate::benchmarks::industry::DEFAULT_INDUSTRY;
use crate::error::VendorIntelError;
use crate::metrics::derivation::{derive_metrics, DerivedMetrics};
use crate::peers::classifier::benchmark_for;
use crate::peers::comparison::{compare_to_benchmark, PeerComparisonResult};
use crate::scoring::exposure::{classify_weather_exposure, WeatherExposureResult};
use crate::scoring::opportunity::{rank_from_components, SalesOpportunityResult};
use crate::scoring::readiness::{score_contract_readiness, ContractReadinessResult};
use crate::types::{sum_money, with_metadata, ComputationOutput, Money, Score};
use crate::vendor::VendorRecord;
use crate::weather::events::{simulate_weather_events, WeatherEvent};
use crate::weather::insights::{generate_climate_scenarios, generate_insights, ClimateScenario, Insight};
use crate::weather::risk::{calculate_weather_risk, WeatherRiskProfile};
use crate::weather::SimulationContext;
use crate::VendorIntelResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorAnalysis {
    pub symbol: String,
    pub name: String,
    pub industry: String,
    pub sector: String,
    pub metrics: DerivedMetrics,
    pub readiness: ContractReadinessResult,
    pub exposure: WeatherExposureResult,
    pub opportunity: SalesOpportunityResult,
    pub alerts: Vec<FinancialAlert>,
    pub peers: PeerComparisonResult,
    pub weather_risk: WeatherRiskProfile,
    pub weather_events: Vec<WeatherEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub vendor_count: usize,
    pub total_market_cap: Money,
    pub average_readiness: Score,
    pub critical_alerts: usize,
    pub simulated_events: usize,
    /// Symbols ordered by sales opportunity score, best first.
    pub opportunity_ranking: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorIntelligenceReport {
    pub context: SimulationContext,
    pub vendors: Vec<VendorAnalysis>,
    pub insights: Vec<Insight>,
    pub climate_scenarios: Vec<ClimateScenario>,
    pub summary: PortfolioSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the full dashboard report for a vendor collection.
pub fn analyze_vendors(
    vendors: &[VendorRecord],
    ctx: &SimulationContext,
) -> VendorIntelResult<ComputationOutput<VendorIntelligenceReport>> {
    let start = Instant::now();

    if vendors.is_empty() {
        return Err(VendorIntelError::InsufficientData(
            "At least one vendor record is required".into(),
        ));
    }
    let mut seen = HashSet::new();
    for v in vendors {
        v.validate()?;
        if !seen.insert(v.symbol.to_uppercase()) {
            return Err(VendorIntelError::InvalidInput {
                field: "symbol".into(),
                reason: format!("Duplicate vendor symbol '{}'", v.symbol),
            });
        }
    }

    let mut warnings: Vec<String> = Vec::new();
    let mut rng = ctx.rng();
    let rows: Vec<VendorAnalysis> = vendors
        .iter()
        .map(|v| {
            warnings.extend(vendor_warnings(v));
            analyze_vendor(v, ctx, &mut rng)
        })
        .collect();

    let insights = generate_insights(vendors, ctx.as_of);
    let climate_scenarios = generate_climate_scenarios(vendors);
    let summary = summarize(vendors, &rows);

    tracing::debug!(
        vendors = rows.len(),
        seed = ctx.seed,
        as_of = %ctx.as_of,
        "vendor intelligence report built"
    );

    let report = VendorIntelligenceReport {
        context: *ctx,
        vendors: rows,
        insights,
        climate_scenarios,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "as_of": ctx.as_of.to_string(),
        "seed": ctx.seed,
        "ebitda_margin": "EBITDA / market cap (revenue unavailable)",
        "opportunity_weights": "exposure 50%, readiness 35%, deal size 10%, urgency up to 5 points",
        "peer_percentile": "clamp(0, 100, vendor / benchmark * 50)",
        "weather_data": "synthetic, seeded"
    });

    Ok(with_metadata(
        "Vendor readiness, weather exposure and peer benchmarking",
        &assumptions,
        warnings,
        elapsed,
        report,
    ))
}

/// Analyse one vendor, drawing weather data from `rng`.
pub fn analyze_vendor<R: Rng + ?Sized>(
    vendor: &VendorRecord,
    ctx: &SimulationContext,
    rng: &mut R,
) -> VendorAnalysis {
    let benchmark = benchmark_for(vendor);
    let readiness = score_contract_readiness(vendor);
    let exposure = classify_weather_exposure(vendor);
    let opportunity = rank_from_components(
        &readiness,
        &exposure,
        vendor.market_cap,
        vendor.pe_ratio,
        vendor.ebitda,
    );

    let weather_risk = calculate_weather_risk(vendor, benchmark.sector, benchmark.industry, rng);
    let weather_events =
        simulate_weather_events(&vendor.symbol, benchmark.sector, benchmark.industry, ctx.as_of, rng);

    VendorAnalysis {
        symbol: vendor.symbol.clone(),
        name: vendor.name.clone(),
        industry: benchmark.industry.to_string(),
        sector: benchmark.sector.to_string(),
        metrics: derive_metrics(vendor),
        readiness,
        exposure,
        opportunity,
        alerts: generate_financial_alerts(vendor),
        peers: compare_to_benchmark(vendor, benchmark),
        weather_risk,
        weather_events,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn vendor_warnings(vendor: &VendorRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    if benchmark_for(vendor).industry == DEFAULT_INDUSTRY {
        warnings.push(format!(
            "{}: no industry match; benchmarked against {}",
            vendor.symbol, DEFAULT_INDUSTRY
        ));
    }
    if company_profile(&vendor.symbol).is_none() {
        warnings.push(format!(
            "{}: no operating profile; weather events use the sector window",
            vendor.symbol
        ));
    }
    if !vendor.has_earnings_data() {
        warnings.push(format!("{}: P/E unavailable; valuation inputs neutralised", vendor.symbol));
    }
    warnings
}

fn summarize(vendors: &[VendorRecord], rows: &[VendorAnalysis]) -> PortfolioSummary {
    let total_readiness: Decimal = rows.iter().map(|r| r.readiness.score).sum();
    let average_readiness = if rows.is_empty() {
        Decimal::ZERO
    } else {
        (total_readiness / Decimal::from(rows.len())).round_dp(2)
    };

    let mut ranked: Vec<&VendorAnalysis> = rows.iter().collect();
    ranked.sort_by(|a, b| b.opportunity.score.cmp(&a.opportunity.score));

    PortfolioSummary {
        vendor_count: rows.len(),
        total_market_cap: sum_money(vendors.iter().map(|v| v.market_cap)),
        average_readiness,
        critical_alerts: rows
            .iter()
            .flat_map(|r| r.alerts.iter())
            .filter(|a| a.kind == AlertKind::Critical)
            .count(),
        simulated_events: rows.iter().map(|r| r.weather_events.len()).sum(),
        opportunity_ranking: ranked.iter().map(|r| r.symbol.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ctx() -> SimulationContext {
        SimulationContext::new(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(), 2024)
    }

    fn vendors() -> Vec<VendorRecord> {
        vec![
            VendorRecord::new("DD", "DuPont de Nemours Inc", dec!(32_000_000_000), dec!(18), dec!(3_500_000_000)).unwrap(),
            VendorRecord::new("TEL", "TE Connectivity Ltd", dec!(45_000_000_000), dec!(22), dec!(3_800_000_000)).unwrap(),
            VendorRecord::new("ACME", "Acme Widgets", dec!(2_000_000_000), dec!(0), dec!(-100_000_000)).unwrap(),
        ]
    }

    #[test]
    fn test_report_is_reproducible() {
        let a = analyze_vendors(&vendors(), &ctx()).unwrap();
        let b = analyze_vendors(&vendors(), &ctx()).unwrap();
        assert_eq!(a.result, b.result);
        assert_eq!(a.warnings, b.warnings);
    }

    #[test]
    fn test_rows_and_summary() {
        let out = analyze_vendors(&vendors(), &ctx()).unwrap();
        let report = out.result;
        assert_eq!(report.vendors.len(), 3);
        assert_eq!(report.vendors[0].industry, "SPECIALTY CHEMICALS");
        assert_eq!(report.summary.vendor_count, 3);
        assert_eq!(report.summary.total_market_cap, dec!(79_000_000_000));
        assert_eq!(report.summary.critical_alerts, 1);
        assert_eq!(report.summary.opportunity_ranking.last().map(String::as_str), Some("ACME"));
        assert!(!report.insights.is_empty());
        assert_eq!(report.climate_scenarios.len(), 3);
    }

    #[test]
    fn test_fallback_warnings() {
        let out = analyze_vendors(&vendors(), &ctx()).unwrap();
        assert!(out.warnings.iter().any(|w| w.starts_with("ACME: no industry match")));
        assert!(out.warnings.iter().any(|w| w.starts_with("ACME: P/E unavailable")));
        assert!(!out.warnings.iter().any(|w| w.starts_with("DD:")));
    }

    #[test]
    fn test_total_market_cap_saturates() {
        let huge = Decimal::MAX / dec!(1.5);
        let vendors = vec![
            VendorRecord::new("DD", "DuPont de Nemours Inc", huge, dec!(18), dec!(3_500_000_000)).unwrap(),
            VendorRecord::new("CE", "Celanese Corp", huge, dec!(9), dec!(2_000_000_000)).unwrap(),
        ];
        let out = analyze_vendors(&vendors, &ctx()).unwrap();
        assert_eq!(out.result.summary.total_market_cap, Decimal::MAX);
        assert_eq!(out.result.vendors.len(), 2);
    }

    #[test]
    fn test_empty_and_duplicate_input_rejected() {
        assert!(matches!(
            analyze_vendors(&[], &ctx()),
            Err(VendorIntelError::InsufficientData(_))
        ));
        let mut dup = vendors();
        dup.push(dup[0].clone());
        assert!(matches!(
            analyze_vendors(&dup, &ctx()),
            Err(VendorIntelError::InvalidInput { .. })
        ));
    }
}
