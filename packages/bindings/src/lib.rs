use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use vendor_intel_core::peers::classifier::benchmark_for;
use vendor_intel_core::weather::SimulationContext;
use vendor_intel_core::VendorRecord;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Normalise the symbol and check record preconditions.
fn revalidate(r: VendorRecord) -> NapiResult<VendorRecord> {
    VendorRecord::new(r.symbol, r.name, r.market_cap, r.pe_ratio, r.ebitda).map_err(to_napi_error)
}

fn parse_vendor(input_json: &str) -> NapiResult<VendorRecord> {
    let raw: VendorRecord = serde_json::from_str(input_json).map_err(to_napi_error)?;
    revalidate(raw)
}

fn validated(vendors: Vec<VendorRecord>) -> NapiResult<Vec<VendorRecord>> {
    vendors.into_iter().map(revalidate).collect()
}

#[derive(Deserialize)]
struct SimulationInput {
    #[serde(default)]
    as_of: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
}

impl SimulationInput {
    fn context(&self) -> NapiResult<SimulationContext> {
        SimulationContext::resolve(self.as_of.as_deref(), self.seed).map_err(to_napi_error)
    }
}

// ---------------------------------------------------------------------------
// Metrics & scoring
// ---------------------------------------------------------------------------

#[napi]
pub fn derive_metrics(vendor_json: String) -> NapiResult<String> {
    let vendor = parse_vendor(&vendor_json)?;
    let output = vendor_intel_core::metrics::derivation::derive_metrics(&vendor);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn score_contract_readiness(vendor_json: String) -> NapiResult<String> {
    let vendor = parse_vendor(&vendor_json)?;
    let output = vendor_intel_core::scoring::readiness::score_contract_readiness(&vendor);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn classify_weather_exposure(vendor_json: String) -> NapiResult<String> {
    let vendor = parse_vendor(&vendor_json)?;
    let output = vendor_intel_core::scoring::exposure::classify_weather_exposure(&vendor);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn rank_sales_opportunity(vendor_json: String) -> NapiResult<String> {
    let vendor = parse_vendor(&vendor_json)?;
    let output = vendor_intel_core::scoring::opportunity::rank_sales_opportunity(&vendor);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Alerts & peers
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_financial_alerts(vendor_json: String) -> NapiResult<String> {
    let vendor = parse_vendor(&vendor_json)?;
    let output = vendor_intel_core::alerts::financial::generate_financial_alerts(&vendor);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn generate_portfolio_alerts(vendors_json: String) -> NapiResult<String> {
    let raw: Vec<VendorRecord> = serde_json::from_str(&vendors_json).map_err(to_napi_error)?;
    let vendors = validated(raw)?;
    let output = vendor_intel_core::alerts::financial::generate_portfolio_alerts(&vendors);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_to_peers(vendor_json: String) -> NapiResult<String> {
    let vendor = parse_vendor(&vendor_json)?;
    let output = vendor_intel_core::peers::comparison::compare_to_peers(&vendor);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct WeatherRiskInput {
    vendor: VendorRecord,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(flatten)]
    simulation: SimulationInput,
}

#[napi]
pub fn calculate_weather_risk(input_json: String) -> NapiResult<String> {
    let input: WeatherRiskInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let vendor = revalidate(input.vendor)?;
    let ctx = input.simulation.context()?;
    let benchmark = benchmark_for(&vendor);
    let output = vendor_intel_core::weather::risk::calculate_weather_risk(
        &vendor,
        input.sector.as_deref().unwrap_or(benchmark.sector),
        input.industry.as_deref().unwrap_or(benchmark.industry),
        &mut ctx.rng(),
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct WeatherEventsInput {
    symbol: String,
    sector: String,
    #[serde(default)]
    industry: String,
    #[serde(flatten)]
    simulation: SimulationInput,
}

#[napi]
pub fn simulate_weather_events(input_json: String) -> NapiResult<String> {
    let input: WeatherEventsInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let ctx = input.simulation.context()?;
    let output = vendor_intel_core::weather::events::simulate_weather_events(
        &input.symbol,
        &input.sector,
        &input.industry,
        ctx.as_of,
        &mut ctx.rng(),
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct PortfolioInput {
    vendors: Vec<VendorRecord>,
    #[serde(flatten)]
    simulation: SimulationInput,
}

#[napi]
pub fn generate_insights(input_json: String) -> NapiResult<String> {
    let input: PortfolioInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let ctx = input.simulation.context()?;
    let vendors = validated(input.vendors)?;
    let output = serde_json::json!({
        "insights": vendor_intel_core::weather::insights::generate_insights(&vendors, ctx.as_of),
        "climate_scenarios": vendor_intel_core::weather::insights::generate_climate_scenarios(&vendors),
    });
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Dashboard & sanitizing
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_vendors(input_json: String) -> NapiResult<String> {
    let input: PortfolioInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let ctx = input.simulation.context()?;
    let vendors = validated(input.vendors)?;
    let output = vendor_intel_core::analysis::dashboard::analyze_vendors(&vendors, &ctx)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sanitize_overview(raw_json: String) -> NapiResult<String> {
    let output = vendor_intel_core::vendor::sanitize_overview_json(&raw_json).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
