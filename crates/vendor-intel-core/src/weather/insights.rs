//! Portfolio narrative insights and climate scenarios.
//!
//! Vendors are grouped into affinity buckets by ticker allow-list. Each
//! non-empty bucket contributes templated insights, followed by one
//! portfolio-wide insight. Impact and confidence figures derive from the
//! bucket leader (largest market cap), the summed market cap, the bucket
//! size, and the season of the as-of month.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::context::Season;
use crate::metrics::derivation::to_billions;
use crate::types::{clamp, sum_money, Money, Rate, Score};
use crate::vendor::VendorRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffinityBucket {
    ChemicalsPlastics,
    SensorsConnectivity,
    Other,
}

impl AffinityBucket {
    pub fn of(symbol: &str) -> Self {
        let symbol = symbol.trim().to_uppercase();
        if CHEMICALS_PLASTICS.contains(&symbol.as_str()) {
            Self::ChemicalsPlastics
        } else if SENSORS_CONNECTIVITY.contains(&symbol.as_str()) {
            Self::SensorsConnectivity
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for AffinityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChemicalsPlastics => write!(f, "Chemicals & Plastics"),
            Self::SensorsConnectivity => write!(f, "Sensors & Connectivity"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Opportunity,
    Risk,
    Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// Signed dollar impact.
    pub impact: Money,
    pub confidence: Score,
    pub advantage: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioTimeframe {
    NextSixMonths,
    NextTwelveMonths,
    NextTwentyFourMonths,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateScenario {
    pub name: String,
    /// Likelihood in percent.
    pub probability: Score,
    pub timeframe: ScenarioTimeframe,
    /// Signed dollar impact; scenarios are losses.
    pub expected_impact: Money,
    pub mitigation_strategies: Vec<String>,
}

/// Aggregate view of one affinity bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub bucket: AffinityBucket,
    pub symbols: Vec<String>,
    /// Symbol of the largest vendor by market cap.
    pub leader: String,
    pub leader_market_cap: Money,
    pub total_market_cap: Money,
}

impl BucketSummary {
    pub fn size(&self) -> usize {
        self.symbols.len()
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CHEMICALS_PLASTICS: &[&str] = &["DD", "CE", "LYB", "DOW", "EMN"];
pub const SENSORS_CONNECTIVITY: &[&str] = &["TEL", "ST", "APH", "GLW"];

const MAX_CONFIDENCE: Decimal = dec!(95);
const MAX_PORTFOLIO_BREADTH_BONUS: Decimal = dec!(15);

const HURRICANE_SCENARIO_RATE: Rate = dec!(0.015);
const POLAR_VORTEX_SCENARIO_RATE: Rate = dec!(0.008);
const HEAT_DOME_SCENARIO_RATE: Rate = dec!(0.005);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Non-empty buckets in fixed order: chemicals, sensors, other.
pub fn group_by_affinity(vendors: &[VendorRecord]) -> Vec<BucketSummary> {
    [
        AffinityBucket::ChemicalsPlastics,
        AffinityBucket::SensorsConnectivity,
        AffinityBucket::Other,
    ]
    .into_iter()
    .filter_map(|bucket| {
        let members: Vec<&VendorRecord> =
            vendors.iter().filter(|v| AffinityBucket::of(&v.symbol) == bucket).collect();
        summarize(bucket, &members)
    })
    .collect()
}

/// Narrative insights for a vendor collection as of a date.
pub fn generate_insights(vendors: &[VendorRecord], as_of: NaiveDate) -> Vec<Insight> {
    let season = Season::from_month(as_of.month());
    let mut insights = Vec::new();

    for summary in group_by_affinity(vendors) {
        match summary.bucket {
            AffinityBucket::ChemicalsPlastics => insights.extend(chemicals_insights(&summary, season)),
            AffinityBucket::SensorsConnectivity => insights.push(sensors_insight(&summary, season)),
            AffinityBucket::Other => insights.push(other_insight(&summary)),
        }
    }

    let all: Vec<&VendorRecord> = vendors.iter().collect();
    if let Some(portfolio) = summarize(AffinityBucket::Other, &all) {
        insights.push(portfolio_insight(&portfolio, season));
    }
    insights
}

/// Zero to three stress scenarios driven by bucket presence.
pub fn generate_climate_scenarios(vendors: &[VendorRecord]) -> Vec<ClimateScenario> {
    let buckets = group_by_affinity(vendors);
    let cap_of = |b: AffinityBucket| {
        buckets
            .iter()
            .find(|s| s.bucket == b)
            .map(|s| s.total_market_cap)
    };
    let chemicals = cap_of(AffinityBucket::ChemicalsPlastics);
    let sensors = cap_of(AffinityBucket::SensorsConnectivity);

    let mut scenarios = Vec::new();
    if let Some(cap) = chemicals {
        scenarios.push(ClimateScenario {
            name: "Intensified Gulf Coast hurricane season".into(),
            probability: dec!(35),
            timeframe: ScenarioTimeframe::NextTwelveMonths,
            expected_impact: -(cap * HURRICANE_SCENARIO_RATE).round_dp(0),
            mitigation_strategies: strategies(&[
                "Pre-position inventory at inland distribution hubs",
                "Qualify secondary resin suppliers outside the Gulf Coast",
                "Trigger procurement on 5-day storm-track forecasts",
            ]),
        });
    }
    if let Some(cap) = sensors {
        scenarios.push(ClimateScenario {
            name: "Polar vortex supply-chain freeze".into(),
            probability: dec!(25),
            timeframe: ScenarioTimeframe::NextSixMonths,
            expected_impact: -(cap * POLAR_VORTEX_SCENARIO_RATE).round_dp(0),
            mitigation_strategies: strategies(&[
                "Build two weeks of component safety stock before January",
                "Pre-book expedited freight lanes that avoid the Great Lakes corridor",
                "Shift final assembly to southern facilities during freeze warnings",
            ]),
        });
    }
    if let (Some(c), Some(s)) = (chemicals, sensors) {
        scenarios.push(ClimateScenario {
            name: "Prolonged North American heat dome".into(),
            probability: dec!(20),
            timeframe: ScenarioTimeframe::NextTwentyFourMonths,
            expected_impact: -(c.saturating_add(s) * HEAT_DOME_SCENARIO_RATE).round_dp(0),
            mitigation_strategies: strategies(&[
                "Negotiate heat-curtailment clauses into supply contracts",
                "Monitor grid stress forecasts for plant power derates",
            ]),
        });
    }
    scenarios
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn summarize(bucket: AffinityBucket, members: &[&VendorRecord]) -> Option<BucketSummary> {
    let leader = members.iter().max_by(|a, b| a.market_cap.cmp(&b.market_cap))?;
    Some(BucketSummary {
        bucket,
        symbols: members.iter().map(|v| v.symbol.clone()).collect(),
        leader: leader.symbol.clone(),
        leader_market_cap: leader.market_cap,
        total_market_cap: sum_money(members.iter().map(|v| v.market_cap)),
    })
}

fn confidence(base: Decimal, per_vendor: Decimal, size: usize) -> Score {
    clamp(Decimal::ZERO, MAX_CONFIDENCE, base + per_vendor * Decimal::from(size))
}

fn billions(amount: Money) -> Decimal {
    to_billions(amount).round_dp(1)
}

fn strategies(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn is_hurricane_season(season: Season) -> bool {
    matches!(season, Season::Summer | Season::Autumn)
}

fn chemicals_insights(summary: &BucketSummary, season: Season) -> Vec<Insight> {
    let n = summary.size();
    let total = summary.total_market_cap;
    let opportunity = if is_hurricane_season(season) {
        Insight {
            kind: InsightKind::Opportunity,
            title: format!("Hurricane-season feedstock hedging for {}", summary.leader),
            description: format!(
                "{n} chemicals & plastics vendor(s) (${}B combined) run Gulf Coast assets through peak hurricane season",
                billions(total)
            ),
            impact: (total * dec!(0.002)).round_dp(0),
            confidence: confidence(dec!(70), dec!(5), n),
            advantage: format!(
                "Storm-track forecasts 5-7 days out let procurement lock in {} volumes before plant shutdowns",
                summary.leader
            ),
        }
    } else {
        Insight {
            kind: InsightKind::Opportunity,
            title: format!("Pre-season hurricane planning with {}", summary.leader),
            description: format!(
                "Off-season window to renegotiate force-majeure terms with {n} Gulf Coast chemical supplier(s)"
            ),
            impact: (total * dec!(0.001)).round_dp(0),
            confidence: confidence(dec!(65), dec!(5), n),
            advantage: "Seasonal outlooks published before June inform contract timing".into(),
        }
    };

    let risk = Insight {
        kind: InsightKind::Risk,
        title: "Gulf Coast production concentration".into(),
        description: format!(
            "{} anchors the chemicals bucket; a single landfall can idle several crackers at once",
            summary.leader
        ),
        impact: -(summary.leader_market_cap * dec!(0.003)).round_dp(0),
        confidence: confidence(dec!(60), dec!(5), n),
        advantage: "Flood-stage river forecasts flag logistics outages before rail embargoes".into(),
    };
    vec![opportunity, risk]
}

fn sensors_insight(summary: &BucketSummary, season: Season) -> Insight {
    let n = summary.size();
    let total = summary.total_market_cap;
    match season {
        Season::Winter | Season::Spring => Insight {
            kind: InsightKind::Risk,
            title: "Winter storm logistics disruption".into(),
            description: format!(
                "{n} sensors & connectivity vendor(s) (${}B combined) ship through freeze-prone northern corridors",
                billions(total)
            ),
            impact: -(total * dec!(0.0015)).round_dp(0),
            confidence: confidence(dec!(72), dec!(4), n),
            advantage: format!(
                "Early freeze warnings allow {} component shipments to be rerouted ahead of closures",
                summary.leader
            ),
        },
        Season::Summer | Season::Autumn => Insight {
            kind: InsightKind::Trend,
            title: "Heat-driven demand for environmental sensing".into(),
            description: format!(
                "Cooling-load and grid monitoring orders lift {} and peers during hot months",
                summary.leader
            ),
            impact: (total * dec!(0.001)).round_dp(0),
            confidence: confidence(dec!(68), dec!(4), n),
            advantage: "Temperature anomaly forecasts lead sensor order books by several weeks".into(),
        },
    }
}

fn other_insight(summary: &BucketSummary) -> Insight {
    let n = summary.size();
    let total = summary.total_market_cap;
    Insight {
        kind: InsightKind::Trend,
        title: format!("Diversified weather exposure across {n} other vendor(s)"),
        description: format!(
            "{} leads a mixed group (${}B combined) with uncorrelated regional weather risk",
            summary.leader,
            billions(total)
        ),
        impact: (total * dec!(0.0005)).round_dp(0),
        confidence: confidence(dec!(60), dec!(3), n),
        advantage: "Regional forecasts can be monitored per vendor without portfolio-wide hedges".into(),
    }
}

fn portfolio_insight(summary: &BucketSummary, season: Season) -> Insight {
    let n = summary.size();
    let total = summary.total_market_cap;
    let factor = match season {
        Season::Summer => dec!(1.5),
        Season::Autumn => dec!(1.3),
        Season::Winter => dec!(1.2),
        Season::Spring => dec!(1.0),
    };
    let confidence = clamp(
        Decimal::ZERO,
        MAX_CONFIDENCE,
        dec!(75) + clamp(Decimal::ZERO, MAX_PORTFOLIO_BREADTH_BONUS, dec!(2) * Decimal::from(n)),
    );
    Insight {
        kind: InsightKind::Trend,
        title: format!("Portfolio-wide {season} weather correlation"),
        description: format!(
            "{n} tracked vendor(s) worth ${}B share {season} weather drivers; {} carries the largest exposure",
            billions(total),
            summary.leader
        ),
        impact: (total * dec!(0.0008) * factor).round_dp(0),
        confidence,
        advantage: "Forecast-led purchasing turns seasonal weather into negotiating leverage".into(),
    }
}
