//! Weather exposure classification.
//!
//! The base score comes from the first rule in [`EXPOSURE_RULES`] whose
//! keywords appear in the vendor name or whose ticker allow-list contains
//! the symbol. Rules are evaluated in priority order and only one can
//! contribute. Size and valuation bonuses are added on top.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::metrics::derivation::to_billions;
use crate::scoring::readiness::step_points;
use crate::types::{clamp_score, DisplayColor, Score};
use crate::vendor::VendorRecord;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Exposure tier, ordered from `Minimal` to `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExposureTier {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for ExposureTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimal => write!(f, "Minimal"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Which industry rule produced the base exposure points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureDriver {
    CriticalDependency,
    UtilityEnergy,
    Aviation,
    Logistics,
    Construction,
    ChemicalsIndustrial,
    RetailConsumer,
    InsuranceProperty,
    Manufacturing,
    TechnologyConnectivity,
}

impl std::fmt::Display for ExposureDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CriticalDependency => "Critical weather dependency",
            Self::UtilityEnergy => "Utilities & energy",
            Self::Aviation => "Aviation",
            Self::Logistics => "Logistics & shipping",
            Self::Construction => "Construction",
            Self::ChemicalsIndustrial => "Chemicals & industrial",
            Self::RetailConsumer => "Retail & consumer",
            Self::InsuranceProperty => "Insurance & property",
            Self::Manufacturing => "Manufacturing",
            Self::TechnologyConnectivity => "Technology & connectivity",
        };
        write!(f, "{}", s)
    }
}

/// One entry of the priority-ordered keyword table.
#[derive(Debug, Clone, Copy)]
pub struct ExposureRule {
    pub driver: ExposureDriver,
    /// Lower-case substrings matched against the vendor name.
    pub keywords: &'static [&'static str],
    /// Upper-case tickers that match regardless of name.
    pub tickers: &'static [&'static str],
    pub points: Decimal,
}

impl ExposureRule {
    pub fn matches(&self, vendor: &VendorRecord) -> bool {
        let name = vendor.name.to_lowercase();
        let symbol = vendor.symbol.trim().to_uppercase();
        self.keywords.iter().any(|k| name.contains(k))
            || self.tickers.iter().any(|t| *t == symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherExposureResult {
    pub tier: ExposureTier,
    /// Sales-fit label for the tier ("Core Target" ... "Low Priority").
    pub sector_fit: String,
    pub color: DisplayColor,
    /// Clamped exposure score (0-100).
    pub score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<ExposureDriver>,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Priority-ordered: the first matching rule wins.
pub const EXPOSURE_RULES: &[ExposureRule] = &[
    ExposureRule {
        driver: ExposureDriver::CriticalDependency,
        keywords: &["agricultur", "farm", "crop", "fertiliz", "irrigation"],
        tickers: &[],
        points: dec!(80),
    },
    ExposureRule {
        driver: ExposureDriver::UtilityEnergy,
        keywords: &["utilit", "energy", "power", "electric", "solar", "oil", "gas"],
        tickers: &[],
        points: dec!(75),
    },
    ExposureRule {
        driver: ExposureDriver::Aviation,
        keywords: &["airline", "air lines", "aviation", "airways", "aerospace"],
        tickers: &[],
        points: dec!(70),
    },
    ExposureRule {
        driver: ExposureDriver::Logistics,
        keywords: &["logistics", "shipping", "freight", "transport", "railroad", "trucking"],
        tickers: &[],
        points: dec!(60),
    },
    ExposureRule {
        driver: ExposureDriver::Construction,
        keywords: &["construction", "builders", "cement", "homebuild"],
        tickers: &[],
        points: dec!(55),
    },
    ExposureRule {
        driver: ExposureDriver::ChemicalsIndustrial,
        keywords: &["chemical", "industrial", "plastics", "polymer"],
        tickers: &["DD", "CE", "LYB", "DOW", "EMN"],
        points: dec!(50),
    },
    ExposureRule {
        driver: ExposureDriver::RetailConsumer,
        keywords: &["retail", "stores", "consumer", "foods", "beverage"],
        tickers: &[],
        points: dec!(40),
    },
    ExposureRule {
        driver: ExposureDriver::InsuranceProperty,
        keywords: &["insurance", "reinsurance", "property", "casualty"],
        tickers: &[],
        points: dec!(45),
    },
    ExposureRule {
        driver: ExposureDriver::Manufacturing,
        keywords: &["manufactur"],
        tickers: &[],
        points: dec!(35),
    },
    ExposureRule {
        driver: ExposureDriver::TechnologyConnectivity,
        keywords: &["technolog", "connectivity", "software", "semiconductor", "electronics"],
        tickers: &["TEL", "ST", "APH", "GLW"],
        points: dec!(25),
    },
];

/// (market cap in $bn strictly above, bonus)
const SIZE_BONUS_STEPS: &[(Decimal, Decimal)] = &[
    (dec!(50), dec!(10)),
    (dec!(20), dec!(7)),
    (dec!(5), dec!(5)),
];

const HIGH_PE_FLOOR: Decimal = dec!(25);
const HIGH_PE_BONUS: Decimal = dec!(5);
const LOW_PE_CEILING: Decimal = dec!(10);
const LOW_PE_BONUS: Decimal = dec!(3);

const TIER_BANDS: &[(Decimal, ExposureTier, &str, DisplayColor)] = &[
    (dec!(70), ExposureTier::Critical, "Core Target", DisplayColor::Red),
    (dec!(50), ExposureTier::High, "Strong Fit", DisplayColor::Orange),
    (dec!(30), ExposureTier::Medium, "Good Fit", DisplayColor::Yellow),
    (dec!(15), ExposureTier::Low, "Moderate Fit", DisplayColor::Blue),
];
const FLOOR_TIER: (ExposureTier, &str, DisplayColor) =
    (ExposureTier::Minimal, "Low Priority", DisplayColor::Gray);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify how exposed a vendor's business is to weather variability.
pub fn classify_weather_exposure(vendor: &VendorRecord) -> WeatherExposureResult {
    let rule = matching_rule(vendor);
    let base = rule.map(|r| r.points).unwrap_or(Decimal::ZERO);
    let size_bonus = step_points(to_billions(vendor.market_cap), SIZE_BONUS_STEPS, Decimal::ZERO);
    let pe_bonus = pe_volatility_bonus(vendor.pe_ratio);

    let score = clamp_score(base + size_bonus + pe_bonus);
    let (tier, sector_fit, color) = tier_for_score(score);

    WeatherExposureResult {
        tier,
        sector_fit: sector_fit.to_string(),
        color,
        score,
        driver: rule.map(|r| r.driver),
    }
}

/// The single rule that contributes the base points, if any.
pub fn matching_rule(vendor: &VendorRecord) -> Option<&'static ExposureRule> {
    EXPOSURE_RULES.iter().find(|r| r.matches(vendor))
}

pub fn tier_for_score(score: Score) -> (ExposureTier, &'static str, DisplayColor) {
    TIER_BANDS
        .iter()
        .find(|(min, ..)| score >= *min)
        .map(|(_, tier, label, color)| (*tier, *label, *color))
        .unwrap_or(FLOOR_TIER)
}

fn pe_volatility_bonus(pe: Decimal) -> Decimal {
    if pe > HIGH_PE_FLOOR {
        HIGH_PE_BONUS
    } else if pe > Decimal::ZERO && pe < LOW_PE_CEILING {
        LOW_PE_BONUS
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(symbol: &str, name: &str, market_cap: Decimal, pe_ratio: Decimal) -> VendorRecord {
        VendorRecord {
            symbol: symbol.into(),
            name: name.into(),
            market_cap,
            pe_ratio,
            ebitda: dec!(1_000_000_000),
        }
    }

    #[test]
    fn test_dupont_ticker_rule() {
        let r = classify_weather_exposure(&vendor(
            "DD",
            "DuPont de Nemours Inc",
            dec!(35_600_000_000),
            dec!(14.9),
        ));
        assert_eq!(r.driver, Some(ExposureDriver::ChemicalsIndustrial));
        // 50 base + 7 size
        assert_eq!(r.score, dec!(57));
        assert_eq!(r.tier, ExposureTier::High);
        assert_eq!(r.sector_fit, "Strong Fit");
    }

    #[test]
    fn test_priority_first_match_wins() {
        // "energy" (75) and "chemical" (50) both match; energy is earlier.
        let v = vendor("XYZ", "Energy Chemical Holdings", dec!(1_000_000_000), dec!(20));
        let r = classify_weather_exposure(&v);
        assert_eq!(r.driver, Some(ExposureDriver::UtilityEnergy));
        assert_eq!(r.score, dec!(75));
        assert_eq!(r.tier, ExposureTier::Critical);
    }

    #[test]
    fn test_retail_precedes_insurance() {
        let v = vendor("XYZ", "Consumer Property Insurance Co", dec!(0), dec!(0));
        assert_eq!(matching_rule(&v).unwrap().driver, ExposureDriver::RetailConsumer);
    }

    #[test]
    fn test_no_rule_matches() {
        let r = classify_weather_exposure(&vendor("ZZZ", "Acme Holdings", dec!(1_000_000), dec!(0)));
        assert_eq!(r.driver, None);
        assert_eq!(r.score, dec!(0));
        assert_eq!(r.tier, ExposureTier::Minimal);
        assert_eq!(r.sector_fit, "Low Priority");
    }

    #[test]
    fn test_pe_bonuses() {
        let high = classify_weather_exposure(&vendor("TEL", "TE Connectivity", dec!(0), dec!(30)));
        assert_eq!(high.score, dec!(30));
        let low = classify_weather_exposure(&vendor("TEL", "TE Connectivity", dec!(0), dec!(8)));
        assert_eq!(low.score, dec!(28));
        let none = classify_weather_exposure(&vendor("TEL", "TE Connectivity", dec!(0), dec!(0)));
        assert_eq!(none.score, dec!(25));
    }

    #[test]
    fn test_score_clamped() {
        let v = vendor("AGRI", "Global Agriculture Energy", dec!(900_000_000_000), dec!(40));
        // 80 + 10 + 5 = 95, inside range; tier Critical
        let r = classify_weather_exposure(&v);
        assert!(r.score <= dec!(100));
        assert_eq!(r.tier, ExposureTier::Critical);
    }

    #[test]
    fn test_at_most_one_rule_contributes() {
        let v = vendor("DD", "Industrial Chemical Logistics Technology", dec!(0), dec!(20));
        let matched: Vec<_> = EXPOSURE_RULES.iter().filter(|r| r.matches(&v)).collect();
        assert!(matched.len() > 1);
        let r = classify_weather_exposure(&v);
        assert_eq!(r.score, matched[0].points);
    }
}
