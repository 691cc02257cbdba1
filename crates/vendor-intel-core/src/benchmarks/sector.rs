//! Sector-level weather sensitivity baselines.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::normalize_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherEventKind {
    Hurricane,
    WinterStorm,
    ExtremeHeat,
    Flood,
    Drought,
    Tornado,
}

impl std::fmt::Display for WeatherEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hurricane => write!(f, "Hurricane"),
            Self::WinterStorm => write!(f, "Winter Storm"),
            Self::ExtremeHeat => write!(f, "Extreme Heat"),
            Self::Flood => write!(f, "Flood"),
            Self::Drought => write!(f, "Drought"),
            Self::Tornado => write!(f, "Tornado"),
        }
    }
}

/// Weather-sensitivity baseline for a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorWeatherProfile {
    pub sector: &'static str,
    pub sensitivity: SensitivityLevel,
    /// Baseline correlation of revenue with weather (0-1).
    pub base_correlation: Decimal,
    /// Most material risks first.
    pub primary_risks: &'static [WeatherEventKind],
    pub seasonal_variance: Decimal,
}

const SECTOR_PROFILES: &[SectorWeatherProfile] = &[
    SectorWeatherProfile {
        sector: "BASIC MATERIALS",
        sensitivity: SensitivityLevel::High,
        base_correlation: dec!(0.72),
        primary_risks: &[
            WeatherEventKind::Hurricane,
            WeatherEventKind::Flood,
            WeatherEventKind::ExtremeHeat,
        ],
        seasonal_variance: dec!(0.35),
    },
    SectorWeatherProfile {
        sector: "TECHNOLOGY",
        sensitivity: SensitivityLevel::Medium,
        base_correlation: dec!(0.45),
        primary_risks: &[
            WeatherEventKind::WinterStorm,
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::Flood,
        ],
        seasonal_variance: dec!(0.20),
    },
    SectorWeatherProfile {
        sector: "INDUSTRIALS",
        sensitivity: SensitivityLevel::Medium,
        base_correlation: dec!(0.55),
        primary_risks: &[
            WeatherEventKind::WinterStorm,
            WeatherEventKind::Flood,
            WeatherEventKind::Tornado,
        ],
        seasonal_variance: dec!(0.25),
    },
    SectorWeatherProfile {
        sector: "ENERGY",
        sensitivity: SensitivityLevel::High,
        base_correlation: dec!(0.80),
        primary_risks: &[
            WeatherEventKind::Hurricane,
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::WinterStorm,
        ],
        seasonal_variance: dec!(0.40),
    },
    SectorWeatherProfile {
        sector: "UTILITIES",
        sensitivity: SensitivityLevel::High,
        base_correlation: dec!(0.85),
        primary_risks: &[
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::WinterStorm,
            WeatherEventKind::Hurricane,
        ],
        seasonal_variance: dec!(0.45),
    },
    SectorWeatherProfile {
        sector: "CONSUMER DEFENSIVE",
        sensitivity: SensitivityLevel::Medium,
        base_correlation: dec!(0.50),
        primary_risks: &[
            WeatherEventKind::Drought,
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::Flood,
        ],
        seasonal_variance: dec!(0.30),
    },
];

pub fn sector_weather_profile(sector: &str) -> Option<&'static SectorWeatherProfile> {
    let key = normalize_key(sector);
    SECTOR_PROFILES.iter().find(|p| p.sector == key)
}

pub fn all_sector_profiles() -> &'static [SectorWeatherProfile] {
    SECTOR_PROFILES
}
