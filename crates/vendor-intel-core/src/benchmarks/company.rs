//! Operating footprints for tracked tickers: regions, peak months and weather vulnerabilities.

use serde::Serialize;

use super::normalize_key;
use super::sector::WeatherEventKind;

/// Known operating footprint of a tracked vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanyOperationalProfile {
    pub symbol: &'static str,
    pub regions: &'static [&'static str],
    pub facility_types: &'static [&'static str],
    /// Calendar months (1-12) of peak operating load.
    pub peak_months: &'static [u32],
    pub vulnerabilities: &'static [WeatherEventKind],
}

impl CompanyOperationalProfile {
    pub fn is_peak_month(&self, month: u32) -> bool {
        self.peak_months.contains(&month)
    }
}

const COMPANY_PROFILES: &[CompanyOperationalProfile] = &[
    CompanyOperationalProfile {
        symbol: "DD",
        regions: &["Delaware", "Texas Gulf Coast", "Virginia"],
        facility_types: &["specialty chemical plant", "R&D campus"],
        peak_months: &[7, 8, 9],
        vulnerabilities: &[
            WeatherEventKind::Hurricane,
            WeatherEventKind::WinterStorm,
            WeatherEventKind::Flood,
        ],
    },
    CompanyOperationalProfile {
        symbol: "CE",
        regions: &["Texas Gulf Coast", "Kentucky", "South Carolina"],
        facility_types: &["acetyl chain complex", "engineered materials plant"],
        peak_months: &[6, 7, 8, 9],
        vulnerabilities: &[
            WeatherEventKind::Hurricane,
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::Flood,
        ],
    },
    CompanyOperationalProfile {
        symbol: "LYB",
        regions: &["Houston Ship Channel", "Louisiana", "Channelview, TX"],
        facility_types: &["olefins cracker", "refinery", "polymer plant"],
        peak_months: &[8, 9, 10],
        vulnerabilities: &[
            WeatherEventKind::Hurricane,
            WeatherEventKind::Flood,
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::WinterStorm,
        ],
    },
    CompanyOperationalProfile {
        symbol: "DOW",
        regions: &["Freeport, TX", "Louisiana", "Midland, MI"],
        facility_types: &["integrated cracker complex", "polyethylene plant"],
        peak_months: &[8, 9],
        vulnerabilities: &[
            WeatherEventKind::Hurricane,
            WeatherEventKind::WinterStorm,
            WeatherEventKind::Flood,
        ],
    },
    CompanyOperationalProfile {
        symbol: "TEL",
        regions: &["Pennsylvania", "North Carolina", "Guadalajara, MX"],
        facility_types: &["connector plant", "distribution center"],
        peak_months: &[1, 2, 12],
        vulnerabilities: &[WeatherEventKind::WinterStorm, WeatherEventKind::Flood],
    },
    CompanyOperationalProfile {
        symbol: "ST",
        regions: &["Massachusetts", "Aguascalientes, MX", "Michigan"],
        facility_types: &["sensor fab", "assembly plant"],
        peak_months: &[1, 2],
        vulnerabilities: &[
            WeatherEventKind::WinterStorm,
            WeatherEventKind::ExtremeHeat,
            WeatherEventKind::Tornado,
        ],
    },
];

pub fn company_profile(symbol: &str) -> Option<&'static CompanyOperationalProfile> {
    let key = normalize_key(symbol);
    COMPANY_PROFILES.iter().find(|p| p.symbol == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup() {
        let lyb = company_profile("lyb").unwrap();
        assert!(lyb.is_peak_month(9));
        assert!(!lyb.is_peak_month(3));
        assert!(company_profile("AAPL").is_none());
    }

    #[test]
    fn test_peak_months_are_calendar_months() {
        for p in COMPANY_PROFILES {
            assert!(p.peak_months.iter().all(|m| (1..=12).contains(m)), "{}", p.symbol);
            assert!(!p.regions.is_empty());
        }
    }
}
