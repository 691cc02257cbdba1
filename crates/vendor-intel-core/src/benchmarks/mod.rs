//! Compiled-in reference tables.
//!
//! Everything here is immutable process-wide data. Lookups are
//! case-insensitive on the tag and never fail: callers get `None` and take
//! their own fallback branch.

pub mod company;
pub mod industry;
pub mod sector;

pub use company::{company_profile, CompanyOperationalProfile};
pub use industry::{industry_benchmark, IndustryBenchmark, DEFAULT_INDUSTRY};
pub use sector::{sector_weather_profile, SectorWeatherProfile, SensitivityLevel, WeatherEventKind};

/// Normalise a sector / industry / symbol tag for table lookups.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}
