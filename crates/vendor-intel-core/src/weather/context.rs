use chrono::{Datelike, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::VendorIntelError;
use crate::VendorIntelResult;

/// Calendar anchor and random seed for one simulation run.
///
/// Passing the same context twice reproduces the same synthetic data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationContext {
    pub as_of: NaiveDate,
    pub seed: u64,
}

impl SimulationContext {
    pub fn new(as_of: NaiveDate, seed: u64) -> Self {
        Self { as_of, seed }
    }

    /// Build a context from optional overrides, defaulting to today and a
    /// wall-clock seed.
    pub fn resolve(as_of: Option<&str>, seed: Option<u64>) -> VendorIntelResult<Self> {
        let as_of = match as_of {
            Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
                VendorIntelError::DateError(format!("as_of '{s}' is not YYYY-MM-DD: {e}"))
            })?,
            None => Utc::now().date_naive(),
        };
        let seed = seed.unwrap_or_else(wall_clock_seed);
        Ok(Self { as_of, seed })
    }

    pub fn month(&self) -> u32 {
        self.as_of.month()
    }

    pub fn season(&self) -> Season {
        Season::from_month(self.month())
    }

    /// Fresh generator for this context's seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

fn wall_clock_seed() -> u64 {
    let now = Utc::now();
    (now.timestamp() as u64).wrapping_mul(1_000_000_000) ^ u64::from(now.timestamp_subsec_nanos())
}

/// Meteorological season (northern hemisphere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winter => write!(f, "winter"),
            Self::Spring => write!(f, "spring"),
            Self::Summer => write!(f, "summer"),
            Self::Autumn => write!(f, "autumn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_resolve_explicit() {
        let ctx = SimulationContext::resolve(Some("2025-09-14"), Some(7)).unwrap();
        assert_eq!(ctx.month(), 9);
        assert_eq!(ctx.season(), Season::Autumn);
        assert_eq!(ctx.seed, 7);
    }

    #[test]
    fn test_resolve_bad_date() {
        let err = SimulationContext::resolve(Some("14/09/2025"), None).unwrap_err();
        assert!(matches!(err, VendorIntelError::DateError(_)));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let ctx = SimulationContext::resolve(Some("2025-01-01"), Some(42)).unwrap();
        let a: Vec<u32> = (0..5).map(|_| ctx.rng().gen_range(0..1000)).collect();
        let mut r1 = ctx.rng();
        let mut r2 = ctx.rng();
        let b: Vec<u32> = (0..5).map(|_| r1.gen_range(0..1000)).collect();
        let c: Vec<u32> = (0..5).map(|_| r2.gen_range(0..1000)).collect();
        assert_eq!(b, c);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_seasons() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
    }
}
