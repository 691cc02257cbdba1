pub mod benchmarks;
pub mod error;
pub mod metrics;
pub mod types;
pub mod vendor;

#[cfg(feature = "scoring")]
pub mod scoring;

#[cfg(feature = "alerts")]
pub mod alerts;

#[cfg(feature = "peers")]
pub mod peers;

#[cfg(feature = "weather")]
pub mod weather;

#[cfg(feature = "analysis")]
pub mod analysis;

pub use error::VendorIntelError;
pub use types::*;
pub use vendor::VendorRecord;

/// Standard result type for all vendor-intel operations
pub type VendorIntelResult<T> = Result<T, VendorIntelError>;
