pub mod dashboard;

pub use dashboard::{analyze_vendor, analyze_vendors, VendorAnalysis, VendorIntelligenceReport};
