use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use vendor_intel_core::weather::SimulationContext;
use vendor_intel_core::VendorRecord;

use super::sample::sample_vendors;
use crate::input;

/// Where the vendor records come from.
#[derive(Args, Debug, Clone)]
#[command(allow_hyphen_values = true)]
pub struct VendorArgs {
    /// Path to JSON input: one vendor record, an array of records, or {"vendors": [...]}
    #[arg(long)]
    pub input: Option<String>,

    /// Use the built-in demo vendor set (DD, CE, LYB, TEL, ST)
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Ticker symbol (single-vendor mode)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Company name
    #[arg(long)]
    pub name: Option<String>,

    /// Market capitalisation in currency units
    #[arg(long)]
    pub market_cap: Option<Decimal>,

    /// Price / earnings ratio (0 when not available)
    #[arg(long)]
    pub pe_ratio: Option<Decimal>,

    /// EBITDA in currency units (may be negative)
    #[arg(long)]
    pub ebitda: Option<Decimal>,
}

/// Simulation date and seed.
#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    /// Random seed; reuse a reported seed to replay a run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub as_of: Option<String>,
}

impl SimulationArgs {
    pub fn context(&self) -> Result<SimulationContext, Box<dyn std::error::Error>> {
        let ctx = SimulationContext::resolve(self.as_of.as_deref(), self.seed)?;
        tracing::info!(seed = ctx.seed, as_of = %ctx.as_of, "simulation context");
        Ok(ctx)
    }
}

/// Resolve the vendor collection from sample, file, flags or stdin.
pub fn load_vendors(args: &VendorArgs) -> Result<Vec<VendorRecord>, Box<dyn std::error::Error>> {
    if args.sample {
        return Ok(sample_vendors());
    }
    if args.input.is_none() && args.symbol.is_some() {
        return Ok(vec![from_flags(args)?]);
    }
    match input::read_input(args.input.as_deref())? {
        Some(value) => parse_vendors(value),
        None => Err("--input <file.json>, --sample, --symbol <TICKER> or stdin required".into()),
    }
}

fn from_flags(args: &VendorArgs) -> Result<VendorRecord, Box<dyn std::error::Error>> {
    let symbol = args.symbol.clone().unwrap_or_default();
    let name = args.name.clone().unwrap_or_else(|| symbol.clone());
    let market_cap = args.market_cap.ok_or("--market-cap required with --symbol")?;
    let record = VendorRecord::new(
        symbol,
        name,
        market_cap,
        args.pe_ratio.unwrap_or(Decimal::ZERO),
        args.ebitda.unwrap_or(Decimal::ZERO),
    )?;
    Ok(record)
}

fn parse_vendors(value: Value) -> Result<Vec<VendorRecord>, Box<dyn std::error::Error>> {
    let records: Vec<VendorRecord> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(ref map) if map.contains_key("vendors") => {
            serde_json::from_value(map["vendors"].clone())?
        }
        Value::Object(_) => vec![serde_json::from_value(value)?],
        _ => return Err("Vendor input must be a JSON object or array".into()),
    };
    if records.is_empty() {
        return Err("Vendor input contains no records".into());
    }
    let mut vendors = Vec::with_capacity(records.len());
    for r in records {
        vendors.push(VendorRecord::new(r.symbol, r.name, r.market_cap, r.pe_ratio, r.ebitda)?);
    }
    Ok(vendors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_single_and_wrapped() {
        let one = json!({"symbol": "dd", "name": "DuPont", "market_cap": "1000", "pe_ratio": "0", "ebitda": "-5"});
        let parsed = parse_vendors(one.clone()).unwrap();
        assert_eq!(parsed[0].symbol, "DD");
        assert_eq!(parsed[0].ebitda, dec!(-5));

        let wrapped = json!({"vendors": [one.clone(), one]});
        assert_eq!(parse_vendors(wrapped).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_rejects_empty_and_invalid() {
        assert!(parse_vendors(json!([])).is_err());
        assert!(parse_vendors(json!(42)).is_err());
        let negative = json!({"symbol": "X", "name": "X", "market_cap": "-1", "pe_ratio": "0", "ebitda": "0"});
        assert!(parse_vendors(negative).is_err());
    }

    #[test]
    fn test_sample_flag() {
        let args = VendorArgs {
            input: None,
            sample: true,
            symbol: None,
            name: None,
            market_cap: None,
            pe_ratio: None,
            ebitda: None,
        };
        let vendors = load_vendors(&args).unwrap();
        assert_eq!(vendors.len(), 5);
        assert!(vendors.iter().all(|v| v.validate().is_ok()));
    }

    #[test]
    fn test_single_vendor_flags() {
        let args = VendorArgs {
            input: None,
            sample: false,
            symbol: Some("tel".into()),
            name: None,
            market_cap: Some(dec!(45_000_000_000)),
            pe_ratio: Some(dec!(22)),
            ebitda: None,
        };
        let vendors = load_vendors(&args).unwrap();
        assert_eq!(vendors[0].symbol, "TEL");
        assert_eq!(vendors[0].name, "tel");
        assert_eq!(vendors[0].ebitda, Decimal::ZERO);
    }
}
