use rust_decimal_macros::dec;
use vendor_intel_core::VendorRecord;

/// Built-in demo vendors: three Gulf Coast chemicals producers and two
/// sensor / connectivity suppliers.
pub fn sample_vendors() -> Vec<VendorRecord> {
    vec![
        VendorRecord {
            symbol: "DD".into(),
            name: "DuPont de Nemours Inc".into(),
            market_cap: dec!(35_600_000_000),
            pe_ratio: dec!(14.9),
            ebitda: dec!(4_100_000_000),
        },
        VendorRecord {
            symbol: "CE".into(),
            name: "Celanese Corp".into(),
            market_cap: dec!(8_900_000_000),
            pe_ratio: dec!(7.6),
            ebitda: dec!(2_100_000_000),
        },
        VendorRecord {
            symbol: "LYB".into(),
            name: "LyondellBasell Industries NV".into(),
            market_cap: dec!(25_400_000_000),
            pe_ratio: dec!(13.8),
            ebitda: dec!(4_500_000_000),
        },
        VendorRecord {
            symbol: "TEL".into(),
            name: "TE Connectivity Ltd".into(),
            market_cap: dec!(45_100_000_000),
            pe_ratio: dec!(23.5),
            ebitda: dec!(3_900_000_000),
        },
        VendorRecord {
            symbol: "ST".into(),
            name: "Sensata Technologies Holding plc".into(),
            market_cap: dec!(5_200_000_000),
            pe_ratio: dec!(24.8),
            ebitda: dec!(950_000_000),
        },
    ]
}
