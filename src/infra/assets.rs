//! Bundled rate data, embedded into the binary.

use std::sync::OnceLock;

use rust_embed::RustEmbed;

use crate::domain::RateTable;

/// Embed the entire `data/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "data"]
struct EmbeddedData;

const RATES_2025_FILE: &str = "rates_2025.json";

static RATES_2025: OnceLock<RateTable> = OnceLock::new();

/// Returns the bundled 2025 Nigerian construction rate table: 3 finish
/// rates, 5 location multipliers, and 12 material prices.
pub fn bundled_rates_2025() -> &'static RateTable {
    RATES_2025.get_or_init(|| load_rate_table(RATES_2025_FILE))
}

fn load_rate_table(path: &str) -> RateTable {
    let asset = EmbeddedData::get(path)
        .unwrap_or_else(|| panic!("Failed to locate embedded data file: {path}"));
    serde_json::from_slice(asset.data.as_ref())
        .unwrap_or_else(|e| panic!("Embedded data file {path} is not a valid rate table: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Finish, Location};

    #[test]
    fn bundled_table_parses_and_covers_all_keys() {
        let table = bundled_rates_2025();
        for finish in [Finish::Basic, Finish::Medium, Finish::Luxury] {
            assert!(table.construction_rate(finish).is_ok());
        }
        for location in [
            Location::Lagos,
            Location::Abuja,
            Location::PortHarcourt,
            Location::Enugu,
            Location::Rural,
        ] {
            assert!(table.location_multiplier(location).is_ok());
        }
        assert_eq!(table.material_prices.len(), 12);
    }

    #[test]
    fn bundled_table_matches_2025_seed_figures() {
        let table = bundled_rates_2025();
        assert_eq!(table.construction_rate(Finish::Medium).unwrap(), 242_190.0);
        assert_eq!(table.location_multiplier(Location::Lagos).unwrap(), 1.25);
        assert_eq!(table.material_price("SAND").unwrap().unit_price(), 2_250.0);
        assert_eq!(table.material_price("CEMENT").unwrap().unit_price(), 8_500.0);
    }
}
