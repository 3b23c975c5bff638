//! Rate table snapshot: construction rates, location multipliers, and
//! material unit prices.
//!
//! A `RateTable` is loaded fresh per estimation call and is read-only for
//! the duration of that call. A missing entry is a configuration problem
//! and surfaces as [`UnknownRateKey`] instead of silently substituting a
//! default rate.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Finish, Location};

/// Which section of the rate table a failed lookup was against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateKind {
    Finish,
    Location,
    Material,
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RateKind::Finish => "finish",
            RateKind::Location => "location",
            RateKind::Material => "material",
        };
        f.write_str(label)
    }
}

/// A required rate table entry is absent.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no {kind} rate configured for key {key}")]
pub struct UnknownRateKey {
    pub kind: RateKind,
    pub key: String,
}

impl UnknownRateKey {
    fn new(kind: RateKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }
}

/// Price of one material as stored in the table.
///
/// `price` is per lot; some materials are quoted per bulk lot (sand per
/// 20-tonne load, granite per 30-tonne load), which `units_per_lot`
/// records so the per-unit price stays an explicit conversion instead of
/// a buried divisor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialPrice {
    /// Unit the quantity is measured in (e.g., "50kg bags", "tonnes").
    pub unit: String,
    /// Price per lot in NGN.
    pub price: f64,
    /// How many quantity units one priced lot contains.
    #[serde(default = "default_units_per_lot")]
    pub units_per_lot: f64,
}

fn default_units_per_lot() -> f64 {
    1.0
}

impl MaterialPrice {
    /// Price of a single quantity unit.
    pub fn unit_price(&self) -> f64 {
        self.price / self.units_per_lot
    }
}

/// Read-only snapshot of all rates an estimation call needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base construction rate per m², keyed by finish level.
    pub construction_rates: HashMap<Finish, f64>,
    /// Regional cost multiplier, keyed by location.
    pub location_multipliers: HashMap<Location, f64>,
    /// Material prices keyed by material code (e.g., "CEMENT").
    pub material_prices: HashMap<String, MaterialPrice>,
}

impl RateTable {
    /// Base construction rate per m² for a finish level.
    pub fn construction_rate(&self, finish: Finish) -> Result<f64, UnknownRateKey> {
        self.construction_rates
            .get(&finish)
            .copied()
            .ok_or_else(|| UnknownRateKey::new(RateKind::Finish, finish.key()))
    }

    /// Regional multiplier for a location.
    pub fn location_multiplier(&self, location: Location) -> Result<f64, UnknownRateKey> {
        self.location_multipliers
            .get(&location)
            .copied()
            .ok_or_else(|| UnknownRateKey::new(RateKind::Location, location.key()))
    }

    /// Resolved cost per m²: base rate × location multiplier.
    pub fn base_cost_per_sqm(
        &self,
        finish: Finish,
        location: Location,
    ) -> Result<f64, UnknownRateKey> {
        let rate = self.construction_rate(finish)?;
        let multiplier = self.location_multiplier(location)?;
        Ok(rate * multiplier)
    }

    /// Price entry for a material code.
    pub fn material_price(&self, key: &str) -> Result<&MaterialPrice, UnknownRateKey> {
        self.material_prices
            .get(key)
            .ok_or_else(|| UnknownRateKey::new(RateKind::Material, key))
    }

    /// Updates the lot price of an existing material. Edits are visible to
    /// the next estimation call that loads this table; calls already
    /// holding a snapshot are unaffected.
    pub fn set_material_price(&mut self, key: &str, price: f64) -> Result<(), UnknownRateKey> {
        let entry = self
            .material_prices
            .get_mut(key)
            .ok_or_else(|| UnknownRateKey::new(RateKind::Material, key))?;
        entry.price = price;
        Ok(())
    }
}
