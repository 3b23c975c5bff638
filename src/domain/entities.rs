//! Core entities for construction cost estimation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest building area accepted by the estimator, in m².
pub const MIN_AREA_SQM: f64 = 10.0;
/// Largest building area accepted by the estimator, in m².
pub const MAX_AREA_SQM: f64 = 10_000.0;

/// Region the building is sited in. Drives the location multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    Lagos,
    Abuja,
    PortHarcourt,
    Enugu,
    Rural,
}

impl Location {
    /// Rate table key for this location (e.g., "PORT_HARCOURT").
    pub fn key(&self) -> &'static str {
        match self {
            Location::Lagos => "LAGOS",
            Location::Abuja => "ABUJA",
            Location::PortHarcourt => "PORT_HARCOURT",
            Location::Enugu => "ENUGU",
            Location::Rural => "RURAL",
        }
    }
}

/// Quality tier of the build. Drives the base construction rate per m².
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Finish {
    Basic,
    Medium,
    Luxury,
}

impl Finish {
    /// Rate table key for this finish level.
    pub fn key(&self) -> &'static str {
        match self {
            Finish::Basic => "BASIC",
            Finish::Medium => "MEDIUM",
            Finish::Luxury => "LUXURY",
        }
    }
}

/// Request rejected before it reaches the estimation core.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("building area must be between {MIN_AREA_SQM} and {MAX_AREA_SQM} m², got {0}")]
    AreaOutOfRange(f64),
}

/// Validated input to the estimator. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub area_sqm: f64,
    pub location: Location,
    pub finish: Finish,
}

impl EstimateRequest {
    /// Builds a request, rejecting areas outside the allowed range.
    pub fn new(area_sqm: f64, location: Location, finish: Finish) -> Result<Self, ValidationError> {
        if !area_sqm.is_finite() || !(MIN_AREA_SQM..=MAX_AREA_SQM).contains(&area_sqm) {
            return Err(ValidationError::AreaOutOfRange(area_sqm));
        }
        Ok(Self {
            area_sqm,
            location,
            finish,
        })
    }
}

/// One construction phase's share of the total cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownItem {
    pub category: String,
    pub item: String,
    pub unit_cost: f64,
    pub quantity: f64,
    pub total: f64,
}

/// Quantity and cost of one material, derived from the building area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialBreakdownItem {
    pub item: String,
    pub unit: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub total: f64,
}

/// Full estimation result: point total, sampled interval, and breakdowns.
///
/// `low` and `high` come from independent random sampling around `total`
/// and are not guaranteed to bracket it. `items` and `materials` keep a
/// fixed declaration order that consumers may rely on for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub total: f64,
    pub low: f64,
    pub high: f64,
    pub items: Vec<CostBreakdownItem>,
    pub materials: Vec<MaterialBreakdownItem>,
    pub confidence: f64,
}
