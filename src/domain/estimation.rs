//! Deterministic cost breakdown and the estimation entry point.
//!
//! The point total is split into five fixed-proportion construction
//! phases, material quantities are derived from the area via fixed yield
//! factors, and the sampled interval comes from [`simulate_interval`].
//! The whole estimate is computed atomically: any failure returns an
//! error with no partial result.

use rand::Rng;
use thiserror::Error;

use super::entities::{CostBreakdownItem, CostEstimate, EstimateRequest, MaterialBreakdownItem};
use super::rates::{RateTable, UnknownRateKey};
use super::sampling::{simulate_interval, InvalidSampleSize};

/// One construction phase with its fixed share of the total cost.
struct Phase {
    category: &'static str,
    item: &'static str,
    share: f64,
}

/// Phase shares sum to exactly 1.0. Output order follows this table.
const PHASES: [Phase; 5] = [
    Phase {
        category: "Foundation",
        item: "Concrete foundation and footings",
        share: 0.15,
    },
    Phase {
        category: "Walls & Structure",
        item: "Block work, columns, and beams",
        share: 0.35,
    },
    Phase {
        category: "Roofing",
        item: "Roofing sheets, trusses, and ceiling",
        share: 0.20,
    },
    Phase {
        category: "Finishes",
        item: "Plastering, painting, and flooring",
        share: 0.20,
    },
    Phase {
        category: "Services",
        item: "Electrical and plumbing installations",
        share: 0.10,
    },
];

/// Material consumption per m² of floor area. Quantities are
/// ceiling-rounded since materials are sold in whole units.
struct MaterialYield {
    key: &'static str,
    item: &'static str,
    per_sqm: f64,
}

const MATERIAL_YIELDS: [MaterialYield; 3] = [
    MaterialYield {
        key: "CEMENT",
        item: "Cement",
        per_sqm: 2.5,
    },
    MaterialYield {
        key: "BLOCKS_9INCH",
        item: "9-inch Blocks",
        per_sqm: 45.0,
    },
    MaterialYield {
        key: "SAND",
        item: "Sharp Sand",
        per_sqm: 0.15,
    },
];

/// Errors the estimation core can return.
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error(transparent)]
    UnknownRateKey(#[from] UnknownRateKey),
    #[error(transparent)]
    InvalidSampleSize(#[from] InvalidSampleSize),
}

/// Produces a full cost estimate for a validated request.
///
/// `rates` is a read-only snapshot for the duration of the call; `rng`
/// is the injected random source for the interval sampling, so a seeded
/// generator makes the result fully reproducible.
pub fn estimate(
    request: &EstimateRequest,
    rates: &RateTable,
    sample_size: usize,
    rng: &mut impl Rng,
) -> Result<CostEstimate, EstimateError> {
    let base_per_sqm = rates.base_cost_per_sqm(request.finish, request.location)?;
    let point_total = base_per_sqm * request.area_sqm;

    let items = phase_breakdown(request.area_sqm, base_per_sqm);
    let materials = material_breakdown(request.area_sqm, rates)?;
    let interval = simulate_interval(point_total, sample_size, rng)?;

    Ok(CostEstimate {
        total: point_total.round(),
        low: interval.low.round(),
        high: interval.high.round(),
        items,
        materials,
        confidence: interval.confidence,
    })
}

/// Splits the point total into the fixed-proportion phases.
fn phase_breakdown(area_sqm: f64, base_per_sqm: f64) -> Vec<CostBreakdownItem> {
    PHASES
        .iter()
        .map(|phase| {
            let total = base_per_sqm * area_sqm * phase.share;
            CostBreakdownItem {
                category: phase.category.to_string(),
                item: phase.item.to_string(),
                unit_cost: total / area_sqm,
                quantity: area_sqm,
                total,
            }
        })
        .collect()
}

/// Derives material quantities from the area and prices them from the
/// rate table.
fn material_breakdown(
    area_sqm: f64,
    rates: &RateTable,
) -> Result<Vec<MaterialBreakdownItem>, UnknownRateKey> {
    MATERIAL_YIELDS
        .iter()
        .map(|material| {
            let price = rates.material_price(material.key)?;
            let quantity = (area_sqm * material.per_sqm).ceil() as u64;
            let unit_price = price.unit_price();
            Ok(MaterialBreakdownItem {
                item: material.item.to_string(),
                unit: price.unit.clone(),
                quantity,
                unit_price,
                total: quantity as f64 * unit_price,
            })
        })
        .collect()
}
