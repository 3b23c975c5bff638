//! Construction cost estimation core.
//!
//! Takes a validated request (building area, location, finish level) plus
//! an externally supplied rate table and produces a cost estimate: a
//! deterministic point total split into five construction phases, derived
//! material quantities, and a Monte Carlo 90% confidence interval. The
//! random source is injected, so results are reproducible under a seeded
//! generator.
//!
//! ```
//! use buildcost::{estimate, EstimateRequest, Finish, Location, DEFAULT_SAMPLE_SIZE};
//! use buildcost::infra::bundled_rates_2025;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let request = EstimateRequest::new(100.0, Location::Lagos, Finish::Medium)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = estimate(&request, bundled_rates_2025(), DEFAULT_SAMPLE_SIZE, &mut rng)?;
//! assert_eq!(result.total, 30_273_750.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub mod infra;

pub use domain::{
    estimate, CostBreakdownItem, CostEstimate, EstimateError, EstimateRequest, Finish, Location,
    MaterialBreakdownItem, MaterialPrice, RateTable, UnknownRateKey, ValidationError,
    CONFIDENCE_LEVEL, DEFAULT_SAMPLE_SIZE,
};
