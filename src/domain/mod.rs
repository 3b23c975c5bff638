//! Domain logic for construction cost estimation lives here.

pub mod entities;
pub mod estimation;
pub mod rates;
pub mod sampling;

pub use entities::{
    CostBreakdownItem, CostEstimate, EstimateRequest, Finish, Location, MaterialBreakdownItem,
    ValidationError, MAX_AREA_SQM, MIN_AREA_SQM,
};
pub use estimation::{estimate, EstimateError};
pub use rates::{MaterialPrice, RateKind, RateTable, UnknownRateKey};
pub use sampling::{
    simulate_interval, CostInterval, InvalidSampleSize, CONFIDENCE_LEVEL, DEFAULT_SAMPLE_SIZE,
};
