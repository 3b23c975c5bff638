//! Persistence and bundled data backing the estimation core.

pub mod assets;
pub mod store;

pub use assets::bundled_rates_2025;
pub use store::{Project, ProjectStore, RateStore, StoreError, PLACEHOLDER_OWNER};
