//! Monte Carlo interval estimation around a deterministic point total.
//!
//! Each trial perturbs the point total with three independent uniform
//! variation sources (materials, labour, market). The sorted trial costs
//! give the 5th/95th percentile bounds reported as a 90% confidence
//! interval. The random source is injected so callers can seed it.

use rand::Rng;
use thiserror::Error;

/// Trials run when the caller does not override the sample size.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Confidence level matching the 5th/95th percentile cut below.
pub const CONFIDENCE_LEVEL: f64 = 0.90;

const LOWER_PERCENTILE: f64 = 0.05;
const UPPER_PERCENTILE: f64 = 0.95;

/// Spread of each variation source, applied to a uniform [-0.5, 0.5) draw.
const MATERIAL_SPREAD: f64 = 0.3; // ±15%
const LABOUR_SPREAD: f64 = 0.2; // ±10%
const MARKET_SPREAD: f64 = 0.1; // ±5%

/// Sample size must be at least one trial.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("sample size must be at least 1, got {0}")]
pub struct InvalidSampleSize(pub usize);

/// Sampled cost interval with its confidence level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostInterval {
    pub low: f64,
    pub high: f64,
    pub confidence: f64,
}

/// Runs `sample_size` simulation trials around `point_total` and returns
/// the percentile interval. `high >= low` always holds; neither bound is
/// guaranteed to bracket the point total.
pub fn simulate_interval(
    point_total: f64,
    sample_size: usize,
    rng: &mut impl Rng,
) -> Result<CostInterval, InvalidSampleSize> {
    if sample_size == 0 {
        return Err(InvalidSampleSize(sample_size));
    }

    let mut costs = Vec::with_capacity(sample_size);
    for _ in 0..sample_size {
        let material = 1.0 + (rng.gen::<f64>() - 0.5) * MATERIAL_SPREAD;
        let labour = 1.0 + (rng.gen::<f64>() - 0.5) * LABOUR_SPREAD;
        let market = 1.0 + (rng.gen::<f64>() - 0.5) * MARKET_SPREAD;
        costs.push(point_total * material * labour * market);
    }

    costs.sort_by(|a, b| a.partial_cmp(b).unwrap());

    // floor(N × p), zero-indexed into the sorted trials. floor(N × 0.95)
    // is at most N − 1 for every N ≥ 1, so both indices are in range.
    let low_index = (sample_size as f64 * LOWER_PERCENTILE).floor() as usize;
    let high_index = (sample_size as f64 * UPPER_PERCENTILE).floor() as usize;

    Ok(CostInterval {
        low: costs[low_index],
        high: costs[high_index],
        confidence: CONFIDENCE_LEVEL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_sample_size_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = simulate_interval(1_000_000.0, 0, &mut rng).unwrap_err();
        assert_eq!(err, InvalidSampleSize(0));
    }

    #[test]
    fn interval_is_ordered_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let total = 30_273_750.0;
        for sample_size in [100, 500, 1000, 4096] {
            let interval = simulate_interval(total, sample_size, &mut rng).unwrap();
            assert!(interval.high >= interval.low);
            // Worst case combined variation: (1 ± 0.15)(1 ± 0.10)(1 ± 0.05).
            assert!(interval.low >= total * 0.5, "low out of range: {}", interval.low);
            assert!(interval.high <= total * 1.5, "high out of range: {}", interval.high);
            assert_eq!(interval.confidence, CONFIDENCE_LEVEL);
        }
    }

    #[test]
    fn seeded_rng_reproduces_interval_exactly() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        let a = simulate_interval(5_000_000.0, DEFAULT_SAMPLE_SIZE, &mut first).unwrap();
        let b = simulate_interval(5_000_000.0, DEFAULT_SAMPLE_SIZE, &mut second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_trial_uses_the_only_sample_for_both_bounds() {
        // floor(1 × 0.05) = floor(1 × 0.95) = 0.
        let mut rng = StdRng::seed_from_u64(3);
        let interval = simulate_interval(1_000.0, 1, &mut rng).unwrap();
        assert_eq!(interval.low, interval.high);
    }

    #[test]
    fn percentile_indices_floor_at_boundaries() {
        // With 20 trials the cut indices are floor(1.0) = 1 and
        // floor(19.0) = 19, i.e. the second-lowest and the highest trial.
        let mut rng = StdRng::seed_from_u64(11);
        let total = 100.0;
        let interval = simulate_interval(total, 20, &mut rng).unwrap();

        let mut replay = StdRng::seed_from_u64(11);
        let mut costs: Vec<f64> = (0..20)
            .map(|_| {
                let material = 1.0 + (replay.gen::<f64>() - 0.5) * 0.3;
                let labour = 1.0 + (replay.gen::<f64>() - 0.5) * 0.2;
                let market = 1.0 + (replay.gen::<f64>() - 0.5) * 0.1;
                total * material * labour * market
            })
            .collect();
        costs.sort_by(|a, b| a.partial_cmp(b).unwrap());

        assert_eq!(interval.low, costs[1]);
        assert_eq!(interval.high, costs[19]);
    }
}
