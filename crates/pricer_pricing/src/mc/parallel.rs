//! Rayon path partitioning.
//!
//! Path `i` draws from `rng.substream(i)`, so the set of simulated paths
//! depends only on the base seed and never on thread scheduling. Partial
//! [`PayoffAccumulator`]s are combined with a fold/reduce; the final sum
//! may differ from the serial one by a few ULPs because addition order
//! follows rayon's split tree.

use rayon::prelude::*;

use super::paths::PathSimulator;
use super::pricer::PayoffAccumulator;
use crate::rng::RandomSource;

/// Accumulates `payoff(path)` over `path_count` paths in parallel.
pub(crate) fn accumulate_parallel<R, F>(
    simulator: &PathSimulator,
    rng: &R,
    path_count: usize,
    payoff: F,
) -> PayoffAccumulator
where
    R: RandomSource,
    F: Fn(&[f64]) -> f64 + Sync,
{
    let path_len = simulator.path_len();

    (0..path_count)
        .into_par_iter()
        .fold(
            || (PayoffAccumulator::default(), vec![0.0; path_len]),
            |(mut acc, mut buffer), path_idx| {
                let mut stream = rng.substream(path_idx as u64);
                simulator.generate_into(&mut stream, &mut buffer);
                acc.add(payoff(&buffer));
                (acc, buffer)
            },
        )
        .map(|(acc, _)| acc)
        .reduce(PayoffAccumulator::default, |mut a, b| {
            a.merge(&b);
            a
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::GbmParams;
    use crate::rng::PricerRng;

    #[test]
    fn test_parallel_counts_every_path() {
        let simulator = PathSimulator::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 4);
        let acc = accumulate_parallel(&simulator, &PricerRng::from_seed(1), 1_000, |_| 1.0);
        assert_eq!(acc.count(), 1_000);
        assert_eq!(acc.sum(), 1_000.0);
    }

    #[test]
    fn test_parallel_reproducible() {
        let simulator = PathSimulator::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 10);
        let terminal = |path: &[f64]| path[path.len() - 1];
        let a = accumulate_parallel(&simulator, &PricerRng::from_seed(9), 5_000, terminal);
        let b = accumulate_parallel(&simulator, &PricerRng::from_seed(9), 5_000, terminal);
        assert!((a.sum() - b.sum()).abs() <= 1e-9 * a.sum().abs());
        assert_eq!(a.count(), b.count());
    }

    #[test]
    fn test_parallel_matches_sequential_substreams() {
        let simulator = PathSimulator::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 6);
        let rng = PricerRng::from_seed(17);
        let terminal = |path: &[f64]| path[path.len() - 1];

        let mut expected = PayoffAccumulator::default();
        for i in 0..2_000u64 {
            let path = simulator.generate(&mut rng.substream(i));
            expected.add(terminal(&path));
        }

        let actual = accumulate_parallel(&simulator, &rng, 2_000, terminal);
        assert!((actual.sum() - expected.sum()).abs() < 1e-8 * expected.sum());
        assert!((actual.sum_sq() - expected.sum_sq()).abs() < 1e-8 * expected.sum_sq());
    }
}
