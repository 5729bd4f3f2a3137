use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::catalog::{Catalog, PrizeTier};

/// Source of uniform samples in `[0, 1)`. Injected so the selection walk
/// stays deterministic under test.
pub trait UniformSource {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Adapter for any `rand` generator, e.g. a seeded `StdRng` in tests.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Snapshot of a winning entry, taken after its stock was decremented.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeWin {
    /// Position in the full catalog, used to aim the wheel animation.
    pub catalog_index: usize,
    pub label: String,
    pub tier: PrizeTier,
    pub image: String,
    pub color: String,
    pub remaining: u32,
}

/// Result of a selection attempt. `Exhausted` is a reported state, not a
/// failure: every prize is out of stock and the catalog was left untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum SpinOutcome {
    Won(PrizeWin),
    Exhausted,
}

impl Catalog {
    /// Draws one prize by weight among the entries that still have stock
    /// and decrements the winner's quantity by exactly one.
    ///
    /// The draw partitions `[0, total_weight)` into contiguous
    /// sub-intervals sized by weight, in catalog order, so a given sample
    /// maps to exactly one entry.
    pub fn select_and_consume(&mut self, rng: &mut impl UniformSource) -> SpinOutcome {
        let available = self.available_indices();
        if available.is_empty() {
            log::info!("spin requested with every prize depleted");
            return SpinOutcome::Exhausted;
        }

        let total_weight: f64 = available.iter().map(|&i| self.entries[i].weight).sum();
        let mut remaining = rng.next_f64() * total_weight;

        let mut winner = None;
        for &index in &available {
            remaining -= self.entries[index].weight;
            if remaining <= 0.0 {
                winner = Some(index);
                break;
            }
        }
        // Float summation dust can leave `remaining` marginally positive
        // after the last subtraction; the sample still belongs to the last
        // sub-interval.
        let winner = winner.unwrap_or(available[available.len() - 1]);

        let entry = &mut self.entries[winner];
        entry.quantity -= 1;
        log::debug!(
            "selected {:?} (index {}), {} left in stock",
            entry.label,
            winner,
            entry.quantity
        );

        SpinOutcome::Won(PrizeWin {
            catalog_index: winner,
            label: entry.label.clone(),
            tier: entry.tier,
            image: entry.image.clone(),
            color: entry.color.clone(),
            remaining: entry.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PrizeEntry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(label: &str, weight: f64, quantity: u32) -> PrizeEntry {
        PrizeEntry {
            label: label.to_string(),
            weight,
            quantity,
            tier: PrizeTier::None,
            image: String::new(),
            color: "#abcdef".to_string(),
        }
    }

    fn catalog(entries: Vec<PrizeEntry>) -> Catalog {
        Catalog::from_entries(entries).unwrap()
    }

    /// Replays a fixed list of samples, cycling when it runs out.
    struct SequenceSource {
        values: Vec<f64>,
        position: usize,
    }

    impl SequenceSource {
        fn new(values: Vec<f64>) -> Self {
            Self { values, position: 0 }
        }
    }

    impl UniformSource for SequenceSource {
        fn next_f64(&mut self) -> f64 {
            let value = self.values[self.position % self.values.len()];
            self.position += 1;
            value
        }
    }

    #[test]
    fn test_draw_maps_to_weight_intervals() {
        // Weights 1 and 3 partition [0, 4) into [0, 1) and [1, 4).
        let mut cat = catalog(vec![entry("A", 1.0, 5), entry("B", 3.0, 5)]);

        let mut low = SequenceSource::new(vec![0.2]); // 0.2 * 4 = 0.8 -> A
        match cat.select_and_consume(&mut low) {
            SpinOutcome::Won(win) => assert_eq!(win.label, "A"),
            SpinOutcome::Exhausted => panic!("catalog has stock"),
        }

        let mut high = SequenceSource::new(vec![0.5]); // 0.5 * 4 = 2.0 -> B
        match cat.select_and_consume(&mut high) {
            SpinOutcome::Won(win) => {
                assert_eq!(win.label, "B");
                assert_eq!(win.catalog_index, 1);
                assert_eq!(win.remaining, 4);
            }
            SpinOutcome::Exhausted => panic!("catalog has stock"),
        }
    }

    #[test]
    fn test_won_consumes_exactly_one_unit() {
        let mut cat = catalog(vec![entry("A", 1.0, 2), entry("B", 2.0, 3)]);
        let before = cat.total_quantity();

        let mut rng = RngSource(StdRng::seed_from_u64(11));
        match cat.select_and_consume(&mut rng) {
            SpinOutcome::Won(_) => assert_eq!(cat.total_quantity(), before - 1),
            SpinOutcome::Exhausted => panic!("catalog has stock"),
        }
    }

    #[test]
    fn test_exhausted_leaves_catalog_unchanged() {
        let mut cat = catalog(vec![entry("A", 1.0, 0), entry("B", 2.0, 0)]);
        let snapshot = cat.clone();

        let mut rng = RngSource(StdRng::seed_from_u64(3));
        assert_eq!(cat.select_and_consume(&mut rng), SpinOutcome::Exhausted);
        assert_eq!(cat, snapshot);
    }

    #[test]
    fn test_quantity_never_underflows() {
        let mut cat = catalog(vec![entry("A", 1.0, 2), entry("B", 5.0, 1)]);
        let total = cat.total_quantity();
        let mut rng = RngSource(StdRng::seed_from_u64(99));

        let mut wins = 0;
        for _ in 0..50 {
            match cat.select_and_consume(&mut rng) {
                SpinOutcome::Won(_) => wins += 1,
                SpinOutcome::Exhausted => {}
            }
        }
        assert_eq!(wins, total);
        assert_eq!(cat.total_quantity(), 0);
    }

    #[test]
    fn test_sole_available_entry_always_wins() {
        // B carries three quarters of the catalog weight but is sold out.
        let mut cat = catalog(vec![entry("A", 1.0, 2), entry("B", 3.0, 0)]);
        let mut rng = RngSource(StdRng::seed_from_u64(7));

        for expected_remaining in [1, 0] {
            match cat.select_and_consume(&mut rng) {
                SpinOutcome::Won(win) => {
                    assert_eq!(win.label, "A");
                    assert_eq!(win.remaining, expected_remaining);
                }
                SpinOutcome::Exhausted => panic!("A still has stock"),
            }
        }
        assert_eq!(cat.select_and_consume(&mut rng), SpinOutcome::Exhausted);
    }

    #[test]
    fn test_single_unit_boundary() {
        let mut cat = catalog(vec![entry("Only", 1.0, 1)]);
        let mut rng = RngSource(StdRng::seed_from_u64(1));

        assert!(matches!(
            cat.select_and_consume(&mut rng),
            SpinOutcome::Won(_)
        ));
        for _ in 0..10 {
            assert_eq!(cat.select_and_consume(&mut rng), SpinOutcome::Exhausted);
        }
    }

    #[test]
    fn test_example_scenario() {
        let mut cat = catalog(vec![entry("A", 1.0, 1), entry("B", 3.0, 0)]);
        let mut rng = RngSource(StdRng::seed_from_u64(42));

        match cat.select_and_consume(&mut rng) {
            SpinOutcome::Won(win) => assert_eq!(win.label, "A"),
            SpinOutcome::Exhausted => panic!("A is available"),
        }
        assert_eq!(cat.select_and_consume(&mut rng), SpinOutcome::Exhausted);
    }

    #[test]
    fn test_sample_at_interval_edge_stays_in_range() {
        // A sample of exactly 1.0 never occurs from a real generator, but
        // accumulated float error can behave the same way; the walk must
        // still land on the last available entry.
        let mut cat = catalog(vec![entry("A", 1.0, 1), entry("B", 2.0, 1)]);
        let mut edge = SequenceSource::new(vec![0.999_999_999_999_999_9]);
        match cat.select_and_consume(&mut edge) {
            SpinOutcome::Won(win) => assert_eq!(win.label, "B"),
            SpinOutcome::Exhausted => panic!("catalog has stock"),
        }
    }

    #[test]
    fn test_frequencies_converge_to_weight_ratio() {
        // Plenty of stock so the available set never shrinks mid-run.
        let trials = 40_000u32;
        let mut cat = catalog(vec![
            entry("A", 1.0, trials),
            entry("B", 3.0, trials),
            entry("C", 4.0, trials),
        ]);
        let mut rng = RngSource(StdRng::seed_from_u64(2024));

        let mut counts = [0u32; 3];
        for _ in 0..trials {
            match cat.select_and_consume(&mut rng) {
                SpinOutcome::Won(win) => counts[win.catalog_index] += 1,
                SpinOutcome::Exhausted => panic!("stock cannot run out"),
            }
        }

        let expected = [1.0 / 8.0, 3.0 / 8.0, 4.0 / 8.0];
        for (count, expected) in counts.iter().zip(expected) {
            let observed = f64::from(*count) / f64::from(trials);
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {} vs expected {}",
                observed,
                expected
            );
        }
    }
}
