use crate::radix_key::MAX_LEVELS;
use crate::sorter::Sorter;
use crate::tuner::{Strategy, Tuner, TuningParams};
use crate::tuners::StandardTuner;
use crate::tuning_parameters::TuningParameters;
use crate::RadixKey;

pub struct RadixSortBuilder<'a, T> {
    data: &'a mut [T],
    strategy: Option<Strategy>,
    tuner: &'a (dyn Tuner + Send + Sync),
    tuning: TuningParameters,
}

impl<'a, T> RadixSortBuilder<'a, T>
where
    T: RadixKey + Ord + Default,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        // These are invariants of RadixKey that must be upheld.
        assert_ne!(T::LEVELS, 0, "RadixKey must have at least 1 level");
        assert!(
            T::LEVELS <= MAX_LEVELS,
            "RadixKey must have at most {} levels",
            MAX_LEVELS
        );

        Self {
            data,
            strategy: None,
            tuner: &StandardTuner,
            tuning: TuningParameters::new(),
        }
    }

    /// Always sort with `strategy`, bypassing the tuner.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);

        self
    }

    pub fn with_msd(self) -> Self {
        self.with_strategy(Strategy::Msd)
    }

    pub fn with_lsd(self) -> Self {
        self.with_strategy(Strategy::Lsd)
    }

    pub fn with_tuner(mut self, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        self.tuner = tuner;

        self
    }

    pub fn with_tuning_parameters(mut self, tuning: TuningParameters) -> Self {
        self.tuning = tuning;

        self
    }

    pub fn sort(self) {
        // By definition, this is already sorted
        if self.data.len() <= 1 {
            return;
        }

        let strategy = self.strategy.unwrap_or_else(|| {
            self.tuner.pick_strategy(&TuningParams {
                total_levels: T::LEVELS,
                input_len: self.data.len(),
            })
        });

        let sorter = Sorter::new(self.tuning);
        sorter.top_level_director(self.data, strategy);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{gen_inputs, test_rng, validate_sort};
    use crate::tuner::{Strategy, Tuner, TuningParams};
    use crate::tuning_parameters::TuningParameters;
    use crate::RadixSort;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTuner {
        calls: AtomicUsize,
    }

    impl Tuner for CountingTuner {
        fn pick_strategy(&self, _p: &TuningParams) -> Strategy {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Strategy::Msd
        }
    }

    #[test]
    pub fn test_custom_tuner_is_consulted() {
        let tuner = CountingTuner {
            calls: AtomicUsize::new(0),
        };
        let mut rng = test_rng();
        let inputs: Vec<u32> = gen_inputs(&mut rng, 5_000, 0);

        validate_sort(inputs, |b| b.radix_sort_builder().with_tuner(&tuner).sort());
        assert_eq!(tuner.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    pub fn test_explicit_strategy_skips_tuner() {
        let tuner = CountingTuner {
            calls: AtomicUsize::new(0),
        };
        let mut rng = test_rng();
        let inputs: Vec<i64> = gen_inputs(&mut rng, 5_000, 0);

        validate_sort(inputs, |b| {
            b.radix_sort_builder()
                .with_tuner(&tuner)
                .with_lsd()
                .sort()
        });
        assert_eq!(tuner.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    pub fn test_trivial_inputs_skip_tuner() {
        let tuner = CountingTuner {
            calls: AtomicUsize::new(0),
        };

        let mut empty: Vec<u64> = vec![];
        empty.radix_sort_builder().with_tuner(&tuner).sort();

        let mut single = vec![7u64];
        single.radix_sort_builder().with_tuner(&tuner).sort();

        assert_eq!(single, vec![7]);
        assert_eq!(tuner.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    pub fn test_with_tuning_parameters() {
        let tuning = TuningParameters {
            insertion_threshold: 1_000,
            bucket_insertion_threshold: 10,
        };
        let mut rng = test_rng();

        for strategy in [Strategy::Msd, Strategy::Lsd] {
            for n in [500, 1_001, 20_000] {
                let inputs: Vec<i32> = gen_inputs(&mut rng, n, 4);

                validate_sort(inputs, |b| {
                    b.radix_sort_builder()
                        .with_strategy(strategy)
                        .with_tuning_parameters(tuning)
                        .sort()
                });
            }
        }
    }
}
