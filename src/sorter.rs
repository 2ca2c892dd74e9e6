use crate::sorts::{lsd_sort_adapter, msd_sort_adapter};
use crate::tuner::Strategy;
use crate::tuning_parameters::TuningParameters;
use crate::RadixKey;

pub struct Sorter {
    tuning: TuningParameters,
}

impl Sorter {
    pub fn new(tuning: TuningParameters) -> Self {
        Self { tuning }
    }

    #[inline]
    pub fn top_level_director<T>(&self, bucket: &mut [T], strategy: Strategy)
    where
        T: RadixKey + Ord + Default,
    {
        #[cfg(feature = "work_profiles")]
        println!("({}) TOP: {:?} {}", T::LEVELS - 1, strategy, bucket.len());

        match strategy {
            Strategy::Msd => msd_sort_adapter(&self.tuning, bucket),
            Strategy::Lsd => lsd_sort_adapter(&self.tuning, bucket),
        }
    }
}
