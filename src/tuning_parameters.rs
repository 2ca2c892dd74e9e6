/// Size thresholds that decide when the radix sorts fall back to insertion sort.
///
/// The two thresholds are independent. `insertion_threshold` applies to a whole input at
/// the top-level entry point of either strategy, while `bucket_insertion_threshold` applies
/// to each bucket the MSD sort produces.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TuningParameters {
    /// Inputs of at most this many values are insertion sorted without any radix pass.
    pub insertion_threshold: usize,
    /// MSD buckets of at most this many values are finished by insertion sort instead of
    /// recursing into the next level.
    pub bucket_insertion_threshold: usize,
}

impl TuningParameters {
    pub fn new() -> Self {
        Self {
            insertion_threshold: Self::insertion_threshold(),
            bucket_insertion_threshold: Self::bucket_insertion_threshold(),
        }
    }

    fn insertion_threshold() -> usize {
        64
    }

    fn bucket_insertion_threshold() -> usize {
        100
    }
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self::new()
    }
}
