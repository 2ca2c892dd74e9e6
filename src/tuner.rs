#[derive(Debug, Clone)]
pub struct TuningParams {
    /// Number of radix levels in the key type.
    pub total_levels: usize,
    pub input_len: usize,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Strategy {
    /// Recursive most-significant-digit partitioning.
    Msd,
    /// Fixed least-significant-digit passes over the whole input.
    Lsd,
}

pub trait Tuner {
    fn pick_strategy(&self, p: &TuningParams) -> Strategy;
}
