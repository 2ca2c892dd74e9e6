//! `StandardTuner` represents the default strategy choice offered by intradix.
//!
//! StandardTuner strategy choice is:
//!  * lsd for keys of up to 4 levels (32-bit), where a fixed number of passes wins
//!  * msd for wider keys (64-bit), where skipping resolved buckets wins

use crate::tuner::{Strategy, Tuner, TuningParams};

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn pick_strategy(&self, p: &TuningParams) -> Strategy {
        if p.total_levels <= 4 {
            Strategy::Lsd
        } else {
            Strategy::Msd
        }
    }
}
