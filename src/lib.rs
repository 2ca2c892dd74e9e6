//! # intradix
//!
//! intradix is a native Rust implementation of radix sort for fixed-width integers. It offers
//! two strategies:
//!
//!  * **MSD**: one counting pass on the most significant byte, then recursive refinement of
//!    each resulting bucket. Small buckets are finished with insertion sort.
//!  * **LSD**: one stable counting pass per byte, least significant first, over the whole
//!    input. The cost is the same whatever the key distribution.
//!
//! Inputs of 64 values or fewer go straight to insertion sort with either strategy.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.radix_sort()`. This picks LSD for 32-bit keys and MSD
//! for 64-bit keys. Use `radix_sort_msd()` or `radix_sort_lsd()` to choose a strategy
//! yourself.
//!
//! ```
//! use intradix::RadixSort;
//!
//! let mut values: Vec<i32> = vec![5, -3, 0, i32::MAX, i32::MIN, -3];
//! values.radix_sort();
//!
//! assert_eq!(values, vec![i32::MIN, -3, -3, 0, 5, i32::MAX]);
//! ```
//!
//! The builder gives full control over strategy selection and thresholds:
//!
//! ```
//! use intradix::{RadixSort, Strategy, TuningParameters};
//!
//! let mut values: Vec<u64> = (0..1_000u64).rev().collect();
//! values
//!     .radix_sort_builder()
//!     .with_strategy(Strategy::Msd)
//!     .with_tuning_parameters(TuningParameters::new())
//!     .sort();
//!
//! assert!(values.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ## Default Implementations
//!
//! `RadixKey` is implemented for the following types out-of-the-box:
//!
//!  * `i32`
//!  * `u32`
//!  * `i64`
//!  * `u64`
//!
//! `isize` and `usize` are sorted through [`radix_sort_isize`] and [`radix_sort_usize`],
//! which reinterpret the slice as the fixed-width type of the target's pointer width.
//!
//! ## Features
//!
//!  * `work_profiles`: print a trace line for every counting pass, sorting pass and
//!    insertion sort fallback.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.


mod native;
mod radix_key;
mod radix_sort_builder;
mod sorter;
mod sorts;
mod tuner;
mod tuners;
mod tuning_parameters;
mod utils;

#[cfg(test)]
use utils::test_utils;

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
pub use native::{radix_sort_isize, radix_sort_usize};
pub use radix_key::{RadixKey, MAX_LEVELS};
pub use radix_sort_builder::RadixSortBuilder;
pub use tuner::{Strategy, Tuner, TuningParams};
pub use tuners::StandardTuner;
pub use tuning_parameters::TuningParameters;

pub trait RadixSort<T> {
    /// radix_sort sorts in ascending order with the default strategy for `T`, as picked by
    /// `StandardTuner`.
    fn radix_sort(&mut self);

    /// radix_sort_msd sorts in ascending order with the recursive most-significant-digit
    /// strategy.
    fn radix_sort_msd(&mut self);

    /// radix_sort_lsd sorts in ascending order with the fixed-pass least-significant-digit
    /// strategy.
    fn radix_sort_lsd(&mut self);

    /// radix_sort_builder returns a builder for picking the strategy, tuner and thresholds
    /// before sorting.
    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_, T>;
}

impl<T> RadixSort<T> for [T]
where
    T: RadixKey + Ord + Default,
{
    fn radix_sort(&mut self) {
        self.radix_sort_builder().sort();
    }

    fn radix_sort_msd(&mut self) {
        self.radix_sort_builder().with_msd().sort();
    }

    fn radix_sort_lsd(&mut self) {
        self.radix_sort_builder().with_lsd().sort();
    }

    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}

impl<T> RadixSort<T> for Vec<T>
where
    T: RadixKey + Ord + Default,
{
    fn radix_sort(&mut self) {
        self.as_mut_slice().radix_sort();
    }

    fn radix_sort_msd(&mut self) {
        self.as_mut_slice().radix_sort_msd();
    }

    fn radix_sort_lsd(&mut self) {
        self.as_mut_slice().radix_sort_lsd();
    }

    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}
