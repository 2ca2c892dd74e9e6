//! `lsd_sort` is a least-significant-digit radix sort with a fixed number of passes.
//!
//! Histograms for every level are gathered in one read of the input. Then one stable
//! scatter pass runs per level, from level 0 up to the most significant level, which is the
//! only one that receives the sign adjustment. Source and destination swap roles after
//! each pass.
//!
//! The built-in key types all have an even number of levels, so the final pass always lands
//! back in the caller's slice. A copy is only needed for keys with an odd level count.
//!
//! The cost is `T::LEVELS` full passes whatever the distribution of the input.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * lsb-first
//!  * stable

use crate::radix_key::Digit;
use crate::sorts::insertion_sort::insertion_sort;
use crate::sorts::out_of_place_sort::out_of_place_sort;
use crate::tuning_parameters::TuningParameters;
use crate::utils::*;
use crate::RadixKey;

pub fn lsd_sort<T>(bucket: &mut [T], tmp_bucket: &mut [T])
where
    T: RadixKey,
{
    let all_counts = get_all_counts(bucket);
    let mut invert = false;

    for (level, counts) in all_counts.iter().enumerate().take(T::LEVELS) {
        #[cfg(feature = "work_profiles")]
        println!("({}) LSD: {}", level, bucket.len());

        let digit = Digit::of::<T>(level);
        let mut prefix_sums = get_prefix_sums(counts);

        if invert {
            out_of_place_sort(tmp_bucket, bucket, &mut prefix_sums, digit);
        } else {
            out_of_place_sort(bucket, tmp_bucket, &mut prefix_sums, digit);
        }

        invert = !invert;
    }

    if invert {
        bucket.copy_from_slice(tmp_bucket);
    }
}

pub fn lsd_sort_adapter<T>(tuning: &TuningParameters, bucket: &mut [T])
where
    T: RadixKey + Ord + Default,
{
    if bucket.len() <= tuning.insertion_threshold {
        insertion_sort(bucket);
        return;
    }

    let mut tmp_bucket = get_tmp_bucket(bucket.len());
    lsd_sort(bucket, &mut tmp_bucket);
}
