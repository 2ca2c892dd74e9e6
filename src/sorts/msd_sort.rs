//! `msd_sort` is a recursive most-significant-digit radix sort.
//!
//! Each call counts and scatters its bucket by one level, starting at the most significant
//! byte (sign-adjusted for signed keys). The result is then split into up to 256 buckets,
//! one per digit, and each bucket is handled on its own:
//!
//!  * 0 or 1 values: already sorted
//!  * up to `bucket_insertion_threshold` values: finished with insertion sort
//!  * anything larger: recurse into the next lower level
//!
//! After the scatter on level 0, every bucket holds identical values and recursion stops.
//! Depth is therefore bounded by `T::LEVELS`.
//!
//! A single temporary buffer is allocated by the adapter. Each bucket recurses with the
//! sub-slice of that buffer at the same offsets, so no further allocation happens.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * msb-first
//!  * adaptive to the key distribution

use crate::radix_key::Digit;
use crate::sorts::insertion_sort::insertion_sort;
use crate::sorts::out_of_place_sort::out_of_place_sort;
use crate::tuning_parameters::TuningParameters;
use crate::utils::*;
use crate::RadixKey;
use arbitrary_chunks::ArbitraryChunks;

pub fn msd_sort<T>(
    tuning: &TuningParameters,
    bucket: &mut [T],
    tmp_bucket: &mut [T],
    level: usize,
) where
    T: RadixKey + Ord,
{
    #[cfg(feature = "work_profiles")]
    println!("({}) MSD: {}", level, bucket.len());

    let digit = Digit::of::<T>(level);
    let counts = get_counts(bucket, digit);
    let mut prefix_sums = get_prefix_sums(&counts);

    out_of_place_sort(bucket, tmp_bucket, &mut prefix_sums, digit);
    bucket.copy_from_slice(tmp_bucket);

    if level == 0 {
        return;
    }

    bucket
        .arbitrary_chunks_mut(&counts)
        .zip(tmp_bucket.arbitrary_chunks_mut(&counts))
        .for_each(|(chunk, tmp_chunk)| {
            if chunk.len() <= 1 {
                return;
            }

            if chunk.len() <= tuning.bucket_insertion_threshold {
                insertion_sort(chunk);
            } else {
                msd_sort(tuning, chunk, tmp_chunk, level - 1);
            }
        });
}

pub fn msd_sort_adapter<T>(tuning: &TuningParameters, bucket: &mut [T])
where
    T: RadixKey + Ord + Default,
{
    if bucket.len() <= tuning.insertion_threshold {
        insertion_sort(bucket);
        return;
    }

    let mut tmp_bucket = get_tmp_bucket(bucket.len());
    msd_sort(tuning, bucket, &mut tmp_bucket, T::LEVELS - 1);
}
