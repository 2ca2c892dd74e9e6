//! `out_of_place_sort` is the stable redistribution step shared by both radix sorts: the
//! classic counting sort scatter from a source bucket into a destination bucket.
//!
//! Values are read strictly in source order and each one is written to the current write
//! offset of its digit, which is then advanced. Equal digits therefore keep their relative
//! order, which is what lets the LSD sort build on previous passes.
//!
//! Reads are processed in chunks of 8 to take some advantage of multiple execution ports in
//! each CPU core. Writes still happen in source order.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable

use crate::radix_key::Digit;
use crate::RadixKey;

/// Scatters `src_bucket` into `dst_bucket` by `digit`, starting each digit at
/// `prefix_sums[digit]`. On return `prefix_sums[i]` has advanced by the number of values
/// carrying digit `i`.
#[inline]
pub fn out_of_place_sort<T>(
    src_bucket: &[T],
    dst_bucket: &mut [T],
    prefix_sums: &mut [usize; 256],
    digit: Digit,
) where
    T: RadixKey,
{
    #[cfg(feature = "work_profiles")]
    println!("({}) OOP: {}", digit.level, src_bucket.len());

    if src_bucket.len() < 2 {
        dst_bucket[..src_bucket.len()].copy_from_slice(src_bucket);
        if let Some(v) = src_bucket.first() {
            prefix_sums[digit.extract(v)] += 1;
        }
        return;
    }

    let chunks = src_bucket.chunks_exact(8);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let a = digit.extract(&chunk[0]);
        let b = digit.extract(&chunk[1]);
        let c = digit.extract(&chunk[2]);
        let d = digit.extract(&chunk[3]);
        let e = digit.extract(&chunk[4]);
        let f = digit.extract(&chunk[5]);
        let g = digit.extract(&chunk[6]);
        let h = digit.extract(&chunk[7]);

        dst_bucket[prefix_sums[a]] = chunk[0];
        prefix_sums[a] += 1;
        dst_bucket[prefix_sums[b]] = chunk[1];
        prefix_sums[b] += 1;
        dst_bucket[prefix_sums[c]] = chunk[2];
        prefix_sums[c] += 1;
        dst_bucket[prefix_sums[d]] = chunk[3];
        prefix_sums[d] += 1;
        dst_bucket[prefix_sums[e]] = chunk[4];
        prefix_sums[e] += 1;
        dst_bucket[prefix_sums[f]] = chunk[5];
        prefix_sums[f] += 1;
        dst_bucket[prefix_sums[g]] = chunk[6];
        prefix_sums[g] += 1;
        dst_bucket[prefix_sums[h]] = chunk[7];
        prefix_sums[h] += 1;
    });

    rem.iter().for_each(|val| {
        let b = digit.extract(val);
        dst_bucket[prefix_sums[b]] = *val;
        prefix_sums[b] += 1;
    });
}
