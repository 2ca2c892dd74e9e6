use crate::radix_key::{Digit, MAX_LEVELS};
use crate::RadixKey;

/// Exclusive prefix sum of `counts`: entry `i` is where the first value with digit `i`
/// is written.
#[inline]
pub fn get_prefix_sums(counts: &[usize; 256]) -> [usize; 256] {
    let mut sums = [0usize; 256];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// Histogram of `digit` across `bucket`.
#[inline]
pub fn get_counts<T>(bucket: &[T], digit: Digit) -> [usize; 256]
where
    T: RadixKey,
{
    #[cfg(feature = "work_profiles")]
    println!("({}) COUNT: {}", digit.level, bucket.len());

    let mut counts_1 = [0usize; 256];

    if bucket.is_empty() {
        return counts_1;
    }

    let mut counts_2 = [0usize; 256];
    let mut counts_3 = [0usize; 256];
    let mut counts_4 = [0usize; 256];
    let chunks = bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let a = digit.extract(&chunk[0]);
        let b = digit.extract(&chunk[1]);
        let c = digit.extract(&chunk[2]);
        let d = digit.extract(&chunk[3]);

        counts_1[a] += 1;
        counts_2[b] += 1;
        counts_3[c] += 1;
        counts_4[d] += 1;
    });

    rem.iter().for_each(|v| {
        counts_1[digit.extract(v)] += 1;
    });

    for i in 0..256 {
        counts_1[i] += counts_2[i];
        counts_1[i] += counts_3[i];
        counts_1[i] += counts_4[i];
    }

    counts_1
}

/// Histograms for every level of `T` in a single read of `bucket`. Index `l` of the result
/// holds the counts for level `l`; levels at or above `T::LEVELS` stay zeroed.
#[inline]
pub fn get_all_counts<T>(bucket: &[T]) -> [[usize; 256]; MAX_LEVELS]
where
    T: RadixKey,
{
    #[cfg(feature = "work_profiles")]
    println!("({}) COUNT_ALL: {}", T::LEVELS, bucket.len());

    let mut counts = [[0usize; 256]; MAX_LEVELS];
    let mut digits = [Digit::unsigned(0); MAX_LEVELS];

    for (level, d) in digits.iter_mut().enumerate().take(T::LEVELS) {
        *d = Digit::of::<T>(level);
    }

    bucket.iter().for_each(|v| {
        for (level, d) in digits.iter().enumerate().take(T::LEVELS) {
            counts[level][d.extract(v)] += 1;
        }
    });

    counts
}

/// Scratch space of `len` elements used as the redistribution target.
#[inline]
pub fn get_tmp_bucket<T>(len: usize) -> Vec<T>
where
    T: Copy + Default,
{
    vec![T::default(); len]
}
