//! `insertion_sort` is a plain stable, in-place insertion sort.
//!
//! It is the base case for short inputs, and finishes small MSD buckets. Those buckets are
//! usually close to sorted already, which keeps the quadratic worst case out of reach.

#[inline]
pub fn insertion_sort<T>(bucket: &mut [T])
where
    T: Ord + Copy,
{
    #[cfg(feature = "work_profiles")]
    println!("INSERTION: {}", bucket.len());

    for i in 1..bucket.len() {
        let val = bucket[i];
        let mut j = i;

        while j > 0 && bucket[j - 1] > val {
            bucket[j] = bucket[j - 1];
            j -= 1;
        }

        bucket[j] = val;
    }
}
