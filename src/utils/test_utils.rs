use crate::RadixKey;
use nanorand::{Rng, WyRand};
use std::fmt::Debug;

pub const SEED: u64 = 0x5EED_0001;

/// Lengths straddling the insertion-sort thresholds, followed by larger inputs.
pub const SIZES: [usize; 14] = [
    0, 1, 2, 3, 10, 63, 64, 65, 100, 101, 1_000, 10_000, 100_000, 300_000,
];

pub trait NumericTest: RadixKey + Copy + Debug + Default + Ord + Send + Sync {
    /// Truncates 64 random bits into `Self`.
    fn from_bits(bits: u64) -> Self;
}

impl NumericTest for u32 {
    fn from_bits(bits: u64) -> Self {
        bits as u32
    }
}

impl NumericTest for i32 {
    fn from_bits(bits: u64) -> Self {
        bits as u32 as i32
    }
}

impl NumericTest for u64 {
    fn from_bits(bits: u64) -> Self {
        bits
    }
}

impl NumericTest for i64 {
    fn from_bits(bits: u64) -> Self {
        bits as i64
    }
}

pub fn test_rng() -> WyRand {
    WyRand::new_seed(SEED)
}

/// `n` random values; the first half shifted right by `shift` bits and the second half
/// shifted left, so that some leading or trailing bytes are empty.
pub fn gen_inputs<T>(rng: &mut WyRand, n: usize, shift: u32) -> Vec<T>
where
    T: NumericTest,
{
    (0..n)
        .map(|i| {
            let bits = rng.generate::<u64>();

            if i < n / 2 {
                T::from_bits(bits >> shift)
            } else {
                T::from_bits(bits << shift)
            }
        })
        .collect()
}

/// `n` random values with every bit outside of `mask` cleared.
pub fn gen_masked<T>(rng: &mut WyRand, n: usize, mask: u64) -> Vec<T>
where
    T: NumericTest,
{
    (0..n)
        .map(|_| T::from_bits(rng.generate::<u64>() & mask))
        .collect()
}

pub fn gen_input_set<T>(shift: u32) -> Vec<Vec<T>>
where
    T: NumericTest,
{
    let mut rng = test_rng();

    SIZES
        .iter()
        .map(|n| gen_inputs(&mut rng, *n, shift))
        .collect()
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T]),
{
    let mut inputs_clone = inputs.clone();

    sort_fn(&mut inputs);
    inputs_clone.sort_unstable();

    for w in inputs.windows(2) {
        assert!(w[0] <= w[1], "out of order: {:?} > {:?}", w[0], w[1]);
    }

    // Same multiset as the input
    assert_eq!(inputs, inputs_clone);
}

pub fn sort_comparison_suite<T, F>(shift: u32, sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T]),
{
    for s in gen_input_set(shift) {
        validate_sort(s, &sort_fn);
    }
}

/// Byte-masked distributions: empty levels, one-digit keys, single-bit keys and
/// alternating bit patterns.
pub fn validate_patterns<T, F>(sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T]),
{
    let masks: [u64; 12] = [
        u64::MAX,
        0x0000_0000_0000_00FF,
        0xFFFF_FFFF_FFFF_FF00,
        0xFFFF_FFFF_FFFF_00FF,
        0xFFFF_FFFF_FF00_FFFF,
        0xFFFF_FFFF_00FF_FFFF,
        0x00FF_FFFF_FFFF_FFFF,
        0x0000_0000_0000_FFFF,
        0x8000_0000_8000_0000,
        0x0000_0000_0000_0001,
        0xAAAA_AAAA_AAAA_AAAA,
        0x5555_5555_5555_5555,
    ];

    let mut rng = test_rng();

    for n in [4, 101, 128, 5_000, 128_000] {
        for mask in masks {
            validate_sort(gen_masked::<T>(&mut rng, n, mask), &sort_fn);
        }

        validate_sort(vec![T::from_bits(u64::MAX); n], &sort_fn);
        validate_sort(vec![T::default(); n], &sort_fn);
    }
}

/// The full set of checks run against every strategy.
pub fn sort_strategy_suite<T, F>(shift: u32, sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T]),
{
    sort_comparison_suite(shift, &sort_fn);
    validate_patterns(&sort_fn);
}
