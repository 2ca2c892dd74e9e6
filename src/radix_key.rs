//! The digit model: how each supported integer type is split into radix-256 digits.
//!
//! Level 0 is always the least significant byte and `LEVELS - 1` the most significant one.
//! Signed types additionally translate their most significant byte by `0x80` so that
//! two's-complement order matches the unsigned order of bucket indices.

/// Largest number of levels the sorting engines keep histograms for.
pub const MAX_LEVELS: usize = 8;

pub trait RadixKey: Copy {
    /// Number of bytes considered for each key. Must be in `1..=MAX_LEVELS`.
    const LEVELS: usize;

    /// Whether the most significant byte is sign-adjusted when bucketing.
    const SIGNED: bool;

    /// Raw byte at `level`, where level 0 is the least significant byte.
    fn get_level(&self, level: usize) -> u8;

    /// Bucket index for this key at `level`.
    ///
    /// With `sign_adjust` set, `0x80` is added to the byte (mod 256), so negative values
    /// land in buckets `0..=127` and non-negative values in `128..=255`.
    #[inline]
    fn get_digit(&self, level: usize, sign_adjust: bool) -> u8 {
        let b = self.get_level(level);

        if sign_adjust {
            b.wrapping_add(0x80)
        } else {
            b
        }
    }
}

impl RadixKey for u32 {
    const LEVELS: usize = 4;
    const SIGNED: bool = false;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self >> (level * 8)) as u8
    }
}

impl RadixKey for u64 {
    const LEVELS: usize = 8;
    const SIGNED: bool = false;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self >> (level * 8)) as u8
    }
}

impl RadixKey for i32 {
    const LEVELS: usize = 4;
    const SIGNED: bool = true;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self >> (level * 8)) as u8
    }
}

impl RadixKey for i64 {
    const LEVELS: usize = 8;
    const SIGNED: bool = true;

    #[inline]
    fn get_level(&self, level: usize) -> u8 {
        (self >> (level * 8)) as u8
    }
}

/// One digit position of a key type, along with whether it carries the sign adjustment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Digit {
    pub level: usize,
    pub sign_adjust: bool,
}

impl Digit {
    /// The digit at `level` for `T`. Only the most significant level of a signed type is
    /// sign-adjusted.
    #[inline]
    pub fn of<T: RadixKey>(level: usize) -> Self {
        Self {
            level,
            sign_adjust: T::SIGNED && level == T::LEVELS - 1,
        }
    }

    /// A digit at `level` with no sign adjustment, regardless of the key type.
    #[inline]
    pub fn unsigned(level: usize) -> Self {
        Self {
            level,
            sign_adjust: false,
        }
    }

    #[inline(always)]
    pub fn extract<T: RadixKey>(&self, value: &T) -> usize {
        value.get_digit(self.level, self.sign_adjust) as usize
    }
}
