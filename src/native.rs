//! Sorting for the native word types `isize` and `usize`.
//!
//! The slice is reinterpreted in place as the fixed-width integer type of the same size
//! (`i64`/`u64` on 64-bit targets, `i32`/`u32` on 32-bit targets) and sorted with the MSD
//! strategy. This is a cast of the bit pattern, never a value conversion. It is sound
//! because `bytemuck` checks that both types share size and alignment, which the
//! `target_pointer_width` gate guarantees at compile time.

use crate::RadixSort;

#[cfg(target_pointer_width = "64")]
type NativeSigned = i64;
#[cfg(target_pointer_width = "64")]
type NativeUnsigned = u64;

#[cfg(target_pointer_width = "32")]
type NativeSigned = i32;
#[cfg(target_pointer_width = "32")]
type NativeUnsigned = u32;

/// Sorts `data` in ascending order by delegating to the fixed-width MSD sort.
#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
pub fn radix_sort_isize(data: &mut [isize]) {
    let data: &mut [NativeSigned] = bytemuck::cast_slice_mut(data);
    data.radix_sort_msd();
}

/// Sorts `data` in ascending order by delegating to the fixed-width MSD sort.
#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
pub fn radix_sort_usize(data: &mut [usize]) {
    let data: &mut [NativeUnsigned] = bytemuck::cast_slice_mut(data);
    data.radix_sort_msd();
}
