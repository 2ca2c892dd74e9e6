mod insertion_sort;
mod lsd_sort;
mod msd_sort;
mod out_of_place_sort;

pub use insertion_sort::*;
pub use lsd_sort::*;
pub use msd_sort::*;
pub use out_of_place_sort::*;
