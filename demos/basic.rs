use intradix::{radix_sort_isize, RadixSort};

fn main() {
    let mut inputs: Vec<i32> = vec![55, -22, 73, 4, -89, 0, 100, 3];
    inputs.radix_sort();
    println!("{:?}", &inputs[..]);

    let mut wide: Vec<u64> = vec![u64::MAX, 1 << 40, 7, 0, 1 << 63];
    wide.radix_sort_lsd();
    println!("{:?}", &wide[..]);

    let mut native: Vec<isize> = vec![isize::MAX, -1, 0, isize::MIN, 42];
    radix_sort_isize(&mut native);
    println!("{:?}", &native[..]);
}
