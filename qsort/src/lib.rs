#![cfg_attr(not(test), no_std)]

// Quicksort core logic - can be tested on host

pub mod cmdline;
pub mod console;

pub use cmdline::{OptionError, Options};
pub use console::{print_array, run, Console};

/// Number of elements in the demo array.
pub const N: usize = 8;

/// Demo input. Holds a duplicate (two 10s) on purpose.
pub const SAMPLE: [i32; N] = [10, 10, 8, 9, 1, 2, 3, 0];

/// Exchange two slots. A self-swap leaves the slice untouched.
#[inline]
pub fn swap(arr: &mut [i32], a: usize, b: usize) {
    arr.swap(a, b);
}

/// Lomuto partition of the closed range `[low, high]` around `arr[high]`.
///
/// Afterwards every element `<= pivot` sits before the returned index and
/// every element `> pivot` after it; ties go to the low side. Requires
/// `low <= high < arr.len()`, otherwise the slice indexing panics.
pub fn partition(arr: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = arr[high];
    // next slot for an element <= pivot
    let mut store = low;

    for j in low..high {
        if arr[j] <= pivot {
            swap(arr, store, j);
            store += 1;
        }
    }
    swap(arr, store, high);
    store
}

/// Recursively sort the closed range `[low, high]` in place.
/// Ranges with `low >= high` are left alone.
pub fn quick_sort(arr: &mut [i32], low: usize, high: usize) {
    if low < high {
        let pi = partition(arr, low, high);

        // pi - 1 would wrap when the pivot lands on index 0
        if pi > low {
            quick_sort(arr, low, pi - 1);
        }
        quick_sort(arr, pi + 1, high);
    }
}

/// Sort a whole slice. Empty slices are a no-op.
pub fn sort(arr: &mut [i32]) {
    if let Some(high) = arr.len().checked_sub(1) {
        quick_sort(arr, 0, high);
    }
}

pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
