//! Output side of the demo: the two runtime print primitives and the
//! driver that uses them.

/// The print primitives the runtime exposes.
pub trait Console {
    fn print_int(&mut self, value: i32);
    fn print_str(&mut self, s: &str);
}

/// Emit every element followed by a space, then a newline.
pub fn print_array<C: Console + ?Sized>(console: &mut C, arr: &[i32]) {
    for &v in arr {
        console.print_int(v);
        console.print_str(" ");
    }
    console.print_str("\n");
}

/// Print the array, sort it in place, print it again.
pub fn run<C: Console + ?Sized>(console: &mut C, arr: &mut [i32]) {
    console.print_str("Array: ");
    print_array(console, arr);

    crate::sort(arr);

    console.print_str("Sorted array: ");
    print_array(console, arr);
}
