#![no_std]
#![no_main]

use qsort::{is_sorted, run, Console, Options, SAMPLE};
use usys::{debug, eprintln, trace, warn};

/// Console backed by the runtime's print syscalls.
struct SysConsole;

impl Console for SysConsole {
    fn print_int(&mut self, value: i32) {
        let _ = usys::print_int(value);
    }
    fn print_str(&mut self, s: &str) {
        let _ = usys::print_str(s);
    }
}

#[no_mangle]
pub extern "C" fn _start(argc: usize, argv: *const *const u8, _envp: *const *const u8) -> ! {
    let args = unsafe { usys::args(argc, argv) };
    let opts = Options::parse(args.iter().skip(1).copied(), |e| {
        warn!("qsort: {}, ignored", e);
    });
    usys::log::set_log_level(opts.log_level);
    trace!("argc={} collected={}", argc, args.len());

    main();
    usys::exit();
}

fn main() {
    let mut arr = SAMPLE;
    debug!("sorting {} elements", arr.len());

    run(&mut SysConsole, &mut arr);

    debug!("done, sorted={}", is_sorted(&arr));
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    eprintln!("qsort: {}", info);
    usys::exit_with(1);
}
