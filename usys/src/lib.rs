#![no_std]

use core::ffi::CStr;
use core::fmt::{self, Write};
use uapi::{is_err_sentinel, nr, SysErr, SysResult};

pub mod log;

pub use uapi;

/// Upper bound on argv entries collected by [`args`].
pub const MAX_ARGS: usize = 16;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fd(pub i32);

pub const STDOUT: Fd = Fd(1);
pub const STDERR: Fd = Fd(2);

#[inline(always)]
unsafe fn sys_ecall3(nr: usize, a0: usize, a1: usize, a2: usize) -> usize {
    let mut ret: usize;
    core::arch::asm!(
        "ecall",
        in("a7") nr,
        in("a0") a0,
        in("a1") a1,
        in("a2") a2,
        lateout("a0") ret,
        options(nostack),
    );
    ret
}
#[inline(always)]
unsafe fn sys_ecall1(nr: usize, a0: usize) -> usize {
    let mut ret: usize;
    core::arch::asm!(
        "ecall",
        in("a7") nr,
        in("a0") a0,
        lateout("a0") ret,
        options(nostack),
    );
    ret
}
#[inline(always)]
unsafe fn sys_ecall1_noreturn(nr: usize, a0: usize) -> ! {
    core::arch::asm!("ecall", in("a7") nr, in("a0") a0, options(noreturn, nostack));
}

/* -------- basic I/O ---------- */

pub fn write_fd(fd: Fd, buf: &[u8]) -> SysResult<usize> {
    let r = unsafe { sys_ecall3(nr::WRITE_FD, fd.0 as usize, buf.as_ptr() as usize, buf.len()) };
    if is_err_sentinel(r) { Err(SysErr::Fail) } else { Ok(r) }
}

/// Print a signed integer in decimal. Formatting happens in the runtime:
/// the value travels sign-extended in a0 under service code `PRINT_INT`.
pub fn print_int(value: i32) -> SysResult<()> {
    let r = unsafe { sys_ecall1(nr::PRINT_INT, value as isize as usize) };
    if is_err_sentinel(r) { Err(SysErr::Fail) } else { Ok(()) }
}

/// Print a string literal to stdout.
pub fn print_str(s: &str) -> SysResult<()> {
    STDOUT.write_all(s.as_bytes())
}

pub fn exit() -> ! {
    exit_with(0)
}
pub fn exit_with(status: i32) -> ! {
    unsafe { sys_ecall1_noreturn(nr::EXIT, status as isize as usize) }
}

/* ---------- tiny io traits ---------- */

pub trait IoWrite {
    fn write(&self, buf: &[u8]) -> SysResult<usize>;
    fn write_all(&self, mut buf: &[u8]) -> SysResult<()> {
        while !buf.is_empty() {
            let n = self.write(buf)?;
            if n == 0 { return Err(SysErr::Fail); }
            buf = &buf[n.min(buf.len())..];
        }
        Ok(())
    }
}

impl IoWrite for Fd {
    fn write(&self, b: &[u8]) -> SysResult<usize> { write_fd(*self, b) }
}

/* -------- process arguments ---------- */

/// Collect the NUL-terminated argv strings handed to `_start`.
/// Entries that are not UTF-8, and anything past [`MAX_ARGS`], are skipped.
///
/// # Safety
/// `argv` must point to `argc` valid C strings that live for the whole process.
pub unsafe fn args(argc: usize, argv: *const *const u8) -> heapless::Vec<&'static str, MAX_ARGS> {
    let mut out = heapless::Vec::new();
    if argv.is_null() {
        return out;
    }
    for i in 0..argc {
        let p = core::ptr::read(argv.add(i));
        if p.is_null() { break; }
        let Ok(s) = CStr::from_ptr(p as *const core::ffi::c_char).to_str() else { continue };
        if out.push(s).is_err() { break; }
    }
    out
}

/* -------- tiny stdio-style helpers ---------- */

pub struct Stderr;

impl Write for Stderr {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = STDERR.write_all(s.as_bytes());
        Ok(())
    }
}

#[macro_export]
macro_rules! eprint {
    ($($arg:tt)*) => {{
        let _ = core::fmt::write(&mut $crate::Stderr, format_args!($($arg)*));
    }}
}

#[macro_export]
macro_rules! eprintln {
    () => { $crate::eprint!("\n") };
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        $crate::eprint!(concat!($fmt, "\n") $(, $($arg)+)?);
    }}
}
