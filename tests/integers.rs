//! Integer converter (C4) edge cases: precision-as-min-digits, zero with
//! precision 0, `INT_MIN`-style magnitude, alternate-form prefixes, and
//! width/precision interaction (SPEC_FULL §4.3).

use fctprintf::{Arg, Args, BufSink, Sink};

fn render(format: &str, args: &[Arg]) -> String {
    let mut buf = [0u8; 256];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        fctprintf::vfctprintf(&mut sink, format, &mut Args::new(args));
    }
    bs.as_str().expect("test format strings are ASCII").to_string()
}

#[test]
fn precision_zero_value_zero_emits_nothing() {
    assert_eq!(render("%.0d", &[Arg::I32(0)]), "");
    assert_eq!(render("[%.0d]", &[Arg::I32(0)]), "[]");
}

#[test]
fn precision_as_minimum_digit_count() {
    assert_eq!(render("%.5d", &[Arg::I32(42)]), "00042");
    assert_eq!(render("%.2d", &[Arg::I32(12345)]), "12345");
}

#[test]
fn precision_disables_zero_pad() {
    // Precision wins over the `0` flag (§4.3 policy).
    assert_eq!(render("%010.3d", &[Arg::I32(7)]), "       007");
}

#[test]
fn min_magnitude_does_not_overflow() {
    assert_eq!(render("%d", &[Arg::I64(i64::MIN)]), "-9223372036854775808");
}

#[test]
fn unsigned_clears_sign_flags() {
    assert_eq!(render("%+u", &[Arg::I32(5)]), "5");
    assert_eq!(render("% u", &[Arg::I32(5)]), "5");
}

#[test]
fn alternate_form_prefixes_only_on_nonzero() {
    assert_eq!(render("%#x", &[Arg::U32(0)]), "0");
    assert_eq!(render("%#o", &[Arg::U32(0)]), "0");
    assert_eq!(render("%#b", &[Arg::U32(0)]), "0");
    assert_eq!(render("%#x", &[Arg::U32(1)]), "0x1");
}

#[test]
fn hex_case_follows_specifier() {
    assert_eq!(render("%x", &[Arg::U32(0xDEAD)]), "dead");
    assert_eq!(render("%X", &[Arg::U32(0xDEAD)]), "DEAD");
}

#[test]
fn left_align_pads_trailing_spaces() {
    assert_eq!(render("[%-6d]", &[Arg::I32(42)]), "[42    ]");
    assert_eq!(render("[%6d]", &[Arg::I32(42)]), "[    42]");
}

#[test]
fn width_star_from_args() {
    assert_eq!(render("%*d", &[Arg::I32(6), Arg::I32(42)]), "    42");
}

#[test]
fn negative_star_width_left_aligns() {
    assert_eq!(render("[%*d]", &[Arg::I32(-6), Arg::I32(42)]), "[42    ]");
}

#[test]
fn pointer_is_zero_padded_hex_upper() {
    let out = render("%p", &[Arg::Ptr(0x1000usize as *const core::ffi::c_void)]);
    assert_eq!(out.len(), 2 * core::mem::size_of::<usize>());
    assert!(out.ends_with("1000"));
    assert!(out.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn pointer_ignores_sign_flags() {
    // §4.3's "clear +/space for the unsigned family" applies to `%p` too,
    // since it's defined as `%0*X` (§4.8) — no leading sign before the hex.
    let ptr = 0x1000usize as *const core::ffi::c_void;
    assert_eq!(render("%+p", &[Arg::Ptr(ptr)]), render("%p", &[Arg::Ptr(ptr)]));
    assert_eq!(render("% p", &[Arg::Ptr(ptr)]), render("%p", &[Arg::Ptr(ptr)]));
    assert!(!render("%+p", &[Arg::Ptr(ptr)]).starts_with('+'));
}
