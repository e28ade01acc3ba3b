//! `%s`/`BufSink` UTF-8 edge cases: precision truncation is byte-oriented
//! (spec.md §3 — `%s`'s precision is applied by early-stop, never by
//! allocating a buffer sized by content), so it can legitimately land
//! mid-codepoint, and `Arg::CStr` (spec.md §9's `*c_char` FFI shape) can
//! point at bytes that were never UTF-8. Neither case should panic when it
//! reaches `BufSink::as_str`.

use fctprintf::{Arg, Args, BufSink, Sink};

fn render_bytes(format: &str, args: &[Arg]) -> Vec<u8> {
    let mut buf = [0u8; 256];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        fctprintf::vfctprintf(&mut sink, format, &mut Args::new(args));
    }
    bs.as_bytes().to_vec()
}

#[test]
fn precision_cutting_a_multibyte_char_in_half_does_not_panic() {
    // "é" is 2 UTF-8 bytes (0xC3 0xA9); ".1s" truncates to the first byte
    // alone, which is not valid UTF-8 on its own.
    let bytes = render_bytes("%.1s", &[Arg::Str("\u{e9}")]);
    assert_eq!(bytes, vec![0xC3]);

    let mut buf = [0u8; 8];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        fctprintf::vfctprintf(&mut sink, "%.1s", &mut Args::new(&[Arg::Str("\u{e9}")]));
    }
    assert!(bs.as_str().is_err());
    assert_eq!(bs.as_bytes(), &[0xC3]);
}

#[test]
fn cstr_argument_streams_non_utf8_bytes_without_panicking() {
    // A raw NUL-terminated byte string that is deliberately not valid UTF-8.
    let raw: [u8; 3] = [0xFF, 0xFE, 0x00];
    let bytes = render_bytes("%s", &[Arg::CStr(raw.as_ptr())]);
    assert_eq!(bytes, vec![0xFF, 0xFE]);

    let mut buf = [0u8; 8];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        fctprintf::vfctprintf(&mut sink, "%s", &mut Args::new(&[Arg::CStr(raw.as_ptr())]));
    }
    assert!(bs.as_str().is_err());
}

#[test]
fn valid_utf8_content_still_round_trips() {
    let mut buf = [0u8; 32];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        fctprintf::vfctprintf(&mut sink, "%s", &mut Args::new(&[Arg::Str("hello")]));
    }
    assert_eq!(bs.as_str().unwrap(), "hello");
}
