/// `alloc`-gated convenience wrapper (spec.md §10.3/§11): formats into a
/// heap-allocated `String` for hosted targets that do have an allocator but
/// still want `printf`-style format strings instead of `core::fmt`'s.
///
/// Grounded on the `fmt::Write`-over-a-buffer adapter shape in
/// `other_examples/.../fish-shell.../output.rs.rs`: collect raw bytes into
/// an owned buffer via a closure-backed [`Sink`], then decode the whole run
/// as UTF-8 once at the end rather than per byte.
use alloc::string::String;
use alloc::vec::Vec;

use crate::args::Args;
use crate::sink::Sink;

/// Renders `format`/`args` into a freshly allocated [`String`]. The core
/// engine itself never requires an allocator; this exists purely for
/// callers on hosted targets who have one and want the ergonomics.
///
/// Not every input renders valid UTF-8: `%s`'s precision truncation is
/// byte-oriented and can cut a multi-byte `char` in half, and an
/// `Arg::CStr` argument may point at bytes that were never UTF-8 at all
/// (spec.md §9's `*c_char` FFI shape). Rather than panicking on either
/// legitimately-supported input, this replaces invalid sequences the same
/// way `String::from_utf8_lossy` does (U+FFFD per malformed run).
pub fn format(format: &str, args: &mut Args) -> String {
    let mut buf = Vec::new();
    {
        let mut putc = |b: u8| buf.push(b);
        let mut sink = Sink::new(&mut putc);
        crate::vfctprintf(&mut sink, format, args);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Arg;

    #[test]
    fn formats_into_an_owned_string() {
        let s = format(
            "Hello %s, you are %d years old",
            &mut Args::new(&[Arg::Str("Ada"), Arg::I32(37)]),
        );
        assert_eq!(s, "Hello Ada, you are 37 years old");
    }

    #[test]
    fn non_utf8_cstr_is_replaced_rather_than_panicking() {
        let raw: [u8; 3] = [0xFF, 0xFE, 0x00];
        let s = format("%s", &mut Args::new(&[Arg::CStr(raw.as_ptr())]));
        assert_eq!(s, "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn precision_cutting_a_multibyte_char_in_half_is_replaced() {
        let s = format("%.1s", &mut Args::new(&[Arg::Str("\u{e9}")]));
        assert_eq!(s, "\u{FFFD}");
    }
}
