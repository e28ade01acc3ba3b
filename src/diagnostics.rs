/// Embedded diagnostics (C11).
///
/// The engine has no logger and no panic path for malformed directives or
/// converter limits (spec.md §7: "nothing is logged, nothing is fatal") —
/// instead, a rejected directive writes a short bracketed diagnostic
/// straight into the output stream, in the same spirit as Go's `%!v(PANIC)`
/// or Rust's own `{:?}` formatter falling back to an error string rather
/// than unwinding. Grounded on the teacher's hand-rolled panic formatting
/// in `panic.rs` (no `std::error::Error`, no `thiserror` — `core` alone).
use crate::sink::Sink;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes `byte` as `XX` hex, e.g. `0x7e` -> "7e".
fn write_hex_byte(sink: &mut Sink, byte: u8) {
    sink.put(HEX_DIGITS[(byte >> 4) as usize]);
    sink.put(HEX_DIGITS[(byte & 0x0f) as usize]);
}

/// `%!(unknown specifier='X')` (printable) or `%!(unknown specifier='\xHH')`
/// (non-printable) — emitted when a directive's specifier byte has no
/// installed handler (§4.7, §7, §6). The reference implementation this
/// spec is drawn from emits the raw nibble *values* instead of ASCII hex
/// digits in the non-printable case; spec.md §9 calls that out as a bug and
/// asks for proper `\xHH` ASCII hex here, which is what `write_hex_byte`
/// does.
pub fn unknown_specifier(sink: &mut Sink, specifier: u8) {
    sink.put_str("%!(unknown specifier='");
    if specifier.is_ascii_graphic() || specifier == b' ' {
        sink.put(specifier);
    } else {
        sink.put_str("\\x");
        write_hex_byte(sink, specifier);
    }
    sink.put_str("')");
}

/// `%!(exceeded PICO_PRINTF_FTOA_BUFFER_SIZE)` — a float converter's bounded
/// digit buffer could not hold the rendered value (§4.4, §7, §6).
pub fn float_buffer_exceeded(sink: &mut Sink) {
    sink.put_str("%!(exceeded PICO_PRINTF_FTOA_BUFFER_SIZE)");
}

/// `%!(exceeded PICO_PRINTF_MAX_FLOAT)` — `%f`/`%F` refuses a magnitude
/// above [`crate::Config::MAX_FLOAT`] rather than rendering unboundedly
/// many integer digits (§4.4, §7, §9, §6).
pub fn float_too_large(sink: &mut Sink) {
    sink.put_str("%!(exceeded PICO_PRINTF_MAX_FLOAT)");
}

/// Returned by [`crate::install_specifier`] when the requested byte falls
/// outside the installable range (spec.md §4.6). Registration may otherwise
/// freely overwrite a built-in entry, so there's no "reserved" rejection —
/// only out-of-range.
///
/// Deliberately `core`-only: no `std::error::Error` impl (this crate has no
/// `std`), no `thiserror` (needs `std` for its derive's trait bound). Hand
/// rolled `Debug`/`Display`, matching the rest of the crate's diagnostics.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RejectedSpecifier {
    /// The byte is outside the installable printable-ASCII range.
    OutOfRange(u8),
}

impl core::fmt::Debug for RejectedSpecifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RejectedSpecifier::OutOfRange(b) => write!(f, "RejectedSpecifier::OutOfRange({b:#04x})"),
        }
    }
}

impl core::fmt::Display for RejectedSpecifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RejectedSpecifier::OutOfRange(b) => {
                write!(f, "specifier {b:#04x} is outside the installable range")
            }
        }
    }
}
