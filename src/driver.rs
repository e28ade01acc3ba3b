/// Directive parser / driver (C8).
///
/// Grounded on `examples/Working-From-Home-TacOS/src/io/print_engine.rs`'s
/// `format()` — a byte-index walk with explicit sub-state advances — but
/// widened from its `{}`/`{:x}` grammar to the full `%` flags/width/
/// precision/size/specifier state machine spec.md §4.7 describes.
use crate::args::Args;
use crate::diagnostics;
use crate::flags::Flags;
use crate::handlers;
use crate::sink::Sink;
use crate::specifier_table;
use crate::state::{Size, State};

/// Drives one top-level (or recursively re-entered) format call against
/// `sink`, returning the number of bytes submitted to it during this call
/// (spec.md §8 property 1: identical whether or not `sink` discards).
pub(crate) fn run(sink: &mut Sink, format: &str, args: &mut Args) -> usize {
    let start = sink.len();
    let bytes = format.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            sink.put(b);
            i += 1;
            continue;
        }

        i += 1;
        if i >= bytes.len() {
            // Trailing lone '%' at the end of the format string: nothing
            // follows to parse, emit it literally.
            sink.put(b'%');
            break;
        }

        // PARSING_FLAGS
        let mut flags = Flags::empty();
        while i < bytes.len() {
            match bytes[i] {
                b'0' => flags.insert(Flags::ZERO_PAD),
                b'-' => flags.insert(Flags::LEFT_ALIGN),
                b'+' => flags.insert(Flags::SHOW_PLUS),
                b' ' => flags.insert(Flags::LEAD_SPACE),
                b'#' => flags.insert(Flags::ALT_FORM),
                _ => break,
            }
            i += 1;
        }

        // PARSING_WIDTH
        let mut width: u32 = 0;
        if i < bytes.len() && bytes[i] == b'*' {
            i += 1;
            let w = args.next_signed() as i32;
            if w < 0 {
                flags.insert(Flags::LEFT_ALIGN);
                width = w.unsigned_abs();
            } else {
                width = w as u32;
            }
        } else {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                width = width.saturating_mul(10).saturating_add((bytes[i] - b'0') as u32);
                i += 1;
            }
        }

        // PARSING_PRECISION
        let mut precision: u32 = 0;
        if i < bytes.len() && bytes[i] == b'.' {
            flags.insert(Flags::PRECISION_SET);
            i += 1;
            if i < bytes.len() && bytes[i] == b'*' {
                i += 1;
                let p = args.next_signed() as i32;
                precision = p.max(0) as u32;
            } else {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    precision = precision.saturating_mul(10).saturating_add((bytes[i] - b'0') as u32);
                    i += 1;
                }
            }
        }

        // PARSING_SIZE
        let size = parse_size(bytes, &mut i);

        // DISPATCH
        if i >= bytes.len() {
            // Format string ends mid-directive with no specifier byte —
            // there's nothing sane to dispatch to; stop here rather than
            // reading past the end (argument starvation is the only
            // "undefined" case spec.md §7 names, this isn't that).
            break;
        }
        let specifier = bytes[i];
        i += 1;

        if specifier > 0x7E {
            diagnostics::unknown_specifier(sink, specifier);
            continue;
        }

        {
            let mut state = State {
                flags,
                width,
                precision,
                size,
                specifier,
                args: &mut *args,
                sink: &mut *sink,
            };

            if let Some(handler) = specifier_table::lookup(specifier) {
                handler(&mut state);
            } else if !handlers::dispatch_builtin(&mut state) {
                diagnostics::unknown_specifier(state.sink, specifier);
            }
        }
    }

    sink.len() - start
}

/// Parses the `hh|h|l|ll|t|j|z` size fragment starting at `*i`, advancing
/// `*i` past whatever it consumes. `t`/`j`/`z` remap to `Long`/`LongLong`
/// per the host's corresponding C type width (spec.md §3) — on this crate's
/// 64-bit model, that's `LongLong`, gated by the `long-long`/`ptrdiff`
/// features exactly as spec.md §10.3 describes.
fn parse_size(bytes: &[u8], i: &mut usize) -> Size {
    if *i + 1 < bytes.len() && bytes[*i] == b'l' && bytes[*i + 1] == b'l' {
        *i += 2;
        return long_or_long_long();
    }
    if *i < bytes.len() {
        match bytes[*i] {
            b'l' => {
                *i += 1;
                return Size::Long;
            }
            b'h' => {
                if *i + 1 < bytes.len() && bytes[*i + 1] == b'h' {
                    *i += 2;
                    return Size::Char;
                }
                *i += 1;
                return Size::Short;
            }
            b'j' | b'z' => {
                *i += 1;
                return long_or_long_long();
            }
            b't' if cfg!(feature = "ptrdiff") => {
                *i += 1;
                return long_or_long_long();
            }
            _ => {}
        }
    }
    Size::Default
}

#[cfg(feature = "long-long")]
fn long_or_long_long() -> Size {
    Size::LongLong
}

#[cfg(not(feature = "long-long"))]
fn long_or_long_long() -> Size {
    Size::Long
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Arg, Args};
    use crate::sink::BufSink;

    macro_rules! render {
        ($buf:ident, $n:ident, $format:expr, $args:expr) => {
            let mut out = [0u8; 256];
            let mut bs = BufSink::new(&mut out);
            let $n = {
                let mut writer = bs.writer();
                let mut sink = Sink::new(&mut writer);
                run(&mut sink, $format, &mut Args::new($args))
            };
            let $buf = bs;
        };
    }

    #[test]
    fn literal_passthrough() {
        render!(bs, n, "no directives here", &[]);
        assert_eq!(bs.as_str().unwrap(), "no directives here");
        assert_eq!(n, "no directives here".len());
    }

    #[test]
    fn scenario_s1() {
        render!(
            bs,
            n,
            "Hello %s, you are %d years old",
            &[Arg::Str("Ada"), Arg::I32(37)]
        );
        assert_eq!(bs.as_str().unwrap(), "Hello Ada, you are 37 years old");
        assert_eq!(n, bs.as_str().unwrap().len());
    }

    #[test]
    fn scenario_s2() {
        render!(bs, _n, "%08x", &[Arg::U32(0xabc)]);
        assert_eq!(bs.as_str().unwrap(), "00000abc");
    }

    #[test]
    fn scenario_s7_alt_form() {
        render!(
            bs,
            _n,
            "%#b %#o %#x %#X",
            &[Arg::U32(5), Arg::U32(8), Arg::U32(255), Arg::U32(255)]
        );
        assert_eq!(bs.as_str().unwrap(), "0b101 010 0xff 0XFF");
    }

    #[test]
    fn trailing_percent_is_literal() {
        render!(bs, _n, "100%", &[]);
        assert_eq!(bs.as_str().unwrap(), "100%");
    }

    #[test]
    fn unknown_specifier_diagnostic() {
        render!(bs, _n, "%Q", &[]);
        assert_eq!(bs.as_str().unwrap(), "%!(unknown specifier='Q')");
    }
}
