/// Primitive emitters shared by every numeric converter (C3).
///
/// `emit_reversed` is grounded on `print_engine.rs`'s `write_buf` (which
/// walks a stack itoa buffer forward from a computed start index, since the
/// digits were generated least-significant-first); generalized here to also
/// own the width/alignment padding logic spec.md §4.2 assigns to this
/// layer rather than to the integer/float converters themselves.
use crate::flags::Flags;
use crate::sink::Sink;

/// Emits `buf[0..len]` in reverse order (`buf[len-1], buf[len-2], ..., buf[0]`),
/// applying width padding per §4.2:
///
/// 1. Right-aligned (neither `-` nor `0`): leading spaces first.
/// 2. The reversed content.
/// 3. Left-aligned (`-`): trailing spaces to reach `width`.
///
/// Zero-padding is **not** handled here — by the time a converter calls
/// this, any zero-padding has already been baked into `buf` as literal `'0'`
/// bytes (so it travels with the digits, inside the sign/prefix framing).
/// This mirrors the reference design: the converter decides *what* to pad
/// with, this primitive only ever pads with spaces around the finished
/// content.
pub fn emit_reversed(sink: &mut Sink, flags: Flags, width: u32, buf: &[u8], len: usize) {
    let content_len = len as u32;
    let pad = width.saturating_sub(content_len);

    if !flags.intersects(Flags::LEFT_ALIGN | Flags::ZERO_PAD) {
        for _ in 0..pad {
            sink.put(b' ');
        }
    }

    for i in (0..len).rev() {
        sink.put(buf[i]);
    }

    if flags.contains(Flags::LEFT_ALIGN) {
        for _ in 0..pad {
            sink.put(b' ');
        }
    }
}

/// Emits `bytes` forward (already the exact, precision-capped content),
/// applying the same width/alignment padding as [`emit_reversed`] — the
/// non-reversed counterpart used by `%s` and `%c`, whose content is
/// generated front-to-back rather than digit-reversed. Zero-padding never
/// applies to these specifiers (spec.md §4.8), so only space padding is
/// considered here.
pub fn emit_padded(sink: &mut Sink, flags: Flags, width: u32, bytes: &[u8]) {
    let pad = width.saturating_sub(bytes.len() as u32);
    let left_align = flags.contains(Flags::LEFT_ALIGN);

    if !left_align {
        for _ in 0..pad {
            sink.put(b' ');
        }
    }
    sink.put_bytes(bytes);
    if left_align {
        for _ in 0..pad {
            sink.put(b' ');
        }
    }
}
