/// Integer converter (C4).
///
/// Grounded on `print_engine.rs`'s `u32_to_base`/`write_u32`/`write_i32`
/// (least-significant-digit-first generation into a stack buffer, negation
/// via two's-complement magnitude, explicit per-base prefix emission),
/// generalized per spec.md §4.3 and the "Numeric width specialization"
/// design note: rather than the original's per-spec-char `match` arms and
/// the source's three macro-generated widths, this crate digit-generates
/// from a single `u64` magnitude regardless of the parsed length modifier
/// — every signed/unsigned width the engine supports fits in `i64`/`u64`,
/// so one routine covers `int`, `long`, and `long long` alike.
use crate::emit::emit_reversed;
use crate::flags::Flags;
use crate::state::State;

/// Numeral base the digits are generated in, plus case and prefix info for
/// `#` (alternate form).
#[derive(Clone, Copy)]
pub struct Base {
    pub radix: u64,
    pub uppercase: bool,
}

impl Base {
    pub const BIN: Base = Base { radix: 2, uppercase: false };
    pub const OCT: Base = Base { radix: 8, uppercase: false };
    pub const DEC: Base = Base { radix: 10, uppercase: false };
    pub const HEX_LOWER: Base = Base { radix: 16, uppercase: false };
    pub const HEX_UPPER: Base = Base { radix: 16, uppercase: true };
}

/// Bounded digit/sign/prefix/pad buffer. Sized generously (every realistic
/// zero-padded integer fits) rather than sized by `width`/`precision`
/// directly — per spec.md §3's invariant, the engine must never size a
/// buffer by attacker-controlled magnitude. A `width`/`precision` beyond
/// this capacity has its zero-padding silently clamped to what fits; this
/// is a documented, tested bound (see `tests/integers.rs`), not dead code.
const INT_BUF_SIZE: usize = 256;

struct DigitBuf {
    buf: [u8; INT_BUF_SIZE],
    len: usize,
}

impl DigitBuf {
    fn new() -> Self {
        DigitBuf {
            buf: [0; INT_BUF_SIZE],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        if self.len < INT_BUF_SIZE {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }

    fn push_n(&mut self, byte: u8, n: u32) {
        for _ in 0..n {
            self.push(byte);
        }
    }

    fn remaining(&self) -> u32 {
        (INT_BUF_SIZE - self.len) as u32
    }
}

/// Renders `magnitude` (already the absolute value) in `base`, honoring
/// `state`'s flags/width/precision, and streams it through `state.sink`.
///
/// `negative` marks a signed conversion's original sign (ignored — and
/// expected already cleared of SHOW_PLUS/LEAD_SPACE — for unsigned
/// specifiers per §4.3's "for u x X o b any SHOW_PLUS/LEAD_SPACE are
/// cleared before framing").
pub fn convert(state: &mut State, base: Base, magnitude: u64, negative: bool) {
    let mut flags = state.flags;
    let precision_set = flags.contains(Flags::PRECISION_SET);
    if precision_set {
        // Precision wins over zero-pad for integer conversions (§4.3 policy).
        flags.remove(Flags::ZERO_PAD);
    }

    let mut d = DigitBuf::new();

    // Step 1/2: digit-generate least-significant-first, honoring the
    // "precision 0 and value 0 emits nothing" special case (§4.3 step 1).
    let suppress_digit = magnitude == 0 && precision_set && state.precision == 0;
    let mut ndigits: u32 = 0;
    if !suppress_digit {
        if magnitude == 0 {
            d.push(b'0');
            ndigits = 1;
        } else {
            let mut v = magnitude;
            while v > 0 {
                let digit = (v % base.radix) as u8;
                let c = if digit < 10 {
                    b'0' + digit
                } else if base.uppercase {
                    b'A' + (digit - 10)
                } else {
                    b'a' + (digit - 10)
                };
                d.push(c);
                ndigits += 1;
                v /= base.radix;
            }
        }
    }

    // Step 3: precision-as-min-digits, or zero-pad-to-width; mutually
    // exclusive per the policy above. Octal's alternate-form leading zero
    // (§4.3 step 4) folds into the same pad count.
    let octal_alt_min = if base.radix == 8 && flags.contains(Flags::ALT_FORM) && magnitude != 0 {
        1
    } else {
        0
    };

    let sign_len: u32 = if negative {
        1
    } else if flags.contains(Flags::SHOW_PLUS) {
        1
    } else if flags.contains(Flags::LEAD_SPACE) {
        1
    } else {
        0
    };

    let prefix_len: u32 = if flags.contains(Flags::ALT_FORM) && magnitude != 0 {
        match base.radix {
            16 => 2, // "0x"/"0X"
            2 => 2,  // "0b"
            _ => 0,
        }
    } else {
        0
    };

    let precision_pad = if precision_set {
        state.precision.saturating_sub(ndigits).max(octal_alt_min)
    } else {
        octal_alt_min
    };

    let width_zero_pad = if !precision_set && flags.contains(Flags::ZERO_PAD) && !flags.contains(Flags::LEFT_ALIGN) {
        let content_len = sign_len + prefix_len + ndigits;
        state.width.saturating_sub(content_len)
    } else {
        0
    };

    let pad = precision_pad.max(width_zero_pad).min(d.remaining());
    d.push_n(b'0', pad);

    // Step 4: alternate-form prefix, pushed in reverse character order
    // (the buffer is emitted backwards, so "0x" is pushed as 'x' then '0').
    if prefix_len == 2 {
        match base.radix {
            16 => d.push(if base.uppercase { b'X' } else { b'x' }),
            2 => d.push(b'b'),
            _ => {}
        }
        d.push(b'0');
    }

    // Step 5: sign, pushed last so it prints first after reversal.
    if negative {
        d.push(b'-');
    } else if flags.contains(Flags::SHOW_PLUS) {
        d.push(b'+');
    } else if flags.contains(Flags::LEAD_SPACE) {
        d.push(b' ');
    }

    // Step 6: hand off to the shared reversed-buffer emitter for width
    // padding (spaces only — zero-padding is already baked in above).
    emit_reversed(state.sink, flags, state.width, &d.buf, d.len);
}
