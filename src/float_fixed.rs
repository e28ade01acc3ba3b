/// Fixed-notation float converter (C5): `%f`/`%F`.
///
/// Grounded on `print_engine.rs`'s integer-scaling approach to float
/// rendering (multiply by a power of ten, round to an integer, split back
/// into integer/fractional digit runs) generalized per spec.md §4.4: the
/// reference scales by a hardcoded `1000` (three fractional digits); this
/// crate scales by a runtime power drawn from the [`POW10`] table so any
/// clamped precision up to 9 is supported, and replaces its truncating
/// round with round-half-to-even.
use crate::config::Config;
use crate::diagnostics;
use crate::emit::emit_reversed;
use crate::flags::Flags;
use crate::state::State;

/// `10^0 ..= 10^9`, indexed by clamped precision. Backs both the precision
/// ceiling (spec.md §4.4 step 3 — a `u64` can't hold a number scaled by
/// more than `10^9` without risking overflow for magnitudes near
/// [`Config::MAX_FLOAT`]) and the digit-split below.
const POW10: [u64; Config::POW10_TABLE_LEN] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

const FLOAT_BUF_SIZE: usize = Config::FTOA_BUFFER_SIZE;

pub(crate) struct FloatBuf {
    pub(crate) buf: [u8; FLOAT_BUF_SIZE],
    pub(crate) len: usize,
    overflowed: bool,
}

impl FloatBuf {
    fn new() -> Self {
        FloatBuf {
            buf: [0; FLOAT_BUF_SIZE],
            len: 0,
            overflowed: false,
        }
    }

    fn push(&mut self, byte: u8) {
        if self.len < FLOAT_BUF_SIZE {
            self.buf[self.len] = byte;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
    }

    fn push_n(&mut self, byte: u8, n: u32) {
        for _ in 0..n {
            self.push(byte);
        }
    }

    fn remaining(&self) -> u32 {
        (FLOAT_BUF_SIZE - self.len) as u32
    }
}

/// Renders `value` in fixed notation, honoring `state`'s flags/width/
/// precision. `uppercase` selects `NAN`/`INF` vs `nan`/`inf` for `%F`/`%f`.
pub fn convert(state: &mut State, value: f64, uppercase: bool) {
    if value.is_nan() {
        emit_special(state, if uppercase { "NAN" } else { "nan" }, false);
        return;
    }
    if value.is_infinite() {
        emit_special(state, if uppercase { "INF" } else { "inf" }, value.is_sign_negative());
        return;
    }

    let negative = value.is_sign_negative();
    let magnitude = value.abs();

    if magnitude > Config::MAX_FLOAT {
        diagnostics::float_too_large(state.sink);
        return;
    }

    let requested_precision = if state.precision_set() {
        state.precision
    } else {
        Config::DEFAULT_FLOAT_PRECISION
    };
    // Precision ceiling (spec.md §4.4 step 3): the POW10 table only reaches
    // 10^9, so requests at or beyond that are split into a 9-digit
    // computed mantissa plus `excess` extra leading '0's in the fractional
    // part, rather than overflowing the scale multiply.
    let excess = requested_precision.saturating_sub((Config::POW10_TABLE_LEN - 1) as u32);
    let precision = requested_precision.min((Config::POW10_TABLE_LEN - 1) as u32);

    match build_digits(magnitude, negative, precision, excess, state.flags, state.width) {
        Some(d) => emit_reversed(state.sink, state.flags, state.width, &d.buf, d.len),
        None => diagnostics::float_buffer_exceeded(state.sink),
    }
}

/// Builds the reversed digit/sign/zero-pad buffer for a finite, in-range
/// magnitude — everything `convert` does after its special-value and
/// `MAX_FLOAT` checks. Split out so [`crate::float_exp`]'s adaptive `%g`
/// fallback can render into a buffer, strip trailing fractional zeros, and
/// only then apply width/alignment — something `convert`'s direct-to-sink
/// shape can't do after the fact.
pub(crate) fn build_digits(
    magnitude: f64,
    negative: bool,
    precision: u32,
    excess: u32,
    flags: Flags,
    width: u32,
) -> Option<FloatBuf> {
    let (int_part, frac_part) = scaled_digits(magnitude, precision);

    let mut d = FloatBuf::new();

    // Fractional digits, least-significant-first, zero-padded to precision.
    if precision > 0 || excess > 0 {
        let mut f = frac_part;
        for _ in 0..precision {
            d.push(b'0' + (f % 10) as u8);
            f /= 10;
        }
        d.push_n(b'0', excess);
        d.push(b'.');
    }

    // Integer digits, least-significant-first (at least one, even for 0).
    let mut i = int_part;
    if i == 0 {
        d.push(b'0');
    } else {
        while i > 0 {
            d.push(b'0' + (i % 10) as u8);
            i /= 10;
        }
    }

    let sign_len: u32 = if negative {
        1
    } else if flags.contains(Flags::SHOW_PLUS) {
        1
    } else if flags.contains(Flags::LEAD_SPACE) {
        1
    } else {
        0
    };

    // Zero-pad to width, reserving a column for the sign (§4.4 step 6).
    if flags.contains(Flags::ZERO_PAD) && !flags.contains(Flags::LEFT_ALIGN) {
        let content_len = sign_len + d.len as u32;
        let pad = width.saturating_sub(content_len).min(d.remaining());
        d.push_n(b'0', pad);
    }

    if negative {
        d.push(b'-');
    } else if flags.contains(Flags::SHOW_PLUS) {
        d.push(b'+');
    } else if flags.contains(Flags::LEAD_SPACE) {
        d.push(b' ');
    }

    if d.overflowed {
        None
    } else {
        Some(d)
    }
}

/// Scales `magnitude` by `10^precision` (`precision` already clamped to
/// `0..=9` by the caller), rounds to the nearest integer with
/// [`round_half_to_even`], and splits the result back into integer and
/// fractional digit groups. Shared with the exponential converter, which
/// needs the same scale-round-split arithmetic for its mantissa and for
/// `%g`'s fixed-style fallback.
pub(crate) fn scaled_digits(magnitude: f64, precision: u32) -> (u64, u64) {
    let scale = POW10[precision as usize];
    let scaled = round_half_to_even(magnitude * scale as f64);
    (scaled / scale, scaled % scale)
}

/// Round-half-to-even: ties round to whichever neighbor is even. Unlike the
/// IEEE rule's literal tie-break, a tie that lands on zero also rounds
/// up rather than down to `-0`-adjacent territory — zero is even, so this
/// is the same rule, stated for the case that's easy to get backwards.
pub(crate) fn round_half_to_even(x: f64) -> u64 {
    let floor = x.floor();
    let frac = x - floor;
    let floor_u = floor as u64;

    if frac > 0.5 {
        floor_u + 1
    } else if frac < 0.5 {
        floor_u
    } else if floor_u % 2 == 0 {
        floor_u
    } else {
        floor_u + 1
    }
}

fn emit_special(state: &mut State, word: &str, negative: bool) {
    let sign_len: u32 = if negative {
        1
    } else if state.flags.contains(Flags::SHOW_PLUS) {
        1
    } else if state.flags.contains(Flags::LEAD_SPACE) {
        1
    } else {
        0
    };
    let content_len = sign_len + word.len() as u32;
    let pad = state.width.saturating_sub(content_len);
    let left_align = state.flags.contains(Flags::LEFT_ALIGN);

    if !left_align {
        for _ in 0..pad {
            state.putchar(b' ');
        }
    }
    if negative {
        state.putchar(b'-');
    } else if state.flags.contains(Flags::SHOW_PLUS) {
        state.putchar(b'+');
    } else if state.flags.contains(Flags::LEAD_SPACE) {
        state.putchar(b' ');
    }
    state.puts(word);
    if left_align {
        for _ in 0..pad {
            state.putchar(b' ');
        }
    }
}
