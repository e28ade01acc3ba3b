/// Exponential-notation float converter (C6): `%e`/`%E`, and the adaptive
/// `%g`/`%G` dispatcher that falls back to fixed notation in range.
///
/// New relative to the teacher (TacOS never prints floats); implements
/// spec.md §4.5 directly. The spec's decimal-exponent estimate is a
/// bit-trick meant to avoid a libm dependency on a freestanding target
/// lacking `log10`; this crate gets the same libm-free property for free
/// from `f64::powi` (repeated squaring, no transcendental functions,
/// available in `core`), so the exponent estimate below uses `powi`
/// directly rather than the spec's continued-fraction expansion of `10^e`
/// — same inputs, same off-by-one correction loop, simpler arithmetic.
use crate::config::Config;
use crate::emit::emit_reversed;
use crate::flags::Flags;
use crate::float_fixed;
use crate::int_conv::{self, Base};
use crate::state::State;

/// Renders `value` per spec.md §4.5. `uppercase` selects `E`/`e` (and the
/// `NAN`/`INF` case, via `float_fixed`'s special-value path); `adaptive`
/// selects `%g`/`%G` behavior over plain `%e`/`%E`.
pub fn convert(state: &mut State, value: f64, uppercase: bool, adaptive: bool) {
    if value.is_nan() || value.is_infinite() {
        // Special values have no exponent form (§4.5 step 1) — defer to the
        // fixed converter's special-value handling verbatim.
        float_fixed::convert(state, value, uppercase);
        return;
    }

    let significant = if state.precision_set() {
        state.precision
    } else {
        Config::DEFAULT_FLOAT_PRECISION
    };

    if adaptive && (value == 0.0 || (value.abs() >= 1e-4 && value.abs() < 1e6)) {
        // §4.5 step 4: in-range `%g`/`%G` falls back to fixed notation, then
        // (conventional `%g` behavior, not spelled out for `%f`) strips
        // trailing fractional zeros — and the point itself, if nothing's
        // left of it — unless `#` asks to keep them.
        let e = if value == 0.0 { 0 } else { decimal_exponent(value.abs()) };
        let requested_precision = (significant as i32 - 1 - e).max(0) as u32;
        let excess = requested_precision.saturating_sub((Config::POW10_TABLE_LEN - 1) as u32);
        let precision = requested_precision.min((Config::POW10_TABLE_LEN - 1) as u32);

        let negative = value.is_sign_negative();
        let magnitude = value.abs();
        let render_flags = state.flags.difference(Flags::ZERO_PAD);

        match float_fixed::build_digits(magnitude, negative, precision, excess, render_flags, 0) {
            Some(d) => {
                let frac_digits = if precision > 0 || excess > 0 {
                    (precision + excess) as usize
                } else {
                    0
                };
                let keep_point = state.flags.contains(Flags::ALT_FORM);
                let trim = trailing_zero_trim(&d.buf, frac_digits, keep_point);
                emit_reversed(state.sink, state.flags, state.width, &d.buf[trim..], d.len - trim);
            }
            None => crate::diagnostics::float_buffer_exceeded(state.sink),
        }
        return;
    }

    let negative = value.is_sign_negative();
    let magnitude = value.abs();
    let e = if magnitude == 0.0 { 0 } else { decimal_exponent(magnitude) };

    // For `%g`/`%G`, one significant figure becomes the mantissa's integer
    // digit, so only `significant - 1` remain as fractional digits.
    let sig_digits = if adaptive {
        significant.saturating_sub(1)
    } else {
        significant
    };
    let excess = sig_digits.saturating_sub((Config::POW10_TABLE_LEN - 1) as u32);
    let precision = sig_digits.min((Config::POW10_TABLE_LEN - 1) as u32);

    let mantissa = if magnitude == 0.0 { 0.0 } else { magnitude / pow10(e) };

    // §4.5 step 3: "eNN" is 4 bytes total, "eNNN" is 5, once |e| reaches 100.
    let exp_digit_width: u32 = if e.abs() < 100 { 2 } else { 3 };
    let exp_field_total = exp_digit_width + 2; // 'e' + sign + digits

    let outer_width = state.width;
    let left_align = state.flags.contains(Flags::LEFT_ALIGN);
    let directive_start = state.len();

    // Mantissa rendering, reduced field width (suppressed entirely when
    // left-aligned, per §4.5 step 3 — the trailing pad at the end covers
    // the whole directive instead). `%g`/`%G` additionally strips trailing
    // fractional zeros from the mantissa, same as the in-range fallback.
    let mantissa_width = if left_align {
        0
    } else {
        outer_width.saturating_sub(exp_field_total)
    };
    let render_flags = if adaptive {
        state.flags.difference(Flags::ZERO_PAD)
    } else {
        state.flags
    };
    match float_fixed::build_digits(mantissa, negative, precision, excess, render_flags, mantissa_width) {
        Some(d) => {
            if adaptive {
                let frac_digits = if precision > 0 || excess > 0 {
                    (precision + excess) as usize
                } else {
                    0
                };
                let keep_point = state.flags.contains(Flags::ALT_FORM);
                let trim = trailing_zero_trim(&d.buf, frac_digits, keep_point);
                emit_reversed(state.sink, render_flags, mantissa_width, &d.buf[trim..], d.len - trim);
            } else {
                emit_reversed(state.sink, render_flags, mantissa_width, &d.buf, d.len);
            }
        }
        None => {
            crate::diagnostics::float_buffer_exceeded(state.sink);
            return;
        }
    }

    state.putchar(if uppercase { b'E' } else { b'e' });

    // Exponent: zero-padded signed decimal integer, fixed digit width.
    {
        let saved_flags = state.flags;
        let saved_width = state.width;

        state.flags = Flags::SHOW_PLUS | Flags::ZERO_PAD;
        state.width = exp_digit_width;
        int_conv::convert(state, Base::DEC, e.unsigned_abs() as u64, e < 0);

        state.flags = saved_flags;
        state.width = saved_width;
    }

    if left_align {
        let emitted = (state.len() - directive_start) as u32;
        let pad = outer_width.saturating_sub(emitted);
        for _ in 0..pad {
            state.putchar(b' ');
        }
    }
}

/// Counts how many leading bytes of a [`float_fixed::build_digits`] buffer
/// to skip so the *emitted* (reversed) output drops trailing fractional
/// zeros — and the decimal point too, if every fractional digit was zero
/// and `keep_point` (the `#` flag) isn't forcing it to stay.
fn trailing_zero_trim(buf: &[u8], frac_digits: usize, keep_point: bool) -> usize {
    if frac_digits == 0 {
        return 0;
    }
    let mut trim = 0;
    while trim < frac_digits && buf[trim] == b'0' {
        trim += 1;
    }
    if trim == frac_digits && !keep_point {
        trim += 1;
    }
    trim
}

/// Estimates the base-10 exponent `e` such that `10^e <= magnitude < 10^(e+1)`
/// (spec.md §4.5 step 2). `magnitude` must be finite and positive.
fn decimal_exponent(magnitude: f64) -> i32 {
    let bits = magnitude.to_bits();
    let exp2 = ((bits >> 52) & 0x7FF) as i32 - 1023;
    let m = magnitude / pow2(exp2); // normalized mantissa, in [1, 2)

    let estimate = 0.17609 + exp2 as f64 * 0.30103 + (m - 1.5) * 0.28953;
    let mut e = estimate.floor() as i32;

    // Off-by-one correction (§4.5 step 2): the estimate above is not exact.
    while pow10(e) > magnitude {
        e -= 1;
    }
    while pow10(e + 1) <= magnitude {
        e += 1;
    }
    e
}

fn pow2(n: i32) -> f64 {
    2f64.powi(n)
}

fn pow10(n: i32) -> f64 {
    10f64.powi(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_exponent_matches_known_values() {
        assert_eq!(decimal_exponent(1.0), 0);
        assert_eq!(decimal_exponent(9.999), 0);
        assert_eq!(decimal_exponent(10.0), 1);
        assert_eq!(decimal_exponent(0.0001), -4);
        assert_eq!(decimal_exponent(1e7), 7);
        assert_eq!(decimal_exponent(123.456), 2);
    }
}
