/// Built-in specifier handlers (C9).
///
/// Wires the byte → conversion mapping from spec.md §4.8 to C3-C6, grounded
/// on the dispatch `match` in
/// `other_examples/.../lights0123-printf-compat__src-parser.rs.rs` (one
/// arm per specifier byte, delegating to a shared converter). Feature-gated
/// arms follow spec.md §6/§10.3: with a converter compiled out, the
/// specifier still consumes its argument and prints `"??"`.
use crate::args::StrLike;
use crate::emit;
use crate::flags::Flags;
use crate::int_conv::{self, Base};
use crate::state::State;

/// Tries every built-in specifier byte against `state.specifier`, rendering
/// through `state.sink` on a match. Returns whether a built-in handled it —
/// `false` means the driver should fall through to the unknown-specifier
/// diagnostic.
pub(crate) fn dispatch_builtin(state: &mut State) -> bool {
    match state.specifier {
        b'd' | b'i' => signed_decimal(state),
        b'u' => unsigned(state, Base::DEC),
        b'x' => unsigned(state, Base::HEX_LOWER),
        b'X' => unsigned(state, Base::HEX_UPPER),
        b'o' => unsigned(state, Base::OCT),
        b'b' => unsigned(state, Base::BIN),
        b'c' => char_spec(state),
        b's' => string_spec(state),
        b'p' => pointer_spec(state),
        b'%' => state.putchar(b'%'),
        b'f' | b'F' => float_fixed_spec(state, state.specifier == b'F'),
        b'e' | b'E' => float_exp_spec(state, state.specifier == b'E', false),
        b'g' | b'G' => float_exp_spec(state, state.specifier == b'G', true),
        _ => return false,
    }
    true
}

fn signed_decimal(state: &mut State) {
    let v = state.args.next_signed();
    int_conv::convert(state, Base::DEC, v.unsigned_abs(), v < 0);
}

fn unsigned(state: &mut State, base: Base) {
    // §4.3: `+`/` ` never apply to unsigned conversions.
    state.flags = state.flags.cleared_for_unsigned();
    let v = state.args.next_unsigned();
    int_conv::convert(state, base, v, false);
}

fn char_spec(state: &mut State) {
    let c = state.args.next_byte();
    emit::emit_padded(state.sink, state.flags, state.width, &[c]);
}

fn string_spec(state: &mut State) {
    let max = if state.precision_set() {
        Some(state.precision as usize)
    } else {
        None
    };
    match state.args.next_string_like() {
        Some(StrLike::Str(s)) => {
            let len = max.map_or(s.len(), |m| m.min(s.len()));
            emit::emit_padded(state.sink, state.flags, state.width, &s.as_bytes()[..len]);
        }
        Some(StrLike::CStr(ptr)) => emit_cstr_capped(state, ptr, max),
        None => {}
    }
}

/// Bounded `strlen` against a raw NUL-terminated pointer, early-stopping at
/// `max` if given (spec.md §3: "precision for `%s` is applied by
/// early-stop", never by allocating a buffer sized by the string's actual
/// length). Grounded on `klib/string.rs`'s `strlen`, widened with the early
/// stop.
fn emit_cstr_capped(state: &mut State, ptr: *const u8, max: Option<usize>) {
    if ptr.is_null() {
        return;
    }
    let limit = max.unwrap_or(usize::MAX);
    let mut len = 0usize;
    // SAFETY: `ptr` is caller-supplied as a NUL-terminated string (the
    // contract `Arg::CStr` documents); scanning stops at the first NUL or
    // at `limit`, whichever comes first.
    unsafe {
        while len < limit && *ptr.add(len) != 0 {
            len += 1;
        }
    }

    let content_len = len as u32;
    let pad = state.width.saturating_sub(content_len);
    let left_align = state.flags.contains(Flags::LEFT_ALIGN);

    if !left_align {
        for _ in 0..pad {
            state.putchar(b' ');
        }
    }
    // SAFETY: `len` was bounded by the scan above.
    unsafe {
        for i in 0..len {
            state.putchar(*ptr.add(i));
        }
    }
    if left_align {
        for _ in 0..pad {
            state.putchar(b' ');
        }
    }
}

fn pointer_spec(state: &mut State) {
    let p = state.args.next_ptr() as usize as u64;
    // spec.md §4.8: "%p" is "equivalent to %0*X with width = 2*sizeof(pointer)",
    // and §4.3 clears `+`/` ` for the whole `u x X o b` family `%X` belongs
    // to — without this, "%+p"/"% p" would wedge a sign in front of the
    // zero-padded hex digits.
    state.flags = state.flags.cleared_for_unsigned();
    state.flags.insert(Flags::ZERO_PAD);
    state.flags.remove(Flags::PRECISION_SET);
    state.width = (2 * core::mem::size_of::<usize>()) as u32;
    int_conv::convert(state, Base::HEX_UPPER, p, false);
}

#[cfg(feature = "float")]
fn float_fixed_spec(state: &mut State, uppercase: bool) {
    let v = state.args.next_f64();
    crate::float_fixed::convert(state, v, uppercase);
}

#[cfg(not(feature = "float"))]
fn float_fixed_spec(state: &mut State, _uppercase: bool) {
    let _ = state.args.next_f64();
    state.puts("??");
}

#[cfg(feature = "exponential")]
fn float_exp_spec(state: &mut State, uppercase: bool, adaptive: bool) {
    let v = state.args.next_f64();
    crate::float_exp::convert(state, v, uppercase, adaptive);
}

#[cfg(not(feature = "exponential"))]
fn float_exp_spec(state: &mut State, _uppercase: bool, _adaptive: bool) {
    let _ = state.args.next_f64();
    state.puts("??");
}
