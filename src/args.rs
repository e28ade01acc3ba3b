/// Type-erased argument cursor — this crate's analogue of a C `va_list`.
///
/// Grounded on `examples/Working-From-Home-TacOS/src/io/print_engine.rs`'s
/// `PrintArg` enum and its `From` impls, widened per spec.md's "Variadic
/// argument cursor" design note: a tagged-value stream consumed in format
/// order, one value per directive that needs one. Because each [`Arg`]
/// already carries its real width (the macros in `macros.rs` build the enum
/// from the argument's actual Rust type), the `size` length modifier parsed
/// out of the format string is advisory only — handlers read whatever
/// variant is actually there, exactly as spec.md §4.7 allows.
use core::ffi::c_void;

/// A single formatted argument, tagged with its shape.
#[derive(Copy, Clone)]
pub enum Arg<'a> {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F64(f64),
    Str(&'a str),
    /// A NUL-terminated byte string, for callers that don't have a `&str`
    /// handy (e.g. bytes coming from C FFI).
    CStr(*const u8),
    Char(u8),
    Ptr(*const c_void),
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(v)
    }
}
impl<'a> From<i8> for Arg<'a> {
    fn from(v: i8) -> Self {
        Arg::I32(v as i32)
    }
}
impl<'a> From<i16> for Arg<'a> {
    fn from(v: i16) -> Self {
        Arg::I32(v as i32)
    }
}
impl<'a> From<i32> for Arg<'a> {
    fn from(v: i32) -> Self {
        Arg::I32(v)
    }
}
impl<'a> From<i64> for Arg<'a> {
    fn from(v: i64) -> Self {
        Arg::I64(v)
    }
}
impl<'a> From<isize> for Arg<'a> {
    fn from(v: isize) -> Self {
        Arg::I64(v as i64)
    }
}
impl<'a> From<u8> for Arg<'a> {
    fn from(v: u8) -> Self {
        Arg::U32(v as u32)
    }
}
impl<'a> From<u16> for Arg<'a> {
    fn from(v: u16) -> Self {
        Arg::U32(v as u32)
    }
}
impl<'a> From<u32> for Arg<'a> {
    fn from(v: u32) -> Self {
        Arg::U32(v)
    }
}
impl<'a> From<u64> for Arg<'a> {
    fn from(v: u64) -> Self {
        Arg::U64(v)
    }
}
impl<'a> From<usize> for Arg<'a> {
    fn from(v: usize) -> Self {
        Arg::U64(v as u64)
    }
}
impl<'a> From<bool> for Arg<'a> {
    fn from(v: bool) -> Self {
        Arg::U32(v as u32)
    }
}
impl<'a> From<char> for Arg<'a> {
    fn from(v: char) -> Self {
        Arg::Char(v as u8)
    }
}

#[cfg(feature = "float")]
impl<'a> From<f32> for Arg<'a> {
    fn from(v: f32) -> Self {
        Arg::F64(v as f64)
    }
}
#[cfg(feature = "float")]
impl<'a> From<f64> for Arg<'a> {
    fn from(v: f64) -> Self {
        Arg::F64(v)
    }
}

/// A single-use, forward-only cursor over a slice of [`Arg`]s.
///
/// Caller-owned, per §5: the engine takes it by `&mut` reference and never
/// rewinds it. Consuming more arguments than the format string needs is
/// harmless; consuming fewer than a directive expects is the tagged-stream
/// equivalent of C's "argument starvation" — undefined in the C contract,
/// and handled here by yielding a harmless zero/empty value rather than
/// panicking (§7: "the engine cannot detect it").
pub struct Args<'a> {
    items: &'a [Arg<'a>],
    pos: usize,
}

impl<'a> Args<'a> {
    pub fn new(items: &'a [Arg<'a>]) -> Self {
        Args { items, pos: 0 }
    }

    /// An independent cursor over the same underlying slice, starting from
    /// this cursor's current position. Custom handlers that need to inspect
    /// an argument without committing to consuming it can fork, peek, then
    /// discard the fork.
    pub fn fork(&self) -> Self {
        Args {
            items: self.items,
            pos: self.pos,
        }
    }

    fn next(&mut self) -> Option<Arg<'a>> {
        let item = self.items.get(self.pos).copied();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    /// Pops the next argument as a signed 64-bit value, widening whatever
    /// integer variant is actually present.
    pub fn next_signed(&mut self) -> i64 {
        match self.next() {
            Some(Arg::I32(v)) => v as i64,
            Some(Arg::I64(v)) => v,
            Some(Arg::U32(v)) => v as i64,
            Some(Arg::U64(v)) => v as i64,
            Some(Arg::Char(v)) => v as i64,
            _ => 0,
        }
    }

    /// Pops the next argument as an unsigned 64-bit value.
    pub fn next_unsigned(&mut self) -> u64 {
        match self.next() {
            Some(Arg::I32(v)) => v as u32 as u64,
            Some(Arg::I64(v)) => v as u64,
            Some(Arg::U32(v)) => v as u64,
            Some(Arg::U64(v)) => v,
            Some(Arg::Char(v)) => v as u64,
            _ => 0,
        }
    }

    /// Pops the next argument as an `f64`, per C's variadic float promotion.
    pub fn next_f64(&mut self) -> f64 {
        match self.next() {
            Some(Arg::F64(v)) => v,
            _ => 0.0,
        }
    }

    /// Pops the next argument as a UTF-8 string slice, if that's what's
    /// there. Falls back to scanning a `CStr` as Latin-1 bytes is *not*
    /// attempted here — `%s` on a raw `CStr` argument goes through
    /// [`Args::next_cstr`] instead (see `handlers.rs`).
    pub fn next_str(&mut self) -> Option<&'a str> {
        match self.next() {
            Some(Arg::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Pops the next argument as a raw NUL-terminated byte pointer.
    pub fn next_cstr(&mut self) -> *const u8 {
        match self.next() {
            Some(Arg::CStr(p)) => p,
            _ => core::ptr::null(),
        }
    }

    /// Pops the next argument as a single byte (`%c`'s "pops int, truncated").
    pub fn next_byte(&mut self) -> u8 {
        match self.next() {
            Some(Arg::Char(c)) => c,
            Some(Arg::I32(v)) => v as u8,
            Some(Arg::U32(v)) => v as u8,
            _ => 0,
        }
    }

    /// Pops the next argument as an opaque pointer (`%p`).
    pub fn next_ptr(&mut self) -> *const c_void {
        match self.next() {
            Some(Arg::Ptr(p)) => p,
            Some(Arg::CStr(p)) => p as *const c_void,
            _ => core::ptr::null(),
        }
    }

    /// Pops the next argument as whichever string-shaped variant is
    /// actually queued. `%s` accepts both `Str` (a Rust `&str`, length
    /// known up front) and `CStr` (a raw NUL-terminated pointer, length
    /// found by bounded scanning) — unlike [`Args::next_str`], this never
    /// silently discards a `CStr` argument by returning `None` for it.
    pub(crate) fn next_string_like(&mut self) -> Option<StrLike<'a>> {
        match self.next() {
            Some(Arg::Str(s)) => Some(StrLike::Str(s)),
            Some(Arg::CStr(p)) => Some(StrLike::CStr(p)),
            _ => None,
        }
    }
}

/// Either shape `%s` can be handed: a Rust string slice, or a raw
/// NUL-terminated C string pointer.
pub(crate) enum StrLike<'a> {
    Str(&'a str),
    CStr(*const u8),
}
