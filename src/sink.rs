/// Output sink — wraps the caller's byte callback plus a running count.
///
/// Grounded on `print_engine.rs`'s `Sink` enum / `emit_char` /
/// `emit_str` / `emit_bytes`, generalized from a closed 2-variant enum
/// (VGA vs. klog) to an open `Option<&mut dyn FnMut(u8)>` matching spec.md
/// §3's "function-like handle ... may be null, meaning count but discard".
/// Trait-object dispatch here plays the role the spec assigns to the
/// `(fct, arg)` C function-pointer-plus-opaque-pointer pair.

/// Per §4.1: `put` always advances `idx`, whether or not a callback is
/// installed; `len()` returns it. No failure modes — a sink that wants to
/// signal "stop early" has no channel to do so, matching §7 (sink-side
/// errors are invisible to the engine).
pub struct Sink<'a> {
    putc: Option<&'a mut dyn FnMut(u8)>,
    idx: usize,
}

impl<'a> Sink<'a> {
    /// A sink with a live callback.
    pub fn new(putc: &'a mut dyn FnMut(u8)) -> Self {
        Sink {
            putc: Some(putc),
            idx: 0,
        }
    }

    /// A sink that counts but discards every byte (the null `fct` case).
    pub fn discarding() -> Self {
        Sink {
            putc: None,
            idx: 0,
        }
    }

    #[inline]
    pub(crate) fn put(&mut self, byte: u8) {
        if let Some(f) = &mut self.putc {
            f(byte);
        }
        self.idx += 1;
    }

    pub(crate) fn put_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.put(b);
        }
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }

    /// Running count of bytes submitted so far — equals the total number of
    /// characters the current top-level call *would* produce (§3 invariant),
    /// independent of whether any callback is installed.
    pub fn len(&self) -> usize {
        self.idx
    }

    pub fn is_empty(&self) -> bool {
        self.idx == 0
    }
}

/// A sink that counts characters without storing any of them — the
/// `CountingSink` from SPEC_FULL §10.1, equivalent to a null `fct`.
///
/// Useful for the classic two-pass `vsnprintf(NULL, 0, ...)` idiom: measure
/// first, then allocate (or stack-allocate) exactly the right buffer.
pub struct CountingSink;

impl CountingSink {
    /// Builds a [`Sink`] that discards every byte.
    pub fn sink<'a>() -> Sink<'a> {
        Sink::discarding()
    }
}

/// Renders into a caller-provided fixed-size buffer, truncating and
/// NUL-terminating like C's `snprintf` — SPEC_FULL §10.1/§11's buffer-bound
/// convenience wrapper. `len()` still reports the *would-be* total length
/// even past truncation, matching `snprintf`'s return-value contract.
pub struct BufSink<'a> {
    buf: &'a mut [u8],
    written: usize,
    total: usize,
}

impl<'a> BufSink<'a> {
    /// `buf` must have room for at least one byte (the trailing NUL).
    pub fn new(buf: &'a mut [u8]) -> Self {
        BufSink {
            buf,
            written: 0,
            total: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.total += 1;
        // Reserve the last slot for the NUL terminator.
        if self.written + 1 < self.buf.len() {
            self.buf[self.written] = byte;
            self.written += 1;
        }
    }

    /// The bytes actually stored (excluding the NUL terminator).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.written]
    }

    /// The bytes actually stored, as UTF-8. Fallible rather than panicking:
    /// `%s`'s precision truncation is byte-oriented (spec.md §3 — early-stop,
    /// never buffer-sized by content), so cutting a multi-byte `char` in
    /// half is legitimate caller input, not a bug; and `Arg::CStr` (the
    /// `*c_char` FFI shape from spec.md §9's argument-cursor design note)
    /// may point at bytes that were never UTF-8 to begin with. Both land
    /// here as ordinary, non-malicious input, so this returns a `Result`
    /// instead of asserting an invariant that doesn't hold.
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// How many characters *would* have been written, ignoring truncation —
    /// `snprintf`'s return value.
    pub fn would_write(&self) -> usize {
        self.total
    }

    /// A [`Sink`] bound to this buffer, plus a closure capturing it. Callers
    /// use this as:
    /// ```
    /// use fctprintf::{vfctprintf, Args, BufSink};
    /// let mut buf = [0u8; 16];
    /// let mut bs = BufSink::new(&mut buf);
    /// let mut put = bs.writer();
    /// let mut sink = fctprintf::Sink::new(&mut put);
    /// vfctprintf(&mut sink, "hi", &mut Args::new(&[]));
    /// ```
    pub fn writer(&mut self) -> impl FnMut(u8) + '_ {
        move |b| self.push(b)
    }
}
