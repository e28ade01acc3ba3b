use crate::args::Args;
use crate::flags::Flags;
use crate::sink::Sink;

/// Length / size modifier parsed from `hh|h|l|ll|t|j|z` (spec.md §3).
///
/// `t`/`j`/`z` remap to whichever of `Long`/`LongLong` matches the host's
/// corresponding C type width; on the 64-bit hosts this crate targets,
/// that's `LongLong`. The size is advisory (§4.7) — built-in handlers pop
/// whatever [`crate::Arg`] variant is actually queued rather than trusting
/// this field, since the tagged argument stream already self-describes its
/// width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// `hh` — promoted to `int` in the variadic ABI, narrowed on output.
    Char,
    /// `h`
    Short,
    /// no modifier
    Default,
    /// `l`
    Long,
    /// `ll`, and (on this crate's 64-bit model) `t`/`j`/`z`
    LongLong,
}

impl Default for Size {
    fn default() -> Self {
        Size::Default
    }
}

/// The per-directive state threaded through one conversion call (spec.md
/// §3's Directive State). Value type; a handler must not retain it past its
/// own return — the driver reuses the same `State` for the next directive.
///
/// Carries borrows of the [`Args`] cursor and [`Sink`] rather than owning
/// them, so a custom handler recursing into [`crate::vfctprintf`] (or the
/// `state_vprintf`-equivalent helpers below) shares the same sink — `idx`
/// keeps counting across the recursive call — while building a fresh
/// `State` for the sub-format (§4.7, §9 "Recursive reentry").
pub struct State<'a, 'b, 's> {
    pub flags: Flags,
    pub width: u32,
    pub precision: u32,
    pub size: Size,
    pub specifier: u8,
    pub args: &'b mut Args<'a>,
    pub sink: &'b mut Sink<'s>,
}

impl<'a, 'b, 's> State<'a, 'b, 's> {
    pub fn precision_set(&self) -> bool {
        self.flags.contains(Flags::PRECISION_SET)
    }

    /// Writes a single byte through this directive's sink.
    pub fn putchar(&mut self, byte: u8) {
        self.sink.put(byte);
    }

    /// Writes a NUL-terminated or already-sliced string through the sink.
    pub fn puts(&mut self, s: &str) {
        self.sink.put_str(s);
    }

    /// Number of characters written through the sink so far, across the
    /// whole top-level call (not just this directive).
    pub fn len(&self) -> usize {
        self.sink.len()
    }

    /// Recursively invokes the formatter on `subformat`/`subargs`, sharing
    /// this directive's sink. For custom handlers that want to delegate to
    /// the engine itself (e.g. a `%Q` that expands to `[%d, %d]`).
    pub fn vprintf(&mut self, subformat: &str, subargs: &mut Args) -> usize {
        crate::driver::run(self.sink, subformat, subargs)
    }
}
