/// Convenience macros collecting arguments into an [`Args`](crate::Args)
/// cursor.
///
/// Grounded on `print.rs`/`printk.rs`'s shape: collect each argument via a
/// `From` conversion, build a fixed-size slice, and call straight through
/// to the core engine. Generalized from the teacher's hardcoded sink
/// (display vs. klog) and closed `PrintArg` set to this crate's
/// caller-supplied [`Sink`](crate::Sink) and wider [`Arg`](crate::Arg) tags.

/// Formats `$fmt`/`$args` through `$sink` (a `&mut Sink`), returning the
/// count [`vfctprintf`](crate::vfctprintf) would return — the `printf`
/// family's analogue of `write!`.
#[macro_export]
macro_rules! fctprintf {
    ($sink:expr, $fmt:expr) => {
        $crate::vfctprintf($sink, $fmt, &mut $crate::Args::new(&[]))
    };
    ($sink:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::vfctprintf($sink, $fmt, &mut $crate::Args::new(&[
            $($crate::Arg::from($arg)),+
        ]))
    };
}

/// Formats into a caller-provided `&mut [u8]`, `snprintf`-style: truncates
/// and NUL-terminates, per [`BufSink`](crate::BufSink). Expands to
/// `(would_write_len, Result<stored_str, Utf8Error>)` — truncation can land
/// mid-codepoint, so the caller decides how to handle that rather than the
/// macro panicking on their behalf.
#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let mut bs = $crate::BufSink::new($buf);
        let n = {
            let mut writer = bs.writer();
            let mut sink = $crate::Sink::new(&mut writer);
            $crate::fctprintf!(&mut sink, $fmt $(, $arg)*)
        };
        (n, bs.as_str())
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn snprintf_truncates_and_reports_full_length() {
        let mut buf = [0u8; 8];
        let (n, s) = snprintf!(&mut buf, "%s", "hello world");
        assert_eq!(n, "hello world".len());
        assert_eq!(s.unwrap(), "hello w");
    }

    #[test]
    fn fctprintf_counts_through_a_discarding_sink() {
        let mut discard = |_: u8| {};
        let mut sink = crate::Sink::new(&mut discard);
        let n = fctprintf!(&mut sink, "%d-%d", 1, 23);
        assert_eq!(n, 5);
    }
}
