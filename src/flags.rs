/// Directive flag bits.
///
/// Grounded on the identical flag set in `printf-compat`'s `Flags` bitflags
/// (see `examples/other_examples/.../lights0123-printf-compat__src-lib.rs.rs`);
/// `bitflags` itself comes from the `fuel-vm`/`fuel-asm` dependency stack.

bitflags::bitflags! {
    /// Flags parsed out of the `%` directive's flags field (spec.md §3).
    #[derive(Default)]
    pub struct Flags: u8 {
        /// `0` — zero-pad instead of space-pad. Disabled whenever PRECISION_SET
        /// applies to an integer conversion (precision wins).
        const ZERO_PAD    = 0b0000_0001;
        /// `-` — left-align within the field width (pads on the right).
        const LEFT_ALIGN  = 0b0000_0010;
        /// `+` — force a leading `+` on non-negative signed conversions.
        const SHOW_PLUS   = 0b0000_0100;
        /// ` ` — force a leading space on non-negative signed conversions
        /// (overridden by SHOW_PLUS when both are set).
        const LEAD_SPACE  = 0b0000_1000;
        /// `#` — alternate form (base prefixes, forced decimal point, …).
        const ALT_FORM    = 0b0001_0000;
        /// Set when a `.` was parsed, independent of whatever precision value
        /// follows it (`%.d` sets this with precision 0).
        const PRECISION_SET = 0b0010_0000;
    }
}

impl Flags {
    /// Clears the flags that make no sense on an unsigned conversion
    /// (`u x X o b`): SHOW_PLUS and LEAD_SPACE never apply there (§4.3).
    pub fn cleared_for_unsigned(self) -> Self {
        self & !(Flags::SHOW_PLUS | Flags::LEAD_SPACE)
    }
}
