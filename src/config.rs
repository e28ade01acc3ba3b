/// Compile-time configuration — SPEC_FULL §10.3 / §6's compile-time knobs,
/// modeled as associated consts (values, not code paths) alongside the
/// Cargo features that gate code paths (`float`, `exponential`,
/// `long-long`, `ptrdiff`, `alloc`, declared in `Cargo.toml`).

/// Values standing in for the reference's `DEFAULT_FLOAT_PRECISION`,
/// `MAX_FLOAT` and `FTOA_BUFFER_SIZE` compile-time knobs.
pub struct Config;

impl Config {
    /// Default precision for `%f`/`%e`/`%g` when no `.precision` is given.
    pub const DEFAULT_FLOAT_PRECISION: u32 = 6;

    /// Ceiling above which `%f`/`%F` refuses to render a value rather than
    /// emitting arbitrarily many integer digits (§4.8, §7). Does not apply
    /// to `%e`/`%g` (spec.md §9's open question, followed as specified).
    pub const MAX_FLOAT: f64 = 1e9;

    /// Bounded stack buffer size for float digit generation (§4.4 step 3).
    pub const FTOA_BUFFER_SIZE: usize = 32;

    /// Length of the power-of-10 table backing precision clamping (§4.4
    /// step 3): `10^0 ..= 10^9`.
    pub const POW10_TABLE_LEN: usize = 10;
}
