//! Float converters (C5/C6): banker's rounding, special values, precision
//! ceiling, and `%e`/`%g` exponent framing (SPEC_FULL §4.4/§4.5).

use fctprintf::{Arg, Args, BufSink, Sink};

fn render(format: &str, args: &[Arg]) -> String {
    let mut buf = [0u8; 256];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        fctprintf::vfctprintf(&mut sink, format, &mut Args::new(args));
    }
    bs.as_str().expect("test format strings are ASCII").to_string()
}

#[test]
fn bankers_rounding_at_exact_halves() {
    assert_eq!(render("%.0f", &[Arg::F64(0.5)]), "0");
    assert_eq!(render("%.0f", &[Arg::F64(1.5)]), "2");
    assert_eq!(render("%.0f", &[Arg::F64(2.5)]), "2");
    assert_eq!(render("%.0f", &[Arg::F64(3.5)]), "4");
}

#[test]
fn default_precision_is_six() {
    assert_eq!(render("%f", &[Arg::F64(3.0)]), "3.000000");
}

#[test]
fn special_values() {
    assert_eq!(render("%f", &[Arg::F64(f64::NAN)]), "nan");
    assert_eq!(render("%f", &[Arg::F64(f64::INFINITY)]), "inf");
    assert_eq!(render("%f", &[Arg::F64(f64::NEG_INFINITY)]), "-inf");
    assert_eq!(render("%+f", &[Arg::F64(f64::INFINITY)]), "+inf");
    assert_eq!(render("%F", &[Arg::F64(f64::NAN)]), "NAN");
}

#[test]
fn max_float_ceiling_is_refused() {
    let out = render("%f", &[Arg::F64(1e12)]);
    assert!(out.contains("exceeded"));
    assert!(out.contains("MAX_FLOAT"));
}

#[test]
fn precision_above_nine_pads_leading_zero_digits() {
    // Precision >= 10: reduced to 9, with one leading '0' per excess unit
    // (§4.4 step 3). `1.0` at precision 10 is "1.000000000" at precision 9,
    // with one extra '0' prepended to the fractional run.
    let out = render("%.10f", &[Arg::F64(1.0)]);
    assert_eq!(out, "1.0000000000");
}

#[test]
fn exponential_basic() {
    assert_eq!(render("%e", &[Arg::F64(12345.6789)]), "1.234568e+04");
    assert_eq!(render("%E", &[Arg::F64(12345.6789)]), "1.234568E+04");
}

#[test]
fn exponential_large_exponent_widens_to_three_digits() {
    assert_eq!(render("%e", &[Arg::F64(1e123)]), "1.000000e+123");
}

#[test]
fn adaptive_g_drops_trailing_zeros_via_precision() {
    assert_eq!(render("%g", &[Arg::F64(100.0)]), "100");
    assert_eq!(render("%.3g", &[Arg::F64(0.0001234)]), "0.000123");
}

#[test]
fn adaptive_g_out_of_range_uses_exponent_form() {
    assert_eq!(render("%g", &[Arg::F64(1.5e10)]), "1.5e+10");
    assert_eq!(render("%g", &[Arg::F64(1e-10)]), "1e-10");
}
