//! Installable specifier table (C7) and reentrant custom handlers, per
//! SPEC_FULL §8 property 8: a registered handler dispatches ahead of the
//! unknown-specifier diagnostic, registration rejects digits/out-of-range
//! bytes, and a handler may recurse back into the formatter.

use fctprintf::{install_specifier, vfctprintf, Arg, Args, BufSink, RejectedSpecifier, Sink, State};

fn render(format: &str, args: &[Arg]) -> String {
    let mut buf = [0u8; 256];
    let mut bs = BufSink::new(&mut buf);
    {
        let mut writer = bs.writer();
        let mut sink = Sink::new(&mut writer);
        vfctprintf(&mut sink, format, &mut Args::new(args));
    }
    bs.as_str().expect("test format strings are ASCII").to_string()
}

fn shout_handler(state: &mut State) {
    state.puts("[Q]");
}

#[test]
fn installed_handler_overrides_unknown_specifier_diagnostic() {
    install_specifier(b'Q', shout_handler).expect("'Q' is in the installable range");
    assert_eq!(render("<%Q>", &[]), "<[Q]>");
}

fn pair_handler(state: &mut State) {
    let a = state.args.next_signed();
    let b = state.args.next_signed();
    let mut sub = Args::new(&[Arg::I64(a), Arg::I64(b)]);
    state.vprintf("[%d, %d]", &mut sub);
}

#[test]
fn custom_handler_recurses_into_the_formatter() {
    install_specifier(b'R', pair_handler).expect("'R' is in the installable range");
    assert_eq!(render("%R", &[Arg::I32(1), Arg::I32(2)]), "[1, 2]");
}

#[test]
fn digit_registration_is_a_silent_rejection() {
    assert_eq!(
        install_specifier(b'5', shout_handler),
        Err(RejectedSpecifier::OutOfRange(b'5'))
    );
    assert_eq!(
        install_specifier(b' ', shout_handler),
        Err(RejectedSpecifier::OutOfRange(b' '))
    );
}

#[test]
fn installed_handler_can_overwrite_a_builtin() {
    // 'd' is a built-in; no other test in this binary formats with it, so
    // overwriting it here doesn't race against the override table's
    // process-wide static state.
    install_specifier(b'd', shout_handler).expect("'d' is in the installable range");
    assert_eq!(render("%d", &[Arg::I32(7)]), "[Q]");
}
