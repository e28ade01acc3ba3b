#![no_std]
#![allow(dead_code)] // temporary solution to avoid warnings for unused functions
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A freestanding `printf`-style formatting engine.
//!
//! Parses a C-style format string, pulls arguments from a caller-supplied
//! [`Args`] cursor in the order the format dictates, and streams rendered
//! characters through a caller-supplied [`Sink`]. No heap allocation, no
//! standard I/O runtime, no thread-local state — every top-level call is
//! reentrant and safe to run concurrently with any other, as long as no one
//! is concurrently calling [`install_specifier`].
//!
//! ```
//! use fctprintf::{vfctprintf, Args, Arg, BufSink, Sink};
//!
//! let mut out = [0u8; 64];
//! let mut bs = BufSink::new(&mut out);
//! let n = {
//!     let mut writer = bs.writer();
//!     let mut sink = Sink::new(&mut writer);
//!     vfctprintf(&mut sink, "Hello %s, you are %d years old", &mut Args::new(&[
//!         Arg::Str("Ada"),
//!         Arg::I32(37),
//!     ]))
//! };
//! assert_eq!(bs.as_str().unwrap(), "Hello Ada, you are 37 years old");
//! assert_eq!(n, "Hello Ada, you are 37 years old".len());
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

mod args;
mod config;
mod diagnostics;
mod driver;
mod emit;
mod flags;
mod handlers;
mod macros;
mod sink;
mod specifier_table;
mod state;

#[cfg(feature = "float")]
mod float_fixed;

#[cfg(feature = "exponential")]
mod float_exp;

mod int_conv;

#[cfg(feature = "alloc")]
mod alloc_fmt;

#[cfg(feature = "alloc")]
pub use alloc_fmt::format;

pub use args::{Arg, Args};
pub use config::Config;
pub use diagnostics::RejectedSpecifier;
pub use sink::{BufSink, CountingSink, Sink};
pub use specifier_table::{install_specifier, Handler};
pub use state::{Size, State};

pub use flags::Flags;

/// Drives `format` against `args`, streaming rendered bytes through `sink`.
///
/// Returns the number of characters that *would* have been written, whether
/// or not `sink` actually stores them (a [`CountingSink`] discards every
/// byte but still reports the true length — this is what makes a
/// `vsnprintf`-style two-pass "how big a buffer do I need" call possible).
///
/// `args` is consumed in format order exactly once; the caller owns it and
/// must not reuse it across calls that should see independent arguments.
pub fn vfctprintf(sink: &mut Sink, format: &str, args: &mut Args) -> usize {
    driver::run(sink, format, args)
}
