/// Installable specifier table (C7).
///
/// Grounded on spec.md §9's "Global specifier table" design note: an atomic
/// array of function references, written only through [`install_specifier`]
/// and read lock-free during formatting. Rather than pre-seeding the array
/// with the built-in handlers (which would need a non-`const` init at
/// startup, awkward without `std::sync::Once` in `no_std`), the table here
/// holds only *overrides*: `driver::run` checks it first and falls back to
/// `handlers::dispatch_builtin` when a slot is empty. This is observably
/// identical to a pre-seeded table — a caller can still override a built-in
/// specifier (§4.6) — without requiring any startup-time initialization.
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::diagnostics::RejectedSpecifier;
use crate::state::State;

/// A conversion handler: given a fully parsed [`State`] (flags, width,
/// precision, size, and specifier already populated; argument cursor and
/// sink live), renders the directive through `state.sink`, consuming
/// whatever arguments it needs from `state.args`.
pub type Handler = for<'a, 'b, 's> fn(&mut State<'a, 'b, 's>);

// Index space covers every byte `install_specifier` could ever be asked
// about; bytes above 0x7E are rejected before they'd ever index this.
const TABLE_LEN: usize = 0x7F;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: AtomicUsize = AtomicUsize::new(0);

/// Process-wide override table — the crate's only shared mutable state
/// (spec.md §5). Populate it during initialization, before any concurrent
/// `vfctprintf` call; formatting reads it without locking.
static OVERRIDES: [AtomicUsize; TABLE_LEN] = [EMPTY_SLOT; TABLE_LEN];

/// The installable range: printable ASCII above space, excluding digits
/// (spec.md §4.6).
pub(crate) fn is_installable(byte: u8) -> bool {
    (0x21..=0x7E).contains(&byte) && !byte.is_ascii_digit()
}

/// Registers `handler` for `specifier`. A no-op (returning the rejection
/// reason) if `specifier` falls outside the installable range — callers
/// that ignore the `Result` still get the spec's "silent no-op" behavior.
///
/// May overwrite a built-in entry (§4.6); overwriting a byte that doubles
/// as a flag, length modifier, or `.` is unspecified upstream and neither
/// forbidden nor special-cased here (see DESIGN.md's Open Question #1).
pub fn install_specifier(specifier: u8, handler: Handler) -> Result<(), RejectedSpecifier> {
    if !is_installable(specifier) {
        return Err(RejectedSpecifier::OutOfRange(specifier));
    }
    OVERRIDES[specifier as usize].store(handler as usize, Ordering::Release);
    Ok(())
}

/// Looks up a caller-installed override for `specifier`, if one was
/// registered. Returns `None` for built-ins and for untouched slots alike —
/// the driver falls back to `handlers::dispatch_builtin` in that case.
pub(crate) fn lookup(specifier: u8) -> Option<Handler> {
    if specifier as usize >= TABLE_LEN {
        return None;
    }
    let raw = OVERRIDES[specifier as usize].load(Ordering::Acquire);
    if raw == 0 {
        None
    } else {
        // SAFETY: the only values ever stored are `Handler` fn pointers cast
        // to `usize` by `install_specifier`, on a target where `usize` is at
        // least as wide as a function pointer.
        Some(unsafe { core::mem::transmute::<usize, Handler>(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_digits_and_out_of_range() {
        assert!(!is_installable(b'5'));
        assert!(!is_installable(0x20));
        assert!(!is_installable(0x7F));
        assert!(is_installable(b'Q'));
    }
}
