//! Helper to set the backtrace env var.

use std::sync::Once;

static INIT: Once = Once::new();

/// Sets `RUST_BACKTRACE=1` unless a value is already set.
///
/// Must be called at startup, before any other thread is spawned.
pub fn enable() {
    INIT.call_once(|| {
        if std::env::var_os("RUST_BACKTRACE").is_none() {
            // SAFETY: called once, before the binary spawns threads.
            unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtrace_enable_is_idempotent() {
        enable();
        let value = std::env::var_os("RUST_BACKTRACE");
        assert!(value.is_some());

        enable();
        assert_eq!(std::env::var_os("RUST_BACKTRACE"), value);
    }
}
