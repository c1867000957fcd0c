//! The compare-and-swap retry loop behind every non-native read-modify-write.
//!
//! `AtomicBool::toggle` and the float cells' `add`/`sub` have no hardware
//! instruction. They read the current value, compute a replacement and try to
//! install it with compare-and-swap; losing the race means another thread
//! wrote first, so the loop starts over from the freshly observed value.
//!
//! The loop is lock-free, not wait-free: some thread always makes progress,
//! but a single thread can in principle retry forever under an adversarial
//! schedule. Callers that need a latency bound must impose it themselves.

use crossbeam_utils::Backoff;

/// Repeats `load` → `f` → `cas` until a compare-and-swap succeeds.
///
/// `cas(current, new)` must return `true` iff it replaced `current` with
/// `new`. Returns `(previous, installed)`.
#[inline]
pub fn cas_loop<T, L, C, F>(mut load: L, mut cas: C, mut f: F) -> (T, T)
where
    T: Copy,
    L: FnMut() -> T,
    C: FnMut(T, T) -> bool,
    F: FnMut(T) -> T,
{
    let backoff = Backoff::new();
    loop {
        let current = load();
        let new = f(current);
        if cas(current, new) {
            return (current, new);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!("compare-and-swap lost a race, retrying");
        backoff.spin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn retries_until_cas_succeeds() {
        let attempts = Cell::new(0);
        let (old, new) = cas_loop(
            || 10u32,
            |_, _| {
                attempts.set(attempts.get() + 1);
                attempts.get() == 3
            },
            |x| x + 1,
        );
        assert_eq!((old, new), (10, 11));
        assert_eq!(attempts.get(), 3);
    }

    #[test]
    fn recomputes_from_fresh_value() {
        let observed = Cell::new(0u32);
        let (old, new) = cas_loop(
            || {
                observed.set(observed.get() + 5);
                observed.get()
            },
            |current, _| current == 10,
            |x| x * 2,
        );
        assert_eq!((old, new), (10, 20));
    }
}
