use std::thread;

use halo_atomic::{
    AtomicBool, AtomicDuration, AtomicFloat32, AtomicFloat64, AtomicInt64, AtomicString,
    AtomicTime, AtomicUint32, AtomicValue,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn cells_are_send_sync() {
    assert_send_sync::<AtomicBool>();
    assert_send_sync::<AtomicInt64>();
    assert_send_sync::<AtomicUint32>();
    assert_send_sync::<AtomicFloat32>();
    assert_send_sync::<AtomicFloat64>();
    assert_send_sync::<AtomicDuration>();
    assert_send_sync::<AtomicString>();
    assert_send_sync::<AtomicTime>();
    assert_send_sync::<AtomicValue<Vec<u8>>>();
}

#[test]
fn even_number_of_toggles_restores_value() {
    const THREADS: usize = 8;
    const TOGGLES: usize = 1_000;

    let flag = AtomicBool::new(false);
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..TOGGLES {
                    flag.toggle();
                }
            });
        }
    });
    assert!(!flag.load());
}

#[test]
fn concurrent_float_adds_are_not_lost() {
    const THREADS: usize = 8;
    const ADDS: usize = 1_000;

    // Small integers are exact in f64, so the sum does not depend on order.
    let total = AtomicFloat64::new(0.0);
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..ADDS {
                    total.add(1.0);
                }
            });
        }
    });
    assert_eq!(total.load(), (THREADS * ADDS) as f64);
}

#[test]
fn concurrent_increments() {
    const THREADS: i64 = 8;
    const INCS: i64 = 10_000;

    let counter = AtomicInt64::new(0);
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..INCS {
                    counter.inc();
                }
            });
        }
    });
    assert_eq!(counter.load(), THREADS * INCS);
}

#[test]
fn string_readers_never_see_torn_values() {
    let words = ["alpha", "beta", "gamma"];
    let cell = AtomicString::new(words[0]);
    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..1_000 {
                cell.store(words[i % words.len()]);
            }
        });
        s.spawn(|| {
            for _ in 0..1_000 {
                let seen = cell.load();
                assert!(words.contains(&seen.as_str()), "torn read: {seen:?}");
            }
        });
    });
}
