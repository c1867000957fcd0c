use criterion::{black_box, criterion_group, criterion_main, Criterion};
use halo_atomic::{AtomicBool, AtomicFloat64, AtomicInt64, AtomicString};
use std::sync::Mutex;
use std::thread;

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended");

    group.bench_function("int64_add", |b| {
        let cell = AtomicInt64::new(0);
        b.iter(|| black_box(cell.add(black_box(1))))
    });

    group.bench_function("mutex_i64_add", |b| {
        let cell = Mutex::new(0i64);
        b.iter(|| {
            let mut g = cell.lock().unwrap();
            *g += black_box(1);
            black_box(*g)
        })
    });

    group.bench_function("float64_add", |b| {
        let cell = AtomicFloat64::new(0.0);
        b.iter(|| black_box(cell.add(black_box(1.0))))
    });

    group.bench_function("bool_toggle", |b| {
        let cell = AtomicBool::new(false);
        b.iter(|| black_box(cell.toggle()))
    });

    group.bench_function("string_load", |b| {
        let cell = AtomicString::new("halo");
        b.iter(|| black_box(cell.load()))
    });

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    const THREADS: usize = 4;
    const OPS: usize = 1000;

    group.bench_function("float64_add", |b| {
        let cell = AtomicFloat64::new(0.0);
        let cell = &cell;
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..THREADS {
                    s.spawn(move || {
                        for _ in 0..OPS {
                            black_box(cell.add(1.0));
                        }
                    });
                }
            });
        })
    });

    group.bench_function("bool_toggle", |b| {
        let cell = AtomicBool::new(false);
        let cell = &cell;
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..THREADS {
                    s.spawn(move || {
                        for _ in 0..OPS {
                            black_box(cell.toggle());
                        }
                    });
                }
            });
        })
    });

    group.bench_function("string_store_load", |b| {
        let cell = AtomicString::new("a");
        let cell = &cell;
        b.iter(|| {
            thread::scope(|s| {
                s.spawn(move || {
                    for i in 0..OPS {
                        cell.store(if i % 2 == 0 { "even" } else { "odd" });
                    }
                });
                for _ in 0..THREADS - 1 {
                    s.spawn(move || {
                        for _ in 0..OPS {
                            black_box(cell.load());
                        }
                    });
                }
            });
        })
    });

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_contended);
criterion_main!(benches);
