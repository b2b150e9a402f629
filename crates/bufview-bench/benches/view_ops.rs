//! Criterion micro-benchmarks for element access, subviews, bulk copy, and
//! the speculative gate.

use bufview_bench::{filled_view, word_pattern};
use bufview_core::{ElementKind, ProgramPoint};
use bufview_store::{SpeculativeGate, ViewFactory};
use bufview_test_utils::patterned_store;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LEN: usize = 4096;

fn bench_get_uint32_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Uint32, LEN, 42);
    c.bench_function("get_uint32_4k", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..LEN as i64 {
                sum += view.get(i).unwrap().as_f64();
            }
            black_box(sum);
        });
    });
}

fn bench_get_raw_int32_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Int32, LEN, 42);
    c.bench_function("get_raw_int32_4k", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for i in 0..LEN as i64 {
                acc = acc.wrapping_add(view.get_raw(i).unwrap());
            }
            black_box(acc);
        });
    });
}

fn bench_set_float64_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Float64, LEN, 42);
    c.bench_function("set_float64_4k", |b| {
        b.iter(|| {
            for i in 0..LEN as i64 {
                view.set(i, black_box(i as f64 * 0.5));
            }
        });
    });
}

fn bench_set_uint8_clamped_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Uint8Clamped, LEN, 42);
    c.bench_function("set_uint8_clamped_4k", |b| {
        b.iter(|| {
            for i in 0..LEN as i64 {
                view.set(i, black_box(i as f64 - 100.5));
            }
        });
    });
}

fn bench_subview(c: &mut Criterion) {
    let store = patterned_store(LEN * 4);
    let view = ViewFactory::UINT32.create_whole(&store);
    c.bench_function("subview", |b| {
        b.iter(|| {
            let sub = view.subview(black_box(-128), black_box(None));
            black_box(sub.len());
        });
    });
}

fn bench_bulk_set_4k(c: &mut Criterion) {
    let src = word_pattern(LEN, 7);
    let view = filled_view(ElementKind::Uint32, LEN, 42);
    c.bench_function("bulk_set_4k", |b| {
        b.iter(|| {
            view.bulk_set(src.as_slice(), black_box(0));
        });
    });
}

fn bench_bulk_set_overlapping_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Int16, LEN, 42);
    let head = view.subview(0, Some(LEN as i64 - 1));
    c.bench_function("bulk_set_overlapping_4k", |b| {
        b.iter(|| {
            view.bulk_set(&head, black_box(1));
        });
    });
}

fn bench_gate_narrow_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Int32, LEN, 42);
    c.bench_function("gate_narrow_4k", |b| {
        b.iter(|| {
            let mut gate = SpeculativeGate::new();
            for i in 0..LEN as i64 {
                black_box(gate.get(&view, i, ProgramPoint(0)).unwrap());
            }
        });
    });
}

fn bench_gate_escalating_4k(c: &mut Criterion) {
    let view = filled_view(ElementKind::Uint32, LEN, 42);
    c.bench_function("gate_escalating_4k", |b| {
        b.iter(|| {
            let mut gate = SpeculativeGate::new();
            for i in 0..LEN as i64 {
                black_box(gate.get(&view, i, ProgramPoint((i % 8) as u32)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_get_uint32_4k,
    bench_get_raw_int32_4k,
    bench_set_float64_4k,
    bench_set_uint8_clamped_4k,
    bench_subview,
    bench_bulk_set_4k,
    bench_bulk_set_overlapping_4k,
    bench_gate_narrow_4k,
    bench_gate_escalating_4k
);
criterion_main!(benches);
