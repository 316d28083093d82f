//! Benchmarks for pointer-move handling.
//!
//! Measures a full sweep of the pointer across lists of growing length:
//! - Downward sweep (one reflow step per item)
//! - Jump from one end to the other (a single step touching every item)

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use slotline::{Axis, ItemId, ReorderList, StackView, Vec2};

const ITEM_SIZE: Vec2 = Vec2::new(200.0, 40.0);

fn setup(count: usize) -> (ReorderList, StackView) {
    let items: Vec<ItemId> = (0..count)
        .map(|i| ItemId::new(&format!("item-{}", i)))
        .collect();
    let list = ReorderList::new(items.clone()).unwrap();
    let view = StackView::new(Vec2::ZERO, ITEM_SIZE, Axis::Vertical, items);
    (list, view)
}

fn point_in_slot(index: usize) -> Vec2 {
    Vec2::new(ITEM_SIZE.x / 2.0, (index as f32 + 0.5) * ITEM_SIZE.y)
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_move/sweep");

    for count in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || setup(count),
                |(mut list, mut view)| {
                    list.pointer_down(point_in_slot(0), &mut view);
                    for slot in 1..count {
                        black_box(list.pointer_move(point_in_slot(slot), &mut view));
                    }
                    list
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_move/jump");

    for count in [10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let (mut list, mut view) = setup(count);
                    list.pointer_down(point_in_slot(0), &mut view);
                    (list, view)
                },
                |(mut list, mut view)| {
                    black_box(list.pointer_move(point_in_slot(count - 1), &mut view));
                    list
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_jump);
criterion_main!(benches);
