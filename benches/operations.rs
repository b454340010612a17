use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::core::{GameState, PieceQueue};
use tetris_stack::types::{MenuChoice, Piece, Shape};

fn bench_play(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("play_front", |b| {
        b.iter(|| {
            black_box(state.play_front());
        })
    });
}

fn bench_reserve_use_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            black_box(state.apply(Some(MenuChoice::Reserve)));
            black_box(state.apply(Some(MenuChoice::UseReserved)));
        })
    });
}

fn bench_swap_three(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for _ in 0..3 {
        state.reserve_front();
    }

    c.bench_function("swap_three", |b| {
        b.iter(|| {
            black_box(state.swap_three());
        })
    });
}

fn bench_queue_wraparound(c: &mut Criterion) {
    let mut queue = PieceQueue::new();
    for id in 0..5 {
        queue.enqueue(Piece::new(Shape::T, id));
    }

    c.bench_function("queue_dequeue_enqueue", |b| {
        b.iter(|| {
            let piece = queue.dequeue().unwrap();
            queue.enqueue(black_box(piece));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(state.snapshot())));
}

criterion_group!(
    benches,
    bench_play,
    bench_reserve_use_cycle,
    bench_swap_three,
    bench_queue_wraparound,
    bench_snapshot
);
criterion_main!(benches);
