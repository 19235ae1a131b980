use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweeper_core::{Board, GameSession, MinePlacer, RandomMinePlacer};

fn placement(c: &mut Criterion) {
    let mut placer = RandomMinePlacer::new(0x5eed);
    c.bench_function("place_mines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            placer
                .place_mines(&mut board, black_box((8, 8)))
                .expect("default board has room");
            board
        })
    });
}

fn first_click(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("first_click", |b| {
        b.iter(|| {
            seed += 1;
            let mut session = GameSession::new(seed);
            black_box(session.handle_click(black_box((0, 0))));
            session
        })
    });
}

criterion_group!(benches, placement, first_click);
criterion_main!(benches);
