use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

use twenty48_core::engine::{slide_line, Game, GameConfig, SlideDirection};

fn line_corpus() -> Vec<Vec<u64>> {
    vec![
        vec![0, 0, 0, 0],
        vec![2, 2, 2, 2],
        vec![2, 4, 2, 4],
        vec![2, 2, 4, 2],
        vec![2, 0, 0, 2],
        vec![4, 4, 8, 16],
        vec![0, 0, 2, 0],
        vec![32, 32, 2, 2],
    ]
}

fn bench_slide_line(c: &mut Criterion) {
    c.bench_function("slide_line/left", |b| {
        let lines = line_corpus();
        b.iter(|| {
            let mut acc = 0u64;
            for line in &lines {
                acc ^= slide_line(line, SlideDirection::Left, 2).score_delta;
            }
            black_box(acc)
        })
    });
    c.bench_function("slide_line/right", |b| {
        let lines = line_corpus();
        b.iter(|| {
            let mut acc = 0u64;
            for line in &lines {
                acc ^= slide_line(line, SlideDirection::Right, 2).score_delta;
            }
            black_box(acc)
        })
    });
}

fn bench_play_turn(c: &mut Criterion) {
    let directions = [
        SlideDirection::Left,
        SlideDirection::Up,
        SlideDirection::Right,
        SlideDirection::Down,
    ];
    c.bench_function("game/play_turn_cycle", |b| {
        b.iter_batched(
            || Game::with_rng(GameConfig::default(), StdRng::seed_from_u64(42)).unwrap(),
            |mut game| {
                for i in 0..16 {
                    game.play_turn(directions[i % directions.len()]);
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/play_turn_8x8", |b| {
        let config = GameConfig {
            grid_size: 8,
            ..GameConfig::default()
        };
        b.iter_batched(
            || Game::with_rng(config.clone(), StdRng::seed_from_u64(7)).unwrap(),
            |mut game| {
                for i in 0..16 {
                    game.play_turn(directions[i % directions.len()]);
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_slide_line, bench_play_turn);
criterion_main!(benches);
