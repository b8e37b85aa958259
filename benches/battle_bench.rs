use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use hegemon::autoplay::{play_game, random_attack, AutoPlayConfig};
use hegemon::battle::resolve_attack;
use hegemon::board::{Board, Side, TerritoryId};
use hegemon::mission::ALL_MISSIONS;
use hegemon::victory::{mission_accomplished, Census};

fn bench_resolve_attack(c: &mut Criterion) {
    let board = Board::start();
    let mut rng = SmallRng::seed_from_u64(42);
    c.bench_function("resolve_attack", |b| {
        let mut scratch = board.clone();
        b.iter(|| {
            scratch.clone_from(&board);
            resolve_attack(
                black_box(&mut scratch),
                black_box(TerritoryId::Brazil),
                black_box(TerritoryId::Spain),
                &mut rng,
            )
        })
    });
}

fn bench_random_attack(c: &mut Criterion) {
    let board = Board::start();
    let mut rng = SmallRng::seed_from_u64(42);
    c.bench_function("random_attack_start_board", |b| {
        b.iter(|| random_attack(black_box(&board), black_box(Side::Blue), &mut rng))
    });
}

fn bench_census(c: &mut Criterion) {
    let board = Board::start();
    c.bench_function("census_take", |b| {
        b.iter(|| Census::take(black_box(&board), black_box(Side::Blue)))
    });
}

fn bench_mission_checks(c: &mut Criterion) {
    let board = Board::start();
    c.bench_function("mission_check_all_four", |b| {
        b.iter(|| {
            for &mission in ALL_MISSIONS.iter() {
                black_box(mission_accomplished(mission, black_box(&board), Side::Blue));
            }
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = AutoPlayConfig {
        quiet: true,
        ..Default::default()
    };
    let mut rng = SmallRng::seed_from_u64(42);
    c.bench_function("play_full_game", |b| {
        b.iter(|| play_game(black_box(&config), 0, &mut rng))
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = Board::start();
    c.bench_function("board_clone", |b| b.iter(|| black_box(&board).clone()));
}

criterion_group!(
    benches,
    bench_resolve_attack,
    bench_random_attack,
    bench_census,
    bench_mission_checks,
    bench_full_game,
    bench_board_clone,
);
criterion_main!(benches);
