use criterion::{black_box, criterion_group, criterion_main, Criterion};

use peg_solitaire::{Board, CrossJumpRules, RulesEngine, Snapshot, Solitaire};

fn midgame() -> Solitaire {
    let mut game = Solitaire::new_game(7).unwrap();
    for _ in 0..10 {
        let jump = game.legal_moves()[0];
        game.select(jump.from).unwrap();
        game.confirm_move(jump.to).unwrap();
    }
    game
}

fn bench_legal_moves(c: &mut Criterion) {
    let rules = CrossJumpRules::new();
    let opening = Board::initial(7);
    let game = midgame();

    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| rules.legal_moves(black_box(&opening)))
    });
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| rules.legal_moves(black_box(game.board())))
    });
    c.bench_function("has_any_legal_move_midgame", |b| {
        b.iter(|| rules.has_any_legal_move(black_box(game.board())))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = midgame();

    c.bench_function("snapshot_take", |b| b.iter(|| Snapshot::of(black_box(game.board()))));
    c.bench_function("select_confirm_step_back", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| {
                let jump = g.legal_moves()[0];
                g.select(jump.from).unwrap();
                g.confirm_move(jump.to).unwrap();
                g.step_back().unwrap();
                g
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_legal_moves, bench_snapshot);
criterion_main!(benches);
