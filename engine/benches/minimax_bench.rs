use criterion::{Criterion, criterion_group, criterion_main};
use engine::game::{Board, BotRng, Difficulty, Mark, Outcome, SessionRng, evaluate, select_move};

fn bench_hard_move_empty_board() {
    let board = Board::new();
    let mut rng = SessionRng::new(1);
    select_move(&board, Difficulty::Hard, Mark::O, Mark::X, &mut rng).unwrap();
}

fn bench_hard_move_mid_game() {
    use Mark::{Empty as E, O, X};
    let board = Board::from_cells([X, E, O, E, X, E, E, E, O]);
    let mut rng = SessionRng::new(1);
    select_move(&board, Difficulty::Hard, Mark::O, Mark::X, &mut rng).unwrap();
}

fn bench_full_hard_vs_hard_game() {
    let mut board = Board::new();
    let mut current = Mark::X;
    let mut rng = SessionRng::new(1);

    while evaluate(&board) == Outcome::Ongoing {
        let opponent = current.opponent().unwrap();
        let index = select_move(&board, Difficulty::Hard, current, opponent, &mut rng).unwrap();
        board.place(index, current).unwrap();
        current = opponent;
    }
}

fn bench_medium_move(rng: &mut impl BotRng) {
    use Mark::{Empty as E, O, X};
    let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
    select_move(&board, Difficulty::Medium, O, X, rng).unwrap();
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("hard_empty_board", |b| b.iter(bench_hard_move_empty_board));
    group.bench_function("hard_mid_game", |b| b.iter(bench_hard_move_mid_game));
    group.bench_function("hard_full_game", |b| b.iter(bench_full_hard_vs_hard_game));

    let mut rng = SessionRng::new(1);
    group.bench_function("medium_move", |b| b.iter(|| bench_medium_move(&mut rng)));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
