use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minimax_ttt::{
    pipeline::{BotPlayer, MatchSetup, play_match},
    search::{Minimax, SearchConfig},
    tictactoe::{GameState, Mark},
};

fn bench_full_search_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_empty_board", |b| {
        let state = GameState::new(Mark::X);
        b.iter(|| {
            let mut minimax = Minimax::default();
            minimax.best_move(black_box(&state), Mark::X)
        });
    });
}

fn bench_search_after_corner_opening(c: &mut Criterion) {
    c.bench_function("minimax_3x3_after_corner", |b| {
        let state = GameState::from_string("X........").unwrap();
        b.iter(|| {
            let mut minimax = Minimax::default();
            minimax.best_move(black_box(&state), Mark::O)
        });
    });
}

fn bench_bot_match(c: &mut Criterion) {
    for (name, opening_book) in [
        ("bot_match_full_search", false),
        ("bot_match_opening_book", true),
    ] {
        c.bench_function(name, |b| {
            let config = SearchConfig::default().with_opening_book(opening_book);
            b.iter(|| {
                let mut setup = MatchSetup::new(
                    Box::new(BotPlayer::with_config(Mark::X, config)),
                    Box::new(BotPlayer::with_config(Mark::O, config)),
                    Mark::X,
                )
                .unwrap();
                play_match(&mut setup, 0, &mut []).unwrap()
            });
        });
    }
}

criterion_group!(
    benches,
    bench_full_search_empty_board,
    bench_search_after_corner_opening,
    bench_bot_match
);
criterion_main!(benches);
