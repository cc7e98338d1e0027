//! Concurrent resolution tests.
//!
//! A resolver holds only configuration, so one resolver can serve many
//! threads as long as each works on its own board.

use std::thread;

use chesstalk_grammar::PhraseResolver;
use chesstalk_oracle::Board;

const PHRASES: &[&str] = &[
    "e four",
    "d 4",
    "knight f three",
    "night c three",
    "knight takes",
    "castles",
    "banana",
    "pawn to h four",
];

fn resolve_all(resolver: &PhraseResolver, board: &Board) -> Vec<Result<String, String>> {
    PHRASES
        .iter()
        .map(|phrase| {
            let mut board = board.clone();
            resolver
                .resolve(phrase, &mut board)
                .map(|resolution| resolution.notation)
                .map_err(|err| err.to_string())
        })
        .collect()
}

#[test]
fn threads_agree_with_a_sequential_run() {
    let resolver = PhraseResolver::new();
    let mut board = Board::new();
    board.play("e4").unwrap();
    board.play("e5").unwrap();

    let expected = resolve_all(&resolver, &board);

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = &resolver;
                let board = board.clone();
                scope.spawn(move || resolve_all(resolver, &board))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
    assert_eq!(board.notation_history(), vec!["e4", "e5"]);
}

#[test]
fn one_position_per_thread() {
    let resolver = PhraseResolver::new();
    let positions = [
        ("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "castles", "O-O"),
        ("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "rook a 8 checkmate", "Ra8#"),
        ("8/4P2k/8/8/8/8/8/4K3 w - - 0 1", "e 8 equals rook", "e8=R"),
    ];

    thread::scope(|scope| {
        for (fen, phrase, notation) in positions {
            let resolver = &resolver;
            scope.spawn(move || {
                let mut board = Board::from_fen(fen).unwrap();
                let resolution = resolver.resolve(phrase, &mut board).unwrap();
                assert_eq!(resolution.notation, notation);
            });
        }
    });
}
