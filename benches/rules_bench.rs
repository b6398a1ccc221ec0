//! Rules Engine Benchmarks
//!
//! Performance benchmarks for the legality gate and check search using Criterion.

use chess_rules::api::new_game;
use chess_rules::game::rules::{has_escape, is_in_check, is_square_attacked, legal_destinations, try_move};
use chess_rules::{Board, Color, EscapeSearch, GameState, Piece, PieceKind, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// White king on g1 boxed in by its pawns, checked by a rook on a1
fn back_rank_check() -> Board {
    let pieces = [
        (sq("g1"), Piece::new(PieceKind::King, Color::White)),
        (sq("f2"), Piece::new(PieceKind::Pawn, Color::White)),
        (sq("g2"), Piece::new(PieceKind::Pawn, Color::White)),
        (sq("h2"), Piece::new(PieceKind::Pawn, Color::White)),
        (sq("b3"), Piece::new(PieceKind::Knight, Color::White)),
        (sq("a1"), Piece::new(PieceKind::Rook, Color::Black)),
        (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
    ];
    Board::from_pieces(&pieces).unwrap()
}

fn bench_try_move_starting(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("try_move_e2e4", |b| {
        b.iter(|| black_box(try_move(&board, sq("e2"), sq("e4"), Color::White)))
    });
}

fn bench_attack_scan(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("is_square_attacked_f3", |b| {
        b.iter(|| black_box(is_square_attacked(&board, sq("f3"), Color::White)))
    });
    c.bench_function("is_in_check_starting", |b| {
        b.iter(|| black_box(is_in_check(&board, Color::White)))
    });
}

fn bench_legal_destinations(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("legal_destinations_knight", |b| {
        b.iter(|| black_box(legal_destinations(&board, sq("g1"), Color::White)))
    });
}

fn bench_escape_search(c: &mut Criterion) {
    let board = back_rank_check();

    c.bench_function("has_escape_king_only", |b| {
        b.iter(|| black_box(has_escape(&board, Color::White, EscapeSearch::KingOnly)))
    });
    c.bench_function("has_escape_any_piece", |b| {
        b.iter(|| black_box(has_escape(&board, Color::White, EscapeSearch::AnyPiece)))
    });
}

fn bench_short_game(c: &mut Criterion) {
    let moves = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4")];

    c.bench_function("five_move_opening", |b| {
        b.iter(|| {
            let mut game: GameState = new_game();
            for (from, to) in moves {
                let _ = game.attempt_move(sq(from), sq(to));
            }
            black_box(game.move_number())
        })
    });
}

criterion_group!(
    benches,
    bench_try_move_starting,
    bench_attack_scan,
    bench_legal_destinations,
    bench_escape_search,
    bench_short_game,
);
criterion_main!(benches);
