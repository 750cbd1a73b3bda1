// This file is part of the satranc library.
// Copyright (C) 2026 the satranc authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use satranc::{perft, Chess, FromSetup, Move, Position, Role, Setup, Square};
use satranc::variant::ThreeCheck;

// No castling and no promotions are reachable at these depths, so the
// node counts match the well known values for standard chess.
#[test]
fn test_startpos() {
    let pos = Chess::default();
    assert_eq!(perft(&pos, 0), 1);
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
    assert_eq!(perft(&pos, 3), 8902);
    assert_eq!(perft(&pos, 4), 197_281);
}

#[test]
#[ignore = "slow"]
fn test_startpos_deep() {
    let pos = Chess::default();
    assert_eq!(perft(&pos, 5), 4_865_609);
}

#[test]
fn test_after_e4() {
    let pos = Chess::default()
        .play(&Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E4,
            promotion: None,
        })
        .expect("e4 is legal");
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 600);
}

#[test]
fn test_en_passant_position() {
    // White pawns on a5 and e5, black pawn can double step between them.
    let mut setup = Setup::empty();
    setup.board.set_piece_at(Square::E1, satranc::Color::White.king());
    setup.board.set_piece_at(Square::E8, satranc::Color::Black.king());
    setup.board.set_piece_at(Square::A5, satranc::Color::White.pawn());
    setup.board.set_piece_at(Square::E5, satranc::Color::White.pawn());
    setup.board.set_piece_at(Square::D7, satranc::Color::Black.pawn());
    setup.turn = satranc::Color::Black;
    let pos = Chess::from_setup(setup).expect("legal setup");

    let pos = pos
        .play(&Move::Normal {
            role: Role::Pawn,
            from: Square::D7,
            capture: None,
            to: Square::D5,
            promotion: None,
        })
        .expect("double step is legal");
    assert_eq!(pos.ep_square(), Some(Square::D6));

    let legals = pos.legal_moves();
    assert!(legals.contains(&Move::EnPassant {
        from: Square::E5,
        to: Square::D6,
    }));
}

#[test]
fn test_three_check_startpos() {
    // Check counters do not influence the move count before any check.
    let pos = ThreeCheck::default();
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
    assert_eq!(perft(&pos, 3), 8902);
}
