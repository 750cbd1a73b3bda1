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

//! Attack and ray tables.
//!
//! Stepping piece attacks are precomputed at compile time. Sliding piece
//! attacks are computed with the hyperbola quintessence technique on top
//! of precomputed empty-board ray masks.
//!
//! # Examples
//!
//! ```
//! use satranc::{attacks, Bitboard, Square};
//!
//! let occupied = Bitboard::from_rank(satranc::Rank::Sixth); // blocking pieces
//!
//! let attacks = attacks::rook_attacks(Square::D6, occupied);
//! // . . . 1 . . . .
//! // . . . 1 . . . .
//! // . . 1 0 1 . . .   <- blocked by the occupied squares
//! // . . . 1 . . . .
//! // . . . 1 . . . .
//! // . . . 1 . . . .
//! // . . . 1 . . . .
//! // . . . 1 . . . .
//!
//! assert!(attacks.contains(Square::D8));
//! assert!(!attacks.contains(Square::A6));
//! ```

use crate::{bitboard::Bitboard, color::Color, role::Role, square::Square, types::Piece};

const fn sliding_attacks(square: i32, occupied: u64, deltas: &[i32]) -> u64 {
    let mut attack = 0;

    let mut i = 0;
    let len = deltas.len();
    while i < len {
        let mut previous = square;
        loop {
            let sq = previous + deltas[i];
            let file_diff = (sq & 0x7) - (previous & 0x7);
            if sq < 0 || sq > 63 || file_diff > 2 || file_diff < -2 {
                break;
            }
            let bb = 1 << sq;
            attack |= bb;
            if occupied & bb != 0 {
                break;
            }
            previous = sq;
        }
        i += 1;
    }

    attack
}

const fn bootstrap_stepping_attacks(deltas: &[i32]) -> [u64; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = sliding_attacks(sq as i32, !0, deltas);
        sq += 1;
    }
    table
}

const KNIGHT_DELTAS: [i32; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
const KING_DELTAS: [i32; 8] = [9, 8, 7, 1, -9, -8, -7, -1];
const WHITE_PAWN_DELTAS: [i32; 2] = [7, 9];
const BLACK_PAWN_DELTAS: [i32; 2] = [-7, -9];

static KNIGHT_ATTACKS: [u64; 64] = bootstrap_stepping_attacks(&KNIGHT_DELTAS);
static KING_ATTACKS: [u64; 64] = bootstrap_stepping_attacks(&KING_DELTAS);
static WHITE_PAWN_ATTACKS: [u64; 64] = bootstrap_stepping_attacks(&WHITE_PAWN_DELTAS);
static BLACK_PAWN_ATTACKS: [u64; 64] = bootstrap_stepping_attacks(&BLACK_PAWN_DELTAS);

const fn bootstrap_ranges(deltas: &[i32]) -> [u64; 64] {
    let mut table = [0; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = sliding_attacks(sq as i32, 0, deltas);
        sq += 1;
    }
    table
}

// Empty-board ray masks, excluding the square itself.
static FILE_RANGE: [u64; 64] = bootstrap_ranges(&[8, -8]);
static RANK_RANGE: [u64; 64] = bootstrap_ranges(&[1, -1]);
static DIAG_RANGE: [u64; 64] = bootstrap_ranges(&[9, -9]);
static ANTI_DIAG_RANGE: [u64; 64] = bootstrap_ranges(&[7, -7]);

const fn bootstrap_rays() -> [[u64; 64]; 64] {
    let mut table = [[0; 64]; 64];
    let mut a: i32 = 0;
    while a < 64 {
        let mut b: i32 = 0;
        while b < 64 {
            table[a as usize][b as usize] = if a == b {
                0
            } else if a & 7 == b & 7 {
                0x0101_0101_0101_0101 << (a & 7)
            } else if a >> 3 == b >> 3 {
                0xff << (8 * (a >> 3))
            } else {
                let diag = (a >> 3) - (a & 7);
                let anti_diag = (a >> 3) + (a & 7) - 7;
                if diag == (b >> 3) - (b & 7) {
                    if diag >= 0 {
                        0x8040_2010_0804_0201 << (8 * diag)
                    } else {
                        0x8040_2010_0804_0201 >> (8 * -diag)
                    }
                } else if anti_diag == (b >> 3) + (b & 7) - 7 {
                    if anti_diag >= 0 {
                        0x0102_0408_1020_4080 << (8 * anti_diag)
                    } else {
                        0x0102_0408_1020_4080 >> (8 * -anti_diag)
                    }
                } else {
                    0
                }
            };
            b += 1;
        }
        a += 1;
    }
    table
}

static RAYS: [[u64; 64]; 64] = bootstrap_rays();

/// Looks up attacks for a pawn of `color` on `sq`.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(match color {
        Color::White => WHITE_PAWN_ATTACKS[sq.to_usize()],
        Color::Black => BLACK_PAWN_ATTACKS[sq.to_usize()],
    })
}

/// Looks up attacks for a knight on `sq`.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.to_usize()])
}

/// Looks up attacks for a king on `sq`.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.to_usize()])
}

// Attacks along a single line through sq. The forward pass blocks out
// everything beyond the first occupied square in the positive direction,
// the byte-swapped reverse pass handles the negative direction.
fn hyperbola(bit: Bitboard, range: Bitboard, occupied: Bitboard) -> Bitboard {
    let forward = occupied & range;
    let reverse = forward.flip_vertical();
    let forward = forward.minus(bit);
    let reverse = reverse.minus(bit.flip_vertical());
    (forward ^ reverse.flip_vertical()) & range
}

fn file_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    hyperbola(
        Bitboard::from_square(sq),
        Bitboard(FILE_RANGE[sq.to_usize()]),
        occupied,
    )
}

// Byte-swapping does not reverse a rank, so ranks use full bit reversal
// with the mirrored square instead.
fn rank_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let range = Bitboard(RANK_RANGE[sq.to_usize()]);
    let bit = Bitboard::from_square(sq);
    let forward = occupied & range;
    let reverse = forward.rotate_180();
    let forward = forward.minus(bit);
    let reverse = reverse.minus(Bitboard::from_square(sq.rotate_180()));
    (forward ^ reverse.rotate_180()) & range
}

/// Gets the set of squares attacked by a rook on `sq`, given `occupied`
/// squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    file_attacks(sq, occupied) ^ rank_attacks(sq, occupied)
}

/// Gets the set of squares attacked by a bishop on `sq`, given `occupied`
/// squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let bit = Bitboard::from_square(sq);
    hyperbola(bit, Bitboard(DIAG_RANGE[sq.to_usize()]), occupied)
        ^ hyperbola(bit, Bitboard(ANTI_DIAG_RANGE[sq.to_usize()]), occupied)
}

/// Gets the set of squares attacked by a queen on `sq`, given `occupied`
/// squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) ^ bishop_attacks(sq, occupied)
}

/// Gets the set of squares attacked by `piece` on `sq`, given `occupied`
/// squares.
pub fn attacks(sq: Square, piece: Piece, occupied: Bitboard) -> Bitboard {
    match piece.role {
        Role::Pawn => pawn_attacks(piece.color, sq),
        Role::Knight => knight_attacks(sq),
        Role::Bishop => bishop_attacks(sq, occupied),
        Role::Rook => rook_attacks(sq, occupied),
        Role::Queen | Role::PromotedPawn => queen_attacks(sq, occupied),
        Role::King => king_attacks(sq),
    }
}

/// Gets all squares of the rank, file or diagonal with the two squares,
/// if they are aligned.
///
/// # Examples
///
/// ```
/// use satranc::{attacks, Bitboard, Square};
///
/// let ray = attacks::ray(Square::E2, Square::G4);
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . 1
/// // . . . . . . 1 .
/// // . . . . . 1 . .
/// // . . . . 1 . . .
/// // . . . 1 . . . .
/// ```
#[inline]
pub fn ray(a: Square, b: Square) -> Bitboard {
    Bitboard(RAYS[a.to_usize()][b.to_usize()])
}

/// Gets the squares between the two squares (bounds not included), if they
/// are aligned.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    Bitboard(ray(a, b).0 & ((!0 << a.to_u32()) ^ (!0 << b.to_u32()))).without_first()
}

/// Tests if all three squares are aligned on a rank, file or diagonal.
#[inline]
pub fn aligned(a: Square, b: Square, c: Square) -> bool {
    ray(a, b).contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Rank;

    #[test]
    fn test_sliding_attacks() {
        let attack = sliding_attacks(Square::D6.to_usize() as i32, 0x3f7f_2880_2826_f5b9, &[8, 1, -8, -1]);
        assert_eq!(attack, 0x0008_3708_0800_0000);
    }

    #[test]
    fn test_rook_attacks() {
        // Same position, via hyperbola quintessence.
        let occupied = Bitboard(0x3f7f_2880_2826_f5b9);
        assert_eq!(
            rook_attacks(Square::D6, occupied),
            Bitboard(0x0008_3708_0800_0000)
        );
    }

    #[test]
    fn test_hyperbola_matches_generator() {
        let occupied = Bitboard(0x9221_5b04_002e_b62a);
        for sq in Square::ALL {
            assert_eq!(
                rook_attacks(sq, occupied).0,
                sliding_attacks(sq.to_usize() as i32, occupied.0, &[8, 1, -8, -1]),
                "rook on {sq}"
            );
            assert_eq!(
                bishop_attacks(sq, occupied).0,
                sliding_attacks(sq.to_usize() as i32, occupied.0, &[9, 7, -9, -7]),
                "bishop on {sq}"
            );
        }
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        assert_eq!(
            rook_attacks(Square::E4, Bitboard::EMPTY),
            (Bitboard::from_file(crate::square::File::E) ^ Bitboard::from_rank(Rank::Fourth))
        );
    }

    #[test]
    fn test_pawn_attacks() {
        assert_eq!(
            pawn_attacks(Color::White, Square::E4),
            Bitboard::from_square(Square::D5).with(Square::F5)
        );
        assert_eq!(
            pawn_attacks(Color::White, Square::H4),
            Bitboard::from_square(Square::G5)
        );
        assert_eq!(
            pawn_attacks(Color::Black, Square::A5),
            Bitboard::from_square(Square::B4)
        );
    }

    #[test]
    fn test_ray() {
        assert_eq!(
            ray(Square::A2, Square::B2),
            Bitboard::from_rank(Rank::Second)
        );
        assert!(ray(Square::A1, Square::H8).contains(Square::D4));
        assert_eq!(ray(Square::A1, Square::B3), Bitboard::EMPTY);
    }

    #[test]
    fn test_between() {
        assert_eq!(
            between(Square::B1, Square::B4),
            Bitboard::from_square(Square::B2).with(Square::B3)
        );
        assert_eq!(between(Square::B1, Square::B4), between(Square::B4, Square::B1));
        assert_eq!(between(Square::C2, Square::D3), Bitboard::EMPTY);
        assert_eq!(between(Square::A1, Square::B3), Bitboard::EMPTY);
    }

    #[test]
    fn test_aligned() {
        assert!(aligned(Square::A1, Square::H8, Square::D4));
        assert!(!aligned(Square::A1, Square::H8, Square::D5));
    }
}
