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

use core::fmt;

use crate::{
    attacks,
    bitboard::Bitboard,
    color::{ByColor, Color},
    role::{ByRole, Role},
    square::{File, Rank, Square},
    types::Piece,
};

/// [`Piece`] positions on a board.
///
/// # Examples
///
/// ```
/// use satranc::{Board, Color, Role, Square};
///
/// let board = Board::default();
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
///
/// assert_eq!(board.piece_at(Square::E8), Some(Color::Black.king()));
/// ```
#[derive(Clone)]
pub struct Board {
    by_role: ByRole<Bitboard>,
    by_color: ByColor<Bitboard>,
    occupied: Bitboard,
    promoted: Bitboard,
}

impl Board {
    /// The board of the starting position.
    pub const fn new() -> Board {
        Board {
            by_role: ByRole {
                pawn: Bitboard(0x00ff_0000_0000_ff00),
                promoted_pawn: Bitboard(0),
                knight: Bitboard(0x4200_0000_0000_0042),
                bishop: Bitboard(0x2400_0000_0000_0024),
                rook: Bitboard(0x8100_0000_0000_0081),
                queen: Bitboard(0x0800_0000_0000_0008),
                king: Bitboard(0x1000_0000_0000_0010),
            },
            by_color: ByColor {
                black: Bitboard(0xffff_0000_0000_0000),
                white: Bitboard(0xffff),
            },
            occupied: Bitboard(0xffff_0000_0000_ffff),
            promoted: Bitboard(0),
        }
    }

    /// The empty board.
    pub const fn empty() -> Board {
        Board {
            by_role: ByRole {
                pawn: Bitboard(0),
                promoted_pawn: Bitboard(0),
                knight: Bitboard(0),
                bishop: Bitboard(0),
                rook: Bitboard(0),
                queen: Bitboard(0),
                king: Bitboard(0),
            },
            by_color: ByColor {
                black: Bitboard(0),
                white: Bitboard(0),
            },
            occupied: Bitboard(0),
            promoted: Bitboard(0),
        }
    }

    /// All occupied squares.
    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Squares occupied by pieces that arose by promotion. Always a
    /// superset of [`Board::promoted_pawns`].
    #[inline]
    pub const fn promoted(&self) -> Bitboard {
        self.promoted
    }

    /// Squares occupied by pieces of `color`.
    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        *self.by_color.get(color)
    }

    /// Squares occupied by pieces of `role`, either color.
    #[inline]
    pub fn by_role(&self, role: Role) -> Bitboard {
        *self.by_role.get(role)
    }

    /// Squares occupied by the given piece.
    #[inline]
    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        self.by_color(piece.color) & self.by_role(piece.role)
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn pawns(&self) -> Bitboard {
        self.by_role.pawn
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn promoted_pawns(&self) -> Bitboard {
        self.by_role.promoted_pawn
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn knights(&self) -> Bitboard {
        self.by_role.knight
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn bishops(&self) -> Bitboard {
        self.by_role.bishop
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn rooks(&self) -> Bitboard {
        self.by_role.rook
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn queens(&self) -> Bitboard {
        self.by_role.queen
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn kings(&self) -> Bitboard {
        self.by_role.king
    }

    /// Pieces that attack along ranks and files. Promoted pawns move like
    /// queens, so they count.
    #[inline]
    pub fn straight_sliders(&self) -> Bitboard {
        self.by_role.rook | self.by_role.queen | self.by_role.promoted_pawn
    }

    /// Pieces that attack along diagonals.
    #[inline]
    pub fn diagonal_sliders(&self) -> Bitboard {
        self.by_role.bishop | self.by_role.queen | self.by_role.promoted_pawn
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn white(&self) -> Bitboard {
        self.by_color.white
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn black(&self) -> Bitboard {
        self.by_color.black
    }

    /// The (unique, if any) king of the given side.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        (self.kings() & self.by_color(color)).single_square()
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.by_color.find(|c| c.contains(sq))
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        if !self.occupied.contains(sq) {
            return None; // catch early
        }
        self.by_role.find(|r| r.contains(sq))
    }

    #[allow(missing_docs)]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.role_at(sq).map(|role| Piece {
            color: Color::from_white(self.by_color.white.contains(sq)),
            role,
            promoted: self.promoted.contains(sq),
        })
    }

    /// Removes and returns the piece at `sq`, if any.
    pub fn take_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|piece| {
            self.by_role.get_mut(piece.role).toggle(sq);
            self.by_color.get_mut(piece.color).toggle(sq);
            self.occupied.toggle(sq);
            self.promoted.discard(sq);
            piece
        })
    }

    /// Removes the piece at `sq`, if any.
    pub fn discard_piece_at(&mut self, sq: Square) {
        let _ = self.take_piece_at(sq);
    }

    /// Puts `piece` on `sq`, returning the previous occupant, if any.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let previous = self.take_piece_at(sq);
        self.by_role.get_mut(piece.role).toggle(sq);
        self.by_color.get_mut(piece.color).toggle(sq);
        self.occupied.toggle(sq);
        if piece.promoted {
            self.promoted.add(sq);
        }
        previous
    }

    /// Finds all pieces of `attacker` color that attack `sq`, given
    /// `occupied` squares. Useful with an occupancy that differs from the
    /// actual board, e.g. with the king removed to find safe retreats.
    pub fn attacks_to(&self, sq: Square, attacker: Color, occupied: Bitboard) -> Bitboard {
        self.by_color(attacker)
            & ((attacks::rook_attacks(sq, occupied) & self.straight_sliders())
                | (attacks::bishop_attacks(sq, occupied) & self.diagonal_sliders())
                | (attacks::knight_attacks(sq) & self.knights())
                | (attacks::king_attacks(sq) & self.kings())
                | (attacks::pawn_attacks(!attacker, sq) & self.pawns()))
    }

    /// Iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied.filter_map(move |sq| Some((sq, self.piece_at(sq)?)))
    }

    /// Counts the pieces of `color`, by role.
    pub fn material_side(&self, color: Color) -> ByRole<u8> {
        let side = self.by_color(color);
        self.by_role.map(|pieces| (pieces & side).count() as u8)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

// Occupancy is derivable from the color sets and the promoted marker is
// not part of position identity, so neither is compared.
impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.by_role == other.by_role && self.by_color == other.by_color
    }
}

impl Eq for Board {}

impl core::hash::Hash for Board {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.by_role.hash(state);
        self.by_color.hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let sq = Square::from_coords(file, rank);
                match self.piece_at(sq) {
                    Some(piece) => f.write_char(piece.char())?,
                    None => f.write_char('.')?,
                }
                f.write_char(if file != File::H { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.piece_at(Square::A1), Some(Color::White.rook()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
    }

    #[test]
    fn test_set_piece_at() {
        let mut board = Board::default();
        assert_eq!(board.set_piece_at(Square::E4, Color::White.knight()), None);
        assert_eq!(
            board.set_piece_at(Square::E4, Color::Black.queen()),
            Some(Color::White.knight())
        );
        assert_eq!(board.piece_at(Square::E4), Some(Color::Black.queen()));
        assert_eq!(board.occupied().count(), 33);
    }

    #[test]
    fn test_take_piece_at() {
        let mut board = Board::default();
        assert_eq!(board.take_piece_at(Square::A2), Some(Color::White.pawn()));
        assert_eq!(board.take_piece_at(Square::A2), None);
        assert_eq!(board.occupied().count(), 31);
    }

    #[test]
    fn test_attacks_to() {
        let board = Board::default();
        // e4 is covered by no one in the initial position.
        assert_eq!(
            board.attacks_to(Square::E4, Color::White, board.occupied()),
            Bitboard::EMPTY
        );
        // f3 is covered by the g1 knight and the e2 and g2 pawns.
        assert_eq!(
            board
                .attacks_to(Square::F3, Color::White, board.occupied())
                .count(),
            3
        );
    }

    #[test]
    fn test_material_side() {
        let board = Board::default();
        let material = board.material_side(Color::White);
        assert_eq!(material.pawn, 8);
        assert_eq!(material.knight, 2);
        assert_eq!(material.king, 1);
        assert_eq!(material.promoted_pawn, 0);
    }

    #[test]
    fn test_iter() {
        let board = Board::default();
        assert_eq!(board.iter().count(), 32);
        assert!(board
            .iter()
            .all(|(sq, piece)| board.piece_at(sq) == Some(piece)));
    }

    #[test]
    fn test_promoted_pawn_is_slider() {
        let mut board = Board::empty();
        board.set_piece_at(Square::C3, Role::PromotedPawn.of(Color::White));
        assert!(board.straight_sliders().contains(Square::C3));
        assert!(board.diagonal_sliders().contains(Square::C3));
        assert_eq!(
            board.piece_at(Square::C3),
            Some(Role::PromotedPawn.of(Color::White))
        );
    }
}
