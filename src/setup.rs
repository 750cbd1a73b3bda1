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

use core::num::NonZeroU32;

use crate::{
    board::Board,
    color::{ByColor, Color},
    square::Square,
    types::RemainingChecks,
};

/// A not necessarily legal position description. Can be validated into a
/// playable position with
/// [`FromSetup::from_setup()`](crate::FromSetup::from_setup).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Setup {
    /// Piece positions on the board.
    pub board: Board,

    /// Side to move.
    pub turn: Color,

    /// En passant target square. Valid only if there is a fifth rank pawn
    /// that just made a double step, with the target square behind it.
    pub ep_square: Option<Square>,

    /// Remaining checks in the three-check variant, `None` otherwise.
    pub remaining_checks: Option<ByColor<RemainingChecks>>,

    /// Number of half-moves since the last capture or pawn move.
    pub halfmoves: u32,

    /// Current move number, starting at 1 and incremented after every
    /// black move.
    pub fullmoves: NonZeroU32,
}

impl Setup {
    /// Empty board, white to move.
    pub const fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            turn: Color::White,
            ep_square: None,
            remaining_checks: None,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }
}

impl Default for Setup {
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            ..Setup::empty()
        }
    }
}
