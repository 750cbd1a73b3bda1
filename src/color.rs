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

use core::{fmt, mem, ops};

use crate::{
    role::Role,
    square::Rank,
    types::Piece,
};

/// `White` or `Black`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    #[allow(missing_docs)]
    #[inline]
    pub const fn from_white(white: bool) -> Color {
        if white {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Selects between the two given values by color.
    #[inline]
    pub fn fold_wb<T>(self, white: T, black: T) -> T {
        match self {
            Color::White => white,
            Color::Black => black,
        }
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    #[allow(missing_docs)]
    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// The rank where this side's pieces start.
    #[inline]
    pub fn backrank(self) -> Rank {
        self.fold_wb(Rank::First, Rank::Eighth)
    }

    /// Maps a rank as seen from this side's perspective to an absolute rank,
    /// so `relative_rank(Rank::Second)` is the pawn rank for either color.
    #[inline]
    pub fn relative_rank(self, rank: Rank) -> Rank {
        match self {
            Color::White => rank,
            Color::Black => Rank::new(7 - rank.to_u32()),
        }
    }

    /// Gets a [`Piece`] of this color.
    #[inline]
    pub fn pawn(self) -> Piece {
        Role::Pawn.of(self)
    }
    /// Gets a [`Piece`] of this color.
    #[inline]
    pub fn knight(self) -> Piece {
        Role::Knight.of(self)
    }
    /// Gets a [`Piece`] of this color.
    #[inline]
    pub fn bishop(self) -> Piece {
        Role::Bishop.of(self)
    }
    /// Gets a [`Piece`] of this color.
    #[inline]
    pub fn rook(self) -> Piece {
        Role::Rook.of(self)
    }
    /// Gets a [`Piece`] of this color.
    #[inline]
    pub fn queen(self) -> Piece {
        Role::Queen.of(self)
    }
    /// Gets a [`Piece`] of this color.
    #[inline]
    pub fn king(self) -> Piece {
        Role::King.of(self)
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.fold_wb(Color::Black, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold_wb("white", "black"))
    }
}

/// Container with values for each [`Color`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColor<T> {
    #[allow(missing_docs)]
    pub white: T,
    #[allow(missing_docs)]
    pub black: T,
}

impl<T> ByColor<T> {
    /// Constructs a container by calling `init` for each color.
    #[inline]
    pub fn new_with<F>(mut init: F) -> ByColor<T>
    where
        F: FnMut(Color) -> T,
    {
        ByColor {
            white: init(Color::White),
            black: init(Color::Black),
        }
    }

    /// Gets the value for `color`.
    #[inline]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Gets a mutable reference to the value for `color`.
    #[inline]
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Swaps the values for white and black.
    pub fn flip(&mut self) {
        mem::swap(&mut self.white, &mut self.black);
    }

    /// Applies a function to both values.
    #[inline]
    pub fn map<U, F>(self, mut f: F) -> ByColor<U>
    where
        F: FnMut(T) -> U,
    {
        ByColor {
            white: f(self.white),
            black: f(self.black),
        }
    }

    /// Tests if the predicate holds for at least one value.
    #[inline]
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        predicate(&self.white) || predicate(&self.black)
    }

    /// Tests if the predicate holds for both values.
    #[inline]
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        predicate(&self.white) && predicate(&self.black)
    }

    /// Finds the first color whose value satisfies the predicate.
    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Color>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.white) {
            Some(Color::White)
        } else if predicate(&self.black) {
            Some(Color::Black)
        } else {
            None
        }
    }
}
