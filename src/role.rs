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

use crate::{color::Color, types::Piece};

/// Piece types.
///
/// `PromotedPawn` is a pawn that reached the back rank and now moves like
/// a queen, but stays distinguishable for material accounting.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u32)]
pub enum Role {
    Pawn = 1,
    PromotedPawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
    King = 7,
}

impl Role {
    /// Gets the [`Role`] from its case-insensitive character
    /// representation.
    pub fn from_char(ch: char) -> Option<Role> {
        Some(match ch.to_ascii_lowercase() {
            'p' => Role::Pawn,
            'f' => Role::PromotedPawn,
            'n' => Role::Knight,
            'b' => Role::Bishop,
            'r' => Role::Rook,
            'q' => Role::Queen,
            'k' => Role::King,
            _ => return None,
        })
    }

    /// Gets a [`Piece`] of the given [`Color`].
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece {
            color,
            role: self,
            promoted: matches!(self, Role::PromotedPawn),
        }
    }

    /// Gets the lowercase character representation.
    #[inline]
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::PromotedPawn => 'f',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Gets the uppercase character representation.
    #[inline]
    pub const fn upper_char(self) -> char {
        match self {
            Role::Pawn => 'P',
            Role::PromotedPawn => 'F',
            Role::Knight => 'N',
            Role::Bishop => 'B',
            Role::Rook => 'R',
            Role::Queen => 'Q',
            Role::King => 'K',
        }
    }

    /// All roles, in ascending order.
    pub const ALL: [Role; 7] = [
        Role::Pawn,
        Role::PromotedPawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];
}

/// Container with values for each [`Role`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub struct ByRole<T> {
    pub pawn: T,
    pub promoted_pawn: T,
    pub knight: T,
    pub bishop: T,
    pub rook: T,
    pub queen: T,
    pub king: T,
}

impl<T> ByRole<T> {
    /// Gets the value for `role`.
    #[inline]
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Pawn => &self.pawn,
            Role::PromotedPawn => &self.promoted_pawn,
            Role::Knight => &self.knight,
            Role::Bishop => &self.bishop,
            Role::Rook => &self.rook,
            Role::Queen => &self.queen,
            Role::King => &self.king,
        }
    }

    /// Gets a mutable reference to the value for `role`.
    #[inline]
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Pawn => &mut self.pawn,
            Role::PromotedPawn => &mut self.promoted_pawn,
            Role::Knight => &mut self.knight,
            Role::Bishop => &mut self.bishop,
            Role::Rook => &mut self.rook,
            Role::Queen => &mut self.queen,
            Role::King => &mut self.king,
        }
    }

    /// Applies a function to all values.
    #[inline]
    pub fn map<U, F>(self, mut f: F) -> ByRole<U>
    where
        F: FnMut(T) -> U,
    {
        ByRole {
            pawn: f(self.pawn),
            promoted_pawn: f(self.promoted_pawn),
            knight: f(self.knight),
            bishop: f(self.bishop),
            rook: f(self.rook),
            queen: f(self.queen),
            king: f(self.king),
        }
    }

    /// Finds the first role whose value satisfies the predicate.
    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Role>
    where
        F: FnMut(&T) -> bool,
    {
        Role::ALL.into_iter().find(|&role| predicate(self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        for role in Role::ALL {
            assert_eq!(Role::from_char(role.char()), Some(role));
            assert_eq!(Role::from_char(role.upper_char()), Some(role));
        }
        assert_eq!(Role::from_char('x'), None);
    }

    #[test]
    fn test_of() {
        assert!(!Role::Queen.of(Color::White).promoted);
        assert!(Role::PromotedPawn.of(Color::Black).promoted);
    }
}
