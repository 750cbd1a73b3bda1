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

use core::{fmt, iter::FusedIterator, ops};

use crate::{
    color::Color,
    square::{File, Rank, Square},
};

/// A set of squares represented by a 64 bit integer mask, using little
/// endian rank-file mapping.
///
/// # Examples
///
/// ```
/// use satranc::{Bitboard, Rank};
///
/// let mask = Bitboard::from(Rank::Third);
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // 1 1 1 1 1 1 1 1
/// // . . . . . . . .
/// // . . . . . . . .
///
/// assert_eq!(mask.first(), Some(satranc::Square::A3));
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// A bitboard with a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1 << sq.to_u32())
    }

    /// Returns the bitboard containing all squares of the given rank.
    #[inline]
    pub const fn from_rank(rank: Rank) -> Bitboard {
        Bitboard(0xff << (8 * rank.to_u32()))
    }

    /// Returns the bitboard containing all squares of the given file.
    #[inline]
    pub const fn from_file(file: File) -> Bitboard {
        Bitboard(0x0101_0101_0101_0101 << file.to_u32())
    }

    /// Silently overflowing bitwise shift with a signed offset, `<<` for
    /// positive values and `>>` for negative values.
    #[inline]
    pub const fn shift(self, offset: i32) -> Bitboard {
        if offset > 63 || offset < -63 {
            Bitboard(0)
        } else if offset >= 0 {
            Bitboard(self.0 << offset)
        } else {
            Bitboard(self.0 >> -offset)
        }
    }

    /// Tests if the bitboard contains the given square.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.to_u32()) != 0
    }

    /// Adds `squares`.
    #[inline]
    pub fn add<T: Into<Bitboard>>(&mut self, squares: T) {
        *self |= squares;
    }

    /// Toggles `squares`.
    #[inline]
    pub fn toggle<T: Into<Bitboard>>(&mut self, squares: T) {
        *self ^= squares;
    }

    /// Discards `squares`.
    #[inline]
    pub fn discard<T: Into<Bitboard>>(&mut self, squares: T) {
        *self &= !squares.into();
    }

    /// Removes a square from the bitboard.
    ///
    /// Returns `true` if the square was in the set.
    #[inline]
    #[must_use = "use Bitboard::discard() if return value is not needed"]
    pub fn remove(&mut self, sq: Square) -> bool {
        if self.contains(sq) {
            self.0 ^= 1 << sq.to_u32();
            true
        } else {
            false
        }
    }

    /// Returns the union of `self` and `squares`. Equivalent to bitwise `|`.
    #[inline]
    #[must_use]
    pub fn with<T: Into<Bitboard>>(self, squares: T) -> Bitboard {
        self | squares
    }

    /// Returns `self` without `squares`. Equivalent to bitwise `& !`.
    #[inline]
    #[must_use]
    pub fn without<T: Into<Bitboard>>(self, squares: T) -> Bitboard {
        self & !squares.into()
    }

    /// Tests if `self` and `other` are disjoint.
    #[inline]
    pub const fn is_disjoint(self, other: Bitboard) -> bool {
        self.0 & other.0 == 0
    }

    /// Tests if `self` is a subset of `other`.
    #[inline]
    pub const fn is_subset(self, other: Bitboard) -> bool {
        self.0 & !other.0 == 0
    }

    /// The empty bitboard.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// The full bitboard.
    pub const FULL: Bitboard = Bitboard(!0);

    /// All dark squares.
    pub const DARK_SQUARES: Bitboard = Bitboard(0xaa55_aa55_aa55_aa55);

    /// All light squares.
    pub const LIGHT_SQUARES: Bitboard = Bitboard(0x55aa_55aa_55aa_55aa);

    /// The two backranks.
    pub const BACKRANKS: Bitboard = Bitboard(0xff00_0000_0000_00ff);

    /// Shift for `color`: `<<` for white, `>>` for black.
    #[inline]
    pub fn relative_shift(self, color: Color, shift: u32) -> Bitboard {
        match color {
            Color::White => Bitboard(self.0 << shift),
            Color::Black => Bitboard(self.0 >> shift),
        }
    }

    /// Tests if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Tests if the bitboard contains at least one square.
    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Tests if the bitboard contains more than one square.
    #[inline]
    pub const fn more_than_one(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Gets the only square in the set, if there is exactly one.
    #[inline]
    pub const fn single_square(self) -> Option<Square> {
        if self.more_than_one() {
            None
        } else {
            self.first()
        }
    }

    /// Gets the first square, if any.
    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { Square::new_unchecked(self.0.trailing_zeros()) })
        }
    }

    /// Gets the last square, if any.
    #[inline]
    pub const fn last(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(unsafe { Square::new_unchecked(63 ^ self.0.leading_zeros()) })
        }
    }

    /// Returns the bitboard with the first square removed.
    #[inline]
    pub const fn without_first(self) -> Bitboard {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Counts the number of squares in the bitboard.
    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Mirrors the bitboard vertically.
    #[inline]
    pub const fn flip_vertical(self) -> Bitboard {
        Bitboard(self.0.swap_bytes())
    }

    /// Rotates the bitboard by 180 degrees.
    #[inline]
    pub const fn rotate_180(self) -> Bitboard {
        Bitboard(self.0.reverse_bits())
    }

    /// Wrapping subtraction of the underlying masks, the core of the
    /// hyperbola quintessence sliding attack computation. Borrows ripple
    /// beyond the top bit and wrap around.
    #[inline]
    pub const fn minus(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0.wrapping_sub(other.0))
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let sq = Square::from_coords(file, rank);
                f.write_str(if self.contains(sq) { "1" } else { "." })?;
                f.write_str(if file != File::H { " " } else { "\n" })?;
            }
        }
        Ok(())
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::from_square(sq)
    }
}

impl From<Rank> for Bitboard {
    #[inline]
    fn from(rank: Rank) -> Bitboard {
        Bitboard::from_rank(rank)
    }
}

impl From<File> for Bitboard {
    #[inline]
    fn from(file: File) -> Bitboard {
        Bitboard::from_file(file)
    }
}

impl<T> ops::BitAnd<T> for Bitboard
where
    T: Into<Bitboard>,
{
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: T) -> Bitboard {
        Bitboard(self.0 & rhs.into().0)
    }
}

impl<T> ops::BitAndAssign<T> for Bitboard
where
    T: Into<Bitboard>,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: T) {
        self.0 &= rhs.into().0;
    }
}

impl<T> ops::BitOr<T> for Bitboard
where
    T: Into<Bitboard>,
{
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: T) -> Bitboard {
        Bitboard(self.0 | rhs.into().0)
    }
}

impl<T> ops::BitOrAssign<T> for Bitboard
where
    T: Into<Bitboard>,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: T) {
        self.0 |= rhs.into().0;
    }
}

impl<T> ops::BitXor<T> for Bitboard
where
    T: Into<Bitboard>,
{
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: T) -> Bitboard {
        Bitboard(self.0 ^ rhs.into().0)
    }
}

impl<T> ops::BitXorAssign<T> for Bitboard
where
    T: Into<Bitboard>,
{
    #[inline]
    fn bitxor_assign(&mut self, rhs: T) {
        self.0 ^= rhs.into().0;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T>(iter: T) -> Bitboard
    where
        T: IntoIterator<Item = Square>,
    {
        let mut result = Bitboard(0);
        for sq in iter {
            result.add(sq);
        }
        result
    }
}

impl Extend<Square> for Bitboard {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for sq in iter {
            self.add(sq);
        }
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let square = self.first();
        *self = self.without_first();
        square
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count();
        (count, Some(count))
    }

    #[inline]
    fn count(self) -> usize {
        Bitboard::count(self)
    }

    #[inline]
    fn last(self) -> Option<Square> {
        Bitboard::last(self)
    }
}

impl DoubleEndedIterator for Bitboard {
    #[inline]
    fn next_back(&mut self) -> Option<Square> {
        // The inherent method. On a &mut receiver a bare self.last() would
        // resolve to the draining Iterator::last().
        let square = Bitboard::last(*self);
        if let Some(sq) = square {
            self.0 ^= 1 << sq.to_u32();
        }
        square
    }
}

impl ExactSizeIterator for Bitboard {
    #[inline]
    fn len(&self) -> usize {
        self.count()
    }
}

impl FusedIterator for Bitboard {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_than_one() {
        assert!(!Bitboard(0).more_than_one());
        assert!(!Bitboard(1).more_than_one());
        assert!(!Bitboard(2).more_than_one());
        assert!(Bitboard(3).more_than_one());
        assert!(Bitboard::FULL.more_than_one());
    }

    #[test]
    fn test_first() {
        assert_eq!(Bitboard::from_square(Square::A1).first(), Some(Square::A1));
        assert_eq!(Bitboard::from_square(Square::D2).first(), Some(Square::D2));
        assert_eq!(Bitboard(0).first(), None);
    }

    #[test]
    fn test_last() {
        assert_eq!(Bitboard::from_square(Square::A1).last(), Some(Square::A1));
        assert_eq!(Bitboard(0).with(Square::A1).with(Square::H1).last(), Some(Square::H1));
        assert_eq!(Bitboard(0).last(), None);
    }

    #[test]
    fn test_single_square() {
        assert_eq!(Bitboard(0).single_square(), None);
        assert_eq!(Bitboard::from_square(Square::G5).single_square(), Some(Square::G5));
        assert_eq!(Bitboard(3).single_square(), None);
    }

    #[test]
    fn test_shift() {
        assert_eq!(Bitboard(1).shift(64), Bitboard(0));
        assert_eq!(Bitboard(1).shift(-64), Bitboard(0));
        assert_eq!(Bitboard::FULL.shift(8), Bitboard(!0 << 8));
    }

    #[test]
    fn test_subsets() {
        let rank = Bitboard::from_rank(Rank::Fourth);
        assert!(rank.is_subset(Bitboard::FULL));
        assert!(!Bitboard::FULL.is_subset(rank));
        assert!(Bitboard::DARK_SQUARES.is_disjoint(Bitboard::LIGHT_SQUARES));
        assert!(!rank.is_disjoint(Bitboard::DARK_SQUARES));
    }

    #[test]
    fn test_relative_shift() {
        let pawn = Bitboard::from_square(Square::E2);
        assert_eq!(
            pawn.relative_shift(Color::White, 8),
            Bitboard::from_square(Square::E3)
        );
        assert_eq!(
            pawn.relative_shift(Color::Black, 8),
            Bitboard::from_square(Square::E1)
        );
    }

    #[test]
    fn test_next_back() {
        let mut set = Bitboard::from_square(Square::A1).with(Square::H8);
        assert_eq!(set.next_back(), Some(Square::H8));
        assert_eq!(set, Bitboard::from_square(Square::A1));
        assert_eq!(set.next_back(), Some(Square::A1));
        assert_eq!(set.next_back(), None);
    }

    #[test]
    fn test_minus() {
        assert_eq!(Bitboard::EMPTY.minus(Bitboard(1)), Bitboard::FULL);
        assert_eq!(Bitboard(8).minus(Bitboard(1)), Bitboard(7));
        // The borrow crosses the word halves.
        assert_eq!(
            Bitboard(0x1_0000_0000).minus(Bitboard(1)),
            Bitboard(0xffff_ffff)
        );
    }

    #[test]
    fn test_flip_vertical() {
        let rank_two = Bitboard::from_rank(Rank::Second);
        assert_eq!(rank_two.flip_vertical(), Bitboard::from_rank(Rank::Seventh));
        let file_c = Bitboard::from_file(File::C);
        assert_eq!(file_c.flip_vertical(), file_c);
    }

    #[test]
    fn test_rotate_180() {
        assert_eq!(
            Bitboard::from_square(Square::D6).rotate_180(),
            Bitboard::from_square(Square::E3)
        );
        assert_eq!(Bitboard::FULL.rotate_180(), Bitboard::FULL);
    }

    #[test]
    fn test_complement() {
        let set = Bitboard(0x00ff_1234_0000_5600);
        assert_eq!(set & !set, Bitboard::EMPTY);
        assert_eq!(set | !set, Bitboard::FULL);
        assert_eq!(Bitboard::DARK_SQUARES, !Bitboard::LIGHT_SQUARES);
    }

    #[test]
    fn test_from_iter() {
        let set: Bitboard = [Square::A1, Square::H8].into_iter().collect();
        assert_eq!(set.count(), 2);
        assert!(set.contains(Square::A1));
        let back: Vec<Square> = set.rev().collect();
        assert_eq!(back, vec![Square::H8, Square::A1]);
    }
}
