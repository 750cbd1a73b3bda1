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

use core::{fmt, mem};

/// A file of the board.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Gets a `File` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=7`.
    #[inline]
    pub const fn new(index: u32) -> File {
        assert!(index < 8);
        unsafe { File::new_unchecked(index) }
    }

    /// Gets a `File` from an integer index.
    ///
    /// # Safety
    ///
    /// It is the callers responsibility to ensure the index is in the range
    /// `0..=7`.
    #[inline]
    pub const unsafe fn new_unchecked(index: u32) -> File {
        debug_assert!(index < 8);
        unsafe { mem::transmute(index as u8) }
    }

    #[inline]
    pub(crate) const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Gets the lowercase letter of the file.
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// `A`, ..., `H`, in this order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank of the board, with `First` being the white side's back rank.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// Gets a `Rank` from an integer index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=7`.
    #[inline]
    pub const fn new(index: u32) -> Rank {
        assert!(index < 8);
        unsafe { Rank::new_unchecked(index) }
    }

    /// Gets a `Rank` from an integer index.
    ///
    /// # Safety
    ///
    /// It is the callers responsibility to ensure the index is in the range
    /// `0..=7`.
    #[inline]
    pub const unsafe fn new_unchecked(index: u32) -> Rank {
        debug_assert!(index < 8);
        unsafe { mem::transmute(index as u8) }
    }

    #[inline]
    pub(crate) const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Gets the digit of the rank.
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// `First`, ..., `Eighth`, in this order.
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A square of the board.
///
/// # Examples
///
/// ```
/// use satranc::Square;
///
/// assert_eq!(Square::new(0), Square::A1);
/// assert_eq!(Square::new(63), Square::H8);
/// ```
#[allow(missing_docs)]
#[rustfmt::skip]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Square {
    A1 = 0, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Gets a `Square` from an integer index, where `0` is A1 and file is
    /// the less significant 3-bit group.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=63`.
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 64);
        unsafe { Square::new_unchecked(index) }
    }

    /// Gets a `Square` from an integer index.
    ///
    /// # Safety
    ///
    /// It is the callers responsibility to ensure the index is in the range
    /// `0..=63`.
    #[inline]
    pub const unsafe fn new_unchecked(index: u32) -> Square {
        debug_assert!(index < 64);
        unsafe { mem::transmute(index as u8) }
    }

    /// Gets a `Square` from file and rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use satranc::{File, Rank, Square};
    ///
    /// assert_eq!(Square::from_coords(File::A, Rank::First), Square::A1);
    /// ```
    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        unsafe { Square::new_unchecked(file.to_u32() | (rank.to_u32() << 3)) }
    }

    /// Gets the file.
    #[inline]
    pub const fn file(self) -> File {
        unsafe { File::new_unchecked(self.to_u32() & 7) }
    }

    /// Gets the rank.
    #[inline]
    pub const fn rank(self) -> Rank {
        unsafe { Rank::new_unchecked(self.to_u32() >> 3) }
    }

    #[inline]
    pub(crate) const fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self as usize
    }

    /// Offsets the square index, e.g. by `8` for one rank up, returning
    /// `None` if the result is off the board.
    ///
    /// Note that this is a plain index offset without wraparound protection
    /// at the board edges.
    #[inline]
    pub fn offset(self, delta: i32) -> Option<Square> {
        let index = self as i32 + delta;
        if 0 <= index && index < 64 {
            Some(Square::new(index as u32))
        } else {
            None
        }
    }

    /// The square as seen from the other side of the board, i.e. mirrored
    /// along both axes.
    #[inline]
    pub const fn rotate_180(self) -> Square {
        unsafe { Square::new_unchecked(63 ^ self.to_u32()) }
    }

    /// The Chebyshev distance, i.e. the number of king steps between the
    /// squares.
    pub fn distance(self, other: Square) -> u32 {
        u32::max(
            self.file().to_u32().abs_diff(other.file().to_u32()),
            self.rank().to_u32().abs_diff(other.rank().to_u32()),
        )
    }

    /// `A1`, `B1`, ..., `G8`, `H8`, in this order.
    pub const ALL: [Square; 64] = {
        let mut all = [Square::A1; 64];
        let mut index = 0;
        while index < 64 {
            all[index as usize] = Square::new(index);
            index += 1;
        }
        all
    };
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file().char().to_ascii_uppercase(),
            self.rank().char()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let square = Square::from_coords(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::E4.offset(8), Some(Square::E5));
        assert_eq!(Square::E4.offset(-8), Some(Square::E3));
        assert_eq!(Square::H8.offset(1), None);
    }

    #[test]
    fn test_rotate_180() {
        assert_eq!(Square::A1.rotate_180(), Square::H8);
        assert_eq!(Square::D6.rotate_180(), Square::E3);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Square::D2.distance(Square::G3), 3);
        assert_eq!(Square::A1.distance(Square::A1), 0);
    }
}
