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
    color::{ByColor, Color},
    role::Role,
    square::Square,
};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub promoted: bool,
}

impl Piece {
    /// Gets the character representation: uppercase for white pieces,
    /// lowercase for black pieces.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }
}

/// Information about a move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Move {
    /// A normal move, e.g. `Nc3`.
    Normal {
        #[allow(missing_docs)]
        role: Role,
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        capture: Option<Role>,
        #[allow(missing_docs)]
        to: Square,
        #[allow(missing_docs)]
        promotion: Option<Role>,
    },
    /// An en passant capture, e.g. `exd6`.
    EnPassant {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },
    /// A piece drop. Never legal in the shipped variants, but part of
    /// the move vocabulary.
    Put {
        #[allow(missing_docs)]
        role: Role,
        #[allow(missing_docs)]
        to: Square,
    },
}

impl Move {
    /// Gets the role of the moved piece.
    pub const fn role(&self) -> Role {
        match *self {
            Move::Normal { role, .. } | Move::Put { role, .. } => role,
            Move::EnPassant { .. } => Role::Pawn,
        }
    }

    /// Gets the origin square or `None` for drops.
    pub const fn from(&self) -> Option<Square> {
        match *self {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => Some(from),
            Move::Put { .. } => None,
        }
    }

    /// Gets the target square.
    pub const fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } | Move::Put { to, .. } => to,
        }
    }

    /// Gets the role of the captured piece or `None`.
    pub const fn capture(&self) -> Option<Role> {
        match *self {
            Move::Normal { capture, .. } => capture,
            Move::EnPassant { .. } => Some(Role::Pawn),
            Move::Put { .. } => None,
        }
    }

    /// Checks if the move is a capture.
    pub const fn is_capture(&self) -> bool {
        matches!(
            *self,
            Move::Normal {
                capture: Some(_),
                ..
            } | Move::EnPassant { .. }
        )
    }

    /// Checks if the move is an en passant capture.
    pub const fn is_en_passant(&self) -> bool {
        matches!(*self, Move::EnPassant { .. })
    }

    /// Checks if the move zeroes the halfmove clock.
    pub const fn is_zeroing(&self) -> bool {
        matches!(
            *self,
            Move::Normal {
                role: Role::Pawn,
                ..
            } | Move::Normal {
                capture: Some(_),
                ..
            } | Move::EnPassant { .. }
        )
    }

    /// Gets the promotion role.
    pub const fn promotion(&self) -> Option<Role> {
        match *self {
            Move::Normal { promotion, .. } => promotion,
            _ => None,
        }
    }

    /// Checks if the move is a promotion.
    pub const fn is_promotion(&self) -> bool {
        matches!(
            *self,
            Move::Normal {
                promotion: Some(_),
                ..
            }
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                if role != Role::Pawn {
                    write!(f, "{}", role.upper_char())?;
                }

                write!(
                    f,
                    "{}{}{}",
                    from,
                    if capture.is_some() { 'x' } else { '-' },
                    to
                )?;

                if let Some(p) = promotion {
                    write!(f, "={}", p.upper_char())?;
                }

                Ok(())
            }
            Move::EnPassant { from, to, .. } => write!(f, "{from}x{to}"),
            Move::Put { role, to } => {
                if role != Role::Pawn {
                    write!(f, "{}", role.upper_char())?;
                }
                write!(f, "@{to}")
            }
        }
    }
}

/// The number of checks a side may still receive before losing,
/// as used in the three-check variant. Starts at 3.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct RemainingChecks(u32);

impl Default for RemainingChecks {
    fn default() -> RemainingChecks {
        RemainingChecks(3)
    }
}

impl RemainingChecks {
    /// Constructs a new [`RemainingChecks`] value.
    ///
    /// # Panics
    ///
    /// Panics if `n > 3`.
    pub fn new(n: u32) -> RemainingChecks {
        assert!(n <= 3);
        RemainingChecks(n)
    }

    #[allow(missing_docs)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn saturating_sub(self, n: u32) -> RemainingChecks {
        RemainingChecks(self.0.saturating_sub(n))
    }
}

impl fmt::Display for ByColor<RemainingChecks> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.white.0, self.black.0)
    }
}

/// Outcome of a game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    #[allow(missing_docs)]
    Decisive { winner: Color },
    #[allow(missing_docs)]
    Draw,
}

impl Outcome {
    #[allow(missing_docs)]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_move_display() {
        let m = Move::Normal {
            role: Role::Knight,
            from: Square::G1,
            capture: None,
            to: Square::F3,
            promotion: None,
        };
        assert_eq!(m.to_string(), "Ng1-f3");

        let m = Move::Normal {
            role: Role::Pawn,
            from: Square::G7,
            capture: Some(Role::Rook),
            to: Square::H8,
            promotion: Some(Role::Queen),
        };
        assert_eq!(m.to_string(), "g7xh8=Q");
        assert!(m.is_zeroing());
    }

    #[test]
    fn test_remaining_checks() {
        let checks = RemainingChecks::default();
        assert!(!checks.is_zero());
        assert!(checks.saturating_sub(1).saturating_sub(2).is_zero());
        assert!(checks.saturating_sub(5).is_zero());
    }

    #[test]
    fn test_outcome() {
        assert_eq!(
            Outcome::Decisive {
                winner: Color::Black
            }
            .to_string(),
            "0-1"
        );
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
