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

//! Chess variants.

use core::num::NonZeroU32;

use crate::{
    board::Board,
    color::{ByColor, Color},
    errors::PositionError,
    position::{validate, Chess, FromSetup, Position, Situation},
    setup::Setup,
    square::Square,
    types::{Move, Outcome, RemainingChecks},
};

/// Like standard chess, but the game also ends after a side delivers the
/// third check.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ThreeCheck {
    situation: Situation,
    remaining_checks: ByColor<RemainingChecks>,
}

impl Default for ThreeCheck {
    fn default() -> ThreeCheck {
        ThreeCheck {
            situation: Situation::new(),
            remaining_checks: ByColor::default(),
        }
    }
}

impl FromSetup for ThreeCheck {
    fn from_setup(setup: Setup) -> Result<ThreeCheck, PositionError<ThreeCheck>> {
        let pos = ThreeCheck {
            situation: Situation::from_setup(&setup),
            remaining_checks: setup.remaining_checks.unwrap_or_default(),
        };
        let errors = validate(&pos);
        if errors.is_empty() {
            Ok(pos)
        } else {
            Err(PositionError { pos, errors })
        }
    }
}

impl Position for ThreeCheck {
    fn board(&self) -> &Board {
        &self.situation.board
    }

    fn turn(&self) -> Color {
        self.situation.turn
    }

    fn ep_square(&self) -> Option<Square> {
        self.situation.ep_square
    }

    fn remaining_checks(&self) -> Option<&ByColor<RemainingChecks>> {
        Some(&self.remaining_checks)
    }

    fn halfmoves(&self) -> u32 {
        self.situation.halfmoves
    }

    fn fullmoves(&self) -> NonZeroU32 {
        self.situation.fullmoves
    }

    fn to_setup(&self) -> Setup {
        Setup {
            board: self.situation.board.clone(),
            turn: self.situation.turn,
            ep_square: self.situation.ep_square,
            remaining_checks: Some(self.remaining_checks),
            halfmoves: self.situation.halfmoves,
            fullmoves: self.situation.fullmoves,
        }
    }

    fn play_unchecked(&mut self, m: &Move) {
        self.situation.do_move(m);

        // The move was made by the previous side to move. If it gives
        // check, the new side to move has received one.
        if self.checkers().any() {
            let checked = self.situation.turn;
            let remaining = self.remaining_checks.get_mut(checked);
            *remaining = remaining.saturating_sub(1);
        }
    }

    fn is_variant_end(&self) -> bool {
        self.remaining_checks.any(|remaining| remaining.is_zero())
    }

    fn variant_outcome(&self) -> Option<Outcome> {
        self.remaining_checks
            .find(|remaining| remaining.is_zero())
            .map(|loser| Outcome::Decisive { winner: !loser })
    }

    fn has_insufficient_material(&self, color: Color) -> bool {
        // Any piece can deliver check.
        (self.board().by_color(color) & !self.board().kings()).is_empty()
    }
}

/// Discriminant of the supported variants.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Variant {
    /// Standard castling-less chess.
    Chess,
    /// See [`ThreeCheck`].
    ThreeCheck,
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Variant; 2] = [Variant::Chess, Variant::ThreeCheck];
}

impl Default for Variant {
    fn default() -> Variant {
        Variant::Chess
    }
}

/// Dynamically dispatched chess variant [`Position`].
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[allow(missing_docs)]
pub enum VariantPosition {
    Chess(Chess),
    ThreeCheck(ThreeCheck),
}

impl From<Chess> for VariantPosition {
    fn from(pos: Chess) -> VariantPosition {
        VariantPosition::Chess(pos)
    }
}

impl From<ThreeCheck> for VariantPosition {
    fn from(pos: ThreeCheck) -> VariantPosition {
        VariantPosition::ThreeCheck(pos)
    }
}

impl VariantPosition {
    /// The starting position of the given variant.
    pub fn new(variant: Variant) -> VariantPosition {
        match variant {
            Variant::Chess => Chess::default().into(),
            Variant::ThreeCheck => ThreeCheck::default().into(),
        }
    }

    /// Sets up a position of the given variant, validating the setup.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if the setup does not describe a legal
    /// position.
    pub fn from_setup(
        variant: Variant,
        setup: Setup,
    ) -> Result<VariantPosition, PositionError<VariantPosition>> {
        match variant {
            Variant::Chess => Chess::from_setup(setup)
                .map(VariantPosition::Chess)
                .map_err(|e| e.map(VariantPosition::Chess)),
            Variant::ThreeCheck => ThreeCheck::from_setup(setup)
                .map(VariantPosition::ThreeCheck)
                .map_err(|e| e.map(VariantPosition::ThreeCheck)),
        }
    }

    /// The variant of this position.
    pub fn variant(&self) -> Variant {
        match self {
            VariantPosition::Chess(_) => Variant::Chess,
            VariantPosition::ThreeCheck(_) => Variant::ThreeCheck,
        }
    }

    fn borrow(&self) -> &dyn Position {
        match self {
            VariantPosition::Chess(pos) => pos,
            VariantPosition::ThreeCheck(pos) => pos,
        }
    }

    fn borrow_mut(&mut self) -> &mut dyn Position {
        match self {
            VariantPosition::Chess(pos) => pos,
            VariantPosition::ThreeCheck(pos) => pos,
        }
    }
}

impl Position for VariantPosition {
    fn board(&self) -> &Board {
        self.borrow().board()
    }

    fn turn(&self) -> Color {
        self.borrow().turn()
    }

    fn ep_square(&self) -> Option<Square> {
        self.borrow().ep_square()
    }

    fn remaining_checks(&self) -> Option<&ByColor<RemainingChecks>> {
        self.borrow().remaining_checks()
    }

    fn halfmoves(&self) -> u32 {
        self.borrow().halfmoves()
    }

    fn fullmoves(&self) -> NonZeroU32 {
        self.borrow().fullmoves()
    }

    fn to_setup(&self) -> Setup {
        self.borrow().to_setup()
    }

    fn play_unchecked(&mut self, m: &Move) {
        self.borrow_mut().play_unchecked(m)
    }

    fn is_variant_end(&self) -> bool {
        self.borrow().is_variant_end()
    }

    fn variant_outcome(&self) -> Option<Outcome> {
        self.borrow().variant_outcome()
    }

    fn has_insufficient_material(&self, color: Color) -> bool {
        self.borrow().has_insufficient_material(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{role::Role, square::Square};

    fn normal(role: Role, from: Square, to: Square) -> Move {
        Move::Normal {
            role,
            from,
            capture: None,
            to,
            promotion: None,
        }
    }

    #[test]
    fn test_three_check() {
        let mut pos = ThreeCheck::default();

        // 1. e4 d6 2. Bb5+ c6 3. Ba4 b5 4. Bb3 a6 5. Bxf7+
        let moves = [
            normal(Role::Pawn, Square::E2, Square::E4),
            normal(Role::Pawn, Square::D7, Square::D6),
            normal(Role::Bishop, Square::F1, Square::B5), // first check
            normal(Role::Pawn, Square::C7, Square::C6),
            normal(Role::Bishop, Square::B5, Square::A4),
            normal(Role::Pawn, Square::B7, Square::B5),
            normal(Role::Bishop, Square::A4, Square::B3),
            normal(Role::Pawn, Square::A7, Square::A6),
            normal(Role::Bishop, Square::B3, Square::F7), // second check
        ];
        for m in &moves {
            let m = match (m.from(), pos.board().role_at(m.to())) {
                (Some(from), Some(capture)) => Move::Normal {
                    role: m.role(),
                    from,
                    capture: Some(capture),
                    to: m.to(),
                    promotion: None,
                },
                _ => *m,
            };
            assert!(pos.is_legal(&m), "expected {m} to be legal");
            pos.play_unchecked(&m);
        }

        assert_eq!(
            *pos.remaining_checks().expect("three check").get(Color::Black),
            RemainingChecks::new(1)
        );
        assert_eq!(
            *pos.remaining_checks().expect("three check").get(Color::White),
            RemainingChecks::new(3)
        );
        assert!(!pos.is_variant_end());

        // Black deals with the check, then the third one ends the game.
        let m = Move::Normal {
            role: Role::King,
            from: Square::E8,
            capture: Some(Role::Bishop),
            to: Square::F7,
            promotion: None,
        };
        assert!(pos.is_legal(&m), "expected {m} to be legal");
        pos.play_unchecked(&m);

        let m = normal(Role::Queen, Square::D1, Square::H5); // third check
        assert!(pos.is_legal(&m), "expected {m} to be legal");
        pos.play_unchecked(&m);

        assert!(pos.is_variant_end());
        assert_eq!(
            pos.outcome(),
            Some(Outcome::Decisive {
                winner: Color::White
            })
        );
        assert!(pos.legal_moves().is_empty());
    }

    #[test]
    fn test_three_check_insufficient_material() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::C1, Color::White.bishop());
        let pos = ThreeCheck::from_setup(Setup {
            board,
            remaining_checks: Some(ByColor::default()),
            ..Setup::empty()
        })
        .expect("legal setup");

        // A lone bishop can still win by checks.
        assert!(!pos.has_insufficient_material(Color::White));
        assert!(pos.has_insufficient_material(Color::Black));
    }

    #[test]
    fn test_variant_position_dispatch() {
        for variant in Variant::ALL {
            let pos = VariantPosition::new(variant);
            assert_eq!(pos.variant(), variant);
            assert_eq!(pos.legal_moves().len(), 20);
            assert_eq!(
                pos.remaining_checks().is_some(),
                variant == Variant::ThreeCheck
            );
        }
    }

    #[test]
    fn test_variant_play() {
        let pos = VariantPosition::new(Variant::ThreeCheck);
        let pos = pos
            .play(&normal(Role::Pawn, Square::E2, Square::E4))
            .expect("e4 is legal");
        assert_eq!(pos.turn(), Color::Black);
    }
}
