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
use std::error::Error;

use bitflags::bitflags;

use crate::types::Move;

bitflags! {
    /// Reasons for a [`Setup`](crate::Setup) not being a legal position.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct PositionErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;

        /// A king is missing.
        const MISSING_KING = 1 << 1;

        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 2;

        /// There are pawns on the backrank.
        const PAWNS_ON_BACKRANK = 1 << 3;

        /// The side not to move is in check.
        const OPPOSITE_CHECK = 1 << 4;

        /// The en passant square is on the wrong rank, not empty, or the
        /// allegedly double-stepped pawn is not there.
        const INVALID_EP_SQUARE = 1 << 5;

        /// The side to move is checked in a way that could not have been
        /// reached by any sequence of legal moves, e.g. by three pieces
        /// at once, or by two sliders on the same line.
        const IMPOSSIBLE_CHECK = 1 << 6;
    }
}

/// Error when trying to create a [`Position`](crate::Position) from an
/// illegal [`Setup`](crate::Setup).
pub struct PositionError<P> {
    pub(crate) pos: P,
    pub(crate) errors: PositionErrorKinds,
}

impl<P> PositionError<P> {
    /// The kinds of errors as a bitfield.
    pub fn kinds(&self) -> PositionErrorKinds {
        self.errors
    }

    pub(crate) fn map<U, F>(self, f: F) -> PositionError<U>
    where
        F: FnOnce(P) -> U,
    {
        PositionError {
            pos: f(self.pos),
            errors: self.errors,
        }
    }

    fn ignore(mut self, ignore: PositionErrorKinds) -> Result<P, Self> {
        self.errors -= ignore;
        if self.errors.is_empty() {
            Ok(self.pos)
        } else {
            Err(self)
        }
    }

    /// Discards the error if it is only
    /// [`PositionErrorKinds::IMPOSSIBLE_CHECK`], returning the position
    /// anyway.
    pub fn ignore_impossible_check(self) -> Result<P, Self> {
        self.ignore(PositionErrorKinds::IMPOSSIBLE_CHECK)
    }
}

impl<P> fmt::Debug for PositionError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionError")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl<P> fmt::Display for PositionError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reasons = Vec::new();
        if self.errors.contains(PositionErrorKinds::EMPTY_BOARD) {
            reasons.push("empty board");
        }
        if self.errors.contains(PositionErrorKinds::MISSING_KING) {
            reasons.push("missing king");
        }
        if self.errors.contains(PositionErrorKinds::TOO_MANY_KINGS) {
            reasons.push("too many kings");
        }
        if self.errors.contains(PositionErrorKinds::PAWNS_ON_BACKRANK) {
            reasons.push("pawns on backrank");
        }
        if self.errors.contains(PositionErrorKinds::OPPOSITE_CHECK) {
            reasons.push("opposite check");
        }
        if self.errors.contains(PositionErrorKinds::INVALID_EP_SQUARE) {
            reasons.push("invalid ep square");
        }
        if self.errors.contains(PositionErrorKinds::IMPOSSIBLE_CHECK) {
            reasons.push("impossible check");
        }
        write!(f, "illegal position: {}", reasons.join(", "))
    }
}

impl<P> Error for PositionError<P> {}

/// Error when trying to play an illegal move.
#[derive(Clone, Eq, PartialEq)]
pub struct PlayError<P> {
    pub(crate) m: Move,
    pub(crate) inner: P,
}

impl<P> PlayError<P> {
    /// Returns the unchanged position.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> fmt::Debug for PlayError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayError")
            .field("m", &self.m)
            .finish_non_exhaustive()
    }
}

impl<P> fmt::Display for PlayError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move: {}", self.m)
    }
}

impl<P> Error for PlayError<P> {}
