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

//! Rules and move generation for a castling-less chess variant family.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use satranc::{Chess, Position};
//!
//! let pos = Chess::default();
//! let legals = pos.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use satranc::{Chess, Color, Move, Position, Role, Square};
//!
//! let pos = Chess::default();
//!
//! // 1. e4
//! let pos = pos.play(&Move::Normal {
//!     role: Role::Pawn,
//!     from: Square::E2,
//!     to: Square::E4,
//!     capture: None,
//!     promotion: None,
//! })?;
//!
//! assert_eq!(pos.turn(), Color::Black);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Detect game over conditions:
//!
//! ```
//! use satranc::{Chess, Position};
//!
//! let pos = Chess::default();
//! assert!(!pos.is_checkmate());
//! assert!(!pos.is_stalemate());
//! assert!(!pos.is_insufficient_material());
//! assert_eq!(pos.outcome(), None); // no winner yet
//! ```

#![doc(html_root_url = "https://docs.rs/satranc/0.1.0")]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub mod attacks;

mod bitboard;
mod board;
mod color;
mod errors;
mod movelist;
mod perft;
mod position;
mod role;
mod setup;
mod square;
mod types;

pub mod variant;

pub use crate::{
    bitboard::Bitboard,
    board::Board,
    color::{ByColor, Color},
    errors::{PlayError, PositionError, PositionErrorKinds},
    movelist::MoveList,
    perft::perft,
    position::{Chess, Context, Dests, FromSetup, Position},
    role::{ByRole, Role},
    setup::Setup,
    square::{File, Rank, Square},
    types::{Move, Outcome, Piece, RemainingChecks},
};
