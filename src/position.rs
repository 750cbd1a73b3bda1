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

use arrayvec::ArrayVec;

use crate::{
    attacks,
    bitboard::Bitboard,
    board::Board,
    color::{ByColor, Color},
    errors::{PlayError, PositionError, PositionErrorKinds},
    movelist::MoveList,
    role::Role,
    setup::Setup,
    square::{Rank, Square},
    types::{Move, Outcome, Piece, RemainingChecks},
};

/// Precomputed king safety information for the side to move. Computing
/// this once and passing it to [`Position::dests()`] for every origin
/// square avoids recomputing checkers and pin rays per piece.
#[derive(Clone, Debug)]
pub struct Context {
    /// Square of our king, if any.
    pub king: Option<Square>,

    /// Enemy pieces giving check.
    pub checkers: Bitboard,

    /// Pieces of either color that are the only piece between an enemy
    /// slider and our king.
    pub blockers: Bitboard,

    /// The game has ended by a variant-specific rule.
    pub variant_end: bool,

    /// A capture is available and the variant forces captures. Always
    /// `false` in the shipped variants.
    pub must_capture: bool,
}

/// Legal target squares for each origin square of the side to move.
pub type Dests = ArrayVec<(Square, Bitboard), 64>;

/// Common state of castling-less positions: the board plus the turn,
/// en passant square and move clocks.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub(crate) struct Situation {
    pub board: Board,
    pub turn: Color,
    pub ep_square: Option<Square>,
    pub halfmoves: u32,
    pub fullmoves: NonZeroU32,
}

impl Situation {
    pub fn new() -> Situation {
        Situation {
            board: Board::new(),
            turn: Color::White,
            ep_square: None,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }

    pub fn from_setup(setup: &Setup) -> Situation {
        Situation {
            board: setup.board.clone(),
            turn: setup.turn,
            ep_square: setup.ep_square,
            halfmoves: setup.halfmoves,
            fullmoves: setup.fullmoves,
        }
    }

    /// Applies a move without checking legality.
    pub fn do_move(&mut self, m: &Move) {
        let turn = self.turn;
        self.ep_square = None;

        self.halfmoves = if m.is_zeroing() {
            0
        } else {
            self.halfmoves.saturating_add(1)
        };

        match *m {
            Move::Normal {
                role,
                from,
                to,
                promotion,
                ..
            } => {
                if role == Role::Pawn
                    && from.rank() == turn.relative_rank(Rank::Second)
                    && to.rank() == turn.relative_rank(Rank::Fourth)
                {
                    self.ep_square = from.offset(turn.fold_wb(8, -8));
                }

                let piece = match promotion {
                    Some(promotion) => Piece {
                        color: turn,
                        role: promotion,
                        promoted: true,
                    },
                    None => Piece {
                        color: turn,
                        role,
                        promoted: self.board.promoted().contains(from),
                    },
                };

                self.board.discard_piece_at(from);
                self.board.set_piece_at(to, piece);
            }
            Move::EnPassant { from, to } => {
                self.board
                    .discard_piece_at(Square::from_coords(to.file(), from.rank()));
                if let Some(pawn) = self.board.take_piece_at(from) {
                    self.board.set_piece_at(to, pawn);
                }
            }
            Move::Put { role, to } => {
                self.board.set_piece_at(to, role.of(turn));
            }
        }

        if turn == Color::Black {
            self.fullmoves = NonZeroU32::new(self.fullmoves.get().saturating_add(1))
                .unwrap_or(NonZeroU32::MIN);
        }
        self.turn = !turn;
    }
}

/// Constructs a position from a [`Setup`].
pub trait FromSetup: Sized {
    /// Sets up a position from the given [`Setup`], validating it.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if the setup does not describe a legal
    /// position.
    fn from_setup(setup: Setup) -> Result<Self, PositionError<Self>>;
}

/// A playable position with a side to move.
pub trait Position {
    /// Piece positions on the board.
    fn board(&self) -> &Board;

    /// Side to move.
    fn turn(&self) -> Color;

    /// The unvalidated en passant square, as after the previous double
    /// pawn step, regardless of whether an en passant capture is actually
    /// possible.
    fn ep_square(&self) -> Option<Square>;

    /// Remaining checks for the three-check variant.
    fn remaining_checks(&self) -> Option<&ByColor<RemainingChecks>>;

    /// Number of half-moves since the last capture or pawn move.
    fn halfmoves(&self) -> u32;

    /// Current move number.
    fn fullmoves(&self) -> NonZeroU32;

    /// Converts the position back to a (legal) [`Setup`].
    fn to_setup(&self) -> Setup;

    /// Plays a move without checking legality. Illegal moves corrupt the
    /// position and can cause panics down the line, so the caller is
    /// responsible for ensuring [`Position::is_legal()`] would hold.
    fn play_unchecked(&mut self, m: &Move);

    /// Checks if the game has ended by a variant-specific rule.
    fn is_variant_end(&self) -> bool;

    /// The variant-specific outcome, if the game ended by a variant rule.
    fn variant_outcome(&self) -> Option<Outcome>;

    /// Checks if the given side does not have sufficient material to
    /// deliver mate by any sequence of legal moves.
    fn has_insufficient_material(&self, color: Color) -> bool;

    /// Squares occupied by the side to move.
    #[inline]
    fn us(&self) -> Bitboard {
        self.board().by_color(self.turn())
    }

    /// Squares occupied by the waiting side.
    #[inline]
    fn them(&self) -> Bitboard {
        self.board().by_color(!self.turn())
    }

    /// Squares occupied by the side to move with pieces of `role`.
    #[inline]
    fn our(&self, role: Role) -> Bitboard {
        self.us() & self.board().by_role(role)
    }

    /// Squares occupied by the waiting side with pieces of `role`.
    #[inline]
    fn their(&self, role: Role) -> Bitboard {
        self.them() & self.board().by_role(role)
    }

    /// Computes the king safety [`Context`] for the side to move.
    fn ctx(&self) -> Context {
        let board = self.board();
        let turn = self.turn();
        let variant_end = self.is_variant_end();

        let Some(king) = board.king_of(turn) else {
            return Context {
                king: None,
                checkers: Bitboard::EMPTY,
                blockers: Bitboard::EMPTY,
                variant_end,
                must_capture: false,
            };
        };

        let snipers = ((attacks::rook_attacks(king, Bitboard::EMPTY) & board.straight_sliders())
            | (attacks::bishop_attacks(king, Bitboard::EMPTY) & board.diagonal_sliders()))
            & board.by_color(!turn);

        let mut blockers = Bitboard::EMPTY;
        for sniper in snipers {
            let b = attacks::between(king, sniper) & board.occupied();
            if !b.more_than_one() {
                blockers |= b;
            }
        }

        Context {
            king: Some(king),
            checkers: board.attacks_to(king, !turn, board.occupied()),
            blockers,
            variant_end,
            must_capture: false,
        }
    }

    /// Enemy pieces giving check.
    fn checkers(&self) -> Bitboard {
        self.board().king_of(self.turn()).map_or(Bitboard::EMPTY, |king| {
            self.board()
                .attacks_to(king, !self.turn(), self.board().occupied())
        })
    }

    /// Tests if the side to move is in check.
    fn is_check(&self) -> bool {
        self.checkers().any()
    }

    /// Legal target squares for the piece on `from`. Empty if there is no
    /// piece of the side to move on `from`, or the game has ended.
    fn dests(&self, from: Square, ctx: &Context) -> Bitboard {
        if ctx.variant_end {
            return Bitboard::EMPTY;
        }

        let board = self.board();
        let turn = self.turn();
        let Some(piece) = board.piece_at(from) else {
            return Bitboard::EMPTY;
        };
        if piece.color != turn {
            return Bitboard::EMPTY;
        }

        let mut pseudo = attacks::attacks(from, piece, board.occupied());
        let mut legal_ep = Bitboard::EMPTY;

        if piece.role == Role::Pawn {
            pseudo &= board.by_color(!turn);

            let single = Bitboard::from_square(from).relative_shift(turn, 8) & !board.occupied();
            pseudo |= single;
            if from.rank() == turn.relative_rank(Rank::Second) {
                pseudo |= single.relative_shift(turn, 8) & !board.occupied();
            }

            if let Some(ep) = self.ep_square() {
                if can_capture_ep(self, from, ep, ctx) {
                    legal_ep = Bitboard::from_square(ep);
                }
            }
        } else {
            pseudo &= !board.by_color(turn);
        }

        if ctx.must_capture {
            pseudo &= board.by_color(!turn);
        }

        if piece.role == Role::King {
            // The king has to move off shared rays, so test safety with
            // the king itself removed from the occupancy.
            let occupied = board.occupied().without(from);
            let mut safe = Bitboard::EMPTY;
            for to in pseudo {
                if board.attacks_to(to, !turn, occupied).is_empty() {
                    safe.add(to);
                }
            }
            return safe;
        }

        if let Some(king) = ctx.king {
            if ctx.checkers.any() {
                let Some(checker) = ctx.checkers.single_square() else {
                    // Double check. Only an en passant capture validated
                    // by full simulation could remain, and it never does.
                    return legal_ep;
                };
                pseudo &= attacks::between(checker, king).with(checker);
            }

            if ctx.blockers.contains(from) {
                pseudo &= attacks::ray(from, king);
            }
        }

        pseudo | legal_ep
    }

    /// Legal target squares for every piece of the side to move. Empty if
    /// the game has ended.
    fn all_dests(&self, ctx: &Context) -> Dests {
        let mut dests = Dests::new();
        if ctx.variant_end {
            return dests;
        }
        for from in self.us() {
            dests.push((from, self.dests(from, ctx)));
        }
        dests
    }

    /// Tests if the side to move has at least one legal move.
    fn has_dests(&self, ctx: &Context) -> bool {
        for from in self.us() {
            if self.dests(from, ctx).any() {
                return true;
            }
        }
        false
    }

    /// Generates all legal moves.
    fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let ctx = self.ctx();
        let board = self.board();
        let backrank = (!self.turn()).backrank();

        for (from, dests) in self.all_dests(&ctx) {
            let Some(role) = board.role_at(from) else {
                continue;
            };
            for to in dests {
                if role == Role::Pawn && self.ep_square() == Some(to) {
                    moves.push(Move::EnPassant { from, to });
                } else if role == Role::Pawn && to.rank() == backrank {
                    for promotion in [Role::Queen, Role::Rook, Role::Bishop, Role::Knight] {
                        moves.push(Move::Normal {
                            role,
                            from,
                            capture: board.role_at(to),
                            to,
                            promotion: Some(promotion),
                        });
                    }
                } else {
                    moves.push(Move::Normal {
                        role,
                        from,
                        capture: board.role_at(to),
                        to,
                        promotion: None,
                    });
                }
            }
        }

        moves
    }

    /// Tests a move for legality.
    fn is_legal(&self, m: &Move) -> bool {
        let ctx = self.ctx();
        match *m {
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                if !self.us().contains(from) || self.board().role_at(from) != Some(role) {
                    return false;
                }
                if capture != self.board().role_at(to) {
                    return false;
                }
                if matches!(promotion, Some(Role::Pawn) | Some(Role::King)) {
                    return false;
                }
                if promotion.is_some()
                    != (role == Role::Pawn && to.rank() == (!self.turn()).backrank())
                {
                    return false;
                }
                // A pawn capture onto the en passant square has to be
                // expressed as Move::EnPassant.
                if role == Role::Pawn && self.ep_square() == Some(to) {
                    return false;
                }
                self.dests(from, &ctx).contains(to)
            }
            Move::EnPassant { from, to } => {
                self.ep_square() == Some(to)
                    && self.our(Role::Pawn).contains(from)
                    && self.dests(from, &ctx).contains(to)
            }
            Move::Put { .. } => false,
        }
    }

    /// Plays a move after checking legality.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayError`] with the unchanged position if the move is
    /// not legal.
    fn play(mut self, m: &Move) -> Result<Self, PlayError<Self>>
    where
        Self: Sized,
    {
        if self.is_legal(m) {
            self.play_unchecked(m);
            Ok(self)
        } else {
            Err(PlayError { m: *m, inner: self })
        }
    }

    /// Tests for checkmate.
    fn is_checkmate(&self) -> bool {
        let ctx = self.ctx();
        ctx.checkers.any() && !self.has_dests(&ctx)
    }

    /// Tests for stalemate.
    fn is_stalemate(&self) -> bool {
        let ctx = self.ctx();
        ctx.checkers.is_empty() && !ctx.variant_end && !self.has_dests(&ctx)
    }

    /// Tests if neither side can deliver mate by any sequence of legal
    /// moves, making the game a dead draw.
    fn is_insufficient_material(&self) -> bool {
        Color::ALL
            .into_iter()
            .all(|color| self.has_insufficient_material(color))
    }

    /// Tests if the pieces of both sides could have arisen from the
    /// starting material by legal promotions only.
    fn is_standard_material(&self) -> bool {
        let board = self.board();
        Color::ALL.into_iter().all(|color| {
            // Promoted pieces count as the pawns they once were.
            let side = board.by_color(color) & !board.promoted();
            let bishops = board.bishops() & side;

            (board.pawns() & side).count()
                + (board.promoted() & board.by_color(color)).count()
                + (board.knights() & side).count().saturating_sub(2)
                + (bishops & Bitboard::LIGHT_SQUARES).count().saturating_sub(1)
                + (bishops & Bitboard::DARK_SQUARES).count().saturating_sub(1)
                + (board.rooks() & side).count().saturating_sub(2)
                + (board.queens() & side).count().saturating_sub(1)
                <= 8
        })
    }

    /// The outcome of the game, or `None` if the game is ongoing.
    fn outcome(&self) -> Option<Outcome> {
        self.variant_outcome().or_else(|| {
            if self.is_checkmate() {
                Some(Outcome::Decisive {
                    winner: !self.turn(),
                })
            } else if self.is_stalemate() || self.is_insufficient_material() {
                Some(Outcome::Draw)
            } else {
                None
            }
        })
    }

    /// Tests if the game is over: by checkmate, stalemate, insufficient
    /// material or a variant rule.
    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

// The en passant capture removes two pieces from their rank and can
// expose the king. Simulate the resulting occupancy and test for
// attackers.
fn can_capture_ep<P: Position + ?Sized>(pos: &P, from: Square, ep: Square, ctx: &Context) -> bool {
    if !attacks::pawn_attacks(pos.turn(), from).contains(ep) {
        return false;
    }
    let Some(king) = ctx.king else {
        return true;
    };
    let Some(captured) = ep.offset(pos.turn().fold_wb(-8, 8)) else {
        return false;
    };
    let occupied = pos.board().occupied() ^ Bitboard::from_square(from) ^ Bitboard::from_square(ep)
        ^ Bitboard::from_square(captured);
    (pos.board().attacks_to(king, !pos.turn(), occupied) & occupied).is_empty()
}

pub(crate) fn validate<P: Position>(pos: &P) -> PositionErrorKinds {
    let mut errors = PositionErrorKinds::empty();
    let board = pos.board();
    let turn = pos.turn();

    if board.occupied().is_empty() {
        errors |= PositionErrorKinds::EMPTY_BOARD;
    }

    for color in Color::ALL {
        let kings = board.kings() & board.by_color(color);
        if kings.is_empty() {
            errors |= PositionErrorKinds::MISSING_KING;
        } else if kings.more_than_one() {
            errors |= PositionErrorKinds::TOO_MANY_KINGS;
        }
    }

    if (board.pawns() & Bitboard::BACKRANKS).any() {
        errors |= PositionErrorKinds::PAWNS_ON_BACKRANK;
    }

    if let Some(ep) = pos.ep_square() {
        if !valid_ep_square(board, turn, ep) {
            errors |= PositionErrorKinds::INVALID_EP_SQUARE;
        }
    }

    if let Some(their_king) = board.king_of(!turn) {
        if board.attacks_to(their_king, turn, board.occupied()).any() {
            errors |= PositionErrorKinds::OPPOSITE_CHECK;
        }
    }

    if let Some(our_king) = board.king_of(turn) {
        let checkers = board.attacks_to(our_king, !turn, board.occupied());
        if checkers.count() > 2 {
            errors |= PositionErrorKinds::IMPOSSIBLE_CHECK;
        } else if let (Some(a), Some(b)) = (checkers.first(), checkers.last()) {
            // Two sliders on one line through the king cannot both have
            // started giving check on the same move.
            if a != b && attacks::ray(a, b).contains(our_king) {
                errors |= PositionErrorKinds::IMPOSSIBLE_CHECK;
            }
        }
    }

    errors
}

fn valid_ep_square(board: &Board, turn: Color, ep: Square) -> bool {
    if ep.rank() != turn.relative_rank(Rank::Sixth) {
        return false;
    }
    if board.occupied().contains(ep) {
        return false;
    }
    // The origin of the double step must have been vacated.
    let origin_empty = ep
        .offset(turn.fold_wb(8, -8))
        .is_some_and(|origin| !board.occupied().contains(origin));
    // The double stepped enemy pawn sits in front of the target square.
    let pawn_present = ep.offset(turn.fold_wb(-8, 8)).is_some_and(|pawn_sq| {
        (board.pawns() & board.by_color(!turn)).contains(pawn_sq)
    });
    origin_empty && pawn_present
}

/// A standard castling-less chess position.
///
/// # Examples
///
/// ```
/// use satranc::{Chess, Position, Square};
///
/// let pos = Chess::default();
/// assert_eq!(pos.legal_moves().len(), 20);
///
/// let ctx = pos.ctx();
/// assert_eq!(pos.dests(Square::G1, &ctx).count(), 2);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Chess {
    situation: Situation,
}

impl Default for Chess {
    fn default() -> Chess {
        Chess {
            situation: Situation::new(),
        }
    }
}

impl FromSetup for Chess {
    fn from_setup(setup: Setup) -> Result<Chess, PositionError<Chess>> {
        let pos = Chess {
            situation: Situation::from_setup(&setup),
        };
        let errors = validate(&pos);
        if errors.is_empty() {
            Ok(pos)
        } else {
            Err(PositionError { pos, errors })
        }
    }
}

impl Position for Chess {
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
        None
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
            remaining_checks: None,
            halfmoves: self.situation.halfmoves,
            fullmoves: self.situation.fullmoves,
        }
    }

    fn play_unchecked(&mut self, m: &Move) {
        self.situation.do_move(m);
    }

    fn is_variant_end(&self) -> bool {
        false
    }

    fn variant_outcome(&self) -> Option<Outcome> {
        None
    }

    fn has_insufficient_material(&self, color: Color) -> bool {
        let board = self.board();
        let side = board.by_color(color);
        let queen_class = board.queens() | board.promoted_pawns();

        if (side & (board.pawns() | board.rooks() | queen_class)).any() {
            return false;
        }

        if (side & board.knights()).any() {
            return side.count() <= 2
                && (board.by_color(!color) & !board.kings() & !queen_class).is_empty();
        }

        if (side & board.bishops()).any() {
            let same_color = (board.bishops() & Bitboard::DARK_SQUARES).is_empty()
                || (board.bishops() & Bitboard::LIGHT_SQUARES).is_empty();
            return same_color && board.pawns().is_empty() && board.knights().is_empty();
        }

        true
    }
}
