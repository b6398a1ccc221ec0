//! Game state and the turn controller
//!
//! [`GameState`] owns the single committed [`Board`]. A move is committed only
//! after it passes the legality gate in [`crate::game::rules::simulate`]. After
//! committing, the new side to move is examined for check and, if checked, for
//! an escape. This decides between `Applied`, `AppliedNowInCheck` and
//! `AppliedCheckmate`.
//!
//! Everything is evaluated on values before the commit, so a rejected move or
//! an invariant error leaves the state exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{GameError, GameResult, IllegalMoveReason};
use super::pieces::Color;
use super::resources::{CurrentTurn, MoveHistory, MoveRecord, TurnState};
use super::rules::{attackers_of, has_escape, is_in_check, legal_destinations, try_move, Board};
use super::types::Square;
use crate::core::RulesConfig;

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move committed, the opponent is not in check
    Applied,
    /// Move refused, nothing changed
    Rejected(IllegalMoveReason),
    /// Move committed, the opponent is in check but has an escape
    AppliedNowInCheck,
    /// Move committed and the game is over
    AppliedCheckmate { winner: Color },
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    turn: CurrentTurn,
    /// The side to move is in check
    in_check: bool,
    history: MoveHistory,
    config: RulesConfig,
}

impl GameState {
    /// Standard position, White to move, default rules
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::standard(),
            turn: CurrentTurn::default(),
            in_check: false,
            history: MoveHistory::default(),
            config,
        }
    }

    /// Start from a custom position
    ///
    /// The side not to move must not be in check, since that position could
    /// never arise from legal play. If `side_to_move` is already mated the game
    /// starts terminal.
    pub fn from_position(board: Board, side_to_move: Color, config: RulesConfig) -> GameResult<Self> {
        if is_in_check(&board, side_to_move.opponent())? {
            return Err(GameError::InvalidSetup {
                message: format!(
                    "{} is in check but it is {}'s turn",
                    side_to_move.opponent(),
                    side_to_move
                ),
            });
        }

        let mut turn = CurrentTurn::starting_with(side_to_move);
        let in_check = is_in_check(&board, side_to_move)?;
        if in_check && !has_escape(&board, side_to_move, config.escape_search)? {
            turn.finish(side_to_move.opponent());
        }

        Ok(Self {
            board,
            turn,
            in_check,
            history: MoveHistory::default(),
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn.state
    }

    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    /// Color whose turn it is; after checkmate, the mated color
    pub fn side_to_move(&self) -> Color {
        match self.turn.state {
            TurnState::WhiteToMove => Color::White,
            TurnState::BlackToMove => Color::Black,
            TurnState::Terminal { winner } => winner.opponent(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.turn.state.is_terminal()
    }

    pub fn winner(&self) -> Option<Color> {
        self.turn.state.winner()
    }

    /// The side to move is in check
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Is `color`'s king attacked on the committed board?
    pub fn is_in_check(&self, color: Color) -> GameResult<bool> {
        is_in_check(&self.board, color)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Legal destinations for the piece on `from`, for move hints
    ///
    /// Empty once the game is over or if `from` is not the mover's piece.
    pub fn legal_moves_from(&self, from: Square) -> GameResult<Vec<Square>> {
        match self.turn.state.active_color() {
            Some(mover) => legal_destinations(&self.board, from, mover),
            None => Ok(Vec::new()),
        }
    }

    /// Try to play `from` → `to` for the side to move
    ///
    /// Illegal moves come back as `Ok(MoveOutcome::Rejected(_))` with the state
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Only invariant violations, e.g. [`GameError::KingNotFound`].
    pub fn attempt_move(&mut self, from: Square, to: Square) -> GameResult<MoveOutcome> {
        let Some(mover) = self.turn.state.active_color() else {
            debug!("[GAME] {}-{} rejected: game is over", from, to);
            return Ok(MoveOutcome::Rejected(IllegalMoveReason::GameOver));
        };

        let next_board = match try_move(&self.board, from, to, mover) {
            Ok(board) => board,
            Err(GameError::IllegalMove(reason)) => return Ok(MoveOutcome::Rejected(reason)),
            Err(e) => return Err(e),
        };
        let Some(piece) = self.board.get(from) else {
            return Ok(MoveOutcome::Rejected(IllegalMoveReason::NotYourPiece));
        };

        let opponent = mover.opponent();
        let gives_check = is_in_check(&next_board, opponent)?;
        let gives_mate =
            gives_check && !has_escape(&next_board, opponent, self.config.escape_search)?;
        let checkers = if gives_check {
            let king = next_board.find_king(opponent)?;
            Some((king, attackers_of(&next_board, king, mover)))
        } else {
            None
        };

        let captured = self.board.get(to);
        self.board = next_board;
        self.history.add_move(MoveRecord {
            piece,
            from,
            to,
            captured,
            gave_check: gives_check,
            gave_checkmate: gives_mate,
        });
        debug!("[GAME] {} {}-{} committed", piece, from, to);

        if gives_mate {
            self.turn.finish(mover);
            self.in_check = true;
            info!("[GAME] ========== CHECKMATE! ==========");
            info!("[GAME] {} wins - Final Move: #{}", mover, self.turn.move_number);
            return Ok(MoveOutcome::AppliedCheckmate { winner: mover });
        }

        self.turn.switch();
        self.in_check = gives_check;
        if let Some((king, attackers)) = checkers {
            let attackers: Vec<String> = attackers.into_iter().map(|sq| sq.to_algebraic()).collect();
            info!(
                "[GAME] {} King at {} is under attack from {}",
                opponent,
                king,
                attackers.join(", ")
            );
            Ok(MoveOutcome::AppliedNowInCheck)
        } else {
            Ok(MoveOutcome::Applied)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
