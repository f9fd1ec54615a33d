//! Match controller: turn order, move validation, verdicts and score.
//!
//! The controller owns the board and both players. A UI feeds it cell
//! indices and renders the [`MoveResult`]s it returns; it never touches the
//! board or the players directly.

use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind, EngineResult};
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::opponent::{Opponent, RandomOpponent};
use crate::outcome::{MatchState, MoveResult, RejectReason, ResultSnapshot};
use crate::player::Player;
use crate::rules::{self, WinningLine};
use crate::types::{CELL_COUNT, Marker, Seat};
use tracing::{debug, info, instrument, warn};

/// Runs consecutive matches between two seats and keeps their score.
#[derive(Debug, Clone)]
pub struct MatchController {
    pub(crate) board: Board,
    pub(crate) player_one: Player,
    pub(crate) player_two: Player,
    state: MatchState,
    winning_line: Option<WinningLine>,
    moves_played: usize,
}

impl MatchController {
    /// New session: player one plays X and moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::from_players(Player::new(Marker::X), Player::new(Marker::O))
    }

    /// New session with display names for both seats.
    #[instrument(skip(one, two))]
    pub fn named(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self::from_players(Player::named(Marker::X, one), Player::named(Marker::O, two))
    }

    fn from_players(player_one: Player, player_two: Player) -> Self {
        let mut controller = Self {
            board: Board::new(),
            player_one,
            player_two,
            state: MatchState::AwaitingPlayerOneMove,
            winning_line: None,
            moves_played: 0,
        };
        controller.state = MatchState::awaiting(controller.starting_seat());
        controller
    }

    /// Gives player one `marker` and player two the other one.
    ///
    /// Whoever holds X moves first, now and after every restart.
    ///
    /// # Errors
    ///
    /// Returns `MarkersLocked` once a move has been played this match.
    #[instrument(skip(self))]
    pub fn assign_markers(&mut self, player_one: Marker) -> EngineResult<()> {
        if !self.board.is_empty() {
            warn!("Marker change refused mid-match");
            return Err(EngineError::new(EngineErrorKind::MarkersLocked));
        }
        self.player_one.set_marker(player_one);
        self.player_two.set_marker(player_one.other());
        self.state = MatchState::awaiting(self.starting_seat());
        info!(starting_seat = %self.starting_seat(), "Markers assigned");
        Ok(())
    }

    /// Plays `cell` for whichever seat is to move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCell` if `cell` is not in 0-8. Occupied cells, a full
    /// board and a finished match are not errors: they come back as
    /// [`MoveResult::Rejected`] with state untouched.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_move(&mut self, cell: usize) -> EngineResult<MoveResult> {
        Self::validate_cell(cell)?;
        match self.state.to_move() {
            Some(seat) => self.apply_move(seat, cell),
            None => Ok(Self::reject(RejectReason::MatchOver)),
        }
    }

    /// Plays `cell` on behalf of `seat`, refusing if it is not that seat's turn.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCell` if `cell` is not in 0-8.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_move_as(&mut self, seat: Seat, cell: usize) -> EngineResult<MoveResult> {
        Self::validate_cell(cell)?;
        match self.state.to_move() {
            None => Ok(Self::reject(RejectReason::MatchOver)),
            Some(to_move) if to_move != seat => Ok(Self::reject(RejectReason::WrongTurn(seat))),
            Some(_) => self.apply_move(seat, cell),
        }
    }

    /// Lets a computer opponent take the current turn.
    ///
    /// # Errors
    ///
    /// Propagates the opponent's errors, including `InvalidCell` if it
    /// answers with an index outside 0-8.
    #[instrument(skip_all, fields(opponent = opponent.name()))]
    pub fn submit_opponent_move(&mut self, opponent: &mut dyn Opponent) -> EngineResult<MoveResult> {
        if self.state.is_terminal() {
            return Ok(Self::reject(RejectReason::MatchOver));
        }
        let cell = opponent.choose_move(&self.board)?;
        self.submit_move(cell)
    }

    /// Asks `opponent` which cell it would play. State is not changed.
    ///
    /// # Errors
    ///
    /// Returns `NoAvailableCells` if the board is full.
    #[instrument(skip_all, fields(opponent = opponent.name()))]
    pub fn suggest_move(&self, opponent: &mut dyn Opponent) -> EngineResult<usize> {
        opponent.choose_move(&self.board)
    }

    /// Uniformly random free cell.
    ///
    /// # Errors
    ///
    /// Returns `NoAvailableCells` if the board is full.
    #[instrument(skip(self))]
    pub fn pick_random_available_cell(&self) -> EngineResult<usize> {
        self.suggest_move(&mut RandomOpponent::from_os_rng())
    }

    /// Clears the board, both histories and the verdict. Scores are kept.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.player_one.clear_history();
        self.player_two.clear_history();
        self.winning_line = None;
        self.moves_played = 0;
        self.state = MatchState::awaiting(self.starting_seat());
        info!(
            score_one = self.player_one.score(),
            score_two = self.player_two.score(),
            "Match restarted"
        );
    }

    /// Verdict of the current match.
    pub fn current_result(&self) -> ResultSnapshot {
        ResultSnapshot::new(
            self.state == MatchState::PlayerOneWon,
            self.state == MatchState::PlayerTwoWon,
            self.state == MatchState::Draw,
            self.winning_line,
        )
    }

    /// Current phase.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// True once the match is won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.player_one,
            Seat::Two => &mut self.player_two,
        }
    }

    /// Wins recorded for `seat` this session.
    pub fn score(&self, seat: Seat) -> u32 {
        self.player(seat).score()
    }

    /// Seat holding X.
    pub fn starting_seat(&self) -> Seat {
        if self.player_one.marker() == Marker::X {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// Marker sitting on `cell`, if any.
    pub fn marker_at(&self, cell: usize) -> Option<Marker> {
        [Seat::One, Seat::Two]
            .into_iter()
            .map(|seat| self.player(seat))
            .find(|player| player.history().contains(&cell))
            .map(Player::marker)
    }

    /// Accepted moves this match.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Completed line, if a seat has won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    #[track_caller]
    fn validate_cell(cell: usize) -> EngineResult<()> {
        if cell >= CELL_COUNT {
            warn!(cell, "Move outside the board");
            return Err(EngineError::new(EngineErrorKind::InvalidCell(cell)));
        }
        Ok(())
    }

    fn reject(reason: RejectReason) -> MoveResult {
        debug!(%reason, "Move rejected");
        MoveResult::Rejected { reason }
    }

    fn apply_move(&mut self, seat: Seat, cell: usize) -> EngineResult<MoveResult> {
        if self.board.is_full() {
            return Ok(Self::reject(RejectReason::BoardFull));
        }
        if self.board.is_occupied(cell)? {
            return Ok(Self::reject(RejectReason::CellOccupied(cell)));
        }

        self.board.occupy(cell)?;
        self.player_mut(seat).record_move(cell);
        self.moves_played += 1;

        let win = rules::check_win(self.player(seat).history());
        let result = if let Some(line) = win {
            self.state = MatchState::won_by(seat);
            self.winning_line = Some(line);
            self.player_mut(seat).award_win();
            info!(%seat, %line, "Match won");
            MoveResult::Won { winner: seat, line }
        } else if rules::check_draw(&self.board, win.is_some()) {
            self.state = MatchState::Draw;
            info!("Match drawn");
            MoveResult::Draw
        } else {
            let next = seat.opponent();
            self.state = MatchState::awaiting(next);
            debug!(%seat, cell, moves = self.moves_played, "Move accepted");
            MoveResult::Advanced { turn_now_on: next }
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(result)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(violations) = MatchInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Match invariants violated");
        }
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new()
    }
}
