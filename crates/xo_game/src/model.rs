//! The game model: rules enforcement, turn management and notifications.

use super::board::Board;
use super::events::{GameEvent, GameSubjects, Subject, SubscriptionId};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::state::GameState;
use super::types::{GameStatus, Mode, MoveNotice, MoveStatus, Player};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// A single game of tic-tac-toe.
///
/// The model owns the authoritative [`GameState`] and changes it only
/// through [`apply_move`](Self::apply_move) and [`reset`](Self::reset).
/// Every change is announced on three subjects:
///
/// - [`moves`](Self::moves): the placed position, or [`MoveNotice::Invalid`]
///   when an occupied cell was chosen
/// - [`game_complete`](Self::game_complete): the winner, `None` for a draw
/// - [`turn_changed`](Self::turn_changed): the player now to move
///
/// For each placed mark the move notice comes first, followed by exactly one
/// of game-complete or turn-changed.
///
/// In [`Mode::Single`] the engine plays O: whenever the turn passes to O it
/// picks a vacant cell uniformly at random using `R`.
///
/// `apply_move` takes `&mut self`; callers sharing a model across threads
/// must serialise access themselves.
pub struct GameModel<R = ChaCha8Rng> {
    mode: Mode,
    state: GameState,
    rng: R,
    subjects: GameSubjects,
}

impl GameModel<ChaCha8Rng> {
    /// Creates a new game seeded from OS entropy.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, ChaCha8Rng::from_entropy())
    }

    /// Creates a new game whose auto-moves are reproducible from `seed`.
    #[instrument]
    pub fn seeded(mode: Mode, seed: u64) -> Self {
        Self::with_rng(mode, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameModel<R> {
    /// Creates a new game drawing auto-moves from `rng`.
    pub fn with_rng(mode: Mode, rng: R) -> Self {
        debug!(%mode, "Creating game model");
        Self {
            mode,
            state: GameState::new(),
            rng,
            subjects: GameSubjects::new(),
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// - Returns [`MoveStatus::Rejected`] without any notification when the
    ///   game is already over.
    /// - Returns [`MoveStatus::Rejected`] after publishing
    ///   [`MoveNotice::Invalid`] when `pos` is occupied.
    /// - Returns [`MoveStatus::Terminal`] when the mark wins or fills the board.
    /// - Returns [`MoveStatus::Accepted`] otherwise, after the turn has passed
    ///   and, in single-player mode, after the engine's reply has been played.
    #[instrument(skip(self), fields(player = %self.state.current_player(), mode = %self.mode))]
    pub fn apply_move(&mut self, pos: Position) -> MoveStatus {
        if self.state.is_terminal() {
            debug!("Game already over, move ignored");
            return MoveStatus::Rejected;
        }

        if !self.state.place_current(pos) {
            debug!("Position occupied, move rejected");
            self.subjects.moves.publish(&MoveNotice::Invalid);
            return MoveStatus::Rejected;
        }
        debug!("Mark placed");
        self.subjects.moves.publish(&MoveNotice::Placed(pos));

        let status = rules::evaluate(self.state.board());
        if status.is_terminal() {
            let winner = status.winner();
            info!(?winner, "Game complete");
            self.state.set_status(status);
            self.check_invariants();
            self.subjects.game_complete.publish(&winner);
            return MoveStatus::Terminal;
        }

        let next = self.state.switch_player();
        self.check_invariants();
        self.subjects.turn_changed.publish(&next);

        if self.mode.auto_player() == Some(next) {
            self.play_auto_move();
        }

        MoveStatus::Accepted
    }

    /// Picks a vacant cell at random and plays it for the current player.
    fn play_auto_move(&mut self) {
        let vacant = self.state.board().vacant();
        let Some(&pos) = vacant.choose(&mut self.rng) else {
            return;
        };
        debug!(position = %pos, candidates = vacant.len(), "Auto-move chosen");
        let _ = self.apply_move(pos);
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&self.state)
        {
            panic!("Game invariants violated: {:?}", violations);
        }
    }

    /// Clears the board and any result.
    ///
    /// The mode and the player to move are kept, so after a win the winner
    /// opens the next game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(next = %self.state.current_player(), "Game reset");
        self.state.clear();
    }

    /// Checks whether `pos` is unoccupied.
    ///
    /// Only occupancy is consulted; a finished game still reports vacant
    /// cells as valid.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.state.board().is_vacant(pos)
    }

    /// Checks if `pos` holds `player`'s mark.
    pub fn is_occupied_by(&self, pos: Position, player: Player) -> bool {
        self.state.board().is_occupied_by(pos, player)
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }
}

impl<R> GameModel<R> {
    /// Returns the mode chosen at creation.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Turn-changed notifications: the player now to move.
    pub fn turn_changed(&mut self) -> &mut Subject<Player> {
        &mut self.subjects.turn_changed
    }

    /// Move notifications: the placed position or the invalid sentinel.
    pub fn moves(&mut self) -> &mut Subject<MoveNotice> {
        &mut self.subjects.moves
    }

    /// Game-complete notifications: the winner, `None` for a draw.
    pub fn game_complete(&mut self) -> &mut Subject<Option<Player>> {
        &mut self.subjects.game_complete
    }

    /// Forwards all three notification kinds into one channel.
    ///
    /// Returns the subscription ids in the order turn-changed, move,
    /// game-complete.
    pub fn forward_events(
        &mut self,
        sender: mpsc::UnboundedSender<GameEvent>,
    ) -> [SubscriptionId; 3] {
        [
            self.subjects
                .turn_changed
                .forward_with(sender.clone(), |player| GameEvent::TurnChanged(*player)),
            self.subjects
                .moves
                .forward_with(sender.clone(), |notice| GameEvent::Move(*notice)),
            self.subjects
                .game_complete
                .forward_with(sender, |winner| GameEvent::GameComplete(*winner)),
        ]
    }
}

impl<R> std::fmt::Debug for GameModel<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameModel")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("subjects", &self.subjects)
            .finish_non_exhaustive()
    }
}
