//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every state
//! transition. The model checks them in debug builds; tests check them
//! directly.

use super::rules;
use super::state::GameState;
use super::types::{GameStatus, Player};
use derive_new::new;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose at the type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn mark_count(state: &GameState, player: Player) -> usize {
    state.board().occupied_by(player).count()
}

/// Invariant: the two players' mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        mark_count(state, Player::X).abs_diff(mark_count(state, Player::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: the recorded status is what the rules say about the board.
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameState> for StatusMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.status() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Status agrees with win/draw evaluation of the board"
    }
}

/// Invariant: while the game runs, the player to move never holds more marks
/// than the opponent.
pub struct MoverNotAheadInvariant;

impl Invariant<GameState> for MoverNotAheadInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status() != GameStatus::InProgress {
            return true;
        }
        let mover = state.current_player();
        mark_count(state, mover) <= mark_count(state, mover.opponent())
    }

    fn description() -> &'static str {
        "Player to move holds no more marks than the opponent"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    StatusMatchesBoardInvariant,
    MoverNotAheadInvariant,
);
