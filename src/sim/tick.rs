//! Per-frame simulation tick
//!
//! One call per display refresh; no delta time.

use super::ai::step_opponent;
use super::collision::{CollisionResult, resolve};
use super::state::{GamePhase, GameState, Side};
use crate::consts::*;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Game still in progress
    Running(CollisionResult),
    /// This tick ended the match
    Finished { winner: Side },
    /// Phase was not `Running`; nothing was advanced
    Halted,
}

impl TickOutcome {
    /// Whether another frame should follow this one
    pub fn wants_next_frame(&self) -> bool {
        matches!(self, TickOutcome::Running(_))
    }
}

/// Advance the ball by its velocity.
///
/// Vertical motion is unconditional. Horizontal motion waits for the player's
/// first move and a paddle contact in the current rally.
pub fn integrate(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos.y += -ball.vel.y;
    if state.player_moved && ball.contact {
        ball.pos.x += ball.vel.x;
    }
}

/// Move to `Over` when either score reaches the threshold
pub fn check_game_over(state: &mut GameState) -> Option<Side> {
    let winner = state.scores.winner(WINNING_SCORE)?;
    state.phase = GamePhase::Over;
    state.winner = Some(winner);
    Some(winner)
}

/// Advance the game by one frame: integrate, resolve, opponent, game-over
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Halted;
    }

    state.time_ticks += 1;

    integrate(state);
    let collisions = resolve(state);
    if let Some(side) = collisions.point {
        log::info!(
            "{:?} scores ({} - {})",
            side,
            state.scores.player,
            state.scores.opponent
        );
    }
    step_opponent(state);

    match check_game_over(state) {
        Some(winner) => {
            log::info!(
                "Game over after {} ticks, {:?} wins",
                state.time_ticks,
                winner
            );
            TickOutcome::Finished { winner }
        }
        None => TickOutcome::Running(collisions),
    }
}
