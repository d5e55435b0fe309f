//! Opponent paddle controller

use super::state::GameState;

/// Step the opponent paddle one `opponent_speed` toward the ball.
///
/// Idle until the player has moved. A ball exactly at the paddle center counts
/// as "left", so the paddle jitters around it. The paddle is not clamped to the
/// arena.
pub fn step_opponent(state: &mut GameState) {
    if !state.player_moved {
        return;
    }

    if state.opponent.center() < state.ball.pos.x {
        state.opponent.x += state.opponent_speed;
    } else {
        state.opponent.x -= state.opponent_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Profile;

    #[test]
    fn test_opponent_waits_for_player() {
        let mut state = GameState::new(Profile::Regular);
        state.start();
        state.ball.pos.x = 480.0;

        step_opponent(&mut state);

        assert_eq!(state.opponent.x, PADDLE_START_X);
    }

    #[test]
    fn test_opponent_tracks_ball() {
        let mut state = GameState::new(Profile::Regular);
        state.start();
        state.player_moved = true;

        state.ball.pos.x = 480.0;
        step_opponent(&mut state);
        assert_eq!(state.opponent.x, PADDLE_START_X + OPPONENT_SPEED);

        state.ball.pos.x = 10.0;
        step_opponent(&mut state);
        step_opponent(&mut state);
        assert_eq!(state.opponent.x, PADDLE_START_X - OPPONENT_SPEED);
    }

    #[test]
    fn test_centered_ball_moves_paddle_left() {
        let mut state = GameState::new(Profile::Compact);
        state.start();
        state.player_moved = true;
        state.ball.pos.x = state.opponent.center();

        step_opponent(&mut state);

        assert_eq!(state.opponent.x, PADDLE_START_X - OPPONENT_SPEED_COMPACT);
    }

    #[test]
    fn test_opponent_is_not_clamped() {
        let mut state = GameState::new(Profile::Regular);
        state.start();
        state.player_moved = true;
        state.opponent_speed = OPPONENT_SPEED_ESCALATED;
        state.opponent.x = 2.0;
        state.ball.pos.x = -50.0;

        step_opponent(&mut state);

        assert_eq!(state.opponent.x, -4.0);
    }
}
