//! Collision resolution: side walls, paddle zones, scoring
//!
//! The checks run in a fixed order with no early exit, so a ball past a side
//! wall and inside a paddle zone is handled by both in the same tick.

use super::state::{GameState, Side};
use crate::consts::*;

/// What happened during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Ball bounced off the left or right wall
    pub wall: bool,
    /// Ball was returned by the player paddle
    pub player_hit: bool,
    /// Ball was returned by the opponent paddle
    pub opponent_hit: bool,
    /// Side that scored (ball was reset)
    pub point: Option<Side>,
    /// Player-side speed cap was hit and the opponent sped up
    pub escalated: bool,
}

/// Run every boundary check against the current state
pub fn resolve(state: &mut GameState) -> CollisionResult {
    let mut result = CollisionResult {
        wall: bounce_side_walls(state),
        ..Default::default()
    };

    resolve_bottom(state, &mut result);
    resolve_top(state, &mut result);

    result
}

/// Negate horizontal speed when the ball is past a side wall and still moving
/// outward. Position is left as-is.
pub fn bounce_side_walls(state: &mut GameState) -> bool {
    let ball = &mut state.ball;
    let mut bounced = false;
    if ball.pos.x < 0.0 && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    if ball.pos.x > ARENA_WIDTH && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
        bounced = true;
    }
    bounced
}

fn resolve_bottom(state: &mut GameState, result: &mut CollisionResult) {
    if state.ball.pos.y <= ARENA_HEIGHT - PADDLE_DIFF {
        return;
    }

    if state.player.spans(state.ball.pos.x) {
        let ball = &mut state.ball;
        ball.contact = true;
        if state.player_moved {
            ball.vel.y -= 1.0;
            if ball.vel.y < -BALL_MAX_SPEED_Y {
                ball.vel.y = -BALL_MAX_SPEED_Y;
                if state.opponent_speed != OPPONENT_SPEED_ESCALATED {
                    log::info!("Speed cap reached, opponent speed -> {OPPONENT_SPEED_ESCALATED}");
                    result.escalated = true;
                }
                state.opponent_speed = OPPONENT_SPEED_ESCALATED;
            }
        }
        ball.vel.y = -ball.vel.y;
        let trajectory = ball.pos.x - state.player.center();
        ball.vel.x = trajectory * TRAJECTORY_FACTOR;
        result.player_hit = true;
        log::debug!("Player return: vel=({:.2}, {:.2})", ball.vel.x, ball.vel.y);
    } else if state.ball.pos.y > ARENA_HEIGHT {
        state.ball.reset();
        state.scores.award(Side::Opponent);
        result.point = Some(Side::Opponent);
    }
}

// Contact here leaves the rally flag and horizontal speed untouched.
fn resolve_top(state: &mut GameState, result: &mut CollisionResult) {
    if state.ball.pos.y >= PADDLE_DIFF {
        return;
    }

    if state.opponent.spans(state.ball.pos.x) {
        let ball = &mut state.ball;
        if state.player_moved {
            ball.vel.y += 1.0;
            if ball.vel.y > BALL_MAX_SPEED_Y {
                ball.vel.y = BALL_MAX_SPEED_Y;
            }
        }
        ball.vel.y = -ball.vel.y;
        result.opponent_hit = true;
        log::debug!("Opponent return: vel=({:.2}, {:.2})", ball.vel.x, ball.vel.y);
    } else if state.ball.pos.y < 0.0 {
        state.ball.reset();
        state.scores.award(Side::Player);
        result.point = Some(Side::Player);
    }
}
