//! Draw-command generation
//!
//! Turns a `GameState` into an ordered list of 2D canvas primitives. Building
//! the list never touches the state, so the output can be checked without a
//! browser.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Palette;
use crate::sim::GameState;

/// Score font (CSS shorthand)
pub const SCORE_FONT: &str = "32px Courier New";
/// Dash length for the center divider
pub const DIVIDER_DASH: f32 = 4.0;
/// Score text anchors, relative to the arena's vertical middle
pub const SCORE_X: f32 = 20.0;
pub const PLAYER_SCORE_OFFSET_Y: f32 = 50.0;
pub const OPPONENT_SCORE_OFFSET_Y: f32 = -30.0;

/// A single 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: f32,
        color: String,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: String,
    },
}

/// One frame's worth of draw commands, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    /// Background, paddles, divider, ball, scores
    pub fn from_state(state: &GameState, colors: &Palette) -> Self {
        let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let mid_y = ARENA_HEIGHT / 2.0;

        let commands = vec![
            DrawCmd::FillRect {
                pos: Vec2::ZERO,
                size: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
                color: colors.background.clone(),
            },
            DrawCmd::FillRect {
                pos: Vec2::new(state.player.x, PLAYER_PADDLE_Y),
                size: paddle_size,
                color: colors.paddle.clone(),
            },
            DrawCmd::FillRect {
                pos: Vec2::new(state.opponent.x, OPPONENT_PADDLE_Y),
                size: paddle_size,
                color: colors.paddle.clone(),
            },
            DrawCmd::DashedLine {
                from: Vec2::new(0.0, mid_y),
                to: Vec2::new(ARENA_WIDTH, mid_y),
                dash: DIVIDER_DASH,
                color: colors.divider.clone(),
            },
            DrawCmd::FillCircle {
                center: state.ball.pos,
                radius: state.ball.radius,
                color: colors.ball.clone(),
            },
            DrawCmd::Text {
                text: state.scores.player.to_string(),
                pos: Vec2::new(SCORE_X, mid_y + PLAYER_SCORE_OFFSET_Y),
                font: SCORE_FONT,
                color: colors.score.clone(),
            },
            DrawCmd::Text {
                text: state.scores.opponent.to_string(),
                pos: Vec2::new(SCORE_X, mid_y + OPPONENT_SCORE_OFFSET_Y),
                font: SCORE_FONT,
                color: colors.score.clone(),
            },
        ];

        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
