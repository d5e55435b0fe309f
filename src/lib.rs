//! Canvas Pong - A single-screen two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Simulation (ball motion, collisions, scoring, opponent, phase)
//! - `renderer`: State to draw-command translation and the 2D canvas backend
//! - `platform`: Presenter/scheduler boundary and the browser implementation
//! - `settings`: Labels, colours and display profile override

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Palette, Settings};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 700.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Half paddle width; also the depth of the top/bottom reaction zones
    pub const PADDLE_DIFF: f32 = 25.0;
    /// Paddle start position (left edge)
    pub const PADDLE_START_X: f32 = 225.0;
    /// Drawn y of the player paddle (bottom)
    pub const PLAYER_PADDLE_Y: f32 = ARENA_HEIGHT - 20.0;
    /// Drawn y of the opponent paddle (top)
    pub const OPPONENT_PADDLE_Y: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Vertical speed after a reset (negative = moving down)
    pub const BALL_RESET_SPEED_Y: f32 = -3.0;
    /// Cap on vertical speed magnitude after paddle contact
    pub const BALL_MAX_SPEED_Y: f32 = 5.0;
    /// Horizontal speed per pixel of hit offset from paddle center
    pub const TRAJECTORY_FACTOR: f32 = 0.3;

    /// Opponent step per tick
    pub const OPPONENT_SPEED: f32 = 3.0;
    pub const OPPONENT_SPEED_COMPACT: f32 = 4.0;
    /// Opponent step after the player-side speed cap is reached
    pub const OPPONENT_SPEED_ESCALATED: f32 = 6.0;

    /// Initial vertical speed per display profile
    pub const START_SPEED_Y: f32 = -1.0;
    pub const START_SPEED_Y_COMPACT: f32 = -2.0;

    /// Points needed to win
    pub const WINNING_SCORE: u32 = 5;

    /// Viewport width at or below which the compact profile applies
    pub const COMPACT_MAX_WIDTH_PX: u32 = 600;
}
