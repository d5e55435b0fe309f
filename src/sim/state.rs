//! Game state and core simulation types
//!
//! Everything the tick mutates lives in one flat `GameState` record.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Page loaded, no game started yet
    #[default]
    NotStarted,
    /// Active gameplay, frames are being scheduled
    Running,
    /// A side reached the winning score; loop is frozen
    Over,
}

impl GamePhase {
    /// Map the legacy `(is_game_over, is_new_game)` pair onto a phase.
    ///
    /// `(false, true)` was never produced by the old flag handling. A game that
    /// is not over is treated as running regardless of the "new" flag.
    pub fn from_flags(is_game_over: bool, is_new_game: bool) -> Self {
        match (is_game_over, is_new_game) {
            (true, true) => GamePhase::NotStarted,
            (true, false) => GamePhase::Over,
            (false, _) => GamePhase::Running,
        }
    }

    /// Inverse of [`GamePhase::from_flags`] as `(is_game_over, is_new_game)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            GamePhase::NotStarted => (true, true),
            GamePhase::Running => (false, false),
            GamePhase::Over => (true, false),
        }
    }
}

/// Which end of the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Bottom paddle, pointer controlled
    Player,
    /// Top paddle, AI controlled
    Opponent,
}

/// Display profile, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    Regular,
    /// Narrow viewport (phones)
    Compact,
}

impl Profile {
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            Profile::Compact
        } else {
            Profile::Regular
        }
    }

    /// Vertical (and initial horizontal) speed before the first reset
    pub fn start_speed_y(self) -> f32 {
        match self {
            Profile::Regular => START_SPEED_Y,
            Profile::Compact => START_SPEED_Y_COMPACT,
        }
    }

    /// Opponent step per tick before escalation
    pub fn opponent_speed(self) -> f32 {
        match self {
            Profile::Regular => OPPONENT_SPEED,
            Profile::Compact => OPPONENT_SPEED_COMPACT,
        }
    }
}

/// The ball
///
/// `vel.y` uses the inverted convention: position advances by `-vel.y`, so a
/// negative value moves the ball toward the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Set on player paddle contact, cleared on reset. Gates horizontal motion.
    pub contact: bool,
}

impl Ball {
    pub fn new(profile: Profile) -> Self {
        let speed = profile.start_speed_y();
        Self {
            pos: arena_center(),
            vel: Vec2::new(speed, speed),
            radius: BALL_RADIUS,
            contact: false,
        }
    }

    /// Serve position. Horizontal speed is kept; it stays gated until contact.
    pub fn reset(&mut self) {
        self.pos = arena_center();
        self.vel.y = BALL_RESET_SPEED_Y;
        self.contact = false;
    }
}

/// A paddle, positioned by its left edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { x: PADDLE_START_X }
    }
}

impl Paddle {
    pub fn center(&self) -> f32 {
        self.x + PADDLE_DIFF
    }

    /// Horizontal span test, exclusive at both edges
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + PADDLE_WIDTH
    }
}

/// Score pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub opponent: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Side that has reached `threshold`, player checked first
    pub fn winner(&self, threshold: u32) -> Option<Side> {
        if self.player == threshold {
            Some(Side::Player)
        } else if self.opponent == threshold {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    /// Bottom paddle
    pub player: Paddle,
    /// Top paddle
    pub opponent: Paddle,
    pub scores: Scores,
    /// Set by the first pointer move; enables the AI and horizontal ball motion
    pub player_moved: bool,
    /// Opponent step per tick
    pub opponent_speed: f32,
    pub profile: Profile,
    /// Recorded when the phase becomes `Over`
    pub winner: Option<Side>,
    /// Ticks since the last start
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state in the `NotStarted` phase
    pub fn new(profile: Profile) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            ball: Ball::new(profile),
            player: Paddle::default(),
            opponent: Paddle::default(),
            scores: Scores::default(),
            player_moved: false,
            opponent_speed: profile.opponent_speed(),
            profile,
            winner: None,
            time_ticks: 0,
        }
    }

    /// Reset every field to its initial value, serve, and enter `Running`
    pub fn start(&mut self) {
        *self = Self::new(self.profile);
        self.ball.reset();
        self.phase = GamePhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn escalated(&self) -> bool {
        self.opponent_speed == OPPONENT_SPEED_ESCALATED
    }
}

/// Exact arena center
pub fn arena_center() -> Vec2 {
    Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}
