//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per display refresh, no wall-clock time
//! - No rendering, scheduling or platform dependencies
//! - State is a single owned record passed `&mut` to each step

pub mod ai;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use ai::step_opponent;
pub use collision::{CollisionResult, bounce_side_walls, resolve};
pub use input::{PointerMapper, apply_pointer, clamp_paddle_x};
pub use state::{Ball, GamePhase, GameState, Paddle, Profile, Scores, Side, arena_center};
pub use tick::{TickOutcome, check_game_over, integrate, tick};
