//! Pointer input translation
//!
//! Pointer x arrives in viewport coordinates. The platform reports where the
//! canvas's left edge currently sits, so the mapping holds however the page is
//! laid out or resized.

use super::state::GameState;
use crate::consts::*;

/// Maps viewport pointer x onto player paddle x
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerMapper {
    /// Left edge of the canvas in viewport pixels
    pub canvas_left: f32,
}

impl PointerMapper {
    pub fn at(canvas_left: f32) -> Self {
        Self { canvas_left }
    }

    /// Paddle left edge that puts the paddle center under the pointer, clamped
    pub fn paddle_x(&self, client_x: f32) -> f32 {
        clamp_paddle_x(client_x - self.canvas_left - PADDLE_DIFF)
    }
}

/// Keep a player paddle x inside `[0, ARENA_WIDTH - PADDLE_WIDTH]`.
///
/// Anything left of `PADDLE_DIFF` snaps to the wall.
pub fn clamp_paddle_x(x: f32) -> f32 {
    let max = ARENA_WIDTH - PADDLE_WIDTH;
    if x.is_nan() || x < PADDLE_DIFF {
        0.0
    } else if x > max {
        max
    } else {
        x
    }
}

/// Apply a pointer move: position the player paddle and wake the opponent
pub fn apply_pointer(state: &mut GameState, mapper: &PointerMapper, client_x: f32) {
    state.player_moved = true;
    state.player.x = mapper.paddle_x(client_x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Profile;

    #[test]
    fn test_mapper_offsets_by_canvas_position() {
        let mapper = PointerMapper::at(500.0);
        // Pointer over arena x = 300 -> paddle centered there
        assert_eq!(mapper.paddle_x(800.0), 275.0);
    }

    #[test]
    fn test_mapping_follows_canvas_not_screen() {
        // 1920 px screen, 1000 px window: the centered arena starts at 250
        let mapper = PointerMapper::at(250.0);
        assert_eq!(mapper.paddle_x(500.0), 225.0);
        assert_eq!(mapper.paddle_x(250.0 + ARENA_WIDTH), ARENA_WIDTH - PADDLE_WIDTH);
        assert_eq!(mapper.paddle_x(250.0), 0.0);
    }

    #[test]
    fn test_default_mapper_is_canvas_relative() {
        assert_eq!(PointerMapper::default().paddle_x(100.0), 75.0);
    }

    #[test]
    fn test_clamp_edges() {
        assert_eq!(clamp_paddle_x(-100.0), 0.0);
        assert_eq!(clamp_paddle_x(10.0), 0.0);
        assert_eq!(clamp_paddle_x(25.0), 25.0);
        assert_eq!(clamp_paddle_x(449.0), 449.0);
        assert_eq!(clamp_paddle_x(9000.0), 450.0);
        assert_eq!(clamp_paddle_x(f32::NAN), 0.0);
    }

    #[test]
    fn test_apply_pointer_sets_moved_flag() {
        let mut state = GameState::new(Profile::Regular);
        state.start();
        assert!(!state.player_moved);

        apply_pointer(&mut state, &PointerMapper::default(), 100.0);

        assert!(state.player_moved);
        assert_eq!(state.player.x, 75.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn paddle_stays_in_arena(client_x in -1.0e6f32..1.0e6, left in -2000.0f32..4000.0) {
                let x = PointerMapper::at(left).paddle_x(client_x);
                prop_assert!((0.0..=ARENA_WIDTH - PADDLE_WIDTH).contains(&x));
            }
        }
    }
}
