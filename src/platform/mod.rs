//! Platform abstraction layer
//!
//! The simulation never schedules frames or touches the page. `GameLoop` sits
//! between the two: it paints through a [`Presenter`], ticks the state, and
//! answers each frame with a [`FrameRequest`] that the platform honours.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::renderer::Scene;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, PointerMapper, Profile, TickOutcome, apply_pointer, tick};

/// Page-side collaborator: surface, overlay, paint
pub trait Presenter {
    /// Paint one frame
    fn paint(&mut self, scene: &Scene);
    /// Show or hide the drawing surface
    fn set_surface_visible(&mut self, visible: bool);
    /// Show the game-over overlay with the winner and a restart control
    fn show_game_over(&mut self, winner_label: &str);
    fn hide_game_over(&mut self);
    /// Hide the pointer over the drawing surface
    fn hide_cursor(&mut self);
}

/// What the platform should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another frame
    Continue,
    /// Stop scheduling; only a restart resumes the loop
    Stop,
}

/// Drives one match: start/restart, per-frame step, pointer input
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    settings: Settings,
    mapper: PointerMapper,
}

impl GameLoop {
    pub fn new(settings: Settings, profile: Profile, mapper: PointerMapper) -> Self {
        let profile = settings.resolve_profile(profile);
        log::info!("Display profile: {:?}", profile);
        Self {
            state: GameState::new(profile),
            settings,
            mapper,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Label of the recorded winner, if the match is over
    pub fn winner_label(&self) -> Option<&str> {
        self.state.winner.map(|side| self.settings.label(side))
    }

    /// Start or restart the match and paint the serve position
    pub fn start<P: Presenter>(&mut self, presenter: &mut P) -> FrameRequest {
        if self.state.phase == GamePhase::Over {
            presenter.hide_game_over();
            presenter.set_surface_visible(true);
            log::info!("Restarting");
        } else {
            log::info!("Starting new game");
        }

        self.state.start();
        presenter.paint(&self.scene());
        FrameRequest::Continue
    }

    /// One display refresh: paint the current state, then advance it.
    ///
    /// The painted frame is the state *before* this tick.
    pub fn frame<P: Presenter>(&mut self, presenter: &mut P) -> FrameRequest {
        if self.state.phase != GamePhase::Running {
            return FrameRequest::Stop;
        }

        presenter.paint(&self.scene());

        match tick(&mut self.state) {
            TickOutcome::Running(_) => FrameRequest::Continue,
            TickOutcome::Finished { winner } => {
                let label = self.settings.label(winner);
                presenter.set_surface_visible(false);
                presenter.show_game_over(label);
                FrameRequest::Stop
            }
            TickOutcome::Halted => FrameRequest::Stop,
        }
    }

    /// Canvas moved (layout or resize); `left` is its viewport x
    pub fn set_canvas_left(&mut self, left: f32) {
        self.mapper = PointerMapper::at(left);
    }

    /// Pointer moved to viewport x `client_x`
    pub fn pointer_move<P: Presenter>(&mut self, presenter: &mut P, client_x: f32) {
        apply_pointer(&mut self.state, &self.mapper, client_x);
        presenter.hide_cursor();
    }

    fn scene(&self) -> Scene {
        Scene::from_state(&self.state, &self.settings.colors)
    }
}

/// Presenter that records calls instead of drawing
#[derive(Debug, Clone)]
pub struct HeadlessPresenter {
    pub frames_painted: u64,
    pub last_scene: Option<Scene>,
    pub surface_visible: bool,
    /// Winner label while the overlay is shown
    pub overlay: Option<String>,
    pub cursor_hidden: bool,
}

impl Default for HeadlessPresenter {
    fn default() -> Self {
        Self {
            frames_painted: 0,
            last_scene: None,
            surface_visible: true,
            overlay: None,
            cursor_hidden: false,
        }
    }
}

impl Presenter for HeadlessPresenter {
    fn paint(&mut self, scene: &Scene) {
        self.frames_painted += 1;
        self.last_scene = Some(scene.clone());
    }

    fn set_surface_visible(&mut self, visible: bool) {
        self.surface_visible = visible;
    }

    fn show_game_over(&mut self, winner_label: &str) {
        self.overlay = Some(format!("{winner_label} Wins!"));
    }

    fn hide_game_over(&mut self) {
        self.overlay = None;
    }

    fn hide_cursor(&mut self) {
        self.cursor_hidden = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::DrawCmd;
    use crate::sim::{Side, arena_center};
    use glam::Vec2;

    fn new_loop() -> GameLoop {
        GameLoop::new(
            Settings::default(),
            Profile::Regular,
            PointerMapper::default(),
        )
    }

    /// Park the player paddle away from the serve column so every serve is missed
    fn start_unattended(game: &mut GameLoop, presenter: &mut HeadlessPresenter) {
        assert_eq!(game.start(presenter), FrameRequest::Continue);
        game.state.player.x = 0.0;
    }

    fn run_until_stop(game: &mut GameLoop, presenter: &mut HeadlessPresenter) -> u64 {
        let mut frames = 0;
        while game.frame(presenter) == FrameRequest::Continue {
            frames += 1;
            assert!(frames < 100_000, "loop never stopped");
        }
        frames
    }

    #[test]
    fn test_frame_before_start_stops() {
        let mut game = new_loop();
        let mut presenter = HeadlessPresenter::default();

        assert_eq!(game.frame(&mut presenter), FrameRequest::Stop);
        assert_eq!(presenter.frames_painted, 0);
    }

    #[test]
    fn test_painted_frame_lags_one_tick() {
        let mut game = new_loop();
        let mut presenter = HeadlessPresenter::default();
        game.start(&mut presenter);

        game.frame(&mut presenter);

        let Some(scene) = presenter.last_scene.as_ref() else {
            panic!("nothing painted");
        };
        let DrawCmd::FillCircle { center, .. } = &scene.commands[4] else {
            panic!("ball command missing");
        };
        assert_eq!(*center, arena_center());
        assert_eq!(game.state().ball.pos, Vec2::new(250.0, 353.0));
    }

    #[test]
    fn test_opponent_win_shows_overlay_and_stops() {
        let mut game = new_loop();
        let mut presenter = HeadlessPresenter::default();
        start_unattended(&mut game, &mut presenter);

        run_until_stop(&mut game, &mut presenter);

        assert_eq!(game.state().phase, GamePhase::Over);
        assert_eq!(game.state().winner, Some(Side::Opponent));
        assert_eq!(game.winner_label(), Some("Computer"));
        assert_eq!(presenter.overlay.as_deref(), Some("Computer Wins!"));
        assert!(!presenter.surface_visible);

        let painted = presenter.frames_painted;
        assert_eq!(game.frame(&mut presenter), FrameRequest::Stop);
        assert_eq!(presenter.frames_painted, painted);
    }

    #[test]
    fn test_player_win_uses_player_label() {
        let mut settings = Settings::default();
        settings.player_label = "Ana".to_string();
        let mut game = GameLoop::new(settings, Profile::Regular, PointerMapper::default());
        let mut presenter = HeadlessPresenter::default();
        game.start(&mut presenter);

        game.state.scores.player = WINNING_SCORE - 1;
        game.state.opponent.x = 0.0;
        game.state.ball.pos = Vec2::new(400.0, 1.0);
        game.state.ball.vel = Vec2::new(0.0, 3.0);

        assert_eq!(game.frame(&mut presenter), FrameRequest::Stop);
        assert_eq!(game.winner_label(), Some("Ana"));
        assert_eq!(presenter.overlay.as_deref(), Some("Ana Wins!"));
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = new_loop();
        let mut presenter = HeadlessPresenter::default();
        start_unattended(&mut game, &mut presenter);
        run_until_stop(&mut game, &mut presenter);
        assert_eq!(game.state().phase, GamePhase::Over);

        assert_eq!(game.start(&mut presenter), FrameRequest::Continue);

        let state = game.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.scores.player, 0);
        assert_eq!(state.scores.opponent, 0);
        assert_eq!(state.ball.pos, arena_center());
        assert_eq!(state.winner, None);
        assert!(presenter.surface_visible);
        assert_eq!(presenter.overlay, None);
        assert_eq!(game.frame(&mut presenter), FrameRequest::Continue);
    }

    #[test]
    fn test_pointer_move_wakes_opponent() {
        let mut game = new_loop();
        let mut presenter = HeadlessPresenter::default();
        game.start(&mut presenter);

        assert!(!presenter.cursor_hidden);
        game.pointer_move(&mut presenter, 480.0);
        assert!(presenter.cursor_hidden);
        assert!(game.state().player_moved);
        assert_eq!(game.state().player.x, 450.0);

        // Ball at x = 250, opponent center 250: steps left
        game.frame(&mut presenter);
        assert_eq!(game.state().opponent.x, PADDLE_START_X - OPPONENT_SPEED);
    }

    #[test]
    fn test_pointer_tracks_canvas_left_edge() {
        let mut game = new_loop();
        let mut presenter = HeadlessPresenter::default();
        game.start(&mut presenter);

        game.set_canvas_left(250.0);
        game.pointer_move(&mut presenter, 500.0);
        assert_eq!(game.state().player.x, 225.0);

        // Window resized, canvas re-centered further left
        game.set_canvas_left(100.0);
        game.pointer_move(&mut presenter, 500.0);
        assert_eq!(game.state().player.x, 375.0);
    }

    #[test]
    fn test_settings_profile_override_wins() {
        let mut settings = Settings::default();
        settings.profile_override = Some(Profile::Compact);
        let game = GameLoop::new(settings, Profile::Regular, PointerMapper::default());

        assert_eq!(game.state().profile, Profile::Compact);
        assert_eq!(game.state().opponent_speed, OPPONENT_SPEED_COMPACT);
    }
}
