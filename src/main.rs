//! Canvas Pong entry point
//!
//! On the web this builds the page and starts the frame loop. Natively it
//! plays one headless match with a scripted pointer and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Canvas Pong starting...");

    if let Err(e) = canvas_pong::platform::web::run() {
        log::error!("Canvas Pong failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::Settings;
    use canvas_pong::consts::*;
    use canvas_pong::platform::{FrameRequest, GameLoop, HeadlessPresenter};
    use canvas_pong::sim::{PointerMapper, Profile};

    /// Roughly ten minutes at 60 Hz
    const MAX_FRAMES: u64 = 36_000;
    /// How far the scripted pointer moves per frame
    const POINTER_STEP: f32 = 4.0;
    /// Aim off-center so returns come back at an angle
    const AIM_OFFSET: f32 = 12.0;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Canvas Pong (native) starting headless match...");

    let mut game = GameLoop::new(
        Settings::load(),
        Profile::Regular,
        PointerMapper::default(),
    );
    let mut presenter = HeadlessPresenter::default();
    game.start(&mut presenter);

    let mut pointer_x = ARENA_WIDTH / 2.0;
    let mut frames = 0;
    while frames < MAX_FRAMES {
        let target = game.state().ball.pos.x + AIM_OFFSET;
        pointer_x += (target - pointer_x).clamp(-POINTER_STEP, POINTER_STEP);
        game.pointer_move(&mut presenter, pointer_x);

        frames += 1;
        if game.frame(&mut presenter) == FrameRequest::Stop {
            break;
        }
    }

    let scores = game.state().scores;
    match game.winner_label() {
        Some(label) => println!(
            "{label} Wins! ({} - {}) after {frames} frames",
            scores.player, scores.opponent
        ),
        None => println!(
            "No winner after {frames} frames ({} - {})",
            scores.player, scores.opponent
        ),
    }
}
