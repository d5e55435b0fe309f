//! Browser platform: DOM presenter, requestAnimationFrame loop, pointer input

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::{FrameRequest, GameLoop, Presenter};
use crate::consts::*;
use crate::renderer::{CanvasRenderer, Scene};
use crate::settings::Settings;
use crate::sim::{GamePhase, PointerMapper, Profile};

/// Canvas plus the game-over overlay, built once and reused across games
pub struct WebPresenter {
    body: HtmlElement,
    canvas: HtmlCanvasElement,
    renderer: CanvasRenderer,
    overlay: Element,
    title: Element,
    restart_button: Element,
    overlay_shown: bool,
}

impl WebPresenter {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);
        body.append_child(&canvas)?;
        let renderer = CanvasRenderer::new(&canvas)?;

        let overlay = document.create_element("div")?;
        overlay.set_class_name("game-over-container");
        let title = document.create_element("h1")?;
        let restart_button = document.create_element("button")?;
        restart_button.set_text_content(Some("Play Again"));
        overlay.append_child(&title)?;
        overlay.append_child(&restart_button)?;

        Ok(Self {
            body,
            canvas,
            renderer,
            overlay,
            title,
            restart_button,
            overlay_shown: false,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn restart_button(&self) -> &Element {
        &self.restart_button
    }

}

impl Presenter for WebPresenter {
    fn paint(&mut self, scene: &Scene) {
        if let Err(e) = self.renderer.draw(scene) {
            log::error!("Paint failed: {:?}", e);
        }
    }

    fn set_surface_visible(&mut self, visible: bool) {
        self.canvas.set_hidden(!visible);
    }

    fn show_game_over(&mut self, winner_label: &str) {
        self.title
            .set_text_content(Some(&format!("{winner_label} Wins!")));
        if self.overlay_shown {
            return;
        }
        match self.body.append_child(&self.overlay) {
            Ok(_) => self.overlay_shown = true,
            Err(e) => log::error!("Could not show game over overlay: {:?}", e),
        }
    }

    fn hide_game_over(&mut self) {
        if self.overlay_shown {
            self.overlay.remove();
            self.overlay_shown = false;
        }
    }

    fn hide_cursor(&mut self) {
        if let Err(e) = self.canvas.style().set_property("cursor", "none") {
            log::warn!("Could not hide cursor: {:?}", e);
        }
    }
}

/// Everything the browser callbacks share
struct App {
    game: GameLoop,
    presenter: WebPresenter,
}

/// Build the page, wire input, and start the first game
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let settings = Settings::load();
    // Write back so the stored copy carries every field
    settings.save();
    let profile = detect_profile(&window);

    let presenter = WebPresenter::new(&document)?;
    let mapper = PointerMapper::at(canvas_left(presenter.canvas()));
    log::info!("Canvas left edge at {}", mapper.canvas_left);
    let app = Rc::new(RefCell::new(App {
        game: GameLoop::new(settings, profile, mapper),
        presenter,
    }));

    setup_pointer_handler(&app)?;
    setup_restart_button(&app)?;

    start_game(app);
    Ok(())
}

fn detect_profile(window: &Window) -> Profile {
    let query = format!("(max-width: {COMPACT_MAX_WIDTH_PX}px)");
    match window.match_media(&query) {
        Ok(Some(list)) => Profile::from_compact(list.matches()),
        Ok(None) => Profile::Regular,
        Err(e) => {
            log::warn!("matchMedia failed, assuming regular display: {:?}", e);
            Profile::Regular
        }
    }
}

/// Viewport x of the canvas's left edge
fn canvas_left(canvas: &HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().left() as f32
}

fn setup_pointer_handler(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let canvas = app.borrow().presenter.canvas().clone();
    let app = app.clone();
    let target = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let mut a = app.borrow_mut();
        let App { game, presenter } = &mut *a;
        // Re-read each time: resizes and scrolling move the canvas
        game.set_canvas_left(canvas_left(&target));
        game.pointer_move(presenter, event.client_x() as f32);
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_restart_button(app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let button = app.borrow().presenter.restart_button().clone();
    let app = app.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        let phase = app.borrow().game.state().phase;
        if phase == GamePhase::Over {
            start_game(app.clone());
        } else {
            log::warn!("Restart ignored in phase {:?}", phase);
        }
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Start (or restart) and run the first frame right away
fn start_game(app: Rc<RefCell<App>>) {
    let request = {
        let mut a = app.borrow_mut();
        let App { game, presenter } = &mut *a;
        game.start(presenter)
    };
    if request == FrameRequest::Continue {
        game_loop(app);
    }
}

fn game_loop(app: Rc<RefCell<App>>) {
    let request = {
        let mut a = app.borrow_mut();
        let App { game, presenter } = &mut *a;
        game.frame(presenter)
    };

    match request {
        FrameRequest::Continue => request_animation_frame(app),
        FrameRequest::Stop => {
            let a = app.borrow();
            let state = a.game.state();
            log::info!(
                "Frame loop stopped: {} - {}, winner {:?}",
                state.scores.player,
                state.scores.opponent,
                a.game.winner_label()
            );
        }
    }
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, cannot schedule frame");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}
