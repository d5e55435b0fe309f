//! 2D canvas backend
//!
//! Executes a `Scene` on a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, Scene};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint every command in order
    pub fn draw(&self, scene: &Scene) -> Result<(), JsValue> {
        for cmd in &scene.commands {
            self.draw_cmd(cmd)?;
        }
        Ok(())
    }

    fn draw_cmd(&self, cmd: &DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::FillRect { pos, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            DrawCmd::DashedLine {
                from,
                to,
                dash,
                color,
            } => {
                ctx.begin_path();
                let pattern = js_sys::Array::of1(&JsValue::from_f64(*dash as f64));
                ctx.set_line_dash(&pattern)?;
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
            DrawCmd::Text {
                text,
                pos,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}
