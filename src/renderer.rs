// Renderer struct that handles the 2d canvas calls: clearing the surface,
// drawing each particle as a filled circle, and stroking the proximity
// connection lines between nearby particles.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

use crate::color::{Color, CONNECTION_COLOR};
use crate::field::{ParticleField, CONNECTION_DISTANCE};

pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2d context from the host page's background canvas
    pub fn new(canvas: &web_sys::HtmlCanvasElement) -> Result<CanvasRenderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasRenderer { context })
    }

    pub fn render(&self, field: &ParticleField) -> Result<(), JsValue> {
        // A collapsed viewport draws nothing rather than erroring out of the
        // animation loop
        if field.width() <= 0.0 || field.height() <= 0.0 {
            return Ok(());
        }

        self.context
            .clear_rect(0.0, 0.0, field.width(), field.height());

        for p in field.particles() {
            self.context.begin_path();
            self.context.arc(p.pos[0], p.pos[1], p.radius, 0.0, PI * 2.0)?;
            self.context
                .set_fill_style(&JsValue::from_str(&p.color.to_css()));
            self.context.set_global_alpha(p.alpha);
            self.context.fill();
        }

        self.draw_connections(field);

        // leave the context the way the page expects it
        self.context.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_connections(&self, field: &ParticleField) {
        let stroke = Color::from_u32(CONNECTION_COLOR).to_css();
        self.context.set_stroke_style(&JsValue::from_str(&stroke));
        self.context.set_line_width(1.0);

        for connection in field.connections(CONNECTION_DISTANCE) {
            self.context.begin_path();
            self.context.set_global_alpha(connection.alpha);
            self.context.move_to(connection.from[0], connection.from[1]);
            self.context.line_to(connection.to[0], connection.to[1]);
            self.context.stroke();
        }
    }
}
