// Wasm backend for the portfolio page's animated background. The page hands
// over its background canvas once; everything that used to live in
// module-level script globals (particle array, animation flag, cached DOM
// nodes) lives inside an explicit FluidRenderer instance instead.

pub mod color;
pub mod field;
pub mod orbit;
pub mod particle;
pub mod renderer;
mod utils;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

use crate::field::{ParticleField, DEFAULT_PARTICLE_COUNT};
use crate::renderer::CanvasRenderer;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    console::log_1(&"fluid background backend initialized".into());
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[wasm_bindgen]
pub struct FluidRenderer {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    renderer: Rc<CanvasRenderer>,
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame: FrameClosure,
}

#[wasm_bindgen]
impl FluidRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<FluidRenderer, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let renderer = CanvasRenderer::new(&canvas)?;
        let field = ParticleField::new(width as f64, height as f64);

        Ok(FluidRenderer {
            canvas,
            field: Rc::new(RefCell::new(field)),
            renderer: Rc::new(renderer),
            running: Rc::new(Cell::new(false)),
            raf_id: Rc::new(Cell::new(None)),
            frame: Rc::new(RefCell::new(None)),
        })
    }

    // The pool is filled once at startup and never reallocated, not even on
    // resize; the page passes DEFAULT_PARTICLE_COUNT
    pub fn initialize_particles(&mut self, num_particles: u32) {
        self.field.borrow_mut().spawn(num_particles);
    }

    pub fn default_particle_count() -> u32 {
        DEFAULT_PARTICLE_COUNT
    }

    // Tracks the window size: updates the canvas backing store and the wrap
    // bounds. Particles are left where they are and wrap against the new
    // bounds on their next step.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field
            .borrow_mut()
            .set_bounds(width as f64, height as f64);
    }

    // Begins the per-frame loop. Each callback steps the simulation, draws
    // the frame, and schedules itself again, like the page's old
    // requestAnimationFrame(animate) self-call but with an explicit off
    // switch. Calling start while already running is a no-op.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);

        let running = Rc::clone(&self.running);
        let raf_id = Rc::clone(&self.raf_id);
        let field = Rc::clone(&self.field);
        let renderer = Rc::clone(&self.renderer);
        let frame = Rc::clone(&self.frame);

        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // disarmed by stop(); a callback that still fires must not draw
            if !running.get() {
                return;
            }
            {
                let _timer = Timer::new("FluidRenderer::frame");
                let mut field = field.borrow_mut();
                field.step();
                if let Err(err) = renderer.render(&field) {
                    console::error_1(&err);
                }
            }
            match request_frame(&frame) {
                Ok(id) => raf_id.set(Some(id)),
                Err(err) => {
                    running.set(false);
                    console::error_1(&err);
                }
            }
        }) as Box<dyn FnMut()>));

        match request_frame(&self.frame) {
            Ok(id) => {
                self.raf_id.set(Some(id));
                Ok(())
            }
            Err(err) => {
                self.running.set(false);
                self.frame.borrow_mut().take();
                Err(err)
            }
        }
    }

    // Cancels the pending frame and drops the callback so nothing stays
    // registered with the browser. Safe to call repeatedly or when the loop
    // was never started.
    pub fn stop(&mut self) {
        if !self.running.get() {
            return;
        }
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.frame.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }
}

fn request_frame(frame: &FrameClosure) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let frame = frame.borrow();
    let callback = frame
        .as_ref()
        .ok_or_else(|| JsValue::from_str("render loop has no frame callback"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
