//! Wasm-side checks for the simulation surface the page drives every frame.
//! These avoid the DOM so they run under plain `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use rust_canvas_fluid_backend::field::{ParticleField, CONNECTION_DISTANCE, DEFAULT_PARTICLE_COUNT};
use rust_canvas_fluid_backend::orbit::PanelCarousel;

#[wasm_bindgen_test]
fn spawning_in_wasm_fills_the_pool() {
    let mut field = ParticleField::new(1920.0, 1080.0);
    field.spawn(DEFAULT_PARTICLE_COUNT);
    assert_eq!(field.particles().len(), 150);
    for p in field.particles() {
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 1920.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 1080.0);
        assert!(p.radius >= 1.0 && p.radius < 4.0);
        assert!(p.alpha >= 0.2 && p.alpha < 0.7);
    }
}

#[wasm_bindgen_test]
fn stepping_in_wasm_keeps_positions_bounded() {
    let mut field = ParticleField::new(1920.0, 1080.0);
    field.spawn(DEFAULT_PARTICLE_COUNT);
    for _ in 0..1_000 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.pos[0] >= 0.0 && p.pos[0] <= 1920.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] <= 1080.0);
    }
}

#[wasm_bindgen_test]
fn connections_stay_under_the_pair_budget() {
    let mut field = ParticleField::new(1920.0, 1080.0);
    field.spawn(DEFAULT_PARTICLE_COUNT);
    let max_pairs = 150 * 149 / 2;
    assert!(field.connections(CONNECTION_DISTANCE).len() <= max_pairs);
}

#[wasm_bindgen_test]
fn carousel_is_usable_from_wasm() {
    let mut carousel = PanelCarousel::new(4);
    carousel.set_auto_rotating(true);
    carousel.tick();
    assert_eq!(carousel.angle(), 0.5);
    let t = carousel.panel_transform(0);
    assert!(t.opacity > 0.5 && t.opacity <= 1.0);
}
