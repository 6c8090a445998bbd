// Pseudo-3d carousel math for the page's rotating info panels. The page owns
// the DOM; this only computes, per panel, the translate/rotate/opacity values
// it applies as CSS transforms.

use wasm_bindgen::prelude::*;

const PANEL_RADIUS: f64 = 400.0;
const AUTO_ROTATION_SPEED: f64 = 0.5; // degrees per frame

#[wasm_bindgen]
#[derive(Copy, Clone, Debug)]
pub struct PanelTransform {
    pub x: f64,
    pub z: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub layer: i32,
}

#[wasm_bindgen]
pub struct PanelCarousel {
    angle: f64,
    panel_count: u32,
    auto_rotating: bool,
}

#[wasm_bindgen]
impl PanelCarousel {
    #[wasm_bindgen(constructor)]
    pub fn new(panel_count: u32) -> PanelCarousel {
        PanelCarousel {
            angle: 0.0,
            panel_count,
            auto_rotating: false,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotating
    }

    pub fn set_auto_rotating(&mut self, auto_rotating: bool) {
        self.auto_rotating = auto_rotating;
    }

    // Manual rotation snaps a quarter turn and takes over from auto mode
    pub fn rotate_left(&mut self) {
        self.auto_rotating = false;
        self.angle += 90.0;
    }

    pub fn rotate_right(&mut self) {
        self.auto_rotating = false;
        self.angle -= 90.0;
    }

    // One animation frame of auto rotation; a no-op while paused
    pub fn tick(&mut self) {
        if self.auto_rotating {
            self.angle += AUTO_ROTATION_SPEED;
        }
    }

    // Panels sit evenly spaced on a ring of radius 400 around the viewer.
    // Depth runs 0 (back of the ring) to 1 (front) and drives both the
    // opacity fade and the stacking order.
    pub fn panel_transform(&self, index: u32) -> PanelTransform {
        let spacing = 360.0 / self.panel_count as f64;
        let panel_angle = self.angle + index as f64 * spacing;
        let radians = panel_angle.to_radians();

        let x = radians.sin() * PANEL_RADIUS;
        let z = radians.cos() * PANEL_RADIUS;
        let depth = (z + PANEL_RADIUS) / (2.0 * PANEL_RADIUS);

        PanelTransform {
            x,
            z,
            rotation_deg: -panel_angle,
            opacity: 0.5 + depth * 0.5,
            layer: (depth * 10.0).floor() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_panel_faces_the_viewer() {
        let carousel = PanelCarousel::new(4);
        let t = carousel.panel_transform(0);
        assert!(t.x.abs() < 1e-9);
        assert!((t.z - 400.0).abs() < 1e-9);
        assert!((t.opacity - 1.0).abs() < 1e-9);
        assert_eq!(t.layer, 10);
        assert_eq!(t.rotation_deg, 0.0);
    }

    #[test]
    fn back_panel_is_half_faded() {
        let carousel = PanelCarousel::new(4);
        let t = carousel.panel_transform(2);
        assert!((t.z + 400.0).abs() < 1e-9);
        assert!((t.opacity - 0.5).abs() < 1e-9);
        assert_eq!(t.layer, 0);
    }

    #[test]
    fn four_panels_sit_a_quarter_turn_apart() {
        let carousel = PanelCarousel::new(4);
        let right = carousel.panel_transform(1);
        assert!((right.x - 400.0).abs() < 1e-9);
        assert!(right.z.abs() < 1e-9);
        assert_eq!(right.rotation_deg, -90.0);
    }

    #[test]
    fn manual_rotation_stops_auto_mode() {
        let mut carousel = PanelCarousel::new(4);
        carousel.set_auto_rotating(true);
        carousel.rotate_left();
        assert!(!carousel.is_auto_rotating());
        assert_eq!(carousel.angle(), 90.0);

        carousel.rotate_right();
        carousel.rotate_right();
        assert_eq!(carousel.angle(), -90.0);
    }

    #[test]
    fn tick_only_advances_while_auto_rotating() {
        let mut carousel = PanelCarousel::new(4);
        carousel.tick();
        assert_eq!(carousel.angle(), 0.0);

        carousel.set_auto_rotating(true);
        for _ in 0..4 {
            carousel.tick();
        }
        assert_eq!(carousel.angle(), 2.0);
    }

    #[test]
    fn rotating_a_full_turn_restores_every_panel() {
        let mut carousel = PanelCarousel::new(4);
        let before = carousel.panel_transform(3);
        for _ in 0..4 {
            carousel.rotate_left();
        }
        let after = carousel.panel_transform(3);
        assert!((before.x - after.x).abs() < 1e-6);
        assert!((before.z - after.z).abs() < 1e-6);
        assert!((before.opacity - after.opacity).abs() < 1e-9);
    }
}
