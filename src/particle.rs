// Simple particle struct to keep track of individual position, velocity,
// size, and color. Particles are spawned once with randomized attributes and
// then only mutated in place; there is no per-particle lifetime.

use rand::Rng;

use crate::color::{Color, PALETTE};

pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
    pub alpha: f64,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, color: Color, alpha: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
            alpha,
        }
    }

    // Attributes match the page's fluid background: slow drift in either
    // direction, small dots, semi-transparent palette colors
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5];
        let radius = rng.gen::<f64>() * 3.0 + 1.0;
        let color = Color::from_u32(PALETTE[rng.gen_range(0, PALETTE.len())]);
        let alpha = rng.gen::<f64>() * 0.5 + 0.2;

        Particle::new(pos, vel, radius, color, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_attributes_stay_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0] >= -0.5 && p.vel[0] < 0.5);
            assert!(p.vel[1] >= -0.5 && p.vel[1] < 0.5);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.alpha >= 0.2 && p.alpha < 0.7);
            assert!(PALETTE
                .iter()
                .any(|&num| Color::from_u32(num) == p.color));
        }
    }
}
