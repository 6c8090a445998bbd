// The particle field simulation: a fixed pool of drifting particles wrapped
// at the viewport edges, plus the all-pairs proximity connection pass. Keeps
// no web-sys types so the whole thing runs under plain cargo test.

use crate::particle::Particle;

pub const DEFAULT_PARTICLE_COUNT: u32 = 150;
pub const CONNECTION_DISTANCE: f64 = 150.0;

// A line between two nearby particles, faded with distance. Indices are kept
// alongside the endpoints so callers can tell which pair produced the line.
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub alpha: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            particles: Vec::new(),
        }
    }

    pub fn spawn(&mut self, count: u32) {
        self.particles.reserve(count as usize);
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            self.particles
                .push(Particle::random(&mut rng, self.width, self.height));
        }
    }

    // Resize only moves the wrap bounds. Particles already outside the new
    // bounds keep their trajectory and wrap on their next step, same as the
    // page behaved when the window shrank mid-animation.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // One animation frame of movement. Overflowing either edge teleports the
    // particle to the opposite one; velocity is never reflected, so the drift
    // direction of every particle is constant for the whole session.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos[0] += p.vel[0];
            p.pos[1] += p.vel[1];

            if p.pos[0] > self.width {
                p.pos[0] = 0.0;
            } else if p.pos[0] < 0.0 {
                p.pos[0] = self.width;
            }

            if p.pos[1] > self.height {
                p.pos[1] = 0.0;
            } else if p.pos[1] < 0.0 {
                p.pos[1] = self.height;
            }
        }
    }

    // All-pairs pass over the pool. Quadratic, but at 150 particles that is
    // ~11k distance checks per frame which the canvas drawing dwarfs anyway.
    pub fn connections(&self, max_distance: f64) -> Vec<Connection> {
        let mut connections = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let from = self.particles[i].pos;
                let to = self.particles[j].pos;
                let distance = vecmath::vec2_len(vecmath::vec2_sub(from, to));
                if distance < max_distance {
                    connections.push(Connection {
                        a: i,
                        b: j,
                        from,
                        to,
                        alpha: 0.1 * (1.0 - distance / max_distance),
                    });
                }
            }
        }
        connections
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}
