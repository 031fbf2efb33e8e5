use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::FieldConfig;
use crate::geometry::{Bounds, Point};

/// Hard cap on the particle count so the O(n^2) link pass stays cheap.
pub const MAX_PARTICLES: usize = 200;

const AREA_PER_PARTICLE: f64 = 15_000.0;
const PULL: f64 = 0.02;
const DAMPING: f64 = 0.99;
const LINK_ALPHA: f64 = 0.3;
const POINTER_LINK_ALPHA: f64 = 0.5;
const POINTER_LINK_REACH: f64 = 1.5;

/// A drifting point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Horizontal velocity (px/frame)
    pub vx: f64,
    /// Vertical velocity (px/frame)
    pub vy: f64,
    /// Core radius; the glow is drawn at 3x
    pub size: f64,
    /// Base alpha
    pub opacity: f64,
    /// HSL hue in the blue-purple band
    pub hue: f64,
}

impl Particle {
    /// Position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Link {
    /// Index of the first particle
    pub a: usize,
    /// Index of the second particle (`a < b`)
    pub b: usize,
    /// Stroke alpha, fading with distance
    pub alpha: f64,
}

/// A line between a particle and the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointerLink {
    /// Particle index
    pub index: usize,
    /// Stroke alpha
    pub alpha: f64,
}

/// Pointer-reactive particle field.
#[derive(Clone, Debug)]
pub struct ParticleField {
    bounds: Bounds,
    settings: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Population for a surface: one particle per 15k px², at most
    /// `settings.max_particles` and never more than [`MAX_PARTICLES`].
    pub fn population(bounds: Bounds, settings: &FieldConfig) -> usize {
        let by_area = (bounds.area() / AREA_PER_PARTICLE).floor() as usize;
        by_area.min(settings.max_particles).min(MAX_PARTICLES)
    }

    /// Scatter a fresh population over `bounds`.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, settings: FieldConfig, rng: &mut R) -> Self {
        let count = Self::population(bounds, &settings);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..=bounds.width),
                y: rng.gen_range(0.0..=bounds.height),
                vx: rng.gen_range(-0.25..0.25),
                vy: rng.gen_range(-0.25..0.25),
                size: rng.gen_range(1.0..3.0),
                opacity: rng.gen_range(0.2..0.7),
                hue: rng.gen_range(200.0..260.0),
            })
            .collect();
        Self {
            bounds,
            settings,
            particles,
        }
    }

    /// Rebuild for a new surface size.
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        *self = Self::new(bounds, self.settings.clone(), rng);
        debug!(particles = self.particles.len(), "particle field reinitialised");
    }

    /// Advance one frame: pointer pull, integration, damping, edge reflection.
    pub fn step(&mut self, pointer: Option<Point>) {
        let radius = self.settings.pointer_radius;
        let bounds = self.bounds;

        for p in &mut self.particles {
            if let Some(pointer) = pointer {
                let dx = pointer.x - p.x;
                let dy = pointer.y - p.y;
                let distance = dx.hypot(dy);
                if distance.is_finite() && distance > f64::EPSILON && distance < radius {
                    let force = (radius - distance) / radius;
                    p.vx += dx / distance * force * PULL;
                    p.vy += dy / distance * force * PULL;
                }
            }

            p.x += p.vx;
            p.y += p.vy;
            p.vx *= DAMPING;
            p.vy *= DAMPING;

            if p.x.is_nan() || p.x < 0.0 || p.x > bounds.width {
                p.vx = -p.vx;
                p.x = bounds.clamp_x(p.x);
            }
            if p.y.is_nan() || p.y < 0.0 || p.y > bounds.height {
                p.vy = -p.vy;
                p.y = bounds.clamp_y(p.y);
            }
        }
    }

    /// Pairs closer than the configured link distance.
    pub fn links(&self) -> Vec<Link> {
        let max = self.settings.link_distance;
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let d = pa.position().distance(pb.position());
                if d < max {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        alpha: (1.0 - d / max) * LINK_ALPHA,
                    });
                }
            }
        }
        links
    }

    /// Particles within reach of the pointer.
    pub fn pointer_links(&self, pointer: Point) -> Vec<PointerLink> {
        let reach = self.settings.link_distance * POINTER_LINK_REACH;
        self.particles
            .iter()
            .enumerate()
            .filter_map(|(index, p)| {
                let d = p.position().distance(pointer);
                (d < reach).then(|| PointerLink {
                    index,
                    alpha: (1.0 - d / reach) * POINTER_LINK_ALPHA,
                })
            })
            .collect()
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Surface the particles live in.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(width: f64, height: f64, seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::new(Bounds::new(width, height), FieldConfig::default(), &mut rng)
    }

    #[test]
    fn population_scales_with_area_and_caps() {
        let settings = FieldConfig::default();
        assert_eq!(ParticleField::population(Bounds::new(300.0, 100.0), &settings), 2);
        assert_eq!(ParticleField::population(Bounds::new(1920.0, 1080.0), &settings), 80);

        let generous = FieldConfig {
            max_particles: 10_000,
            ..FieldConfig::default()
        };
        assert_eq!(
            ParticleField::population(Bounds::new(10_000.0, 10_000.0), &generous),
            MAX_PARTICLES
        );
    }

    #[test]
    fn particles_bounce_off_edges() {
        let mut f = field(400.0, 400.0, 1);
        f.particles[0] = Particle {
            x: 399.9,
            y: 200.0,
            vx: 1.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.5,
            hue: 220.0,
        };
        f.step(None);
        assert_eq!(f.particles()[0].x, 400.0);
        assert!(f.particles()[0].vx < 0.0);
    }

    #[test]
    fn pointer_pulls_particles_closer() {
        let mut f = field(400.0, 400.0, 2);
        f.particles[0] = Particle {
            x: 100.0,
            y: 100.0,
            vx: 0.0,
            vy: 0.0,
            size: 1.0,
            opacity: 0.5,
            hue: 220.0,
        };
        let pointer = Point::new(150.0, 100.0);
        let before = f.particles()[0].position().distance(pointer);
        f.step(Some(pointer));
        let after = f.particles()[0].position().distance(pointer);
        assert!(after < before);
    }

    #[test]
    fn links_only_join_close_pairs() {
        let mut f = field(400.0, 400.0, 3);
        f.particles.truncate(0);
        for x in [10.0, 60.0, 390.0] {
            f.particles.push(Particle {
                x,
                y: 10.0,
                vx: 0.0,
                vy: 0.0,
                size: 1.0,
                opacity: 0.5,
                hue: 220.0,
            });
        }
        let links = f.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].alpha - (1.0 - 50.0 / 150.0) * 0.3).abs() < 1e-9);

        let near_pointer = f.pointer_links(Point::new(0.0, 10.0));
        assert_eq!(
            near_pointer.iter().map(|l| l.index).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    proptest! {
        #[test]
        fn particles_stay_in_bounds(
            seed in any::<u64>(),
            width in 0.0f64..2500.0,
            height in 0.0f64..2500.0,
            px in -500.0f64..3000.0,
            py in -500.0f64..3000.0,
            steps in 0usize..200,
        ) {
            let mut f = field(width, height, seed);
            for i in 0..steps {
                let pointer = (i % 3 != 0).then_some(Point::new(px, py));
                f.step(pointer);
            }
            let bounds = f.bounds();
            for p in f.particles() {
                prop_assert!(bounds.contains(p.position()), "{:?} outside {:?}", p, bounds);
            }
        }
    }
}
