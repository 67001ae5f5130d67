//! Moving rectangles for exercising the indexes.
//!
//! Each particle wanders with a slowly drifting heading and turns around
//! when a step would carry it outside the world.
use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{HasEnvelope, Rectangle, Result, SpatialIndex};

const STEP: f64 = 0.5;
const JITTER: f64 = 0.1;
const TAU: f64 = 2. * PI;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    /// Lower-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    theta: f64,
}

impl HasEnvelope for Particle {
    fn envelope(&self) -> Rectangle {
        self.rect()
    }
}

impl Particle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, theta: f64) -> Self {
        Particle {
            x,
            y,
            width,
            height,
            theta,
        }
    }

    /// A particle of the given size at a uniformly random spot and heading.
    pub fn random<R: Rng + ?Sized>(
        world_width: f64,
        world_height: f64,
        size: f64,
        rng: &mut R,
    ) -> Self {
        Particle::new(
            rng.gen::<f64>() * world_width,
            rng.gen::<f64>() * world_height,
            size,
            size,
            rng.gen::<f64>() * TAU,
        )
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::new(
            (self.x, self.y).into(),
            (self.x + self.width, self.y + self.height).into(),
        )
    }

    /// Advance one tick. Returns false if the particle turned around
    /// instead of moving.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        world_width: f64,
        world_height: f64,
        rng: &mut R,
    ) -> bool {
        self.theta += rng.gen::<f64>() * JITTER - JITTER / 2.;

        let new_x = self.x + self.theta.cos() * STEP;
        let new_y = self.y + self.theta.sin() * STEP;
        if new_x < 0. || new_y < 0. || new_x >= world_width || new_y >= world_height {
            self.turn_around();
            return false;
        }

        self.x = new_x;
        self.y = new_y;
        true
    }

    /// Euclidean distance between lower-left corners.
    pub fn distance_to(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Positions in `others` of the (at most) `k` particles nearest this
    /// one, closest first. Equal distances keep their order in `others`.
    pub fn k_closest(&self, others: &[Particle], k: usize) -> Vec<usize> {
        let mut distances: Vec<(usize, f64)> = others
            .iter()
            .map(|other| self.distance_to(other))
            .enumerate()
            .collect();
        distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        distances.truncate(k);
        distances.into_iter().map(|(index, _)| index).collect()
    }

    fn turn_around(&mut self) {
        let theta = self.theta.rem_euclid(TAU);
        self.theta = if theta < FRAC_PI_2 {
            PI - theta
        } else if theta < 3. * FRAC_PI_2 {
            theta - PI
        } else {
            TAU - theta
        };
    }
}

/// A world full of particles, stepped in lockstep.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    rng: SmallRng,
}

impl Simulation {
    pub fn new(num_particles: usize, width: f64, height: f64, size: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..num_particles)
            .map(|_| Particle::random(width, height, size, &mut rng))
            .collect();
        Simulation {
            width,
            height,
            particles,
            rng,
        }
    }

    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in self.particles.iter_mut() {
            particle.update(width, height, &mut self.rng);
        }
    }

    /// Current rectangles, tagged with each particle's position in the
    /// simulation.
    pub fn entries(&self) -> Vec<(usize, Rectangle)> {
        self.particles
            .iter()
            .map(|p| p.rect())
            .enumerate()
            .collect()
    }

    /// Replace the index contents with a snapshot of the current positions.
    pub fn rebuild<I>(&self, index: &mut I) -> Result<()>
    where
        I: SpatialIndex<(usize, Rectangle)>,
    {
        index.clear();
        for entry in self.entries() {
            index.insert(entry)?;
        }
        Ok(())
    }

    /// The area of interest around particle `i`: its rectangle padded by
    /// `radius`.
    pub fn neighborhood(&self, i: usize, radius: f64) -> Rectangle {
        self.particles[i].rect().buffered(radius)
    }
}
