//! Decorative confetti rain.
//!
//! A fixed pool of particles falls, sways and spins. Particles leaving the
//! bottom edge are recycled above the top edge, so the stream never ends on
//! its own.

mod shape;

pub use shape::{ParticleShape, STAR_VERTEX_COUNT, rotated_rect, star_polygon};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ScreenPoint, Viewport};
use crate::render::{CirclePrimitive, Color, LayerPrimitives, PolygonPrimitive};

pub const DEFAULT_PARTICLE_COUNT: usize = 150;

/// Tuning of the confetti simulation. Speeds are per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    #[serde(default = "default_particle_count")]
    pub count: usize,
    pub min_size_px: f64,
    pub max_size_px: f64,
    pub min_speed_px: f64,
    pub max_speed_px: f64,
    pub vertical_scale: f64,
    pub horizontal_amplitude_px: f64,
    /// Angular rate of the sway phase, radians per second.
    pub sway_frequency: f64,
    pub max_rotation_speed_deg: f64,
    pub rotation_scale: f64,
    /// Recycled particles restart this far above the top edge.
    pub respawn_band_px: (f64, f64),
    pub min_alpha: f64,
    pub max_alpha: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: default_particle_count(),
            min_size_px: 8.0,
            max_size_px: 18.0,
            min_speed_px: 80.0,
            max_speed_px: 220.0,
            vertical_scale: 1.0,
            horizontal_amplitude_px: 40.0,
            sway_frequency: 2.5,
            max_rotation_speed_deg: 240.0,
            rotation_scale: 1.0,
            respawn_band_px: (10.0, 60.0),
            min_alpha: 0.7,
            max_alpha: 1.0,
            palette: default_palette(),
        }
    }
}

impl ParticleConfig {
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }
}

fn default_particle_count() -> usize {
    DEFAULT_PARTICLE_COUNT
}

fn default_palette() -> Vec<Color> {
    [0xF44336, 0x2196F3, 0x4CAF50, 0xFFEB3B, 0xFF9800, 0x9C27B0]
        .into_iter()
        .map(Color::from_rgb_hex)
        .collect()
}

/// One confetti piece. Particles only ever fall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    /// Sway phase in radians.
    pub angle: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub size: f64,
    pub color: Color,
    pub shape: ParticleShape,
    pub alpha: f64,
}

/// Owns a fixed-capacity particle arena and steps it on host ticks.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    config: ParticleConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: StdRng,
    running: bool,
}

impl ParticleSystem {
    #[must_use]
    pub fn new(config: ParticleConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_os_rng())
    }

    /// Deterministic system for reproducible runs and tests.
    #[must_use]
    pub fn with_seed(config: ParticleConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut config: ParticleConfig, viewport: Viewport, rng: StdRng) -> Self {
        for color in &mut config.palette {
            *color = color.or_fallback();
        }
        let particles = Vec::with_capacity(config.count);
        Self {
            config,
            viewport,
            particles,
            rng,
            running: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Particles keep their positions; the next recycle uses the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Discards the pool, regenerates every particle and starts falling.
    pub fn start(&mut self) {
        let width = self.viewport.width_px();
        let height = self.viewport.height_px();
        self.particles.clear();
        for _ in 0..self.config.count {
            let mut particle = spawn_particle(&mut self.rng, &self.config, width);
            particle.y = sample(&mut self.rng, -height, 0.0);
            self.particles.push(particle);
        }
        self.running = true;
        debug!(count = self.particles.len(), width, height, "start confetti");
    }

    /// Halts the simulation without clearing particle state.
    pub fn stop(&mut self) {
        if self.running {
            debug!("stop confetti");
        }
        self.running = false;
    }

    /// Advances every particle by `delta_ms`. Returns whether the system runs.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            trace!(delta_ms, "ignoring invalid confetti delta");
            return true;
        }

        let dt = delta_ms / 1000.0;
        let width = self.viewport.width_px();
        let height = self.viewport.height_px();
        let config = &self.config;
        let mut recycled = 0_usize;
        for particle in &mut self.particles {
            particle.y += particle.speed * dt * config.vertical_scale;
            particle.x += config.horizontal_amplitude_px * particle.angle.sin() * dt;
            particle.angle += config.sway_frequency * dt;
            particle.rotation =
                (particle.rotation + particle.rotation_speed * dt * config.rotation_scale) % 360.0;

            if particle.y > height {
                let (band_min, band_max) = config.respawn_band_px;
                particle.y = -sample(&mut self.rng, band_min, band_max);
                particle.x = sample(&mut self.rng, 0.0, width);
                recycled += 1;
            }
        }
        if recycled > 0 {
            trace!(recycled, "recycle confetti");
        }
        true
    }

    /// Emits one shape per particle, tinted by the particle alpha.
    pub fn append_primitives(&self, layer: &mut LayerPrimitives) {
        for particle in &self.particles {
            let center = ScreenPoint::new(particle.x, particle.y);
            let color = particle.color.with_alpha(particle.color.alpha * particle.alpha);
            match particle.shape {
                ParticleShape::Circle => layer
                    .circles
                    .push(CirclePrimitive::filled(center, particle.size / 2.0, color)),
                ParticleShape::Rectangle => layer.polygons.push(PolygonPrimitive::new(
                    rotated_rect(center, particle.size, particle.size * 0.6, particle.rotation),
                    color,
                )),
                ParticleShape::Star => layer.polygons.push(PolygonPrimitive::new(
                    star_polygon(
                        center,
                        particle.size / 2.0,
                        particle.size / 4.0,
                        particle.rotation,
                    ),
                    color,
                )),
            }
        }
    }
}

fn sample(rng: &mut StdRng, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

fn spawn_particle(rng: &mut StdRng, config: &ParticleConfig, width: f64) -> Particle {
    let color = if config.palette.is_empty() {
        Color::FALLBACK
    } else {
        config.palette[rng.random_range(0..config.palette.len())]
    };
    let max_spin = config.max_rotation_speed_deg.abs();
    Particle {
        x: sample(rng, 0.0, width),
        y: 0.0,
        speed: sample(rng, config.min_speed_px, config.max_speed_px),
        angle: sample(rng, 0.0, std::f64::consts::TAU),
        rotation: sample(rng, 0.0, 360.0),
        rotation_speed: sample(rng, -max_spin, max_spin),
        size: sample(rng, config.min_size_px, config.max_size_px),
        color,
        shape: ParticleShape::ALL[rng.random_range(0..ParticleShape::ALL.len())],
        alpha: sample(rng, config.min_alpha, config.max_alpha),
    }
}
