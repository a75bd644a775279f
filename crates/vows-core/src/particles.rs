//! Decorative particle field for the loading and hero screens.
//!
//! Positions are percentages of the viewport in `[0, 100)`. Each tick moves a
//! particle by its velocity, wrapping at the edges, and pulses its opacity on
//! a sine of wall-clock time offset by the particle id.

use std::time::Duration;

use rand::Rng;

/// Particle colors.
pub const PALETTE: [&str; 6] = [
    "#BC677C", "#E2AAAD", "#EBC1CB", "#FAEAEA", "#FFFFFF", "#DFB46F",
];

/// Interval between position updates.
pub const PARTICLE_TICK: Duration = Duration::from_millis(50);

/// Generation and animation parameters for one screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePreset {
    pub count: usize,
    /// Minimum diameter in pixels
    pub size_min: f64,
    /// Diameter range above the minimum
    pub size_span: f64,
    /// Full width of the velocity range, centered on zero
    pub drift: f64,
    pub opacity_min: f64,
    pub opacity_span: f64,
    /// Center of the opacity pulse
    pub pulse_base: f64,
    /// Amplitude of the opacity pulse
    pub pulse_amplitude: f64,
}

pub const LOADING_PARTICLES: ParticlePreset = ParticlePreset {
    count: 50,
    size_min: 2.0,
    size_span: 4.0,
    drift: 0.5,
    opacity_min: 0.3,
    opacity_span: 0.5,
    pulse_base: 0.5,
    pulse_amplitude: 0.3,
};

pub const HERO_PARTICLES: ParticlePreset = ParticlePreset {
    count: 40,
    size_min: 2.0,
    size_span: 5.0,
    drift: 0.4,
    opacity_min: 0.2,
    opacity_span: 0.4,
    pulse_base: 0.4,
    pulse_amplitude: 0.2,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
    pub color: &'static str,
}

/// Fixed-size particle collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    preset: ParticlePreset,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `preset.count` particles with random initial values.
    pub fn generate<R: Rng + ?Sized>(preset: ParticlePreset, rng: &mut R) -> Self {
        let particles = (0..preset.count)
            .map(|id| Particle {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: preset.size_min + rng.r#gen::<f64>() * preset.size_span,
                speed_x: (rng.r#gen::<f64>() - 0.5) * preset.drift,
                speed_y: (rng.r#gen::<f64>() - 0.5) * preset.drift,
                opacity: preset.opacity_min + rng.r#gen::<f64>() * preset.opacity_span,
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
            })
            .collect();
        Self { preset, particles }
    }

    /// Generate with the thread-local RNG.
    pub fn random(preset: ParticlePreset) -> Self {
        Self::generate(preset, &mut rand::thread_rng())
    }

    pub fn preset(&self) -> &ParticlePreset {
        &self.preset
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every particle one tick. `now_secs` is wall-clock seconds.
    pub fn step(&mut self, now_secs: f64) {
        let ParticlePreset {
            pulse_base,
            pulse_amplitude,
            ..
        } = self.preset;
        for p in &mut self.particles {
            p.x = wrap_percent(p.x + p.speed_x);
            p.y = wrap_percent(p.y + p.speed_y);
            p.opacity = (now_secs + p.id as f64).sin() * pulse_amplitude + pulse_base;
        }
    }
}

/// Wrap into `[0, 100)`.
fn wrap_percent(value: f64) -> f64 {
    let wrapped = value.rem_euclid(100.0);
    // rem_euclid can round up to exactly 100.0 for tiny negative inputs
    if wrapped >= 100.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn in_bounds(field: &ParticleField) -> bool {
        field
            .particles()
            .iter()
            .all(|p| (0.0..100.0).contains(&p.x) && (0.0..100.0).contains(&p.y))
    }

    #[test]
    fn test_generate_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(ParticleField::generate(LOADING_PARTICLES, &mut rng).len(), 50);
        assert_eq!(ParticleField::generate(HERO_PARTICLES, &mut rng).len(), 40);
    }

    #[test]
    fn test_initial_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let preset = LOADING_PARTICLES;
        let field = ParticleField::generate(preset, &mut rng);

        assert!(in_bounds(&field));
        for (i, p) in field.particles().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!(p.size >= preset.size_min && p.size <= preset.size_min + preset.size_span);
            assert!(p.speed_x.abs() <= preset.drift / 2.0);
            assert!(p.speed_y.abs() <= preset.drift / 2.0);
            assert!(p.opacity >= preset.opacity_min);
            assert!(p.opacity <= preset.opacity_min + preset.opacity_span);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_step_keeps_bounds_and_pulse_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let preset = HERO_PARTICLES;
        let mut field = ParticleField::generate(preset, &mut rng);

        for tick in 0..5_000 {
            field.step(tick as f64 * 0.05);
            assert!(in_bounds(&field));
        }
        let lo = preset.pulse_base - preset.pulse_amplitude - 1e-9;
        let hi = preset.pulse_base + preset.pulse_amplitude + 1e-9;
        assert!(field.particles().iter().all(|p| p.opacity >= lo && p.opacity <= hi));
        assert_eq!(field.len(), preset.count);
    }

    #[test]
    fn test_wrap_percent() {
        assert_eq!(wrap_percent(100.2), 100.2 - 100.0);
        assert_eq!(wrap_percent(-0.25), 99.75);
        assert_eq!(wrap_percent(0.0), 0.0);
        assert!(wrap_percent(-1e-18) < 100.0);
    }
}
