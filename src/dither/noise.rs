//! Random channel perturbation for the noise modes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-run noise source.
///
/// Each channel is perturbed by the difference of two independent uniform
/// draws in `[0, amplitude)`, then clamped to the valid channel range. Draws
/// are taken per channel per pixel, so quantizing the same pixel twice in
/// one run can yield different indices. The generator is seeded once per
/// run, making whole runs reproducible for a fixed seed.
#[derive(Debug)]
pub(crate) struct Noise {
    rng: StdRng,
    amplitude: u8,
}

impl Noise {
    pub fn new(amplitude: u8, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            amplitude,
        }
    }

    /// Perturb one channel value.
    pub fn perturb(&mut self, value: u8) -> u8 {
        if self.amplitude == 0 {
            return value;
        }
        let up = self.rng.gen_range(0..i32::from(self.amplitude));
        let down = self.rng.gen_range(0..i32::from(self.amplitude));
        (i32::from(value) + up - down).clamp(0, 255) as u8
    }
}
