//! Per-cell threshold sources for the non-diffusing algorithms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::mode::Algorithm;

const BAYER2: [u8; 4] = [0x00, 0x80, 0xc0, 0x40];

const BAYER4: [u8; 16] = [
    0x00, 0x80, 0x20, 0xa0, //
    0xc0, 0x40, 0xe0, 0x60, //
    0x30, 0xb0, 0x10, 0x90, //
    0xf0, 0x70, 0xd0, 0x50,
];

const BAYER8: [u8; 64] = {
    const BASE: [u8; 64] = [
        0, 32, 8, 40, 2, 34, 10, 42, //
        48, 16, 56, 24, 50, 18, 58, 26, //
        12, 44, 4, 36, 14, 46, 6, 38, //
        60, 28, 52, 20, 62, 30, 54, 22, //
        3, 35, 11, 43, 1, 33, 9, 41, //
        51, 19, 59, 27, 49, 17, 57, 25, //
        15, 47, 7, 39, 13, 45, 5, 37, //
        63, 31, 55, 23, 61, 29, 53, 21,
    ];
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = BASE[i] * 4;
        i += 1;
    }
    table
};

/// Source of the `t` in `(t - 0x80) * 4` added to each channel.
pub(super) enum Threshold {
    /// No perturbation.
    Flat,
    /// Bayer matrix of side `n`, indexed by canvas position.
    Ordered { matrix: &'static [u8], n: usize },
    /// Uniform noise from a generator reseeded every render.
    Random(StdRng),
    /// Error diffusion; no threshold is added.
    Diffusion,
}

impl Threshold {
    pub(super) fn new(algorithm: Algorithm, seed: u64) -> Self {
        match algorithm {
            Algorithm::None => Self::Flat,
            Algorithm::Ordered2 => Self::Ordered { matrix: &BAYER2, n: 2 },
            Algorithm::Ordered4 => Self::Ordered { matrix: &BAYER4, n: 4 },
            Algorithm::Ordered8 => Self::Ordered { matrix: &BAYER8, n: 8 },
            Algorithm::Random => Self::Random(StdRng::seed_from_u64(seed)),
            Algorithm::FloydSteinberg => Self::Diffusion,
        }
    }

    pub(super) fn is_diffusion(&self) -> bool {
        matches!(self, Self::Diffusion)
    }

    /// Next threshold in [0, 256) for the cell at (x, y).
    pub(super) fn sample(&mut self, x: usize, y: usize) -> i32 {
        match self {
            Self::Flat | Self::Diffusion => 0x80,
            Self::Ordered { matrix, n } => i32::from(matrix[(y % *n) * *n + x % *n]),
            Self::Random(rng) => rng.random_range(0..256),
        }
    }
}
