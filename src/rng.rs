//! Seedable random sources for food placement.
//!
//! Food placement asks for exactly one thing: a uniform index into a list of
//! free cells. [`Lcg48`] answers that question the same way the reference
//! games were recorded with, so seeded games reproduce cell for cell.

use rand::{rngs::StdRng, Rng};

pub trait RandomSource {
    /// A uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// A uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }

    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

impl RandomSource for StdRng {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn unit(&mut self) -> f64 {
        self.gen()
    }
}

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit linear congruential generator.
///
/// Two instances built from the same seed produce the same stream. Bounds
/// wider than `i32::MAX` are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    pub fn new(seed: i64) -> Self {
        Lcg48 { state: (seed as u64 ^ MULTIPLIER) & MASK }
    }

    /// Advances the state and returns its top `bits` bits.
    fn next_bits(&mut self, bits: u32) -> u32 {
        debug_assert!(bits >= 1 && bits <= 32);

        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        (self.state >> (48 - bits)) as u32
    }

    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32) as i32
    }

    pub fn next_below(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");

        let r = self.next_bits(31) as i32;
        let m = bound - 1;

        if bound & m == 0 {
            return ((i64::from(bound) * i64::from(r)) >> 31) as i32;
        }

        // Reject the partial bucket at the top of the range so every residue
        // is equally likely.
        let mut u = r;
        loop {
            let r = u % bound;
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next_bits(31) as i32;
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        let hi = u64::from(self.next_bits(26)) << 27;
        let lo = u64::from(self.next_bits(27));

        (hi + lo) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl From<i64> for Lcg48 {
    fn from(seed: i64) -> Self {
        Lcg48::new(seed)
    }
}

impl RandomSource for Lcg48 {
    fn below(&mut self, bound: usize) -> usize {
        let bound = i32::try_from(bound).expect("bound does not fit in an i32");
        self.next_below(bound) as usize
    }

    fn unit(&mut self) -> f64 {
        self.next_f64()
    }
}
