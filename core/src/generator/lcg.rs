use super::*;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit linear congruential generator.
///
/// Unlike `SmallRng`, whose algorithm may change between `rand` releases, this stream is fixed forever, so
/// seeded boards built with it can be pinned in tests and shared between players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg48 {
    state: u64,
}

impl Lcg48 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::scramble(seed),
        }
    }

    const fn scramble(seed: u64) -> u64 {
        (seed ^ MULTIPLIER) & MASK
    }

    /// Advances the state and returns its top `bits` bits, `bits` in `1..=32`.
    fn next_bits(&mut self, bits: u32) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK;
        (self.state >> (48 - bits)) as u32
    }

    pub fn next_u32(&mut self) -> u32 {
        self.next_bits(32)
    }

    /// Uniform draw from `0..bound` using rejection on 31-bit outputs.
    pub fn next_u31_below(&mut self, bound: u32) -> u32 {
        let bound = bound.clamp(1, i32::MAX as u32);

        if bound.is_power_of_two() {
            return ((u64::from(bound) * u64::from(self.next_bits(31))) >> 31) as u32;
        }

        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            // reject the incomplete bucket at the top of the 31-bit range
            if bits - value + (bound - 1) <= i32::MAX as u32 {
                return value;
            }
        }
    }
}

impl ColorSource for Lcg48 {
    fn next_below(&mut self, bound: usize) -> usize {
        let bound = u32::try_from(bound).unwrap_or(u32::MAX);
        self.next_u31_below(bound) as usize
    }

    fn reseed(&mut self, seed: u64) {
        self.state = Self::scramble(seed);
    }
}
