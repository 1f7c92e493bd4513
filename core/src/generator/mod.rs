use alloc::vec::Vec;

use crate::*;
pub use lcg::*;
pub use random::*;

mod lcg;
mod random;

/// Random stream a board draws its colors from.
pub trait ColorSource {
    /// Uniform draw from `0..bound`. Callers never pass zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Restarts the stream from `seed`.
    fn reseed(&mut self, seed: u64);
}

/// Draws one palette color per cell, in row-major order.
pub fn generate_colors<S: ColorSource + ?Sized>(source: &mut S, config: &GameConfig) -> Vec<Color> {
    let palette = &config.palette;
    (0..config.total_cells())
        .map(|_| palette[source.next_below(palette.len())])
        .collect()
}
