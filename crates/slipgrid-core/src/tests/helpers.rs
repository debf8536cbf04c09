//! Test helpers: RNG stubs and shared assertions.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::GridState;

/// Random source that yields zero forever.
///
/// Used to prove the deal loop never special-cases around the parity check:
/// even a degenerate source must go through shuffle-then-check.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

/// Random source scripted against a fixed schedule of inclusive draw
/// bounds, landing every `gen_range(0..=bound)` on `bound` itself.
///
/// For each scripted bound, `next_u64` returns the smallest `v` whose
/// 128-bit product with `bound + 1` carries `bound` in its high half; the
/// single-draw uniform path accepts that on the first sample. A shuffle fed
/// the schedule `edge² - 1, …, 1` therefore swaps every index with itself
/// and leaves the grid untouched. A draw past the end of the schedule
/// panics, and a draw against any other bound disturbs the permutation.
pub struct TopDrawRng {
    bounds: std::vec::IntoIter<u64>,
    draws: usize,
}

impl TopDrawRng {
    /// Scripts the bound schedule of one Fisher–Yates pass over an
    /// `edge` × `edge` grid: `edge² - 1` down to `1`.
    pub fn for_shuffle(edge: usize) -> Self {
        let top = (edge * edge - 1) as u64;
        Self {
            bounds: (1..=top).rev().collect::<Vec<_>>().into_iter(),
            draws: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// True once every scripted bound has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.bounds.len() == 0
    }
}

impl RngCore for TopDrawRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let bound = self
            .bounds
            .next()
            .expect("drew more values than the scripted schedule allows");
        self.draws += 1;
        let range = u128::from(bound) + 1;
        ((u128::from(bound) << 64).div_ceil(range)) as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Deals a seeded shuffled solvable 4x4 grid.
pub fn shuffled_4x4(seed: u64) -> GridState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    GridState::new_shuffled_solvable(4, &mut rng).unwrap()
}

/// Checks the permutation invariant: every solved rank present exactly once,
/// exactly one blank, and the blank index pointing at it.
pub fn is_valid_permutation(grid: &GridState) -> bool {
    let edge = grid.edge();
    let mut ranks: Vec<usize> = grid.tiles().map(|(_, t)| t.solved_rank(edge)).collect();
    ranks.sort_unstable();
    if ranks != (0..grid.tile_count()).collect::<Vec<_>>() {
        return false;
    }

    let blanks = grid.tiles().filter(|(_, t)| t.is_blank()).count();
    blanks == 1
        && grid
            .tile_at_index(grid.blank_index())
            .is_ok_and(|t| t.is_blank())
}
