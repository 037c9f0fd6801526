//! Seeded random boards.
//!
//! Same seed, same board: generation uses `ChaCha8Rng`, whose output is
//! fixed across platforms and `rand` releases.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use talus_core::{EMPTY, MIN_TOKEN, OBSTACLE};
use talus_grid::{Grid, Layout};

/// Shape and density of a random board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardSpec {
    pub width: u32,
    pub height: u32,
    pub layout: Layout,
    /// Probability that a cell is an obstacle.
    pub obstacle_density: f64,
    /// Probability that a non-obstacle cell holds a token.
    pub token_density: f64,
    /// Number of distinct token values, starting at 2.
    pub kinds: i32,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            layout: Layout::default(),
            obstacle_density: 0.1,
            token_density: 0.5,
            kinds: 5,
        }
    }
}

impl BoardSpec {
    /// A default-density spec of the given size.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Generate the board for `seed`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are zero or a density lies outside
    /// `[0, 1]`.
    pub fn generate(&self, seed: u64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(self.width, self.height, self.layout)
            .unwrap_or_else(|e| panic!("invalid board spec {self:?}: {e}"));
        let kinds = self.kinds.max(1);
        for row in 0..self.height {
            for col in 0..self.width {
                let value = if rng.random_bool(self.obstacle_density) {
                    OBSTACLE
                } else if rng.random_bool(self.token_density) {
                    MIN_TOKEN + rng.random_range(0..kinds)
                } else {
                    EMPTY
                };
                grid.put((col, row).into(), value);
            }
        }
        grid
    }
}

/// Default-density board of the given size.
pub fn random_board(width: u32, height: u32, seed: u64) -> Grid {
    BoardSpec::sized(width, height).generate(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_board() {
        assert_eq!(random_board(12, 9, 42), random_board(12, 9, 42));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(random_board(16, 16, 1), random_board(16, 16, 2));
    }

    #[test]
    fn values_stay_in_the_defined_range() {
        let spec = BoardSpec {
            kinds: 3,
            ..BoardSpec::sized(10, 10)
        };
        let g = spec.generate(7);
        assert!(g.first_undefined().is_none());
        assert!(g.as_slice().iter().all(|&v| v < MIN_TOKEN + 3));
    }

    #[test]
    fn zero_densities_give_empty_board() {
        let spec = BoardSpec {
            obstacle_density: 0.0,
            token_density: 0.0,
            ..BoardSpec::sized(4, 4)
        };
        assert!(spec.generate(3).as_slice().iter().all(|&v| v == EMPTY));
    }
}
