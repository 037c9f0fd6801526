//! Benchmark board profiles for the Talus grid settling kernel.
//!
//! - [`reference_profile`]: 128x128 random board (16K cells)
//! - [`stress_profile`]: 512x512 random board (~262K cells)
//! - [`cleared_band_profile`]: a settled board with a band of rows
//!   removed, the common case after a match clears cells
//! - [`towers_profile`]: alternating full and empty columns, every token
//!   slides diagonally

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use talus_core::{Coord, EMPTY, MIN_TOKEN, OBSTACLE};
use talus_grid::{Grid, Layout};
use talus_settle::{IncrementalSettler, Settler};
use talus_test_utils::BoardSpec;

/// 128x128 board with default densities.
pub fn reference_profile(seed: u64) -> Grid {
    BoardSpec::sized(128, 128).generate(seed)
}

/// 512x512 board with default densities.
pub fn stress_profile(seed: u64) -> Grid {
    BoardSpec::sized(512, 512).generate(seed)
}

/// A densely packed board, settled, then with `band` consecutive rows
/// starting at a seeded height cleared of tokens. At least one row is
/// left above the band.
///
/// Only the tokens above the band have anywhere to go, so this is where
/// stability tracking pays off.
pub fn cleared_band_profile(width: u32, height: u32, band: u32, seed: u64) -> Grid {
    let spec = BoardSpec {
        obstacle_density: 0.02,
        token_density: 0.95,
        ..BoardSpec::sized(width, height)
    };
    let mut grid = spec.generate(seed);
    IncrementalSettler
        .settle(&mut grid.view_mut())
        .expect("settling a generated board");

    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let band = band.clamp(1, height.saturating_sub(1).max(1));
    let start = rng.random_range(0..height.saturating_sub(band).max(1));
    for row in start..start + band {
        for col in 0..width {
            let c = Coord::new(col, row);
            if grid.at(c) >= MIN_TOKEN {
                grid.put(c, EMPTY);
            }
        }
    }
    grid
}

/// Even columns packed with tokens over an obstacle floor, odd columns
/// empty. Every token has to zigzag sideways to settle.
pub fn towers_profile(width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height, Layout::default())
        .unwrap_or_else(|e| panic!("invalid towers profile {width}x{height}: {e}"));
    for col in 0..width {
        grid.put(Coord::new(col, 0), OBSTACLE);
        if col % 2 == 0 {
            for row in 1..height {
                grid.put(Coord::new(col, row), MIN_TOKEN + (row % 4) as i32);
            }
        }
    }
    grid
}
