//! Dense rectangular grid model for Talus.
//!
//! [`Grid`] stores one `i32` per cell over any buffer that can be viewed
//! as a slice: an owned `Vec<i32>` or a caller's `&mut [i32]`
//! ([`GridMut`]). Cells are addressed by [`Coord`](talus_core::Coord)
//! `(col, row)` with row 0 at the bottom; the physical storage order is a
//! [`Layout`] and never leaks into the public vocabulary.
//!
//! # Neighbourhoods
//!
//! Gravity only ever looks one row down (the *support* cells) or, when a
//! cell is vacated, one row up (the *upper* cells). Both are available as
//! bounded [`SmallVec`](smallvec::SmallVec)s; see [`neighbourhood`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod layout;
pub mod neighbourhood;
pub mod render;

pub use grid::{Grid, GridMut};
pub use layout::Layout;
pub use neighbourhood::{SUPPORT_OFFSETS, UPPER_OFFSETS};
