//! A treemap layout library that implements composable rectangular
//! space-filling algorithms.
//!
//! # Crate Layout
//!
//! Pavage exposes a [`Layout`] trait, which is in turn implemented by
//! algorithms.  See its documentation for more details.  Each algorithm
//! partitions a rectangular frame into one sub-rectangle per input size,
//! with areas proportional to the sizes.
//!
//! Sizes must be normalized beforehand so that they sum to the area of the
//! frame; see [`normalize_sizes`].
//!
//! # Available algorithms
//!
//! - [Squarified treemap][Squarify], after Bruls, Huizing and van Wijk
//! - [Weight-balanced binary-split treemap][Treemap]
//! - [Alignment-ordered binary-split treemap][AlignedTreemap]
//!
//! The [record-level functions][crate::squarify()] mirror these with
//! label/value pass-through, and [`Strategy`] selects an algorithm at
//! run time.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

mod algorithms;
mod geometry;
pub mod imbalance;
mod normalize;
mod record;


pub use crate::algorithms::aligned_treemap;
pub use crate::algorithms::padded_squarify;
pub use crate::algorithms::squarify;
pub use crate::algorithms::treemap;
pub use crate::algorithms::AlignedTreemap;
pub use crate::algorithms::Error;
pub use crate::algorithms::Squarify;
pub use crate::algorithms::Strategy;
pub use crate::algorithms::Treemap;
pub use crate::geometry::Point2D;
pub use crate::geometry::Rect;
pub use crate::normalize::normalize_sizes;
pub use crate::record::Record;

pub use nalgebra;
pub use num_traits;

/// The `Layout` trait allows for computing treemap layouts.
///
/// Layout algorithms implement this trait.
///
/// The generic argument `S` defines the input of the algorithms (e.g. a
/// frame and a list of sizes, with or without alignment keys).
///
/// The output slice must have one element per input size.  Algorithms write
/// the rectangle for size `i` at `rects[i]`, so output order always matches
/// input order, regardless of any reordering an algorithm performs
/// internally.
pub trait Layout<S> {
    /// Diagnostic data returned for a specific run of the algorithm.
    type Metadata;

    /// Error details, should the algorithm fail to run.
    type Error;

    /// Lay the given sizes out and write the rectangle of each size in
    /// `rects`.
    fn layout(&mut self, rects: &mut [Rect], data: S) -> Result<Self::Metadata, Self::Error>;
}
