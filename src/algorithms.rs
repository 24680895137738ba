use std::fmt;

use crate::geometry::Rect;
use crate::Layout as _;

mod aligned;
mod binary_split;
mod squarify;
mod strip;

pub use aligned::aligned_treemap;
pub use aligned::AlignedTreemap;
pub use binary_split::treemap;
pub use binary_split::Treemap;
pub use squarify::padded_squarify;
pub use squarify::squarify;
pub use squarify::Squarify;

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input sets don't have matching lengths.
    InputLenMismatch { expected: usize, actual: usize },

    /// A weight-imbalance score was requested for a split index outside the
    /// valid range.
    SplitIndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputLenMismatch { expected, actual } => write!(
                f,
                "input sets don't have the same length (expected {expected} items, got {actual})",
            ),
            Error::SplitIndexOutOfRange { index, len } => write!(
                f,
                "split index {index} out of range for a list of {len} sizes",
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Run-time selection of a layout algorithm.
///
/// Replaces stringly-typed algorithm selection at API boundaries: variants
/// that need extra inputs carry them, so an aligned layout cannot be
/// requested without its alignment keys.
///
/// # Example
///
/// ```rust
/// use pavage::Rect;
/// use pavage::Strategy;
///
/// let frame = Rect::new(0.0, 0.0, 6.0, 4.0);
/// let sizes = pavage::normalize_sizes(&[6.0, 6.0, 12.0], frame.dx, frame.dy);
/// let mut rects = vec![Rect::default(); sizes.len()];
///
/// Strategy::Treemap.compute(&mut rects, frame, &sizes)?;
/// # Ok::<(), pavage::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Strategy<'a> {
    Squarify,
    PaddedSquarify,
    Treemap,
    AlignedTreemap {
        x_align: &'a [f64],
        y_align: &'a [f64],
    },
}

impl Strategy<'_> {
    /// Lay `sizes` out into `frame` with the selected algorithm, writing
    /// the rectangle of size `i` at `rects[i]`.
    pub fn compute(&self, rects: &mut [Rect], frame: Rect, sizes: &[f64]) -> Result<(), Error> {
        match *self {
            Strategy::Squarify => Squarify::default().layout(rects, (frame, sizes)),
            Strategy::PaddedSquarify => Squarify { pad: true }.layout(rects, (frame, sizes)),
            Strategy::Treemap => Treemap.layout(rects, (frame, sizes)),
            Strategy::AlignedTreemap { x_align, y_align } => {
                AlignedTreemap.layout(rects, (frame, sizes, x_align, y_align))
            }
        }
    }
}
