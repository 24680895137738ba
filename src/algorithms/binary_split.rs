use std::ops::Range;

use super::strip;
use super::Error;
use crate::geometry::Rect;
use crate::imbalance;
use crate::record;
use crate::Layout;
use crate::Record;

/// Cut `frame` in two along its longer axis, the first part sized to hold
/// `covered` area.
pub(super) fn split(covered: f64, frame: Rect) -> (Rect, Rect) {
    if frame.dx >= frame.dy {
        tracing::trace!(covered, "split along x");
        let width = if frame.dy > 0.0 {
            covered / frame.dy
        } else {
            0.0
        };
        (
            Rect::new(frame.x, frame.y, width, frame.dy),
            Rect::new(frame.x + width, frame.y, frame.dx - width, frame.dy),
        )
    } else {
        tracing::trace!(covered, "split along y");
        let height = if frame.dx > 0.0 {
            covered / frame.dx
        } else {
            0.0
        };
        (
            Rect::new(frame.x, frame.y, frame.dx, height),
            Rect::new(frame.x, frame.y + height, frame.dx, frame.dy - height),
        )
    }
}

struct Job {
    range: Range<usize>,
    frame: Rect,
}

fn treemap_layout(out: &mut [Rect], frame: Rect, sizes: &[f64]) {
    if sizes.is_empty() {
        return;
    }
    let mut queue = vec![Job {
        range: 0..sizes.len(),
        frame,
    }];
    while let Some(Job { range, frame }) = queue.pop() {
        let group = &sizes[range.clone()];
        if group.len() == 1 {
            out[range.start] = strip::fill(group, frame)[0];
            continue;
        }
        let i = imbalance::optimal_split(group.iter().copied());
        let covered: f64 = group[..i].iter().sum();
        let (head_frame, tail_frame) = split(covered, frame);
        queue.push(Job {
            range: range.start..range.start + i,
            frame: head_frame,
        });
        queue.push(Job {
            range: range.start + i..range.end,
            frame: tail_frame,
        });
    }
}

/// # Weight-balanced treemap algorithm
///
/// Recursively cuts the frame in two along its longer axis, splitting the
/// size list at the index that best balances the weight of the two groups.
/// Aspect ratios are not considered, so input order need not be sorted and
/// is reflected in the geometry: earlier sizes end up on the low-coordinate
/// side of every cut.
///
/// Sizes are expected normalized to the frame area; this is not verified.
///
/// # Example
///
/// ```rust
/// use pavage::Layout as _;
/// use pavage::Rect;
///
/// let frame = Rect::new(0.0, 0.0, 2.0, 2.0);
/// let sizes = [1.0, 1.0, 1.0, 1.0];
/// let mut rects = [Rect::default(); 4];
///
/// pavage::Treemap.layout(&mut rects, (frame, &sizes[..]))?;
///
/// // Four equal sizes in a square frame make quadrants.
/// assert_eq!(rects[0], Rect::new(0.0, 0.0, 1.0, 1.0));
/// assert_eq!(rects[3], Rect::new(1.0, 1.0, 1.0, 1.0));
/// # Ok::<(), pavage::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Treemap;

impl<'a> Layout<(Rect, &'a [f64])> for Treemap {
    type Metadata = ();
    type Error = Error;

    fn layout(
        &mut self,
        rects: &mut [Rect],
        (frame, sizes): (Rect, &'a [f64]),
    ) -> Result<Self::Metadata, Self::Error> {
        if rects.len() != sizes.len() {
            return Err(Error::InputLenMismatch {
                expected: sizes.len(),
                actual: rects.len(),
            });
        }
        treemap_layout(rects, frame, sizes);
        Ok(())
    }
}

/// Compute weight-balanced treemap records for `sizes` inside `frame`.
///
/// Unlike [`squarify()`][crate::squarify()] this ignores aspect ratios:
/// each recursion step only minimizes the weight imbalance between the two
/// halves of the cut.  `sizes` must be normalized to the frame area.
/// `labels` and `values` are carried into the records untouched and must
/// match `sizes` in length when present.
///
/// Records come back in input order.
pub fn treemap<L, V>(
    sizes: &[f64],
    frame: Rect,
    labels: Option<&[L]>,
    values: Option<&[V]>,
) -> Result<Vec<Record<L, V>>, Error>
where
    L: Clone,
    V: Clone,
{
    record::check_parallel(sizes.len(), labels)?;
    record::check_parallel(sizes.len(), values)?;
    let mut rects = vec![Rect::default(); sizes.len()];
    Treemap.layout(&mut rects, (frame, sizes))?;
    Ok(record::from_rects(rects, labels, values))
}
