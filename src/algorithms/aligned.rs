use super::binary_split;
use super::strip;
use super::Error;
use crate::geometry::Rect;
use crate::imbalance;
use crate::record;
use crate::Layout;
use crate::Record;

fn aligned_layout(
    out: &mut [Rect],
    frame: Rect,
    sizes: &[f64],
    x_align: &[f64],
    y_align: &[f64],
) {
    if sizes.is_empty() {
        return;
    }
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    aligned_recurse(out, frame, sizes, x_align, y_align, &mut order);
}

fn aligned_recurse(
    out: &mut [Rect],
    frame: Rect,
    sizes: &[f64],
    x_align: &[f64],
    y_align: &[f64],
    order: &mut [usize],
) {
    if order.len() == 1 {
        let item = order[0];
        out[item] = strip::fill(&[sizes[item]], frame)[0];
        return;
    }

    // Reorder the whole group by the alignment key of the axis about to be
    // cut, so smaller keys land on the low-coordinate side.  Sorting the
    // index permutation reorders sizes, keys, labels and values jointly.
    let keys = if frame.dx >= frame.dy { x_align } else { y_align };
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));

    let i = imbalance::optimal_split(order.iter().map(|&item| sizes[item]));
    let covered: f64 = order[..i].iter().map(|&item| sizes[item]).sum();
    let (head_frame, tail_frame) = binary_split::split(covered, frame);

    let (head, tail) = order.split_at_mut(i);
    aligned_recurse(out, head_frame, sizes, x_align, y_align, head);
    aligned_recurse(out, tail_frame, sizes, x_align, y_align, tail);
}

/// # Alignment-ordered treemap algorithm
///
/// The weight-balanced [`Treemap`][crate::Treemap] cut, except that before
/// every cut the current group is stably reordered by ascending alignment
/// key along the axis being cut: `x_align` when the frame is wider than
/// tall, `y_align` otherwise.  Items with smaller keys end up on the
/// low-coordinate side, so rectangles sharing a band tend to align across
/// independently computed treemaps that use the same keys.
///
/// The keys only order items; they never affect areas.  The rectangle of
/// size `i` is still written at `rects[i]`, so callers keep identity by
/// position no matter how groups were reordered internally.
///
/// # Example
///
/// ```rust
/// use pavage::Layout as _;
/// use pavage::Rect;
///
/// let frame = Rect::new(0.0, 0.0, 2.0, 2.0);
/// let sizes = [1.0, 1.0, 1.0, 1.0];
/// let x_align = [2.0, 1.0, 4.0, 3.0];
/// let y_align = [1.0, 2.0, 3.0, 4.0];
/// let mut rects = [Rect::default(); 4];
///
/// pavage::AlignedTreemap.layout(
///     &mut rects,
///     (frame, &sizes[..], &x_align[..], &y_align[..]),
/// )?;
///
/// // Item 1 has the smallest x key: it lands on the left edge.
/// assert_eq!(rects[1].x, 0.0);
/// # Ok::<(), pavage::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AlignedTreemap;

impl<'a> Layout<(Rect, &'a [f64], &'a [f64], &'a [f64])> for AlignedTreemap {
    type Metadata = ();
    type Error = Error;

    fn layout(
        &mut self,
        rects: &mut [Rect],
        (frame, sizes, x_align, y_align): (Rect, &'a [f64], &'a [f64], &'a [f64]),
    ) -> Result<Self::Metadata, Self::Error> {
        if rects.len() != sizes.len() {
            return Err(Error::InputLenMismatch {
                expected: sizes.len(),
                actual: rects.len(),
            });
        }
        for keys in [x_align, y_align] {
            if keys.len() != sizes.len() {
                return Err(Error::InputLenMismatch {
                    expected: sizes.len(),
                    actual: keys.len(),
                });
            }
        }
        aligned_layout(rects, frame, sizes, x_align, y_align);
        Ok(())
    }
}

/// Compute alignment-ordered treemap records for `sizes` inside `frame`.
///
/// `x_align` and `y_align` give each size its ordering key along the two
/// axes and must match `sizes` in length.  `sizes` must be normalized to
/// the frame area.  `labels` and `values` are carried into the records
/// untouched and must match `sizes` in length when present.
///
/// Records come back in input order; the alignment keys shape the geometry
/// only.
pub fn aligned_treemap<L, V>(
    sizes: &[f64],
    x_align: &[f64],
    y_align: &[f64],
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
    AlignedTreemap.layout(&mut rects, (frame, sizes, x_align, y_align))?;
    Ok(record::from_rects(rects, labels, values))
}
