use super::strip;
use super::Error;
use crate::geometry::Rect;
use crate::record;
use crate::Layout;
use crate::Record;

fn squarify_layout(out: &mut [Rect], mut frame: Rect, sizes: &[f64]) {
    let mut base = 0;
    while base < sizes.len() {
        let rest = &sizes[base..];

        // Grow the strip while adding one more size does not make its worst
        // aspect ratio strictly worse; ties keep growing.
        let mut i = 1;
        let mut prev = strip::worst_ratio(&rest[..1], frame);
        while i < rest.len() {
            let next = strip::worst_ratio(&rest[..=i], frame);
            if prev < next {
                break;
            }
            prev = next;
            i += 1;
        }
        tracing::trace!(base, count = i, worst_ratio = prev, "strip");

        out[base..base + i].copy_from_slice(&strip::fill(&rest[..i], frame));
        frame = strip::leftover(&rest[..i], frame);
        base += i;
    }
}

/// # Squarified treemap algorithm
///
/// Lays sizes out strip by strip, greedily growing each strip as long as
/// that keeps its worst aspect ratio from degrading, which trades strict
/// placement order for rectangles close to square.
///
/// Sizes are expected in descending order and normalized to the frame area;
/// neither is verified, and inputs violating them produce distorted but
/// well-formed layouts.
///
/// # Example
///
/// ```rust
/// use pavage::Layout as _;
/// use pavage::Rect;
///
/// let frame = Rect::new(0.0, 0.0, 6.0, 4.0);
/// let sizes = [12.0, 8.0, 4.0];
/// let mut rects = [Rect::default(); 3];
///
/// pavage::Squarify::default().layout(&mut rects, (frame, &sizes[..]))?;
/// # Ok::<(), pavage::Error>(())
/// ```
///
/// # Reference
///
/// Bruls, Mark; Huizing, Kees; van Wijk, Jarke J., 2000. Squarified
/// treemaps. *Data Visualization 2000*, 33–42.
/// <doi:10.1007/978-3-7091-6783-0_4>.
#[derive(Clone, Copy, Debug, Default)]
pub struct Squarify {
    /// Whether to pad every rectangle afterwards to leave a visible gutter
    /// between neighbors.  See [`Rect::pad`].
    pub pad: bool,
}

impl<'a> Layout<(Rect, &'a [f64])> for Squarify {
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
        squarify_layout(rects, frame, sizes);
        if self.pad {
            for rect in rects.iter_mut() {
                rect.pad();
            }
        }
        Ok(())
    }
}

/// Compute squarified treemap records for `sizes` inside `frame`.
///
/// `sizes` must be sorted in descending order and normalized so they sum to
/// the frame area (see [`normalize_sizes`][crate::normalize_sizes]); both
/// are the caller's responsibility.  `labels` and `values` are carried into
/// the records untouched and must match `sizes` in length when present.
///
/// Records come back in input order.
///
/// # Example
///
/// ```rust
/// use pavage::Rect;
///
/// let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let sizes = pavage::normalize_sizes(&[500, 300, 200], frame.dx, frame.dy);
/// let records = pavage::squarify(&sizes, frame, Some(&["db", "logs", "misc"]), None::<&[u64]>)?;
///
/// assert_eq!(records.len(), 3);
/// assert_eq!(records[0].label, Some("db"));
/// # Ok::<(), pavage::Error>(())
/// ```
pub fn squarify<L, V>(
    sizes: &[f64],
    frame: Rect,
    labels: Option<&[L]>,
    values: Option<&[V]>,
) -> Result<Vec<Record<L, V>>, Error>
where
    L: Clone,
    V: Clone,
{
    squarify_records(Squarify { pad: false }, sizes, frame, labels, values)
}

/// Compute squarified treemap records with a gutter between rectangles.
///
/// Same as [`squarify()`], with every rectangle shrunk afterwards on the
/// axes large enough to pad.  See [`Rect::pad`].
pub fn padded_squarify<L, V>(
    sizes: &[f64],
    frame: Rect,
    labels: Option<&[L]>,
    values: Option<&[V]>,
) -> Result<Vec<Record<L, V>>, Error>
where
    L: Clone,
    V: Clone,
{
    squarify_records(Squarify { pad: true }, sizes, frame, labels, values)
}

fn squarify_records<L, V>(
    mut algorithm: Squarify,
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
    algorithm.layout(&mut rects, (frame, sizes))?;
    Ok(record::from_rects(rects, labels, values))
}
