//! Weight-imbalance metrics for binary splits of an ordered size list.

use itertools::Itertools as _;

use crate::Error;

/// Compute the weight imbalance of splitting `sizes` into its first `i`
/// elements and the rest: the absolute difference between the two group
/// sums.
///
/// The boundary splits `i == 0` and `i == len` leave one group empty and
/// are scored as the total sum, the worst possible imbalance.
///
/// # Errors
///
/// Returns [`Error::SplitIndexOutOfRange`] if `i` is past the end of the
/// list.  This is the only defensive check of the crate; indices produced
/// by [`optimal_split`] are always in range.
///
/// # Example
///
/// ```rust
/// let imb = pavage::imbalance::weight_imbalance([4.0, 1.0, 1.0], 1)?;
/// assert_eq!(imb, 2.0);
/// # Ok::<(), pavage::Error>(())
/// ```
pub fn weight_imbalance<I>(sizes: I, i: usize) -> Result<f64, Error>
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: ExactSizeIterator,
{
    let sizes = sizes.into_iter();
    let len = sizes.len();
    if i > len {
        return Err(Error::SplitIndexOutOfRange { index: i, len });
    }
    let mut head = 0.0;
    let mut tail = 0.0;
    for (j, size) in sizes.enumerate() {
        if j < i {
            head += size;
        } else {
            tail += size;
        }
    }
    if i == 0 || i == len {
        Ok(head + tail)
    } else {
        Ok((head - tail).abs())
    }
}

/// Find the split index that minimizes the weight imbalance between the
/// two resulting groups.
///
/// The scan walks split indices left to right and stops at the first local
/// minimum: for non-negative sizes the imbalance decreases while the head
/// group is lighter than the tail and increases afterwards, so the first
/// minimum is the global one.
///
/// For two or more sizes the result is always in `[1, len - 1]`, so both
/// groups are non-empty.
///
/// # Example
///
/// ```rust
/// let i = pavage::imbalance::optimal_split([2.0, 1.0, 1.0, 2.0]);
/// assert_eq!(i, 2);
/// ```
pub fn optimal_split<I>(sizes: I) -> usize
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: ExactSizeIterator + Clone,
{
    let sizes = sizes.into_iter();
    let len = sizes.len();
    if len < 2 {
        return 0;
    }
    let total: f64 = sizes.clone().sum();
    let mut head = 0.0;
    let stop = sizes
        .take(len - 1)
        .map(|size| {
            head += size;
            (2.0 * head - total).abs()
        })
        .tuple_windows()
        .position(|(prev, next)| prev < next);
    match stop {
        Some(i) => i + 1,
        None => len - 1,
    }
}
