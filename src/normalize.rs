use num_traits::ToPrimitive;

/// Normalize a list of values so that they sum to `dx * dy`.
///
/// Layout algorithms require their input sizes to cover the area of the
/// frame exactly; this is the scaling step that establishes the invariant.
/// Accepts any numeric type convertible to `f64`.
///
/// Normalizing an already-normalized list is the identity (within
/// floating-point tolerance).
///
/// # Example
///
/// ```rust
/// let sizes = pavage::normalize_sizes(&[6u32, 2, 2, 2], 4.0, 3.0);
/// assert_eq!(sizes, vec![6.0, 2.0, 2.0, 2.0]);
/// ```
pub fn normalize_sizes<T>(sizes: &[T], dx: f64, dy: f64) -> Vec<f64>
where
    T: ToPrimitive,
{
    let sizes: Vec<f64> = sizes
        .iter()
        .map(|size| size.to_f64().unwrap()) // Will not panic for the primitive numeric types.
        .collect();
    let total_size: f64 = sizes.iter().sum();
    let total_area = dx * dy;
    sizes
        .into_iter()
        .map(|size| size * total_area / total_size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sums_to_frame_area() {
        let sizes = normalize_sizes(&[500, 433, 78, 25, 25, 7], 700.0, 433.0);
        let total: f64 = sizes.iter().sum();
        assert_abs_diff_eq!(total, 700.0 * 433.0, epsilon = 1e-6);
    }

    #[test]
    fn preserves_proportions() {
        let sizes = normalize_sizes(&[3.0, 1.0], 10.0, 2.0);
        assert_abs_diff_eq!(sizes[0], 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sizes[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let once = normalize_sizes(&[5.0, 3.0, 2.0], 5.0, 2.0);
        let twice = normalize_sizes(&once, 5.0, 2.0);
        for (a, b) in once.iter().zip(&twice) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }
}
