//! Strip fill: the shared primitive of every treemap engine.
//!
//! A strip places a group of sizes against one edge of a frame.  When the
//! frame is at least as wide as it is tall, the strip is a vertical band on
//! the left whose width is the covered area divided by the frame height;
//! the sizes stack bottom-to-top inside it, each with height proportional
//! to its area.  Otherwise the strip is a horizontal band along the bottom
//! and the roles of the axes swap.

use crate::geometry::Rect;

/// Fill `sizes` as a vertical band on the left of `frame` (`dx >= dy`
/// case).  All produced rectangles share the band width; heights vary.
pub(crate) fn layout_row(sizes: &[f64], frame: Rect) -> Vec<Rect> {
    debug_assert!(!sizes.is_empty());
    let covered: f64 = sizes.iter().sum();
    let width = if frame.dy > 0.0 {
        covered / frame.dy
    } else {
        0.0
    };
    let mut y = frame.y;
    sizes
        .iter()
        .map(|&size| {
            // Zero-width strips hold zero sizes; emit zero-area rectangles
            // rather than dividing by zero.
            let height = if width > 0.0 { size / width } else { 0.0 };
            let rect = Rect::new(frame.x, y, width, height);
            y += height;
            rect
        })
        .collect()
}

/// Fill `sizes` as a horizontal band along the bottom of `frame`
/// (`dx < dy` case).  All produced rectangles share the band height;
/// widths vary.
pub(crate) fn layout_col(sizes: &[f64], frame: Rect) -> Vec<Rect> {
    debug_assert!(!sizes.is_empty());
    let covered: f64 = sizes.iter().sum();
    let height = if frame.dx > 0.0 {
        covered / frame.dx
    } else {
        0.0
    };
    let mut x = frame.x;
    sizes
        .iter()
        .map(|&size| {
            let width = if height > 0.0 { size / height } else { 0.0 };
            let rect = Rect::new(x, frame.y, width, height);
            x += width;
            rect
        })
        .collect()
}

/// Fill `sizes` as a strip against the shorter dimension of `frame`.
pub(crate) fn fill(sizes: &[f64], frame: Rect) -> Vec<Rect> {
    if frame.dx >= frame.dy {
        layout_row(sizes, frame)
    } else {
        layout_col(sizes, frame)
    }
}

/// The part of `frame` left uncovered once the strip holding `sizes` is
/// removed.
pub(crate) fn leftover(sizes: &[f64], frame: Rect) -> Rect {
    let covered: f64 = sizes.iter().sum();
    if frame.dx >= frame.dy {
        let width = if frame.dy > 0.0 {
            covered / frame.dy
        } else {
            0.0
        };
        Rect::new(frame.x + width, frame.y, frame.dx - width, frame.dy)
    } else {
        let height = if frame.dx > 0.0 {
            covered / frame.dx
        } else {
            0.0
        };
        Rect::new(frame.x, frame.y + height, frame.dx, frame.dy - height)
    }
}

/// The worst aspect ratio among the rectangles produced by filling `sizes`
/// into `frame` as one strip.  Always at least 1; degenerate rectangles
/// with a single zero extent contribute infinity.
pub(crate) fn worst_ratio(sizes: &[f64], frame: Rect) -> f64 {
    fill(sizes, frame)
        .iter()
        .map(Rect::aspect_ratio)
        .fold(1.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn row_fill_shares_width_and_stacks_heights() {
        // 12 + 4 = 16 = half the 8x4 frame; band width 16 / 4 = 4.
        let frame = Rect::new(0.0, 0.0, 8.0, 4.0);
        let rects = layout_row(&[12.0, 4.0], frame);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 4.0, 3.0));
        assert_eq!(rects[1], Rect::new(0.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn col_fill_shares_height_and_stacks_widths() {
        let frame = Rect::new(1.0, 2.0, 4.0, 8.0);
        let rects = layout_col(&[12.0, 4.0], frame);
        assert_eq!(rects[0], Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rects[1], Rect::new(4.0, 2.0, 1.0, 4.0));
    }

    #[test]
    fn fill_dispatches_on_the_longer_axis() {
        let wide = Rect::new(0.0, 0.0, 8.0, 4.0);
        let tall = Rect::new(0.0, 0.0, 4.0, 8.0);
        assert_eq!(fill(&[16.0], wide)[0], Rect::new(0.0, 0.0, 4.0, 4.0));
        assert_eq!(fill(&[16.0], tall)[0], Rect::new(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn leftover_complements_the_strip() {
        let frame = Rect::new(0.0, 0.0, 8.0, 4.0);
        assert_eq!(leftover(&[16.0], frame), Rect::new(4.0, 0.0, 4.0, 4.0));

        let tall = Rect::new(0.0, 0.0, 4.0, 8.0);
        assert_eq!(leftover(&[16.0], tall), Rect::new(0.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn strip_and_leftover_conserve_area() {
        let frame = Rect::new(3.0, 7.0, 10.0, 6.0);
        let sizes = [20.0, 10.0, 6.0];
        let placed: f64 = fill(&sizes, frame).iter().map(Rect::area).sum();
        let rest = leftover(&sizes, frame).area();
        assert_abs_diff_eq!(placed + rest, frame.area(), epsilon = 1e-12);
    }

    #[test]
    fn worst_ratio_of_a_square_strip_is_one() {
        let frame = Rect::new(0.0, 0.0, 8.0, 4.0);
        assert_abs_diff_eq!(worst_ratio(&[16.0], frame), 1.0);
    }

    #[test]
    fn worst_ratio_reports_the_most_elongated_rect() {
        // Band width 4, heights 3 and 1: ratios 4/3 and 4.
        let frame = Rect::new(0.0, 0.0, 8.0, 4.0);
        assert_abs_diff_eq!(worst_ratio(&[12.0, 4.0], frame), 4.0);
    }

    #[test]
    fn zero_sizes_produce_zero_area_rects() {
        let frame = Rect::new(0.0, 0.0, 8.0, 4.0);
        let rects = layout_row(&[16.0, 0.0], frame);
        assert_eq!(rects[1].area(), 0.0);
        assert!(rects[1].dy == 0.0);

        let empty = layout_row(&[0.0, 0.0], frame);
        assert!(empty.iter().all(|r| r.area() == 0.0));
    }

    #[test]
    fn zero_extent_frame_degenerates_without_panicking() {
        let flat = Rect::new(0.0, 0.0, 5.0, 0.0);
        let rects = layout_row(&[4.0], flat);
        assert_eq!(rects[0].area(), 0.0);
    }
}
