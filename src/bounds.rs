//! Axis-aligned bounds over a rendered point sequence.

use crate::turtle::PathPoint;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Extents narrower than this are considered degenerate.
pub const MIN_EXTENT: f64 = 0.1;

/// Padding added to each side of a degenerate extent.
pub const DEGENERATE_PADDING: f64 = 0.05;

/// Rectangle in curve space. `y` grows upward; flipping is the renderer's concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Lower-left corner.
    pub fn min(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Upper-right corner.
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.x + self.width, self.y + self.height)
    }

    /// Midpoint of the box.
    pub fn center(&self) -> DVec2 {
        self.min() + self.size() * 0.5
    }

    /// Width and height as a vector.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Smallest box around every [`PathPoint::Point`] in `points`.
    ///
    /// Breaks are skipped. A dimension narrower than [`MIN_EXTENT`] is widened
    /// by [`DEGENERATE_PADDING`] on both sides so the box never has zero area.
    /// An input with no points at all yields a padded box around the origin.
    pub fn compute(points: &[PathPoint]) -> Self {
        let (mut min, mut max) = points
            .iter()
            .filter_map(PathPoint::position)
            .fold(None, |acc: Option<(DVec2, DVec2)>, p| match acc {
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
                None => Some((p, p)),
            })
            .unwrap_or((DVec2::ZERO, DVec2::ZERO));

        if (max.x - min.x).abs() < MIN_EXTENT {
            min.x -= DEGENERATE_PADDING;
            max.x += DEGENERATE_PADDING;
        }
        if (max.y - min.y).abs() < MIN_EXTENT {
            min.y -= DEGENERATE_PADDING;
            max.y += DEGENERATE_PADDING;
        }

        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_point_is_padded_on_both_axes() {
        let b = Bounds::compute(&[PathPoint::Point(DVec2::new(2.0, -3.0))]);
        assert_abs_diff_eq!(b.x, 1.95, epsilon = 1e-12);
        assert_abs_diff_eq!(b.y, -3.05, epsilon = 1e-12);
        assert_abs_diff_eq!(b.width, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(b.height, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(b.center().x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.center().y, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn breaks_are_ignored() {
        let points = [
            PathPoint::Point(DVec2::ZERO),
            PathPoint::Break,
            PathPoint::Point(DVec2::new(4.0, 2.0)),
        ];
        let b = Bounds::compute(&points);
        assert_eq!(b, Bounds { x: 0.0, y: 0.0, width: 4.0, height: 2.0 });
        assert_eq!(b.max(), DVec2::new(4.0, 2.0));
    }

    #[test]
    fn horizontal_line_only_pads_height() {
        let points = [
            PathPoint::Point(DVec2::ZERO),
            PathPoint::Point(DVec2::new(3.0, 0.0)),
        ];
        let b = Bounds::compute(&points);
        assert_eq!(b.x, 0.0);
        assert_eq!(b.width, 3.0);
        assert_abs_diff_eq!(b.y, -0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(b.height, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_centers_on_origin() {
        let b = Bounds::compute(&[PathPoint::Break]);
        assert_abs_diff_eq!(b.center().x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.center().y, 0.0, epsilon = 1e-12);
        assert!(b.width >= MIN_EXTENT - 1e-12);
    }
}
