//! The `Shape` capability set.

use crate::point::Point2D;
use std::fmt;

/// A plane shape with a designated reference point.
///
/// Implementors store the reference point at construction time and must keep
/// `ref_point() == compute_ref_point()` for every value they hand out.
pub trait Shape: fmt::Display {
    /// Stored reference point.
    fn ref_point(&self) -> Point2D;

    /// Recompute the reference point from the shape's geometry.
    fn compute_ref_point(&self) -> Point2D;

    /// Human-readable multi-line description.
    fn describe(&self) -> String {
        self.to_string()
    }
}
