//! Triangles given by three corner points.
//!
//! Model
//! - Corners are stored in slot order `one`, `two`, `three`; no orientation or
//!   non-degeneracy is required (collinear and coincident corners are fine).
//! - The reference point is the centroid, i.e. the convex combination of the
//!   corners with weight 1/3 each.
//!
//! Invariant
//! - `ref_point` is computed in `new` and every other constructor goes through
//!   `new`, so it always equals the centroid of the stored corners.

use crate::point::Point2D;
use crate::shape::Shape;
use nalgebra::Vector2;
use std::fmt;

/// A triangle with a cached centroid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    one: Point2D,
    two: Point2D,
    three: Point2D,
    ref_point: Point2D,
}

impl Triangle {
    /// Triangle with corners `one`, `two`, `three`. Never fails.
    pub fn new(one: Point2D, two: Point2D, three: Point2D) -> Self {
        Self {
            one,
            two,
            three,
            ref_point: centroid(one, two, three),
        }
    }

    #[inline]
    pub fn one(&self) -> Point2D {
        self.one
    }
    #[inline]
    pub fn two(&self) -> Point2D {
        self.two
    }
    #[inline]
    pub fn three(&self) -> Point2D {
        self.three
    }
    #[inline]
    pub fn corners(&self) -> [Point2D; 3] {
        [self.one, self.two, self.three]
    }

    /// Same triangle with the first corner replaced.
    #[must_use]
    pub fn with_one(&self, one: Point2D) -> Self {
        Self::new(one, self.two, self.three)
    }
    /// Same triangle with the second corner replaced.
    #[must_use]
    pub fn with_two(&self, two: Point2D) -> Self {
        Self::new(self.one, two, self.three)
    }
    /// Same triangle with the third corner replaced.
    #[must_use]
    pub fn with_three(&self, three: Point2D) -> Self {
        Self::new(self.one, self.two, three)
    }

    /// Shift every corner by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let t = Vector2::new(dx, dy);
        let [a, b, c] = self.corners().map(|p| Point2D::from(p.to_vec() + t));
        Self::new(a, b, c)
    }
}

impl Default for Triangle {
    /// Corners (0,0), (1,0), (0.5,1).
    fn default() -> Self {
        Self::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.5, 1.0),
        )
    }
}

impl Shape for Triangle {
    #[inline]
    fn ref_point(&self) -> Point2D {
        self.ref_point
    }
    #[inline]
    fn compute_ref_point(&self) -> Point2D {
        centroid(self.one, self.two, self.three)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Triangle")?;
        writeln!(f, "first corner {}", self.one)?;
        writeln!(f, "second corner {}", self.two)?;
        writeln!(f, "third corner {}", self.three)?;
        write!(f, "reference point {}", self.ref_point)
    }
}

/// `((x1+x2+x3)/3, (y1+y2+y3)/3)`; non-finite input propagates.
#[inline]
fn centroid(a: Point2D, b: Point2D, c: Point2D) -> Point2D {
    ((a.to_vec() + b.to_vec() + c.to_vec()) / 3.0).into()
}

#[cfg(test)]
mod tests;
