//! Plane shapes with a designated reference point.
//!
//! Every shape implements [`Shape`]: it stores a reference point and knows how
//! to recompute it from its own geometry. The only concrete shape so far is
//! [`Triangle`], whose reference point is the centroid of its corners.
//!
//! API Policy
//! - Shapes are immutable values. Changing a corner means building a new shape,
//!   so the stored reference point never goes stale.
//! - The library does not log and has no I/O; the `shapes` binary in
//!   `crates/cli` owns both.

pub mod point;
pub mod rand;
pub mod shape;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{ParsePointError, Point2D};
pub use shape::Shape;
pub use triangle::Triangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{ParsePointError, Point2D};
    pub use crate::rand::{draw_triangle, draw_triangles, ReplayToken, SampleCfg};
    pub use crate::shape::Shape;
    pub use crate::triangle::Triangle;
    pub use nalgebra::Vector2 as Vec2;
}
