//! `Point2D`: a plain pair of `f64` coordinates.
//!
//! Arithmetic goes through `nalgebra::Vector2<f64>`; convert with `From`.

use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2D> for Vector2<f64> {
    #[inline]
    fn from(p: Point2D) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Failure to read a point from `"x,y"` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    MissingComma { input: String },
    BadCoordinate { coordinate: String },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingComma { input } => {
                write!(f, "expected point as `x,y`, got `{input}`")
            }
            Self::BadCoordinate { coordinate } => {
                write!(f, "invalid coordinate `{coordinate}`")
            }
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point2D {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (xs, ys) = s.split_once(',').ok_or_else(|| ParsePointError::MissingComma {
            input: s.to_string(),
        })?;
        let coord = |t: &str| {
            let t = t.trim();
            t.parse::<f64>()
                .map_err(|_| ParsePointError::BadCoordinate {
                    coordinate: t.to_string(),
                })
        };
        Ok(Self::new(coord(xs)?, coord(ys)?))
    }
}
