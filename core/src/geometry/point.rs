use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A sensor location on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Orders points by x only. Equal x compares equal regardless of y, so a
    /// stable sort keeps input order among them.
    pub fn cmp_x(&self, other: &Point) -> Ordering {
        if self.x > other.x {
            Ordering::Greater
        } else if self.x < other.x {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

pub fn distance(p: &Point, q: &Point) -> f64 {
    p.distance(q)
}

/// Writes a coordinate so that whole numbers keep a trailing `.0`.
fn write_coordinate(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        write!(f, "{}Infinity", sign)
    } else {
        write!(f, "{:?}", value)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinate(f, self.x)?;
        f.write_str(",")?;
        write_coordinate(f, self.y)
    }
}
