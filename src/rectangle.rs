use std::fmt;

use crate::{Coordinate, RTreeError, Result};

/// An axis-aligned rectangle.
///
/// Rectangles are stored exactly as given: `Rectangle::new` does not swap
/// corners. Use [`Rectangle::validate`] to check that the low corner is
/// component-wise at most the high corner, or [`Rectangle::spanning`] to
/// build a normalized rectangle from two arbitrary points.
#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({}, {}), ({}, {})]",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}

/// Anything that can report a bounding rectangle.
pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl HasEnvelope for Coordinate {
    fn envelope(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x,
            y_max: self.y,
        }
    }
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl<T: HasEnvelope + ?Sized> HasEnvelope for &T {
    fn envelope(&self) -> Rectangle {
        (**self).envelope()
    }
}

// Handle-style payloads: an id carried alongside its rectangle.
impl HasEnvelope for (usize, Rectangle) {
    fn envelope(&self) -> Rectangle {
        self.1
    }
}

impl Rectangle {
    pub fn new(low: Coordinate, high: Coordinate) -> Self {
        Rectangle {
            x_min: low.x,
            y_min: low.y,
            x_max: high.x,
            y_max: high.y,
        }
    }

    /// The smallest rectangle containing both points, in any order.
    pub fn spanning(p1: Coordinate, p2: Coordinate) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    pub fn new_empty() -> Self {
        Rectangle {
            x_min: f64::NAN,
            y_min: f64::NAN,
            x_max: f64::NAN,
            y_max: f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.y_min.is_nan() || self.x_max.is_nan() || self.y_max.is_nan()
    }

    pub fn low(&self) -> Coordinate {
        Coordinate::new(self.x_min, self.y_min)
    }

    pub fn high(&self) -> Coordinate {
        Coordinate::new(self.x_max, self.y_max)
    }

    pub fn of<T: HasEnvelope>(items: &[T]) -> Self {
        items.iter().fold(Rectangle::new_empty(), |mut s, r| {
            s.expand(r.envelope());
            s
        })
    }

    /// Ok if no coordinate is NaN and `low <= high` on both axes.
    pub fn validate(&self) -> Result<()> {
        // NaN fails both comparisons.
        if self.x_min <= self.x_max && self.y_min <= self.y_max {
            Ok(())
        } else {
            Err(RTreeError::InvalidGeometry { rect: *self })
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.x_max + self.x_min) / 2.,
            y: (self.y_max + self.y_min) / 2.,
        }
    }

    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min).abs()
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Overlap test, boundaries included.
    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        !(self.x_max < other.x_min
            || self.x_min > other.x_max
            || self.y_max < other.y_min
            || self.y_min > other.y_max)
    }

    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    /// The smallest rectangle covering both `self` and `item`.
    pub fn merge<T: HasEnvelope>(&self, item: T) -> Self {
        let rect = item.envelope();
        Rectangle {
            x_min: self.x_min.min(rect.x_min),
            y_min: self.y_min.min(rect.y_min),
            x_max: self.x_max.max(rect.x_max),
            y_max: self.y_max.max(rect.y_max),
        }
    }

    pub fn expand<T: HasEnvelope>(&mut self, item: T) {
        let rect = item.envelope();
        self.x_min = self.x_min.min(rect.x_min);
        self.y_min = self.y_min.min(rect.y_min);
        self.x_max = self.x_max.max(rect.x_max);
        self.y_max = self.y_max.max(rect.y_max);
    }

    /// How much `merge(item)` would grow the area.
    pub fn enlargement<T: HasEnvelope>(&self, item: T) -> f64 {
        self.merge(item).area() - self.area()
    }

    /// Pushes every side outward by `pad`.
    pub fn buffered(&self, pad: f64) -> Self {
        Rectangle {
            x_min: self.x_min - pad,
            y_min: self.y_min - pad,
            x_max: self.x_max + pad,
            y_max: self.y_max + pad,
        }
    }
}
