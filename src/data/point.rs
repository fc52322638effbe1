use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

use crate::EPSILON;

/// A point in the plane. Equality is epsilon-tolerant: two points are
/// equal when both coordinates agree within [`EPSILON`].
#[derive(Debug, Clone, Copy)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  /// The order in which the sweep line visits points: higher points
  /// first, ties broken left-to-right. Coordinates within [`EPSILON`]
  /// count as ties.
  pub fn sweep_cmp(&self, other: &Point) -> Ordering {
    if (self.y - other.y).abs() < EPSILON {
      if (self.x - other.x).abs() < EPSILON {
        Ordering::Equal
      } else if self.x < other.x {
        Ordering::Less
      } else {
        Ordering::Greater
      }
    } else if self.y > other.y {
      Ordering::Less
    } else {
      Ordering::Greater
    }
  }

  pub fn approx_eq(&self, other: &Point) -> bool {
    (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Self) -> bool {
    self.approx_eq(other)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.x, self.y)
  }
}

// Random sampling, for differential tests and benchmarks.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new(rng.gen(), rng.gen())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn higher_points_come_first() {
    let p = Point::new(5., 10.);
    let q = Point::new(0., 0.);
    assert_eq!(p.sweep_cmp(&q), Ordering::Less);
    assert_eq!(q.sweep_cmp(&p), Ordering::Greater);
  }

  #[test]
  fn ties_break_left_to_right() {
    let p = Point::new(2., 5.);
    let q = Point::new(12., 5.);
    assert_eq!(p.sweep_cmp(&q), Ordering::Less);
  }

  #[test]
  fn near_coincident_points_are_equal() {
    let p = Point::new(1., 1.);
    let q = Point::new(1. + 1e-6, 1. - 1e-6);
    assert_eq!(p, q);
    assert_eq!(p.sweep_cmp(&q), Ordering::Equal);
  }

  #[test]
  fn sentinel_is_not_finite() {
    assert!(!Point::new(f64::INFINITY, f64::INFINITY).is_finite());
    assert!(Point::new(0., 0.).is_finite());
  }
}
