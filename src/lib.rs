//! Line segment intersections with a Bentley–Ottmann plane sweep.
//!
//! The crate is organised around three layers:
//!
//! * [`data`] – the plane primitives: [`Point`](data::Point) and
//!   [`Segment`](data::Segment), both with epsilon-tolerant equality.
//! * [`tree`] – a balanced ordered set with a pluggable comparator. The
//!   event queue, the endpoint maps, and the sweep status are all thin
//!   wrappers around it.
//! * [`algorithms`] – the sweep itself
//!   ([`segment_intersections`](algorithms::segment_intersections)) next to
//!   a quadratic baseline used for differential testing.
//!
//! Coordinates are `f64` throughout and every comparison of coordinates
//! tolerates a deviation of [`EPSILON`]. Exact predicates are out of scope.

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
pub mod tree;

pub use crate::intersection::{do_intersect, line_intersection, on_segment, ISegment, Intersects};
pub use crate::orientation::Orientation;
use data::{Point, Segment};

/// Tolerance below which two coordinates are considered equal.
///
/// A single tolerance is applied everywhere: point equality, the sweep
/// order, orientation classification, and the status comparator.
pub const EPSILON: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  MissingSegmentCount,
  InvalidSegmentCount,
  /// Fewer segment lines than the leading count promised.
  TruncatedInput,
  InvalidCoordinate {
    line: usize,
  },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Error::MissingSegmentCount => write!(f, "missing segment count"),
      Error::InvalidSegmentCount => write!(f, "segment count is not a non-negative integer"),
      Error::TruncatedInput => write!(f, "fewer segment lines than the leading count"),
      Error::InvalidCoordinate { line } => {
        write!(f, "line {}: expected four numeric coordinates", line)
      }
    }
  }
}

impl std::error::Error for Error {}

/// Parses the segment list format: a leading count `n` followed by `n`
/// lines of `x1 y1 x2 y2`. Blank lines are skipped; trailing fields on a
/// segment line are ignored.
pub fn parse_segments(input: &str) -> Result<Vec<Segment>, Error> {
  let mut lines = input
    .lines()
    .enumerate()
    .filter(|(_, line)| !line.trim().is_empty());
  let (_, header) = lines.next().ok_or(Error::MissingSegmentCount)?;
  let count: usize = header
    .trim()
    .parse()
    .map_err(|_| Error::InvalidSegmentCount)?;

  let mut segments = Vec::with_capacity(count);
  for _ in 0..count {
    let (idx, line) = lines.next().ok_or(Error::TruncatedInput)?;
    let mut fields = line.split_whitespace();
    let mut coords = [0.0f64; 4];
    for coord in coords.iter_mut() {
      *coord = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or(Error::InvalidCoordinate { line: idx + 1 })?;
    }
    segments.push(Segment::new(
      Point::new(coords[0], coords[1]),
      Point::new(coords[2], coords[3]),
    ));
  }
  Ok(segments)
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err, assert_ok};

  #[test]
  fn parse_two_segments() {
    let segments = assert_ok!(parse_segments("2\n0 0 10 10\n0 10 10 0\n"));
    assert_eq!(segments.len(), 2);
    assert_eq!(
      segments[0],
      Segment::new(Point::new(0., 0.), Point::new(10., 10.))
    );
  }

  #[test]
  fn parse_skips_blank_lines() {
    let segments = assert_ok!(parse_segments("1\n\n0 0 1 1\n\n"));
    assert_eq!(segments.len(), 1);
  }

  #[test]
  fn parse_empty_input() {
    assert_eq!(parse_segments(""), Err(Error::MissingSegmentCount));
  }

  #[test]
  fn parse_bad_count() {
    assert_eq!(parse_segments("two\n"), Err(Error::InvalidSegmentCount));
  }

  #[test]
  fn parse_truncated() {
    assert_eq!(parse_segments("2\n0 0 1 1\n"), Err(Error::TruncatedInput));
  }

  #[test]
  fn parse_non_numeric_coordinate() {
    assert_eq!(
      parse_segments("1\n0 0 one 1\n"),
      Err(Error::InvalidCoordinate { line: 2 })
    );
  }

  #[test]
  fn parse_missing_coordinate() {
    assert_err!(parse_segments("1\n0 0 1\n"));
  }
}
