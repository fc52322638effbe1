use ordered_float::OrderedFloat;

use crate::data::{Point, Segment};
use crate::intersection::{ISegment, Intersects};

/// $O(n^2)$ Finds all distinct segment intersection points.
///
/// The output contract matches the sweep: points in sweep order, each
/// distinct point emitted once. Colinear segments only count when they
/// touch in a single point; proper overlaps have no single intersection
/// point to report. Zero-length segments are skipped.
pub fn segment_intersections(segments: &[Segment]) -> Vec<Point> {
  let mut points = Vec::new();
  for (idx, s1) in segments.iter().enumerate() {
    if s1.a == s1.b {
      continue;
    }
    for s2 in &segments[idx + 1..] {
      if s2.a == s2.b {
        continue;
      }
      match s1.intersect(s2) {
        Some(ISegment::Crossing(q)) => points.push(q),
        Some(ISegment::Overlap(range)) if range.a == range.b => points.push(range.a),
        _ => (),
      }
    }
  }
  points.sort_by_key(|p| (OrderedFloat(-p.y), OrderedFloat(p.x)));
  points.dedup_by(|a, b| a.approx_eq(b));
  points
}
