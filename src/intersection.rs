use crate::data::{Point, Segment};
use crate::orientation::Orientation;

pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}

/// Does `q` lie inside the bounding box spanned by `p` and `r`?
pub fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
  q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// The four-orientation segment intersection test, including the
/// colinear touch-and-overlap special cases.
pub fn do_intersect(s1: &Segment, s2: &Segment) -> bool {
  let (p1, q1) = (&s1.a, &s1.b);
  let (p2, q2) = (&s2.a, &s2.b);

  let o1 = Orientation::new(p1, q1, p2);
  let o2 = Orientation::new(p1, q1, q2);
  let o3 = Orientation::new(p2, q2, p1);
  let o4 = Orientation::new(p2, q2, q1);

  if o1 != o2 && o3 != o4 {
    return true;
  }

  (o1 == Orientation::CoLinear && on_segment(p1, p2, q1))
    || (o2 == Orientation::CoLinear && on_segment(p1, q2, q1))
    || (o3 == Orientation::CoLinear && on_segment(p2, p1, q2))
    || (o4 == Orientation::CoLinear && on_segment(p2, q1, q2))
}

/// Where do the supporting lines of `s1` and `s2` meet?
///
/// Solved with Cramer's rule; parallel lines have a zero determinant and
/// answer with the `(inf, inf)` sentinel, so callers must pair this with
/// [`do_intersect`] to tell "parallel" apart from "lines meet but the
/// segments do not".
pub fn line_intersection(s1: &Segment, s2: &Segment) -> Point {
  // s1 as a1*x + b1*y = c1, s2 likewise.
  let a1 = s1.b.y - s1.a.y;
  let b1 = s1.a.x - s1.b.x;
  let c1 = a1 * s1.a.x + b1 * s1.a.y;

  let a2 = s2.b.y - s2.a.y;
  let b2 = s2.a.x - s2.b.x;
  let c2 = a2 * s2.a.x + b2 * s2.a.y;

  let determinant = a1 * b2 - a2 * b1;
  if determinant == 0. {
    Point::new(f64::INFINITY, f64::INFINITY)
  } else {
    Point::new(
      (b2 * c1 - b1 * c2) / determinant,
      (a1 * c2 - a2 * c1) / determinant,
    )
  }
}

/// How two segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ISegment {
  /// The segments touch in a single point and are not parallel.
  Crossing(Point),
  /// The segments are colinear and share the given sub-segment, which
  /// may be zero-length when they only touch at an endpoint.
  Overlap(Segment),
}

impl<'a> Intersects for &'a Segment {
  type Result = ISegment;

  fn intersect(self, other: &'a Segment) -> Option<ISegment> {
    if !do_intersect(self, other) {
      return None;
    }
    let q = line_intersection(self, other);
    if q.is_finite() {
      Some(ISegment::Crossing(q))
    } else {
      Some(ISegment::Overlap(overlap_range(self, other)))
    }
  }
}

// The endpoints of two colinear touching segments sorted along their
// common line; (x, y) lexicographic order follows the line for every
// direction, vertical included.
fn overlap_range(s1: &Segment, s2: &Segment) -> Segment {
  let lex = |p: &Point, q: &Point| (p.x, p.y) < (q.x, q.y);
  let ends = |s: &Segment| {
    if lex(&s.a, &s.b) {
      (s.a, s.b)
    } else {
      (s.b, s.a)
    }
  };
  let (lo1, hi1) = ends(s1);
  let (lo2, hi2) = ends(s2);
  let lo = if lex(&lo1, &lo2) { lo2 } else { lo1 };
  let hi = if lex(&hi1, &hi2) { hi1 } else { hi2 };
  Segment::new(lo, hi)
}
