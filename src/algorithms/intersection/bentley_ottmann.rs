//! Bentley–Ottmann sweep-line intersection reporting.
//!
//! A conceptual horizontal line sweeps the plane top to bottom, pausing
//! at event points: segment endpoints and previously discovered
//! crossings. Three ordered structures drive the sweep:
//!
//! 1. **Event queue** – segment endpoints seeded up front, discovered
//!    crossings injected as the sweep finds them, all visited in sweep
//!    order (higher first, ties left to right).
//! 2. **Status** – the segments currently crossing the sweep line,
//!    ordered by their x-coordinate at the sweep height. The height is a
//!    shared cell read by the status comparator, so the ordering stays
//!    valid only when the cell moves between structurally consistent
//!    moments: segments incident to an event leave the status, the
//!    height drops just below the event, and the incident segments
//!    re-enter in their post-event order.
//! 3. **Endpoint maps** – for every event point, the segments having it
//!    as their upper endpoint, their lower endpoint, or in their
//!    interior (the latter filled in as crossings are discovered). An
//!    event with at least two distinct incident segments is an
//!    intersection point.
//!
//! Each event does logarithmic work per structure, `O((n + k) log n)`
//! overall for `n` segments with `k` crossings. Coordinates are `f64`
//! and every comparison tolerates [`EPSILON`]; exact arithmetic is out
//! of scope. Crossings are validated against the actual segments before
//! they are scheduled, so the queue only ever holds genuine future
//! events.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use crate::data::{Point, Segment};
use crate::intersection::{ISegment, Intersects};
use crate::tree::{AvlTree, Comparator};
use crate::EPSILON;

/// $O((n + k) \log n)$ Finds all distinct intersection points of a set
/// of segments, in sweep order.
///
/// A point where two or more segments meet (crossing interiors, a
/// shared endpoint, or an endpoint on another segment discovered by the
/// sweep) is reported exactly once, no matter how many segments pass
/// through it.
pub fn segment_intersections(segments: &[Segment]) -> Vec<Point> {
  Sweep::new(segments).run()
}

///////////////////////////////////////////////////////////////////////////////
// Event queue

/// Orders points the way the sweep line visits them.
#[derive(Debug, Default, Clone, Copy)]
struct SweepOrder;

impl Comparator<Point> for SweepOrder {
  fn cmp(&self, a: &Point, b: &Point) -> Ordering {
    a.sweep_cmp(b)
  }
}

#[derive(Default)]
struct EventQueue {
  points: AvlTree<Point, SweepOrder>,
}

impl EventQueue {
  /// Idempotent: scheduling a point twice keeps a single event.
  fn insert(&mut self, point: Point) {
    self.points.insert(point);
  }

  fn top(&self) -> Option<&Point> {
    self.points.min()
  }

  fn pop(&mut self) -> Option<Point> {
    self.points.pop_min()
  }

  fn is_empty(&self) -> bool {
    self.points.is_empty()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Endpoint maps

/// The segments sharing one event point as their upper endpoint, lower
/// endpoint, or interior point, depending on which map the group lives
/// in. The list may hold duplicates; the status dedups on insertion.
struct EndpointGroup {
  key: Point,
  segments: Vec<Segment>,
}

#[derive(Debug, Default, Clone, Copy)]
struct GroupOrder;

impl Comparator<EndpointGroup> for GroupOrder {
  fn cmp(&self, a: &EndpointGroup, b: &EndpointGroup) -> Ordering {
    a.key.sweep_cmp(&b.key)
  }
}

#[derive(Default)]
struct EndpointMap {
  groups: AvlTree<EndpointGroup, GroupOrder>,
}

impl EndpointMap {
  fn upsert(&mut self, key: Point, segment: Segment) {
    match self.groups.search_mut_by(|group| group.key.sweep_cmp(&key)) {
      Some(group) => group.segments.push(segment),
      None => {
        self.groups.insert(EndpointGroup {
          key,
          segments: vec![segment],
        });
      }
    }
  }

  fn segments(&self, key: &Point) -> Vec<Segment> {
    self
      .groups
      .search_by(|group| group.key.sweep_cmp(key))
      .map(|group| group.segments.clone())
      .unwrap_or_default()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Status

/// Orders status segments by x-coordinate at the current sweep height,
/// read from the shared cell. Equality is segment equality; distinct
/// segments tying exactly on x (exactly collinear ones, for instance)
/// fall back to a fixed endpoint order, so the comparator is
/// antisymmetric for every pair of stored segments.
struct StatusOrder {
  sweep: Rc<Cell<f64>>,
}

impl Comparator<Segment> for StatusOrder {
  fn cmp(&self, a: &Segment, b: &Segment) -> Ordering {
    if a == b {
      return Ordering::Equal;
    }
    let k = self.sweep.get();
    let (xa, xb) = (a.x_at(k), b.x_at(k));
    if xa < xb {
      Ordering::Less
    } else if xb < xa {
      Ordering::Greater
    } else {
      endpoint_order(a, b)
    }
  }
}

// Sweep-independent order on segments whose x at the sweep height ties
// bit-for-bit. Answers Equal only for coordinate-identical endpoint
// pairs, which segment equality has already caught.
fn endpoint_order(a: &Segment, b: &Segment) -> Ordering {
  fn ends(s: &Segment) -> (Point, Point) {
    if (s.a.x, s.a.y) <= (s.b.x, s.b.y) {
      (s.a, s.b)
    } else {
      (s.b, s.a)
    }
  }
  let (a_lo, a_hi) = ends(a);
  let (b_lo, b_hi) = ends(b);
  a_lo
    .x
    .total_cmp(&b_lo.x)
    .then(a_lo.y.total_cmp(&b_lo.y))
    .then(a_hi.x.total_cmp(&b_hi.x))
    .then(a_hi.y.total_cmp(&b_hi.y))
}

/// The segments currently crossing the sweep line, left to right.
struct Status {
  segments: AvlTree<Segment, StatusOrder>,
}

impl Status {
  fn new(sweep: Rc<Cell<f64>>) -> Status {
    Status {
      segments: AvlTree::with_comparator(StatusOrder { sweep }),
    }
  }

  fn insert(&mut self, segment: Segment) {
    self.segments.insert(segment);
  }

  fn difference(&mut self, other: &Status) {
    self.segments.difference(&other.segments);
  }

  fn len(&self) -> usize {
    self.segments.len()
  }

  fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }

  fn leftmost(&self) -> Option<Segment> {
    self.segments.min().copied()
  }

  fn rightmost(&self) -> Option<Segment> {
    self.segments.max().copied()
  }

  /// The segment immediately left of `p` at `p`'s own height.
  fn left_neighbor_of_point(&self, p: &Point) -> Option<Segment> {
    self
      .segments
      .prev_by(|segment| {
        if segment.x_at(p.y) < p.x {
          Ordering::Less
        } else {
          Ordering::Greater
        }
      })
      .copied()
  }

  fn right_neighbor_of_point(&self, p: &Point) -> Option<Segment> {
    self
      .segments
      .next_by(|segment| {
        if segment.x_at(p.y) > p.x {
          Ordering::Greater
        } else {
          Ordering::Less
        }
      })
      .copied()
  }

  /// The nearest segment strictly left of `segment` at the current
  /// sweep height, whether or not `segment` itself is in the status.
  /// Segments tying `segment`'s x exactly are not neighbors.
  fn left_neighbor_of_segment(&self, segment: &Segment) -> Option<Segment> {
    let k = self.segments.comparator().sweep.get();
    let x = segment.x_at(k);
    self
      .segments
      .prev_by(|stored| {
        if stored.x_at(k) < x {
          Ordering::Less
        } else {
          Ordering::Greater
        }
      })
      .copied()
  }

  fn right_neighbor_of_segment(&self, segment: &Segment) -> Option<Segment> {
    let k = self.segments.comparator().sweep.get();
    let x = segment.x_at(k);
    self
      .segments
      .next_by(|stored| {
        if stored.x_at(k) > x {
          Ordering::Greater
        } else {
          Ordering::Less
        }
      })
      .copied()
  }
}

///////////////////////////////////////////////////////////////////////////////
// The sweep

struct Sweep {
  queue: EventQueue,
  /// Segments keyed by their upper endpoint.
  uppers: EndpointMap,
  /// Segments keyed by their lower endpoint.
  lowers: EndpointMap,
  /// Segments keyed by discovered interior crossing points.
  crossings: EndpointMap,
  status: Status,
  sweep: Rc<Cell<f64>>,
  reported: AvlTree<Point, SweepOrder>,
  results: Vec<Point>,
}

impl Sweep {
  fn new(segments: &[Segment]) -> Sweep {
    let sweep = Rc::new(Cell::new(f64::MAX));
    let mut queue = EventQueue::default();
    let mut uppers = EndpointMap::default();
    let mut lowers = EndpointMap::default();
    for &segment in segments {
      uppers.upsert(segment.upper(), segment);
      lowers.upsert(segment.lower(), segment);
      queue.insert(segment.a);
      queue.insert(segment.b);
    }
    Sweep {
      queue,
      uppers,
      lowers,
      crossings: EndpointMap::default(),
      status: Status::new(Rc::clone(&sweep)),
      sweep,
      reported: AvlTree::new(),
      results: Vec::new(),
    }
  }

  fn run(mut self) -> Vec<Point> {
    while !self.queue.is_empty() {
      let point = match self.queue.top() {
        Some(&point) => point,
        None => break,
      };
      self.queue.pop();
      self.handle_event(point);
    }
    self.results
  }

  fn handle_event(&mut self, p: Point) {
    let uppers = self.uppers.segments(&p);
    let lowers = self.lowers.segments(&p);
    let crossings = self.crossings.segments(&p);

    // p is an intersection point when at least two distinct segments
    // meet it. The ephemeral status dedups the duplicate entries the
    // crossing lists accumulate.
    let mut incident = Status::new(Rc::clone(&self.sweep));
    for &segment in uppers.iter().chain(&lowers).chain(&crossings) {
      incident.insert(segment);
    }
    if incident.len() >= 2 && self.reported.search(&p).is_none() {
      self.reported.insert(p);
      self.results.push(p);
    }

    // Segments ending at or passing through p leave the status while
    // the ordering valid just above p still holds.
    let mut leaving = Status::new(Rc::clone(&self.sweep));
    for &segment in lowers.iter().chain(&crossings) {
      leaving.insert(segment);
    }
    self.status.difference(&leaving);

    // Drop the sweep line just below p; segments crossing p re-enter in
    // their post-event order, which may swap them.
    self.sweep.set(p.y - 2. * EPSILON);

    for &segment in uppers.iter().chain(&crossings) {
      self.status.insert(segment);
    }

    let mut entering = Status::new(Rc::clone(&self.sweep));
    for &segment in uppers.iter().chain(&crossings) {
      entering.insert(segment);
    }
    match (entering.leftmost(), entering.rightmost()) {
      (Some(leftmost), Some(rightmost)) => {
        let left = self.status.left_neighbor_of_segment(&leftmost);
        let right = self.status.right_neighbor_of_segment(&rightmost);
        self.find_new_event(left, Some(leftmost), p);
        self.find_new_event(right, Some(rightmost), p);
      }
      // Every incident segment terminated at p; its former neighbors
      // just became adjacent.
      _ => {
        let left = self.status.left_neighbor_of_point(&p);
        let right = self.status.right_neighbor_of_point(&p);
        self.find_new_event(left, right, p);
      }
    }
  }

  /// Schedules the crossing of `s1` and `s2` when there is one and the
  /// sweep has not passed it yet.
  fn find_new_event(&mut self, s1: Option<Segment>, s2: Option<Segment>, p: Point) {
    let (s1, s2) = match (s1, s2) {
      (Some(s1), Some(s2)) => (s1, s2),
      _ => return,
    };
    let q = match (&s1).intersect(&s2) {
      Some(ISegment::Crossing(q)) => q,
      // Disjoint, or a colinear contact with no single crossing point.
      _ => return,
    };
    let k = self.sweep.get();
    if q.y < p.y || ((q.y - k).abs() < EPSILON && q.x > p.x) {
      self.queue.insert(q);
      self.crossings.upsert(q, s1);
      self.crossings.upsert(q, s2);
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
