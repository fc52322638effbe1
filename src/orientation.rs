use crate::data::Point;
use crate::EPSILON;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// How does the path p -> q -> r turn? Cross products smaller than
  /// [`EPSILON`] in magnitude classify as colinear.
  pub fn new(p: &Point, q: &Point, r: &Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val.abs() < EPSILON {
      CoLinear
    } else if val > 0. {
      ClockWise
    } else {
      CounterClockWise
    }
  }

  pub fn is_colinear(p: &Point, q: &Point, r: &Point) -> bool {
    Orientation::new(p, q, r) == CoLinear
  }

  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
