mod sweep_scenarios {
  use planesweep::algorithms::intersection::{bentley_ottmann, naive};
  use planesweep::data::{Point, Segment};

  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};
  use std::cmp::Ordering;

  fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
    Segment::new(a.into(), b.into())
  }

  fn sweep(segments: &[Segment]) -> Vec<Point> {
    bentley_ottmann::segment_intersections(segments)
  }

  #[test]
  fn crossing_pair() {
    let segments = [seg((0., 0.), (10., 10.)), seg((0., 10.), (10., 0.))];
    assert_eq!(sweep(&segments), vec![Point::new(5., 5.)]);
  }

  #[test]
  fn parallel_pair() {
    let segments = [seg((0., 0.), (10., 10.)), seg((0., 1.), (10., 11.))];
    assert_eq!(sweep(&segments), vec![]);
  }

  #[test]
  fn concurrent_triple() {
    let segments = [
      seg((0., 0.), (10., 10.)),
      seg((0., 10.), (10., 0.)),
      seg((0., 5.), (10., 5.)),
    ];
    assert_eq!(sweep(&segments), vec![Point::new(5., 5.)]);
  }

  #[test]
  fn shared_endpoint() {
    let segments = [seg((0., 0.), (5., 5.)), seg((5., 5.), (10., 0.))];
    assert_eq!(sweep(&segments), vec![Point::new(5., 5.)]);
  }

  #[test]
  fn two_disjoint_pairs() {
    let segments = [
      seg((0., 0.), (4., 4.)),
      seg((0., 4.), (4., 0.)),
      seg((10., 0.), (14., 4.)),
      seg((10., 4.), (14., 0.)),
    ];
    assert_eq!(sweep(&segments), vec![Point::new(2., 2.), Point::new(12., 2.)]);
  }

  #[test]
  fn colinear_overlap() {
    let segments = [seg((0., 0.), (10., 10.)), seg((5., 5.), (15., 15.))];
    assert_eq!(sweep(&segments), vec![]);
  }

  fn random_segments(rng: &mut SmallRng, n: usize) -> Vec<Segment> {
    (0..n)
      .map(|_| {
        let (x1, y1, x2, y2): (f64, f64, f64, f64) = rng.gen();
        seg((x1 * 100., y1 * 100.), (x2 * 100., y2 * 100.))
      })
      .collect()
  }

  #[test]
  fn matches_the_quadratic_baseline() {
    for seed in 0..4 {
      let mut rng = SmallRng::seed_from_u64(seed);
      let segments = random_segments(&mut rng, 12);
      let fast = sweep(&segments);
      let slow = naive::segment_intersections(&segments);
      assert_eq!(fast.len(), slow.len(), "seed {}", seed);
      for (a, b) in fast.iter().zip(&slow) {
        assert!(a.approx_eq(b), "seed {}: {} != {}", seed, a, b);
      }
    }
  }

  #[test]
  fn emits_in_sweep_order() {
    let mut rng = SmallRng::seed_from_u64(7);
    let segments = random_segments(&mut rng, 20);
    let points = sweep(&segments);
    for pair in points.windows(2) {
      assert_ne!(pair[0].sweep_cmp(&pair[1]), Ordering::Greater);
    }
  }
}
