use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use planesweep::algorithms::intersection::{bentley_ottmann, naive};
use planesweep::data::{Point, Segment};

// Short segments scattered over a 100x100 box; long random chords cross
// almost quadratically often, which buries the sweep's advantage.
fn short_segments<R>(rng: &mut R, n: usize) -> Vec<Segment>
where
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| {
      let (x, y): (f64, f64) = rng.gen();
      let (dx, dy): (f64, f64) = rng.gen();
      let a = Point::new(x * 100., y * 100.);
      let b = Point::new(a.x + (dx - 0.5) * 10., a.y + (dy - 0.5) * 10.);
      Segment::new(a, b)
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(1);
  let small = short_segments(&mut rng, 100);
  let large = short_segments(&mut rng, 1000);

  c.bench_function("bentley_ottmann(1e2)", |b| {
    b.iter(|| bentley_ottmann::segment_intersections(&small))
  });
  c.bench_function("naive(1e2)", |b| {
    b.iter(|| naive::segment_intersections(&small))
  });
  c.bench_function("bentley_ottmann(1e3)", |b| {
    b.iter(|| bentley_ottmann::segment_intersections(&large))
  });
  c.bench_function("naive(1e3)", |b| {
    b.iter(|| naive::segment_intersections(&large))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
