//! Reads a segment list, sweeps it, and writes every intersection point
//! to `output.txt`.
//!
//! Input comes from the file named by the first argument, or stdin when
//! no argument is given: a count `n` followed by `n` lines of
//! `x1 y1 x2 y2`. A copy of the parsed input lands in `input.txt` for
//! later plotting, and the sweep's wall-clock time is printed to stdout
//! in microseconds.

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::process;
use std::time::Instant;

use planesweep::algorithms::segment_intersections;
use planesweep::data::Segment;

fn main() {
  if let Err(err) = run() {
    eprintln!("error: {}", err);
    process::exit(1);
  }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
  let raw = match env::args().nth(1) {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut buffer = String::new();
      io::stdin().read_to_string(&mut buffer)?;
      buffer
    }
  };
  let segments = planesweep::parse_segments(&raw)?;
  write_input_copy(&segments)?;

  let start = Instant::now();
  let points = segment_intersections(&segments);
  let duration = start.elapsed();

  let mut output = BufWriter::new(File::create("output.txt")?);
  for point in &points {
    writeln!(output, "{} {}", point.x, point.y)?;
  }
  output.flush()?;

  println!(
    "{} intersection points, swept in {} microseconds",
    points.len(),
    duration.as_micros()
  );
  Ok(())
}

fn write_input_copy(segments: &[Segment]) -> io::Result<()> {
  let mut copy = BufWriter::new(File::create("input.txt")?);
  writeln!(copy, "{}", segments.len())?;
  for segment in segments {
    writeln!(
      copy,
      "{} {} {} {}",
      segment.a.x, segment.a.y, segment.b.x, segment.b.y
    )?;
  }
  copy.flush()
}
