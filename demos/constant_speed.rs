use tile_track::{CurveError, Rotation, TileShape, TrackSegment, Vector2};

// RUST_LOG=debug shows the curve construction
fn main() -> Result<(), CurveError> {
    env_logger::init();

    let segment = TrackSegment::with_default_precision(
        (2, 4),
        TileShape::Angle,
        Rotation::Deg0,
        false,
    )?;
    let curve = segment.curve();
    println!("total length (approx): {:.5}", segment.length());

    let steps = 8;
    let mut prev: Option<(Vector2, Vector2)> = None;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let even = segment.get_point(t)?;
        let native = curve.eval_native(t)?;
        match prev {
            Some((last_even, last_native)) => println!(
                "t={:.3}  arc={:?} gap={:.4}  native={:?} gap={:.4}",
                t,
                even,
                even.distance(last_even),
                native,
                native.distance(last_native)
            ),
            None => println!("t={:.3}  arc={:?}  native={:?}", t, even, native),
        }
        prev = Some((even, native));
    }
    Ok(())
}
