use plotters::prelude::*;

use tile_track::{Rotation, TileShape, TrackSegment};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // corner to corner across the diagonal, then straight up
    let layout = [
        ((0, 0), TileShape::Angle, Rotation::Deg0, false),
        ((1, 1), TileShape::Angle, Rotation::Deg180, true),
        ((2, 2), TileShape::Angle, Rotation::Deg0, false),
        ((3, 3), TileShape::Straight, Rotation::Deg0, false),
    ];
    let track = layout
        .iter()
        .map(|&(cell, shape, rotation, reversed)| {
            TrackSegment::new(cell, shape, rotation, reversed, 30)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let root = BitMapBackend::new("track_layout.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Tile track", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-0.5f64..4.5f64, -0.5f64..4.5f64)?;

    chart.configure_mesh().draw()?;

    for segment in &track {
        let curve = segment.curve();

        // the curve itself
        chart.draw_series(LineSeries::new(
            curve.samples(100).map(|p| (p.x(), p.y())),
            &RED,
        ))?;

        // evenly spaced by arc length, the way a train would pass them
        chart.draw_series(
            curve
                .samples(curve.precision())
                .map(|p| Circle::new((p.x(), p.y()), 3, RED.filled())),
        )?;

        // control points
        chart.draw_series(
            segment
                .handles()
                .iter()
                .map(|p| Circle::new((p.x(), p.y()), 5, &BLUE)),
        )?;
    }

    root.present()?;
    Ok(())
}
