// Route rendering with plotters

use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::DeliveryRoute;

/// Render the route as a PNG: longitude on the x axis, latitude on the y axis
///
/// The start is drawn in red, delivery stops in green, and the legs as a blue polyline.
/// No text is drawn, so no system fonts are needed.
pub fn plot_route<P: AsRef<Path>>(output_path: P, route: &DeliveryRoute) -> Result<()> {
    let (min_x, max_x, min_y, max_y) = plot_bounds(route);

    let root = BitMapBackend::new(output_path.as_ref(), (1000, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)
        .map_err(render_error)?;

    let path_points: Vec<(f64, f64)> = route
        .iter()
        .map(|loc| (loc.longitude, loc.latitude))
        .collect();

    chart
        .draw_series(LineSeries::new(path_points, BLUE.mix(0.7).stroke_width(2)))
        .map_err(render_error)?;

    chart
        .draw_series(route.stops().iter().map(|loc| {
            Circle::new(
                (loc.longitude, loc.latitude),
                6,
                ShapeStyle::from(&GREEN).filled(),
            )
        }))
        .map_err(render_error)?;

    let start = route.start();
    chart
        .draw_series(std::iter::once(Circle::new(
            (start.longitude, start.latitude),
            10,
            ShapeStyle::from(&RED).filled(),
        )))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;

    Ok(())
}

/// Determine the chart boundaries as (min_x, max_x, min_y, max_y)
///
/// Adds 10% padding on each axis; a zero-width axis is widened by one unit each side.
pub fn plot_bounds(route: &DeliveryRoute) -> (f64, f64, f64, f64) {
    let start = route.start();
    let mut min_x = start.longitude;
    let mut max_x = start.longitude;
    let mut min_y = start.latitude;
    let mut max_y = start.latitude;

    for loc in route.stops() {
        min_x = min_x.min(loc.longitude);
        max_x = max_x.max(loc.longitude);
        min_y = min_y.min(loc.latitude);
        max_y = max_y.max(loc.latitude);
    }

    let padding_x = padding(min_x, max_x);
    let padding_y = padding(min_y, max_y);

    (
        min_x - padding_x,
        max_x + padding_x,
        min_y - padding_y,
        max_y + padding_y,
    )
}

fn padding(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 {
        span * 0.1
    } else {
        1.0
    }
}

fn render_error<E: Display>(e: E) -> Error {
    Error::Render(e.to_string())
}
