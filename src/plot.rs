//! PNG rendering of a 2-D dataset, its target line and the learned decision boundary.

use std::path::Path;

use plotters::prelude::*;
use tracing::warn;

use crate::common_types::{DataPoint, Label, Line};
use crate::error::{PerceptronError, Result};
use crate::perceptron::decision_boundary;
use crate::report::Extent;

fn render_err<E: std::fmt::Display>(err: E) -> PerceptronError {
    PerceptronError::Render(err.to_string())
}

/// Draws red points for `+1`, black points for `-1`, the target line in blue and the
/// hypothesis in green. A degenerate boundary is left out of the picture and logged.
pub fn render(
    path: &Path,
    dataset: &[DataPoint<f64>],
    target: Option<&Line<f64>>,
    weights: &[f64],
) -> Result<()> {
    let extent = Extent::of(dataset)?.padded(1.0);
    let (x_lo, x_hi) = extent.x1;
    let (y_lo, y_hi) = extent.x2;

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Perceptron Learning Algorithm", ("sans-serif", 32))
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("X1 Axis")
        .y_desc("X2 Axis")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(dataset.iter().map(|p| {
            let color = match p.label {
                Label::Positive => RED,
                Label::Negative => BLACK,
            };
            Circle::new((p.features[1], p.features[2]), 4, color.filled())
        }))
        .map_err(render_err)?;

    let line_points = |line: Line<f64>| vec![(x_lo, line.y_at(x_lo)), (x_hi, line.y_at(x_hi))];

    if let Some(target) = target {
        chart
            .draw_series(LineSeries::new(line_points(*target), &BLUE))
            .map_err(render_err)?
            .label("Target Function")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    }

    match decision_boundary(weights) {
        Ok(hypothesis) => {
            chart
                .draw_series(LineSeries::new(line_points(hypothesis), &GREEN))
                .map_err(render_err)?
                .label("Hypothesis")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));
        }
        Err(err) => warn!(%err, "hypothesis line not drawn"),
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)
}
