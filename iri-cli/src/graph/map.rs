//! Global map rendering: one colored cell per grid point.
use plotters::prelude::*;

use iri::prelude::{MapGrid, Parameter};

use crate::cli::{Query, Workspace};
use crate::eval::EvaluationPipeline;

use super::{
    build_plot, gradient_color, location_label, normalize, parameter_style, timestamp_label, DIMS,
};

pub fn plot_parameter_map(
    query: &Query,
    pipeline: &EvaluationPipeline,
    workspace: &Workspace,
    parameter: Parameter,
) {
    let (caption, _, gradient) = parameter_style(parameter);
    let values: Vec<f64> = pipeline
        .results
        .iter()
        .map(|r| {
            r.evaluation
                .scalar(parameter)
                .expect("map rendering expects a scalar parameter")
        })
        .collect();

    let filename = format!(
        "{}_{}_{}.png",
        parameter,
        location_label(&query.target),
        timestamp_label(query)
    );
    heatmap(
        &workspace.filepath(&filename).to_string_lossy(),
        &format!("{} - {}", caption, timestamp_label(query)),
        &pipeline.grid,
        &values,
        &gradient,
    );
}

pub fn plot_vtec_map(query: &Query, pipeline: &EvaluationPipeline, workspace: &Workspace) {
    let values: Vec<f64> = pipeline
        .results
        .iter()
        .map(|r| r.vtec.expect("vTEC rendering without integrated results"))
        .collect();

    let filename = format!(
        "vTEC_{}_{}.png",
        location_label(&query.target),
        timestamp_label(query)
    );
    heatmap(
        &workspace.filepath(&filename).to_string_lossy(),
        &format!(
            "Vertical Total Electron Content - {}",
            timestamp_label(query)
        ),
        &pipeline.grid,
        &values,
        &colorous::TURBO,
    );
}

/*
 * Draws one filled rectangle per grid cell,
 * colored by the normalized parameter value
 */
fn heatmap(file: &str, caption: &str, grid: &MapGrid, values: &[f64], gradient: &colorous::Gradient) {
    let area = build_plot(file, DIMS);
    let dlat = grid.latitude.spacing / 2.0;
    let dlon = grid.longitude.spacing / 2.0;

    let x_axis = (grid.longitude.start - dlon)..(grid.longitude.end + dlon);
    let y_axis = (grid.latitude.start - dlat)..(grid.latitude.end + dlat);

    let mut chart = ChartBuilder::on(&area)
        .caption(caption, ("sans-serif", 40).into_font())
        .margin(40)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_axis, y_axis)
        .expect(&format!("failed to build {} chart", caption));
    chart
        .configure_mesh()
        .x_desc("Longitude [°]")
        .x_labels(30)
        .y_desc("Latitude [°]")
        .y_labels(30)
        .draw()
        .expect(&format!("failed to draw {} mesh", caption));

    let normalized = normalize(values);
    chart
        .draw_series(grid.iter().zip(normalized.iter()).map(|((lat, lon), t)| {
            let color = gradient_color(gradient, *t);
            Rectangle::new(
                [(lon - dlon, lat - dlat), (lon + dlon, lat + dlat)],
                color.filled(),
            )
        }))
        .expect(&format!("failed to draw {} cells", caption));

    area.present()
        .expect(&format!("failed to render {}", file));
}
