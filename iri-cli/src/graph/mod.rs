use plotters::{coord::Shift, prelude::*};

use std::io;

use iri::prelude::Parameter;

use crate::cli::{Query, Target, Workspace};
use crate::eval::EvaluationPipeline;

mod csv;
mod map;
mod profile;
mod timeseries;

pub use csv::csv_export;
pub use timeseries::plot_year;

/// Rendered dimensions, all products share them
pub const DIMS: (u32, u32) = (1024, 768);

/// Builds plot area
pub fn build_plot(file: &str, dims: (u32, u32)) -> DrawingArea<BitMapBackend, Shift> {
    let area = BitMapBackend::new(file, dims).into_drawing_area();
    area.fill(&WHITE)
        .expect("failed to create background image");
    area
}

/// Decimal degrees or resolution rendered in file names:
/// minimal form, no trailing zero decimals (10.0 is "10", 45.5 stays "45.5")
pub fn format_degrees(value: f64) -> String {
    format!("{}", value)
}

/// Location tag encoded in every file name
pub fn location_label(target: &Target) -> String {
    match target {
        Target::Point { lat, lon } => {
            format!("{}N_{}E", format_degrees(*lat), format_degrees(*lon))
        },
        Target::GlobalMap { resolution } => {
            format!("Global_{}deg", format_degrees(*resolution))
        },
    }
}

/// Datetime tag encoded in every file name
pub fn timestamp_label(query: &Query) -> String {
    format!(
        "{}{:02}{:02}_{:02}UTC",
        query.year, query.month, query.day, query.hour
    )
}

/// Per parameter plot styling: caption, unit, colormap
pub fn parameter_style(parameter: Parameter) -> (&'static str, &'static str, colorous::Gradient) {
    match parameter {
        Parameter::FoF2 => ("F2 Critical Frequency", "foF2 (MHz)", colorous::PLASMA),
        Parameter::HmF2 => ("F2 Peak Height", "hmF2 (km)", colorous::VIRIDIS),
        Parameter::NmF2 => ("F2 Peak Density", "NmF2 (el/m3)", colorous::INFERNO),
        Parameter::All => ("Ionospheric Parameters", "", colorous::TURBO),
    }
}

/// Colormap sample to drawing color
pub fn gradient_color(gradient: &colorous::Gradient, t: f64) -> RGBColor {
    let color = gradient.eval_continuous(t.clamp(0.0, 1.0));
    RGBColor(color.r, color.g, color.b)
}

/// Normalizes a dataset to 0..=1 for colormap evaluation
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| if span > 0.0 { (v - min) / span } else { 0.5 })
        .collect()
}

/// Renders all products requested by this Query.
/// Returns the number of generated files.
pub fn render(
    query: &Query,
    pipeline: &EvaluationPipeline,
    workspace: &Workspace,
) -> Result<usize, io::Error> {
    let mut rendered = 0;
    match query.target {
        Target::GlobalMap { .. } => {
            for parameter in &query.parameters {
                map::plot_parameter_map(query, pipeline, workspace, *parameter);
                rendered += 1;
            }
            if query.vtec {
                map::plot_vtec_map(query, pipeline, workspace);
                rendered += 1;
            }
            if query.profiles {
                // profile figures are a single location product
                warn!("--profiles is not rendered in --global-map mode");
            }
        },
        Target::Point { .. } => {
            let sweep = pipeline
                .sweep
                .as_ref()
                .expect("single location evaluation without diurnal sweep");
            for parameter in &query.parameters {
                timeseries::plot_diurnal_parameter(query, sweep, workspace, *parameter);
                rendered += 1;
            }
            timeseries::plot_diurnal_panel(query, sweep, workspace);
            rendered += 1;
            if query.profiles {
                profile::plot_profiles(query, sweep, workspace);
                rendered += 1;
            }
            if query.vtec {
                timeseries::plot_diurnal_vtec(query, sweep, workspace);
                rendered += 1;
            }
        },
    }
    Ok(rendered)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cli::{Query, QueryArgs, Target};

    #[test]
    fn degrees_formatting() {
        assert_eq!(format_degrees(10.0), "10");
        assert_eq!(format_degrees(5.0), "5");
        assert_eq!(format_degrees(45.5), "45.5");
        assert_eq!(format_degrees(-73.25), "-73.25");
        assert_eq!(format_degrees(0.0), "0");
    }
    #[test]
    fn location_labels() {
        let label = location_label(&Target::Point {
            lat: 45.5,
            lon: -73.5,
        });
        assert_eq!(label, "45.5N_-73.5E");

        let label = location_label(&Target::GlobalMap { resolution: 10.0 });
        assert_eq!(label, "Global_10deg");
    }
    #[test]
    fn file_naming_contract() {
        let query = Query::new(QueryArgs {
            global_map: true,
            resolution: 10.0,
            ..QueryArgs::default()
        })
        .unwrap();
        let name = format!(
            "{}_{}_{}.png",
            iri::prelude::Parameter::FoF2,
            location_label(&query.target),
            timestamp_label(&query)
        );
        assert_eq!(name, "foF2_Global_10deg_20200415_12UTC.png");

        let query = Query::new(QueryArgs {
            lat: Some(0.0),
            lon: Some(0.0),
            ..QueryArgs::default()
        })
        .unwrap();
        let name = format!(
            "timeseries_{}_{}.png",
            location_label(&query.target),
            timestamp_label(&query)
        );
        assert_eq!(name, "timeseries_0N_0E_20200415_12UTC.png");
    }
    #[test]
    fn normalization() {
        let normalized = normalize(&[1.0, 2.0, 3.0]);
        assert_eq!(normalized, vec![0.0, 0.5, 1.0]);
        // degenerate span maps to mid scale
        let normalized = normalize(&[4.0, 4.0]);
        assert_eq!(normalized, vec![0.5, 0.5]);
    }
}
