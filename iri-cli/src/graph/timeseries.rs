//! Time domain rendering: diurnal curves, the 2x2 diurnal panel,
//! and the annual (F10.7, NmF2) figure.
use plotters::coord::Shift;
use plotters::prelude::*;

use iri::prelude::Parameter;

use crate::cli::{Query, Workspace};
use crate::eval::{AnnualSweep, DiurnalSweep};

use super::{build_plot, location_label, parameter_style, timestamp_label, DIMS};

/// One curve per requested parameter, over the 24 hour sweep
pub fn plot_diurnal_parameter(
    query: &Query,
    sweep: &DiurnalSweep,
    workspace: &Workspace,
    parameter: Parameter,
) {
    let (caption, unit, _) = parameter_style(parameter);
    let x: Vec<f64> = sweep.hours.iter().map(|h| *h as f64).collect();
    let y: Vec<f64> = sweep
        .evaluations
        .iter()
        .map(|e| {
            e.scalar(parameter)
                .expect("diurnal rendering expects a scalar parameter")
        })
        .collect();

    let filename = format!(
        "{}_{}_{}.png",
        parameter,
        location_label(&query.target),
        timestamp_label(query)
    );
    let fullpath = workspace.filepath(&filename).to_string_lossy().to_string();
    let area = build_plot(&fullpath, DIMS);
    draw_curve(
        &area,
        &format!("{} - {}", caption, timestamp_label(query)),
        "Hour (UTC)",
        unit,
        &x,
        &y,
        &BLUE,
        false,
    );
    area.present()
        .expect(&format!("failed to render {}", filename));
}

/// The 2x2 panel: foF2, hmF2, NmF2 and NmE over the diurnal sweep
pub fn plot_diurnal_panel(query: &Query, sweep: &DiurnalSweep, workspace: &Workspace) {
    let x: Vec<f64> = sweep.hours.iter().map(|h| *h as f64).collect();
    let fo: Vec<f64> = sweep.evaluations.iter().map(|e| e.f2.fo).collect();
    let hm: Vec<f64> = sweep.evaluations.iter().map(|e| e.f2.hm).collect();
    let nm: Vec<f64> = sweep.evaluations.iter().map(|e| e.f2.nm).collect();
    let nm_e: Vec<f64> = sweep.evaluations.iter().map(|e| e.e.nm).collect();

    let filename = format!(
        "timeseries_{}_{}.png",
        location_label(&query.target),
        timestamp_label(query)
    );
    let fullpath = workspace.filepath(&filename).to_string_lossy().to_string();
    let area = build_plot(&fullpath, DIMS);
    let titled = area
        .titled(
            &format!(
                "Ionospheric Parameters - {} - {}",
                location_label(&query.target),
                timestamp_label(query)
            ),
            ("sans-serif", 30).into_font(),
        )
        .expect("failed to title the diurnal panel");

    let panels = titled.split_evenly((2, 2));
    draw_curve(&panels[0], "F2 Critical Frequency", "Hour (UTC)", "foF2 (MHz)", &x, &fo, &BLUE, false);
    draw_curve(&panels[1], "F2 Peak Height", "Hour (UTC)", "hmF2 (km)", &x, &hm, &RED, false);
    draw_curve(&panels[2], "F2 Peak Density", "Hour (UTC)", "NmF2 (el/m3)", &x, &nm, &GREEN, true);
    draw_curve(&panels[3], "E Layer Peak Density", "Hour (UTC)", "NmE (el/m3)", &x, &nm_e, &MAGENTA, true);

    titled.present()
        .expect(&format!("failed to render {}", filename));
}

/// Vertical TEC over the diurnal sweep
pub fn plot_diurnal_vtec(query: &Query, sweep: &DiurnalSweep, workspace: &Workspace) {
    let x: Vec<f64> = sweep.hours.iter().map(|h| *h as f64).collect();
    let y: Vec<f64> = sweep
        .evaluations
        .iter()
        .map(|e| {
            e.vtec_tecu()
                .expect("vTEC rendering without profile data")
        })
        .collect();

    let filename = format!(
        "vTEC_{}_{}.png",
        location_label(&query.target),
        timestamp_label(query)
    );
    let fullpath = workspace.filepath(&filename).to_string_lossy().to_string();
    let area = build_plot(&fullpath, DIMS);
    draw_curve(
        &area,
        &format!(
            "Vertical Total Electron Content - {}",
            timestamp_label(query)
        ),
        "Hour (UTC)",
        "vTEC (TECu)",
        &x,
        &y,
        &BLACK,
        false,
    );
    area.present()
        .expect(&format!("failed to render {}", filename));
}

/// Annual figure: synthetic F10.7 on top, NmF2 response below
pub fn plot_year(query: &Query, sweep: &AnnualSweep, workspace: &Workspace) {
    let x: Vec<f64> = sweep.days.iter().map(|d| *d as f64).collect();

    let filename = format!(
        "year_plot_{}_{}.png",
        location_label(&query.target),
        query.year
    );
    let fullpath = workspace.filepath(&filename).to_string_lossy().to_string();
    let area = build_plot(&fullpath, DIMS);
    let titled = area
        .titled(
            &format!(
                "F10.7 and NmF2 - {} - {}",
                location_label(&query.target),
                query.year
            ),
            ("sans-serif", 30).into_font(),
        )
        .expect("failed to title the annual figure");

    let panels = titled.split_evenly((2, 1));
    draw_curve(&panels[0], "Solar Flux", "Day of Year", "F10.7 (sfu)", &x, &sweep.flux, &RED, false);
    draw_curve(
        &panels[1],
        &format!("F2 Peak Density at {:02}:00 UTC", query.hour),
        "Day of Year",
        "NmF2 (el/m3)",
        &x,
        &sweep.nm_f2,
        &BLUE,
        false,
    );

    titled.present()
        .expect(&format!("failed to render {}", filename));
}

/*
 * Single curve chart on given drawing area.
 * Y axis is scaled for better rendering, optionally logarithmic.
 */
fn draw_curve(
    area: &DrawingArea<BitMapBackend, Shift>,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    x: &[f64],
    y: &[f64],
    color: &RGBColor,
    log_scale: bool,
) {
    let x_axis = x[0]..x[x.len() - 1];
    let y_range = bounds(y);
    let y_axis = match y_range.0 < 0.0 {
        true => 1.02 * y_range.0..1.02 * y_range.1,
        false => 0.98 * y_range.0..1.02 * y_range.1,
    };

    if log_scale {
        let mut chart = ChartBuilder::on(area)
            .caption(caption, ("sans-serif", 20).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_axis, y_axis.log_scale())
            .expect(&format!("failed to build {} chart", caption));
        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .y_label_formatter(&|y| format!("{:e}", y))
            .draw()
            .expect(&format!("failed to draw {} mesh", caption));
        chart
            .draw_series(LineSeries::new(
                x.iter().zip(y.iter()).map(|(x, y)| (*x, *y)),
                color,
            ))
            .expect(&format!("failed to draw {} serie", caption));
    } else {
        let mut chart = ChartBuilder::on(area)
            .caption(caption, ("sans-serif", 20).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_axis, y_axis)
            .expect(&format!("failed to build {} chart", caption));
        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .draw()
            .expect(&format!("failed to draw {} mesh", caption));
        chart
            .draw_series(LineSeries::new(
                x.iter().zip(y.iter()).map(|(x, y)| (*x, *y)),
                color,
            ))
            .expect(&format!("failed to draw {} serie", caption));
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}
