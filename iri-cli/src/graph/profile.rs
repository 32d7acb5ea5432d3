//! Electron density profile rendering: the profile at the requested
//! hour, next to the hour by altitude density map.
use plotters::prelude::*;

use crate::cli::{Query, Workspace};
use crate::eval::DiurnalSweep;

use super::{build_plot, gradient_color, location_label, normalize, timestamp_label, DIMS};

pub fn plot_profiles(query: &Query, sweep: &DiurnalSweep, workspace: &Workspace) {
    let filename = format!(
        "profiles_{}_{}.png",
        location_label(&query.target),
        timestamp_label(query)
    );
    let fullpath = workspace.filepath(&filename).to_string_lossy().to_string();
    let area = build_plot(&fullpath, DIMS);
    let titled = area
        .titled(
            &format!(
                "Electron Density - {} - {}",
                location_label(&query.target),
                timestamp_label(query)
            ),
            ("sans-serif", 30).into_font(),
        )
        .expect("failed to title the profiles figure");

    let panels = titled.split_evenly((1, 2));
    profile_panel(&panels[0], query, sweep);
    density_map_panel(&panels[1], sweep);

    titled.present()
        .expect(&format!("failed to render {}", filename));
}

/*
 * Density versus altitude at the requested hour, logarithmic density axis
 */
fn profile_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    query: &Query,
    sweep: &DiurnalSweep,
) {
    let profile = sweep.evaluations[query.hour as usize]
        .profile
        .as_ref()
        .expect("profile rendering without profile data");

    let densities = &profile.densities;
    let min = densities.iter().copied().fold(f64::INFINITY, f64::min);
    let max = densities.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let x_axis = (0.5 * min..2.0 * max).log_scale();
    let y_axis = profile.altitudes.start..profile.altitudes.end;

    let caption = format!("Profile at {:02}:00 UTC", query.hour);
    let mut chart = ChartBuilder::on(area)
        .caption(&caption, ("sans-serif", 20).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_axis, y_axis)
        .expect(&format!("failed to build {} chart", caption));
    chart
        .configure_mesh()
        .x_desc("Electron Density (el/m3)")
        .x_label_formatter(&|x| format!("{:e}", x))
        .y_desc("Altitude (km)")
        .draw()
        .expect(&format!("failed to draw {} mesh", caption));
    chart
        .draw_series(LineSeries::new(
            profile
                .altitudes
                .iter()
                .zip(densities.iter())
                .map(|(alt, n)| (*n, alt)),
            &BLUE,
        ))
        .expect(&format!("failed to draw {} serie", caption));
}

/*
 * Hour by altitude density cells, over the complete sweep
 */
fn density_map_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    sweep: &DiurnalSweep,
) {
    let altitudes = {
        let first = sweep.evaluations[0]
            .profile
            .as_ref()
            .expect("profile rendering without profile data");
        first.altitudes.clone()
    };

    let mut cells = Vec::with_capacity(sweep.hours.len() * altitudes.length());
    let mut values = Vec::with_capacity(cells.capacity());
    for (hour, evaluation) in sweep.hours.iter().zip(sweep.evaluations.iter()) {
        let profile = evaluation
            .profile
            .as_ref()
            .expect("profile rendering without profile data");
        for (nth, density) in profile.densities.iter().enumerate() {
            cells.push((*hour as f64, altitudes.sample(nth)));
            values.push(*density);
        }
    }
    let normalized = normalize(&values);

    let x_axis = -0.5..23.5;
    let dalt = altitudes.spacing / 2.0;
    let y_axis = (altitudes.start - dalt)..(altitudes.end + dalt);

    let caption = "Density over the day";
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_axis, y_axis)
        .expect(&format!("failed to build {} chart", caption));
    chart
        .configure_mesh()
        .x_desc("Hour (UTC)")
        .y_desc("Altitude (km)")
        .draw()
        .expect(&format!("failed to draw {} mesh", caption));
    chart
        .draw_series(cells.iter().zip(normalized.iter()).map(|((hour, alt), t)| {
            let color = gradient_color(&colorous::VIRIDIS, *t);
            Rectangle::new(
                [(hour - 0.5, alt - dalt), (hour + 0.5, alt + dalt)],
                color.filled(),
            )
        }))
        .expect(&format!("failed to draw {} cells", caption));
}
