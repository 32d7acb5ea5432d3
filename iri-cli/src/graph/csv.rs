//! helpers to export evaluation results to CSV if desired,
//! and not only generate PNG plots.
use std::io::{self, Write};

use crate::cli::{Query, Workspace};
use crate::eval::EvaluationPipeline;

use super::{location_label, timestamp_label};

/// Exports the whole result sequence, in grid order
pub fn csv_export(
    query: &Query,
    pipeline: &EvaluationPipeline,
    workspace: &Workspace,
) -> Result<(), io::Error> {
    let filename = format!(
        "results_{}_{}.csv",
        location_label(&query.target),
        timestamp_label(query)
    );
    let mut fd = workspace.create_file(&filename)?;
    writeln!(fd, "================================================")?;
    writeln!(fd, "location : {}", location_label(&query.target))?;
    writeln!(fd, "datetime : {}", query.epoch)?;
    writeln!(fd, "f10.7    : {}", query.f107)?;
    writeln!(
        fd,
        "version  : iri-cli v{} - https://github.com/heliolab/iri-rs",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(fd, "================================================")?;
    writeln!(fd, "lat, lon, foF2 [MHz], hmF2 [km], NmF2 [m-3], vTEC [TECu]")?;
    for result in &pipeline.results {
        let vtec = match result.vtec {
            Some(vtec) => format!("{:.3}", vtec),
            None => String::from("-"),
        };
        writeln!(
            fd,
            "{:.3}, {:.3}, {:.3}, {:.1}, {:.6E}, {}",
            result.lat,
            result.lon,
            result.evaluation.f2.fo,
            result.evaluation.f2.hm,
            result.evaluation.f2.nm,
            vtec
        )?;
    }
    writeln!(fd, "================================================")?;
    Ok(())
}
