//! Command line tool to evaluate ionospheric conditions and plot them.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod eval; // evaluation pipeline
mod graph; // output products rendering

use cli::{Cli, Query, Target, Workspace};
use eval::EvaluationPipeline;

use env_logger::{Builder, Target as LogTarget};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("invalid configuration")]
    ConfigurationError(#[from] cli::ConfigurationError),
    #[error("evaluation failure")]
    EvaluationError(#[from] eval::Error),
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(LogTarget::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    /*
     * Resolve the configuration defined by User.
     * Any faulty or inconsistent flag aborts right here:
     * nothing is evaluated, nothing is written.
     */
    let cli = Cli::new();
    let query = Query::from_cli(&cli)?;
    let quiet = cli.quiet();

    let workspace = Workspace::new(&cli)?;

    match query.target {
        Target::Point { lat, lon } => {
            info!(
                "evaluating ({:.3}, {:.3}) at {} (F10.7: {:.1})",
                lat, lon, query.epoch, query.f107
            );
        },
        Target::GlobalMap { resolution } => {
            info!(
                "evaluating global map ({} deg) at {} (F10.7: {:.1})",
                resolution, query.epoch, query.f107
            );
        },
    }

    /*
     * Exclusive opmode: annual sweep.
     * Renders the year figure then aborts, like any one-shot product.
     */
    if query.year_run {
        let sweep = eval::AnnualSweep::run(&query)?;
        graph::plot_year(&query, &sweep, &workspace);
        if !quiet {
            println!("year figure generated in {}", workspace.root.display());
        }
        return Ok(());
    }

    /*
     * Evaluation pipeline: resolves the query into one model
     * evaluation per grid point, plus derived products.
     */
    let pipeline = EvaluationPipeline::run(&query)?;
    info!("{} point(s) evaluated", pipeline.results.len());

    /*
     * Output stage: one file per requested product.
     */
    let rendered = graph::render(&query, &pipeline, &workspace)?;

    if cli.csv_export() {
        graph::csv_export(&query, &pipeline, &workspace)?;
    }

    if !quiet {
        println!("{} file(s) generated in {}", rendered, workspace.root.display());
    }

    Ok(())
} // main
