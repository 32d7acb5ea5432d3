use lazy_static::lazy_static;

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

mod query;
mod workspace;

pub use query::{ConfigurationError, Query, QueryArgs, Target};
pub use workspace::Workspace;

/*
 * Arguments that define the evaluation target:
 * either a single location, or the world wide grid.
 */
lazy_static! {
    pub static ref LOCATION_ARGS: Vec<Arg> = vec![
        Arg::new("lat")
            .long("lat")
            .value_name("LAT")
            .value_parser(value_parser!(f64))
            .help("Latitude of the point of interest, decimal degrees (-90..=+90)."),
        Arg::new("lon")
            .long("lon")
            .value_name("LON")
            .value_parser(value_parser!(f64))
            .help("Longitude of the point of interest, decimal degrees (-180..=+180)."),
        Arg::new("global-map")
            .long("global-map")
            .action(ArgAction::SetTrue)
            .help("Evaluate the world wide grid instead of a single location.
One map is rendered per requested parameter. See --resolution."),
        Arg::new("resolution")
            .long("resolution")
            .value_name("DEGREES")
            .value_parser(value_parser!(f64))
            .default_value("5.0")
            .help("Grid resolution (degrees) in --global-map mode, applies to both axes."),
    ];

    pub static ref TIME_ARGS: Vec<Arg> = vec![
        Arg::new("year")
            .long("year")
            .value_parser(value_parser!(i32))
            .default_value("2020")
            .help("Year of the evaluation date."),
        Arg::new("month")
            .long("month")
            .value_parser(value_parser!(u8))
            .default_value("4")
            .help("Month of the evaluation date (1..=12)."),
        Arg::new("day")
            .long("day")
            .value_parser(value_parser!(u8))
            .default_value("15")
            .help("Day of the evaluation date (1..=31)."),
        Arg::new("hour")
            .long("hour")
            .value_parser(value_parser!(u8))
            .default_value("12")
            .help("Hour of the day, UTC (0..=23)."),
    ];
}

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: {
                Command::new("iri-cli")
                    .author("Frank Soboczenski <frank.soboczenski@gmail.com>")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("Ionospheric conditions evaluation and plotting")
                    .long_about("iri-cli evaluates an empirical ionosphere model
over a single location or a global grid, and renders the
requested parameters (foF2, hmF2, NmF2, profiles, vTEC) as PNG plots.")
                    .color(ColorChoice::Always)
                    .next_help_heading("Evaluation target")
                    .args(LOCATION_ARGS.iter())
                    .next_help_heading("Date and time (UTC)")
                    .args(TIME_ARGS.iter())
                    .next_help_heading("Solar activity")
                    .arg(Arg::new("f107")
                        .long("f107")
                        .value_name("FLUX")
                        .value_parser(value_parser!(f64))
                        .default_value("100")
                        .help("F10.7 solar radio flux index (sfu), proxy for solar activity."))
                    .next_help_heading("Evaluation")
                    .arg(Arg::new("parameters")
                        .long("parameters")
                        .value_name("PARAM")
                        .action(ArgAction::Append)
                        .num_args(1..)
                        .default_value("foF2")
                        .help("Parameters to evaluate and plot, any of \"foF2\", \"hmF2\", \"NmF2\",
or \"all\" as a shortcut for the complete set."))
                    .arg(Arg::new("daily")
                        .long("daily")
                        .action(ArgAction::SetTrue)
                        .help("Daily evaluation: exact day of year and full electron
density profiles, instead of monthly median peak parameters."))
                    .arg(Arg::new("profiles")
                        .long("profiles")
                        .action(ArgAction::SetTrue)
                        .help("Render electron density profiles. Requires --daily."))
                    .arg(Arg::new("vtec")
                        .long("vtec")
                        .action(ArgAction::SetTrue)
                        .help("Integrate profiles into vertical TEC and plot it.
Profile data only exists in --daily mode."))
                    .arg(Arg::new("year-run")
                        .long("year-run")
                        .action(ArgAction::SetTrue)
                        .help("Sweep a whole year (single location only) with a synthetic
F10.7 series and render the annual F10.7 / NmF2 figure."))
                    .next_help_heading("Output")
                    .arg(Arg::new("output")
                        .long("output")
                        .value_name("FOLDER")
                        .help("Custom output directory. $IRI_OUTPUT is always prefered,
then this flag, /app/output as the default."))
                    .arg(Arg::new("csv")
                        .long("csv")
                        .action(ArgAction::SetTrue)
                        .help("Also export the evaluation results as CSV.
Use this when targetting third party tools."))
                    .arg(Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .action(ArgAction::SetTrue)
                        .help("Disable the terminal summary."))
                    .get_matches()
            },
        }
    }
    /// Returns true if all terminal output is to be disabled
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }
    /// Returns true if the CSV export is requested
    pub fn csv_export(&self) -> bool {
        self.matches.get_flag("csv")
    }
    /// Returns true if the annual sweep is requested
    pub fn year_run(&self) -> bool {
        self.matches.get_flag("year-run")
    }
    /// Custom output directory, if any
    pub fn output_dir(&self) -> Option<&String> {
        self.matches.get_one::<String>("output")
    }
}
