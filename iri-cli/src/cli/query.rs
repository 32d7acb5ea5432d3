//! Validated Query: everything the evaluation pipeline needs,
//! resolved and checked before any model invocation.
use std::str::FromStr;

use clap::ArgMatches;
use hifitime::Epoch;
use itertools::Itertools;
use thiserror::Error;

use iri::prelude::Parameter;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("a location (--lat and --lon) or --global-map is required")]
    MissingLocation,
    #[error("latitude off range (expecting -90..=+90): {0}")]
    InvalidLatitude(f64),
    #[error("longitude off range (expecting -180..=+180): {0}")]
    InvalidLongitude(f64),
    #[error("resolution must be strictly positive: {0}")]
    InvalidResolution(f64),
    #[error("month off range (expecting 1..=12): {0}")]
    InvalidMonth(u8),
    #[error("day off range (expecting 1..=31): {0}")]
    InvalidDay(u8),
    #[error("hour off range (expecting 0..=23): {0}")]
    InvalidHour(u8),
    #[error("non representable date: {0}-{1:02}-{2:02}")]
    InvalidDate(i32, u8, u8),
    #[error("unknown parameter \"{0}\" (expecting foF2, hmF2, NmF2 or all)")]
    InvalidParameter(String),
    #[error("--profiles requires --daily")]
    ProfilesWithoutDaily,
    #[error("--year-run requires a single location (--lat and --lon)")]
    YearRunWithoutLocation,
}

/// Raw arguments, as passed by User
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub global_map: bool,
    pub resolution: f64,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub f107: f64,
    pub parameters: Vec<String>,
    pub daily: bool,
    pub profiles: bool,
    pub vtec: bool,
    pub year_run: bool,
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            lat: None,
            lon: None,
            global_map: false,
            resolution: 5.0,
            year: 2020,
            month: 4,
            day: 15,
            hour: 12,
            f107: 100.0,
            parameters: vec!["foF2".to_string()],
            daily: false,
            profiles: false,
            vtec: false,
            year_run: false,
        }
    }
}

impl QueryArgs {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            lat: matches.get_one::<f64>("lat").copied(),
            lon: matches.get_one::<f64>("lon").copied(),
            global_map: matches.get_flag("global-map"),
            resolution: *matches.get_one::<f64>("resolution").unwrap_or(&5.0),
            year: *matches.get_one::<i32>("year").unwrap_or(&2020),
            month: *matches.get_one::<u8>("month").unwrap_or(&4),
            day: *matches.get_one::<u8>("day").unwrap_or(&15),
            hour: *matches.get_one::<u8>("hour").unwrap_or(&12),
            f107: *matches.get_one::<f64>("f107").unwrap_or(&100.0),
            parameters: match matches.get_many::<String>("parameters") {
                Some(values) => values.cloned().collect(),
                None => Vec::new(),
            },
            daily: matches.get_flag("daily"),
            profiles: matches.get_flag("profiles"),
            vtec: matches.get_flag("vtec"),
            year_run: matches.get_flag("year-run"),
        }
    }
}

/// Evaluation target resolved from the location flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Single point of interest, decimal degrees
    Point { lat: f64, lon: f64 },
    /// World wide grid at given resolution (degrees)
    GlobalMap { resolution: f64 },
}

/// Query defined by User, fully validated:
/// construction fails before any model invocation.
#[derive(Debug, Clone)]
pub struct Query {
    /// Evaluation target
    pub target: Target,
    /// Evaluation datetime
    pub epoch: Epoch,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    /// F10.7 solar flux (sfu)
    pub f107: f64,
    /// Requested parameters, expanded and deduplicated
    pub parameters: Vec<Parameter>,
    /// Daily evaluation mode (unlocks density profiles)
    pub daily: bool,
    /// Density profiles rendering
    pub profiles: bool,
    /// Vertical TEC integration
    pub vtec: bool,
    /// Annual sweep mode
    pub year_run: bool,
}

impl Query {
    /// Resolves and validates the Query defined by User
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigurationError> {
        Self::new(QueryArgs::from_matches(&cli.matches))
    }
    /// Validates raw arguments into a [Query]
    pub fn new(args: QueryArgs) -> Result<Self, ConfigurationError> {
        let target = if args.global_map {
            if args.resolution <= 0.0 {
                return Err(ConfigurationError::InvalidResolution(args.resolution));
            }
            Target::GlobalMap {
                resolution: args.resolution,
            }
        } else {
            let (lat, lon) = match (args.lat, args.lon) {
                (Some(lat), Some(lon)) => (lat, lon),
                _ => return Err(ConfigurationError::MissingLocation),
            };
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ConfigurationError::InvalidLatitude(lat));
            }
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ConfigurationError::InvalidLongitude(lon));
            }
            Target::Point { lat, lon }
        };

        if !(1..=12).contains(&args.month) {
            return Err(ConfigurationError::InvalidMonth(args.month));
        }
        if !(1..=31).contains(&args.day) {
            return Err(ConfigurationError::InvalidDay(args.day));
        }
        if args.hour > 23 {
            return Err(ConfigurationError::InvalidHour(args.hour));
        }

        let epoch =
            Epoch::maybe_from_gregorian_utc(args.year, args.month, args.day, args.hour, 0, 0, 0)
                .map_err(|_| ConfigurationError::InvalidDate(args.year, args.month, args.day))?;

        let mut parameters = Vec::with_capacity(args.parameters.len());
        for name in &args.parameters {
            let parameter = Parameter::from_str(name)
                .map_err(|_| ConfigurationError::InvalidParameter(name.clone()))?;
            parameters.push(parameter);
        }
        let parameters = if parameters.contains(&Parameter::All) {
            Parameter::all()
        } else {
            parameters.into_iter().sorted().dedup().collect()
        };

        if args.profiles && !args.daily {
            return Err(ConfigurationError::ProfilesWithoutDaily);
        }
        if args.year_run && !matches!(target, Target::Point { .. }) {
            return Err(ConfigurationError::YearRunWithoutLocation);
        }

        Ok(Self {
            target,
            epoch,
            year: args.year,
            month: args.month,
            day: args.day,
            hour: args.hour,
            f107: args.f107,
            parameters,
            daily: args.daily,
            profiles: args.profiles,
            vtec: args.vtec,
            year_run: args.year_run,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn point_args() -> QueryArgs {
        QueryArgs {
            lat: Some(0.0),
            lon: Some(0.0),
            ..QueryArgs::default()
        }
    }

    #[test]
    fn default_point_query() {
        let query = Query::new(point_args()).unwrap();
        assert_eq!(query.target, Target::Point { lat: 0.0, lon: 0.0 });
        assert_eq!(query.parameters, vec![Parameter::FoF2]);
        assert_eq!(
            query.epoch,
            Epoch::from_gregorian_utc(2020, 4, 15, 12, 0, 0, 0)
        );
    }
    #[test]
    fn location_is_required() {
        let args = QueryArgs::default();
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::MissingLocation)
        ));
        let args = QueryArgs {
            lat: Some(45.0),
            ..QueryArgs::default()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::MissingLocation)
        ));
    }
    #[test]
    fn coordinates_off_range() {
        let args = QueryArgs {
            lat: Some(90.1),
            lon: Some(0.0),
            ..QueryArgs::default()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidLatitude(_))
        ));
        let args = QueryArgs {
            lat: Some(0.0),
            lon: Some(-200.0),
            ..QueryArgs::default()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidLongitude(_))
        ));
    }
    #[test]
    fn global_map_resolution() {
        let args = QueryArgs {
            global_map: true,
            resolution: 10.0,
            ..QueryArgs::default()
        };
        let query = Query::new(args).unwrap();
        assert_eq!(query.target, Target::GlobalMap { resolution: 10.0 });

        let args = QueryArgs {
            global_map: true,
            resolution: 0.0,
            ..QueryArgs::default()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidResolution(_))
        ));
    }
    #[test]
    fn parameters_expansion() {
        let args = QueryArgs {
            parameters: vec!["all".to_string()],
            ..point_args()
        };
        let query = Query::new(args).unwrap();
        assert_eq!(
            query.parameters,
            vec![Parameter::FoF2, Parameter::HmF2, Parameter::NmF2]
        );

        // duplicates collapse, canonical order restored
        let args = QueryArgs {
            parameters: vec![
                "NmF2".to_string(),
                "foF2".to_string(),
                "NmF2".to_string(),
            ],
            ..point_args()
        };
        let query = Query::new(args).unwrap();
        assert_eq!(query.parameters, vec![Parameter::FoF2, Parameter::NmF2]);
    }
    #[test]
    fn unknown_parameter() {
        let args = QueryArgs {
            parameters: vec!["foF1".to_string()],
            ..point_args()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidParameter(_))
        ));
    }
    #[test]
    fn profiles_require_daily() {
        let args = QueryArgs {
            profiles: true,
            ..point_args()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::ProfilesWithoutDaily)
        ));
        let args = QueryArgs {
            daily: true,
            profiles: true,
            ..point_args()
        };
        assert!(Query::new(args).is_ok());
    }
    #[test]
    fn date_validation() {
        let args = QueryArgs {
            month: 13,
            ..point_args()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidMonth(13))
        ));
        let args = QueryArgs {
            hour: 24,
            ..point_args()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidHour(24))
        ));
        // calendar aware: April has 30 days
        let args = QueryArgs {
            month: 4,
            day: 31,
            ..point_args()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::InvalidDate(2020, 4, 31))
        ));
    }
    #[test]
    fn year_run_requires_location() {
        let args = QueryArgs {
            global_map: true,
            year_run: true,
            ..QueryArgs::default()
        };
        assert!(matches!(
            Query::new(args),
            Err(ConfigurationError::YearRunWithoutLocation)
        ));
    }
}
