//! Evaluation pipeline: resolves a validated [Query] into one model
//! evaluation per requested grid point, plus derived products.
use thiserror::Error;

use hifitime::Unit;

use iri::f107::{days_in_year, synthetic_flux};
use iri::prelude::*;

use crate::cli::{Query, Target};

#[derive(Debug, Error)]
pub enum Error {
    #[error("model evaluation failure")]
    ModelError(#[from] iri::Error),
    #[error("no profile data: --vtec requires --daily")]
    IntegrationError,
}

/// One evaluated grid point, immutable once produced
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Latitude, decimal degrees
    pub lat: f64,
    /// Longitude, decimal degrees
    pub lon: f64,
    /// Model evaluation at the requested epoch
    pub evaluation: Evaluation,
    /// Vertical TEC (TECu), when requested
    pub vtec: Option<f64>,
}

/// Full diurnal sweep at a single location (one evaluation per UTC hour)
#[derive(Debug, Clone)]
pub struct DiurnalSweep {
    /// UTC hours, 0..24
    pub hours: Vec<u8>,
    /// One evaluation per hour
    pub evaluations: Vec<Evaluation>,
}

/// Annual sweep at a single location: one evaluation per day of year,
/// driven by the synthetic F10.7 series
#[derive(Debug, Clone)]
pub struct AnnualSweep {
    /// Day of year, 1..=365/366
    pub days: Vec<u16>,
    /// Synthetic F10.7 flux per day (sfu)
    pub flux: Vec<f64>,
    /// NmF2 per day (m-3)
    pub nm_f2: Vec<f64>,
}

/// Evaluation products, accumulated in grid order and
/// handed whole to the output stage (no streaming).
pub struct EvaluationPipeline {
    /// Requested grid
    pub grid: MapGrid,
    /// One result per grid point, row major order
    pub results: Vec<EvaluationResult>,
    /// Diurnal sweep, single location mode only
    pub sweep: Option<DiurnalSweep>,
}

impl EvaluationPipeline {
    /// Runs the complete pipeline for a validated [Query].
    /// Any model failure aborts the whole run: the model is a pure
    /// function, retrying single points would not change the outcome.
    pub fn run(query: &Query) -> Result<Self, Error> {
        let grid = match query.target {
            Target::GlobalMap { resolution } => MapGrid::global(resolution)?,
            Target::Point { lat, lon } => MapGrid::single_point(lat, lon)?,
        };

        let mut results = Vec::with_capacity(grid.len());
        for (lat, lon) in grid.iter() {
            let evaluation = evaluate(query, query.epoch, lat, lon)?;
            let vtec = match query.vtec {
                true => Some(
                    evaluation
                        .vtec_tecu()
                        .map_err(|_| Error::IntegrationError)?,
                ),
                false => None,
            };
            results.push(EvaluationResult {
                lat,
                lon,
                evaluation,
                vtec,
            });
        }

        let sweep = match query.target {
            Target::Point { lat, lon } => Some(Self::diurnal_sweep(query, lat, lon)?),
            Target::GlobalMap { .. } => None,
        };

        Ok(Self {
            grid,
            results,
            sweep,
        })
    }
    /*
     * One evaluation per UTC hour, on the queried date
     */
    fn diurnal_sweep(query: &Query, lat: f64, lon: f64) -> Result<DiurnalSweep, Error> {
        let hours: Vec<u8> = (0..24).collect();
        let mut evaluations = Vec::with_capacity(hours.len());
        for hour in &hours {
            let epoch =
                Epoch::maybe_from_gregorian_utc(query.year, query.month, query.day, *hour, 0, 0, 0)
                    .map_err(|_| iri::Error::InvalidDate)?;
            evaluations.push(evaluate(query, epoch, lat, lon)?);
        }
        Ok(DiurnalSweep {
            hours,
            evaluations,
        })
    }
}

impl AnnualSweep {
    /// Sweeps every day of the queried year at the queried hour,
    /// with the synthetic F10.7 series as activity driver.
    pub fn run(query: &Query) -> Result<Self, Error> {
        let (lat, lon) = match query.target {
            Target::Point { lat, lon } => (lat, lon),
            // Query validation requires a location in annual mode
            Target::GlobalMap { .. } => unreachable!("--year-run requires a single location"),
        };

        let first = Epoch::maybe_from_gregorian_utc(query.year, 1, 1, query.hour, 0, 0, 0)
            .map_err(|_| iri::Error::InvalidDate)?;

        let count = days_in_year(query.year);
        let mut days = Vec::with_capacity(count as usize);
        let mut flux = Vec::with_capacity(count as usize);
        let mut nm_f2 = Vec::with_capacity(count as usize);

        for day in 0..count {
            let epoch = first + (day as f64) * Unit::Day;
            let f107 = synthetic_flux(day as f64 + 1.0);
            let evaluation = if query.daily {
                daily(epoch, f107, lat, lon)?
            } else {
                monthly_median(epoch, f107, lat, lon)?
            };
            days.push(day + 1);
            flux.push(f107);
            nm_f2.push(evaluation.f2.nm);
        }

        Ok(Self { days, flux, nm_f2 })
    }
}

fn evaluate(query: &Query, epoch: Epoch, lat: f64, lon: f64) -> Result<Evaluation, Error> {
    let evaluation = if query.daily {
        daily(epoch, query.f107, lat, lon)?
    } else {
        monthly_median(epoch, query.f107, lat, lon)?
    };
    Ok(evaluation)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cli::QueryArgs;
    use iri::prelude::Parameter;

    fn point_query(args: QueryArgs) -> Query {
        Query::new(QueryArgs {
            lat: Some(0.0),
            lon: Some(0.0),
            ..args
        })
        .unwrap()
    }

    #[test]
    fn single_point_single_result() {
        let query = point_query(QueryArgs {
            parameters: vec!["foF2".into(), "hmF2".into(), "NmF2".into()],
            ..QueryArgs::default()
        });
        let pipeline = EvaluationPipeline::run(&query).unwrap();
        assert_eq!(pipeline.results.len(), 1);

        // exactly three scalars for the three requested parameters
        let result = &pipeline.results[0];
        let scalars: Vec<f64> = query
            .parameters
            .iter()
            .filter_map(|p| result.evaluation.scalar(*p))
            .collect();
        assert_eq!(scalars.len(), 3);

        // single location mode resolves the full diurnal sweep
        let sweep = pipeline.sweep.as_ref().unwrap();
        assert_eq!(sweep.hours.len(), 24);
        assert_eq!(sweep.evaluations.len(), 24);
    }

    #[test]
    fn global_map_grid_order() {
        let query = Query::new(QueryArgs {
            global_map: true,
            resolution: 10.0,
            ..QueryArgs::default()
        })
        .unwrap();
        let pipeline = EvaluationPipeline::run(&query).unwrap();
        assert_eq!(pipeline.results.len(), 19 * 37);
        assert!(pipeline.sweep.is_none());

        // row major: latitude rows, longitude within a row
        assert_eq!((pipeline.results[0].lat, pipeline.results[0].lon), (-90.0, -180.0));
        assert_eq!((pipeline.results[1].lat, pipeline.results[1].lon), (-90.0, -170.0));
        assert_eq!((pipeline.results[37].lat, pipeline.results[37].lon), (-80.0, -180.0));
    }

    #[test]
    fn vtec_requires_daily() {
        let query = point_query(QueryArgs {
            vtec: true,
            ..QueryArgs::default()
        });
        assert!(matches!(
            EvaluationPipeline::run(&query),
            Err(Error::IntegrationError)
        ));

        let query = point_query(QueryArgs {
            daily: true,
            vtec: true,
            ..QueryArgs::default()
        });
        let pipeline = EvaluationPipeline::run(&query).unwrap();
        assert!(pipeline.results[0].vtec.unwrap() > 0.0);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let query = point_query(QueryArgs {
            daily: true,
            ..QueryArgs::default()
        });
        let a = EvaluationPipeline::run(&query).unwrap();
        let b = EvaluationPipeline::run(&query).unwrap();
        assert_eq!(a.results[0].evaluation, b.results[0].evaluation);
    }

    #[test]
    fn annual_sweep() {
        let query = point_query(QueryArgs {
            year: 2022,
            year_run: true,
            ..QueryArgs::default()
        });
        let sweep = AnnualSweep::run(&query).unwrap();
        assert_eq!(sweep.days.len(), 365);
        assert_eq!(sweep.flux.len(), 365);
        assert_eq!(sweep.nm_f2.len(), 365);
        assert!(sweep.nm_f2.iter().all(|nm| *nm > 0.0));
    }

    #[test]
    fn parameters_kept_canonical() {
        let query = point_query(QueryArgs {
            parameters: vec!["all".into()],
            ..QueryArgs::default()
        });
        assert_eq!(
            query.parameters,
            vec![Parameter::FoF2, Parameter::HmF2, Parameter::NmF2]
        );
    }
}
