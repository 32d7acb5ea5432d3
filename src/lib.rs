#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * iri is an empirical ionosphere model library.
 * It resolves layer critical frequencies, peak parameters and
 * electron density profiles as pure functions of
 * (epoch, location, solar flux).
 */

pub mod constants;
pub mod f107;
pub mod grid;
pub mod linspace;
pub mod model;
pub mod profile;
pub mod solar;

mod error;

pub use error::Error;

pub mod prelude {
    // export
    pub use crate::{
        error::Error,
        grid::MapGrid,
        linspace::Linspace,
        model::{daily, monthly_median, EPeak, Evaluation, F2Peak, Parameter},
        profile::{ElectronDensityProfile, EDP_ALTITUDES},
        solar::SolarAngles,
    };

    // pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
}
