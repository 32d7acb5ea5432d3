//! Empirical ionosphere model: monthly median and daily evaluation
//! of layer critical frequencies, peak parameters and density profiles.
use hifitime::Epoch;
use strum::{Display, EnumString};

use crate::constants::D2R;
use crate::error::Error;
use crate::profile::ElectronDensityProfile;
use crate::solar::SolarAngles;

mod f2;
mod foe;

pub use f2::dipole_latitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar parameters this model resolves
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parameter {
    /// F2 layer critical frequency (MHz)
    #[strum(serialize = "foF2")]
    FoF2,
    /// F2 layer peak altitude (km)
    #[strum(serialize = "hmF2")]
    HmF2,
    /// F2 layer peak density (m-3)
    #[strum(serialize = "NmF2")]
    NmF2,
    /// Shortcut for all of the above
    #[strum(serialize = "all")]
    All,
}

impl Parameter {
    /// All scalar parameters, in canonical order
    pub fn all() -> Vec<Parameter> {
        vec![Parameter::FoF2, Parameter::HmF2, Parameter::NmF2]
    }
}

/// F2 layer peak
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct F2Peak {
    /// Critical frequency foF2 (MHz)
    pub fo: f64,
    /// Peak altitude hmF2 (km)
    pub hm: f64,
    /// Peak density NmF2 (m-3)
    pub nm: f64,
}

/// E layer peak
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EPeak {
    /// Critical frequency foE (MHz)
    pub fo: f64,
    /// Peak density NmE (m-3)
    pub nm: f64,
}

/// One model evaluation: peak parameters and, in daily mode,
/// the electron density profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    /// F2 layer peak
    pub f2: F2Peak,
    /// E layer peak
    pub e: EPeak,
    /// Electron density profile, daily mode only
    pub profile: Option<ElectronDensityProfile>,
}

impl Evaluation {
    /// Scalar value of given [Parameter].
    /// [Parameter::All] is a selection shortcut, not a scalar: None.
    pub fn scalar(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::FoF2 => Some(self.f2.fo),
            Parameter::HmF2 => Some(self.f2.hm),
            Parameter::NmF2 => Some(self.f2.nm),
            Parameter::All => None,
        }
    }
    /// Vertical TEC in TECu, integrated from the density profile.
    /// Errors out in monthly median mode, where no profile exists.
    pub fn vtec_tecu(&self) -> Result<f64, Error> {
        let profile = self.profile.as_ref().ok_or(Error::MissingProfile)?;
        Ok(profile.vtec_tecu())
    }
}

/// Daily evaluation at (lat, lon) in decimal degrees:
/// resolves both layer peaks and the electron density profile,
/// for the exact day of year and provided F10.7 flux.
pub fn daily(epoch: Epoch, f107: f64, lat_ddeg: f64, lon_ddeg: f64) -> Result<Evaluation, Error> {
    resolve(epoch, f107, lat_ddeg, lon_ddeg, true)
}

/// Monthly median evaluation at (lat, lon) in decimal degrees:
/// layer peaks only, with the day snapped to the middle of the month.
pub fn monthly_median(
    epoch: Epoch,
    f107: f64,
    lat_ddeg: f64,
    lon_ddeg: f64,
) -> Result<Evaluation, Error> {
    let (y, m, _, h, min, _, _) = epoch.to_gregorian_utc();
    let median = Epoch::maybe_from_gregorian_utc(y, m, 15, h, min, 0, 0)
        .map_err(|_| Error::InvalidDate)?;
    resolve(median, f107, lat_ddeg, lon_ddeg, false)
}

fn resolve(
    epoch: Epoch,
    f107: f64,
    lat_ddeg: f64,
    lon_ddeg: f64,
    with_profile: bool,
) -> Result<Evaluation, Error> {
    if !(-90.0..=90.0).contains(&lat_ddeg) {
        return Err(Error::InvalidLatitude(lat_ddeg));
    }
    if !(-180.0..=180.0).contains(&lon_ddeg) {
        return Err(Error::InvalidLongitude(lon_ddeg));
    }

    let lat = lat_ddeg * D2R;
    let lon = lon_ddeg * D2R;

    let (_, month, _, h, min, _, _) = epoch.to_gregorian_utc();
    let hour = h as f64 + min as f64 / 60.0;
    // whole day count: the intra day fraction is carried by `hour`
    let day_of_year = epoch.day_of_year().floor();

    let sun = SolarAngles::resolve(lat, lon, day_of_year, hour);

    let fo_e = foe::fo_e(lat, &sun, f107, month, hour);
    let e = EPeak {
        fo: fo_e,
        nm: f2::peak_density(fo_e),
    };

    let fo_f2 = f2::fo_f2(lat, lon, &sun, f107, day_of_year);
    let hm_f2 = f2::hm_f2(fo_f2, fo_e, f2::m3000_f2(&sun, f107));
    let f2 = F2Peak {
        fo: fo_f2,
        hm: hm_f2,
        nm: f2::peak_density(fo_f2),
    };

    #[cfg(feature = "log")]
    log::debug!(
        "({:.1}, {:.1}) doy {:.0} {:02.0}h UTC: foF2 {:.2} MHz, hmF2 {:.0} km",
        lat_ddeg,
        lon_ddeg,
        day_of_year,
        hour,
        f2.fo,
        f2.hm
    );

    let profile = with_profile.then(|| ElectronDensityProfile::from_peaks(&f2, &e));

    Ok(Evaluation { f2, e, profile })
}
