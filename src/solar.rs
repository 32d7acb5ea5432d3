//! Solar position geometry: declination, equation of time,
//! hour angle, zenith angle, local sunrise/sunset.
use std::f64::consts::PI;

use crate::constants::{D2R, R2D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solar geometry resolved for one (day of year, UTC hour, location)
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarAngles {
    /// Hour angle (radians)
    pub ha: f64,
    /// Sunrise/sunset hour angle (radians)
    pub sha: f64,
    /// Solar zenith angle (radians), always positive
    pub sza: f64,
    /// Solar declination (radians)
    pub decl: f64,
    /// Equation of time (minutes)
    pub eot: f64,
    /// Local sunrise relative to UTC (fractional hours)
    pub lsr: f64,
    /// Local solar noon relative to UTC (fractional hours)
    pub lsn: f64,
    /// Local sunset relative to UTC (fractional hours)
    pub lss: f64,
}

impl SolarAngles {
    /// Resolves solar geometry at (lat, lon) in radians,
    /// for given day of year (1.0..=366.0) and decimal UTC hour.
    pub fn resolve(lat: f64, lon: f64, day_of_year: f64, hour: f64) -> Self {
        let a = 0.98565327; // average angle per day
        let b = 3.98891967; // minutes per degree of Earth's rotation
        let s = f64::sin(23.45 * D2R); // Earth's tilt sine
        let c = f64::cos(23.45 * D2R); // Earth's tilt cosine
        let v = 78.746118 * D2R; // value of nu on March 21st

        let tzone = (lon / (15.0 * D2R)) as i32 as f64;
        let ltime = hour + tzone;

        let d = day_of_year + hour / 24.0;

        // Elliptic orbit arc: assume perihelion on January 2nd.
        let lambda = a * D2R * (d - 2.0);
        // 360/PI * 0.016713 (elliptic shape factor) = 1.915169
        let nu = lambda + 1.915169 * D2R * f64::sin(lambda);

        // Mean sun angle after N - 80 days, kept within +- PI/2
        let mut epsilon = a * D2R * (d - 80.0);
        if epsilon >= 270.0 * D2R {
            epsilon -= 2.0 * PI;
        } else if epsilon >= 90.0 * D2R {
            epsilon -= PI;
        }

        let beta = f64::atan(c * f64::tan(epsilon));

        // Equation of time = tilt effect + elliptic effect
        let eot = b * (epsilon - beta + (lambda - nu)) * R2D;

        let decl =
            f64::asin(s * f64::sin(f64::sin(a * (d - 2.0) * D2R) * 0.016713 + a * (d - 2.0) * D2R - v));

        // True solar time, corrected for longitude offset and eot
        let toffset = (lon / (15.0 * D2R) - tzone) * 60.0 + eot;
        let tst = ltime * 60.0 + toffset;
        let ha = (tst / 4.0 - 180.0) * D2R;

        let sha = f64::acos(
            f64::cos(90.833 * D2R) / (f64::cos(lat) * f64::cos(decl)) - f64::tan(lat) * f64::tan(decl),
        );

        // watch out for roundoff at |cos(sza)| = 1
        let mut cosphi = f64::sin(lat) * f64::sin(decl) + f64::cos(lat) * f64::cos(decl) * f64::cos(ha);
        cosphi = cosphi.clamp(-1.0, 1.0);
        let sza = f64::acos(cosphi);

        // Longitude sign switches for the time calculations
        let lsr = ((720.0 + (-lon - sha) * R2D * 4.0 - eot) / 60.0 + 24.0) % 24.0;
        let lss = ((720.0 + (-lon + sha) * R2D * 4.0 - eot) / 60.0 + 24.0) % 24.0;
        let lsn = ((720.0 + -lon * R2D * 4.0 - eot) / 60.0 + 24.0) % 24.0;

        Self {
            ha,
            sha,
            sza,
            decl,
            eot,
            lsr,
            lsn,
            lss,
        }
    }
    /// Returns true if the sun is above the horizon
    pub fn is_daytime(&self) -> bool {
        self.sza < PI / 2.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::D2R;

    #[test]
    fn declination_bounds() {
        for doy in [1.0, 80.0, 172.0, 266.0, 355.0] {
            for hour in [0.0, 6.0, 12.0, 18.0] {
                let sun = SolarAngles::resolve(45.0 * D2R, 0.0, doy, hour);
                assert!(sun.decl.abs() <= 23.45 * D2R + 0.02);
                assert!(sun.sza >= 0.0 && sun.sza <= PI);
            }
        }
    }
    #[test]
    fn equinox_noon() {
        // spring equinox, noon at greenwich: sza close to |latitude|
        let sun = SolarAngles::resolve(45.0 * D2R, 0.0, 80.0, 12.0);
        assert!(sun.decl.abs() < 2.0 * D2R);
        assert!((sun.sza - 45.0 * D2R).abs() < 4.0 * D2R);
        assert!(sun.is_daytime());
    }
    #[test]
    fn midnight_is_dark() {
        let sun = SolarAngles::resolve(45.0 * D2R, 0.0, 172.0, 0.0);
        assert!(!sun.is_daytime());
    }
}
