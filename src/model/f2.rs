//! F2 layer peak parameterization: foF2, M(3000)F2, hmF2.
use crate::constants::{D2R, DIPOLE_POLE_LAT, DIPOLE_POLE_LON, NM_PER_MHZ2, R2D};
use crate::solar::SolarAngles;

/// Base critical frequency scale (MHz)
const FOF2_BASE: f64 = 9.5;

/// Linear flux dependence, per solar flux unit above the quiet floor
const FOF2_FLUX_SLOPE: f64 = 0.008;

/// Appleton anomaly crest amplitude and magnetic latitude (degrees)
const ANOMALY_AMPLITUDE: f64 = 0.25;
const ANOMALY_CREST_LAT: f64 = 15.0;
const ANOMALY_WIDTH: f64 = 17.0;

/// Winter anomaly amplitude on the seasonal term
const WINTER_ANOMALY: f64 = 0.15;

/// Nighttime maintenance floor on the diurnal driver
const NIGHT_FLOOR: f64 = 0.07;

/// Magnetic latitude (radians) of a geographic location (radians),
/// for a tilted centered dipole.
pub fn dipole_latitude(lat: f64, lon: f64) -> f64 {
    let pole_lat = DIPOLE_POLE_LAT * D2R;
    let pole_lon = DIPOLE_POLE_LON * D2R;
    f64::asin(
        f64::sin(lat) * f64::sin(pole_lat)
            + f64::cos(lat) * f64::cos(pole_lat) * f64::cos(lon - pole_lon),
    )
}

/// F2 layer critical frequency (MHz).
/// Monthly median parameterization: solar activity scaling,
/// diurnal driver from the solar zenith angle, equatorial anomaly
/// crests over magnetic latitude and a winter anomaly seasonal term.
pub fn fo_f2(lat: f64, lon: f64, sun: &SolarAngles, phi: f64, day_of_year: f64) -> f64 {
    let maglat = dipole_latitude(lat, lon);
    let maglat_deg = maglat * R2D;

    let activity = 1.0 + FOF2_FLUX_SLOPE * (phi - 66.0);

    let crest = ((maglat_deg.abs() - ANOMALY_CREST_LAT) / ANOMALY_WIDTH).powi(2);
    let latitude = f64::cos(maglat).powf(0.3) * (1.0 + ANOMALY_AMPLITUDE * f64::exp(-crest));

    let seasonal = 1.0
        - WINTER_ANOMALY
            * f64::cos(2.0 * std::f64::consts::PI * (day_of_year - 172.0) / 365.25)
            * f64::tanh(lat * R2D / 45.0);

    let driver = f64::max(f64::cos(sun.sza), NIGHT_FLOOR);
    let diurnal = 0.4 + 0.6 * driver.powf(0.6);

    FOF2_BASE * activity.sqrt() * latitude * seasonal * diurnal
}

/// M(3000)F2 propagation factor: MUF(3000)/foF2.
/// Larger by night (higher reflection point), slightly depressed
/// by rising solar flux.
pub fn m3000_f2(sun: &SolarAngles, phi: f64) -> f64 {
    let driver = f64::max(f64::cos(sun.sza), 0.0);
    2.8 + 0.5 * driver - 0.0007 * (phi - 100.0)
}

/// F2 peak altitude (km), from M(3000)F2 through the
/// Bradley-Dudeney relation, corrected for underlying ionization
/// by the foF2/foE ratio.
pub fn hm_f2(fo_f2: f64, fo_e: f64, m3000: f64) -> f64 {
    // ratio guard keeps the correction finite near twilight
    let ratio = f64::max(fo_f2 / fo_e, 1.7);
    let dm = 0.253 / (ratio - 1.215) - 0.012;
    1490.0 / (m3000 + dm) - 176.0
}

/// Peak density (m-3) from a critical frequency (MHz)
pub fn peak_density(fo: f64) -> f64 {
    NM_PER_MHZ2 * fo * fo
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::D2R;
    use crate::solar::SolarAngles;

    #[test]
    fn dipole() {
        // geographic pole is offset from the magnetic pole
        let maglat = dipole_latitude(90.0 * D2R, 0.0);
        assert!((maglat * R2D - DIPOLE_POLE_LAT).abs() < 1.0);
        // equator crossing stays low magnetic latitude
        let maglat = dipole_latitude(0.0, -72.68 * D2R);
        assert!(maglat.abs() * R2D < 15.0);
    }
    #[test]
    fn fof2_diurnal_cycle() {
        let lat = 40.0 * D2R;
        let noon = SolarAngles::resolve(lat, 0.0, 105.0, 12.0);
        let midnight = SolarAngles::resolve(lat, 0.0, 105.0, 0.0);
        let day = fo_f2(lat, 0.0, &noon, 100.0, 105.0);
        let night = fo_f2(lat, 0.0, &midnight, 100.0, 105.0);
        assert!(day > night);
        assert!(day > 4.0 && day < 16.0);
        assert!(night > 1.0);
    }
    #[test]
    fn fof2_flux_monotonicity() {
        let lat = 40.0 * D2R;
        let sun = SolarAngles::resolve(lat, 0.0, 105.0, 12.0);
        let quiet = fo_f2(lat, 0.0, &sun, 70.0, 105.0);
        let active = fo_f2(lat, 0.0, &sun, 200.0, 105.0);
        assert!(active > quiet);
    }
    #[test]
    fn hmf2_day_night() {
        let noon = SolarAngles::resolve(40.0 * D2R, 0.0, 105.0, 12.0);
        let midnight = SolarAngles::resolve(40.0 * D2R, 0.0, 105.0, 0.0);
        let hm_day = hm_f2(10.0, 3.0, m3000_f2(&noon, 100.0));
        let hm_night = hm_f2(5.0, 0.5, m3000_f2(&midnight, 100.0));
        assert!(hm_night > hm_day);
        assert!(hm_day > 200.0 && hm_day < 350.0);
        assert!(hm_night < 450.0);
    }
}
