//! Synthetic F10.7 solar flux series.
use std::f64::consts::PI;

/// Quiet sun baseline (solar flux units)
const BASE: f64 = 110.0;

/// Annual modulation amplitude (sfu)
const ANNUAL: f64 = 20.0;

/// 27 day solar rotation modulation amplitude (sfu)
const ROTATION: f64 = 15.0;

/// Physical bounds applied to the series (sfu)
const BOUNDS: (f64, f64) = (70.0, 250.0);

/// Synthetic daily F10.7 flux for given day of year:
/// baseline plus annual and 27 day solar rotation modulations,
/// clamped to physical bounds. Deterministic: re-running a
/// sweep yields the identical series.
pub fn synthetic_flux(day_of_year: f64) -> f64 {
    let t = day_of_year - 1.0;
    let annual = ANNUAL * f64::sin(2.0 * PI * t / 365.25);
    let rotation = ROTATION * f64::sin(2.0 * PI * t / 27.0);
    (BASE + annual + rotation).clamp(BOUNDS.0, BOUNDS.1)
}

/// Number of days in given year
pub fn days_in_year(year: i32) -> u16 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    if leap {
        366
    } else {
        365
    }
}
