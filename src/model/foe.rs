//! E layer critical frequency, by the method in ITU-R P.1239.
use crate::constants::{D2R, R2D};
use crate::solar::SolarAngles;
use std::f64::consts::PI;

/// Critical frequency of the E layer (MHz), determined by the
/// four factor method of ITU-R P.1239: solar activity, season,
/// latitude and time of day. `phi` is the monthly mean 10.7 cm
/// solar radio flux, `lat` in radians, `month` in 1..=12.
pub fn fo_e(lat: f64, sun: &SolarAngles, phi: f64, month: u8, hour: f64) -> f64 {
    // A: solar activity factor
    let a = 1.0 + 0.0094 * (phi - 66.0);

    // B: seasonal factor
    let m = if lat.abs() < 32.0 * D2R {
        -1.93 + 1.92 * f64::cos(lat)
    } else {
        0.11 - 0.49 * f64::cos(lat)
    };
    let n = if (lat - sun.decl).abs() < 80.0 * D2R {
        lat - sun.decl
    } else {
        80.0 * D2R
    };
    let b = f64::powf(f64::cos(n), m);

    // C: main latitude factor
    let (x, y) = if lat.abs() < 32.0 * D2R {
        (23.0, 116.0)
    } else {
        (92.0, 35.0)
    };
    let c = x + y * f64::cos(lat);

    // D: time of day factor
    let p = if lat.abs() <= 12.0 * D2R { 1.31 } else { 1.2 };

    let d = if sun.sza <= 73.0 * D2R {
        f64::powf(f64::cos(sun.sza), p)
    } else if sun.sza < PI / 2.0 {
        // twilight correction below 90 deg
        let dsza = 6.27E-13 * f64::powf(sun.sza * R2D - 50.0, 8.0) * D2R;
        f64::powf(f64::cos(sun.sza - dsza), p)
    } else {
        // night: hours elapsed since local sunset
        let hour_adj = ((hour as i32 + 1) % 24) as f64;
        let h = if sun.lss >= sun.lsr && hour_adj >= sun.lss && hour_adj >= sun.lsr {
            hour_adj - sun.lss
        } else if sun.lss < sun.lsr && hour_adj >= sun.lss && hour_adj < sun.lsr {
            hour_adj - sun.lss
        } else if sun.lss >= sun.lsr && hour_adj < sun.lss && hour_adj < sun.lsr {
            24.0 - sun.lss + hour_adj
        } else {
            0.0
        };
        // Polar night: civil twilight at 72.5622 deg, P.1239 limits
        // the decay there. Median months, hence the 3 month windows.
        let polar_winter = (lat > 72.5622 * D2R && (month == 11 || month == 12 || month == 1))
            || (lat < -72.5622 * D2R && (month == 5 || month == 6 || month == 7));
        if polar_winter {
            f64::powf(0.072, p) * f64::exp(25.2 - 0.28 * sun.sza * R2D)
        } else {
            f64::max(
                f64::powf(0.072, p) * f64::exp(-1.4 * h),
                f64::powf(0.072, p) * f64::exp(25.2 - 0.28 * sun.sza * R2D),
            )
        }
    };

    // nighttime floor keeps foE physical
    f64::max(
        f64::powf(a * b * c * d, 0.25),
        f64::powf(0.004 * f64::powf(1.0 + 0.021 * phi, 2.0), 0.25),
    )
}
