//! Physical constants shared by the model modules.

use std::f64::consts::PI;

/// Degrees to radians
pub const D2R: f64 = PI / 180.0;

/// Radians to degrees
pub const R2D: f64 = 180.0 / PI;

/// One TEC unit, in electrons per square meter
pub const TECU: f64 = 1.0E16;

/// Peak density from critical frequency: Nm [m-3] = NM_PER_MHZ2 * fo^2 [MHz]
pub const NM_PER_MHZ2: f64 = 1.24E10;

/// Geomagnetic (tilted dipole) north pole latitude, decimal degrees
pub const DIPOLE_POLE_LAT: f64 = 80.65;

/// Geomagnetic (tilted dipole) north pole longitude, decimal degrees
pub const DIPOLE_POLE_LON: f64 = -72.68;

/// E layer peak altitude (km)
pub const HM_E: f64 = 110.0;

/// E layer scale height (km)
pub const SCALE_HEIGHT_E: f64 = 10.0;
