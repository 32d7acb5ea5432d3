//! Electron density profiles and their vertical integration.
use lazy_static::lazy_static;

use crate::constants::{HM_E, SCALE_HEIGHT_E, TECU};
use crate::linspace::Linspace;
use crate::model::{EPeak, F2Peak};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Altitude grid for density profiles: 60 km to 1000 km, 10 km steps.
    pub static ref EDP_ALTITUDES: Linspace = Linspace {
        start: 60.0,
        end: 1000.0,
        spacing: 10.0,
    };
}

/// Electron density versus altitude, sampled over [EDP_ALTITUDES]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElectronDensityProfile {
    /// Altitude grid (km)
    pub altitudes: Linspace,
    /// Electron density samples (m-3), one per altitude
    pub densities: Vec<f64>,
}

/// Alpha Chapman layer density (m-3) at `alt` km,
/// for peak density `nm` (m-3) at `hm` km with scale height `scale` km.
fn chapman(alt: f64, nm: f64, hm: f64, scale: f64) -> f64 {
    let z = (alt - hm) / scale;
    nm * f64::exp(0.5 * (1.0 - z - f64::exp(-z)))
}

/// F2 scale height (km) grows with the peak altitude
fn f2_scale_height(hm_f2: f64) -> f64 {
    (45.0 + 0.15 * (hm_f2 - 250.0)).clamp(30.0, 80.0)
}

impl ElectronDensityProfile {
    /// Builds the two layer (F2 + E) Chapman profile
    /// for resolved peak parameters.
    pub fn from_peaks(f2: &F2Peak, e: &EPeak) -> Self {
        let altitudes = EDP_ALTITUDES.clone();
        let scale_f2 = f2_scale_height(f2.hm);
        let densities = altitudes
            .iter()
            .map(|alt| {
                chapman(alt, f2.nm, f2.hm, scale_f2) + chapman(alt, e.nm, HM_E, SCALE_HEIGHT_E)
            })
            .collect();
        Self {
            altitudes,
            densities,
        }
    }
    /// Vertical TEC in TECu (1 TECu = 10^16 el/m2):
    /// trapezoidal integration of the profile over altitude.
    pub fn vtec_tecu(&self) -> f64 {
        let dx = self.altitudes.spacing * 1.0E3; // km to m
        let mut integral = 0.0;
        for pair in self.densities.windows(2) {
            integral += 0.5 * (pair[0] + pair[1]) * dx;
        }
        integral / TECU
    }
    /// Returns (altitude km, density m-3) of the profile maximum
    pub fn peak(&self) -> (f64, f64) {
        let mut peak = (self.altitudes.start, 0.0);
        for (nth, density) in self.densities.iter().enumerate() {
            if *density > peak.1 {
                peak = (self.altitudes.sample(nth), *density);
            }
        }
        peak
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{EPeak, F2Peak};

    fn peaks() -> (F2Peak, EPeak) {
        (
            F2Peak {
                fo: 10.0,
                hm: 300.0,
                nm: 1.24E12,
            },
            EPeak {
                fo: 3.0,
                nm: 1.116E11,
            },
        )
    }

    #[test]
    fn profile_sampling() {
        let (f2, e) = peaks();
        let profile = ElectronDensityProfile::from_peaks(&f2, &e);
        assert_eq!(profile.densities.len(), 95);
        assert_eq!(profile.altitudes.sample(0), 60.0);
        assert_eq!(profile.altitudes.sample(94), 1000.0);
        // profile peaks at hmF2 (on grid)
        let (alt, nm) = profile.peak();
        assert_eq!(alt, 300.0);
        assert!((nm - f2.nm) / f2.nm < 0.05);
    }
    #[test]
    fn trapezoid() {
        // flat profile: integral is density * span
        let profile = ElectronDensityProfile {
            altitudes: Linspace {
                start: 0.0,
                end: 100.0,
                spacing: 10.0,
            },
            densities: vec![1.0E11; 11],
        };
        let expected = 1.0E11 * 100.0E3 / TECU;
        assert!((profile.vtec_tecu() - expected).abs() < 1E-9);

        let profile = ElectronDensityProfile {
            altitudes: Linspace {
                start: 0.0,
                end: 100.0,
                spacing: 10.0,
            },
            densities: vec![0.0; 11],
        };
        assert_eq!(profile.vtec_tecu(), 0.0);
    }
    #[test]
    fn vtec_magnitude() {
        let (f2, e) = peaks();
        let profile = ElectronDensityProfile::from_peaks(&f2, &e);
        let vtec = profile.vtec_tecu();
        // daytime midlatitude conditions: tens of TECu
        assert!(vtec > 1.0 && vtec < 200.0);
    }
}
