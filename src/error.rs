use thiserror::Error;

/// Model and grid definition errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("latitude off range (expecting -90..=+90): {0}")]
    InvalidLatitude(f64),
    #[error("longitude off range (expecting -180..=+180): {0}")]
    InvalidLongitude(f64),
    #[error("faulty grid definition: spacing must be strictly positive, got {0}")]
    BadGridSpacing(f64),
    #[error("faulty grid definition: span {0}..{1} is reversed")]
    BadGridSpan(f64, f64),
    #[error("non representable date")]
    InvalidDate,
    #[error("no profile data: vertical TEC requires a density profile")]
    MissingProfile,
}
