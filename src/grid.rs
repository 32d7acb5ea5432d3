//! Map grid definitions, in terms of latitude and longitude linear spaces.
use itertools::Itertools;

use crate::error::Error;
use crate::linspace::Linspace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference map grid, defined in terms of latitude and longitude
/// linear spaces, both in decimal degrees.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapGrid {
    /// Latitude space
    pub latitude: Linspace,
    /// Longitude space
    pub longitude: Linspace,
}

impl MapGrid {
    /// Builds the world wide grid at given resolution (degrees):
    /// latitudes -90..=+90, longitudes -180..=+180,
    /// poles and both antimeridian copies included when divisible.
    pub fn global(resolution: f64) -> Result<Self, Error> {
        Ok(Self {
            latitude: Linspace::new(-90.0, 90.0, resolution)?,
            longitude: Linspace::new(-180.0, 180.0, resolution)?,
        })
    }
    /// Builds the degenerate single point grid
    pub fn single_point(lat_ddeg: f64, lon_ddeg: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&lat_ddeg) {
            return Err(Error::InvalidLatitude(lat_ddeg));
        }
        if !(-180.0..=180.0).contains(&lon_ddeg) {
            return Err(Error::InvalidLongitude(lon_ddeg));
        }
        Ok(Self {
            latitude: Linspace::new(lat_ddeg, lat_ddeg, 1.0)?,
            longitude: Linspace::new(lon_ddeg, lon_ddeg, 1.0)?,
        })
    }
    /// Total number of grid points
    pub fn len(&self) -> usize {
        self.latitude.length() * self.longitude.length()
    }
    /// Returns true on empty (impossible by construction) grids
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Iterates all (lat, lon) points in row major order:
    /// latitude rows, longitude scanned within each row.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.latitude.iter().cartesian_product(self.longitude.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn global_10deg() {
        let grid = MapGrid::global(10.0).unwrap();
        assert_eq!(grid.latitude.length(), 19);
        assert_eq!(grid.longitude.length(), 37);
        assert_eq!(grid.len(), 19 * 37);

        let points: Vec<(f64, f64)> = grid.iter().collect();
        assert_eq!(points.len(), 703);
        // row major: latitude rows, longitude within a row
        assert_eq!(points[0], (-90.0, -180.0));
        assert_eq!(points[1], (-90.0, -170.0));
        assert_eq!(points[37], (-80.0, -180.0));
        assert_eq!(points[702], (90.0, 180.0));
    }
    #[test]
    fn global_default_resolution() {
        let grid = MapGrid::global(5.0).unwrap();
        assert_eq!(grid.len(), 37 * 73);
    }
    #[test]
    fn single_point() {
        let grid = MapGrid::single_point(45.5, -73.5).unwrap();
        assert_eq!(grid.len(), 1);
        let points: Vec<(f64, f64)> = grid.iter().collect();
        assert_eq!(points, vec![(45.5, -73.5)]);

        assert!(MapGrid::single_point(90.5, 0.0).is_err());
        assert!(MapGrid::single_point(0.0, -180.5).is_err());
    }
    #[test]
    fn bad_resolution() {
        assert!(MapGrid::global(0.0).is_err());
        assert!(MapGrid::global(-5.0).is_err());
    }
}
