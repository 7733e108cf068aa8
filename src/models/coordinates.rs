use serde::{Deserialize, Serialize};

/// Geographic position in degrees. Mapbox expects `[lng, lat]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// `[lng, lat]` pair as used by `LngLatLike`
    pub fn as_lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Point on the unit sphere (x towards lng 0, z towards the north pole)
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let lat = self.latitude.to_radians();
        let lng = self.longitude.to_radians();
        [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
    }

    /// Great-circle angle to `other`, in degrees
    pub fn angular_distance(&self, other: &Coordinates) -> f64 {
        let a = self.to_unit_vector();
        let b = other.to_unit_vector();
        let dot = (a[0] * b[0] + a[1] * b[1] + a[2] * b[2]).clamp(-1.0, 1.0);
        dot.acos().to_degrees()
    }

    /// Longitude wrapped into [-180, 180)
    pub fn wrapped(&self) -> Self {
        let lng = (self.longitude + 180.0).rem_euclid(360.0) - 180.0;
        Self::new(lng, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_distance() {
        let canaveral = Coordinates::new(-80.6, 28.5);
        assert!(canaveral.angular_distance(&canaveral) < 1e-6);

        let equator_a = Coordinates::new(0.0, 0.0);
        let equator_b = Coordinates::new(90.0, 0.0);
        assert!((equator_a.angular_distance(&equator_b) - 90.0).abs() < 1e-9);

        let antipode = Coordinates::new(180.0, 0.0);
        assert!((equator_a.angular_distance(&antipode) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrapped_longitude() {
        assert_eq!(Coordinates::new(190.0, 10.0).wrapped(), Coordinates::new(-170.0, 10.0));
        assert_eq!(Coordinates::new(-181.0, 0.0).wrapped(), Coordinates::new(179.0, 0.0));
        assert_eq!(Coordinates::new(45.0, 0.0).wrapped(), Coordinates::new(45.0, 0.0));
    }
}
