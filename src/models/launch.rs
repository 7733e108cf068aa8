use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A launch as displayed on the globe. Read-only for the map code.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Launch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub pad_name: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    /// "No earlier than" time of the launch window
    #[serde(default)]
    pub net: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Launch {
    /// Position of the pad, only when both values are present and finite
    pub fn coordinates(&self) -> Option<Coordinates> {
        let latitude = self.latitude.filter(|v| v.is_finite())?;
        let longitude = self.longitude.filter(|v| v.is_finite())?;
        Some(Coordinates::new(longitude, latitude))
    }

    /// Label used for the marker tooltip
    pub fn marker_title(&self) -> String {
        match &self.pad_name {
            Some(pad) => format!("{} ({})", self.name, pad),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(lat: Option<f64>, lon: Option<f64>) -> Launch {
        Launch {
            id: "l-1".to_string(),
            name: "Falcon 9 | Starlink".to_string(),
            provider: None,
            pad_name: None,
            location_name: None,
            net: None,
            status: None,
            image: None,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn test_coordinates_require_both_values() {
        assert_eq!(
            launch(Some(28.5), Some(-80.6)).coordinates(),
            Some(Coordinates::new(-80.6, 28.5))
        );
        assert_eq!(launch(None, Some(-120.0)).coordinates(), None);
        assert_eq!(launch(Some(34.7), None).coordinates(), None);
        assert_eq!(launch(Some(f64::NAN), Some(10.0)).coordinates(), None);
    }

    #[test]
    fn test_marker_title_includes_pad() {
        let mut l = launch(None, None);
        assert_eq!(l.marker_title(), "Falcon 9 | Starlink");
        l.pad_name = Some("SLC-40".to_string());
        assert_eq!(l.marker_title(), "Falcon 9 | Starlink (SLC-40)");
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let l: Launch = serde_json::from_str(r#"{"id":"a","name":"Electron","latitude":null}"#)
            .expect("valid launch json");
        assert_eq!(l.name, "Electron");
        assert!(l.coordinates().is_none());
    }
}
