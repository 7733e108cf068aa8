// ============================================================================
// MAP OPTIONS - Objects handed to Mapbox GL JS
// ============================================================================
// Serialized with serde, field names follow the Mapbox API
// ============================================================================

use serde::Serialize;

use crate::models::Coordinates;

/// Options for `new mapboxgl.Map(...)`; the container is attached by the platform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub style: String,
    pub projection: String,
    pub zoom: f64,
    pub center: [f64; 2],
    pub pitch: f64,
    pub drag_rotate: bool,
    pub pitch_with_rotate: bool,
    pub touch_zoom_rotate: bool,
    pub touch_pitch: bool,
    pub scroll_zoom: bool,
}

/// Atmosphere applied once the style is loaded (`map.setFog`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FogSettings {
    pub color: String,
    pub high_color: String,
    pub horizon_blend: f64,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            color: "rgb(186, 210, 235)".to_string(),
            high_color: "rgb(36, 92, 223)".to_string(),
            horizon_blend: 0.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationControlOptions {
    pub show_compass: bool,
    pub show_zoom: bool,
    pub visualize_pitch: bool,
}

impl Default for NavigationControlOptions {
    fn default() -> Self {
        Self {
            show_compass: true,
            show_zoom: true,
            visualize_pitch: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlPosition::TopLeft => "top-left",
            ControlPosition::TopRight => "top-right",
            ControlPosition::BottomLeft => "bottom-left",
            ControlPosition::BottomRight => "bottom-right",
        }
    }
}

/// Camera animation for `map.flyTo`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyToOptions {
    pub center: [f64; 2],
    pub zoom: f64,
    pub speed: f64,
    pub curve: f64,
    pub essential: bool,
}

/// Camera step for `map.easeTo`, used by the idle rotation.
/// The web platform adds a linear `easing` function on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EaseToOptions {
    pub center: [f64; 2],
    pub duration: u32,
}

impl EaseToOptions {
    pub fn new(center: Coordinates, duration_ms: u32) -> Self {
        Self {
            center: center.as_lng_lat(),
            duration: duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fog_uses_style_spec_names() {
        let value = serde_json::to_value(FogSettings::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "color": "rgb(186, 210, 235)",
                "high-color": "rgb(36, 92, 223)",
                "horizon-blend": 0.02,
            })
        );
    }

    #[test]
    fn test_navigation_control_options() {
        let value = serde_json::to_value(NavigationControlOptions::default()).unwrap();
        assert_eq!(value["showCompass"], json!(true));
        assert_eq!(value["visualizePitch"], json!(true));
        assert_eq!(ControlPosition::TopRight.as_str(), "top-right");
    }

    #[test]
    fn test_view_options_camel_case() {
        let options = ViewOptions {
            style: "mapbox://styles/mapbox/satellite-v9".to_string(),
            projection: "globe".to_string(),
            zoom: 1.5,
            center: [-30.0, 20.0],
            pitch: 15.0,
            drag_rotate: true,
            pitch_with_rotate: true,
            touch_zoom_rotate: true,
            touch_pitch: true,
            scroll_zoom: true,
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["projection"], json!("globe"));
        assert_eq!(value["dragRotate"], json!(true));
        assert_eq!(value["center"], json!([-30.0, 20.0]));
    }
}
