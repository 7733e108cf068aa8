use crate::maps::camera::FlySettings;
use crate::maps::options::{ControlPosition, FogSettings, NavigationControlOptions, ViewOptions};
use crate::maps::rotation::RotationSettings;
use crate::models::Coordinates;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub mapbox_access_token: String,
    pub launches_url: String,
    pub globe: GlobeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            mapbox_access_token: String::new(),
            launches_url: DEFAULT_LAUNCHES_URL.to_string(),
            globe: GlobeConfig::default(),
        }
    }
}

pub const DEFAULT_LAUNCHES_URL: &str =
    "https://ll.thespacedevs.com/2.2.0/launch/upcoming/?limit=50&mode=normal";

pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/mapbox/satellite-v9";

/// Fixed configuration of the globe view
#[derive(Debug, Clone)]
pub struct GlobeConfig {
    pub style_url: String,
    pub initial_center: Coordinates,
    pub initial_zoom: f64,
    pub initial_pitch: f64,
    pub fog: FogSettings,
    pub navigation: NavigationControlOptions,
    pub navigation_position: ControlPosition,
    /// Delay before the post-load `resize()` (container sizing race)
    pub resize_delay_ms: u32,
    pub fly: FlySettings,
    pub rotation: RotationSettings,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
            initial_center: Coordinates::new(-30.0, 20.0),
            initial_zoom: 1.5,
            initial_pitch: 15.0,
            fog: FogSettings::default(),
            navigation: NavigationControlOptions::default(),
            navigation_position: ControlPosition::TopRight,
            resize_delay_ms: 100,
            fly: FlySettings::default(),
            rotation: RotationSettings::default(),
        }
    }
}

impl GlobeConfig {
    /// Options for the map constructor: globe projection, all gestures on
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            style: self.style_url.clone(),
            projection: "globe".to_string(),
            zoom: self.initial_zoom,
            center: self.initial_center.as_lng_lat(),
            pitch: self.initial_pitch,
            drag_rotate: true,
            pitch_with_rotate: true,
            touch_zoom_rotate: true,
            touch_pitch: true,
            scroll_zoom: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from build-time environment variables (see build.rs)
    pub fn from_env() -> Self {
        let defaults = GlobeConfig::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), true),
            mapbox_access_token: option_env!("MAPBOX_ACCESS_TOKEN")
                .unwrap_or("").to_string(),
            launches_url: option_env!("LAUNCHES_URL")
                .unwrap_or(DEFAULT_LAUNCHES_URL).to_string(),
            globe: GlobeConfig {
                style_url: option_env!("GLOBE_STYLE_URL")
                    .unwrap_or(DEFAULT_STYLE_URL).to_string(),
                initial_center: Coordinates::new(
                    parse_or(option_env!("GLOBE_CENTER_LNG"), defaults.initial_center.longitude),
                    parse_or(option_env!("GLOBE_CENTER_LAT"), defaults.initial_center.latitude),
                ),
                initial_zoom: parse_or(option_env!("GLOBE_INITIAL_ZOOM"), defaults.initial_zoom),
                initial_pitch: parse_or(option_env!("GLOBE_INITIAL_PITCH"), defaults.initial_pitch),
                rotation: RotationSettings {
                    seconds_per_revolution: parse_or(
                        option_env!("GLOBE_SECONDS_PER_REVOLUTION"),
                        defaults.rotation.seconds_per_revolution,
                    ),
                    ..defaults.rotation.clone()
                },
                ..defaults
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }
}

/// Parse a build-time value, falling back to `default` when unset or malformed
fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
