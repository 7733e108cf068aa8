use crate::models::Coordinates;
use super::options::FlyToOptions;
use super::traits::GlobeView;

/// How the camera moves to a clicked launch site
#[derive(Debug, Clone, PartialEq)]
pub struct FlySettings {
    pub zoom: f64,
    pub speed: f64,
    pub curve: f64,
}

impl Default for FlySettings {
    fn default() -> Self {
        Self {
            zoom: 5.0,
            speed: 1.2,
            curve: 1.42,
        }
    }
}

impl FlySettings {
    pub fn options_for(&self, target: Coordinates) -> FlyToOptions {
        FlyToOptions {
            center: target.as_lng_lat(),
            zoom: self.zoom,
            speed: self.speed,
            curve: self.curve,
            // user-triggered, so it runs even with prefers-reduced-motion
            essential: true,
        }
    }
}

/// Animate the camera to `target`
pub fn fly_to<V: GlobeView>(view: &V, target: Coordinates, settings: &FlySettings) {
    log::info!("🎯 Flying to ({:.4}, {:.4})", target.latitude, target.longitude);
    view.fly_to(&settings.options_for(target));
}
