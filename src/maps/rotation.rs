// ============================================================================
// IDLE ROTATION - Slow spin of the globe while nobody touches it
// ============================================================================
// Each step is an `easeTo` of one second; the next step is chained on
// `moveend`. Pressing the map pauses the spin, releasing it resumes.
// A `flyTo` replaces the running ease and the spin picks up again on the
// `moveend` that ends the flight.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::Coordinates;
use super::options::EaseToOptions;
use super::traits::{CameraState, GlobeView, ViewEvent};

/// Duration of one ease step (ms)
pub const STEP_DURATION_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct RotationSettings {
    /// Time for a full revolution at low zoom
    pub seconds_per_revolution: f64,
    /// No rotation at or above this zoom
    pub max_spin_zoom: f64,
    /// Rotation slows down above this zoom
    pub slow_spin_zoom: f64,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            seconds_per_revolution: 120.0,
            max_spin_zoom: 5.0,
            slow_spin_zoom: 3.0,
        }
    }
}

impl RotationSettings {
    /// Longitude delta for one step at `zoom`, `None` when zoomed in too far
    pub fn degrees_per_step(&self, zoom: f64) -> Option<f64> {
        if zoom >= self.max_spin_zoom || self.seconds_per_revolution <= 0.0 {
            return None;
        }
        let step_seconds = f64::from(STEP_DURATION_MS) / 1000.0;
        let mut degrees = 360.0 / self.seconds_per_revolution * step_seconds;
        if zoom > self.slow_spin_zoom {
            let zoom_dif = (self.max_spin_zoom - zoom) / (self.max_spin_zoom - self.slow_spin_zoom);
            degrees *= zoom_dif;
        }
        Some(degrees)
    }
}

/// Spin controller bound to one view
pub struct IdleRotation {
    settings: RotationSettings,
    user_interacting: Cell<bool>,
}

impl IdleRotation {
    pub fn new(settings: RotationSettings) -> Self {
        Self {
            settings,
            user_interacting: Cell::new(false),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.user_interacting.get()
    }

    /// Next camera center, `None` while paused or zoomed in
    pub fn next_center(&self, camera: &CameraState) -> Option<Coordinates> {
        if self.user_interacting.get() {
            return None;
        }
        let degrees = self.settings.degrees_per_step(camera.zoom)?;
        Some(Coordinates::new(camera.center.longitude - degrees, camera.center.latitude).wrapped())
    }

    /// Ease the view one step further
    pub fn spin<V: GlobeView>(&self, view: &V) {
        if let Some(center) = self.next_center(&view.camera()) {
            view.ease_to(&EaseToOptions::new(center, STEP_DURATION_MS));
        }
    }

    /// Wire the spin into `view` and take the first step.
    ///
    /// The handlers own the controller; dropping the returned subscriptions stops it.
    pub fn start<V: GlobeView + 'static>(self: Rc<Self>, view: &Rc<V>) -> Vec<V::Subscription> {
        let mut subscriptions = Vec::new();

        for event in [ViewEvent::MouseDown, ViewEvent::TouchStart] {
            let rotation = Rc::clone(&self);
            subscriptions.push(view.on(event, Rc::new(move || {
                rotation.user_interacting.set(true);
            })));
        }

        for event in [
            ViewEvent::MouseUp,
            ViewEvent::TouchEnd,
            ViewEvent::DragEnd,
            ViewEvent::PitchEnd,
            ViewEvent::RotateEnd,
        ] {
            let rotation = Rc::clone(&self);
            let weak_view = Rc::downgrade(view);
            subscriptions.push(view.on(event, Rc::new(move || {
                rotation.user_interacting.set(false);
                if let Some(view) = weak_view.upgrade() {
                    rotation.spin(&*view);
                }
            })));
        }

        {
            let rotation = Rc::clone(&self);
            let weak_view = Rc::downgrade(view);
            subscriptions.push(view.on(ViewEvent::MoveEnd, Rc::new(move || {
                if let Some(view) = weak_view.upgrade() {
                    rotation.spin(&*view);
                }
            })));
        }

        log::info!("🌍 Idle rotation started ({}s per revolution)", self.settings.seconds_per_revolution);
        self.spin(&**view);
        subscriptions
    }
}
