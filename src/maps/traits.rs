use std::rc::Rc;

use crate::models::Coordinates;
use super::marker::MarkerSpec;
use super::options::{
    ControlPosition, EaseToOptions, FlyToOptions, FogSettings, NavigationControlOptions,
    ViewOptions,
};

/// Handler registered on the view or the window
pub type EventHandler = Rc<dyn Fn()>;

/// Platform the globe runs on: creates views, owns process-wide state and timers.
///
/// The browser implementation lives in `maps::web`; tests use `maps::testing`.
pub trait GlobePlatform {
    /// Element the view is bound to
    type Container;
    type View: GlobeView;
    /// Window listener guard, unsubscribes on drop
    type Listener;

    /// Set the library access token (process-wide)
    fn set_access_token(&self, token: &str);

    /// Construct a view bound to `container`
    fn create_view(
        &self,
        container: &Self::Container,
        options: &ViewOptions,
    ) -> Result<Self::View, GlobeError>;

    /// Run `task` once after `delay_ms`
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);

    /// Subscribe to window `resize`
    fn on_window_resize(&self, handler: EventHandler) -> Self::Listener;
}

/// A live map view.
///
/// `ViewEvent::Error` handlers only see errors about the map itself; failed
/// sources, tiles, sprites and glyphs are logged by the platform and dropped
/// (see `MapErrorInfo::is_resource_error`).
pub trait GlobeView {
    type Marker: MarkerHandle;
    /// View event guard, unsubscribes on drop
    type Subscription;

    fn on(&self, event: ViewEvent, handler: EventHandler) -> Self::Subscription;

    /// Like `on`, but the handler fires at most once
    fn once(&self, event: ViewEvent, handler: EventHandler) -> Self::Subscription;

    fn add_navigation_control(&self, options: &NavigationControlOptions, position: ControlPosition);

    fn set_fog(&self, fog: &FogSettings) -> Result<(), GlobeError>;

    /// Recompute the canvas size from the container
    fn resize(&self);

    fn camera(&self) -> CameraState;

    fn fly_to(&self, options: &FlyToOptions);

    fn ease_to(&self, options: &EaseToOptions);

    /// Attach a marker; `on_click` fires when the marker element is clicked
    fn add_marker(&self, spec: &MarkerSpec, on_click: EventHandler) -> Result<Self::Marker, GlobeError>;

    /// Destroy the view and free its resources
    fn remove(&self);
}

/// A marker attached to a view
pub trait MarkerHandle {
    fn position(&self) -> Coordinates;
    fn set_visible(&self, visible: bool);
    fn remove(&self);
}

/// Snapshot of the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub center: Coordinates,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

/// View events the globe listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    StyleLoad,
    Error,
    Rotate,
    Pitch,
    Zoom,
    Move,
    MoveEnd,
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
    DragEnd,
    PitchEnd,
    RotateEnd,
}

impl ViewEvent {
    /// Event name in Mapbox GL JS
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewEvent::StyleLoad => "style.load",
            ViewEvent::Error => "error",
            ViewEvent::Rotate => "rotate",
            ViewEvent::Pitch => "pitch",
            ViewEvent::Zoom => "zoom",
            ViewEvent::Move => "move",
            ViewEvent::MoveEnd => "moveend",
            ViewEvent::MouseDown => "mousedown",
            ViewEvent::MouseUp => "mouseup",
            ViewEvent::TouchStart => "touchstart",
            ViewEvent::TouchEnd => "touchend",
            ViewEvent::DragEnd => "dragend",
            ViewEvent::PitchEnd => "pitchend",
            ViewEvent::RotateEnd => "rotateend",
        }
    }
}

/// Payload of a map `error` event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapErrorInfo {
    pub message: String,
    /// Set when a source or one of its tiles failed
    pub source_id: Option<String>,
    pub tile: bool,
}

impl MapErrorInfo {
    /// Failures of a single resource; the map keeps working without it
    pub fn is_resource_error(&self) -> bool {
        if self.source_id.is_some() || self.tile {
            return true;
        }
        let message = self.message.to_ascii_lowercase();
        ["sprite", "glyph"].iter().any(|kind| message.contains(kind))
    }
}

/// Errors raised while building or driving the globe
#[derive(Debug, Clone, PartialEq)]
pub enum GlobeError {
    /// `new Map(...)` threw
    Construction(String),
    /// The style failed before the view became ready
    StyleLoad(String),
    /// `setFog` threw
    Fog(String),
    /// The marker could not be attached
    Marker(String),
}

impl std::fmt::Display for GlobeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobeError::Construction(msg) => write!(f, "Map construction failed: {}", msg),
            GlobeError::StyleLoad(msg) => write!(f, "Map style failed to load: {}", msg),
            GlobeError::Fog(msg) => write!(f, "Could not apply fog: {}", msg),
            GlobeError::Marker(msg) => write!(f, "Could not create marker: {}", msg),
        }
    }
}

impl std::error::Error for GlobeError {}
