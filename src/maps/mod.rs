// Globe: platform-neutral core + Mapbox GL JS implementation

pub mod traits;
pub mod options;
pub mod marker;
pub mod camera;
pub mod visibility;
pub mod rotation;
pub mod controller;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod testing;

pub use controller::{GlobeController, SelectHandler, ViewState};
pub use traits::{
    CameraState, GlobeError, GlobePlatform, GlobeView, MapErrorInfo, MarkerHandle, ViewEvent,
};
