// ============================================================================
// MARKER VISIBILITY - Hide markers on the far side of the globe
// ============================================================================

use crate::models::Coordinates;
use super::traits::{CameraState, MarkerHandle};

/// Markers closer than this to the limb are hidden as well (degrees)
pub const HORIZON_MARGIN_DEG: f64 = 2.0;

/// True when `point` faces the camera.
///
/// The camera looks at `camera.center`; the visible cap is everything within
/// 90° of it. Bearing rotates the cap around its own center, so only the center
/// matters.
pub fn is_on_visible_hemisphere(camera: &CameraState, point: &Coordinates) -> bool {
    camera.center.angular_distance(point) < 90.0 - HORIZON_MARGIN_DEG
}

/// Show or hide every marker for the current camera; returns how many are visible
pub fn update_marker_visibility<M: MarkerHandle>(camera: &CameraState, markers: &[M]) -> usize {
    let mut visible = 0;
    for marker in markers {
        let on_front = is_on_visible_hemisphere(camera, &marker.position());
        marker.set_visible(on_front);
        if on_front {
            visible += 1;
        }
    }
    visible
}
