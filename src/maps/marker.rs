// ============================================================================
// MARKER FACTORY - Launch -> marker description
// ============================================================================

use crate::models::{Coordinates, Launch};

/// CSS class of the marker element (styled in index.html)
pub const MARKER_CLASS: &str = "launch-marker";

/// Everything the platform needs to build a marker element
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub launch_id: String,
    pub position: Coordinates,
    pub title: String,
    pub class_name: String,
}

/// Describe the marker for `launch`, `None` when the launch has no position
pub fn marker_spec(launch: &Launch) -> Option<MarkerSpec> {
    let position = launch.coordinates()?;
    let mut class_name = MARKER_CLASS.to_string();
    if let Some(status) = launch.status.as_deref() {
        class_name.push(' ');
        class_name.push_str(&status_modifier(status));
    }
    Some(MarkerSpec {
        launch_id: launch.id.clone(),
        position,
        title: launch.marker_title(),
        class_name,
    })
}

/// `"Go for Launch"` -> `launch-marker--go-for-launch`
fn status_modifier(status: &str) -> String {
    let slug: Vec<String> = status
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect();
    format!("{}--{}", MARKER_CLASS, slug.join("-"))
}
