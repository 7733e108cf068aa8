// ============================================================================
// LAUNCH SERVICE - Upcoming launches from a Launch Library 2 endpoint
// ============================================================================
// Fetch (wasm only) + conversion of the API shape into `Launch`
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::Launch;

#[derive(Debug, Deserialize)]
pub struct LaunchListResponse {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub results: Vec<ApiLaunch>,
}

#[derive(Debug, Deserialize)]
pub struct ApiLaunch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub net: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<ApiStatus>,
    #[serde(default)]
    pub launch_service_provider: Option<ApiNamed>,
    #[serde(default)]
    pub pad: Option<ApiPad>,
}

#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    pub name: String,
    #[serde(default)]
    pub abbrev: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiNamed {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiPad {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<LooseNumber>,
    #[serde(default)]
    pub longitude: Option<LooseNumber>,
    #[serde(default)]
    pub location: Option<ApiNamed>,
}

/// LL2 2.2 sends pad coordinates as strings, 2.3 as numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<ApiLaunch> for Launch {
    fn from(api: ApiLaunch) -> Self {
        let net = api.net.as_deref().and_then(|s| {
            DateTime::parse_from_rfc3339(s)
                .map(|d| d.with_timezone(&Utc))
                .map_err(|e| log::warn!("⚠️ Launch {}: bad NET '{}': {}", api.id, s, e))
                .ok()
        });
        let (pad_name, location_name, latitude, longitude) = match api.pad {
            Some(pad) => (
                pad.name,
                pad.location.map(|l| l.name),
                pad.latitude.as_ref().and_then(LooseNumber::as_f64),
                pad.longitude.as_ref().and_then(LooseNumber::as_f64),
            ),
            None => (None, None, None, None),
        };
        Launch {
            id: api.id,
            name: api.name,
            provider: api.launch_service_provider.map(|p| p.name),
            pad_name,
            location_name,
            net,
            status: api.status.map(|s| s.name),
            image: api.image,
            latitude,
            longitude,
        }
    }
}

/// Parse a launch list body
pub fn parse_launches(body: &str) -> Result<Vec<Launch>, String> {
    let response: LaunchListResponse =
        serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))?;
    Ok(response.results.into_iter().map(Launch::from).collect())
}

/// Launches sorted by NET, unknown dates last
pub fn sort_by_net(launches: &mut [Launch]) {
    launches.sort_by(|a, b| match (a.net, b.net) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Client for the launches endpoint (stateless)
#[derive(Clone)]
pub struct LaunchService {
    url: String,
}

impl LaunchService {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Fetch upcoming launches
    #[cfg(target_arch = "wasm32")]
    pub async fn fetch_upcoming(&self) -> Result<Vec<Launch>, String> {
        use gloo_net::http::Request;

        log::info!("🚀 Fetching launches from {}", self.url);
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        let mut launches = parse_launches(&body)?;
        sort_by_net(&mut launches);
        log::info!("✅ {} launches loaded", launches.len());
        Ok(launches)
    }
}
