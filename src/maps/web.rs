use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::models::Coordinates;
use crate::utils::mapbox_ffi as ffi;
use super::marker::MarkerSpec;
use super::options::{
    ControlPosition, EaseToOptions, FlyToOptions, FogSettings, NavigationControlOptions,
    ViewOptions,
};
use super::traits::{
    CameraState, EventHandler, GlobeError, GlobePlatform, GlobeView, MapErrorInfo, MarkerHandle,
    ViewEvent,
};

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        log::error!("❌ Could not serialize map options: {}", e);
        JsValue::UNDEFINED
    })
}

fn js_error_message(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

fn map_error_info(event: &JsValue) -> MapErrorInfo {
    let field = |name: &str| {
        js_sys::Reflect::get(event, &JsValue::from_str(name))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    };
    MapErrorInfo {
        message: field("error").map(|err| js_error_message(&err)).unwrap_or_default(),
        source_id: field("sourceId").and_then(|v| v.as_string()),
        tile: field("tile").is_some(),
    }
}

/// Drop `value` on the next tick; a handler may still be running on the stack
fn drop_later<T: 'static>(value: T) {
    Timeout::new(0, move || drop(value)).forget();
}

/// Browser platform backed by Mapbox GL JS
pub struct MapboxPlatform;

impl GlobePlatform for MapboxPlatform {
    type Container = HtmlElement;
    type View = MapboxView;
    type Listener = Option<EventListener>;

    fn set_access_token(&self, token: &str) {
        if let Err(e) = ffi::set_access_token(token) {
            log::error!("❌ Could not set Mapbox access token: {}", js_error_message(&e));
        }
    }

    fn create_view(&self, container: &HtmlElement, options: &ViewOptions) -> Result<MapboxView, GlobeError> {
        let js_options = to_js(options);
        js_sys::Reflect::set(&js_options, &JsValue::from_str("container"), container)
            .map_err(|e| GlobeError::Construction(js_error_message(&e)))?;
        let map = ffi::Map::new(&js_options)
            .map_err(|e| GlobeError::Construction(js_error_message(&e)))?;
        Ok(MapboxView { map })
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }

    fn on_window_resize(&self, handler: EventHandler) -> Option<EventListener> {
        let window = web_sys::window()?;
        Some(EventListener::new(&window, "resize", move |_| handler()))
    }
}

pub struct MapboxView {
    map: ffi::Map,
}

impl MapboxView {
    fn subscribe(&self, event: ViewEvent, handler: EventHandler, once: bool) -> MapSubscription {
        let closure = if event == ViewEvent::Error {
            Closure::wrap(Box::new(move |e: JsValue| {
                let info = map_error_info(&e);
                if info.is_resource_error() {
                    log::warn!(
                        "⚠️ Mapbox resource error ({}): {}",
                        info.source_id.as_deref().unwrap_or("style"),
                        info.message
                    );
                    return;
                }
                log::warn!("⚠️ Mapbox error event: {}", info.message);
                handler();
            }) as Box<dyn FnMut(JsValue)>)
        } else {
            Closure::wrap(Box::new(move |_e: JsValue| handler()) as Box<dyn FnMut(JsValue)>)
        };
        if once {
            self.map.once(event.as_str(), closure.as_ref().unchecked_ref());
        } else {
            self.map.on(event.as_str(), closure.as_ref().unchecked_ref());
        }
        MapSubscription {
            map: self.map.clone(),
            event: event.as_str(),
            closure: Some(closure),
        }
    }
}

impl GlobeView for MapboxView {
    type Marker = MapboxMarker;
    type Subscription = MapSubscription;

    fn on(&self, event: ViewEvent, handler: EventHandler) -> MapSubscription {
        self.subscribe(event, handler, false)
    }

    fn once(&self, event: ViewEvent, handler: EventHandler) -> MapSubscription {
        self.subscribe(event, handler, true)
    }

    fn add_navigation_control(&self, options: &NavigationControlOptions, position: ControlPosition) {
        let control = ffi::NavigationControl::new(&to_js(options));
        self.map.add_control(&control, position.as_str());
    }

    fn set_fog(&self, fog: &FogSettings) -> Result<(), GlobeError> {
        self.map
            .set_fog(&to_js(fog))
            .map_err(|e| GlobeError::Fog(js_error_message(&e)))
    }

    fn resize(&self) {
        self.map.resize();
    }

    fn camera(&self) -> CameraState {
        let center = self.map.get_center();
        CameraState {
            center: Coordinates::new(center.lng(), center.lat()),
            zoom: self.map.get_zoom(),
            bearing: self.map.get_bearing(),
            pitch: self.map.get_pitch(),
        }
    }

    fn fly_to(&self, options: &FlyToOptions) {
        self.map.fly_to(&to_js(options));
    }

    fn ease_to(&self, options: &EaseToOptions) {
        let js_options = to_js(options);
        let linear = js_sys::Function::new_with_args("n", "return n;");
        if let Err(e) = js_sys::Reflect::set(&js_options, &JsValue::from_str("easing"), &linear) {
            log::warn!("⚠️ Could not set linear easing: {}", js_error_message(&e));
        }
        self.map.ease_to(&js_options);
    }

    fn add_marker(&self, spec: &MarkerSpec, on_click: EventHandler) -> Result<MapboxMarker, GlobeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GlobeError::Marker("no document".to_string()))?;
        let element: HtmlElement = document
            .create_element("div")
            .map_err(|e| GlobeError::Marker(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| GlobeError::Marker("marker element is not an HtmlElement".to_string()))?;
        element.set_class_name(&spec.class_name);
        element.set_title(&spec.title);
        if let Err(e) = element.set_attribute("data-launch-id", &spec.launch_id) {
            log::warn!("⚠️ Marker {}: could not set data-launch-id: {}", spec.launch_id, js_error_message(&e));
        }

        let click = EventListener::new(&element, "click", move |event| {
            event.stop_propagation();
            on_click();
        });

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("element"), &element)
            .map_err(|e| GlobeError::Marker(js_error_message(&e)))?;
        let marker = ffi::Marker::new(&options);
        marker.set_lng_lat(&to_js(&spec.position.as_lng_lat()));
        marker.add_to(&self.map);

        Ok(MapboxMarker {
            marker,
            element,
            position: spec.position,
            click: Some(click),
        })
    }

    fn remove(&self) {
        self.map.remove();
    }
}

/// `map.off` on drop
pub struct MapSubscription {
    map: ffi::Map,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(JsValue)>>,
}

impl Drop for MapSubscription {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            self.map.off(self.event, closure.as_ref().unchecked_ref());
            drop_later(closure);
        }
    }
}

pub struct MapboxMarker {
    marker: ffi::Marker,
    element: HtmlElement,
    position: Coordinates,
    click: Option<EventListener>,
}

impl MarkerHandle for MapboxMarker {
    fn position(&self) -> Coordinates {
        self.position
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.element.style().set_property("display", display) {
            log::warn!("⚠️ Could not set marker display to {}: {}", display, js_error_message(&e));
        }
    }

    fn remove(&self) {
        self.marker.remove();
    }
}

impl Drop for MapboxMarker {
    fn drop(&mut self) {
        if let Some(click) = self.click.take() {
            drop_later(click);
        }
    }
}
