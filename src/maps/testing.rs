// ============================================================================
// MOCK PLATFORM - In-memory GlobePlatform for native tests
// ============================================================================
// Records every call; events, clicks, timers and window resizes are fired
// by hand from the tests.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::models::Coordinates;
use super::marker::MarkerSpec;
use super::options::{
    ControlPosition, EaseToOptions, FlyToOptions, FogSettings, NavigationControlOptions,
    ViewOptions,
};
use super::traits::{
    CameraState, EventHandler, GlobeError, GlobePlatform, GlobeView, MarkerHandle, ViewEvent,
};

struct HandlerEntry {
    id: u64,
    event: ViewEvent,
    handler: EventHandler,
    once: bool,
}

struct ViewProbe {
    options: Option<ViewOptions>,
    handlers: RefCell<Vec<HandlerEntry>>,
    next_id: Cell<u64>,
    camera: Cell<CameraState>,
    fog: RefCell<Option<FogSettings>>,
    fail_fog: Cell<bool>,
    resize_calls: Cell<u32>,
    fly_to_calls: RefCell<Vec<FlyToOptions>>,
    ease_to_calls: RefCell<Vec<EaseToOptions>>,
    nav_controls: RefCell<Vec<(NavigationControlOptions, ControlPosition)>>,
    markers: RefCell<Vec<MockMarker>>,
    failing_marker_ids: RefCell<Vec<String>>,
    removed: Cell<bool>,
    /// Window resize handlers of the platform that created the view
    window_listeners: Weak<ResizeHandlers>,
    listeners_at_remove: Cell<Option<usize>>,
}

/// View double; clones share the same recorded state
#[derive(Clone)]
pub struct MockView {
    probe: Rc<ViewProbe>,
}

impl MockView {
    pub fn new() -> Self {
        Self::with_options(None, Weak::new())
    }

    fn with_options(options: Option<ViewOptions>, window_listeners: Weak<ResizeHandlers>) -> Self {
        let center = options
            .as_ref()
            .map(|o| Coordinates::new(o.center[0], o.center[1]))
            .unwrap_or(Coordinates::new(0.0, 0.0));
        let camera = CameraState {
            center,
            zoom: options.as_ref().map(|o| o.zoom).unwrap_or(1.5),
            bearing: 0.0,
            pitch: options.as_ref().map(|o| o.pitch).unwrap_or(0.0),
        };
        Self {
            probe: Rc::new(ViewProbe {
                options,
                handlers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                camera: Cell::new(camera),
                fog: RefCell::new(None),
                fail_fog: Cell::new(false),
                resize_calls: Cell::new(0),
                fly_to_calls: RefCell::new(Vec::new()),
                ease_to_calls: RefCell::new(Vec::new()),
                nav_controls: RefCell::new(Vec::new()),
                markers: RefCell::new(Vec::new()),
                failing_marker_ids: RefCell::new(Vec::new()),
                removed: Cell::new(false),
                window_listeners,
                listeners_at_remove: Cell::new(None),
            }),
        }
    }

    /// Fire `event` on every live handler
    pub fn emit(&self, event: ViewEvent) {
        let handlers: Vec<EventHandler> = {
            let mut entries = self.probe.handlers.borrow_mut();
            let matching: Vec<EventHandler> = entries
                .iter()
                .filter(|e| e.event == event)
                .map(|e| e.handler.clone())
                .collect();
            entries.retain(|e| !(e.once && e.event == event));
            matching
        };
        for handler in handlers {
            handler();
        }
    }

    pub fn options(&self) -> Option<ViewOptions> {
        self.probe.options.clone()
    }

    pub fn set_camera(&self, camera: CameraState) {
        self.probe.camera.set(camera);
    }

    pub fn fail_fog(&self) {
        self.probe.fail_fog.set(true);
    }

    pub fn fail_marker_for(&self, launch_id: &str) {
        self.probe.failing_marker_ids.borrow_mut().push(launch_id.to_string());
    }

    pub fn handler_count(&self) -> usize {
        self.probe.handlers.borrow().len()
    }

    pub fn handler_count_for(&self, event: ViewEvent) -> usize {
        self.probe.handlers.borrow().iter().filter(|e| e.event == event).count()
    }

    pub fn fog(&self) -> Option<FogSettings> {
        self.probe.fog.borrow().clone()
    }

    pub fn resize_calls(&self) -> u32 {
        self.probe.resize_calls.get()
    }

    pub fn fly_to_calls(&self) -> Vec<FlyToOptions> {
        self.probe.fly_to_calls.borrow().clone()
    }

    pub fn ease_to_calls(&self) -> Vec<EaseToOptions> {
        self.probe.ease_to_calls.borrow().clone()
    }

    pub fn nav_controls(&self) -> Vec<(NavigationControlOptions, ControlPosition)> {
        self.probe.nav_controls.borrow().clone()
    }

    /// Every marker ever created on this view, removed ones included
    pub fn created_markers(&self) -> Vec<MockMarker> {
        self.probe.markers.borrow().clone()
    }

    /// Markers still attached to the view
    pub fn live_markers(&self) -> Vec<MockMarker> {
        self.created_markers().into_iter().filter(|m| !m.is_removed()).collect()
    }

    pub fn is_removed(&self) -> bool {
        self.probe.removed.get()
    }

    /// Window resize listeners still registered when `remove` ran
    pub fn window_listeners_at_remove(&self) -> Option<usize> {
        self.probe.listeners_at_remove.get()
    }

    fn subscribe(&self, event: ViewEvent, handler: EventHandler, once: bool) -> MockSubscription {
        let id = self.probe.next_id.get();
        self.probe.next_id.set(id + 1);
        self.probe.handlers.borrow_mut().push(HandlerEntry { id, event, handler, once });
        MockSubscription {
            probe: Rc::downgrade(&self.probe),
            id,
        }
    }
}

impl GlobeView for MockView {
    type Marker = MockMarker;
    type Subscription = MockSubscription;

    fn on(&self, event: ViewEvent, handler: EventHandler) -> MockSubscription {
        self.subscribe(event, handler, false)
    }

    fn once(&self, event: ViewEvent, handler: EventHandler) -> MockSubscription {
        self.subscribe(event, handler, true)
    }

    fn add_navigation_control(&self, options: &NavigationControlOptions, position: ControlPosition) {
        self.probe.nav_controls.borrow_mut().push((options.clone(), position));
    }

    fn set_fog(&self, fog: &FogSettings) -> Result<(), GlobeError> {
        if self.probe.fail_fog.get() {
            return Err(GlobeError::Fog("fog is not supported by this style".to_string()));
        }
        *self.probe.fog.borrow_mut() = Some(fog.clone());
        Ok(())
    }

    fn resize(&self) {
        self.probe.resize_calls.set(self.probe.resize_calls.get() + 1);
    }

    fn camera(&self) -> CameraState {
        self.probe.camera.get()
    }

    fn fly_to(&self, options: &FlyToOptions) {
        self.probe.fly_to_calls.borrow_mut().push(options.clone());
    }

    fn ease_to(&self, options: &EaseToOptions) {
        self.probe.ease_to_calls.borrow_mut().push(options.clone());
    }

    fn add_marker(&self, spec: &MarkerSpec, on_click: EventHandler) -> Result<MockMarker, GlobeError> {
        if self.probe.failing_marker_ids.borrow().contains(&spec.launch_id) {
            return Err(GlobeError::Marker(format!("no element for {}", spec.launch_id)));
        }
        let marker = MockMarker {
            probe: Rc::new(MarkerProbe {
                spec: spec.clone(),
                visible: Cell::new(true),
                removed: Cell::new(false),
                on_click,
            }),
        };
        self.probe.markers.borrow_mut().push(marker.clone());
        Ok(marker)
    }

    fn remove(&self) {
        let listeners = self
            .probe
            .window_listeners
            .upgrade()
            .map(|handlers| handlers.borrow().len())
            .unwrap_or(0);
        self.probe.listeners_at_remove.set(Some(listeners));
        self.probe.removed.set(true);
    }
}

/// Removes its handler from the view when dropped
pub struct MockSubscription {
    probe: Weak<ViewProbe>,
    id: u64,
}

impl Drop for MockSubscription {
    fn drop(&mut self) {
        if let Some(probe) = self.probe.upgrade() {
            probe.handlers.borrow_mut().retain(|e| e.id != self.id);
        }
    }
}

struct MarkerProbe {
    spec: MarkerSpec,
    visible: Cell<bool>,
    removed: Cell<bool>,
    on_click: EventHandler,
}

#[derive(Clone)]
pub struct MockMarker {
    probe: Rc<MarkerProbe>,
}

impl MockMarker {
    pub fn spec(&self) -> MarkerSpec {
        self.probe.spec.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.probe.visible.get()
    }

    pub fn is_removed(&self) -> bool {
        self.probe.removed.get()
    }

    pub fn click(&self) {
        let handler = self.probe.on_click.clone();
        handler();
    }
}

impl MarkerHandle for MockMarker {
    fn position(&self) -> Coordinates {
        self.probe.spec.position
    }

    fn set_visible(&self, visible: bool) {
        self.probe.visible.set(visible);
    }

    fn remove(&self) {
        self.probe.removed.set(true);
    }
}

/// Stand-in for the DOM element
pub struct MockContainer;

type ResizeHandlers = RefCell<Vec<(u64, EventHandler)>>;

/// Removes its window handler when dropped
pub struct MockListener {
    handlers: Weak<ResizeHandlers>,
    id: u64,
}

impl Drop for MockListener {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.upgrade() {
            handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[derive(Default)]
pub struct MockPlatform {
    token_sets: RefCell<Vec<String>>,
    create_error: RefCell<Option<String>>,
    fail_fog: Cell<bool>,
    views: RefCell<Vec<MockView>>,
    timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    resize_handlers: Rc<ResizeHandlers>,
    next_listener: Cell<u64>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create_view` fail
    pub fn fail_construction(&self, message: &str) {
        *self.create_error.borrow_mut() = Some(message.to_string());
    }

    /// Views created from now on reject `setFog`
    pub fn fail_fog(&self) {
        self.fail_fog.set(true);
    }

    pub fn token_sets(&self) -> Vec<String> {
        self.token_sets.borrow().clone()
    }

    pub fn views_created(&self) -> usize {
        self.views.borrow().len()
    }

    pub fn last_view(&self) -> Option<MockView> {
        self.views.borrow().last().cloned()
    }

    pub fn pending_timers(&self) -> Vec<u32> {
        self.timers.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every scheduled task, in scheduling order
    pub fn run_timers(&self) {
        let tasks: Vec<_> = self.timers.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }

    pub fn fire_window_resize(&self) {
        let handlers: Vec<EventHandler> =
            self.resize_handlers.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn resize_listener_count(&self) -> usize {
        self.resize_handlers.borrow().len()
    }
}

impl GlobePlatform for MockPlatform {
    type Container = MockContainer;
    type View = MockView;
    type Listener = MockListener;

    fn set_access_token(&self, token: &str) {
        self.token_sets.borrow_mut().push(token.to_string());
    }

    fn create_view(&self, _container: &MockContainer, options: &ViewOptions) -> Result<MockView, GlobeError> {
        if let Some(message) = self.create_error.borrow_mut().take() {
            return Err(GlobeError::Construction(message));
        }
        let view = MockView::with_options(Some(options.clone()), Rc::downgrade(&self.resize_handlers));
        if self.fail_fog.get() {
            view.fail_fog();
        }
        self.views.borrow_mut().push(view.clone());
        Ok(view)
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.timers.borrow_mut().push((delay_ms, task));
    }

    fn on_window_resize(&self, handler: EventHandler) -> MockListener {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.resize_handlers.borrow_mut().push((id, handler));
        MockListener {
            handlers: Rc::downgrade(&self.resize_handlers),
            id,
        }
    }
}
