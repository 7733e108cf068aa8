// ============================================================================
// GLOBE CONTROLLER - Lifecycle of the map view and its markers
// ============================================================================
// Single owner of the view handle, the marker list and every subscription.
// State: Uninitialized -> Initializing -> Ready -> Disposed
//                                     \-> Failed
// Deferred callbacks only hold Weak references and check the state first,
// so callbacks arriving after teardown are no-ops.
// ============================================================================

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

use crate::config::GlobeConfig;
use crate::models::{Coordinates, Launch};
use crate::notifications::{Notifier, Toast};
use super::camera;
use super::marker::marker_spec;
use super::rotation::IdleRotation;
use super::traits::{GlobeError, GlobePlatform, GlobeView, MarkerHandle, ViewEvent};
use super::visibility::update_marker_visibility;

/// Selection callback supplied by the host
pub type SelectHandler = Rc<dyn Fn(&Launch)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
    Disposed,
}

thread_local! {
    static ACCESS_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Set the library token once per thread; later calls with any token are ignored.
/// Returns true when the token was applied.
pub fn ensure_access_token<P: GlobePlatform>(platform: &P, token: &str) -> bool {
    ACCESS_TOKEN.with(|current| {
        let mut current = current.borrow_mut();
        match current.as_deref() {
            Some(existing) => {
                if existing != token {
                    log::warn!("⚠️ Access token already set, ignoring a different one");
                }
                false
            }
            None => {
                if token.is_empty() {
                    log::warn!("⚠️ MAPBOX_ACCESS_TOKEN is empty, tiles will not load");
                }
                platform.set_access_token(token);
                *current = Some(token.to_string());
                true
            }
        }
    })
}

struct Shared<V: GlobeView> {
    state: ViewState,
    view: Option<Rc<V>>,
    markers: Vec<V::Marker>,
    subscriptions: Vec<V::Subscription>,
}

impl<V: GlobeView> Shared<V> {
    /// Detach everything owned by the view so it can be dropped outside the borrow
    fn take_resources(&mut self) -> (Option<Rc<V>>, Vec<V::Marker>, Vec<V::Subscription>) {
        (
            self.view.take(),
            mem::take(&mut self.markers),
            mem::take(&mut self.subscriptions),
        )
    }
}

/// Remove markers, drop subscriptions, then destroy the view
fn release<V: GlobeView>(resources: (Option<Rc<V>>, Vec<V::Marker>, Vec<V::Subscription>)) {
    let (view, markers, subscriptions) = resources;
    for marker in &markers {
        marker.remove();
    }
    drop(subscriptions);
    if let Some(view) = view {
        view.remove();
    }
}

fn recompute_visibility<V: GlobeView>(shared: &RefCell<Shared<V>>) {
    let shared = shared.borrow();
    if let Some(view) = shared.view.as_ref() {
        update_marker_visibility(&view.camera(), &shared.markers);
    }
}

/// Log, tear the view down and show one error toast
fn fail<V: GlobeView>(shared: &RefCell<Shared<V>>, notifier: &dyn Notifier, error: &GlobeError) {
    let resources = {
        let mut shared = shared.borrow_mut();
        if matches!(shared.state, ViewState::Failed | ViewState::Disposed) {
            return;
        }
        shared.state = ViewState::Failed;
        shared.take_resources()
    };
    release(resources);
    log::error!("❌ Globe initialization failed: {}", error);
    notifier.notify(Toast::error(
        "Map error",
        format!("Failed to initialize the globe: {}", error),
    ));
}

/// Owner of the globe view for one mount
pub struct GlobeController<P: GlobePlatform> {
    platform: Rc<P>,
    notifier: Rc<dyn Notifier>,
    config: GlobeConfig,
    access_token: String,
    shared: Rc<RefCell<Shared<P::View>>>,
    resize_listener: RefCell<Option<P::Listener>>,
    on_ready: Option<Rc<dyn Fn()>>,
}

impl<P> GlobeController<P>
where
    P: GlobePlatform + 'static,
    P::View: 'static,
{
    pub fn new(
        platform: Rc<P>,
        notifier: Rc<dyn Notifier>,
        config: GlobeConfig,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            notifier,
            config,
            access_token: access_token.into(),
            shared: Rc::new(RefCell::new(Shared {
                state: ViewState::Uninitialized,
                view: None,
                markers: Vec::new(),
                subscriptions: Vec::new(),
            })),
            resize_listener: RefCell::new(None),
            on_ready: None,
        }
    }

    /// Called once when the style has loaded and the view is ready
    pub fn with_on_ready(mut self, on_ready: impl Fn() + 'static) -> Self {
        self.on_ready = Some(Rc::new(on_ready));
        self
    }

    pub fn state(&self) -> ViewState {
        self.shared.borrow().state
    }

    pub fn is_ready(&self) -> bool {
        self.state() == ViewState::Ready
    }

    pub fn has_view(&self) -> bool {
        self.shared.borrow().view.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.shared.borrow().markers.len()
    }

    pub fn marker_positions(&self) -> Vec<Coordinates> {
        self.shared.borrow().markers.iter().map(|m| m.position()).collect()
    }

    /// Create the view inside `container`.
    ///
    /// A missing container aborts silently; construction errors end in `Failed`
    /// with one error toast.
    pub fn mount(&self, container: Option<&P::Container>) {
        if self.state() != ViewState::Uninitialized {
            log::warn!("⚠️ Globe already mounted ({:?}), ignoring", self.state());
            return;
        }
        let container = match container {
            Some(container) => container,
            None => {
                log::debug!("Globe container not available, skipping map creation");
                return;
            }
        };

        self.shared.borrow_mut().state = ViewState::Initializing;
        log::info!("🗺️ Initializing globe...");

        ensure_access_token(&*self.platform, &self.access_token);

        let view = match self.platform.create_view(container, &self.config.view_options()) {
            Ok(view) => Rc::new(view),
            Err(e) => {
                fail(&self.shared, &*self.notifier, &e);
                return;
            }
        };

        view.add_navigation_control(&self.config.navigation, self.config.navigation_position);

        let mut subscriptions = Vec::new();
        subscriptions.push(view.once(ViewEvent::StyleLoad, self.style_load_handler()));
        subscriptions.push(view.on(ViewEvent::Error, self.error_handler()));

        for event in [ViewEvent::Rotate, ViewEvent::Pitch, ViewEvent::Zoom, ViewEvent::Move] {
            let shared = Rc::downgrade(&self.shared);
            subscriptions.push(view.on(event, Rc::new(move || {
                if let Some(shared) = shared.upgrade() {
                    recompute_visibility(&shared);
                }
            })));
        }

        {
            let mut shared = self.shared.borrow_mut();
            shared.view = Some(Rc::clone(&view));
            shared.subscriptions.extend(subscriptions);
        }

        let rotation = Rc::new(IdleRotation::new(self.config.rotation.clone()));
        let rotation_subscriptions = rotation.start(&view);
        self.shared.borrow_mut().subscriptions.extend(rotation_subscriptions);

        let shared = Rc::downgrade(&self.shared);
        let listener = self.platform.on_window_resize(Rc::new(move || {
            if let Some(view) = current_view(&shared) {
                view.resize();
            }
        }));
        *self.resize_listener.borrow_mut() = Some(listener);
    }

    fn style_load_handler(&self) -> Rc<dyn Fn()> {
        let shared = Rc::downgrade(&self.shared);
        let notifier = Rc::clone(&self.notifier);
        let platform = Rc::downgrade(&self.platform);
        let fog = self.config.fog.clone();
        let delay = self.config.resize_delay_ms;
        let on_ready = self.on_ready.clone();

        Rc::new(move || {
            let Some(shared) = shared.upgrade() else { return };
            let view = {
                let shared = shared.borrow();
                if shared.state != ViewState::Initializing {
                    return;
                }
                match shared.view.clone() {
                    Some(view) => view,
                    None => return,
                }
            };

            if let Err(e) = view.set_fog(&fog) {
                fail(&shared, &*notifier, &e);
                return;
            }
            shared.borrow_mut().state = ViewState::Ready;
            log::info!("✅ Globe style loaded, view ready");

            if let Some(platform) = platform.upgrade() {
                let weak = Rc::downgrade(&shared);
                platform.schedule(delay, Box::new(move || {
                    if let Some(view) = current_view(&weak) {
                        view.resize();
                    }
                }));
            }

            if let Some(on_ready) = on_ready.as_ref() {
                on_ready();
            }
        })
    }

    fn error_handler(&self) -> Rc<dyn Fn()> {
        let shared = Rc::downgrade(&self.shared);
        let notifier = Rc::clone(&self.notifier);
        Rc::new(move || {
            let Some(shared) = shared.upgrade() else { return };
            let state = shared.borrow().state;
            // resource failures never reach this handler (see MapErrorInfo),
            // so an error before the style loaded means the map is unusable
            match state {
                ViewState::Initializing => fail(
                    &shared,
                    &*notifier,
                    &GlobeError::StyleLoad("map reported an error before the style loaded".to_string()),
                ),
                // tile and source errors once running are not fatal
                _ => log::warn!("⚠️ Map error event while {:?}", state),
            }
        })
    }

    /// Replace the markers with one per launch that has coordinates.
    ///
    /// No-op until the view is ready. Returns how many markers are tracked.
    pub fn sync_markers(&self, launches: &[Launch], on_select: SelectHandler) -> usize {
        let view = {
            let shared = self.shared.borrow();
            if shared.state != ViewState::Ready {
                return 0;
            }
            match shared.view.clone() {
                Some(view) => view,
                None => return 0,
            }
        };

        self.clear_markers();

        let mut markers = Vec::new();
        for launch in launches {
            let Some(spec) = marker_spec(launch) else { continue };
            let target = spec.position;
            let weak_view = Rc::downgrade(&view);
            let launch = launch.clone();
            let on_select = Rc::clone(&on_select);
            let fly = self.config.fly.clone();

            let on_click: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(view) = weak_view.upgrade() {
                    camera::fly_to(&*view, target, &fly);
                }
                on_select(&launch);
            });

            match view.add_marker(&spec, on_click) {
                Ok(marker) => markers.push(marker),
                Err(e) => log::warn!("⚠️ Skipping marker for {}: {}", spec.launch_id, e),
            }
        }

        let count = markers.len();
        self.shared.borrow_mut().markers = markers;
        recompute_visibility(&self.shared);
        log::info!("📍 {} launch markers placed ({} launches)", count, launches.len());
        count
    }

    /// Remove every tracked marker
    pub fn clear_markers(&self) {
        let markers = mem::take(&mut self.shared.borrow_mut().markers);
        for marker in &markers {
            marker.remove();
        }
    }

    /// Tear everything down: resize listener first, then markers,
    /// subscriptions and finally the view. Safe to call more than once.
    pub fn unmount(&self) {
        drop(self.resize_listener.borrow_mut().take());
        let resources = {
            let mut shared = self.shared.borrow_mut();
            if shared.state == ViewState::Disposed {
                return;
            }
            shared.state = ViewState::Disposed;
            shared.take_resources()
        };
        let had_view = resources.0.is_some();
        release(resources);
        if had_view {
            log::info!("🧹 Globe disposed");
        }
    }
}

fn current_view<V: GlobeView>(shared: &Weak<RefCell<Shared<V>>>) -> Option<Rc<V>> {
    let shared = shared.upgrade()?;
    let shared = shared.borrow();
    match shared.state {
        ViewState::Initializing | ViewState::Ready => shared.view.clone(),
        _ => None,
    }
}
