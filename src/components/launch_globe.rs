use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::web::MapboxPlatform;
use crate::maps::{GlobeController, SelectHandler};
use crate::models::Launch;
use crate::notifications::{LogNotifier, Notifier};
use super::toaster::use_toaster;

#[derive(Properties, PartialEq)]
pub struct LaunchGlobeProps {
    pub launches: Vec<Launch>,
    pub on_marker_click: Callback<Launch>,
}

#[function_component(LaunchGlobe)]
pub fn launch_globe(props: &LaunchGlobeProps) -> Html {
    let container = use_node_ref();
    let controller = use_mut_ref(|| None::<Rc<GlobeController<MapboxPlatform>>>);
    let ready = use_state(|| false);
    let toaster = use_toaster();

    // Create the view on mount, destroy it on unmount
    {
        let container = container.clone();
        let controller = controller.clone();
        let ready = ready.setter();

        use_effect_with((), move |_| {
            let notifier: Rc<dyn Notifier> = match toaster {
                Some(toaster) => Rc::new(toaster),
                None => Rc::new(LogNotifier),
            };
            let globe = Rc::new(
                GlobeController::new(
                    Rc::new(MapboxPlatform),
                    notifier,
                    CONFIG.globe.clone(),
                    CONFIG.mapbox_token(),
                )
                .with_on_ready(move || ready.set(true)),
            );
            globe.mount(container.cast::<HtmlElement>().as_ref());
            *controller.borrow_mut() = Some(Rc::clone(&globe));

            move || {
                globe.unmount();
                *controller.borrow_mut() = None;
            }
        });
    }

    // Replace markers whenever the launches or the ready flag change
    {
        let controller = controller.clone();

        use_effect_with(
            (props.launches.clone(), *ready, props.on_marker_click.clone()),
            move |(launches, _ready, on_marker_click)| {
                let globe = controller.borrow().clone();
                if let Some(globe) = globe.as_ref() {
                    let on_marker_click = on_marker_click.clone();
                    let on_select: SelectHandler =
                        Rc::new(move |launch: &Launch| on_marker_click.emit(launch.clone()));
                    globe.sync_markers(launches, on_select);
                }

                move || {
                    if let Some(globe) = globe {
                        globe.clear_markers();
                    }
                }
            },
        );
    }

    html! {
        <div ref={container} class="globe-container" />
    }
}
