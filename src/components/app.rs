use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Launch;
use crate::notifications::{Notifier, Toast};
use crate::services::LaunchService;
use super::{LaunchDetails, LaunchGlobe, ToastProvider};
use super::toaster::use_toaster;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <LaunchExplorer />
        </ToastProvider>
    }
}

#[function_component(LaunchExplorer)]
fn launch_explorer() -> Html {
    let launches = use_state(Vec::<Launch>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<Launch>);
    let toaster = use_toaster();

    // Load launches on mount
    {
        let launches = launches.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let service = LaunchService::new(CONFIG.launches_url.clone());
                match service.fetch_upcoming().await {
                    Ok(loaded) => {
                        if !loaded.is_empty() && loaded.iter().all(|l| l.coordinates().is_none()) {
                            if let Some(toaster) = toaster.as_ref() {
                                toaster.notify(Toast::info(
                                    "No launch sites",
                                    "None of the upcoming launches has a pad position",
                                ));
                            }
                        }
                        launches.set(loaded);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading launches: {}", e);
                        if let Some(toaster) = toaster {
                            toaster.notify(Toast::error("Could not load launches", e));
                        }
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_marker_click = use_callback(selected.setter(), |launch: Launch, selected| {
        log::info!("🚀 Selected launch {}", launch.name);
        selected.set(Some(launch));
    });
    let on_close = use_callback(selected.setter(), |_: (), selected| selected.set(None));

    let on_globe = launches.iter().filter(|l| l.coordinates().is_some()).count();
    let summary = if *loading {
        "Loading launches…".to_string()
    } else {
        format!("{} upcoming · {} on the globe", launches.len(), on_globe)
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "Launch Globe" }</h1>
                <span class="app-header__summary">{ summary }</span>
            </header>
            <LaunchGlobe launches={(*launches).clone()} on_marker_click={on_marker_click} />
            if let Some(launch) = (*selected).clone() {
                <LaunchDetails launch={launch} on_close={on_close} />
            }
        </div>
    }
}
