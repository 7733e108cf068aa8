use yew::prelude::*;

use crate::models::Launch;

#[derive(Properties, PartialEq)]
pub struct LaunchDetailsProps {
    pub launch: Launch,
    pub on_close: Callback<()>,
}

/// Side panel for the launch picked on the globe
#[function_component(LaunchDetails)]
pub fn launch_details(props: &LaunchDetailsProps) -> Html {
    let launch = &props.launch;
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let net = launch
        .net
        .map(|net| net.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "TBD".to_string());
    let position = launch
        .coordinates()
        .map(|c| format!("{:.4}°, {:.4}°", c.latitude, c.longitude))
        .unwrap_or_default();

    html! {
        <aside class="launch-details">
            <button class="launch-details__close" onclick={on_close} aria-label="Close">{ "×" }</button>
            if let Some(image) = launch.image.clone() {
                <img class="launch-details__image" src={image} alt={launch.name.clone()} />
            }
            <h2 class="launch-details__name">{ launch.name.clone() }</h2>
            if let Some(status) = launch.status.clone() {
                <span class="launch-details__status">{ status }</span>
            }
            <dl class="launch-details__facts">
                <dt>{ "NET" }</dt>
                <dd>{ net }</dd>
                if let Some(provider) = launch.provider.clone() {
                    <dt>{ "Provider" }</dt>
                    <dd>{ provider }</dd>
                }
                if let Some(pad) = launch.pad_name.clone() {
                    <dt>{ "Pad" }</dt>
                    <dd>{ pad }</dd>
                }
                if let Some(location) = launch.location_name.clone() {
                    <dt>{ "Location" }</dt>
                    <dd>{ location }</dd>
                }
                <dt>{ "Coordinates" }</dt>
                <dd>{ position }</dd>
            </dl>
        </aside>
    }
}
