use shared::SparklinePayload;
use yew::prelude::*;

mod components;
mod services;

use components::Sparkline;
use services::logging::Logger;
use services::page::{read_payload, PAYLOAD_ELEMENT_ID};

#[derive(Properties, PartialEq)]
struct AppProps {
    payload: SparklinePayload,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let payload = &props.payload;

    html! {
        <section class="forecast-sparkline">
            <h3 class="text-sm font-medium text-gray-600">{"Daily trend"}</h3>
            <Sparkline
                series={payload.series.clone()}
                config={payload.config.clone()}
                currency={payload.currency.clone()}
            />
        </section>
    }
}

fn main() {
    let payload = read_payload(PAYLOAD_ELEMENT_ID);

    // Server-rendered pages name their own container; otherwise mount the app
    match payload.container_id.as_deref() {
        Some(container_id) => {
            let drawn = services::render_sparkline_with(&payload.series, container_id, &payload.config, &payload.currency);
            Logger::info_with_component("main", &format!("Rendered {} bars into #{}", drawn, container_id));
        }
        None => {
            Logger::info_with_component("main", &format!("Mounting sparkline app with {} values", payload.series.len()));
            yew::Renderer::<App>::with_props(AppProps { payload }).render();
        }
    }
}
