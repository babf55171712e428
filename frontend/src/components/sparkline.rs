use shared::{CurrencyConfig, RenderMode, SparklineConfig, SparklineRenderer};
use web_sys::Element;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::{ElementSurface, IntlCurrencyFormatter};

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub series: Vec<f64>,
    #[prop_or_default]
    pub config: SparklineConfig,
    #[prop_or_default]
    pub currency: CurrencyConfig,
    #[prop_or_default]
    pub class: Classes,
}

/// Bar sparkline drawn into a container this component owns.
///
/// Every change to the series redraws the bars in place, so they never pile
/// up across re-renders regardless of `config.mode`.
#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (props.series.clone(), props.config.clone(), props.currency.clone()),
            move |(series, config, currency)| {
                let mut surface = container_ref
                    .cast::<Element>()
                    .map(|element| ElementSurface::new(element, config.bar_class.as_str()));

                let renderer = SparklineRenderer::with_mode(IntlCurrencyFormatter::new(currency), RenderMode::Replace);
                if series.is_empty() {
                    if let Some(surface) = surface.as_mut() {
                        renderer.clear(surface);
                    }
                    return;
                }

                let drawn = renderer.render(series, surface.as_mut());
                Logger::debug_with_component("sparkline", &format!("Drew {} bars", drawn));
            },
        );
    }

    html! {
        <div
            ref={container_ref}
            class={classes!("sparkline", "flex", "items-end", "gap-1", "h-16", props.class.clone())}
        ></div>
    }
}
