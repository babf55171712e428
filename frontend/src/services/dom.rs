use shared::{Bar, CurrencyConfig, SparklineConfig, SparklineRenderer, SparklineSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use gloo::utils::document;
use web_sys::{Element, HtmlElement};

use crate::services::currency::IntlCurrencyFormatter;
use crate::services::logging::Logger;

/// A page element that sparkline bars are appended to
pub struct ElementSurface {
    element: Element,
    bar_class: String,
}

impl ElementSurface {
    pub fn new(element: Element, bar_class: impl Into<String>) -> Self {
        Self {
            element,
            bar_class: bar_class.into(),
        }
    }

    /// Finds the container by element id; `None` if it isn't on the page.
    pub fn lookup(container_id: &str, bar_class: impl Into<String>) -> Option<Self> {
        document()
            .get_element_by_id(container_id)
            .map(|element| Self::new(element, bar_class))
    }

    fn create_bar(&self, bar: &Bar) -> Result<HtmlElement, JsValue> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container is not attached to a document"))?;

        let node: HtmlElement = document.create_element("div")?.dyn_into()?;
        node.style().set_property("height", &format!("{}%", bar.height_percent))?;
        node.set_class_name(&self.bar_class);
        node.set_title(&bar.label);
        Ok(node)
    }
}

impl SparklineSurface for ElementSurface {
    fn append_bar(&mut self, bar: &Bar) {
        let appended = self
            .create_bar(bar)
            .and_then(|node| self.element.append_child(&node));

        if let Err(err) = appended {
            Logger::error_with_component("sparkline", &format!("Failed to append bar '{}': {:?}", bar.label, err));
        }
    }

    fn clear(&mut self) {
        self.element.set_inner_html("");
    }
}

/// Renders `series` into the element with id `container_id`.
///
/// Bars are appended to whatever the container already holds. A missing
/// container or empty series does nothing.
pub fn render_sparkline(series: &[f64], container_id: &str) -> usize {
    render_sparkline_with(series, container_id, &SparklineConfig::default(), &CurrencyConfig::default())
}

pub fn render_sparkline_with(
    series: &[f64],
    container_id: &str,
    config: &SparklineConfig,
    currency: &CurrencyConfig,
) -> usize {
    let mut surface = ElementSurface::lookup(container_id, config.bar_class.as_str());
    if surface.is_none() {
        Logger::debug_with_component("sparkline", &format!("No container '{}', skipping render", container_id));
        return 0;
    }

    let renderer = SparklineRenderer::with_mode(IntlCurrencyFormatter::new(currency), config.mode);
    renderer.render(series, surface.as_mut())
}

/// Removes every bar from the container, if it exists.
pub fn clear_sparkline(container_id: &str) {
    if let Some(mut surface) = ElementSurface::lookup(container_id, "") {
        surface.clear();
    }
}

/// `createSparkline(data, containerId)` for inline page scripts
#[wasm_bindgen(js_name = createSparkline)]
pub fn create_sparkline(data: Vec<f64>, container_id: &str) -> usize {
    render_sparkline(&data, container_id)
}

#[wasm_bindgen(js_name = clearSparkline)]
pub fn clear_sparkline_js(container_id: &str) {
    clear_sparkline(container_id);
}
