use js_sys::{Array, Function, Object, Reflect};
use shared::{CurrencyConfig, CurrencyFormatter, IndianRupeeFormatter};
use wasm_bindgen::{JsCast, JsValue};

use crate::services::logging::Logger;

/// Currency formatting backed by the browser's `Intl.NumberFormat`.
///
/// Falls back to [`IndianRupeeFormatter`] when `Intl` can't be reached or
/// rejects the configured locale/currency.
pub struct IntlCurrencyFormatter {
    format_fn: Option<Function>,
}

impl IntlCurrencyFormatter {
    pub fn new(config: &CurrencyConfig) -> Self {
        let format_fn = match Self::number_format(config) {
            Ok(format_fn) => Some(format_fn),
            Err(err) => {
                Logger::warn_with_component(
                    "currency",
                    &format!(
                        "Intl.NumberFormat unavailable for {}/{}, using fallback: {:?}",
                        config.locale, config.currency, err
                    ),
                );
                None
            }
        };

        Self { format_fn }
    }

    fn number_format(config: &CurrencyConfig) -> Result<Function, JsValue> {
        let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl"))?;
        let constructor: Function = Reflect::get(&intl, &JsValue::from_str("NumberFormat"))?.dyn_into()?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("style"), &JsValue::from_str("currency"))?;
        Reflect::set(&options, &JsValue::from_str("currency"), &JsValue::from_str(&config.currency))?;

        let args = Array::of2(&JsValue::from_str(&config.locale), &options);
        let number_format = Reflect::construct(&constructor, &args)?;

        // `format` is a bound getter, so it can be called without a receiver
        Reflect::get(&number_format, &JsValue::from_str("format"))?.dyn_into()
    }
}

impl CurrencyFormatter for IntlCurrencyFormatter {
    fn format(&self, amount: f64) -> String {
        self.format_fn
            .as_ref()
            .and_then(|format_fn| format_fn.call1(&JsValue::NULL, &JsValue::from_f64(amount)).ok())
            .and_then(|formatted| formatted.as_string())
            .unwrap_or_else(|| IndianRupeeFormatter.format(amount))
    }
}
