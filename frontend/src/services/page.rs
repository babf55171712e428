use shared::SparklinePayload;

use gloo::utils::document;
use crate::services::logging::Logger;

/// Id of the `<script type="application/json">` block carrying sparkline data
pub const PAYLOAD_ELEMENT_ID: &str = "sparkline-data";

/// Reads the sparkline payload the server embedded in the page.
///
/// A missing or malformed block yields an empty payload.
pub fn read_payload(element_id: &str) -> SparklinePayload {
    let text = document()
        .get_element_by_id(element_id)
        .and_then(|element| element.text_content());

    let Some(text) = text else {
        Logger::warn_with_component("page", &format!("No #{} element on page", element_id));
        return SparklinePayload::default();
    };

    match SparklinePayload::from_json(&text) {
        Ok(payload) => payload,
        Err(err) => {
            Logger::warn_with_component("page", &format!("Ignoring invalid sparkline data: {}", err));
            SparklinePayload::default()
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn embed(id: &str, json: &str) {
        let doc = document();
        let script = doc.create_element("script").unwrap();
        script.set_id(id);
        script.set_attribute("type", "application/json").unwrap();
        script.set_text_content(Some(json));
        doc.body().unwrap().append_child(&script).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_reads_embedded_payload() {
        embed("payload-valid", r#"{ "series": [3.5, 4.0], "container_id": "forecastSparkline" }"#);

        let payload = read_payload("payload-valid");
        assert_eq!(payload.series, vec![3.5, 4.0]);
        assert_eq!(payload.container_id.as_deref(), Some("forecastSparkline"));
    }

    #[wasm_bindgen_test]
    fn test_invalid_or_missing_payload_is_empty() {
        embed("payload-invalid", "{ not json");

        assert!(read_payload("payload-invalid").series.is_empty());
        assert!(read_payload("payload-missing").series.is_empty());
    }
}
