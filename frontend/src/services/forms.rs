use shared::{parse_amount, parse_date};
use wasm_bindgen::prelude::*;

use crate::services::logging::Logger;

/// `validateAmount(amount)` for form submit handlers
#[wasm_bindgen(js_name = validateAmount)]
pub fn validate_amount_js(amount: &str) -> bool {
    match parse_amount(amount) {
        Ok(_) => true,
        Err(err) => {
            Logger::debug_with_component("forms", &format!("Rejected amount: {}", err));
            false
        }
    }
}

/// `validateDate(date)` for form submit handlers
#[wasm_bindgen(js_name = validateDate)]
pub fn validate_date_js(date: &str) -> bool {
    match parse_date(date) {
        Ok(_) => true,
        Err(err) => {
            Logger::debug_with_component("forms", &format!("Rejected date: {}", err));
            false
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_amount_field_values() {
        assert!(validate_amount_js("1499.00"));
        assert!(validate_amount_js("-20"));
        assert!(!validate_amount_js(""));
        assert!(!validate_amount_js("0"));
        assert!(!validate_amount_js("twelve"));
    }

    #[wasm_bindgen_test]
    fn test_date_field_values() {
        assert!(validate_date_js("2025-06-15"));
        assert!(!validate_date_js(""));
        assert!(!validate_date_js("2025-13-01"));
    }
}
