//! Display logic shared by the expense tracker frontend.
//!
//! Nothing in this crate touches the DOM, so it builds and tests natively.

pub mod currency;
pub mod sparkline;
pub mod validation;

pub use currency::{CurrencyConfig, CurrencyFormatter, IndianRupeeFormatter};
pub use sparkline::{
    bar_label, build_bars, normalized_height, Bar, RenderMode, SeriesBounds, SparklineConfig,
    SparklinePayload, SparklineRenderer, SparklineSurface, FLAT_SERIES_HEIGHT,
};
pub use validation::{
    parse_amount, parse_date, validate_amount, validate_date, FieldValidationError,
};
