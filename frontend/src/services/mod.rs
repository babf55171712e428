pub mod currency;
pub mod dom;
pub mod forms;
pub mod logging;
pub mod page;

pub use currency::IntlCurrencyFormatter;
pub use dom::{render_sparkline_with, ElementSurface};
