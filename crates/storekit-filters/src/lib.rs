pub mod codec;
pub mod debounce;
pub mod price_range;
pub mod reducers;
pub mod slider;

pub use codec::{build_query, decode_filters, encode_filters, parse_query};
pub use debounce::Debouncer;
pub use price_range::{Effect, Event, Handle, Phase, PriceRange, PriceRangeReconciler};
pub use reducers::{clear_all_filters, remove_filter, toggle_filter, update_price_filter};
pub use slider::PriceSlider;
