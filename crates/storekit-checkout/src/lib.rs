pub mod error;
pub mod locale;
pub mod shipping;

pub use error::CheckoutError;
pub use locale::{localized_path, strip_locale_prefix};
pub use shipping::{DeliveryOption, ShippingClient, ShippingRateRequest};
