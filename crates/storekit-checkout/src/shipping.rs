//! Shipping-rate estimation against the storefront's shipping endpoint.
//!
//! The client posts a destination and receives either a list of delivery
//! options or a business error. Validation happens before submission:
//! a missing country or zip never produces a request, just an inline
//! [`CheckoutError::MissingField`]. The fetch is independent of any other
//! in-flight request and keeps no shared loading state.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;

/// Destination submitted for a shipping estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRateRequest {
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    pub zip: String,
}

impl ShippingRateRequest {
    /// Checks the fields the form requires before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first empty
    /// required field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.country_code.trim().is_empty() {
            return Err(CheckoutError::MissingField("country"));
        }
        if self.zip.trim().is_empty() {
            return Err(CheckoutError::MissingField("zip"));
        }
        Ok(())
    }
}

/// One delivery option quoted by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub handle: String,
    pub title: String,
    /// Quoted cost as a decimal string, exactly as the server returns it.
    pub estimated_cost: String,
}

/// The shipping endpoint's response body: either a quote or a business error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShippingRateResponse {
    Quoted {
        #[allow(dead_code)]
        success: bool,
        #[serde(rename = "deliveryOptions")]
        delivery_options: Vec<DeliveryOption>,
    },
    Failed {
        error: String,
    },
}

/// HTTP client for the shipping-rate estimation endpoint.
pub struct ShippingClient {
    client: Client,
}

impl ShippingClient {
    /// Creates a `ShippingClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CheckoutError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Requests delivery options for a destination.
    ///
    /// `base_url` is the storefront base; the shipping endpoint lives at
    /// `{base_url}/cart/shipping-rates`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::MissingField`] — validation failed; no request sent.
    /// - [`CheckoutError::NotFound`] — HTTP 404.
    /// - [`CheckoutError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`CheckoutError::Http`] — network or TLS failure.
    /// - [`CheckoutError::Deserialize`] — response body does not match either
    ///   expected shape.
    /// - [`CheckoutError::Api`] — the server answered with a business error.
    pub async fn estimate(
        &self,
        base_url: &str,
        request: &ShippingRateRequest,
    ) -> Result<Vec<DeliveryOption>, CheckoutError> {
        request.validate()?;

        let url = format!("{}/cart/shipping-rates", base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckoutError::NotFound { url });
        }
        if !status.is_success() {
            return Err(CheckoutError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ShippingRateResponse>(&body).map_err(|e| {
            CheckoutError::Deserialize {
                context: format!("shipping rates from {url}"),
                source: e,
            }
        })?;

        match parsed {
            ShippingRateResponse::Quoted {
                delivery_options, ..
            } => Ok(delivery_options),
            ShippingRateResponse::Failed { error } => {
                tracing::debug!(%error, "shipping estimate returned a business error");
                Err(CheckoutError::Api(error))
            }
        }
    }
}

#[cfg(test)]
#[path = "shipping_test.rs"]
mod tests;
