use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// A field the user must supply is missing or empty. Caught before any
    /// request is sent; shown inline next to the form.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A business error returned in the response payload (e.g. no shipping
    /// options for the destination). Rendered inline; does not roll back
    /// optimistic cart state.
    #[error("{0}")]
    Api(String),
}
