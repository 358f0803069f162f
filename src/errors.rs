use thiserror::Error;

/// Main SDK error type.
///
/// Every variant propagates to the caller as-is; the SDK never retries
/// or substitutes a default quote.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The HTTP request itself failed or the API replied with a
    /// non-success status. Wraps the underlying transport message.
    #[error("Failed to fetch quotes: {0}")]
    Transport(String),

    /// Transport succeeded but the payload was not a JSON array.
    /// Carries what was found instead; signals an API contract change.
    #[error("Fetched data is not an array: {0}")]
    InvalidResponseShape(String),

    /// The API returned a well-formed but empty array.
    #[error("No quotes available from the API")]
    EmptyDataset,

    /// Every record in the response failed field validation.
    #[error("No valid quotes found in the data")]
    NoValidQuotes,
}
