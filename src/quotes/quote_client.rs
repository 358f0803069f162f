use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use serde_json::Value;

use crate::{
    prelude::*,
    quotes::response_structs::RawQuote,
    quotes::selection::{filter_valid, pick_quote},
    req::HttpClient,
    types::ParsedQuote,
    BaseUrl, Error,
};

/// Client for the quotes endpoint.
#[derive(Debug)]
pub struct QuoteClient {
    pub http_client: HttpClient,
}

impl QuoteClient {
    /// Create a new client. `None` arguments select a default `reqwest::Client`
    /// and the production API.
    pub fn new(client: Option<Client>, base_url: Option<BaseUrl>) -> QuoteClient {
        let client = client.unwrap_or_default();
        let base_url = base_url.unwrap_or(BaseUrl::Production).get_url();

        QuoteClient {
            http_client: HttpClient { client, base_url },
        }
    }

    /// Fetch the full dataset and return one quote chosen uniformly at random,
    /// preferring quotes of at most `MAX_PREFERRED_QUOTE_LEN` characters.
    pub async fn fetch_random_quote(&self) -> Result<ParsedQuote> {
        let body = self.http_client.get("/api/quotes").await?;
        let mut rng = SmallRng::from_entropy();
        random_quote_from_payload(&body, &mut rng)
    }

    /// Fetch every valid quote record, in the order the API serves them.
    pub async fn fetch_quotes(&self) -> Result<Vec<RawQuote>> {
        let body = self.http_client.get("/api/quotes").await?;
        let records = parse_quotes_payload(&body)?;
        let valid = filter_valid(records);
        if valid.is_empty() {
            return Err(Error::NoValidQuotes);
        }
        Ok(valid)
    }
}

/// Parse the response body into the raw record array.
///
/// Rejects bodies that are not JSON and well-formed JSON that is not an
/// array. An empty array maps to `Error::EmptyDataset`.
fn parse_quotes_payload(body: &str) -> Result<Vec<Value>> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| Error::InvalidResponseShape(e.to_string()))?;

    match data {
        Value::Array(records) if records.is_empty() => Err(Error::EmptyDataset),
        Value::Array(records) => Ok(records),
        other => Err(Error::InvalidResponseShape(json_type_name(&other).to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Run the full parse, filter, and select pipeline over a response body.
fn random_quote_from_payload<R: Rng>(body: &str, rng: &mut R) -> Result<ParsedQuote> {
    let records = parse_quotes_payload(body)?;
    let valid = filter_valid(records);

    match pick_quote(valid, rng) {
        Some(record) => Ok(record.into()),
        None => Err(Error::NoValidQuotes),
    }
}
