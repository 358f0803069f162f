use reqwest::{Client, Response};

use crate::{prelude::*, Error};

#[derive(Debug)]
pub struct HttpClient {
    pub client: Client,
    pub base_url: String,
}

async fn parse_response(response: Response) -> Result<String> {
    let status_code = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    if (200..300).contains(&status_code) {
        return Ok(text);
    }

    Err(Error::Transport(format!(
        "status code: {status_code}, body: {text}"
    )))
}

impl HttpClient {
    /// Send a GET request and return the raw response body.
    ///
    /// A single attempt with no retry or SDK-imposed timeout; callers that
    /// need transport deadlines configure them on the `Client` they pass in.
    pub async fn get(&self, url_path: &'static str) -> Result<String> {
        let full_url = format!("{}{url_path}", self.base_url);

        let request = self
            .client
            .get(&full_url)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let result = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        parse_response(result).await
    }
}
