//! Generic HTTP fetching utilities with status and payload error mapping
//!
//! Every request is sent once; transient failures are reported to the
//! caller instead of being retried.

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::endpoints::TBA_AUTH_HEADER;
use crate::error::AppError;

/// GETs `url` and parses the JSON body into `T`.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");
    let response = send(client.get(url), url).await?;
    parse_json_response(response, url).await
}

/// GETs a TheBlueAlliance resource, sending the read key header.
#[instrument(skip(client, api_key))]
pub(super) async fn fetch_with_tba_key<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<T, AppError> {
    info!("Fetching TBA data from URL: {url}");
    let response = send(client.get(url).header(TBA_AUTH_HEADER, api_key), url).await?;
    parse_json_response(response, url).await
}

/// POSTs `body` as JSON and parses the JSON response into `T`.
#[instrument(skip(client, body))]
pub(super) async fn post_json<B, T>(client: &Client, url: &str, body: &B) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    info!("Posting query to URL: {url}");
    let response = send(client.post(url).json(body), url).await?;
    parse_json_response(response, url).await
}

async fn send(request: RequestBuilder, url: &str) -> Result<Response, AppError> {
    match request.send().await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            }
        }
    }
}

/// Maps a non-success HTTP status to the matching error variant.
pub(super) fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

async fn parse_json_response<T: DeserializeOwned>(
    response: Response,
    url: &str,
) -> Result<T, AppError> {
    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(status_error(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    parse_body(&response_text, url)
}

/// Parses a response body, telling apart empty bodies, non-JSON bodies and
/// JSON of the wrong shape.
pub(super) fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{')
                && !trimmed.starts_with('[')
                && !trimmed.starts_with("null")
            {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
