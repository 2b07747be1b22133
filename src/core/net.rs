use crate::core::{VgClient, VgError, client::constants};
use serde::de::DeserializeOwned;

/// Issues one GET for a fund resource and returns the body.
///
/// The body is read before the status is checked so that a failing response
/// can carry it back to the caller.
pub(crate) async fn get_resource(
    client: &VgClient,
    symbol: &str,
    resource: &str,
    query: Option<&str>,
) -> Result<String, VgError> {
    let url = client.resource_url(symbol, resource, query)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, "GET fund resource");

    let resp = client
        .http()
        .get(url.clone())
        .header(reqwest::header::REFERER, constants::REFERER)
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    crate::core::fixtures::record_response(symbol, resource, query, &text);

    if client.debug() {
        eprintln!("VG_DEBUG: {url} ({status})\n{text}");
    }

    if !status.is_success() {
        return Err(VgError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
            body: text,
        });
    }

    Ok(text)
}

/// Decodes a raw body into the wire envelope of `resource`.
pub(crate) fn decode<T: DeserializeOwned>(resource: &str, text: &str) -> Result<T, VgError> {
    serde_json::from_str(text).map_err(|source| VgError::MalformedResponse {
        resource: resource.to_string(),
        source,
    })
}
