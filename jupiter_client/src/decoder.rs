use crate::error::{ClientResult, Error};
use error_stack::{ResultExt, report};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::error;

/// Longest payload prefix attached to decode errors.
const PAYLOAD_SNIPPET_CHARS: usize = 256;

/// Classifies the status, then decodes the body.
///
/// Any non-2xx becomes `Error::UnexpectedStatus` carrying the raw body text; that body is
/// never parsed. The response is consumed on every path.
pub async fn handle_jupiter_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let (body, read_error) = match response.text().await {
            Ok(body) => (body, None),
            Err(e) => {
                error!(
                    "Failed to read body of Jupiter response with status {}: {}",
                    status.as_u16(),
                    e
                );
                (String::new(), Some(e))
            }
        };

        error!("Jupiter responded with status {}: {}", status.as_u16(), body);

        let report = report!(Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        });
        return Err(match read_error {
            Some(e) => report.attach_printable(format!("Failed to read response body: {e}")),
            None => report,
        });
    }

    let bytes = response
        .bytes()
        .await
        .change_context(Error::TransportError)
        .attach_printable("Failed to read Jupiter response body")?;

    decode_json(&bytes)
}

pub fn decode_json<T: DeserializeOwned>(payload: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(payload).map_err(|e| {
        let snippet = payload_snippet(payload);
        error!(
            "Error deserializing Jupiter response: {}, response: {}",
            e, snippet
        );
        report!(Error::DecodeError(e.to_string())).attach_printable(format!("Payload: {snippet}"))
    })
}

fn payload_snippet(payload: &[u8]) -> String {
    let text = String::from_utf8_lossy(payload);
    match text.char_indices().nth(PAYLOAD_SNIPPET_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.into_owned(),
    }
}
