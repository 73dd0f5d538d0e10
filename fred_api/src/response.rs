//! Turns a raw response (status, body, format) into a typed value or a
//! classified [`Error`].

use serde::de::DeserializeOwned;

use crate::{
    query::ResponseFormat,
    types::{Collection, ErrorEnvelope},
    Error,
};

const MAX_SNIPPET: usize = 2000;

/// Decodes a success body in the given format.
pub fn decode_body<T>(body: &[u8], format: ResponseFormat) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let parsed = match format {
        ResponseFormat::Json => serde_json::from_slice::<T>(body)
            .map_err(|e| format!("failed to parse json response: {}", e)),
        ResponseFormat::Xml => std::str::from_utf8(body)
            .map_err(|e| format!("failed to parse xml response: {}", e))
            .and_then(|text| {
                quick_xml::de::from_str::<T>(text)
                    .map_err(|e| format!("failed to parse xml response: {}", e))
            }),
    };
    parsed.map_err(|msg| {
        tracing::error!("{} | body: {}", msg, truncate_body(body));
        Error::Parse(msg)
    })
}

/// Maps a status and body to the success type, or to the error the status
/// calls for. `desc` names the operation in messages, e.g. "series".
pub fn decode_response<T>(
    status: u16,
    body: &[u8],
    format: ResponseFormat,
    desc: &str,
) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    match status {
        200 => decode_body(body, format),
        404 => {
            tracing::error!("{} not found: {}", desc, truncate_body(body));
            Err(Error::NotFound(format!("could not find {}: {}", desc, status)))
        }
        400 => {
            let envelope = decode_envelope(body, format, desc)?;
            tracing::error!("invalid {} request: {}", desc, envelope.message);
            Err(Error::InvalidRequest {
                message: format!("invalid {} request: {}", desc, envelope.message),
                reason: envelope.message,
            })
        }
        _ => {
            let envelope = decode_envelope(body, format, desc)?;
            tracing::error!(
                "request for {} failed with status {}: {}",
                desc,
                status,
                envelope.message
            );
            Err(Error::UnknownServer {
                status,
                code: envelope.code,
                message: format!(
                    "could not get {} ({}): {}",
                    desc, envelope.code, envelope.message
                ),
            })
        }
    }
}

fn decode_envelope(body: &[u8], format: ResponseFormat, desc: &str) -> Result<ErrorEnvelope, Error> {
    decode_body::<ErrorEnvelope>(body, format)
        .map_err(|e| e.context(format!("failed to parse {} error response", desc)))
}

/// Extracts the only entity of a collection that must hold exactly one.
pub fn single<C>(collection: C) -> Result<C::Item, Error>
where
    C: Collection,
{
    let mut items = collection.into_items();
    match items.len() {
        0 => Err(Error::UnexpectedCount(format!(
            "received an empty {} list",
            C::NAME
        ))),
        1 => Ok(items.remove(0)),
        n => Err(Error::UnexpectedCount(format!(
            "expected only a single {}, received {}",
            C::NAME,
            n
        ))),
    }
}

pub(crate) fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_SNIPPET {
        return text.into_owned();
    }
    let mut end = MAX_SNIPPET;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &text[..end])
}
