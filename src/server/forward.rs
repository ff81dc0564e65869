use axum::body::{Body, Bytes, HttpBody};
use axum::http::header::{self, HeaderName};
use axum::http::request::Parts;
use axum::http::{HeaderValue, Response};
use hyper::ext::ReasonPhrase;

/// Hop-by-hop response headers that describe the upstream connection rather
/// than the payload being relayed.
const HOP_BY_HOP: [HeaderName; 2] = [header::CONNECTION, header::TRANSFER_ENCODING];

/// Body sent upstream.
pub enum OutboundBody {
    /// Payload rewritten after stripping the provider prefix.
    Rewritten(Vec<u8>),
    /// Original bytes, already read while sniffing for a provider.
    Buffered(Bytes),
    /// Original body that was never inspected; streamed through.
    Streaming(Body),
}

/// Send the request to `url` and relay whatever comes back.
pub async fn forward(
    client: &reqwest::Client,
    parts: &Parts,
    url: &str,
    body: OutboundBody,
) -> anyhow::Result<Response<Body>> {
    let rewritten = matches!(body, OutboundBody::Rewritten(_));

    let mut req_builder = client.request(parts.method.clone(), url);

    // Host is derived from the target URL; a rewritten body gets a fresh length
    for (name, value) in parts.headers.iter() {
        if name == header::HOST || (rewritten && name == header::CONTENT_LENGTH) {
            continue;
        }
        req_builder = req_builder.header(name.clone(), value.clone());
    }

    req_builder = match body {
        OutboundBody::Rewritten(bytes) => req_builder.body(bytes),
        OutboundBody::Buffered(bytes) => req_builder.body(bytes),
        OutboundBody::Streaming(body) => {
            if body.is_end_stream() || body.size_hint().exact() == Some(0) {
                req_builder
            } else {
                req_builder.body(reqwest::Body::wrap_stream(body.into_data_stream()))
            }
        }
    };

    let response = req_builder.send().await?;

    Ok(relay(response))
}

/// Rebuild the upstream response for the caller: same status, reason phrase
/// and headers, streamed body, and a wildcard CORS origin.
pub fn relay(response: reqwest::Response) -> Response<Body> {
    let status = response.status();
    let reason = response.extensions().get::<ReasonPhrase>().cloned();

    let mut headers = response.headers().clone();
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

    let mut relayed = Response::new(Body::from_stream(response.bytes_stream()));
    *relayed.status_mut() = status;
    *relayed.headers_mut() = headers;
    if let Some(reason) = reason {
        relayed.extensions_mut().insert(reason);
    }

    relayed
}
