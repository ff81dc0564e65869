use axum::http::{header, HeaderMap, Method, Uri};
use serde_json::Value;

use crate::providers::{split_model, Provider, RoutingTable};

/// Where a request goes and what body it carries there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub provider: Provider,
    /// Re-serialized payload. `None` forwards the original body untouched.
    pub body: Option<Vec<u8>>,
}

impl Dispatch {
    pub fn fallback() -> Self {
        Self {
            provider: Provider::Default,
            body: None,
        }
    }
}

/// Only POST requests declaring a JSON content type are inspected. Repeated
/// `content-type` lines all count.
pub fn sniffs_json(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::POST
        && headers
            .get_all(header::CONTENT_TYPE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|ct| ct.contains("application/json"))
}

/// Pick the upstream from the `model` prefix of a JSON payload, stripping the
/// prefix when the provider is known.
pub fn resolve(table: &RoutingTable, body: &[u8]) -> Dispatch {
    let mut payload: Value = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Failed to parse JSON body, using default upstream: {}", e);
            return Dispatch::fallback();
        }
    };

    // Non-string or empty models count as absent
    let Some(model) = payload
        .get("model")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
    else {
        return Dispatch::fallback();
    };

    let (key, rest) = split_model(model);
    let rest = rest.to_string();

    let Some((provider, _)) = table.lookup(&key) else {
        return Dispatch::fallback();
    };

    if !rest.is_empty() {
        payload["model"] = Value::String(rest);
    }

    Dispatch {
        provider,
        body: Some(payload.to_string().into_bytes()),
    }
}

/// Base URL + path + query. Gemini's OpenAI-compatible surface has no `/v1/`
/// segment, so the first one is dropped for it.
pub fn target_url(table: &RoutingTable, provider: Provider, uri: &Uri) -> String {
    let path = match provider {
        Provider::Gemini => uri.path().replacen("/v1/", "/", 1),
        _ => uri.path().to_string(),
    };

    let query = uri
        .query()
        .filter(|q| !q.is_empty())
        .map(|q| format!("?{}", q))
        .unwrap_or_default();

    format!("{}{}{}", table.base_url(provider), path, query)
}
