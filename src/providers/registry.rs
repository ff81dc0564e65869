use super::Provider;

const OPENAI_BASE: &str = "https://api.openai.com";
const DEEPSEEK_BASE: &str = "https://api.deepseek.com";
const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_BASE: &str = "https://openrouter.ai/api";

/// Immutable provider -> base URL mapping. Built once at startup and shared
/// read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    openai: String,
    deepseek: String,
    gemini: String,
    fallback: String,
}

impl RoutingTable {
    pub fn builtin() -> Self {
        Self {
            openai: OPENAI_BASE.to_string(),
            deepseek: DEEPSEEK_BASE.to_string(),
            gemini: GEMINI_BASE.to_string(),
            fallback: DEFAULT_BASE.to_string(),
        }
    }

    /// Table with every upstream under one origin, e.g. a local mock server.
    #[cfg(test)]
    pub(crate) fn rooted_at(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            openai: format!("{}/openai", origin),
            deepseek: format!("{}/deepseek", origin),
            gemini: format!("{}/gemini/v1beta/openai", origin),
            fallback: format!("{}/openrouter/api", origin),
        }
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::DeepSeek => &self.deepseek,
            Provider::Gemini => &self.gemini,
            Provider::Default => &self.fallback,
        }
    }

    /// Look up a routing key. Returns `None` for unknown keys.
    pub fn lookup(&self, key: &str) -> Option<(Provider, &str)> {
        Provider::from_key(key).map(|p| (p, self.base_url(p)))
    }

    /// All entries in display order, fallback last.
    pub fn entries(&self) -> Vec<(Provider, &str)> {
        Provider::ALL
            .iter()
            .map(|p| (*p, self.base_url(*p)))
            .collect()
    }
}
