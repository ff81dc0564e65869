#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    DeepSeek,
    Gemini,
    Default,
}

impl Provider {
    /// Every table entry, fallback last.
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::DeepSeek,
        Provider::Gemini,
        Provider::Default,
    ];

    /// Resolve a lower-cased routing key. `default` names the fallback
    /// upstream explicitly.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "openai" => Some(Provider::OpenAi),
            "deepseek" => Some(Provider::DeepSeek),
            "gemini" => Some(Provider::Gemini),
            "default" => Some(Provider::Default),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::DeepSeek => "deepseek",
            Provider::Gemini => "gemini",
            Provider::Default => "default",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Split a `model` value on its first `/` into a lower-cased provider key and
/// the remaining model name (empty when there is no slash).
pub fn split_model(model: &str) -> (String, &str) {
    match model.split_once('/') {
        Some((prefix, rest)) => (prefix.to_lowercase(), rest),
        None => (model.to_lowercase(), ""),
    }
}
