use serde::{Deserialize, Serialize};

/// Report language. Passed explicitly to every render call.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[value(name = "en")]
    #[serde(alias = "en")]
    English,
    #[value(name = "fr")]
    #[serde(alias = "fr")]
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "Français",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Pick between an English and a French string.
    pub fn pick(&self, en: &'static str, fr: &'static str) -> &'static str {
        match self {
            Language::English => en,
            Language::French => fr,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
