//! Supported display languages

use serde::{Deserialize, Serialize};

/// Language-neutral prompt shown above the language menu
pub const LANGUAGE_PROMPT: &str = "Choose your language / Escolha seu idioma / Elige tu idioma:";

/// Display language a user can pick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    #[default]
    En,
    Es,
}

impl Language {
    /// Menu order
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// Code stored in the `users.language` column
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a stored or configured language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Resolve an optional code, coercing absent or unsupported values to `default`
    pub fn resolve(code: Option<&str>, default: Language) -> Self {
        code.and_then(Self::from_code).unwrap_or(default)
    }

    /// Button label in the language menu
    pub fn label(self) -> &'static str {
        match self {
            Language::Pt => "🇧🇷 Português",
            Language::En => "🇺🇸 English",
            Language::Es => "🇪🇸 Español",
        }
    }

    /// Callback token carried by the language button
    pub fn callback_data(self) -> &'static str {
        match self {
            Language::Pt => "LANG_PT",
            Language::En => "LANG_EN",
            Language::Es => "LANG_ES",
        }
    }

    pub fn from_callback_data(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.callback_data() == data)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
