//! Message catalog
//!
//! The three language packs are compiled into the binary from `translations/`
//! and validated once at startup, so handlers can look up text without
//! any failure path.

use serde::Deserialize;
use tracing::{debug, info};
use crate::models::Plan;
use crate::utils::errors::{StarPassError, Result};
use super::Language;

const PT_SOURCE: &str = include_str!("../../translations/pt.json");
const EN_SOURCE: &str = include_str!("../../translations/en.json");
const ES_SOURCE: &str = include_str!("../../translations/es.json");

/// One selectable subscription option
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanOption {
    pub label: String,
    pub token: Plan,
}

/// Every user-facing string for one language
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagePack {
    pub language_set: String,
    pub direct_pass: String,
    pub direct_pass_confirm: String,
    pub choose_plan: String,
    pub sub15: String,
    pub sub30: String,
    pub plans: Vec<PlanOption>,
    pub help: String,
}

impl MessagePack {
    /// Confirmation sent after a subscription plan is granted
    pub fn plan_confirmation(&self, plan: Plan) -> &str {
        match plan {
            Plan::Biweekly => &self.sub15,
            Plan::Monthly => &self.sub30,
        }
    }

    fn texts(&self) -> [(&'static str, &str); 7] {
        [
            ("language_set", self.language_set.as_str()),
            ("direct_pass", self.direct_pass.as_str()),
            ("direct_pass_confirm", self.direct_pass_confirm.as_str()),
            ("choose_plan", self.choose_plan.as_str()),
            ("sub15", self.sub15.as_str()),
            ("sub30", self.sub30.as_str()),
            ("help", self.help.as_str()),
        ]
    }

    fn validate(&self, language: Language) -> Result<()> {
        for (key, text) in self.texts() {
            if text.trim().is_empty() {
                return Err(StarPassError::Translation(
                    format!("Empty message '{}' for language {}", key, language)
                ));
            }
        }

        if self.plans.len() != Plan::ALL.len()
            || !Plan::ALL.iter().all(|plan| self.plans.iter().any(|o| o.token == *plan))
        {
            return Err(StarPassError::Translation(
                format!("Language {} must offer exactly the plans {:?}", language, Plan::ALL)
            ));
        }

        if let Some(option) = self.plans.iter().find(|o| o.label.trim().is_empty()) {
            return Err(StarPassError::Translation(
                format!("Empty label for plan {:?} in language {}", option.token, language)
            ));
        }

        Ok(())
    }
}

/// Static mapping from language to its message pack
#[derive(Debug, Clone)]
pub struct Catalog {
    pt: MessagePack,
    en: MessagePack,
    es: MessagePack,
    default_language: Language,
}

impl Catalog {
    /// Load and validate the embedded language packs
    pub fn load(default_language: Language) -> Result<Self> {
        let catalog = Self {
            pt: parse_pack(Language::Pt, PT_SOURCE)?,
            en: parse_pack(Language::En, EN_SOURCE)?,
            es: parse_pack(Language::Es, ES_SOURCE)?,
            default_language,
        };

        info!(default_language = %default_language, "Message catalog loaded");
        Ok(catalog)
    }

    pub fn messages(&self, language: Language) -> &MessagePack {
        match language {
            Language::Pt => &self.pt,
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    /// Look up by raw code; unsupported codes get the default pack
    pub fn for_code(&self, code: &str) -> &MessagePack {
        self.messages(Language::resolve(Some(code), self.default_language))
    }
}

/// Decode one language pack and check it is complete
pub(crate) fn parse_pack(language: Language, source: &str) -> Result<MessagePack> {
    let pack: MessagePack = serde_json::from_str(source).map_err(|e| {
        StarPassError::Translation(format!("Invalid language pack {}: {}", language, e))
    })?;
    pack.validate(language)?;

    debug!(language = %language, plans = pack.plans.len(), "Parsed language pack");
    Ok(pack)
}
