use serde::{Deserialize, Serialize};

/// One candidate word or phrase returned by the lookup API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Written-form variants, in API order
    #[serde(rename = "japanese", default)]
    pub orthographies: Vec<Orthography>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

/// A written form: kanji (script) and/or kana
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orthography {
    #[serde(rename = "word", default, skip_serializing_if = "Option::is_none")]
    pub script_form: Option<String>,
    #[serde(rename = "reading", default, skip_serializing_if = "Option::is_none")]
    pub kana_form: Option<String>,
}

impl Orthography {
    pub fn script(text: &str) -> Self {
        Self {
            script_form: Some(text.to_string()),
            kana_form: None,
        }
    }

    pub fn kana(text: &str) -> Self {
        Self {
            script_form: None,
            kana_form: Some(text.to_string()),
        }
    }

    pub fn full(script: &str, kana: &str) -> Self {
        Self {
            script_form: Some(script.to_string()),
            kana_form: Some(kana.to_string()),
        }
    }

    /// Script form, treating an empty string as absent
    pub fn script_form(&self) -> Option<&str> {
        self.script_form.as_deref().filter(|s| !s.is_empty())
    }

    /// Kana form, treating an empty string as absent
    pub fn kana_form(&self) -> Option<&str> {
        self.kana_form.as_deref().filter(|s| !s.is_empty())
    }
}

/// One meaning grouping of a word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_definitions: Option<Vec<String>>,
}

impl Sense {
    pub fn new(definitions: &[&str]) -> Self {
        Self {
            english_definitions: Some(definitions.iter().map(|d| d.to_string()).collect()),
        }
    }
}

/// Formatted result row handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    pub subtitle: String,
    /// Exact term used for re-querying or opening the lookup page
    pub canonical_term: String,
}
