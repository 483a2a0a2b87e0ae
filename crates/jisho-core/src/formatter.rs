use std::collections::HashSet;

use jisho_types::{DisplayItem, LookupRecord, Orthography};

use crate::error::FormatError;

/// Separator between Japanese words and readings
pub const SEP_COMMA: &str = "、 ";
/// Separator between kana readings and English definitions
pub const SEP_BAR: &str = " | ";
/// Separator between English definitions
pub const SEP_DEFINITIONS: &str = ", ";

#[derive(Debug, Clone, Copy)]
enum Field {
    Script,
    Kana,
}

impl Field {
    fn get(self, orthography: &Orthography) -> Option<&str> {
        match self {
            Field::Script => orthography.script_form(),
            Field::Kana => orthography.kana_form(),
        }
    }
}

/// Turns lookup records into display items.
///
/// Holds no state between calls; formatting the same record twice gives the
/// same item.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    japanese_separator: &'static str,
    section_separator: &'static str,
    definition_separator: &'static str,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            japanese_separator: SEP_COMMA,
            section_separator: SEP_BAR,
            definition_separator: SEP_DEFINITIONS,
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, record: &LookupRecord) -> Result<DisplayItem, FormatError> {
        check_invariants(record)?;

        let has_script = has_script_form(record);

        Ok(DisplayItem {
            title: self.title(record, has_script),
            subtitle: self.subtitle(record, has_script),
            canonical_term: canonical_term(record, has_script)?,
        })
    }

    fn title(&self, record: &LookupRecord, has_script: bool) -> String {
        if has_script {
            self.combine_field(record, Field::Script)
        } else {
            self.combine_field(record, Field::Kana)
        }
    }

    fn subtitle(&self, record: &LookupRecord, has_script: bool) -> String {
        let definitions = self.combine_definitions(record);

        // Kana is already the title when there is no script form
        if !has_script {
            return definitions;
        }

        let kana = self.combine_field(record, Field::Kana);
        match (kana.is_empty(), definitions.is_empty()) {
            (false, false) => format!("{kana}{}{definitions}", self.section_separator),
            (false, true) => kana,
            (true, false) => definitions,
            (true, true) => String::new(),
        }
    }

    /// Distinct values of one orthography field, first occurrence wins
    fn combine_field(&self, record: &LookupRecord, field: Field) -> String {
        let mut seen = HashSet::new();
        let values: Vec<&str> = record
            .orthographies
            .iter()
            .filter_map(|o| field.get(o))
            .filter(|value| seen.insert(*value))
            .collect();

        values.join(self.japanese_separator)
    }

    fn combine_definitions(&self, record: &LookupRecord) -> String {
        let definitions: Vec<&str> = record
            .senses
            .iter()
            .filter_map(|sense| sense.english_definitions.as_deref())
            .flatten()
            .map(String::as_str)
            .collect();

        definitions.join(self.definition_separator)
    }
}

/// True if at least one orthography carries a kanji/script form
pub fn has_script_form(record: &LookupRecord) -> bool {
    record.orthographies.iter().any(|o| o.script_form().is_some())
}

/// Single exact term for follow-up lookups, taken from the first orthography.
///
/// A first orthography without a script form falls back to its kana form
/// even when a later orthography has one.
fn canonical_term(record: &LookupRecord, has_script: bool) -> Result<String, FormatError> {
    let first = record
        .orthographies
        .first()
        .ok_or(FormatError::NoOrthographies)?;

    let term = if has_script {
        first.script_form().or_else(|| first.kana_form())
    } else {
        first.kana_form()
    };

    term.map(str::to_string)
        .ok_or(FormatError::EmptyOrthography { index: 0 })
}

fn check_invariants(record: &LookupRecord) -> Result<(), FormatError> {
    if record.orthographies.is_empty() {
        return Err(FormatError::NoOrthographies);
    }

    if let Some(index) = record
        .orthographies
        .iter()
        .position(|o| o.script_form().is_none() && o.kana_form().is_none())
    {
        return Err(FormatError::EmptyOrthography { index });
    }

    Ok(())
}
