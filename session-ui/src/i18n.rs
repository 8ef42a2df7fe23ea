// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translation lookup keyed by the English source string.
//!
//! Every user-facing string is looked up by its literal English text, so an
//! untranslated key renders as itself. Templates use `%(name)s` placeholders
//! which are filled in after lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Parse a language tag such as `de`, `de-DE` or `de_AT`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    /// Like [`Language::from_tag`] but falls back to English.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unsupported language {tag:?}, falling back to English");
            Language::default()
        })
    }

    fn table(&self) -> Option<&'static HashMap<&'static str, &'static str>> {
        match self {
            Language::En => None,
            Language::De => Some(&DE),
        }
    }
}

static DE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Verified", "Verifiziert"),
        ("Unverified", "Nicht verifiziert"),
        ("Last activity", "Letzte Aktivität"),
        ("Sessions", "Sitzungen"),
        ("No sessions found.", "Keine Sitzungen gefunden."),
        ("Show details", "Details anzeigen"),
        ("Hide details", "Details verbergen"),
        ("Session ID", "Sitzungs-ID"),
        ("IP address", "IP-Adresse"),
        ("AM", "AM"),
        ("PM", "PM"),
        ("Sun", "So"),
        ("Mon", "Mo"),
        ("Tue", "Di"),
        ("Wed", "Mi"),
        ("Thu", "Do"),
        ("Fri", "Fr"),
        ("Sat", "Sa"),
        ("Jan", "Jan."),
        ("Feb", "Feb."),
        ("Mar", "März"),
        ("Apr", "Apr."),
        ("May", "Mai"),
        ("Jun", "Juni"),
        ("Jul", "Juli"),
        ("Aug", "Aug."),
        ("Sep", "Sep."),
        ("Oct", "Okt."),
        ("Nov", "Nov."),
        ("Dec", "Dez."),
        ("%(weekDayName)s %(time)s", "%(weekDayName)s %(time)s"),
        (
            "%(weekDayName)s, %(monthName)s %(day)s %(time)s",
            "%(weekDayName)s, %(day)s. %(monthName)s %(time)s",
        ),
        (
            "%(weekDayName)s, %(monthName)s %(day)s %(fullYear)s %(time)s",
            "%(weekDayName)s, %(day)s. %(monthName)s %(fullYear)s %(time)s",
        ),
        ("%(monthName)s %(day)s", "%(day)s. %(monthName)s"),
        (
            "%(monthName)s %(day)s, %(fullYear)s",
            "%(day)s. %(monthName)s %(fullYear)s",
        ),
    ])
});

/// Resolves source strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Translate `key`, returning the key itself when no translation exists.
    pub fn t(&self, key: &str) -> String {
        self.language
            .table()
            .and_then(|table| table.get(key))
            .copied()
            .unwrap_or(key)
            .to_string()
    }

    /// Translate `key` and fill in its `%(name)s` placeholders.
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        substitute(&self.t(key), vars)
    }
}

/// Replace each `%(name)s` in `template` with the matching value.
/// Placeholders without a value are left untouched.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find(")s") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
