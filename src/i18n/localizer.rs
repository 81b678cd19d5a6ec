use crate::errors::{I18nError, I18nResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

type Catalog = HashMap<String, String>;

const BUNDLED_STRINGS: &str = include_str!("../../data/strings.ron");

/// Localized battle texts, one key→text catalog per language.
///
/// Catalog files are RON maps of language code to catalog:
///
/// ```ron
/// {
///     "en": { "battle.menu.attack": "Attack" },
///     "fr": { "battle.menu.attack": "Attaque" },
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Localizer {
    catalogs: HashMap<String, Catalog>,
    language: String,
}

impl Localizer {
    pub fn new(catalogs: HashMap<String, Catalog>, language: &str) -> I18nResult<Self> {
        if !catalogs.contains_key(language) {
            return Err(I18nError::UnknownLanguage(language.to_string()));
        }
        Ok(Self {
            catalogs,
            language: language.to_string(),
        })
    }

    pub fn from_ron_str(content: &str, language: &str) -> I18nResult<Self> {
        let catalogs: HashMap<String, Catalog> = ron::from_str(content)?;
        Self::new(catalogs, language)
    }

    pub fn load(path: &Path, language: &str) -> I18nResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content, language)
    }

    /// The catalogs shipped with the crate.
    pub fn bundled(language: &str) -> I18nResult<Self> {
        Self::from_ron_str(BUNDLED_STRINGS, language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switches language. Listeners still have to be told through the registry.
    pub fn set_language(&mut self, language: &str) -> I18nResult<()> {
        if !self.catalogs.contains_key(language) {
            return Err(I18nError::UnknownLanguage(language.to_string()));
        }
        self.language = language.to_string();
        Ok(())
    }

    /// The text for `key`, or the key itself when the current catalog lacks it.
    pub fn get(&self, key: &str) -> String {
        match self
            .catalogs
            .get(&self.language)
            .and_then(|catalog| catalog.get(key))
        {
            Some(text) => text.clone(),
            None => {
                tracing::debug!(key, language = %self.language, "missing translation");
                key.to_string()
            }
        }
    }

    /// Like [`Localizer::get`], replacing each `{name}` placeholder with its value.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.get(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}
