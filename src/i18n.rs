// ==========================================
// Internationalization (i18n)
// ==========================================
// rust-i18n backed; English (default) and Hungarian.
// Note: the rust_i18n::i18n! macro is initialized in lib.rs.
// ==========================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Report/prompt language.
///
/// The original tool was written for Hungarian cost-accounting coursework,
/// so Hungarian is a first-class locale rather than an afterthought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hu,
}

impl Language {
    /// Locale code as registered in the catalogs under locales/.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hu => "hu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locale())
    }
}

/// Unrecognized language selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language `{0}`, expected `english`/`en` or `hungarian`/`hu`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "hu" | "hungarian" | "magyar" => Ok(Language::Hu),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Current locale code.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch the active locale ("en" or "hu").
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Switch the active locale from a parsed language selector.
pub fn set_language(language: Language) {
    set_locale(language.locale());
}

/// Translate a message key.
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message key with `%{name}` placeholder substitution.
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// rust-i18n keeps the locale in global state and Rust tests run in
// parallel by default; every test asserting translated text must hold
// this lock.
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" Hungarian ".parse::<Language>().unwrap(), Language::Hu);
        assert_eq!("hu".parse::<Language>().unwrap(), Language::Hu);
        assert!("german".parse::<Language>().is_err());
    }

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_language(Language::Hu);
        assert_eq!(current_locale(), "hu");

        set_language(Language::En);
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(t("report.row.material"), "Direct material cost");

        set_locale("hu");
        assert_eq!(t("report.row.material"), "Közvetlen anyagköltség");

        set_locale("en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("report.product_column", &[("name", "A")]);
        assert!(msg.contains('A'));

        set_locale("hu");
        let msg = t_with_args("report.product_column", &[("name", "B")]);
        assert!(msg.contains('B'));

        set_locale("en");
    }
}
