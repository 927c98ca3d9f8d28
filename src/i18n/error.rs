//! Locale resolution and translation errors.

use thiserror::Error;

/// Errors raised at the i18n call boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// Token was absent or not a member of the registry.
    ///
    /// `None` means no token was supplied at all.
    #[error("unsupported locale: {}", display_token(.0))]
    UnsupportedLocale(Option<String>),

    /// The locale's message table has no entry for `key`.
    #[error("missing message `{key}` for locale `{locale}`")]
    MissingMessageKey { locale: String, key: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl I18nError {
    pub(crate) fn unsupported(token: Option<&str>) -> Self {
        Self::UnsupportedLocale(token.map(str::to_owned))
    }

    /// The rejected token, if one was supplied.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::UnsupportedLocale(token) => token.as_deref(),
            _ => None,
        }
    }
}

fn display_token(token: &Option<String>) -> String {
    match token {
        Some(t) if t.is_empty() => "<empty>".to_string(),
        Some(t) => format!("`{t}`"),
        None => "<none>".to_string(),
    }
}

/// Registry construction errors.
///
/// Raised once at startup; a registry that fails these checks never exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no locales declared")]
    Empty,

    #[error("locale `{0}` declared more than once")]
    Duplicate(String),

    #[error("invalid locale key `{0}`: must be a non-empty path segment of [A-Za-z0-9_-]")]
    InvalidKey(String),

    #[error("default locale `{0}` is not in the supported locales")]
    DefaultNotSupported(String),

    #[error("locale `{0}` has no profile")]
    MissingProfile(String),
}
