//! Answer language preference.

use std::fmt;

/// Which language the service leads with.
///
/// The widget serves a bilingual audience: answers are always bilingual, but
/// the `lang` flag on a request decides which language comes first, both in
/// the system prompt and in locally-generated fallback text. Spanish is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    /// Spanish first, then English.
    #[default]
    Es,
    /// English first, then Spanish.
    En,
}

impl Lang {
    /// Parse a client-supplied language tag. Anything that does not look
    /// like English falls back to Spanish.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("en") {
            Lang::En
        } else {
            Lang::Es
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lang::Es => write!(f, "es"),
            Lang::En => write!(f, "en"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_tags() {
        assert_eq!(Lang::from_tag("en"), Lang::En);
        assert_eq!(Lang::from_tag("en-US"), Lang::En);
        assert_eq!(Lang::from_tag(" EN "), Lang::En);
    }

    #[test]
    fn test_everything_else_is_spanish() {
        assert_eq!(Lang::from_tag("es"), Lang::Es);
        assert_eq!(Lang::from_tag("fr"), Lang::Es);
        assert_eq!(Lang::from_tag(""), Lang::Es);
    }
}
