use std::{env, fmt};

/// The locale resource files are chosen for, e.g. `de_DE` / `de`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    language: String,
}

impl Locale {
    /// Parses tags like `de_DE`, `de-DE`, `de_DE.UTF-8` or `sr_RS@latin`.
    ///
    /// `C`, `POSIX` and empty tags mean English.
    pub fn parse(tag: &str) -> Self {
        let tag = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('-', "_");

        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return Self::english();
        }

        let language = tag.split('_').next().unwrap_or_default().to_string();
        Self { tag, language }
    }

    pub fn english() -> Self {
        Self {
            tag: "en".to_string(),
            language: "en".to_string(),
        }
    }

    /// Detects the locale from `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::parse(&value))
            .unwrap_or_else(Self::english)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resource file stems to try, most specific first: full tag, language, `en`.
    pub fn candidates(&self) -> Vec<&str> {
        let mut candidates: Vec<&str> = Vec::with_capacity(3);
        for name in [self.tag.as_str(), self.language.as_str(), "en"] {
            if !candidates.contains(&name) {
                candidates.push(name);
            }
        }
        candidates
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
