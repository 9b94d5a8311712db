//! Prompt language handling.

use anyhow::Result;

use crate::ui::Style;

/// Languages the generator can ask for problems in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLanguage {
    English,
    Thai,
}

impl PromptLanguage {
    /// Short code used on the command line and in the config file.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Thai => "th",
        }
    }

    /// Display name, used to label generated output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Thai => "Thai",
        }
    }

    /// Parses a user-entered token. Accepts the short code or the full
    /// name, in any letter case.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "th" | "thai" => Some(Self::Thai),
            _ => None,
        }
    }
}

/// Supported language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("th", "Thai")];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported prompt languages"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates a language code given explicitly (CLI flag or config file).
///
/// Unlike the interactive prompt, an explicit code must be valid.
///
/// # Errors
///
/// Returns an error if the language code is not supported.
pub fn validate_language(lang: &str) -> Result<PromptLanguage> {
    PromptLanguage::parse(lang).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes: en, th\n\
             Run 'drill languages' to see all supported codes."
        )
    })
}
