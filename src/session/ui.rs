//! Session UI components.

use crate::generation::PromptLanguage;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SEPARATOR: &str = "-----------------------------";

pub fn print_header() {
    println!(
        "{} {} - Interactive Practice Problem Mode",
        Style::header("drill"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_greeting(language: PromptLanguage) {
    println!(
        "{} Problems will be generated in {}",
        Style::success("✓"),
        Style::value(language.name())
    );
    println!();
}

pub fn print_backend(provider: &str, model: &str) {
    println!(
        "{} {} {} {}",
        Style::label("provider"),
        Style::value(provider),
        Style::label("model"),
        Style::value(model)
    );
}

pub fn print_separator() {
    println!("{}", Style::secondary(SEPARATOR));
}

/// Label printed in front of each generated response.
pub fn ai_label(language: PromptLanguage) -> String {
    Style::header(format!("AI ({}):", language.name()))
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_label_carries_language_name() {
        assert!(ai_label(PromptLanguage::English).contains("AI (English):"));
        assert!(ai_label(PromptLanguage::Thai).contains("AI (Thai):"));
    }
}
