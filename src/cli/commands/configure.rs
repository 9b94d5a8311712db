//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DrillConfig, ProviderConfig};
use crate::generation::SUPPORTED_LANGUAGES;
use crate::ui::{Style, handle_prompt_cancellation};

const ASK_EACH_SESSION: &str = "(ask each session)";

/// Runs the configure command to edit default settings.
///
/// With `show`, prints the current defaults and exits. Otherwise the user
/// interactively sets the default provider, model, and prompt language;
/// a first provider is bootstrapped when none is configured yet.
pub fn run_configure(show: bool) -> Result<()> {
    handle_prompt_cancellation(|| run_configure_inner(show))
}

fn run_configure_inner(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    if show {
        print_current_defaults(&config);
        return Ok(());
    }

    if config.providers.is_empty() {
        println!("No providers configured yet, let's add one.");
        println!();
        let (name, provider) = add_provider()?;
        config.providers.insert(name, provider);
        println!();
    }

    print_current_defaults(&config);

    let provider_names: Vec<String> = config.providers.keys().cloned().collect();

    let provider = select_provider(&provider_names, config.drill.provider.as_deref())?;

    let available_models: Vec<String> = config
        .providers
        .get(&provider)
        .map(|p| p.models.clone())
        .unwrap_or_default();

    let model = select_model(&available_models, config.drill.model.as_deref())?;

    let language = select_language(config.drill.language.as_deref())?;

    config.drill = DrillConfig {
        provider: Some(provider),
        model: Some(model),
        language,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        config
            .drill
            .provider
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        config
            .drill
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        config
            .drill
            .language
            .as_deref()
            .map_or_else(|| Style::secondary(ASK_EACH_SESSION), Style::value)
    );
    println!();
}

fn add_provider() -> Result<(String, ProviderConfig)> {
    let name = Text::new("Provider name:").with_default("openai").prompt()?;
    if name.trim().is_empty() {
        bail!("Provider name cannot be empty");
    }

    let endpoint = Text::new("API endpoint:")
        .with_default("https://api.openai.com")
        .with_help_message("Base URL; /v1/chat/completions is appended")
        .prompt()?;
    if endpoint.trim().is_empty() {
        bail!("Endpoint cannot be empty");
    }

    let api_key_env = Text::new("API key environment variable:")
        .with_default("OPENAI_API_KEY")
        .with_help_message("Leave empty for providers without authentication")
        .prompt()?;

    let model = Text::new("Model name:")
        .with_default("gpt-4o-mini")
        .prompt()?;
    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    let api_key_env = {
        let trimmed = api_key_env.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    Ok((
        name.trim().to_string(),
        ProviderConfig {
            endpoint: endpoint.trim().to_string(),
            api_key: None,
            api_key_env,
            models: vec![model.trim().to_string()],
        },
    ))
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        // No models configured, fall back to text input
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");

        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;

        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }

        Ok(model.trim().to_string())
    } else {
        // Models available, use selection
        let default_index = default
            .and_then(|d| available_models.iter().position(|m| m == d))
            .unwrap_or(0);

        let selection = Select::new("Default model:", available_models.to_vec())
            .with_starting_cursor(default_index)
            .prompt()?;

        Ok(selection)
    }
}

fn select_language(default: Option<&str>) -> Result<Option<String>> {
    // "(ask each session)" + "code - Name" entries
    let mut options: Vec<String> = vec![ASK_EACH_SESSION.to_string()];
    options.extend(
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, name)| format!("{code} - {name}")),
    );

    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|(code, _)| *code == d))
        .map_or(0, |idx| idx + 1);

    let selection = Select::new("Default prompt language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    if selection == ASK_EACH_SESSION {
        return Ok(None);
    }

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(Some(code.to_string()))
}
