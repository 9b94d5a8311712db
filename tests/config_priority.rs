//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use drill_cli::config::{
    ConfigFile, DrillConfig, ProviderConfig, ResolveOptions, resolve_config,
};
use drill_cli::generation::PromptLanguage;

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
            models: vec!["config_model".to_string()],
        },
    );
    providers.insert(
        "keyless".to_string(),
        ProviderConfig {
            endpoint: "http://localhost:11434".to_string(),
            api_key: None,
            api_key_env: None,
            models: vec![],
        },
    );
    providers.insert(
        "gated".to_string(),
        ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: None,
            api_key_env: Some("DRILL_TEST_UNSET_API_KEY".to_string()),
            models: vec![],
        },
    );

    ConfigFile {
        drill: DrillConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
            language: Some("en".to_string()),
        },
        providers,
    }
}

#[test]
fn test_falls_back_to_file_defaults() {
    let config = make_config_with_defaults();
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.endpoint, "http://test.local");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.api_key, Some("test_key".to_string()));
    assert_eq!(resolved.language, Some(PromptLanguage::English));
}

#[test]
fn test_cli_provider_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: None,
        provider: Some("keyless".to_string()),
        model: Some("llama3".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "keyless");
    assert_eq!(resolved.endpoint, "http://localhost:11434");
    assert!(resolved.api_key.is_none());
}

#[test]
fn test_cli_language_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: Some("th".to_string()),
        provider: None,
        model: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.language, Some(PromptLanguage::Thai));
}

#[test]
fn test_language_unset_means_ask_interactively() {
    let mut config = make_config_with_defaults();
    config.drill.language = None;

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert!(resolved.language.is_none());
}

#[test]
fn test_invalid_language_in_config_is_an_error() {
    let mut config = make_config_with_defaults();
    config.drill.language = Some("xx".to_string());

    let result = resolve_config(&ResolveOptions::default(), &config);

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Invalid language code")
    );
}

#[test]
fn test_missing_provider() {
    let options = ResolveOptions::default();
    let config = ConfigFile::default();

    let result = resolve_config(&options, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("provider"));
}

#[test]
fn test_provider_not_found() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: None,
        provider: Some("nonexistent".to_string()),
        model: None,
    };

    let result = resolve_config(&options, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn test_missing_model() {
    let mut config = make_config_with_defaults();
    config.drill.model = None;

    let result = resolve_config(&ResolveOptions::default(), &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("model"));
}

#[test]
fn test_api_key_required_but_missing() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: None,
        provider: Some("gated".to_string()),
        model: Some("gpt-4o".to_string()),
    };

    let result = resolve_config(&options, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API key"));
}
