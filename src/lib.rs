//! # drill - Practice Problem CLI
//!
//! `drill` is a command-line tool for generating programming practice problems
//! using OpenAI-compatible API endpoints. It runs an interactive session that
//! asks for a difficulty level, streams a generated problem to the terminal,
//! and keeps going for as long as you want more.
//!
//! ## Features
//!
//! - **Streaming output**: See problems as they are generated
//! - **Two prompt languages**: Problems in English or Thai
//! - **Multiple providers**: Configure and switch between different API providers
//! - **Topic filters**: Restrict problems to selected topics with `--topic`
//!
//! ## Quick Start
//!
//! ```bash
//! # Set up a provider and defaults
//! drill configure
//!
//! # Start an interactive session
//! drill
//!
//! # Skip the language question
//! drill --language th
//!
//! # Only graph and string problems
//! drill -T graphs -T strings
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/drill/config.toml`:
//!
//! ```toml
//! [drill]
//! provider = "openai"
//! model = "gpt-4o-mini"
//! language = "en"
//!
//! [providers.openai]
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! models = ["gpt-4o-mini", "gpt-4o"]
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Problem generation: prompt templates, languages, completion client.
pub mod generation;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The interactive practice session loop.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
