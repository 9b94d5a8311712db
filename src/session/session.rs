use anyhow::Result;
use futures_util::StreamExt;
use inquire::ui::{Attributes, Color, RenderConfig, Styled};
use inquire::{InquireError, Text};
use std::io::{self, Write};

use super::choice::{self, ContinueAnswer, MoreAnswer};
use super::ui;
use crate::generation::{CompletionClient, ProblemRequest, PromptLanguage};
use crate::ui::Spinner;

const LANGUAGE_HELP: &str = "en = English, th = Thai; anything else falls back to English";
const DIFFICULTY_HELP: &str = "Free-form, e.g. easy, medium, hard; quit to exit";
const MORE_HELP: &str = "more = another problem of the same difficulty";
const CONTINUE_HELP: &str = "no = end the session";

/// Configuration for a practice session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// Pre-selected prompt language; asked interactively when `None`.
    pub language: Option<PromptLanguage>,
    /// Topics appended to every prompt.
    pub topics: Vec<String>,
}

/// An interactive practice problem session.
///
/// Runs the conversation loop: one completion call per requested problem,
/// no conversation history carried between calls.
pub struct Session {
    config: SessionConfig,
    client: CompletionClient,
}

impl Session {
    /// Creates a new session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = CompletionClient::new(config.endpoint.clone(), config.api_key.clone());
        Self { config, client }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        ui::print_backend(&self.config.provider_name, &self.config.model);

        let render_config = Self::render_config();

        let language = match self.config.language {
            Some(language) => language,
            None => {
                let Some(language) = Self::ask_language(render_config)? else {
                    ui::print_goodbye();
                    return Ok(());
                };
                language
            }
        };
        ui::print_greeting(language);

        'session: loop {
            // Pick a difficulty; empty input re-prompts
            ui::print_separator();
            let difficulty = loop {
                let Some(line) = Self::ask(render_config, "Difficulty:", DIFFICULTY_HELP)? else {
                    break 'session;
                };
                let token = line.trim().to_string();
                if !token.is_empty() {
                    break token;
                }
            };
            if choice::is_quit_word(&difficulty) {
                break;
            }

            // One completion call per loop entry; repeat flag switches templates
            let mut repeat = false;
            loop {
                self.generate_and_print(language, &difficulty, repeat)
                    .await?;

                let Some(answer) = Self::ask(render_config, "More problems?", MORE_HELP)? else {
                    break 'session;
                };
                match choice::parse_more(&answer) {
                    MoreAnswer::More => repeat = true,
                    MoreAnswer::No => break,
                    MoreAnswer::Unrecognized => {
                        ui::print_warning(&format!(
                            "Unrecognized answer '{}', requesting another problem",
                            answer.trim()
                        ));
                        repeat = true;
                    }
                }
            }

            let Some(answer) = Self::ask(render_config, "Try a new difficulty?", CONTINUE_HELP)?
            else {
                break;
            };
            if choice::parse_continue(&answer) == ContinueAnswer::No {
                break;
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn render_config() -> RenderConfig<'static> {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style)
    }

    /// Reads one line; `Ok(None)` means the user cancelled (Ctrl+C or Escape).
    fn ask(
        render_config: RenderConfig<'static>,
        message: &str,
        help: &str,
    ) -> Result<Option<String>> {
        match Text::new(message)
            .with_render_config(render_config)
            .with_help_message(help)
            .prompt()
        {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                println!(); // Clear line before goodbye message
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// One language question; an unrecognized token falls back to English
    /// with a warning.
    fn ask_language(render_config: RenderConfig<'static>) -> Result<Option<PromptLanguage>> {
        let Some(line) = Self::ask(render_config, "Language:", LANGUAGE_HELP)? else {
            return Ok(None);
        };

        match PromptLanguage::parse(&line) {
            Some(language) => Ok(Some(language)),
            None => {
                ui::print_warning(&format!(
                    "Unrecognized language '{}', defaulting to English",
                    line.trim()
                ));
                Ok(Some(PromptLanguage::English))
            }
        }
    }

    async fn generate_and_print(
        &self,
        language: PromptLanguage,
        difficulty: &str,
        repeat: bool,
    ) -> Result<()> {
        let request = ProblemRequest {
            language,
            difficulty: difficulty.to_string(),
            topics: self.config.topics.clone(),
            repeat,
            model: self.config.model.clone(),
        };

        let spinner = Spinner::new("Generating problem...");

        let mut stream = self.client.problem_stream(&request).await?;
        let mut first_chunk = true;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;

            if first_chunk {
                spinner.stop();
                print!("{} ", ui::ai_label(language));
                first_chunk = false;
            }

            print!("{chunk}");
            io::stdout().flush()?;
        }

        if first_chunk {
            spinner.stop();
        }

        println!();
        println!();
        Ok(())
    }
}
