use anyhow::Result;
use clap::Parser;

use drill_cli::cli::commands::{configure, providers, session};
use drill_cli::cli::{Args, Command};
use drill_cli::generation::{print_languages, validate_language};
use drill_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{} {err:?}", Style::error("Error:"));
        std::process::exit(exitcode::SOFTWARE);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        None => {
            if let Some(ref lang) = args.language {
                validate_language(lang)?;
            }

            let options = session::SessionOptions {
                language: args.language,
                provider: args.provider,
                model: args.model,
                topics: args.topics,
            };
            session::run_session(options).await?;
        }
    }

    Ok(())
}
