use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "drill")]
#[command(about = "AI-powered programming practice problem generator")]
#[command(version)]
pub struct Args {
    /// Prompt language code (en or th); asked interactively if omitted
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Provider name from the config file
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Restrict problems to a topic (repeatable)
    #[arg(short = 'T', long = "topic", value_name = "TOPIC")]
    pub topics: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure drill settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported prompt languages
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a single provider
        provider: Option<String>,
    },
}
