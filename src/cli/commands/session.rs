use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{Session, SessionConfig};

pub struct SessionOptions {
    pub language: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub topics: Vec<String>,
}

pub async fn run_session(options: SessionOptions) -> Result<()> {
    let config = load_session_config(options)?;
    let mut session = Session::new(config);
    session.run().await
}

fn load_session_config(options: SessionOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            language: options.language,
            provider: options.provider,
            model: options.model,
        },
        &file_config,
    )?;

    Ok(SessionConfig {
        provider_name: resolved.provider_name,
        endpoint: resolved.endpoint,
        model: resolved.model,
        api_key: resolved.api_key,
        language: resolved.language,
        topics: options.topics,
    })
}
