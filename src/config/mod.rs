//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DrillConfig, ProviderConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
