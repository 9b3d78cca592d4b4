//! CLI subcommands and the helpers they share.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod serve;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use tracing::{debug, warn};

use pinpoint_core::{
    parse_pointers, CompletionError, CompletionService, OpenAiCompletion, PinpointConfig,
    UnavailableCompletion,
};

/// Pointer selection shared by `analyze` and `batch`.
#[derive(Args, Debug, Clone)]
pub struct PointerArgs {
    /// Pointer to resolve (repeatable)
    #[arg(short = 'p', long = "pointer", value_name = "POINTER")]
    pointers: Vec<String>,

    /// JSON file holding an array of pointers
    #[arg(long, value_name = "JSON", conflicts_with = "pointers")]
    pointers_file: Option<PathBuf>,

    /// Only run the deterministic stages, never call the completion service
    #[arg(long)]
    pub no_fallback: bool,
}

impl PointerArgs {
    /// Collect the requested pointers, in the order given.
    pub fn resolve(&self) -> anyhow::Result<Vec<String>> {
        if let Some(path) = &self.pointers_file {
            let raw = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
            return Ok(parse_pointers(&raw)?);
        }

        if self.pointers.is_empty() {
            anyhow::bail!("No pointers given. Use -p/--pointer or --pointers-file.");
        }
        if self.pointers.iter().any(|p| p.is_empty()) {
            anyhow::bail!("Pointers must not be empty");
        }

        Ok(self.pointers.clone())
    }
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pinpoint")
        .join("config.json")
}

/// Load the configuration from `path`, else the default file, else defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<PinpointConfig> {
    if let Some(path) = path {
        return PinpointConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        return Ok(PinpointConfig::from_file(&default_path)?);
    }

    Ok(PinpointConfig::default())
}

/// Build the completion service from configuration.
///
/// Missing credentials are not fatal: the returned service fails every call,
/// which surfaces as an `AI error: ` snippet on fallback entries.
pub fn build_completion(config: &PinpointConfig) -> Arc<dyn CompletionService> {
    match OpenAiCompletion::from_config(&config.completion) {
        Ok(service) => {
            debug!(
                "Completion service: {} at {}",
                service.model(),
                service.base_url()
            );
            Arc::new(service)
        }
        Err(e) => {
            warn!("Semantic fallback unavailable: {}", e);
            let reason = match e {
                CompletionError::Config(reason) => reason,
                other => other.to_string(),
            };
            Arc::new(UnavailableCompletion::new(reason))
        }
    }
}
