//! Configuration structures for the pinpoint service.

use serde::{Deserialize, Serialize};

/// Main configuration for pinpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PinpointConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Pointer resolution configuration.
    pub resolution: ResolutionConfig,

    /// Completion service configuration.
    pub completion: CompletionConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,
}

/// Pointer resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Characters of page text returned for a keyword hit.
    pub keyword_window: usize,

    /// Ask the completion service when a page has no deterministic match.
    pub semantic_fallback: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            keyword_window: 80,
            semantic_fallback: true,
        }
    }
}

/// Completion service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Chat model name.
    pub model: String,

    /// API base URL (for proxies or compatible providers).
    pub base_url: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Characters of document text included in the prompt.
    pub context_chars: usize,

    /// Per-call timeout in seconds; no timeout when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            context_chars: 6000,
            timeout_secs: None,
        }
    }
}

impl PinpointConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
