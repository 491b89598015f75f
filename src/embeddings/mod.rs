mod config;
mod fixed;
mod provider;
mod synthetic;

// Re-export public interfaces
pub use config::{EmbeddingsConfig, ProviderKind, SyntheticConfig};
pub use fixed::{FixedEmbedder, FIXED_VECTOR};
pub use provider::{EmbeddingProvider, ProviderInfo};
pub use synthetic::{SyntheticEmbedder, DEFAULT_VECTOR_SIZE};

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur when building an embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The configured vector size cannot produce a valid embedding.
    #[error("invalid vector size {0}, must be at least 1")]
    InvalidVectorSize(usize),

    /// A provider name did not match any known provider.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// Create the provider selected by the configuration.
pub fn create_provider(
    config: &EmbeddingsConfig,
) -> Result<Arc<dyn EmbeddingProvider>, EmbeddingError> {
    let provider: Arc<dyn EmbeddingProvider> = match config.provider {
        ProviderKind::Fixed => Arc::new(FixedEmbedder::new()),
        ProviderKind::Synthetic => {
            Arc::new(SyntheticEmbedder::new(config.synthetic.vector_size)?)
        }
    };

    debug!(
        provider = provider.provider_name(),
        dimension = provider.embedding_dimension(),
        "created embedding provider"
    );

    Ok(provider)
}

/// Create a provider from a name string, e.g. a test harness knob.
pub fn create_provider_by_name(
    name: &str,
    config: &EmbeddingsConfig,
) -> Result<Arc<dyn EmbeddingProvider>, EmbeddingError> {
    let kind = match name.to_lowercase().as_str() {
        "fixed" => ProviderKind::Fixed,
        "synthetic" => ProviderKind::Synthetic,
        _ => return Err(EmbeddingError::UnknownProvider(name.to_string())),
    };

    create_provider(&EmbeddingsConfig {
        provider: kind,
        ..config.clone()
    })
}

/// Summarize a provider for listing and logging.
pub fn describe(provider: &dyn EmbeddingProvider) -> ProviderInfo {
    ProviderInfo {
        name: provider.provider_name(),
        dimension: provider.embedding_dimension(),
    }
}
