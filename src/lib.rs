//! Deterministic stand-in embedding providers for driving tests without
//! network calls: a constant-vector provider and a synthetic provider that
//! derives a repeatable vector from the document text.

pub mod config;
pub mod embeddings;
pub mod logging;

pub use config::{Config, LoggingConfig};
pub use embeddings::{
    create_provider, create_provider_by_name, describe, EmbeddingError, EmbeddingProvider,
    EmbeddingsConfig, FixedEmbedder, ProviderInfo, ProviderKind, SyntheticConfig,
    SyntheticEmbedder, FIXED_VECTOR,
};
