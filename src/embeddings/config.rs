use serde::{Deserialize, Serialize};

use super::synthetic::DEFAULT_VECTOR_SIZE;
use super::EmbeddingError;

/// Provider type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Fixed,
    Synthetic,
}

impl Default for ProviderKind {
    fn default() -> Self {
        Self::Fixed
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Embeddings configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingsConfig {
    /// Active provider
    #[serde(default)]
    pub provider: ProviderKind,

    /// Synthetic provider settings
    #[serde(default)]
    pub synthetic: SyntheticConfig,
}

/// Synthetic provider configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Output vector length, must be at least 1
    #[serde(default = "default_vector_size")]
    pub vector_size: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            vector_size: default_vector_size(),
        }
    }
}

fn default_vector_size() -> usize {
    DEFAULT_VECTOR_SIZE
}

impl EmbeddingsConfig {
    /// Check construction-time preconditions without building a provider.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.synthetic.vector_size == 0 {
            return Err(EmbeddingError::InvalidVectorSize(
                self.synthetic.vector_size,
            ));
        }
        Ok(())
    }
}
