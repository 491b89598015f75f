use anyhow::Result;
use async_trait::async_trait;

use super::provider::EmbeddingProvider;

/// The vector every call returns, one copy per document for a batch.
pub const FIXED_VECTOR: [f32; 4] = [0.1, 0.2, 0.3, 0.4];

/// Embedding provider that returns the same vector for every input.
///
/// Useful when a test only needs embeddings to exist, not to differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEmbedder;

impl FixedEmbedder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| FIXED_VECTOR.to_vec()).collect())
    }

    async fn embed_query(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(FIXED_VECTOR.to_vec())
    }

    fn embedding_dimension(&self) -> usize {
        FIXED_VECTOR.len()
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}
