use anyhow::Result;
use async_trait::async_trait;

/// Core trait for embedding providers
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + std::fmt::Debug {
    /// Generate embeddings for multiple documents, preserving input order
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Generate an embedding for a single query
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;

    /// Get the dimension of embeddings produced by this provider
    fn embedding_dimension(&self) -> usize;

    /// Get provider name for logging and factory dispatch
    fn provider_name(&self) -> &'static str;
}

/// Provider summary for listing and logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub dimension: usize,
}
