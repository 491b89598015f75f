use anyhow::Result;
use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::trace;

use super::provider::EmbeddingProvider;
use super::EmbeddingError;

/// Output vector length when none is configured.
pub const DEFAULT_VECTOR_SIZE: usize = 4;

/// Embedding provider that derives a vector from the document text.
///
/// The transform is a toy hash, not a model: the text is reduced to
/// lower-case letters and spaces, padded with spaces to a multiple of the
/// vector size, split into equal chunks, and each chunk scored by summing
/// its character codes modulo 26. Equal texts always produce equal
/// vectors, which is enough to exercise ranking and storage paths.
#[derive(Debug)]
pub struct SyntheticEmbedder {
    vector_size: usize,
}

impl SyntheticEmbedder {
    /// Create a provider producing vectors of `vector_size` elements.
    ///
    /// Fails with [`EmbeddingError::InvalidVectorSize`] when
    /// `vector_size` is zero.
    pub fn new(vector_size: usize) -> Result<Self, EmbeddingError> {
        if vector_size == 0 {
            return Err(EmbeddingError::InvalidVectorSize(vector_size));
        }
        Ok(Self { vector_size })
    }

    fn text_to_vector(&self, text: &str) -> Vec<f32> {
        // Keep only lower-case letters and spaces
        let normalized: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == ' ')
            .collect();

        // Pad with spaces to a multiple of vector_size; empty input needs
        // no padding since 0 % n == 0
        let mut padded = normalized;
        let pad_mod = padded.len() % self.vector_size;
        if pad_mod != 0 {
            for _ in 0..(self.vector_size - pad_mod) {
                padded.push(' ');
            }
        }

        // chunk_len is 0 for empty input; an empty chunk sums to 0
        let chunk_len = padded.len() / self.vector_size;
        let bytes = padded.as_bytes();

        (0..self.vector_size)
            .map(|i| {
                let chunk = &bytes[i * chunk_len..(i + 1) * chunk_len];
                let sum: u32 = chunk
                    .iter()
                    .filter(|b| **b != b' ')
                    .map(|b| u32::from(*b))
                    .sum();
                (sum % 26) as f32 / 26.0
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for SyntheticEmbedder {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        trace!(count = texts.len(), "embedding document batch");
        try_join_all(texts.iter().map(|text| self.embed_query(text))).await
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.text_to_vector(text))
    }

    fn embedding_dimension(&self) -> usize {
        self.vector_size
    }

    fn provider_name(&self) -> &'static str {
        "synthetic"
    }
}
