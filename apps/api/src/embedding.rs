//! Embedding capability — the narrow seam over whatever model backs
//! semantic similarity.
//!
//! The matcher only depends on `embed(text) -> vector` and cosine
//! similarity, so the concrete backend is swappable at startup without
//! touching the ranking logic. `AppState` carries it as `Arc<dyn Embedder>`.

use anyhow::Result;
use async_trait::async_trait;

/// Dimension of the hashed bag-of-words vector space.
const EMBED_DIM: usize = 512;

/// Maps text to a fixed-dimension vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Deterministic hashed bag-of-words embedder.
///
/// Lowercased alphanumeric tokens are hashed into a fixed number of buckets
/// and counted, then the vector is L2-normalized. Identical texts score 1.0
/// under cosine similarity; token-disjoint texts score ~0.
pub struct HashedBagEmbedder;

#[async_trait]
impl Embedder for HashedBagEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(hashed_bag_vector(text))
    }
}

fn hashed_bag_vector(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0_f32; EMBED_DIM];
    for token in tokenize(text) {
        vector[token_bucket(&token)] += 1.0;
    }
    l2_normalize(&mut vector);
    vector
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// FNV-1a over the token bytes, reduced to a bucket index.
fn token_bucket(token: &str) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in token.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash % EMBED_DIM as u64) as usize
}

fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Cosine similarity clamped to [0, 1]. Zero vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_identical_texts_score_one() {
        let embedder = HashedBagEmbedder;
        let a = embedder.embed("Senior Rust Engineer").await.unwrap();
        let b = embedder.embed("Senior Rust Engineer").await.unwrap();
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_disjoint_texts_score_near_zero() {
        let embedder = HashedBagEmbedder;
        let a = embedder.embed("quantum chromodynamics lattice").await.unwrap();
        let b = embedder.embed("sourdough bread baking").await.unwrap();
        assert!(cosine_similarity(&a, &b) < 0.1);
    }

    #[tokio::test]
    async fn test_similarity_is_in_unit_range() {
        let embedder = HashedBagEmbedder;
        let a = embedder.embed("rust tokio axum services").await.unwrap();
        let b = embedder.embed("rust services in production").await.unwrap();
        let sim = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&sim));
    }

    #[tokio::test]
    async fn test_embedding_is_deterministic() {
        let embedder = HashedBagEmbedder;
        let a = embedder.embed("backend engineer python").await.unwrap();
        let b = embedder.embed("backend engineer python").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_empty_text_scores_zero() {
        let embedder = HashedBagEmbedder;
        let empty = embedder.embed("").await.unwrap();
        let other = embedder.embed("rust engineer").await.unwrap();
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        let tokens: Vec<String> = tokenize("Rust, Go/Python!").collect();
        assert_eq!(tokens, vec!["rust", "go", "python"]);
    }

    #[test]
    fn test_vector_is_l2_normalized() {
        let v = hashed_bag_vector("alpha beta gamma");
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }
}
