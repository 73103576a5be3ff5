//! Deterministic semantic search — hash-derived embeddings plus cosine
//! ranking.
//!
//! Real embeddings would come from a model; here each text maps to a small
//! fixed vector derived from its SHA-256 digest, so the ranking is stable
//! across runs and needs no network access. Useful for free-text catalog
//! lookups in tests, the CLI, and the gateway.

use crate::Catalog;
use quartermaster_core::item::CatalogItem;
use sha2::{Digest, Sha256};

/// Embedding dimension. Small on purpose — the vectors only need to be
/// stable and varied, not meaningful.
const EMBEDDING_DIM: usize = 8;

/// Map text to a deterministic embedding vector with components in [0, 1].
pub fn text_to_embedding(text: &str) -> Vec<f64> {
    let digest = Sha256::digest(text.to_lowercase().as_bytes());
    (0..EMBEDDING_DIM)
        .map(|i| digest[i % digest.len()] as f64 / 255.0)
        .collect()
}

/// Cosine similarity between two vectors; 0.0 when either is all-zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

/// The text an item is embedded from: component, vendor, id, and specs.
fn item_text(item: &CatalogItem) -> String {
    let mut text = format!("{} {} {}", item.component, item.vendor, item.id);
    for (key, value) in &item.specs {
        text.push_str(&format!(" {key} {value}"));
    }
    text
}

impl Catalog {
    /// Free-text search: rank all items by embedding similarity to the
    /// query and return the best `top_k`, best first. Ties keep catalog
    /// order (stable sort).
    pub fn search_semantic(&self, query: &str, top_k: usize) -> Vec<CatalogItem> {
        let query_embedding = text_to_embedding(query);

        let mut scored: Vec<(f64, &CatalogItem)> = self
            .items()
            .iter()
            .map(|item| {
                let embedding = text_to_embedding(&item_text(item));
                (cosine_similarity(&query_embedding, &embedding), item)
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(top_k)
            .map(|(_, item)| item.clone())
            .collect()
    }
}
