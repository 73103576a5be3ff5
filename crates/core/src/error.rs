//! Error types for the Quartermaster domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Quartermaster operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Planning errors ---
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    // --- Catalog errors ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- LLM adapter errors ---
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// The HTTP-style status code callers report for this error.
    ///
    /// Request-shape problems are 400, empty searches 404, everything
    /// else is an internal 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Plan(e) => e.status_code(),
            Self::Llm(LlmError::NotConfigured(_)) => 400,
            _ => 500,
        }
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum PlanError {
    #[error("no component specified")]
    MissingComponent,

    #[error("no candidates match constraints")]
    NoCandidates,

    #[error("no candidates after ranking")]
    EmptyRanking,
}

impl PlanError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingComponent => 400,
            Self::NoCandidates => 404,
            Self::EmptyRanking => 500,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse catalog at {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid catalog entry '{id}': {reason}")]
    InvalidItem { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}
