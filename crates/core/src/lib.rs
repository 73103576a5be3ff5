//! # Quartermaster Core
//!
//! Domain types, traits, and error definitions for the Quartermaster
//! procurement planner. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every subsystem is defined as a trait here. Implementations live in their
//! respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod item;
pub mod llm;
pub mod request;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{CatalogError, Error, LlmError, PlanError, Result, ToolError};
pub use item::CatalogItem;
pub use llm::LlmAdapter;
pub use request::{Request, VendorConstraints, Weights};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
