//! Built-in investigation tools for Quartermaster.
//!
//! Both tools are deterministic: payloads are derived from a hash of the
//! input string, so the same item or vendor always yields the same answer.
//! That keeps the planner fully reproducible end-to-end without network
//! access, while still looking like real research output.

pub mod availability;
pub mod price_history;
mod seed;

pub use availability::{Availability, AvailabilityTool, availability};
pub use price_history::{PriceHistory, PriceHistoryTool, PricePoint, price_history};

use quartermaster_core::tool::ToolRegistry;

/// Create a default tool registry with both built-in tools.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(price_history::PriceHistoryTool));
    registry.register(Box::new(availability::AvailabilityTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_both_tools() {
        let registry = default_registry();
        assert!(registry.get("price_history").is_some());
        assert!(registry.get("availability").is_some());
        assert_eq!(registry.definitions().len(), 2);
    }
}
