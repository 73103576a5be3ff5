//! Price history tool — stable mock market data for an item.
//!
//! In production this would query a real pricing service. The mock derives
//! everything from a hash of the item id: a base price plus four dated
//! points with a small seeded walk around it. Same id, same history.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use quartermaster_core::error::ToolError;
use quartermaster_core::tool::{Tool, ToolResult};
use serde::{Deserialize, Serialize};

use crate::seed::{Xorshift64, seed_from};

/// One dated price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub price: i64,
}

/// The price history payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub item_id: String,
    pub history: Vec<PricePoint>,
}

/// Number of historical points returned.
const HISTORY_POINTS: usize = 4;
/// Maximum per-point deviation from the base price.
const PRICE_JITTER: i64 = 200;

/// Deterministic price history for an item id.
pub fn price_history(item_id: &str) -> PriceHistory {
    let seed = seed_from(item_id);
    let mut rng = Xorshift64::new(seed);

    let base_price = 1000 + (seed % 10_000) as i64;
    let today = Utc::now().date_naive();

    let history = (0..HISTORY_POINTS)
        .map(|i| {
            let months_back = (HISTORY_POINTS - i) as i64;
            let date = today - Duration::days(30 * months_back);
            PricePoint {
                date: date.format("%Y-%m-%d").to_string(),
                price: base_price + rng.offset(PRICE_JITTER),
            }
        })
        .collect();

    PriceHistory {
        item_id: item_id.to_string(),
        history,
    }
}

pub struct PriceHistoryTool;

#[async_trait]
impl Tool for PriceHistoryTool {
    fn name(&self) -> &str {
        "price_history"
    }

    fn description(&self) -> &str {
        "Look up historical prices for a catalog item. Returns four dated price points."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "item_id": {
                    "type": "string",
                    "description": "The catalog item id, e.g. 'SP-100'"
                }
            },
            "required": ["item_id"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let item_id = arguments["item_id"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'item_id' argument".into()))?;

        let payload = price_history(item_id);
        let data = serde_json::to_value(&payload).map_err(|e| ToolError::ExecutionFailed {
            tool_name: "price_history".into(),
            reason: e.to_string(),
        })?;
        let output = serde_json::to_string_pretty(&payload).unwrap_or_default();

        Ok(ToolResult {
            success: true,
            output,
            data: Some(data),
        })
    }
}
