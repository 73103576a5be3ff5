//! Availability tool — stable mock stock data for a vendor.
//!
//! Derives an average lead time, an in-stock flag, and three lead-time
//! samples from a hash of the vendor name. Same vendor, same answer.

use async_trait::async_trait;
use quartermaster_core::error::ToolError;
use quartermaster_core::tool::{Tool, ToolResult};
use serde::{Deserialize, Serialize};

use crate::seed::{Xorshift64, seed_from};

/// The availability payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub vendor: String,
    pub avg_lead_time_days: f64,
    pub in_stock: bool,
    pub lead_time_samples: Vec<i64>,
}

/// Number of lead-time samples returned.
const SAMPLE_COUNT: usize = 3;
/// Maximum per-sample deviation from the average.
const SAMPLE_JITTER: i64 = 5;

/// Deterministic availability for a vendor name.
pub fn availability(vendor: &str) -> Availability {
    let seed = seed_from(vendor);
    let mut rng = Xorshift64::new(seed);

    // Average lead time between 10 and 40 days
    let avg_lead_time_days = 10 + (seed % 30) as i64;
    let in_stock = seed % 2 == 0;

    let lead_time_samples = (0..SAMPLE_COUNT)
        .map(|_| (avg_lead_time_days + rng.offset(SAMPLE_JITTER)).max(1))
        .collect();

    Availability {
        vendor: vendor.to_string(),
        avg_lead_time_days: avg_lead_time_days as f64,
        in_stock,
        lead_time_samples,
    }
}

pub struct AvailabilityTool;

#[async_trait]
impl Tool for AvailabilityTool {
    fn name(&self) -> &str {
        "availability"
    }

    fn description(&self) -> &str {
        "Check a vendor's stock status. Returns average lead time, an in-stock flag, and lead-time samples."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "vendor": {
                    "type": "string",
                    "description": "The vendor name, e.g. 'Helios Dynamics'"
                }
            },
            "required": ["vendor"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let vendor = arguments["vendor"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'vendor' argument".into()))?;

        let payload = availability(vendor);
        let data = serde_json::to_value(&payload).map_err(|e| ToolError::ExecutionFailed {
            tool_name: "availability".into(),
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
