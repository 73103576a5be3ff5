//! Deterministic mock adapter — no model, no randomness.
//!
//! Parses item detail blocks out of the prompt, scores them with a coarse
//! fixed normalization, and fills one sentence template for the best one.
//! Identical prompts always produce identical output, which keeps the whole
//! planning pipeline reproducible in tests and offline demos.

use async_trait::async_trait;
use quartermaster_core::error::LlmError;
use quartermaster_core::llm::LlmAdapter;

#[derive(Debug)]
pub struct MockLlm;

/// An item block parsed out of a prompt.
#[derive(Debug, Default, Clone)]
struct PromptItem {
    id: Option<String>,
    vendor: Option<String>,
    price: Option<f64>,
    lead_time: Option<f64>,
    reliability: Option<f64>,
}

impl PromptItem {
    fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.vendor.is_none()
            && self.price.is_none()
            && self.lead_time.is_none()
            && self.reliability.is_none()
    }

    /// Coarse absolute score: assumes prices top out around 10000 and lead
    /// times around 100 days. Same weighting as the planner's defaults.
    fn score(&self) -> f64 {
        let price_score = (1.0 - self.price.unwrap_or(0.0) / 10_000.0).max(0.0);
        let lead_score = (1.0 - self.lead_time.unwrap_or(0.0) / 100.0).max(0.0);
        let reliability = self.reliability.unwrap_or(0.0);
        0.4 * price_score + 0.3 * lead_score + 0.3 * reliability
    }
}

/// The first number in a string, if any (e.g. "4800" out of "$4800 total").
fn first_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// The value after the first ':' on a line, trimmed.
fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, v)| v.trim())
}

/// Parse all item blocks out of a prompt. A line starting with `ID:` opens
/// a new block; field lines fill in the current one.
fn extract_items(prompt: &str) -> Vec<PromptItem> {
    let mut items = Vec::new();
    let mut current = PromptItem::default();

    for line in prompt.lines() {
        let lower = line.trim().to_lowercase();

        if lower.starts_with("id:") {
            if !current.is_empty() {
                items.push(std::mem::take(&mut current));
            }
            current.id = value_after_colon(line).map(str::to_string);
        } else if lower.starts_with("vendor:") {
            current.vendor = value_after_colon(line).map(str::to_string);
        } else if lower.starts_with("price:") {
            current.price = value_after_colon(line).and_then(first_number);
        } else if lower.starts_with("lead time:") {
            current.lead_time = value_after_colon(line).and_then(first_number);
        } else if lower.starts_with("reliability:") {
            current.reliability = value_after_colon(line).and_then(first_number);
        }
    }

    if !current.is_empty() {
        items.push(current);
    }
    items
}

/// Whether the prompt states a numeric max-cost constraint.
fn has_cost_constraint(prompt: &str) -> bool {
    prompt
        .lines()
        .any(|line| {
            let lower = line.trim().to_lowercase();
            lower.starts_with("max cost:") && value_after_colon(line).and_then(first_number).is_some()
        })
}

fn render_justification(item: &PromptItem, mention_constraints: bool) -> String {
    let id = item.id.as_deref().unwrap_or("Unknown");
    let vendor = item.vendor.as_deref().unwrap_or("Unknown");

    let mut factors = Vec::new();
    if let Some(price) = item.price {
        factors.push(format!("cost ({})", price as i64));
    }
    if let Some(lead) = item.lead_time {
        factors.push(format!("delivery ({} days)", lead as i64));
    }
    if let Some(reliability) = item.reliability {
        factors.push(format!("strong reliability ({reliability})"));
    }

    let mut response = format!("Selected {id} from {vendor}.");
    if factors.is_empty() {
        response.push_str(
            " It provides the best balance of price, delivery time, and reliability for the requirements.",
        );
    } else {
        response.push_str(&format!(
            " It balances {}, making it the best fit for the request.",
            factors.join(" and ")
        ));
    }
    if mention_constraints {
        response.push_str(" It also fits within the stated cost and delivery constraints.");
    }
    response
}

#[async_trait]
impl LlmAdapter for MockLlm {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
        let lower = prompt.to_lowercase();
        if !lower.contains("selected") && !lower.contains("choose between") {
            return Ok(
                "Based on the analysis, this item provides the best value considering price, \
                 lead time, and reliability metrics."
                    .to_string(),
            );
        }

        let items = extract_items(prompt);
        // First item wins ties
        let Some(best) = items.iter().reduce(|best, item| {
            if item.score() > best.score() { item } else { best }
        }) else {
            return Ok("Unable to parse items from prompt.".to_string());
        };

        Ok(render_justification(best, has_cost_constraint(prompt)))
    }
}
