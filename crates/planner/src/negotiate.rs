//! Deterministic negotiation simulation — agent proposes, officer rules.
//!
//! No model involved: the verdict follows fixed budget thresholds, so the
//! same selection and request always produce the same transcript.

use quartermaster_core::request::Request;
use serde::{Deserialize, Serialize};

use crate::result::ScoredCandidate;

/// The officer's ruling on a proposed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approved,
    ApprovedWithConditions,
    Escalated,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "APPROVED"),
            Self::ApprovedWithConditions => write!(f, "APPROVED_WITH_CONDITIONS"),
            Self::Escalated => write!(f, "ESCALATED"),
        }
    }
}

/// A completed negotiation: the exchange plus the final ruling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Negotiation {
    pub transcript: Vec<String>,
    pub verdict: Verdict,
    pub item_id: String,
    pub vendor: String,
    pub price: f64,
}

/// Simulate the procurement negotiation for a selected candidate.
///
/// Price at or under 80% of budget is approved outright; within budget is
/// approved with conditions after a reliability rebuttal; over budget is
/// escalated. A request without `max_cost` behaves as unbounded budget.
pub fn negotiate(selected: &ScoredCandidate, request: &Request) -> Negotiation {
    let item = &selected.item;
    let max_cost = request.max_cost.unwrap_or(f64::INFINITY);
    let price = item.price;
    let mut transcript = Vec::new();

    transcript.push(format!(
        "Agent: I recommend {} from {} at ${price}. It has the best overall score \
         considering price, lead time, and reliability.",
        item.id, item.vendor
    ));

    let verdict = if price <= max_cost * 0.8 {
        transcript.push(format!(
            "Officer: Excellent choice. Price of ${price} is well within budget \
             (max: ${max_cost}). This gives us good cost flexibility."
        ));
        Verdict::Approved
    } else if price <= max_cost {
        transcript.push(format!(
            "Officer: The price of ${price} is at the edge of our budget (max: ${max_cost}). \
             Can you verify reliability meets mission-critical needs?"
        ));
        transcript.push(format!(
            "Agent: Reliability of {} is among the best available for this component. \
             Lead time of {} days also allows buffer.",
            item.reliability, item.lead_time_days
        ));
        Verdict::ApprovedWithConditions
    } else {
        transcript.push(format!(
            "Officer: Price of ${price} exceeds budget (max: ${max_cost}). This requires \
             executive approval or we need to reconsider alternatives."
        ));
        Verdict::Escalated
    };

    transcript.push(format!(
        "Officer: Procurement decision for {} is {verdict}.",
        item.id
    ));

    Negotiation {
        transcript,
        verdict,
        item_id: item.id.clone(),
        vendor: item.vendor.clone(),
        price,
    }
}
