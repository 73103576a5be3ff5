//! The Quartermaster planner — search, score, rank, investigate, justify.
//!
//! [`Planner::plan`] runs the whole pipeline for one request and returns a
//! [`PlanResult`] with the ranked shortlist, the selected item, a templated
//! justification, an audit trace, and step metrics. Also home to the
//! deterministic negotiation simulation and vendor-constraint filtering
//! applied on top of plan results.

pub mod constraints;
pub mod negotiate;
pub mod plan;
pub mod result;
pub mod score;

pub use constraints::apply_vendor_constraints;
pub use negotiate::{Negotiation, Verdict, negotiate};
pub use plan::{PlanOptions, Planner};
pub use result::{PlanResult, ScoredCandidate, ToolFindings, TraceEntry};
pub use score::{Bounds, compute_score};
