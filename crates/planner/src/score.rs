//! Candidate scoring — min/max normalization plus a weighted sum.
//!
//! Scores are relative to the *current* candidate set: re-running with a
//! different population changes every score, even for the same item. Price
//! and lead time are lower-is-better (inverted); reliability is
//! higher-is-better and enters the sum directly. This asymmetry is
//! intentional domain behavior.

use quartermaster_core::item::CatalogItem;
use quartermaster_core::request::Weights;

/// Min/max price and lead-time bounds over one candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub price_min: f64,
    pub price_max: f64,
    pub lead_min: u32,
    pub lead_max: u32,
}

impl Bounds {
    /// Compute bounds over a candidate set. `None` when the set is empty.
    pub fn from_candidates(candidates: &[CatalogItem]) -> Option<Self> {
        let first = candidates.first()?;
        let mut bounds = Self {
            price_min: first.price,
            price_max: first.price,
            lead_min: first.lead_time_days,
            lead_max: first.lead_time_days,
        };
        for item in &candidates[1..] {
            bounds.price_min = bounds.price_min.min(item.price);
            bounds.price_max = bounds.price_max.max(item.price);
            bounds.lead_min = bounds.lead_min.min(item.lead_time_days);
            bounds.lead_max = bounds.lead_max.max(item.lead_time_days);
        }
        Some(bounds)
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Compute the normalized weighted score for one item.
///
/// Degenerate bounds (all candidates tied on a dimension) yield a perfect
/// normalized value of 1.0 for that dimension — no item is penalized for a
/// tie, and there is no division by zero.
pub fn compute_score(item: &CatalogItem, weights: &Weights, bounds: &Bounds) -> f64 {
    let normalized_price = if bounds.price_max == bounds.price_min {
        1.0
    } else {
        clamp01(1.0 - (item.price - bounds.price_min) / (bounds.price_max - bounds.price_min))
    };

    let normalized_lead = if bounds.lead_max == bounds.lead_min {
        1.0
    } else {
        clamp01(
            1.0 - (item.lead_time_days as f64 - bounds.lead_min as f64)
                / (bounds.lead_max as f64 - bounds.lead_min as f64),
        )
    };

    let score = weights.price * normalized_price
        + weights.lead_time * normalized_lead
        + weights.reliability * item.reliability;

    clamp01(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn item(id: &str, price: f64, lead: u32, reliability: f64) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            component: "test".into(),
            vendor: "TestVendor".into(),
            price,
            lead_time_days: lead,
            reliability,
            specs: BTreeMap::new(),
        }
    }

    fn bounds(price_min: f64, price_max: f64, lead_min: u32, lead_max: u32) -> Bounds {
        Bounds {
            price_min,
            price_max,
            lead_min,
            lead_max,
        }
    }

    #[test]
    fn score_stays_in_unit_range() {
        let b = bounds(1000.0, 2000.0, 10, 20);
        let w = Weights::default();
        for candidate in [
            item("A", 1000.0, 10, 0.95),
            item("B", 2000.0, 20, 0.98),
            item("C", 1500.0, 15, 0.0),
            item("D", 1500.0, 15, 1.0),
        ] {
            let score = compute_score(&candidate, &w, &b);
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn cheapest_fastest_most_reliable_scores_perfect() {
        let b = bounds(1000.0, 2000.0, 10, 20);
        let score = compute_score(&item("A", 1000.0, 10, 1.0), &Weights::default(), &b);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_price_bounds_give_full_price_credit() {
        // All candidates tied on price: nobody penalized
        let b = bounds(1500.0, 1500.0, 10, 20);
        let w = Weights {
            price: 1.0,
            lead_time: 0.0,
            reliability: 0.0,
        };
        let a = compute_score(&item("A", 1500.0, 10, 0.9), &w, &b);
        let c = compute_score(&item("B", 1500.0, 20, 0.5), &w, &b);
        assert!((a - 1.0).abs() < 1e-12);
        assert_eq!(a, c);
    }

    #[test]
    fn degenerate_lead_bounds_give_full_lead_credit() {
        let b = bounds(1000.0, 2000.0, 15, 15);
        let w = Weights {
            price: 0.0,
            lead_time: 1.0,
            reliability: 0.0,
        };
        let score = compute_score(&item("A", 1800.0, 15, 0.9), &w, &b);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn price_weight_favors_cheaper_item() {
        let b = bounds(1000.0, 2000.0, 10, 20);
        let w = Weights {
            price: 0.8,
            lead_time: 0.1,
            reliability: 0.1,
        };
        let cheap = compute_score(&item("A", 1000.0, 10, 0.95), &w, &b);
        let pricey = compute_score(&item("B", 2000.0, 20, 0.98), &w, &b);
        assert!(cheap > pricey);
    }

    #[test]
    fn raising_price_weight_never_hurts_the_cheapest() {
        // All else equal, the cheapest item's lead over a pricier one must
        // not shrink as the price weight grows.
        let b = bounds(1000.0, 2000.0, 10, 10);
        let cheap = item("A", 1000.0, 10, 0.9);
        let pricey = item("B", 2000.0, 10, 0.9);

        let mut previous_gap = f64::MIN;
        for price_weight in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let w = Weights {
                price: price_weight,
                lead_time: 0.0,
                reliability: 0.3,
            };
            let gap = compute_score(&cheap, &w, &b) - compute_score(&pricey, &w, &b);
            assert!(gap >= previous_gap - 1e-12);
            previous_gap = gap;
        }
    }

    #[test]
    fn reliability_weight_favors_more_reliable_item() {
        let b = bounds(1000.0, 2000.0, 10, 20);
        let w = Weights {
            price: 0.1,
            lead_time: 0.1,
            reliability: 0.8,
        };
        let low = compute_score(&item("A", 1500.0, 15, 0.85), &w, &b);
        let high = compute_score(&item("B", 1500.0, 15, 0.98), &w, &b);
        assert!(high > low);
    }

    #[test]
    fn reliability_enters_unnormalized() {
        // Reliability is used raw, not min/max normalized against the set
        let b = bounds(1000.0, 1000.0, 10, 10);
        let w = Weights {
            price: 0.0,
            lead_time: 0.0,
            reliability: 1.0,
        };
        let score = compute_score(&item("A", 1000.0, 10, 0.42), &w, &b);
        assert!((score - 0.42).abs() < 1e-12);
    }

    #[test]
    fn item_outside_bounds_is_clamped() {
        // Bounds from a different population than the item
        let b = bounds(1000.0, 2000.0, 10, 20);
        let w = Weights {
            price: 1.0,
            lead_time: 0.0,
            reliability: 0.0,
        };
        let score = compute_score(&item("A", 5000.0, 10, 0.9), &w, &b);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn bounds_from_candidates() {
        let candidates = vec![
            item("A", 4800.0, 21, 0.985),
            item("B", 5200.0, 14, 0.975),
        ];
        let b = Bounds::from_candidates(&candidates).unwrap();
        assert_eq!(b.price_min, 4800.0);
        assert_eq!(b.price_max, 5200.0);
        assert_eq!(b.lead_min, 14);
        assert_eq!(b.lead_max, 21);

        assert!(Bounds::from_candidates(&[]).is_none());
    }

    #[test]
    fn sample_solar_panels_rank_sp100_first() {
        // Sample catalog panels: 4800/21d/0.985 beats 5200/14d/0.975 on defaults
        let sp100 = item("SP-100", 4800.0, 21, 0.985);
        let sp200 = item("SP-200", 5200.0, 14, 0.975);
        let b = Bounds::from_candidates(&[sp100.clone(), sp200.clone()]).unwrap();
        let w = Weights::default();

        let s100 = compute_score(&sp100, &w, &b);
        let s200 = compute_score(&sp200, &w, &b);
        assert!((s100 - 0.6955).abs() < 1e-9);
        assert!((s200 - 0.5925).abs() < 1e-9);
        assert!(s100 > s200);
    }
}
