//! Vendor-constraint filtering applied on top of plan results.
//!
//! Exclusions and floors drop candidates; preferred vendors are moved to
//! the front with relative order preserved on both sides of the split.

use quartermaster_core::request::VendorConstraints;

use crate::result::ScoredCandidate;

/// Apply vendor constraints to a candidate list.
pub fn apply_vendor_constraints(
    candidates: Vec<ScoredCandidate>,
    constraints: &VendorConstraints,
) -> Vec<ScoredCandidate> {
    let filtered: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter(|c| !constraints.excluded_vendors.contains(&c.item.vendor))
        .filter(|c| {
            constraints
                .min_reliability
                .is_none_or(|min| c.item.reliability >= min)
        })
        .filter(|c| {
            constraints
                .max_lead_time
                .is_none_or(|max| c.item.lead_time_days <= max)
        })
        .collect();

    if constraints.preferred_vendors.is_empty() {
        return filtered;
    }

    let (preferred, rest): (Vec<_>, Vec<_>) = filtered
        .into_iter()
        .partition(|c| constraints.preferred_vendors.contains(&c.item.vendor));

    let mut ordered = preferred;
    ordered.extend(rest);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartermaster_core::item::CatalogItem;
    use std::collections::BTreeMap;

    fn candidate(id: &str, vendor: &str, reliability: f64, lead: u32) -> ScoredCandidate {
        ScoredCandidate::new(
            CatalogItem {
                id: id.into(),
                component: "battery".into(),
                vendor: vendor.into(),
                price: 1000.0,
                lead_time_days: lead,
                reliability,
                specs: BTreeMap::new(),
            },
            0.5,
        )
    }

    fn fleet() -> Vec<ScoredCandidate> {
        vec![
            candidate("A", "VoltCore Systems", 0.99, 18),
            candidate("B", "Helios Dynamics", 0.96, 25),
            candidate("C", "AstroVolt", 0.90, 10),
        ]
    }

    #[test]
    fn no_constraints_is_identity() {
        let result = apply_vendor_constraints(fleet(), &VendorConstraints::default());
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].item.id, "A");
    }

    #[test]
    fn excluded_vendors_are_dropped() {
        let constraints = VendorConstraints {
            excluded_vendors: vec!["Helios Dynamics".into()],
            ..VendorConstraints::default()
        };
        let result = apply_vendor_constraints(fleet(), &constraints);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.item.vendor != "Helios Dynamics"));
    }

    #[test]
    fn min_reliability_floor() {
        let constraints = VendorConstraints {
            min_reliability: Some(0.95),
            ..VendorConstraints::default()
        };
        let result = apply_vendor_constraints(fleet(), &constraints);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.item.reliability >= 0.95));
    }

    #[test]
    fn max_lead_time_ceiling() {
        let constraints = VendorConstraints {
            max_lead_time: Some(20),
            ..VendorConstraints::default()
        };
        let result = apply_vendor_constraints(fleet(), &constraints);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.item.lead_time_days <= 20));
    }

    #[test]
    fn preferred_vendors_move_to_front() {
        let constraints = VendorConstraints {
            preferred_vendors: vec!["AstroVolt".into()],
            ..VendorConstraints::default()
        };
        let result = apply_vendor_constraints(fleet(), &constraints);
        assert_eq!(result[0].item.id, "C");
        // relative order of the rest preserved
        assert_eq!(result[1].item.id, "A");
        assert_eq!(result[2].item.id, "B");
    }

    #[test]
    fn constraints_compose() {
        let constraints = VendorConstraints {
            excluded_vendors: vec!["VoltCore Systems".into()],
            preferred_vendors: vec!["AstroVolt".into()],
            min_reliability: Some(0.85),
            max_lead_time: Some(30),
        };
        let result = apply_vendor_constraints(fleet(), &constraints);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].item.id, "C");
        assert_eq!(result[1].item.id, "B");
    }
}
