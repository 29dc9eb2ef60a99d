//! Rate Rule Matcher
//!
//! Picks the single active rule for a service type.

use shared::models::RateRule;

use super::error::{PricingError, PricingResult};

/// Check if a rule is eligible for a service type
#[inline]
pub fn matches_service_type(rule: &RateRule, service_type: &str) -> bool {
    rule.active && rule.service_type == service_type
}

/// Select the active rule for `service_type`.
///
/// Returns `Ok(None)` when no active rule matches. More than one active rule
/// for the same service type is a configuration error, never a silent
/// first match.
pub fn select_rule<'a>(rules: &'a [RateRule], service_type: &str) -> PricingResult<Option<&'a RateRule>> {
    let mut matched = rules.iter().filter(|rule| matches_service_type(rule, service_type));

    let Some(first) = matched.next() else {
        return Ok(None);
    };

    if let Some(second) = matched.next() {
        let rule_ids = [first.id, second.id]
            .into_iter()
            .chain(matched.map(|rule| rule.id))
            .collect();
        return Err(PricingError::DuplicateActiveRule {
            service_type: service_type.to_string(),
            rule_ids,
        });
    }

    Ok(Some(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rule(id: i64, service_type: &str, active: bool) -> RateRule {
        RateRule {
            id,
            name: format!("rule {id}"),
            service_type: service_type.to_string(),
            base_price: 100.0,
            weight_multiplier: 1.0,
            distance_multiplier: 1.0,
            urgency_multiplier: 1.0,
            volume_discount_threshold: 1000.0,
            volume_discount_rate: 0.1,
            fuel_surcharge: 0.1,
            seasonal_adjustment: 1.0,
            active,
            last_updated: 0,
        }
    }

    #[test]
    fn test_selects_matching_active_rule() {
        let rules = vec![make_rule(1, "ground", true), make_rule(2, "air", true)];
        let selected = select_rule(&rules, "air").unwrap().unwrap();
        assert_eq!(selected.id, 2);
    }

    #[test]
    fn test_inactive_rule_is_skipped() {
        let rules = vec![make_rule(1, "ocean", false), make_rule(2, "ocean", true)];
        assert_eq!(select_rule(&rules, "ocean").unwrap().unwrap().id, 2);
    }

    #[test]
    fn test_no_match_is_none() {
        let rules = vec![make_rule(1, "ground", true), make_rule(2, "air", false)];
        assert!(select_rule(&rules, "air").unwrap().is_none());
        assert!(select_rule(&rules, "rail").unwrap().is_none());
        assert!(select_rule(&[], "ground").unwrap().is_none());
    }

    #[test]
    fn test_service_type_is_case_sensitive() {
        let rules = vec![make_rule(1, "ground", true)];
        assert!(select_rule(&rules, "Ground").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_active_rules_rejected() {
        let rules = vec![
            make_rule(1, "air", true),
            make_rule(2, "ground", true),
            make_rule(3, "air", true),
            make_rule(4, "air", false),
            make_rule(5, "air", true),
        ];
        match select_rule(&rules, "air") {
            Err(PricingError::DuplicateActiveRule {
                service_type,
                rule_ids,
            }) => {
                assert_eq!(service_type, "air");
                assert_eq!(rule_ids, vec![1, 3, 5]);
            }
            other => panic!("expected DuplicateActiveRule, got {other:?}"),
        }
        // Other service types are unaffected
        assert_eq!(select_rule(&rules, "ground").unwrap().unwrap().id, 2);
    }
}
