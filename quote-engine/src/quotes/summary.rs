//! Quote summary statistics

use std::collections::BTreeMap;

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::quote::QuoteRecord;

use crate::pricing::money::{to_decimal, to_f64};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceTypeSummary {
    pub count: usize,
    pub total_value: f64,
}

/// Aggregate over a set of priced quotes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub quote_count: usize,
    /// Sum of `total_price`
    pub total_value: f64,
    /// 0 when there are no quotes
    pub average_quote_value: f64,
    pub by_service_type: BTreeMap<String, ServiceTypeSummary>,
    /// Requests with no active rule
    pub not_applicable: usize,
    /// Requests rejected as invalid
    pub rejected: usize,
}

impl QuoteSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a QuoteRecord>) -> Self {
        let mut total = Decimal::ZERO;
        let mut count = 0usize;
        let mut per_type: BTreeMap<String, (usize, Decimal)> = BTreeMap::new();

        for record in records {
            let value = to_decimal(record.calculation.total_price);
            total += value;
            count += 1;

            let entry = per_type
                .entry(record.request.service_type.clone())
                .or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += value;
        }

        let average = if count == 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(count)
        };

        Self {
            quote_count: count,
            total_value: to_f64(total),
            average_quote_value: to_f64(average),
            by_service_type: per_type
                .into_iter()
                .map(|(service_type, (count, value))| {
                    (
                        service_type,
                        ServiceTypeSummary {
                            count,
                            total_value: to_f64(value),
                        },
                    )
                })
                .collect(),
            not_applicable: 0,
            rejected: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::QuoteRequest;
    use shared::quote::PriceCalculation;

    fn record(service_type: &str, total_price: f64) -> QuoteRecord {
        let calculation = PriceCalculation {
            base_price: 0.0,
            weight_charge: 0.0,
            distance_charge: 0.0,
            urgency_charge: 0.0,
            fuel_surcharge: 0.0,
            seasonal_adjustment: 0.0,
            volume_discount: 0.0,
            subtotal: total_price,
            taxes: 0.0,
            total_price,
            breakdown: vec![],
        };
        QuoteRecord::draft(QuoteRequest::new(service_type, 1.0, 1.0), calculation, "tester")
    }

    #[test]
    fn test_empty_summary() {
        let summary = QuoteSummary::from_records(&Vec::<QuoteRecord>::new());
        assert_eq!(summary, QuoteSummary::default());
    }

    #[test]
    fn test_totals_and_average() {
        let records = vec![
            record("ground", 1738.8),
            record("ground", 1587.6),
            record("air", 0.1),
            record("air", 0.2),
        ];
        let summary = QuoteSummary::from_records(&records);

        assert_eq!(summary.quote_count, 4);
        assert_eq!(summary.total_value, 3326.7);
        assert_eq!(summary.average_quote_value, 831.675);
        assert_eq!(summary.by_service_type["ground"].count, 2);
        assert_eq!(summary.by_service_type["ground"].total_value, 3326.4);
        // Decimal sums avoid the 0.30000000000000004 drift
        assert_eq!(summary.by_service_type["air"].total_value, 0.3);
        assert_eq!(
            summary.by_service_type.keys().collect::<Vec<_>>(),
            vec!["air", "ground"]
        );
    }
}
