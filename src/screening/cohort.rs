use super::age::AgeBand;
use super::domain::{DevelopmentDomain, ResultsRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view across many completed assessments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortSummary {
    pub assessments: usize,
    pub by_age_group: BTreeMap<AgeBand, usize>,
    pub average_child_age: Option<f64>,
    pub average_overall_percentage: Option<f64>,
    pub domain_averages: BTreeMap<DevelopmentDomain, f64>,
    pub flagged_assessments: usize,
    pub pricing: PricingStatistics,
}

/// Statistics over positive pricing answers only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingStatistics {
    pub responses: usize,
    pub average: Option<f64>,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub median: Option<f64>,
}

impl CohortSummary {
    pub fn from_records(records: &[ResultsRecord]) -> Self {
        let mut by_age_group = BTreeMap::new();
        for record in records {
            *by_age_group.entry(record.metadata.age_group).or_insert(0) += 1;
        }

        let domain_averages = DevelopmentDomain::ordered()
            .into_iter()
            .filter_map(|domain| {
                mean(records.iter().map(|record| record.domains.get(domain).percentage))
                    .map(|average| (domain, average))
            })
            .collect();

        let mut prices: Vec<u64> = records
            .iter()
            .filter_map(|record| record.pricing_preference)
            .collect();
        prices.sort_unstable();

        Self {
            assessments: records.len(),
            by_age_group,
            average_child_age: mean(
                records
                    .iter()
                    .map(|record| f64::from(record.metadata.child_age)),
            ),
            average_overall_percentage: mean(
                records.iter().map(|record| record.overall.percentage),
            ),
            domain_averages,
            flagged_assessments: records
                .iter()
                .filter(|record| !record.red_flags.is_empty())
                .count(),
            pricing: PricingStatistics::from_sorted(&prices),
        }
    }
}

impl PricingStatistics {
    fn from_sorted(prices: &[u64]) -> Self {
        Self {
            responses: prices.len(),
            average: mean(prices.iter().map(|price| *price as f64)),
            min: prices.first().copied(),
            max: prices.last().copied(),
            median: median(prices),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

/// Continuous median: the middle value, or the mean of the two middles.
fn median(sorted: &[u64]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::Response;
    use crate::screening::results::compute_results;

    fn record(age: i32, option: &str, price: &str) -> ResultsRecord {
        let mut responses: Vec<Response> = (1..=10)
            .map(|number| Response::new(number, "", option))
            .collect();
        responses.push(Response::new(11, "price", price));
        compute_results(&responses, age)
    }

    #[test]
    fn empty_cohort_has_no_averages() {
        let summary = CohortSummary::from_records(&[]);
        assert_eq!(summary.assessments, 0);
        assert!(summary.by_age_group.is_empty());
        assert_eq!(summary.average_child_age, None);
        assert_eq!(summary.average_overall_percentage, None);
        assert!(summary.domain_averages.is_empty());
        assert_eq!(summary.pricing.responses, 0);
        assert_eq!(summary.pricing.median, None);
    }

    #[test]
    fn summarizes_bands_flags_and_domains() {
        let records = vec![
            record(3, "A", "5000"),
            record(4, "C", "0"),
            record(7, "B", "20000"),
            record(8, "C", "abc"),
        ];
        let summary = CohortSummary::from_records(&records);

        assert_eq!(summary.assessments, 4);
        assert_eq!(summary.by_age_group.get(&AgeBand::Toddler), Some(&1));
        assert_eq!(summary.by_age_group.get(&AgeBand::Preschool), Some(&1));
        assert_eq!(summary.by_age_group.get(&AgeBand::School), Some(&2));
        assert_eq!(summary.average_child_age, Some(5.5));
        assert_eq!(summary.flagged_assessments, 2);
        assert_eq!(summary.domain_averages.len(), 4);
        assert_eq!(
            summary.domain_averages.get(&DevelopmentDomain::SpeechLanguage),
            Some(&((100.0 + 0.0 + 75.0 + 0.0) / 4.0))
        );
    }

    #[test]
    fn pricing_statistics_ignore_missing_answers() {
        let records = vec![
            record(5, "A", "4000"),
            record(5, "A", "1000"),
            record(5, "A", "none"),
            record(5, "A", "10000"),
            record(5, "A", "3000"),
        ];
        let pricing = CohortSummary::from_records(&records).pricing;

        assert_eq!(pricing.responses, 4);
        assert_eq!(pricing.min, Some(1_000));
        assert_eq!(pricing.max, Some(10_000));
        assert_eq!(pricing.average, Some(4_500.0));
        assert_eq!(pricing.median, Some(3_500.0));
    }

    #[test]
    fn odd_count_median_is_middle_value() {
        assert_eq!(median(&[1, 5, 9]), Some(5.0));
        assert_eq!(median(&[]), None);
    }
}
