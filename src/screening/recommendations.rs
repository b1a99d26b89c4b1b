use super::age::AgeBand;
use super::domain::{
    DevelopmentDomain, DomainBreakdown, DomainLevel, DomainResult, OverallResult, Priority,
    Recommendation,
};
use super::guidance;
use super::question_bank::bank_for;

/// Builds recommendations in presentation order: the urgent summary, weak
/// domains from lowest percentage up, one strength highlight, then general
/// encouragement when the band's thresholds list the overall tier. The output
/// is never re-sorted.
pub fn generate_recommendations(
    domains: &DomainBreakdown,
    overall: &OverallResult,
    child_age: i32,
    band: AgeBand,
    red_flags: &[String],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !red_flags.is_empty() {
        recommendations.push(Recommendation::summary(
            Priority::Urgent,
            "Immediate Action Recommended",
            "Consider consulting with a speech-language pathologist or child development specialist for a comprehensive evaluation.",
        ));
    }

    // Stable sort: ties keep the fixed domain order.
    let mut ranked: Vec<(DevelopmentDomain, &DomainResult)> = domains.iter().collect();
    ranked.sort_by(|a, b| a.1.percentage.total_cmp(&b.1.percentage));

    for (domain, result) in &ranked {
        // Domains the band never asks about stay 0% but get no advice.
        if !result.is_assessed() {
            continue;
        }
        let priority = match result.level {
            DomainLevel::Urgent => Priority::Urgent,
            DomainLevel::NeedsSupport => Priority::NeedsSupport,
            DomainLevel::Strong | DomainLevel::Developing => continue,
        };
        if let Some(entry) = guidance::lookup(*domain, priority, child_age) {
            recommendations.push(entry.render(child_age));
        }
    }

    if let Some((strongest, _)) = ranked
        .iter()
        .filter(|(_, result)| result.level == DomainLevel::Strong)
        .last()
    {
        let name = strongest.display_name();
        recommendations.push(Recommendation {
            domain: Some(*strongest),
            ..Recommendation::summary(
                Priority::Strength,
                format!("Excellent {name} Skills! 🌟"),
                format!(
                    "Your child is thriving in this area. Continue to encourage their {name} development through regular practice and positive reinforcement."
                ),
            )
        });
    }

    if bank_for(band).thresholds.triggers_maintain(overall.tier) {
        recommendations.push(Recommendation::summary(
            Priority::Maintain,
            "Keep Up the Great Work!",
            "Your child is developing well. Continue engaging in daily conversations, reading together, and playing educational games.",
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::OverallTier;

    fn result(score: u32, max: u32) -> DomainResult {
        DomainResult::from_tally(score, max, Vec::new())
    }

    fn overall(band: AgeBand, total_score: u32) -> OverallResult {
        let thresholds = bank_for(band).thresholds;
        let tier = thresholds.classify(total_score);
        OverallResult {
            total_score,
            max_score: 20,
            percentage: f64::from(total_score) * 5.0,
            tier,
            level: thresholds.label(tier),
            age_group: band,
        }
    }

    fn priorities(recs: &[Recommendation]) -> Vec<Priority> {
        recs.iter().map(|rec| rec.priority).collect()
    }

    #[test]
    fn urgent_summary_appears_once_and_first() {
        let domains = DomainBreakdown {
            speech_language: result(4, 4),
            literacy: result(6, 6),
            numeracy: result(4, 4),
            cognitive: result(6, 6),
        };
        let flags = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let recs = generate_recommendations(
            &domains,
            &overall(AgeBand::Preschool, 20),
            4,
            AgeBand::Preschool,
            &flags,
        );

        assert_eq!(recs[0].priority, Priority::Urgent);
        assert_eq!(recs[0].title, "Immediate Action Recommended");
        assert_eq!(
            recs.iter()
                .filter(|rec| rec.title == "Immediate Action Recommended")
                .count(),
            1
        );
    }

    #[test]
    fn weak_domains_follow_ascending_percentage() {
        let domains = DomainBreakdown {
            speech_language: result(1, 4),
            literacy: result(0, 6),
            numeracy: result(4, 4),
            cognitive: result(2, 6),
        };
        let recs = generate_recommendations(
            &domains,
            &overall(AgeBand::Preschool, 7),
            4,
            AgeBand::Preschool,
            &[],
        );

        let domains_in_order: Vec<_> = recs.iter().filter_map(|rec| rec.domain).collect();
        assert_eq!(
            domains_in_order,
            vec![
                DevelopmentDomain::Literacy,
                DevelopmentDomain::SpeechLanguage,
                DevelopmentDomain::Cognitive,
                DevelopmentDomain::Numeracy,
            ]
        );
        assert_eq!(
            priorities(&recs),
            vec![
                Priority::Urgent,
                Priority::NeedsSupport,
                Priority::NeedsSupport,
                Priority::Strength,
            ]
        );
        assert_eq!(recs[0].title, "Pre-Reading Skills Need Attention");
    }

    #[test]
    fn developing_domains_get_no_domain_recommendation() {
        let domains = DomainBreakdown {
            speech_language: result(2, 4),
            literacy: result(3, 6),
            numeracy: result(2, 4),
            cognitive: result(4, 6),
        };
        let recs = generate_recommendations(
            &domains,
            &overall(AgeBand::Preschool, 11),
            5,
            AgeBand::Preschool,
            &[],
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn strength_tie_resolves_to_last_domain_in_fixed_order() {
        let domains = DomainBreakdown {
            speech_language: result(4, 4),
            literacy: result(8, 8),
            numeracy: result(2, 2),
            cognitive: result(6, 6),
        };
        let recs = generate_recommendations(
            &domains,
            &overall(AgeBand::School, 20),
            7,
            AgeBand::School,
            &[],
        );

        let strength: Vec<_> = recs
            .iter()
            .filter(|rec| rec.priority == Priority::Strength)
            .collect();
        assert_eq!(strength.len(), 1);
        assert_eq!(strength[0].domain, Some(DevelopmentDomain::Cognitive));
        assert_eq!(strength[0].title, "Excellent Focus & Memory Skills! 🌟");
    }

    #[test]
    fn strength_highlights_highest_percentage() {
        let domains = DomainBreakdown {
            speech_language: result(4, 4),
            literacy: result(7, 8),
            numeracy: result(1, 2),
            cognitive: result(5, 6),
        };
        let recs = generate_recommendations(
            &domains,
            &overall(AgeBand::School, 17),
            7,
            AgeBand::School,
            &[],
        );
        let strength = recs
            .iter()
            .find(|rec| rec.priority == Priority::Strength)
            .expect("a strength is highlighted");
        assert_eq!(strength.domain, Some(DevelopmentDomain::SpeechLanguage));
    }

    #[test]
    fn no_band_earns_the_maintain_message() {
        let domains = DomainBreakdown {
            speech_language: result(2, 4),
            literacy: result(4, 8),
            numeracy: result(1, 2),
            cognitive: result(3, 6),
        };
        for band in AgeBand::ordered() {
            for total in [20, 16, 10, 9, 0] {
                let overall = overall(band, total);
                let recs = generate_recommendations(&domains, &overall, 6, band, &[]);
                assert!(
                    !recs.iter().any(|rec| rec.priority == Priority::Maintain),
                    "{band} total {total} ({:?})",
                    overall.tier
                );
            }
        }
        assert_eq!(overall(AgeBand::School, 9).tier, OverallTier::Concern);
    }

    #[test]
    fn unassessed_domains_are_not_advised_on() {
        let domains = DomainBreakdown {
            speech_language: result(12, 12),
            literacy: result(0, 0),
            numeracy: result(0, 0),
            cognitive: result(8, 8),
        };
        let recs = generate_recommendations(
            &domains,
            &overall(AgeBand::Toddler, 20),
            3,
            AgeBand::Toddler,
            &[],
        );
        assert_eq!(priorities(&recs), vec![Priority::Strength]);
        assert_eq!(recs[0].domain, Some(DevelopmentDomain::Cognitive));
    }
}
