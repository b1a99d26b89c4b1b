use super::common::*;
use crate::screening::age::AgeBand;
use crate::screening::domain::ResultsRecord;
use crate::screening::results::{compute_results, compute_results_at};

fn assert_same_outcome(left: &ResultsRecord, right: &ResultsRecord) {
    assert_eq!(left.overall, right.overall);
    assert_eq!(left.red_flags, right.red_flags);
    assert_eq!(left.recommendations, right.recommendations);
    for ((domain, a), (_, b)) in left.domains.iter().zip(right.domains.iter()) {
        assert_eq!(a.score, b.score, "{domain}");
        assert_eq!(a.max, b.max, "{domain}");
        assert_eq!(a.percentage, b.percentage, "{domain}");
        assert_eq!(a.level, b.level, "{domain}");
    }
}

#[test]
fn response_order_does_not_change_the_outcome() {
    for band in AgeBand::ordered() {
        let responses = mixed_submission(band);
        let baseline = compute_results_at(&responses, 5, completed_at());

        let mut reversed = responses.clone();
        reversed.reverse();
        assert_same_outcome(&baseline, &compute_results_at(&reversed, 5, completed_at()));

        let mut rotated = responses.clone();
        rotated.rotate_left(4);
        assert_same_outcome(&baseline, &compute_results_at(&rotated, 5, completed_at()));
    }
}

#[test]
fn identical_inputs_give_identical_records() {
    let responses = mixed_submission(AgeBand::School);
    let first = compute_results_at(&responses, 8, completed_at());
    let second = compute_results_at(&responses, 8, completed_at());
    assert_eq!(first, second);

    // Only the completion time differs between live runs.
    let live_a = compute_results(&responses, 8);
    let live_b = compute_results(&responses, 8);
    assert_same_outcome(&live_a, &live_b);
    assert_eq!(live_a.pricing_preference, live_b.pricing_preference);
}

#[test]
fn pricing_answer_never_moves_scores_or_flags() {
    for band in AgeBand::ordered() {
        let base = best_except(band, &[2]);
        let without = compute_results_at(&base, 6, completed_at());

        for value in ["10000", "0", "-5", "lots", "", "99999999999999999999999", "C", "A"] {
            let with = compute_results_at(&with_pricing(base.clone(), value), 6, completed_at());
            assert_same_outcome(&without, &with);
        }
    }
}

#[test]
fn empty_submission_degrades_to_zero() {
    for age in [2, 4, 7] {
        let record = compute_results_at(&[], age, completed_at());
        assert_eq!(record.overall.total_score, 0);
        assert_eq!(record.overall.max_score, 0);
        assert_eq!(record.overall.percentage, 0.0);
        assert_eq!(
            record.overall.level,
            crate::screening::question_bank::bank_for(record.metadata.age_group)
                .thresholds
                .concern_label
        );
        for (domain, result) in record.domains.iter() {
            assert_eq!(result.max, 0, "{domain}");
            assert_eq!(result.percentage, 0.0, "{domain}");
        }
        assert!(record.red_flags.is_empty());
        assert!(record.recommendations.is_empty());
        assert_eq!(record.pricing_preference, None);
        assert_eq!(record.metadata.total_questions, 0);
    }
}

#[test]
fn ages_outside_the_bands_are_clamped() {
    let infant = compute_results_at(&best_answers(AgeBand::Toddler), 1, completed_at());
    assert_eq!(infant.metadata.age_group, AgeBand::Toddler);
    assert_eq!(infant.metadata.child_age, 1);

    let older = compute_results_at(&best_answers(AgeBand::School), 12, completed_at());
    assert_eq!(older.metadata.age_group, AgeBand::School);
    assert_eq!(older.overall.total_score, 20);
}
