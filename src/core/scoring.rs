// src/core/scoring.rs

use crate::core::models::{ExecutiveSummary, Rating, RiskAssessment, RiskLevel, SecurityScore};
use tracing::{debug, info};

/// Computes the overall security score.
///
/// No open ports is a perfect 100. Otherwise every assessment subtracts its tier
/// weight (HIGH 30, MEDIUM 15, LOW 5) and the result bottoms out at 0.
pub fn calculate_security_score(assessments: &[RiskAssessment]) -> SecurityScore {
    if assessments.is_empty() {
        debug!("No open ports, returning maximum score.");
        return SecurityScore::MAX;
    }

    let total_risk: i64 = assessments.iter().map(|a| i64::from(a.risk_level.weight())).sum();
    let score = SecurityScore::clamped(100 - total_risk);

    info!(
        ports = assessments.len(),
        total_risk,
        score = score.value(),
        "Security score calculated."
    );
    score
}

/// Maps a score to its rating. Thresholds are inclusive on the lower bound.
pub fn security_rating(score: SecurityScore) -> Rating {
    match score.value() {
        90..=u8::MAX => Rating::Excellent,
        70..=89 => Rating::Good,
        50..=69 => Rating::Fair,
        30..=49 => Rating::Poor,
        _ => Rating::Critical,
    }
}

fn count_level(assessments: &[RiskAssessment], level: RiskLevel) -> usize {
    assessments.iter().filter(|a| a.risk_level == level).count()
}

/// Builds the executive summary for a set of assessments and their score.
pub fn generate_executive_summary(assessments: &[RiskAssessment], score: SecurityScore) -> ExecutiveSummary {
    let high_risk_count = count_level(assessments, RiskLevel::High);
    let medium_risk_count = count_level(assessments, RiskLevel::Medium);
    let low_risk_count = count_level(assessments, RiskLevel::Low);
    let rating = security_rating(score);

    let mut priority_actions = Vec::new();
    if high_risk_count > 0 {
        priority_actions.push(format!("Address {high_risk_count} HIGH risk service(s) immediately"));
    }
    if medium_risk_count > 0 {
        priority_actions.push(format!("Review {medium_risk_count} MEDIUM risk service(s)"));
    }
    if priority_actions.is_empty() {
        priority_actions.push("Continue monitoring and maintain security posture".to_string());
    }

    debug!(%rating, high_risk_count, medium_risk_count, low_risk_count, "Executive summary built.");

    ExecutiveSummary {
        security_score: score,
        rating,
        rating_description: rating.description().to_string(),
        rating_color: rating.color().to_string(),
        total_open_ports: assessments.len(),
        high_risk_count,
        medium_risk_count,
        low_risk_count,
        priority_actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(port: u16, level: RiskLevel) -> RiskAssessment {
        RiskAssessment {
            port,
            service: format!("svc{port}"),
            risk_level: level,
            risk_color: level.color().to_string(),
            reason: String::new(),
            mitigation: String::new(),
        }
    }

    #[test]
    fn empty_input_scores_100() {
        assert_eq!(calculate_security_score(&[]).value(), 100);
    }

    #[test]
    fn score_subtracts_tier_weights() {
        let input = [
            assessment(1, RiskLevel::High),
            assessment(2, RiskLevel::Medium),
            assessment(3, RiskLevel::Low),
        ];
        assert_eq!(calculate_security_score(&input).value(), 50);
    }

    #[test]
    fn score_never_drops_below_zero() {
        let input: Vec<_> = (1..=10).map(|p| assessment(p, RiskLevel::High)).collect();
        assert_eq!(calculate_security_score(&input).value(), 0);
    }

    #[test]
    fn score_is_monotonically_non_increasing() {
        let tiers = [RiskLevel::Low, RiskLevel::High, RiskLevel::Medium, RiskLevel::Low, RiskLevel::High];
        let mut input = Vec::new();
        let mut previous = calculate_security_score(&input);
        for (i, level) in tiers.into_iter().cycle().take(20).enumerate() {
            input.push(assessment(i as u16 + 1, level));
            let next = calculate_security_score(&input);
            assert!(next <= previous);
            previous = next;
        }
    }

    #[test]
    fn score_ignores_order() {
        let a = [assessment(1, RiskLevel::High), assessment(2, RiskLevel::Low)];
        let b = [assessment(2, RiskLevel::Low), assessment(1, RiskLevel::High)];
        assert_eq!(calculate_security_score(&a), calculate_security_score(&b));
    }

    #[test]
    fn rating_boundaries() {
        let cases = [
            (100, Rating::Excellent),
            (90, Rating::Excellent),
            (89, Rating::Good),
            (70, Rating::Good),
            (69, Rating::Fair),
            (50, Rating::Fair),
            (49, Rating::Poor),
            (30, Rating::Poor),
            (29, Rating::Critical),
            (0, Rating::Critical),
        ];
        for (score, expected) in cases {
            assert_eq!(security_rating(SecurityScore::clamped(score)), expected, "score {score}");
        }
    }

    #[test]
    fn clamping_keeps_scores_in_range() {
        assert_eq!(SecurityScore::clamped(-40).value(), 0);
        assert_eq!(SecurityScore::clamped(250).value(), 100);
    }

    #[test]
    fn summary_lists_high_and_medium_actions() {
        let input = [
            assessment(1, RiskLevel::High),
            assessment(2, RiskLevel::High),
            assessment(3, RiskLevel::Medium),
            assessment(4, RiskLevel::Low),
        ];
        let score = calculate_security_score(&input);
        let summary = generate_executive_summary(&input, score);
        assert_eq!(summary.security_score.value(), 20);
        assert_eq!(summary.rating, Rating::Critical);
        assert_eq!(summary.rating_color, "#dc3545");
        assert_eq!(summary.total_open_ports, 4);
        assert_eq!((summary.high_risk_count, summary.medium_risk_count, summary.low_risk_count), (2, 1, 1));
        assert_eq!(
            summary.priority_actions,
            vec![
                "Address 2 HIGH risk service(s) immediately".to_string(),
                "Review 1 MEDIUM risk service(s)".to_string(),
            ]
        );
    }

    #[test]
    fn summary_without_findings_keeps_posture() {
        for input in [vec![], vec![assessment(443, RiskLevel::Low)]] {
            let summary = generate_executive_summary(&input, calculate_security_score(&input));
            assert_eq!(summary.priority_actions, vec!["Continue monitoring and maintain security posture".to_string()]);
        }
        let summary = generate_executive_summary(&[], SecurityScore::MAX);
        assert_eq!(summary.rating, Rating::Excellent);
        assert_eq!(summary.rating_description, "Very secure configuration with minimal attack surface");
    }

    #[test]
    fn tier_counts_partition_the_findings() {
        use strum::IntoEnumIterator;

        let input = [
            assessment(1, RiskLevel::Medium),
            assessment(2, RiskLevel::Low),
            assessment(3, RiskLevel::Low),
        ];
        let summary = generate_executive_summary(&input, calculate_security_score(&input));
        let total: usize = RiskLevel::iter().map(|level| summary.count_for(level)).sum();
        assert_eq!(total, summary.total_open_ports);
        assert_eq!(summary.count_for(RiskLevel::Low), 2);
    }
}
