// src/core/narrative.rs

//! Attack-scenario narratives.
//!
//! Findings are split by tier and matched against fixed service groups. Output order is
//! part of the contract: HIGH rules, MEDIUM rules, the LOW advisory, then one overall
//! summary line.

use crate::core::models::{AttackNarrative, RiskAssessment, RiskLevel};
use tracing::info;

/// Returned on its own when no ports are open.
pub const NO_OPEN_PORTS: &str = "No open ports detected. Current attack surface is minimal.";

/// A pattern that fires when any finding in its tier runs one of `triggers`.
struct ScenarioRule {
    triggers: &'static [&'static str],
    label: &'static str,
    title: &'static str,
    subject: &'static str,
    impact: &'static str,
}

impl ScenarioRule {
    fn matching<'a>(&self, findings: &[&'a RiskAssessment]) -> Vec<&'a RiskAssessment> {
        findings
            .iter()
            .copied()
            .filter(|f| self.triggers.contains(&f.service.as_str()))
            .collect()
    }

    fn render(&self, matched: &[&RiskAssessment]) -> String {
        format!(
            "{}: {} - Detected {} ({}). {}",
            self.label,
            self.title,
            self.subject,
            service_list(matched),
            self.impact
        )
    }
}

static HIGH_RISK_RULES: &[ScenarioRule] = &[
    ScenarioRule {
        triggers: &["RDP", "SSH", "Telnet"],
        label: "CRITICAL",
        title: "Remote Access Exploitation",
        subject: "remote access services",
        impact: "Attackers could exploit weak credentials or protocol vulnerabilities to gain initial system access. \
                 Implement MFA, use VPN, and enforce strong password policies.",
    },
    ScenarioRule {
        triggers: &["SMB", "FTP"],
        label: "CRITICAL",
        title: "Lateral Movement Vector",
        subject: "file sharing/transfer protocols",
        impact: "Successfully compromised systems could leverage these services to move laterally across the network \
                 and exfiltrate sensitive data.",
    },
    ScenarioRule {
        triggers: &["MySQL", "PostgreSQL"],
        label: "CRITICAL",
        title: "Database Compromise",
        subject: "exposed database services",
        impact: "Direct database access bypasses application security controls and could lead to complete data breach. \
                 Implement network segmentation immediately.",
    },
    ScenarioRule {
        triggers: &["Telnet"],
        label: "CRITICAL",
        title: "Credential Interception",
        subject: "plaintext remote login",
        impact: "Telnet transmits all data including credentials in plaintext. Network-based attackers can intercept \
                 login credentials without any special tools. This service must be disabled and replaced with SSH.",
    },
    ScenarioRule {
        triggers: &["VNC"],
        label: "CRITICAL",
        title: "Remote Desktop Hijacking",
        subject: "remote desktop sharing",
        impact: "VNC services often have weak or default passwords. Attackers can gain interactive desktop access for \
                 reconnaissance, data theft, or deploying malware. Enforce encryption and multi-factor authentication.",
    },
];

static MEDIUM_RISK_RULES: &[ScenarioRule] = &[
    ScenarioRule {
        triggers: &["HTTP", "HTTP-Proxy", "HTTPS-Alt"],
        label: "HIGH",
        title: "Web Service Exploitation",
        subject: "web services",
        impact: "These are common attack vectors for credential harvesting, session hijacking, or application exploits. \
                 Ensure all web services use HTTPS, apply security patches, and implement Web Application Firewalls.",
    },
    ScenarioRule {
        triggers: &["SMTP", "POP3", "IMAP"],
        label: "HIGH",
        title: "Email Service Abuse",
        subject: "email services",
        impact: "Misconfigured mail servers can be exploited as open relays for spam, phishing campaigns, or credential \
                 attacks. Enforce authentication, disable unnecessary protocols, and implement email filtering.",
    },
    ScenarioRule {
        triggers: &["DNS"],
        label: "HIGH",
        title: "DNS Infrastructure Abuse",
        subject: "exposed DNS services",
        impact: "DNS can be exploited for cache poisoning, amplification attacks, or unauthorized zone transfers. \
                 Implement access controls, rate limiting, and DNSSEC.",
    },
];

fn service_list(findings: &[&RiskAssessment]) -> String {
    findings
        .iter()
        .map(|f| format!("{}({})", f.service, f.port))
        .collect::<Vec<_>>()
        .join(", ")
}

fn tier<'a>(assessments: &'a [RiskAssessment], level: RiskLevel) -> Vec<&'a RiskAssessment> {
    assessments.iter().filter(|a| a.risk_level == level).collect()
}

fn apply_rules(rules: &[ScenarioRule], findings: &[&RiskAssessment], scenarios: &mut AttackNarrative) {
    for rule in rules {
        let matched = rule.matching(findings);
        if !matched.is_empty() {
            scenarios.push(rule.render(&matched));
        }
    }
}

/// Produces the ordered attack-scenario narrative for a set of findings.
pub fn simulate_attack_scenarios(assessments: &[RiskAssessment]) -> AttackNarrative {
    if assessments.is_empty() {
        return vec![NO_OPEN_PORTS.to_string()];
    }

    let high = tier(assessments, RiskLevel::High);
    let medium = tier(assessments, RiskLevel::Medium);
    let low = tier(assessments, RiskLevel::Low);

    let mut scenarios = AttackNarrative::new();
    apply_rules(HIGH_RISK_RULES, &high, &mut scenarios);
    apply_rules(MEDIUM_RISK_RULES, &medium, &mut scenarios);

    if !low.is_empty() {
        scenarios.push(format!(
            "RECOMMENDED: Maintain Vigilance - Detected low-risk services ({}). \
             While these services have proper security controls, continuous monitoring is essential. \
             Keep systems patched, monitor logs for suspicious activity, and maintain security awareness.",
            service_list(&low)
        ));
    }

    let summary = if !high.is_empty() {
        format!(
            "ATTACK SURFACE SUMMARY: System has {} critical vulnerabilities. \
             This represents a HIGH risk of compromise. Prioritize immediate remediation of all HIGH risk services \
             to prevent unauthorized access and data breach.",
            high.len()
        )
    } else if !medium.is_empty() {
        format!(
            "ATTACK SURFACE SUMMARY: System has {} moderate vulnerabilities. \
             These should be addressed within your regular patch and hardening cycle. Implement layered defenses.",
            medium.len()
        )
    } else {
        "ATTACK SURFACE SUMMARY: System shows minimal attack surface with only low-risk services detected. \
         Maintain current security posture through regular monitoring and updates."
            .to_string()
    };
    scenarios.push(summary);

    info!(scenarios = scenarios.len(), "Attack scenarios generated.");
    scenarios
}
